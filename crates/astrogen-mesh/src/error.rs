//! Geometry generation error types.

/// Errors produced by the geometry generators.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// A generation parameter was rejected before any geometry was built.
    #[error("invalid {name} ({value}): {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the generator signature.
        name: &'static str,
        /// The offending value, widened to f64 for display.
        value: f64,
        reason: &'static str,
    },

    /// A primitive referenced a vertex index outside the vertex buffer.
    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },
}

/// Reject non-finite or non-positive length-like parameters (radius, scale).
pub(crate) fn ensure_positive(name: &'static str, value: f32) -> Result<(), MeshError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MeshError::InvalidParameter {
            name,
            value: value as f64,
            reason: "must be finite and positive",
        });
    }
    Ok(())
}

/// Reject non-finite or negative parameters (thickness, depth may be zero).
pub(crate) fn ensure_non_negative(name: &'static str, value: f32) -> Result<(), MeshError> {
    if !value.is_finite() || value < 0.0 {
        return Err(MeshError::InvalidParameter {
            name,
            value: value as f64,
            reason: "must be finite and non-negative",
        });
    }
    Ok(())
}

/// Reject counts below a minimum (segments, arms, points per arm).
pub(crate) fn ensure_at_least(name: &'static str, value: u32, min: u32) -> Result<(), MeshError> {
    if value < min {
        return Err(MeshError::InvalidParameter {
            name,
            value: value as f64,
            reason: if min == 1 { "must be at least 1" } else { "below required minimum" },
        });
    }
    Ok(())
}
