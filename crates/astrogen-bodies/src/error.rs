//! Body construction error types.

use astrogen_mesh::MeshError;
use astrogen_trail::TrailError;

/// Errors raised while constructing a celestial body.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    /// Geometry generation rejected the parameters.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Trail configuration rejected the parameters.
    #[error(transparent)]
    Trail(#[from] TrailError),

    /// A body-level parameter was invalid.
    #[error("invalid {name} ({value}): {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub(crate) fn ensure_finite(name: &'static str, value: f32) -> Result<(), BodyError> {
    if !value.is_finite() {
        return Err(BodyError::InvalidParameter {
            name,
            value: value as f64,
            reason: "must be finite",
        });
    }
    Ok(())
}
