//! The in-process boundary to the external renderer.

use astrogen_mesh::Mesh;
use astrogen_trail::ParticleId;
use glam::{Quat, Vec3};

use astrogen_color::Rgba;

/// Opaque handle to a submitted piece of geometry, issued by the renderer and
/// used for later positioning, lighting, and per-point updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderHandle(u64);

impl RenderHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// What the core asks of the renderer/scene-graph collaborator.
///
/// The core only produces data: vertex buffers at spawn time, transforms and
/// point opacities per tick, light colors for glowing bodies. Everything
/// display-related (windowing, blending, lighting math) lives behind this
/// trait and is out of scope here.
pub trait RenderSink {
    /// Accept a body's geometry. Called once per mesh at spawn time.
    fn submit_mesh(&mut self, mesh: &Mesh) -> RenderHandle;

    /// Position (and optionally orient) previously submitted geometry.
    fn update_transform(&mut self, handle: RenderHandle, position: Vec3, rotation: Option<Quat>);

    /// Set the opacity of one trail particle belonging to `handle`'s body.
    fn set_point_alpha(&mut self, handle: RenderHandle, particle: ParticleId, alpha: f32);

    /// Release the displayed representation of a removed trail particle.
    fn remove_point(&mut self, handle: RenderHandle, particle: ParticleId);

    /// Attach or update a point-light effect on a body. The core supplies
    /// color and attenuation only; the lighting math is the renderer's.
    fn apply_light(&mut self, handle: RenderHandle, color: Rgba, attenuation: [f32; 3]);
}

/// One recorded [`RenderSink`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum SinkCall {
    SubmitMesh { handle: RenderHandle, vertex_count: usize, triangle_count: usize },
    UpdateTransform { handle: RenderHandle, position: Vec3 },
    SetPointAlpha { handle: RenderHandle, particle: ParticleId, alpha: f32 },
    RemovePoint { handle: RenderHandle, particle: ParticleId },
    ApplyLight { handle: RenderHandle, color: Rgba },
}

/// A [`RenderSink`] that records every call. Backs the headless demo and the
/// scene tests; a real renderer would translate these calls into GPU work.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Vec<SinkCall>,
    next_handle: u64,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    pub fn submitted_meshes(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, SinkCall::SubmitMesh { .. })).count()
    }

    pub fn submitted_vertices(&self) -> usize {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::SubmitMesh { vertex_count, .. } => Some(vertex_count),
                _ => None,
            })
            .sum()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderSink for RecordingSink {
    fn submit_mesh(&mut self, mesh: &Mesh) -> RenderHandle {
        let handle = RenderHandle::new(self.next_handle);
        self.next_handle += 1;
        self.calls.push(SinkCall::SubmitMesh {
            handle,
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
        });
        handle
    }

    fn update_transform(&mut self, handle: RenderHandle, position: Vec3, _rotation: Option<Quat>) {
        self.calls.push(SinkCall::UpdateTransform { handle, position });
    }

    fn set_point_alpha(&mut self, handle: RenderHandle, particle: ParticleId, alpha: f32) {
        self.calls.push(SinkCall::SetPointAlpha { handle, particle, alpha });
    }

    fn remove_point(&mut self, handle: RenderHandle, particle: ParticleId) {
        self.calls.push(SinkCall::RemovePoint { handle, particle });
    }

    fn apply_light(&mut self, handle: RenderHandle, color: Rgba, _attenuation: [f32; 3]) {
        self.calls.push(SinkCall::ApplyLight { handle, color });
    }
}
