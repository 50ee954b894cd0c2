use neura_core::{Vec2, Viewport};

use crate::GlowTreatment;

/// Rendering surface for the network effect.
///
/// Nodes and links are addressed by the index they were added with. Writes
/// to an index that was never added are ignored.
pub trait NetworkView {
    /// Set the coordinate space of the surface.
    fn set_viewport(&mut self, viewport: Viewport);

    fn set_glow(&mut self, glow: GlowTreatment);

    fn add_node(&mut self, index: usize, position: Vec2, radius: f32);

    fn add_link(&mut self, index: usize, from: Vec2, to: Vec2, opacity: f32);

    fn set_node_position(&mut self, index: usize, position: Vec2);

    fn set_link_endpoints(&mut self, index: usize, from: Vec2, to: Vec2);

    fn set_link_opacity(&mut self, index: usize, opacity: f32);

    /// Remove every node and link.
    fn clear(&mut self);

    /// Number of drawn elements (nodes plus links).
    fn child_count(&self) -> usize;
}
