//! Retained in-memory rendering surface.

use neura_core::{Vec2, Viewport};

use crate::{GlowTreatment, NetworkView};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneNode {
    pub position: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLink {
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

/// Keeps the last written state of every element so it can be drawn later.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    viewport: Viewport,
    glow: GlowTreatment,
    nodes: Vec<SceneNode>,
    links: Vec<SceneLink>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn glow(&self) -> GlowTreatment {
        self.glow
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn links(&self) -> &[SceneLink] {
        &self.links
    }
}

impl NetworkView for Scene {
    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn set_glow(&mut self, glow: GlowTreatment) {
        self.glow = glow;
    }

    fn add_node(&mut self, index: usize, position: Vec2, radius: f32) {
        let node = SceneNode { position, radius };
        if index < self.nodes.len() {
            self.nodes[index] = node;
        } else {
            self.nodes.resize(index, node);
            self.nodes.push(node);
        }
    }

    fn add_link(&mut self, index: usize, from: Vec2, to: Vec2, opacity: f32) {
        let link = SceneLink { from, to, opacity };
        if index < self.links.len() {
            self.links[index] = link;
        } else {
            self.links.resize(index, link);
            self.links.push(link);
        }
    }

    fn set_node_position(&mut self, index: usize, position: Vec2) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.position = position;
        }
    }

    fn set_link_endpoints(&mut self, index: usize, from: Vec2, to: Vec2) {
        if let Some(link) = self.links.get_mut(index) {
            link.from = from;
            link.to = to;
        }
    }

    fn set_link_opacity(&mut self, index: usize, opacity: f32) {
        if let Some(link) = self.links.get_mut(index) {
            link.opacity = opacity;
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.links.clear();
    }

    fn child_count(&self) -> usize {
        self.nodes.len() + self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_to_unknown_indices_are_ignored() {
        let mut scene = Scene::new();
        scene.set_node_position(3, Vec2::new(1.0, 1.0));
        scene.set_link_opacity(0, 0.5);
        assert_eq!(scene.child_count(), 0);
    }

    #[test]
    fn test_add_update_clear() {
        let mut scene = Scene::new();
        scene.add_node(0, Vec2::new(1.0, 2.0), 3.0);
        scene.add_node(1, Vec2::new(4.0, 5.0), 2.0);
        scene.add_link(0, Vec2::new(1.0, 2.0), Vec2::new(4.0, 5.0), 0.3);
        scene.set_node_position(1, Vec2::new(6.0, 7.0));
        scene.set_link_endpoints(0, Vec2::new(1.0, 2.0), Vec2::new(6.0, 7.0));
        assert_eq!(scene.child_count(), 3);
        assert_eq!(scene.nodes()[1].position, Vec2::new(6.0, 7.0));
        assert_eq!(scene.links()[0].to, Vec2::new(6.0, 7.0));

        scene.clear();
        scene.clear();
        assert_eq!(scene.child_count(), 0);
    }
}
