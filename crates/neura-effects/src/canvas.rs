//! Draw a [`Scene`] with ratatui's Braille canvas.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Line as Segment},
    },
};

use crate::{GlowTreatment, Scene, fade, lighten};

/// Opacity of the per-node halo.
const HALO_OPACITY: f32 = 0.35;
/// Halo radius relative to the node radius.
const HALO_SCALE: f32 = 2.2;

/// Widget drawing the network scene.
///
/// Scene coordinates grow downwards like screen pixels; the canvas grows
/// upwards, so y is flipped on the way in.
#[derive(Debug, Clone, Copy)]
pub struct NetworkCanvas<'a> {
    scene: &'a Scene,
    color: Color,
}

impl<'a> NetworkCanvas<'a> {
    pub fn new(scene: &'a Scene, color: Color) -> Self {
        Self { scene, color }
    }
}

impl Widget for NetworkCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = self.scene.viewport();
        if area.is_empty() || viewport.is_empty() || self.scene.nodes().is_empty() {
            return;
        }
        let height = f64::from(viewport.height);
        let flip = |y: f32| height - f64::from(y);
        let shared = self.scene.glow() == GlowTreatment::Shared;
        let glow_color = lighten(self.color, 0.35);

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, f64::from(viewport.width)])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                // Links first so nodes sit on top of them.
                for link in self.scene.links() {
                    let base = if shared { glow_color } else { self.color };
                    ctx.draw(&Segment::new(
                        f64::from(link.from.x),
                        flip(link.from.y),
                        f64::from(link.to.x),
                        flip(link.to.y),
                        fade(base, link.opacity),
                    ));
                }
                ctx.layer();

                if !shared {
                    for node in self.scene.nodes() {
                        ctx.draw(&Circle {
                            x: f64::from(node.position.x),
                            y: flip(node.position.y),
                            radius: f64::from(node.radius * HALO_SCALE),
                            color: fade(self.color, HALO_OPACITY),
                        });
                    }
                    ctx.layer();
                }

                let node_color = if shared { glow_color } else { self.color };
                for node in self.scene.nodes() {
                    ctx.draw(&Circle {
                        x: f64::from(node.position.x),
                        y: flip(node.position.y),
                        radius: f64::from(node.radius),
                        color: node_color,
                    });
                }
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use neura_core::{Vec2, Viewport};

    use super::*;
    use crate::NetworkView;

    fn painted_cells(buf: &Buffer) -> usize {
        buf.content.iter().filter(|cell| cell.symbol() != " ").count()
    }

    #[test]
    fn test_empty_scene_draws_nothing() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        let scene = Scene::new();
        NetworkCanvas::new(&scene, Color::Rgb(167, 139, 250)).render(area, &mut buf);
        assert_eq!(painted_cells(&buf), 0);
    }

    #[test]
    fn test_scene_is_drawn() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        let mut scene = Scene::new();
        scene.set_viewport(Viewport::from_cells(20, 10));
        scene.set_glow(GlowTreatment::PerElement);
        scene.add_node(0, Vec2::new(5.0, 5.0), 2.0);
        scene.add_node(1, Vec2::new(30.0, 30.0), 2.0);
        scene.add_link(0, Vec2::new(5.0, 5.0), Vec2::new(30.0, 30.0), 0.5);
        NetworkCanvas::new(&scene, Color::Rgb(167, 139, 250)).render(area, &mut buf);
        assert!(painted_cells(&buf) > 0);
    }
}
