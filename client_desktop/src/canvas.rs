//! Frame draw list
//!
//! Collects the game's draw calls into GPU instances, grouped into runs of
//! consecutive calls that share a mesh so submission order is preserved.

use game_core::{Aabb, Canvas, Color};
use glam::Vec2;

use crate::font;
use crate::renderer::resources::InstanceData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Quad,
    Circle,
}

/// A contiguous slice of the instance list drawn with one mesh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRun {
    pub shape: Shape,
    pub start: u32,
    pub count: u32,
}

#[derive(Debug, Default)]
pub struct DrawList {
    pub clear: Option<Color>,
    pub instances: Vec<InstanceData>,
    pub runs: Vec<DrawRun>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.clear = None;
        self.instances.clear();
        self.runs.clear();
    }

    fn push(&mut self, shape: Shape, instance: InstanceData) {
        let index = self.instances.len() as u32;
        self.instances.push(instance);

        match self.runs.last_mut() {
            Some(run) if run.shape == shape => run.count += 1,
            _ => self.runs.push(DrawRun {
                shape,
                start: index,
                count: 1,
            }),
        }
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        // Anything recorded before a clear would be wiped anyway
        self.reset();
        self.clear = Some(color);
    }

    fn draw_rect(&mut self, rect: Aabb, color: Color) {
        let size = rect.size();
        self.push(
            Shape::Quad,
            InstanceData {
                transform: [rect.min.x, rect.min.y, size.x, size.y],
                tint: linear_tint(color),
            },
        );
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(
            Shape::Circle,
            InstanceData {
                transform: [center.x, center.y, radius, radius],
                tint: linear_tint(color),
            },
        );
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        font::measure(text, size)
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        let tint = linear_tint(color);
        font::layout(text, pos, size, |min, extent| {
            self.push(
                Shape::Quad,
                InstanceData {
                    transform: [min.x, min.y, extent.x, extent.y],
                    tint,
                },
            );
        });
    }
}

/// sRGB to linear, since the surface format is sRGB
pub fn linear_tint(color: Color) -> [f32; 4] {
    let [r, g, b, a] = color.to_array();
    [to_linear(r), to_linear(g), to_linear(b), a]
}

fn to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn clear_color(color: Color) -> wgpu::Color {
    let [r, g, b, a] = linear_tint(color);
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}
