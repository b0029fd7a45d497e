//! Drawing seam between the simulation and whatever puts pixels on screen

use crate::Aabb;
use glam::Vec2;

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const YELLOW: Color = Color::rgb(253, 249, 0);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const RED: Color = Color::rgb(230, 41, 55);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Immediate-mode drawing target for one frame.
///
/// Coordinates are window pixels with the origin at the top-left and y
/// pointing down. Text is positioned by its top-left corner.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_rect(&mut self, rect: Aabb, color: Color);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Width in pixels `text` would occupy at `size`
    fn measure_text(&self, text: &str, size: f32) -> f32;
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}
