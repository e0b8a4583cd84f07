//! Drawing-surface contract.
//!
//! The simulation never talks to a canvas directly. The web bridge implements
//! [`Surface`] on top of `CanvasRenderingContext2d`; tests and headless hosts
//! use the recording [`DrawList`](super::draw_list::DrawList).

use glam::Vec2;

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity, 0.0 = invisible, 1.0 = opaque.
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string, e.g. `rgba(255, 255, 255, 0.4)`.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A 2D raster target with the three primitives the field needs.
pub trait Surface {
    /// Erase the rectangle (0, 0)..(width, height).
    fn clear(&mut self, width: f32, height: f32);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a straight line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    /// Resize the backing store. Surfaces without one ignore this.
    fn resize(&mut self, _width: f32, _height: f32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_keeps_channels() {
        let c = Rgba::WHITE.with_alpha(0.25);
        assert_eq!((c.r, c.g, c.b), (255, 255, 255));
        assert_eq!(c.a, 0.25);
    }

    #[test]
    fn css_formatting() {
        assert_eq!(Rgba::BLACK.with_alpha(0.5).to_css(), "rgba(0, 0, 0, 0.5)");
        assert_eq!(Rgba::WHITE.to_css(), "rgba(255, 255, 255, 1)");
    }
}
