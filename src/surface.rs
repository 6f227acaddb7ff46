// src/surface.rs
//! The drawing primitives a pattern is made of.

use crate::color::Rgb;

/// Side length of the square drawing area, in logical units.
pub const CANVAS_SIZE: u32 = 400;

/// A 2D drawing surface with a current fill color and an optional stroke.
///
/// Shapes are filled with the current fill color and, when a stroke is set,
/// outlined with a one-unit stroke. Ellipses are positioned by center,
/// rectangles by their top-left corner.
pub trait Surface {
    /// Paint the whole surface with `color`.
    fn clear(&mut self, color: Rgb);
    fn fill(&mut self, color: Rgb);
    fn stroke(&mut self, color: Rgb);
    fn no_stroke(&mut self);
    fn ellipse(&mut self, cx: f64, cy: f64, diameter: f64);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
}

/// One call against a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Clear(Rgb),
    Fill(Rgb),
    Stroke(Rgb),
    NoStroke,
    Ellipse { cx: f64, cy: f64, diameter: f64 },
    Rect { x: f64, y: f64, w: f64, h: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
}

/// A surface that keeps the calls made on it instead of painting pixels.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }
}

impl Surface for Recorder {
    fn clear(&mut self, color: Rgb) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill(&mut self, color: Rgb) {
        self.calls.push(DrawCall::Fill(color));
    }

    fn stroke(&mut self, color: Rgb) {
        self.calls.push(DrawCall::Stroke(color));
    }

    fn no_stroke(&mut self) {
        self.calls.push(DrawCall::NoStroke);
    }

    fn ellipse(&mut self, cx: f64, cy: f64, diameter: f64) {
        self.calls.push(DrawCall::Ellipse { cx, cy, diameter });
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.calls.push(DrawCall::Rect { x, y, w, h });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.calls.push(DrawCall::Line { x1, y1, x2, y2 });
    }
}
