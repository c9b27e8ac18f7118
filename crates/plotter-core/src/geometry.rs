// File: crates/plotter-core/src/geometry.rs
// Summary: Plotting rectangle and the shared fraction -> pixel projection.

use crate::types::Margins;

/// The canvas area inside the margins, `[left, right] x [top, bottom]` in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    pub fn from_margins(width: f64, height: f64, margins: &Margins) -> Self {
        Self {
            left: margins.left,
            top: margins.top,
            right: width - margins.right,
            bottom: height - margins.bottom,
        }
    }

    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    /// Screen x for a horizontal fraction.
    #[inline]
    pub fn x_at(&self, fx: f64) -> f64 {
        fx * self.width() + self.left
    }

    /// Screen y for a vertical fraction; fraction 1 is the top edge.
    #[inline]
    pub fn y_at(&self, fy: f64) -> f64 {
        (1.0 - fy) * self.height() + self.top
    }

    /// Project a pair of domain fractions to pixels. Lines and point markers
    /// both go through here so they always land on the same pixel.
    #[inline]
    pub fn project(&self, fx: f64, fy: f64) -> (f64, f64) {
        (self.x_at(fx), self.y_at(fy))
    }
}
