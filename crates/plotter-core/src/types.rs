// File: crates/plotter-core/src/types.rs
// Summary: Shared types and defaults (canvas size, insets, tick counts, chart config).

use serde::Deserialize;

use crate::error::ChartError;
use crate::format::TimeUnit;

/// Default viewBox width in pixels.
pub const WIDTH: f64 = 1240.0;
/// Default viewBox height in pixels.
pub const HEIGHT: f64 = 180.0;

/// Screen margins, in pixels.
/// Contract: all fields are finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }

    fn is_valid(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|m| m.is_finite() && *m >= 0.0)
    }
}

impl Default for Margins {
    /// Minimal canvas-edge insets; the top leaves room for the uppermost y label.
    fn default() -> Self {
        Self::new(10.0, 1.0, 1.0, 1.0)
    }
}

/// Per-plotter chart configuration. Every field has a documented default so
/// callers can override any of them without touching the renderer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// viewBox width (default 1240).
    pub width: f64,
    /// viewBox height (default 180).
    pub height: f64,
    /// Number of x intervals; `x_ticks_count - 1` interior gridlines are drawn (default 12).
    pub x_ticks_count: usize,
    /// Number of y intervals; `y_ticks_count + 1` gridlines are drawn (default 5).
    pub y_ticks_count: usize,
    /// Left gutter reserved for y labels when they sit outside the plot (default 50).
    pub y_label_width: f64,
    /// Extra bottom margin reserved for x tick labels (default 16).
    pub x_label_allowance: f64,
    /// Minimal canvas-edge insets.
    pub insets: Margins,
    /// Gap between the plot bottom and the x labels (default 5).
    pub x_label_padding: f64,
    /// Gap between the left margin and inside y labels (default 3).
    pub y_label_padding_inside: f64,
    /// Gap between the left margin and outside y labels (default 8).
    pub y_label_padding_outside: f64,
    /// Point marker radius (default 3).
    pub point_radius: f64,
    /// Unit of the x timestamps, used by the default time formatter.
    pub time_unit: TimeUnit,
    /// Reduce series with more finite samples than this before drawing (LTTB).
    pub max_points: Option<usize>,
    /// Theme preset name (see `theme::find`).
    pub theme: String,
    /// Embed a `<style>` block generated from the theme into the SVG.
    pub embed_style: bool,
    /// Class of the root `<svg>` element.
    pub root_class: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            x_ticks_count: 12,
            y_ticks_count: 5,
            y_label_width: 50.0,
            x_label_allowance: 16.0,
            insets: Margins::default(),
            x_label_padding: 5.0,
            y_label_padding_inside: 3.0,
            y_label_padding_outside: 8.0,
            point_radius: 3.0,
            time_unit: TimeUnit::default(),
            max_points: None,
            theme: "light".to_string(),
            embed_style: false,
            root_class: "chart".to_string(),
        }
    }
}

impl ChartConfig {
    /// Check the configuration can produce a non-empty plotting rectangle.
    /// Layout-dependent checks use the widest possible margins so the result
    /// holds for every `DisplayOptions`.
    pub fn validate(&self) -> Result<(), ChartError> {
        let dims_ok = self.width.is_finite() && self.height.is_finite()
            && self.width > 0.0 && self.height > 0.0;
        if !dims_ok {
            return Err(ChartError::InvalidConfig(format!(
                "canvas must be positive and finite, got {}x{}",
                self.width, self.height
            )));
        }
        if self.x_ticks_count == 0 || self.y_ticks_count == 0 {
            return Err(ChartError::InvalidConfig("tick counts must be at least 1".into()));
        }
        if !self.insets.is_valid() {
            return Err(ChartError::InvalidConfig("insets must be finite and non-negative".into()));
        }
        let extras = [
            self.y_label_width,
            self.x_label_allowance,
            self.x_label_padding,
            self.y_label_padding_inside,
            self.y_label_padding_outside,
            self.point_radius,
        ];
        if extras.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ChartError::InvalidConfig(
                "label sizes, paddings and point radius must be finite and non-negative".into(),
            ));
        }
        let widest_left = self.insets.left.max(self.y_label_width);
        if self.width - widest_left - self.insets.right <= 0.0 {
            return Err(ChartError::InvalidConfig("margins leave no horizontal plotting area".into()));
        }
        if self.height - self.insets.top - self.insets.bottom - self.x_label_allowance <= 0.0 {
            return Err(ChartError::InvalidConfig("margins leave no vertical plotting area".into()));
        }
        if self.max_points.is_some_and(|n| n < 2) {
            return Err(ChartError::InvalidConfig("max_points must be at least 2".into()));
        }
        Ok(())
    }
}
