// File: crates/plotter-core/src/options.rs
// Summary: Caller-supplied display options (y label placement, borders, point markers).

use serde::Deserialize;

/// Where the y tick labels sit relative to the plotting rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisYPosition {
    /// Labels sit inside the plot, right of the left edge; no gutter is reserved.
    Inside,
    /// Labels sit in a gutter left of the plot.
    #[default]
    Outside,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub axis_y_position: AxisYPosition,
    pub border_top: bool,
    pub border_right: bool,
    pub border_bottom: bool,
    pub border_left: bool,
    /// Draw a marker for every sample in addition to the line.
    pub points: bool,
}

impl DisplayOptions {
    pub fn with_axis_y_position(mut self, position: AxisYPosition) -> Self {
        self.axis_y_position = position;
        self
    }

    /// Enable all four borders.
    pub fn with_borders(mut self) -> Self {
        self.border_top = true;
        self.border_right = true;
        self.border_bottom = true;
        self.border_left = true;
        self
    }

    pub fn with_points(mut self, points: bool) -> Self {
        self.points = points;
        self
    }
}
