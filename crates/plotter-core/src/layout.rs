// File: crates/plotter-core/src/layout.rs
// Summary: Margin fitting from display options; pure, data independent.

use crate::options::{AxisYPosition, DisplayOptions};
use crate::types::{ChartConfig, Margins};

/// Compute the four canvas margins for `options`.
///
/// Borders never change geometry, only whether their strokes are drawn.
pub fn fit(options: &DisplayOptions, config: &ChartConfig) -> Margins {
    let mut margins = config.insets;

    margins.left = match options.axis_y_position {
        AxisYPosition::Inside => config.insets.left,
        AxisYPosition::Outside => config.y_label_width,
    };

    // x tick labels are always drawn below the plot
    margins.bottom += config.x_label_allowance;

    margins
}
