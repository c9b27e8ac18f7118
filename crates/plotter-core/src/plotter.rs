// File: crates/plotter-core/src/plotter.rs
// Summary: Plotter orchestrates domain accumulation, layout fitting and markup generation.

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::LinearDomain;
use crate::downsample::lttb;
use crate::error::{Axis, ChartError};
use crate::format::{ChronoTimeFormatter, TimeFormatter, UnitFormatter, ValueFormatter};
use crate::geometry::PlotRect;
use crate::layout;
use crate::markup::{Canvas, SvgBuilder};
use crate::mount::{MountTarget, SvgFile};
use crate::options::{AxisYPosition, DisplayOptions};
use crate::series::{QueryResult, Series};
use crate::theme::{self, Theme};
use crate::types::{ChartConfig, Margins};

/// Renders query results into a fixed-size chart.
///
/// A plotter owns its two domains. Every render resets them and re-derives
/// them from the result being drawn, so one instance can be reused for many
/// renders but must not be shared between concurrent ones. All series share a
/// single y domain; series with different units are not told apart.
pub struct Plotter {
    config: ChartConfig,
    options: DisplayOptions,
    theme: Theme,
    x_domain: LinearDomain,
    y_domain: LinearDomain,
    value_formatter: Box<dyn ValueFormatter>,
    time_formatter: Box<dyn TimeFormatter>,
}

/// Everything a render draws, computed before the first primitive is emitted
/// so a failing render never leaves half a chart on the canvas.
struct Frame {
    rect: PlotRect,
    x_ticks: Vec<(f64, String)>,
    y_ticks: Vec<(f64, Option<String>)>,
    lines: Vec<Vec<(f64, f64)>>,
}

impl Plotter {
    pub fn new(config: ChartConfig, options: DisplayOptions) -> Result<Self, ChartError> {
        config.validate()?;
        let theme = theme::find(&config.theme);
        let time_formatter = ChronoTimeFormatter::new(config.time_unit);
        Ok(Self {
            config,
            options,
            theme,
            x_domain: LinearDomain::new(Axis::X),
            y_domain: LinearDomain::new(Axis::Y),
            value_formatter: Box::new(UnitFormatter),
            time_formatter: Box::new(time_formatter),
        })
    }

    pub fn with_value_formatter(mut self, formatter: impl ValueFormatter + 'static) -> Self {
        self.value_formatter = Box::new(formatter);
        self
    }

    pub fn with_time_formatter(mut self, formatter: impl TimeFormatter + 'static) -> Self {
        self.time_formatter = Box::new(formatter);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn options(&self) -> &DisplayOptions { &self.options }
    pub fn theme(&self) -> &Theme { &self.theme }

    /// Domains as left by the last render.
    pub fn x_domain(&self) -> &LinearDomain { &self.x_domain }
    pub fn y_domain(&self) -> &LinearDomain { &self.y_domain }

    pub fn margins(&self) -> Margins {
        layout::fit(&self.options, &self.config)
    }

    pub fn plot_rect(&self) -> PlotRect {
        PlotRect::from_margins(self.config.width, self.config.height, &self.margins())
    }

    /// Render `result` to a standalone SVG document.
    pub fn render(&mut self, result: &QueryResult) -> Result<String, ChartError> {
        let mut svg = SvgBuilder::new(self.config.width, self.config.height)
            .with_root_class(self.config.root_class.clone());
        if self.config.embed_style {
            svg = svg.with_style(self.theme.stylesheet(&self.config.root_class));
        }
        self.render_with(result, &mut svg)?;
        Ok(svg.finish())
    }

    /// Render and hand the markup to `target`.
    pub fn render_into(&mut self, result: &QueryResult, target: &mut impl MountTarget) -> anyhow::Result<()> {
        let markup = self.render(result)?;
        target.mount(markup)
    }

    /// Render to an SVG file at `path`.
    pub fn render_to_svg(&mut self, result: &QueryResult, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.render_into(result, &mut SvgFile::new(path))
    }

    /// Emit the chart's primitives into any [`Canvas`]: borders, x axis,
    /// y axis, then each series' line followed by its points.
    pub fn render_with<C: Canvas + ?Sized>(&mut self, result: &QueryResult, canvas: &mut C) -> Result<(), ChartError> {
        debug!(series = result.series.len(), unit = %result.unit, "rendering chart");
        for (index, series) in result.series.iter().enumerate() {
            series.check(index)?;
        }

        self.accumulate(result);
        let frame = self.frame(result)?;

        self.draw_borders(canvas, &frame.rect);
        self.draw_x_axis(canvas, &frame);
        self.draw_y_axis(canvas, &frame);
        for (index, line) in frame.lines.iter().enumerate() {
            canvas.begin_group(&format!("series series-{index}"));
            canvas.draw_path(line, "line");
            if self.options.points {
                for &(x, y) in line {
                    canvas.draw_point(x, y, self.config.point_radius, "point");
                }
            }
            canvas.end_group();
        }
        Ok(())
    }

    // ---- helpers ------------------------------------------------------------

    fn accumulate(&mut self, result: &QueryResult) {
        self.x_domain.reset();
        self.y_domain.reset();
        for (index, series) in result.series.iter().enumerate() {
            let skipped = self.y_domain.find_min_max(&series.values)
                + self.x_domain.find_min_max(&series.time);
            if skipped > 0 {
                warn!(series = index, skipped, "ignoring non-finite samples in domain");
            }
        }
        debug!(
            x_min = ?self.x_domain.min(), x_max = ?self.x_domain.max(),
            y_min = ?self.y_domain.min(), y_max = ?self.y_domain.max(),
            "domains resolved"
        );
    }

    fn frame(&self, result: &QueryResult) -> Result<Frame, ChartError> {
        let rect = self.plot_rect();

        let x_count = self.config.x_ticks_count;
        let x_span = self.x_domain.span().ok_or(ChartError::UninitializedDomain { axis: Axis::X })?;
        let mut x_ticks = Vec::with_capacity(x_count.saturating_sub(1));
        for i in 1..x_count {
            let fraction = i as f64 / x_count as f64;
            let t = self.x_domain.convert_screen_to_domain(fraction)?;
            x_ticks.push((rect.x_at(fraction), self.time_formatter.format_time(t, x_span)));
        }

        let y_count = self.config.y_ticks_count;
        let mut tick_values = Vec::with_capacity(y_count + 1);
        for i in 0..=y_count {
            tick_values.push(self.y_domain.convert_screen_to_domain(1.0 - i as f64 / y_count as f64)?);
        }
        let labels = self.value_formatter.format_values(&result.unit, &tick_values);
        let y_ticks = tick_values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let y = rect.y_at(1.0 - i as f64 / y_count as f64);
                let label = match self.options.axis_y_position {
                    // the last gridline is the bottom edge, where the x labels sit
                    AxisYPosition::Inside if i == y_count => None,
                    _ => Some(labels.get(i).cloned().unwrap_or_else(|| v.to_string())),
                };
                (y, label)
            })
            .collect();

        let lines = result
            .series
            .iter()
            .enumerate()
            .map(|(index, series)| self.project_series(index, series, &rect))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Frame { rect, x_ticks, y_ticks, lines })
    }

    fn project_series(&self, index: usize, series: &Series, rect: &PlotRect) -> Result<Vec<(f64, f64)>, ChartError> {
        let mut samples = series.finite_points();
        let dropped = series.len() - samples.len();
        if dropped > 0 {
            warn!(series = index, dropped, "skipping non-finite samples");
        }
        if let Some(max) = self.config.max_points {
            if samples.len() > max {
                debug!(series = index, from = samples.len(), to = max, "downsampling series");
                samples = lttb(&samples, max);
            }
        }
        samples
            .into_iter()
            .map(|(t, v)| {
                let fx = self.x_domain.convert_domain_to_screen(t)?;
                let fy = self.y_domain.convert_domain_to_screen(v)?;
                Ok(rect.project(fx, fy))
            })
            .collect()
    }

    fn draw_borders<C: Canvas + ?Sized>(&self, canvas: &mut C, r: &PlotRect) {
        let o = &self.options;
        if o.border_top {
            canvas.draw_line(r.left, r.top, r.right, r.top, "border");
        }
        if o.border_right {
            canvas.draw_line(r.right, r.top, r.right, r.bottom, "border");
        }
        if o.border_bottom {
            canvas.draw_line(r.left, r.bottom, r.right, r.bottom, "border");
        }
        if o.border_left {
            canvas.draw_line(r.left, r.top, r.left, r.bottom, "border");
        }
    }

    fn draw_x_axis<C: Canvas + ?Sized>(&self, canvas: &mut C, frame: &Frame) {
        let r = &frame.rect;
        canvas.begin_group("axis x");
        for (x, label) in &frame.x_ticks {
            canvas.draw_line(*x, r.top, *x, r.bottom, "grid");
            canvas.draw_text(*x, r.bottom + self.config.x_label_padding, label, None);
        }
        canvas.end_group();
    }

    fn draw_y_axis<C: Canvas + ?Sized>(&self, canvas: &mut C, frame: &Frame) {
        let r = &frame.rect;
        canvas.begin_group("axis y");
        for (y, label) in &frame.y_ticks {
            canvas.draw_line(r.left, *y, r.right, *y, "grid");
            let Some(label) = label else { continue };
            match self.options.axis_y_position {
                AxisYPosition::Inside => {
                    canvas.draw_text(r.left + self.config.y_label_padding_inside, *y, label, Some("inside"));
                }
                AxisYPosition::Outside => {
                    canvas.draw_text(r.left - self.config.y_label_padding_outside, *y, label, Some("outside"));
                }
            }
        }
        canvas.end_group();
    }
}
