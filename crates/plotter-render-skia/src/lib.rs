// File: crates/plotter-render-skia/src/lib.rs
// Summary: Skia CPU raster backend implementing the plotter's Canvas trait.

use anyhow::{anyhow, Context, Result};
use plotter_core::{Canvas, Plotter, QueryResult, Rgba, Theme};
use skia_safe as skia;
use tracing::debug;

/// Paints primitives onto a CPU raster surface using a theme's colors.
///
/// SVG relies on a stylesheet for text alignment; here the alignment is
/// derived from the enclosing group and the label class instead.
pub struct SkiaCanvas {
    surface: skia::Surface,
    theme: Theme,
    font: skia::Font,
    groups: Vec<String>,
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

impl SkiaCanvas {
    pub fn new(width: i32, height: i32, theme: Theme) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;
        surface.canvas().clear(color(theme.background));
        let mut font = skia::Font::default();
        font.set_size(theme.font_size as f32);
        Ok(Self { surface, theme, font, groups: Vec::new() })
    }

    fn stroke(&self, class: &str) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_color(color(self.theme.color_for(class)));
        paint.set_stroke_width(if class == "line" { 2.0 } else { 1.0 });
        paint
    }

    fn in_x_axis(&self) -> bool {
        self.groups.iter().any(|g| g == "axis x")
    }

    /// Encode the surface as PNG bytes.
    pub fn encode_png(mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }
}

impl Canvas for SkiaCanvas {
    fn begin_group(&mut self, class: &str) {
        self.groups.push(class.to_string());
    }

    fn end_group(&mut self) {
        self.groups.pop();
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, class: &str) {
        let paint = self.stroke(class);
        self.surface
            .canvas()
            .draw_line((x1 as f32, y1 as f32), (x2 as f32, y2 as f32), &paint);
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, class: Option<&str>) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color(self.theme.label));
        let (width, _) = self.font.measure_str(text, Some(&paint));
        let size = self.font.size();
        let (x, y) = (x as f32, y as f32);
        // baseline placement mirrors the embedded SVG stylesheet
        let origin = if self.in_x_axis() {
            (x - width * 0.5, y + size)
        } else if class == Some("outside") {
            (x - width, y + size * 0.35)
        } else {
            (x, y + size * 0.35)
        };
        self.surface.canvas().draw_str(text, origin, &self.font, &paint);
    }

    fn draw_path(&mut self, points: &[(f64, f64)], class: &str) {
        let Some(((x0, y0), rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to((*x0 as f32, *y0 as f32));
        for &(x, y) in rest {
            path.line_to((x as f32, y as f32));
        }
        let paint = self.stroke(class);
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn draw_point(&mut self, x: f64, y: f64, radius: f64, class: &str) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color(self.theme.color_for(class)));
        self.surface.canvas().draw_circle((x as f32, y as f32), radius as f32, &paint);
    }
}

/// Render `result` with `plotter` into PNG bytes.
pub fn render_png_bytes(plotter: &mut Plotter, result: &QueryResult) -> Result<Vec<u8>> {
    let cfg = plotter.config();
    let (width, height) = (cfg.width.round() as i32, cfg.height.round() as i32);
    let mut canvas = SkiaCanvas::new(width, height, *plotter.theme())?;
    plotter.render_with(result, &mut canvas)?;
    debug!(width, height, "rasterized chart");
    canvas.encode_png()
}

/// Render `result` to a PNG file at `path`.
pub fn render_png(plotter: &mut Plotter, result: &QueryResult, path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = render_png_bytes(plotter, result)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}
