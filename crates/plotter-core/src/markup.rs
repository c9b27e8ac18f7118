// File: crates/plotter-core/src/markup.rs
// Summary: Drawing-primitive sink trait and the SVG markup builder.

use std::fmt::Write as _;

/// Sequential sink for drawing primitives. Later primitives overlay earlier
/// ones. Implementations do not validate coordinates; the plotter only ever
/// hands over finite values.
pub trait Canvas {
    /// Open a group of primitives sharing `class` (e.g. `"axis x"`).
    fn begin_group(&mut self, class: &str);
    fn end_group(&mut self);
    /// Straight segment; borders and gridlines differ only by `class`.
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, class: &str);
    fn draw_text(&mut self, x: f64, y: f64, text: &str, class: Option<&str>);
    /// One connected polyline through `points`, in order.
    fn draw_path(&mut self, points: &[(f64, f64)], class: &str);
    fn draw_point(&mut self, x: f64, y: f64, radius: f64, class: &str);
}

/// Accumulates primitives as SVG elements inside a fixed `width x height` viewBox.
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    root_class: String,
    style: Option<String>,
    body: String,
}

impl SvgBuilder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            root_class: "chart".to_string(),
            style: None,
            body: String::new(),
        }
    }

    pub fn with_root_class(mut self, class: impl Into<String>) -> Self {
        self.root_class = class.into();
        self
    }

    /// Embed a stylesheet as the first child of the root element.
    pub fn with_style(mut self, css: impl Into<String>) -> Self {
        self.style = Some(css.into());
        self
    }

    /// Close the document and return the markup.
    pub fn finish(self) -> String {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"{}\" viewBox=\"0 0 {} {}\">",
            escape_xml(&self.root_class),
            self.width,
            self.height
        );
        if let Some(css) = &self.style {
            let _ = write!(out, "<style>{}</style>", escape_xml(css));
        }
        out.push_str(&self.body);
        out.push_str("</svg>");
        out
    }
}

impl Canvas for SvgBuilder {
    fn begin_group(&mut self, class: &str) {
        let _ = write!(self.body, "<g class=\"{}\">", escape_xml(class));
    }

    fn end_group(&mut self) {
        self.body.push_str("</g>");
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, class: &str) {
        let _ = write!(
            self.body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" class=\"{}\"/>",
            x1, y1, x2, y2,
            escape_xml(class)
        );
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, class: Option<&str>) {
        let class_attr = class
            .map(|c| format!(" class=\"{}\"", escape_xml(c)))
            .unwrap_or_default();
        let _ = write!(
            self.body,
            "<text x=\"{:.2}\" y=\"{:.2}\"{}>{}</text>",
            x, y, class_attr,
            escape_xml(text)
        );
    }

    fn draw_path(&mut self, points: &[(f64, f64)], class: &str) {
        let mut d = String::new();
        for (i, (x, y)) in points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 { d.push(' '); }
            let _ = write!(d, "{cmd}{x:.2} {y:.2}");
        }
        let _ = write!(self.body, "<path class=\"{}\" d=\"{}\"/>", escape_xml(class), d);
    }

    fn draw_point(&mut self, x: f64, y: f64, radius: f64, class: &str) {
        let _ = write!(
            self.body,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" class=\"{}\"/>",
            x, y, radius,
            escape_xml(class)
        );
    }
}

/// Escape the five XML special characters.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
