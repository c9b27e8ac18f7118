// File: crates/plotter-core/src/theme.rs
// Summary: Color themes keyed by markup style class; feeds embedded SVG styles and raster backends.

use std::fmt::Write as _;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// CSS `rgba()` notation.
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f64 / 255.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub border: Rgba,
    pub grid: Rgba,
    pub label: Rgba,
    pub line: Rgba,
    pub point: Rgba,
    pub font_size: f64,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::opaque(250, 250, 252),
            border: Rgba::opaque(60, 60, 70),
            grid: Rgba::opaque(230, 230, 235),
            label: Rgba::opaque(100, 100, 110),
            line: Rgba::opaque(32, 120, 200),
            point: Rgba::opaque(32, 120, 200),
            font_size: 10.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::opaque(18, 18, 20),
            border: Rgba::opaque(180, 180, 190),
            grid: Rgba::opaque(40, 40, 45),
            label: Rgba::opaque(150, 150, 160),
            line: Rgba::opaque(64, 160, 255),
            point: Rgba::opaque(64, 160, 255),
            font_size: 10.0,
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Rgba::opaque(0x00, 0x2b, 0x36), // base03
            border: Rgba::opaque(0x93, 0xa1, 0xa1),     // base1
            grid: Rgba::opaque(0x07, 0x36, 0x42),       // base02
            label: Rgba::opaque(0x83, 0x94, 0x96),      // base0
            line: Rgba::opaque(0x26, 0x8b, 0xd2),       // blue
            point: Rgba::opaque(0x2a, 0xa1, 0x98),      // cyan
            font_size: 10.0,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::opaque(0x00, 0x00, 0x00),
            border: Rgba::opaque(0xff, 0xff, 0xff),
            grid: Rgba::opaque(0x22, 0x22, 0x22),
            label: Rgba::opaque(0xcc, 0xcc, 0xcc),
            line: Rgba::opaque(0x00, 0xff, 0xff),
            point: Rgba::opaque(0xff, 0xff, 0x00),
            font_size: 11.0,
        }
    }

    /// Color for a primitive drawn with style `class`.
    pub fn color_for(&self, class: &str) -> Rgba {
        match class {
            "border" => self.border,
            "grid" => self.grid,
            "line" => self.line,
            "point" => self.point,
            _ => self.label,
        }
    }

    /// Stylesheet matching the class names the plotter emits.
    pub fn stylesheet(&self, root_class: &str) -> String {
        let mut css = String::new();
        let root = format!("svg.{root_class}");
        let _ = write!(css, "{root} {{ background: {}; font-size: {}px; }} ", self.background.to_css(), self.font_size);
        let _ = write!(css, "{root} .border {{ stroke: {}; stroke-width: 1; }} ", self.border.to_css());
        let _ = write!(css, "{root} .grid {{ stroke: {}; stroke-width: 1; }} ", self.grid.to_css());
        let _ = write!(css, "{root} text {{ fill: {}; }} ", self.label.to_css());
        let _ = write!(css, "{root} .axis.x text {{ text-anchor: middle; dominant-baseline: hanging; }} ");
        let _ = write!(css, "{root} .axis.y text {{ dominant-baseline: middle; }} ");
        let _ = write!(css, "{root} .axis.y text.outside {{ text-anchor: end; }} ");
        let _ = write!(css, "{root} .line {{ fill: none; stroke: {}; stroke-width: 2; }} ", self.line.to_css());
        let _ = write!(css, "{root} .point {{ fill: {}; }}", self.point.to_css());
        css
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
