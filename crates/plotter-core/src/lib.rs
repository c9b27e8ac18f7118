// File: crates/plotter-core/src/lib.rs
// Summary: Core library entry point; exports the time-series plotter and its building blocks.

pub mod domain;
pub mod downsample;
pub mod error;
pub mod format;
pub mod geometry;
pub mod layout;
pub mod markup;
pub mod mount;
pub mod options;
pub mod plotter;
pub mod series;
pub mod theme;
pub mod types;

pub use domain::LinearDomain;
pub use downsample::lttb;
pub use error::{Axis, ChartError};
pub use format::{ChronoTimeFormatter, TimeFormatter, TimeUnit, Unit, UnitError, UnitFormatter, ValueFormatter};
pub use geometry::PlotRect;
pub use markup::{Canvas, SvgBuilder};
pub use mount::{MountTarget, SvgFile};
pub use options::{AxisYPosition, DisplayOptions};
pub use plotter::Plotter;
pub use series::{QueryResult, Series};
pub use theme::{Rgba, Theme};
pub use types::{ChartConfig, Margins};
