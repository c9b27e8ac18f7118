// File: crates/plotter-core/src/error.rs
// Summary: Error taxonomy for rendering; structural errors abort a render.

use thiserror::Error;

/// Which of the two chart axes an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    /// A conversion was requested before any finite value was observed.
    #[error("{axis} domain has no observed values")]
    UninitializedDomain { axis: Axis },

    #[error("series {index} is malformed: {time_len} timestamps but {values_len} values")]
    MalformedSeries {
        index: usize,
        time_len: usize,
        values_len: usize,
    },

    #[error("invalid chart configuration: {0}")]
    InvalidConfig(String),
}
