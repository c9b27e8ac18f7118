// File: crates/plotter-core/src/series.rs
// Summary: Series and query-result models handed to the plotter by the caller.
// Notes:
// - Fields stay public so callers can build series from columnar buffers
//   directly; `Plotter::render` re-checks the length invariant before drawing.

use crate::error::ChartError;

/// One line on the chart: parallel timestamp and value columns.
/// Invariant: `time.len() == values.len()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub time: Vec<f64>,
    pub values: Vec<f64>,
}

impl Series {
    /// Construct a series, rejecting mismatched column lengths.
    pub fn try_new(time: Vec<f64>, values: Vec<f64>) -> Result<Self, ChartError> {
        let s = Self { time, values };
        s.check(0)?;
        Ok(s)
    }

    /// Build from `(time, value)` pairs; always well formed.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (time, values) = pairs.into_iter().unzip();
        Self { time, values }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Fail with `MalformedSeries` (reported as series `index`) when the columns disagree.
    pub fn check(&self, index: usize) -> Result<(), ChartError> {
        if self.time.len() != self.values.len() {
            return Err(ChartError::MalformedSeries {
                index,
                time_len: self.time.len(),
                values_len: self.values.len(),
            });
        }
        Ok(())
    }

    /// Samples whose timestamp and value are both finite, in caller order.
    pub fn finite_points(&self) -> Vec<(f64, f64)> {
        self.time
            .iter()
            .zip(&self.values)
            .filter(|(t, v)| t.is_finite() && v.is_finite())
            .map(|(&t, &v)| (t, v))
            .collect()
    }
}

/// A fetched query result: every series shares one unit and one y domain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryResult {
    pub series: Vec<Series>,
    pub unit: String,
}

impl QueryResult {
    pub fn new(unit: impl Into<String>) -> Self {
        Self { series: Vec::new(), unit: unit.into() }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }
}
