// File: crates/plotter-core/src/domain.rs
// Summary: Linear domain accumulator with domain <-> screen-fraction transforms.

use crate::error::{Axis, ChartError};

/// Observed value range along one axis, mapped linearly onto `[0, 1]`.
///
/// The domain starts empty and grows with every [`find_min_max`] call. Once
/// `min == max` (a flat series or a single sample) the domain is degenerate:
/// every value maps to the centre `0.5` and every fraction maps back to `min`.
///
/// [`find_min_max`]: LinearDomain::find_min_max
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearDomain {
    axis: Axis,
    bounds: Option<(f64, f64)>,
}

impl LinearDomain {
    pub fn new(axis: Axis) -> Self {
        Self { axis, bounds: None }
    }

    pub fn axis(&self) -> Axis { self.axis }

    /// Forget all observed values.
    pub fn reset(&mut self) {
        self.bounds = None;
    }

    /// Extend the range to cover every finite value in `values`.
    /// Returns how many non-finite values were ignored.
    pub fn find_min_max(&mut self, values: &[f64]) -> usize {
        let mut skipped = 0;
        for &v in values {
            if !v.is_finite() {
                skipped += 1;
                continue;
            }
            self.bounds = Some(match self.bounds {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        skipped
    }

    pub fn min(&self) -> Option<f64> { self.bounds.map(|(lo, _)| lo) }
    pub fn max(&self) -> Option<f64> { self.bounds.map(|(_, hi)| hi) }

    /// `max - min`, once initialized.
    pub fn span(&self) -> Option<f64> { self.bounds.map(|(lo, hi)| hi - lo) }

    pub fn is_initialized(&self) -> bool { self.bounds.is_some() }

    pub fn is_degenerate(&self) -> bool {
        matches!(self.bounds, Some((lo, hi)) if lo == hi)
    }

    fn bounds(&self) -> Result<(f64, f64), ChartError> {
        self.bounds.ok_or(ChartError::UninitializedDomain { axis: self.axis })
    }

    /// Map a domain value to its screen fraction `(v - min) / (max - min)`.
    #[inline]
    pub fn convert_domain_to_screen(&self, v: f64) -> Result<f64, ChartError> {
        let (lo, hi) = self.bounds()?;
        if hi == lo {
            return Ok(0.5);
        }
        // halved operands: max - min overflows for ranges wider than f64::MAX
        Ok((v / 2.0 - lo / 2.0) / half_span(lo, hi))
    }

    /// Map a screen fraction back to a domain value `min + t * (max - min)`.
    #[inline]
    pub fn convert_screen_to_domain(&self, t: f64) -> Result<f64, ChartError> {
        let (lo, hi) = self.bounds()?;
        if hi == lo {
            return Ok(lo);
        }
        Ok((lo / 2.0 + t * half_span(lo, hi)) * 2.0)
    }
}

#[inline]
fn half_span(lo: f64, hi: f64) -> f64 {
    hi / 2.0 - lo / 2.0
}
