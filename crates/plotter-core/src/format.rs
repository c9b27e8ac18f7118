// File: crates/plotter-core/src/format.rs
// Summary: Tick label formatters: unit-aware batch value formatting and chrono-backed time labels.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

const MAX_DECIMALS: usize = 6;
const BINARY_PREFIXES: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

// ---- values ------------------------------------------------------------------

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
}

/// Units the default formatter knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    None,
    Percent,
    Seconds,
    Milliseconds,
    Bytes,
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Unit::None),
            "percent" | "%" => Ok(Unit::Percent),
            "seconds" | "s" => Ok(Unit::Seconds),
            "milliseconds" | "ms" => Ok(Unit::Milliseconds),
            "bytes" | "b" => Ok(Unit::Bytes),
            _ => Err(UnitError::UnknownUnit(s.to_string())),
        }
    }
}

/// Batch formatter for y tick values. Implementations must return exactly one
/// label per input value, in order.
pub trait ValueFormatter {
    fn format_values(&self, unit: &str, values: &[f64]) -> Vec<String>;
}

/// Default unit-aware formatter: one shared precision (and, for bytes, one
/// shared prefix) across the whole batch.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnitFormatter;

impl ValueFormatter for UnitFormatter {
    fn format_values(&self, unit: &str, values: &[f64]) -> Vec<String> {
        match unit.parse::<Unit>() {
            Ok(Unit::None) => fixed(values, ""),
            Ok(Unit::Percent) => fixed(values, "%"),
            Ok(Unit::Seconds) => fixed(values, "s"),
            Ok(Unit::Milliseconds) => fixed(values, "ms"),
            Ok(Unit::Bytes) => bytes(values),
            Err(err) => {
                warn!(%err, "falling back to raw tick values");
                values.iter().map(|v| v.to_string()).collect()
            }
        }
    }
}

fn fixed(values: &[f64], suffix: &str) -> Vec<String> {
    let decimals = shared_decimals(values);
    values.iter().map(|&v| format!("{}{}", fmt_decimal(v, decimals), suffix)).collect()
}

fn bytes(values: &[f64]) -> Vec<String> {
    let largest = values.iter().filter(|v| v.is_finite()).fold(0.0f64, |m, v| m.max(v.abs()));
    let mut exp = 0;
    while exp + 1 < BINARY_PREFIXES.len() && largest >= 1024f64.powi(exp as i32 + 1) {
        exp += 1;
    }
    let scale = 1024f64.powi(exp as i32);
    let scaled: Vec<f64> = values.iter().map(|v| v / scale).collect();
    let suffix = format!(" {}", BINARY_PREFIXES[exp]);
    fixed(&scaled, &suffix)
}

/// Decimals needed to tell adjacent tick values apart, clamped to `0..=6`.
fn shared_decimals(values: &[f64]) -> usize {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    let gap = sorted
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| *d > 0.0)
        .fold(f64::INFINITY, f64::min);

    if !gap.is_finite() {
        // every tick is the same value
        return match sorted.first() {
            Some(v) if v.fract() != 0.0 => 2,
            _ => 0,
        };
    }

    let mut decimals = (-gap.log10()).ceil().max(0.0) as usize;
    let scaled = gap * 10f64.powi(decimals as i32);
    if (scaled - scaled.round()).abs() > 1e-6 * scaled.max(1.0) {
        decimals += 1;
    }
    decimals.min(MAX_DECIMALS)
}

fn fmt_decimal(v: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, v);
    // avoid "-0" / "-0.00" labels
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        return s[1..].to_string();
    }
    s
}

// ---- time --------------------------------------------------------------------

/// Resolution of the x timestamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    #[default]
    Milliseconds,
    Microseconds,
}

impl TimeUnit {
    fn per_second(&self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Milliseconds => 1e3,
            TimeUnit::Microseconds => 1e6,
        }
    }

    /// Convert a timestamp to UTC, `None` when it is outside chrono's range.
    pub fn to_datetime(&self, t: f64) -> Option<DateTime<Utc>> {
        let micros = (t / self.per_second() * 1e6).round();
        if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
            return None;
        }
        DateTime::<Utc>::from_timestamp_micros(micros as i64)
    }

    /// Length of `span` timestamp units in seconds.
    pub fn to_seconds(&self, span: f64) -> f64 {
        span / self.per_second()
    }
}

/// Produces the x tick label for one timestamp.
pub trait TimeFormatter {
    /// `span` is the width of the whole x domain, in the same unit as `t`;
    /// formatters use it to pick a coarser or finer pattern.
    fn format_time(&self, t: f64, span: f64) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ChronoTimeFormatter {
    pub unit: TimeUnit,
}

impl ChronoTimeFormatter {
    pub fn new(unit: TimeUnit) -> Self {
        Self { unit }
    }

    fn pattern(&self, span: f64) -> &'static str {
        let secs = self.unit.to_seconds(span);
        if secs >= 2.0 * 86_400.0 {
            "%Y-%m-%d"
        } else if secs >= 3_600.0 {
            "%m-%d %H:%M"
        } else {
            "%H:%M:%S"
        }
    }
}

impl TimeFormatter for ChronoTimeFormatter {
    fn format_time(&self, t: f64, span: f64) -> String {
        match self.unit.to_datetime(t) {
            Some(dt) => dt.format(self.pattern(span)).to_string(),
            None => t.to_string(),
        }
    }
}
