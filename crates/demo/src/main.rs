// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV of (time, value[, series]) samples and renders it to SVG (and PNG).

use anyhow::{Context, Result};
use plotter_core::{ChartConfig, DisplayOptions, Plotter, QueryResult, Series};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Optional settings file: top-level `unit`, plus `[chart]` and `[display]` tables.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoSettings {
    unit: Option<String>,
    chart: ChartConfig,
    display: DisplayOptions,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next().unwrap_or_else(|| "crates/demo/data/samples.csv".to_string()));
    let settings = match args.next() {
        Some(path) => load_settings(Path::new(&path))?,
        None => DemoSettings::default(),
    };

    let series = load_series_csv(&input)
        .with_context(|| format!("failed to load CSV '{}'", input.display()))?;
    if series.is_empty() {
        anyhow::bail!("no samples loaded from '{}', check headers/delimiter", input.display());
    }
    let samples: usize = series.iter().map(|s| s.len()).sum();
    info!(path = %input.display(), series = series.len(), samples, "loaded samples");

    let mut result = QueryResult::new(settings.unit.unwrap_or_else(|| "none".to_string()));
    for s in series {
        result.add_series(s);
    }

    let mut plotter = Plotter::new(settings.chart, settings.display)?;
    let out = out_name(&input, "svg");
    plotter.render_to_svg(&result, &out)?;
    info!(path = %out.display(), "wrote svg");

    #[cfg(feature = "png")]
    {
        let png = out.with_extension("png");
        plotter_render_skia::render_png(&mut plotter, &result, &png)?;
        info!(path = %png.display(), "wrote png");
    }

    Ok(())
}

fn load_settings(path: &Path) -> Result<DemoSettings> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .build()
        .with_context(|| format!("reading settings '{}'", path.display()))?;
    Ok(settings.try_deserialize()?)
}

/// Produce output file name like target/out/chart_<stem>.<ext>
fn out_name(input: &Path, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("samples");
    PathBuf::from("target/out").join(format!("chart_{stem}.{ext}"))
}

/// Load a CSV with a time column, a value column and an optional series
/// column. Series keep the order in which their names first appear.
fn load_series_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["time", "timestamp", "date", "datetime"])
        .context("no time column (time/timestamp/date/datetime)")?;
    let i_value = idx(&["value", "values", "y", "measurement"])
        .context("no value column (value/y/measurement)")?;
    let i_series = idx(&["series", "name", "metric"]);

    let mut names: Vec<String> = Vec::new();
    let mut out: Vec<Series> = Vec::new();
    let mut skipped = 0usize;

    for rec in rdr.records() {
        let rec = rec?;
        let t = rec.get(i_time).and_then(parse_time_millis);
        // empty or unparsable values become NaN and are skipped by the plotter
        let v = rec
            .get(i_value)
            .map(|s| s.trim().parse::<f64>().unwrap_or(f64::NAN));
        let (Some(t), Some(v)) = (t, v) else {
            skipped += 1;
            continue;
        };

        let name = i_series.and_then(|i| rec.get(i)).unwrap_or("").trim().to_string();
        let slot = match names.iter().position(|n| *n == name) {
            Some(slot) => slot,
            None => {
                names.push(name);
                out.push(Series::default());
                out.len() - 1
            }
        };
        out[slot].time.push(t);
        out[slot].values.push(v);
    }

    if skipped > 0 {
        warn!(skipped, "ignored rows without a usable timestamp");
    }
    Ok(out)
}

/// Numeric epoch (seconds or milliseconds) or RFC 3339, as epoch milliseconds.
fn parse_time_millis(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<f64>() {
        // anything below 10^11 is taken to be epoch seconds
        return Some(if n.abs() < 1e11 { n * 1000.0 } else { n });
    }
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp_millis() as f64)
}
