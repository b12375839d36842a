// File: crates/demo/src/main.rs
// Summary: Demo loads an (at,value) CSV (or a built-in sample) and renders line graph SVGs.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use graph_core::{line_graph, DataPoint, GraphOptions, Margin, Position, Theme};
use graph_svg::{SvgDocument, SvgSurface};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept a CSV path, a WIDTHxHEIGHT surface size, and a margin override
    // ("top=20,left=32,...") as positional args; all optional.
    let mut args = std::env::args().skip(1);
    let input = args.next();
    let size = args.next();
    let margin_spec = args.next();

    let (width, height) = match size.as_deref() {
        Some(s) => parse_size(s).with_context(|| format!("bad size '{s}', expected WIDTHxHEIGHT"))?,
        None => (640.0, 360.0),
    };
    let margin = match margin_spec.as_deref() {
        Some(s) => parse_margin(s)?,
        None => Margin::default(),
    };

    let (data, stem) = match input {
        Some(path) => {
            let path = PathBuf::from(path);
            println!("Using input file: {}", path.display());
            let data = load_series_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("series")
                .to_string();
            (data, stem)
        }
        None => (sample_series(), "sample".to_string()),
    };
    println!("Loaded {} points", data.len());

    if data.is_empty() {
        anyhow::bail!("no points loaded — check headers/columns.");
    }

    for theme in [Theme::light(), Theme::dark()] {
        let mut doc = SvgDocument::new();
        doc.add_surface(SvgSurface::new("graphArea", width, height));

        let options = GraphOptions {
            margin,
            theme,
            ..GraphOptions::default()
        };
        line_graph(&mut doc, "graphArea", &data, options)?;

        let out = out_name(&stem, theme.name);
        doc.surface("graphArea")
            .context("surface vanished after rendering")?
            .write_to(&out)
            .with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

/// Built-in sample: one day of readings.
fn sample_series() -> Vec<DataPoint> {
    let at = |h, m, s| Utc.with_ymd_and_hms(2018, 6, 26, h, m, s).unwrap();
    vec![
        DataPoint::new(at(4, 45, 45), 10.0),
        DataPoint::new(at(7, 30, 24), 13.0),
        DataPoint::new(at(12, 30, 37), 11.0),
        DataPoint::new(at(15, 25, 13), 25.0),
    ]
}

fn parse_size(s: &str) -> Result<(f64, f64)> {
    let lower = s.to_ascii_lowercase();
    let (w, h) = lower.split_once('x').context("missing 'x' separator")?;
    Ok((w.trim().parse()?, h.trim().parse()?))
}

/// Parse "top=20,right=20,bottom=20,left=32" into a margin override.
fn parse_margin(spec: &str) -> Result<Margin> {
    let mut entries = Vec::new();
    for part in spec.split(',').filter(|p| !p.trim().is_empty()) {
        let (key, value) = part
            .split_once('=')
            .with_context(|| format!("bad margin entry '{part}', expected key=value"))?;
        let value: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("bad margin value in '{part}'"))?;
        entries.push((key.trim(), value));
    }
    Ok(Margin::from_entries(entries)?)
}

/// Produce output file name like target/out/<stem>_<theme>.svg
fn out_name(stem: &str, theme: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("{stem}_{theme}.svg"));
    out
}

/// Load an (at, value) CSV with headers into a series.
fn load_series_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };
    let i_at = idx(&["at", "time", "timestamp", "date", "x"]);
    let i_value = idx(&["value", "y", "v"]);
    let (i_at, i_value) = match (i_at, i_value) {
        (Some(at), Some(value)) => (at, value),
        _ => anyhow::bail!("missing `at`/`value` columns (headers: {headers:?})"),
    };

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let at = rec.get(i_at).and_then(parse_position);
        let value = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok());
        if let (Some(at), Some(value)) = (at, value) {
            out.push(DataPoint { at, value });
        }
    }
    Ok(out)
}

/// Tolerant position parser: epoch seconds/millis, datetime text, or a
/// plain number.
fn parse_position(s: &str) -> Option<Position> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        if n > 10_i64.pow(12) {
            return Utc.timestamp_millis_opt(n).single().map(Position::from);
        }
        if n > 10_i64.pow(9) {
            return Utc.timestamp_opt(n, 0).single().map(Position::from);
        }
        return Some(Position::Numeric(n as f64));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(Position::Temporal(Utc.from_utc_datetime(&dt)));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Position::Temporal(dt.with_timezone(&Utc)));
    }
    s.parse::<f64>().ok().map(Position::Numeric)
}
