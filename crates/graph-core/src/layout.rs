// File: crates/graph-core/src/layout.rs
// Summary: Pure layout computation: scales and axis specs from data extent.

use chrono::{DateTime, Utc};

use crate::data::{DataPoint, Position};
use crate::error::{GraphError, GraphResult};
use crate::margin::Margin;
use crate::scale::{LinearScale, PositionScale, ScaleKind, TimeScale};

/// Ticks requested per axis.
pub const TICK_COUNT: usize = 4;

/// Where an axis sits relative to the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// One tick: pixel offset along the axis and its preformatted label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

/// Geometry of one rendered axis group.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    pub orient: AxisOrient,
    /// Pixel translate of the axis group: y for a bottom axis, x for a left one.
    pub shift: f64,
    /// Domain border line, from..to in pixels along the axis direction.
    pub line: (f64, f64),
    /// Length of each gridline, extending from the axis across the plot.
    pub grid_span: f64,
    pub ticks: Vec<Tick>,
}

/// Scales and axis specs computed for one surface. Pure geometry; rendering
/// happens in a separate step.
#[derive(Clone, Debug)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub h_scale: PositionScale,
    pub v_scale: LinearScale,
    pub h_axis: AxisSpec,
    pub v_axis: AxisSpec,
}

/// Compute scales and axis specs for a series on a width x height surface.
///
/// The horizontal domain spans the first and last point (the series is
/// assumed sorted ascending by position); the vertical domain spans zero to
/// the largest value, mapped onto an inverted range so larger values plot
/// higher.
pub fn compute_layout(
    data: &[DataPoint],
    margin: Margin,
    width: f64,
    height: f64,
    kind: ScaleKind,
) -> GraphResult<Layout> {
    margin.validate()?;

    let (first, last) = match (data.first(), data.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(GraphError::EmptySeries),
    };
    if let Some(index) = data.iter().position(|p| p.at.kind() != kind) {
        return Err(GraphError::MixedSeries(index));
    }

    let h_range = (margin.left, width - margin.right);
    let h_scale = match (kind, first.at, last.at) {
        (ScaleKind::Numeric, Position::Numeric(a), Position::Numeric(b)) => {
            PositionScale::Numeric(LinearScale::new((a, b), h_range))
        }
        (ScaleKind::Temporal, Position::Temporal(a), Position::Temporal(b)) => {
            PositionScale::Temporal(TimeScale::new((a, b), h_range))
        }
        // mismatches were rejected above
        _ => return Err(GraphError::MixedSeries(0)),
    };

    let v_max = data.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    let v_scale = LinearScale::new((0.0, v_max), (height - margin.bottom, margin.top));

    let h_axis = AxisSpec {
        orient: AxisOrient::Bottom,
        shift: height - margin.bottom,
        line: (margin.left, width - margin.right),
        grid_span: height - margin.top - margin.bottom,
        ticks: h_ticks(&h_scale),
    };
    let v_axis = AxisSpec {
        orient: AxisOrient::Left,
        shift: margin.left,
        line: (margin.top, height - margin.bottom),
        grid_span: width - margin.left - margin.right,
        ticks: v_scale
            .ticks(TICK_COUNT)
            .into_iter()
            .map(|v| Tick {
                offset: v_scale.scale(v),
                label: fmt_value(v),
            })
            .collect(),
    };

    Ok(Layout {
        width,
        height,
        margin,
        h_scale,
        v_scale,
        h_axis,
        v_axis,
    })
}

fn h_ticks(scale: &PositionScale) -> Vec<Tick> {
    match scale {
        PositionScale::Numeric(scale) => scale
            .ticks(TICK_COUNT)
            .into_iter()
            .map(|v| Tick {
                offset: scale.scale(v),
                label: fmt_value(v),
            })
            .collect(),
        PositionScale::Temporal(scale) => scale
            .ticks(TICK_COUNT)
            .into_iter()
            .map(|t| Tick {
                offset: scale.scale(t),
                label: fmt_instant(t),
            })
            .collect(),
    }
}

/// Numeric tick label: integers bare, extremes in scientific notation,
/// everything else with two decimals.
pub fn fmt_value(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else if v.abs() >= 1000.0 || v.abs() < 0.01 {
        format!("{v:.2e}")
    } else if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

/// Temporal tick label: month-day and time of day, year dropped.
pub fn fmt_instant(t: DateTime<Utc>) -> String {
    t.format("%m-%d %H:%M:%S").to_string()
}
