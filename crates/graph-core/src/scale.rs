// File: crates/graph-core/src/scale.rs
// Summary: Linear and temporal scales mapping data domains onto pixel ranges.

use chrono::{DateTime, TimeZone, Utc};

use crate::data::{DataPoint, Position};
use crate::error::{GraphError, GraphResult};

/// Which kind of horizontal scale to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Numeric,
    Temporal,
}

impl ScaleKind {
    /// Infer the kind from the first point of a series.
    pub fn of(data: &[DataPoint]) -> GraphResult<Self> {
        match data.first() {
            Some(point) => Ok(point.at.kind()),
            None => Err(GraphError::EmptySeries),
        }
    }
}

/// Affine map from a data domain onto a pixel range. The range may be
/// inverted (r0 > r1), which the vertical axis relies on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, mut d1) = domain;
        // A collapsed domain would leave the map undefined; widen it so the
        // first domain end still lands on the first range end.
        if (d1 - d0).abs() < f64::EPSILON {
            d1 = d0 + 1.0;
        }
        Self {
            d0,
            d1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.r0, self.r1)
    }

    #[inline]
    pub fn scale(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    /// Nice tick values clipped to the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.d0 <= self.d1 {
            (self.d0, self.d1)
        } else {
            (self.d1, self.d0)
        };
        nice_ticks(lo, hi, count)
    }
}

/// Linear scale over epoch milliseconds with calendar endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        let d0 = domain.0.timestamp_millis() as f64;
        let d1 = domain.1.timestamp_millis() as f64;
        Self {
            inner: LinearScale::new((d0, d1), range),
        }
    }

    pub fn range(&self) -> (f64, f64) {
        self.inner.range()
    }

    #[inline]
    pub fn scale(&self, t: DateTime<Utc>) -> f64 {
        self.inner.scale(t.timestamp_millis() as f64)
    }

    /// Nice tick instants across the domain.
    pub fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        self.inner
            .ticks(count)
            .into_iter()
            .filter_map(|ms| Utc.timestamp_millis_opt(ms as i64).single())
            .collect()
    }
}

/// Horizontal scale: numeric or temporal, per the series' position kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PositionScale {
    Numeric(LinearScale),
    Temporal(TimeScale),
}

impl PositionScale {
    pub fn kind(&self) -> ScaleKind {
        match self {
            PositionScale::Numeric(_) => ScaleKind::Numeric,
            PositionScale::Temporal(_) => ScaleKind::Temporal,
        }
    }

    pub fn range(&self) -> (f64, f64) {
        match self {
            PositionScale::Numeric(scale) => scale.range(),
            PositionScale::Temporal(scale) => scale.range(),
        }
    }

    /// Map a position to a pixel coordinate; `None` if the position's kind
    /// does not match the scale.
    pub fn scale(&self, at: Position) -> Option<f64> {
        match (self, at) {
            (PositionScale::Numeric(scale), Position::Numeric(v)) => Some(scale.scale(v)),
            (PositionScale::Temporal(scale), Position::Temporal(t)) => Some(scale.scale(t)),
            _ => None,
        }
    }
}

/// Round a span to a "nice" 1/2/5 x 10^k value.
fn nice_span(span: f64, round: bool) -> f64 {
    let exp = span.log10().floor();
    let frac = span / 10f64.powf(exp);
    let nice = if round {
        if frac < 1.5 {
            1.0
        } else if frac < 3.0 {
            2.0
        } else if frac < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * 10f64.powf(exp)
}

/// Nice tick positions inside [min, max].
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![(min + max) / 2.0];
    }

    let span = nice_span(max - min, false);
    let step = nice_span(span / (count - 1) as f64, true);
    let first = (min / step).floor() * step;
    let last = (max / step).ceil() * step;

    let mut ticks = Vec::new();
    let mut tick = first;
    while tick <= last + step * 0.5 {
        if tick >= min - step * 1e-3 && tick <= max + step * 1e-3 {
            ticks.push(tick);
        }
        tick += step;
    }
    ticks
}
