// File: crates/graph-core/src/data.rs
// Summary: Data model for positions and points.

use chrono::{DateTime, Utc};

use crate::scale::ScaleKind;

/// Horizontal position of a data point: a plain number or a calendar
/// instant. The variant decides which kind of horizontal scale applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    Numeric(f64),
    Temporal(DateTime<Utc>),
}

impl Position {
    pub fn kind(&self) -> ScaleKind {
        match self {
            Position::Numeric(_) => ScaleKind::Numeric,
            Position::Temporal(_) => ScaleKind::Temporal,
        }
    }
}

impl From<f64> for Position {
    fn from(v: f64) -> Self {
        Position::Numeric(v)
    }
}

impl From<DateTime<Utc>> for Position {
    fn from(t: DateTime<Utc>) -> Self {
        Position::Temporal(t)
    }
}

/// One (position, value) sample. Owned by the caller; graphs borrow the
/// series and never copy it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub at: Position,
    pub value: f64,
}

impl DataPoint {
    pub fn new(at: impl Into<Position>, value: f64) -> Self {
        Self {
            at: at.into(),
            value,
        }
    }
}
