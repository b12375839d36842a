// File: crates/graph-core/src/error.rs
// Summary: Error taxonomy for graph construction and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// Unknown margin key or non-finite margin value.
    #[error("invalid margin: {0}")]
    InvalidMargin(String),

    /// The series has no points; scale domains need at least one.
    #[error("series has no points")]
    EmptySeries,

    /// A position whose kind does not match the horizontal scale.
    #[error("series mixes numeric and temporal positions (first at index {0})")]
    MixedSeries(usize),

    /// No drawing surface registered under the requested id.
    #[error("no drawing surface with id `{0}`")]
    SurfaceMissing(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
