// File: crates/graph-core/src/margin.rs
// Summary: Margin record with validation.

use crate::error::{GraphError, GraphResult};

/// Inset padding reserving space for the axes, in pixels.
/// Contract: all fields are finite once validated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Check that every field is a finite number.
    pub fn validate(&self) -> GraphResult<()> {
        let fields = [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ];
        for (key, value) in fields {
            if !value.is_finite() {
                return Err(GraphError::InvalidMargin(format!(
                    "margin `{key}` is not a finite number"
                )));
            }
        }
        Ok(())
    }

    /// Build a margin from dynamic (key, value) entries, e.g. a parsed CLI
    /// override. Keys outside top/right/bottom/left and non-finite values are
    /// rejected; keys not supplied keep their default values.
    pub fn from_entries<'a, I>(entries: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut margin = Margin::default();
        for (key, value) in entries {
            let slot = match key {
                "top" => &mut margin.top,
                "right" => &mut margin.right,
                "bottom" => &mut margin.bottom,
                "left" => &mut margin.left,
                other => {
                    return Err(GraphError::InvalidMargin(format!(
                        "unknown margin key `{other}`"
                    )))
                }
            };
            if !value.is_finite() {
                return Err(GraphError::InvalidMargin(format!(
                    "margin `{key}` is not a finite number"
                )));
            }
            *slot = value;
        }
        Ok(margin)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20.0, 20.0, 20.0, 32.0)
    }
}
