// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports the public graph API.

pub mod data;
pub mod error;
pub mod graph;
pub mod layout;
pub mod margin;
pub mod render;
pub mod scale;
pub mod theme;

pub use data::{DataPoint, Position};
pub use error::{GraphError, GraphResult};
pub use graph::{line_graph, Graph, GraphOptions};
pub use layout::{compute_layout, AxisOrient, AxisSpec, Layout, Tick, TICK_COUNT};
pub use margin::Margin;
pub use scale::{nice_ticks, LinearScale, PositionScale, ScaleKind, TimeScale};
pub use theme::Theme;
