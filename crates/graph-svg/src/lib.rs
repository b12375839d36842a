// File: crates/graph-svg/src/lib.rs
// Summary: Library entry point; exports surfaces, documents, and attribute carriers.

pub mod attr;
pub mod surface;

pub use attr::{escape_xml, fmt_px, PathData, Stroke, TextAnchor, TextAttrs};
pub use surface::{SvgDocument, SvgSurface};
