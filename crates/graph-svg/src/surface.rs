// File: crates/graph-svg/src/surface.rs
// Summary: SVG drawing surfaces and the document resolving them by identifier.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use crate::attr::{escape_xml, fmt_px, Stroke, TextAttrs};

/// A drawing surface of fixed pixel dimensions accumulating SVG elements.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    id: String,
    width: f64,
    height: f64,
    nodes: Vec<String>,
    depth: usize,
}

impl SvgSurface {
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            nodes: Vec::new(),
            depth: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, node: String) {
        let pad = "  ".repeat(self.depth + 1);
        self.nodes.push(format!("{pad}{node}"));
    }

    /// Open a `<g>` wrapper; elements emitted until `close_group` nest in it.
    pub fn open_group(&mut self, class: &str, transform: Option<&str>) {
        let transform = transform
            .map(|t| format!(" transform=\"{t}\""))
            .unwrap_or_default();
        self.push(format!("<g class=\"{class}\"{transform}>"));
        self.depth += 1;
    }

    pub fn close_group(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
            self.push("</g>".to_string());
        }
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &Stroke) {
        self.push(format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>",
            fmt_px(x1),
            fmt_px(y1),
            fmt_px(x2),
            fmt_px(y2),
            stroke.to_attrs()
        ));
    }

    /// An open, unfilled path.
    pub fn path(&mut self, class: Option<&str>, d: &str, stroke: &Stroke) {
        let class = class
            .map(|c| format!(" class=\"{c}\""))
            .unwrap_or_default();
        self.push(format!(
            "<path{class} d=\"{d}\" fill=\"none\" {}/>",
            stroke.to_attrs()
        ));
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, attrs: &TextAttrs) {
        self.push(format!(
            "<text x=\"{}\" y=\"{}\" {}>{}</text>",
            fmt_px(x),
            fmt_px(y),
            attrs.to_attrs(),
            escape_xml(content)
        ));
    }

    /// Serialize the surface into a complete SVG document string.
    pub fn to_svg(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
            escape_xml(&self.id),
            fmt_px(self.width),
            fmt_px(self.height),
            fmt_px(self.width),
            fmt_px(self.height)
        ));
        for node in &self.nodes {
            out.push_str(node);
            out.push('\n');
        }
        for depth in (0..self.depth).rev() {
            let pad = "  ".repeat(depth + 1);
            out.push_str(&format!("{pad}</g>\n"));
        }
        out.push_str("</svg>\n");
        out
    }

    /// Write the serialized document, creating parent directories as needed.
    pub fn write_to(&self, path: impl AsRef<Path>) -> io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg())
    }
}

/// A set of named surfaces; the "select an element by identifier" capability.
#[derive(Clone, Debug, Default)]
pub struct SvgDocument {
    surfaces: BTreeMap<String, SvgSurface>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface under its id, replacing any previous one.
    pub fn add_surface(&mut self, surface: SvgSurface) {
        self.surfaces.insert(surface.id().to_string(), surface);
    }

    pub fn surface(&self, id: &str) -> Option<&SvgSurface> {
        self.surfaces.get(id)
    }

    pub fn surface_mut(&mut self, id: &str) -> Option<&mut SvgSurface> {
        self.surfaces.get_mut(id)
    }
}
