// File: crates/graph-svg/src/attr.rs
// Summary: Stroke/text attribute carriers, path data builder, pixel formatting.

/// Format a pixel coordinate with at most two decimals and no trailing zeros.
pub fn fmt_px(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Escape text content for embedding in an SVG document.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Stroke presentation attributes applied to lines and paths.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub opacity: Option<f64>,
    pub crisp_edges: bool,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
            opacity: None,
            crisp_edges: false,
        }
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Disable anti-aliasing so straight lines stay sharp.
    pub fn crisp_edges(mut self) -> Self {
        self.crisp_edges = true;
        self
    }

    pub(crate) fn to_attrs(&self) -> String {
        let mut attrs = format!(
            "stroke=\"{}\" stroke-width=\"{}\"",
            self.color,
            fmt_px(self.width)
        );
        if let Some(opacity) = self.opacity {
            attrs.push_str(&format!(" stroke-opacity=\"{opacity}\""));
        }
        if self.crisp_edges {
            attrs.push_str(" shape-rendering=\"crispEdges\"");
        }
        attrs
    }
}

/// Horizontal anchoring of a text element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Presentation attributes for text elements.
#[derive(Clone, Debug, PartialEq)]
pub struct TextAttrs {
    pub fill: String,
    pub size: f64,
    pub anchor: TextAnchor,
    pub middle_baseline: bool,
}

impl TextAttrs {
    pub fn new(fill: impl Into<String>, size: f64) -> Self {
        Self {
            fill: fill.into(),
            size,
            anchor: TextAnchor::Start,
            middle_baseline: false,
        }
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Center the glyphs vertically on the y coordinate.
    pub fn middle_baseline(mut self) -> Self {
        self.middle_baseline = true;
        self
    }

    pub(crate) fn to_attrs(&self) -> String {
        let mut attrs = format!(
            "font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\"",
            fmt_px(self.size),
            self.fill,
            self.anchor.as_str()
        );
        if self.middle_baseline {
            attrs.push_str(" dominant-baseline=\"middle\"");
        }
        attrs
    }
}

/// Builds SVG path data from move/line commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    d: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.d.push_str(&format!("M{},{}", fmt_px(x), fmt_px(y)));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.d.push_str(&format!("L{},{}", fmt_px(x), fmt_px(y)));
    }

    /// Horizontal segment to the given x.
    pub fn h_to(&mut self, x: f64) {
        self.d.push_str(&format!("H{}", fmt_px(x)));
    }

    /// Vertical segment to the given y.
    pub fn v_to(&mut self, y: f64) {
        self.d.push_str(&format!("V{}", fmt_px(y)));
    }

    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.d
    }
}
