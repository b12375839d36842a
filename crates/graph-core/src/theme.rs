// File: crates/graph-core/src/theme.rs
// Summary: Stroke colors and widths for axes, gridlines, labels, and the series.

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub grid: &'static str,
    pub grid_opacity: f64,
    pub border: &'static str,
    pub border_width: f64,
    pub label: &'static str,
    pub label_size: f64,
    pub series: &'static str,
    pub series_width: f64,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            grid: "lightgray",
            grid_opacity: 0.7,
            border: "lightgray",
            border_width: 1.0,
            label: "#333",
            label_size: 10.0,
            series: "steelblue",
            series_width: 1.5,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            grid: "#3c3c46",
            grid_opacity: 0.7,
            border: "#3c3c46",
            border_width: 1.0,
            label: "#d2d2dc",
            label_size: 10.0,
            series: "#40a0ff",
            series_width: 1.5,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}
