// File: crates/graph-core/src/render.rs
// Summary: Draws axis groups and the series polyline onto an SVG surface.

use graph_svg::{fmt_px, PathData, Stroke, SvgSurface, TextAnchor, TextAttrs};

use crate::data::DataPoint;
use crate::error::{GraphError, GraphResult};
use crate::layout::{AxisOrient, AxisSpec, Layout};
use crate::theme::Theme;

// Label offsets from the axis line, in pixels.
const X_LABEL_OFFSET: f64 = 16.0;
const Y_LABEL_OFFSET: f64 = -8.0;

/// Draw both axis groups: gridlines, domain border, and tick labels.
pub fn draw_axes(surface: &mut SvgSurface, layout: &Layout, theme: &Theme) {
    draw_axis(surface, &layout.h_axis, theme, "x-axis");
    draw_axis(surface, &layout.v_axis, theme, "y-axis");
}

fn draw_axis(surface: &mut SvgSurface, axis: &AxisSpec, theme: &Theme, class: &str) {
    let transform = match axis.orient {
        AxisOrient::Bottom => format!("translate(0,{})", fmt_px(axis.shift)),
        AxisOrient::Left => format!("translate({},0)", fmt_px(axis.shift)),
    };
    surface.open_group(class, Some(&transform));

    // Ticks stretched across the whole plot become the gridlines.
    let grid = Stroke::new(theme.grid, 1.0)
        .opacity(theme.grid_opacity)
        .crisp_edges();
    for tick in &axis.ticks {
        match axis.orient {
            AxisOrient::Bottom => {
                surface.line(tick.offset, 0.0, tick.offset, -axis.grid_span, &grid)
            }
            AxisOrient::Left => surface.line(0.0, tick.offset, axis.grid_span, tick.offset, &grid),
        }
    }

    let border = Stroke::new(theme.border, theme.border_width);
    let mut d = PathData::new();
    match axis.orient {
        AxisOrient::Bottom => {
            d.move_to(axis.line.0, 0.0);
            d.h_to(axis.line.1);
        }
        AxisOrient::Left => {
            d.move_to(0.0, axis.line.0);
            d.v_to(axis.line.1);
        }
    }
    surface.path(None, d.as_str(), &border);

    for tick in &axis.ticks {
        match axis.orient {
            AxisOrient::Bottom => {
                let attrs =
                    TextAttrs::new(theme.label, theme.label_size).anchor(TextAnchor::Middle);
                surface.text(tick.offset, X_LABEL_OFFSET, &tick.label, &attrs);
            }
            AxisOrient::Left => {
                let attrs = TextAttrs::new(theme.label, theme.label_size)
                    .anchor(TextAnchor::End)
                    .middle_baseline();
                surface.text(Y_LABEL_OFFSET, tick.offset, &tick.label, &attrs);
            }
        }
    }

    surface.close_group();
}

/// Draw the connecting polyline for the series through the layout's scales.
pub fn draw_series_line(
    surface: &mut SvgSurface,
    layout: &Layout,
    data: &[DataPoint],
    theme: &Theme,
) -> GraphResult<()> {
    if data.is_empty() {
        return Err(GraphError::EmptySeries);
    }

    let mut d = PathData::new();
    for (index, point) in data.iter().enumerate() {
        let x = layout
            .h_scale
            .scale(point.at)
            .ok_or(GraphError::MixedSeries(index))?;
        let y = layout.v_scale.scale(point.value);
        if d.is_empty() {
            d.move_to(x, y);
        } else {
            d.line_to(x, y);
        }
    }

    let stroke = Stroke::new(theme.series, theme.series_width);
    surface.path(Some("series-line"), d.as_str(), &stroke);
    Ok(())
}
