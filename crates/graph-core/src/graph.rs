// File: crates/graph-core/src/graph.rs
// Summary: Graph construction over a named surface, plus the line-graph entry point.

use graph_svg::SvgDocument;

use crate::data::DataPoint;
use crate::error::{GraphError, GraphResult};
use crate::layout::{compute_layout, Layout};
use crate::margin::Margin;
use crate::render;
use crate::scale::ScaleKind;
use crate::theme::Theme;

/// Construction knobs. Defaults give the fixed margins, kind inference from
/// the first point, and the light theme.
#[derive(Clone, Debug, Default)]
pub struct GraphOptions {
    pub margin: Margin,
    /// Horizontal scale kind; inferred from the first point when `None`.
    pub scale_kind: Option<ScaleKind>,
    pub theme: Theme,
}

/// A constructed chart: the borrowed series, its computed layout, and the
/// theme, with both axis groups already drawn on the surface.
#[derive(Debug)]
pub struct Graph<'a> {
    surface_id: String,
    data: &'a [DataPoint],
    layout: Layout,
    theme: Theme,
}

impl<'a> Graph<'a> {
    /// Resolve the surface by id, compute the layout from the series extent,
    /// and draw both axis groups.
    pub fn new(
        doc: &mut SvgDocument,
        surface_id: &str,
        data: &'a [DataPoint],
        options: GraphOptions,
    ) -> GraphResult<Self> {
        let surface = doc
            .surface_mut(surface_id)
            .ok_or_else(|| GraphError::SurfaceMissing(surface_id.to_string()))?;

        let kind = match options.scale_kind {
            Some(kind) => kind,
            None => ScaleKind::of(data)?,
        };
        let layout = compute_layout(data, options.margin, surface.width(), surface.height(), kind)?;
        render::draw_axes(surface, &layout, &options.theme);

        Ok(Self {
            surface_id: surface_id.to_string(),
            data,
            layout,
            theme: options.theme,
        })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn data(&self) -> &[DataPoint] {
        self.data
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Draw the series polyline using the scales computed at construction.
    pub fn draw_line(&self, doc: &mut SvgDocument) -> GraphResult<()> {
        let surface = doc
            .surface_mut(&self.surface_id)
            .ok_or_else(|| GraphError::SurfaceMissing(self.surface_id.clone()))?;
        render::draw_series_line(surface, &self.layout, self.data, &self.theme)
    }
}

/// Axes plus the connecting line in one call.
pub fn line_graph<'a>(
    doc: &mut SvgDocument,
    surface_id: &str,
    data: &'a [DataPoint],
    options: GraphOptions,
) -> GraphResult<Graph<'a>> {
    let graph = Graph::new(doc, surface_id, data, options)?;
    graph.draw_line(doc)?;
    Ok(graph)
}
