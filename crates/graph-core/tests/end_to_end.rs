// File: crates/graph-core/tests/end_to_end.rs
// Purpose: Render complete graphs and assert on the emitted SVG.

use chrono::{TimeZone, Utc};
use graph_core::{line_graph, DataPoint, Graph, GraphError, GraphOptions};
use graph_svg::{SvgDocument, SvgSurface};

fn doc_with_surface(width: f64, height: f64) -> SvgDocument {
    let mut doc = SvgDocument::new();
    doc.add_surface(SvgSurface::new("graphArea", width, height));
    doc
}

#[test]
fn two_point_series_renders_the_expected_path() {
    let data = vec![DataPoint::new(0.0, 10.0), DataPoint::new(10.0, 20.0)];
    let mut doc = doc_with_surface(500.0, 300.0);
    let graph =
        line_graph(&mut doc, "graphArea", &data, GraphOptions::default()).expect("render");

    assert_eq!(graph.layout().h_scale.range(), (32.0, 480.0));
    assert_eq!(graph.data().len(), 2);
    assert_eq!(graph.theme().name, "light");

    // h(0)=32, h(10)=480; v(10)=150, v(20)=20 under the default margins
    let svg = doc.surface("graphArea").unwrap().to_svg();
    assert!(
        svg.contains("d=\"M32,150L480,20\""),
        "series path missing:\n{svg}"
    );
}

#[test]
fn axes_carry_the_fixed_styling() {
    let data = vec![DataPoint::new(0.0, 10.0), DataPoint::new(10.0, 20.0)];
    let mut doc = doc_with_surface(500.0, 300.0);
    line_graph(&mut doc, "graphArea", &data, GraphOptions::default()).expect("render");
    let svg = doc.surface("graphArea").unwrap().to_svg();

    assert!(svg.contains("<g class=\"x-axis\" transform=\"translate(0,280)\">"));
    assert!(svg.contains("<g class=\"y-axis\" transform=\"translate(32,0)\">"));
    // gridlines
    assert!(svg.contains(
        "stroke=\"lightgray\" stroke-width=\"1\" stroke-opacity=\"0.7\" shape-rendering=\"crispEdges\""
    ));
    // domain borders
    assert!(svg.contains("d=\"M32,0H480\""));
    assert!(svg.contains("d=\"M0,20V280\""));
    // series stroke
    assert!(svg.contains("stroke=\"steelblue\" stroke-width=\"1.5\""));
    assert!(svg.contains("fill=\"none\""));
}

#[test]
fn missing_surface_is_reported() {
    let data = vec![DataPoint::new(0.0, 1.0)];
    let mut doc = SvgDocument::new();
    let err = Graph::new(&mut doc, "nope", &data, GraphOptions::default()).unwrap_err();
    assert!(matches!(err, GraphError::SurfaceMissing(ref id) if id == "nope"));
}

#[test]
fn empty_series_aborts_construction() {
    let mut doc = doc_with_surface(500.0, 300.0);
    let err = Graph::new(&mut doc, "graphArea", &[], GraphOptions::default()).unwrap_err();
    assert!(matches!(err, GraphError::EmptySeries));
    // nothing was drawn
    assert_eq!(doc.surface("graphArea").unwrap().node_count(), 0);
}

#[test]
fn temporal_series_renders_with_date_labels() {
    let at = |h, m, s| Utc.with_ymd_and_hms(2018, 6, 26, h, m, s).unwrap();
    let data = vec![
        DataPoint::new(at(4, 45, 45), 10.0),
        DataPoint::new(at(7, 30, 24), 13.0),
        DataPoint::new(at(12, 30, 37), 11.0),
        DataPoint::new(at(15, 25, 13), 25.0),
    ];
    let mut doc = doc_with_surface(640.0, 360.0);
    line_graph(&mut doc, "graphArea", &data, GraphOptions::default()).expect("render");
    let svg = doc.surface("graphArea").unwrap().to_svg();

    assert!(svg.contains("06-26 "), "temporal labels missing:\n{svg}");
    assert!(!svg.contains("2018"));
    assert!(svg.contains("class=\"series-line\""));
}

#[test]
fn single_point_series_renders_without_a_segment() {
    let data = vec![DataPoint::new(5.0, 5.0)];
    let mut doc = doc_with_surface(500.0, 300.0);
    line_graph(&mut doc, "graphArea", &data, GraphOptions::default()).expect("render");
    let svg = doc.surface("graphArea").unwrap().to_svg();
    // the widened domain pins the single point to the left margin and its
    // value (the maximum) to the top margin
    assert!(svg.contains("d=\"M32,20\""), "point path missing:\n{svg}");
}

#[test]
fn independent_graphs_emit_identical_svg() {
    let data = vec![
        DataPoint::new(1.0, 10.0),
        DataPoint::new(5.0, 13.0),
        DataPoint::new(7.0, 11.0),
        DataPoint::new(13.0, 25.0),
    ];
    let render = || {
        let mut doc = doc_with_surface(500.0, 300.0);
        line_graph(&mut doc, "graphArea", &data, GraphOptions::default()).expect("render");
        doc.surface("graphArea").unwrap().to_svg()
    };
    assert_eq!(render(), render());
}
