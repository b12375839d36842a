// File: crates/graph-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small graph to an SVG string.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares strings for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use graph_core::{line_graph, DataPoint, GraphOptions};
use graph_svg::{SvgDocument, SvgSurface};

fn render_svg() -> String {
    let data = vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(1.0, 1.0),
        DataPoint::new(2.0, 0.0),
        DataPoint::new(3.0, 1.5),
        DataPoint::new(4.0, 1.0),
    ];
    let mut doc = SvgDocument::new();
    doc.add_surface(SvgSurface::new("snapshot", 500.0, 300.0));
    line_graph(&mut doc, "snapshot", &data, GraphOptions::default()).expect("render");
    doc.surface("snapshot").expect("surface").to_svg()
}

#[test]
fn golden_basic_graph() {
    let got = render_svg();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_graph.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &got).expect("write snapshot");
        eprintln!(
            "[snapshot] Updated {} ({} bytes)",
            snap_path.display(),
            got.len()
        );
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(
            got,
            want,
            "rendered SVG differs from golden snapshot: {}",
            snap_path.display()
        );
    } else {
        eprintln!(
            "[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.",
            snap_path.display()
        );
        // Skip without failing on first run
    }
}
