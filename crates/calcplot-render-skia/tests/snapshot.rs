// File: crates/calcplot-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// - UPDATE_SNAPSHOTS=1 (re)writes the snapshot file.
// - Otherwise an existing snapshot is compared pixel for pixel.
// - A missing snapshot is reported and skipped.

use calcplot_core::{Point, RenderMode, Scene, Viewport};
use calcplot_render_skia::{render_to_png_bytes, RasterOptions};

fn render_bytes() -> Vec<u8> {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 0.0),
        Point::new(3.0, 1.5),
        Point::new(4.0, 1.0),
    ];
    let scene = Scene::build(&pts, 0.0, 4.0, RenderMode::Spline, Viewport::default()).expect("scene");
    // text rendering varies across platforms
    let opts = RasterOptions { draw_labels: false, ..RasterOptions::default() };
    render_to_png_bytes(&scene, &opts).expect("render")
}

#[test]
fn golden_spline_plot() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("spline_plot.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "pixels differ from {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render_bytes(), render_bytes());
}
