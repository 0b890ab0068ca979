// File: crates/calcplot-render-skia/tests/smoke.rs
// Purpose: End-to-end render of a sampled parabola to PNG file and bytes.

use calcplot_core::{Point, RenderMode, Scene, Viewport};
use calcplot_render_skia::{render_to_png, render_to_png_bytes, RasterOptions, Theme};

fn parabola(mode: RenderMode) -> Scene {
    let pts: Vec<Point> = (-8..=8).map(|i| {
        let x = i as f64 * 0.25;
        Point::new(x, x * x)
    }).collect();
    Scene::build(&pts, -2.0, 2.0, mode, Viewport::default()).expect("scene")
}

#[test]
fn render_smoke_png() {
    let scene = parabola(RenderMode::Linear);
    let opts = RasterOptions::default();
    let out = std::path::PathBuf::from("target/test_out/parabola.png");

    render_to_png(&scene, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_to_png_bytes(&scene, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn spline_and_dark_theme_render() {
    let scene = parabola(RenderMode::Spline);
    let opts = RasterOptions { theme: Theme::dark(), ..RasterOptions::default() };
    let bytes = render_to_png_bytes(&scene, &opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (800, 500));
}
