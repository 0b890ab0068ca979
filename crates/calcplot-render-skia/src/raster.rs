// File: crates/calcplot-render-skia/src/raster.rs
// Summary: Draw a calcplot Scene on a CPU raster surface and export PNG or RGBA pixels.

use anyhow::{Context, Result};
use calcplot_core::scene::{Scene, Segment};
use skia_safe as skia;
use tracing::debug;

use crate::text::TextShaper;
use crate::theme::Theme;

pub struct RasterOptions {
    pub theme: Theme,
    /// Tick labels and axis captions. Off gives font-independent output.
    pub draw_labels: bool,
    pub stroke_width: f32,
    pub font_size: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), draw_labels: true, stroke_width: 2.5, font_size: 12.0 }
    }
}

fn surface_for(scene: &Scene) -> Result<skia::Surface> {
    let vp = scene.viewport();
    let (w, h) = (vp.width.round() as i32, vp.height.round() as i32);
    skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))
}

fn paint_scene(surface: &mut skia::Surface, scene: &Scene, opts: &RasterOptions) {
    let canvas = surface.canvas();
    let theme = &opts.theme;
    canvas.clear(theme.background);

    let mut axis = stroke(theme.zero_axis, 1.5);
    axis.set_anti_alias(false);
    for seg in scene.zero_x.iter().chain(scene.zero_y.iter()) {
        draw_segment(canvas, seg, &axis);
    }

    let tick = stroke(theme.tick, 1.0);
    for t in scene.x_ticks.iter().chain(scene.y_ticks.iter()) {
        draw_segment(canvas, &t.mark, &tick);
    }

    if opts.draw_labels {
        let shaper = TextShaper::new(opts.font_size);
        for t in scene.x_ticks.iter().chain(scene.y_ticks.iter()) {
            shaper.draw(canvas, &t.label, theme.tick_label);
        }
        for caption in &scene.axis_labels {
            shaper.draw(canvas, caption, theme.axis_label);
        }
    }

    if let Some((first, rest)) = scene.curve.split_first() {
        let mut builder = skia::PathBuilder::new();
        builder.move_to((first.x as f32, first.y as f32));
        for v in rest {
            builder.line_to((v.x as f32, v.y as f32));
        }
        let path = builder.detach();
        canvas.draw_path(&path, &stroke(theme.curve, opts.stroke_width));
    }
    debug!(vertices = scene.curve.len(), theme = theme.name, "scene painted");
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_segment(canvas: &skia::Canvas, seg: &Segment, paint: &skia::Paint) {
    canvas.draw_line((seg.from.x as f32, seg.from.y as f32), (seg.to.x as f32, seg.to.y as f32), paint);
}

/// Encode the scene as PNG bytes.
pub fn render_to_png_bytes(scene: &Scene, opts: &RasterOptions) -> Result<Vec<u8>> {
    let mut surface = surface_for(scene)?;
    paint_scene(&mut surface, scene, opts);
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Write the scene to `path` as PNG, creating parent directories.
pub fn render_to_png(scene: &Scene, opts: &RasterOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = render_to_png_bytes(scene, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Unpremultiplied RGBA8 pixels: `(pixels, width, height, row_stride)`.
pub fn render_to_rgba8(scene: &Scene, opts: &RasterOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = surface_for(scene)?;
    paint_scene(&mut surface, scene, opts);
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("reading {w}x{h} pixels failed");
    }
    Ok((pixels, w, h, stride))
}
