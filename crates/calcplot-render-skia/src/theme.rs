// File: crates/calcplot-render-skia/src/theme.rs
// Summary: Named colour sets for plot surfaces.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Lines at x = 0 and y = 0.
    pub zero_axis: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    /// "X"/"Y" captions.
    pub axis_label: skia::Color,
    pub curve: skia::Color,
}

impl Theme {
    /// White canvas, grey axes, dark blue curve.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            zero_axis: skia::Color::from_rgb(211, 211, 211),
            tick: skia::Color::from_rgb(128, 128, 128),
            tick_label: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            curve: skia::Color::from_rgb(0, 0, 139),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            zero_axis: skia::Color::from_argb(255, 90, 90, 100),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            curve: skia::Color::from_argb(255, 64, 160, 255),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::BLACK,
            zero_axis: skia::Color::from_rgb(200, 200, 200),
            tick: skia::Color::WHITE,
            tick_label: skia::Color::WHITE,
            axis_label: skia::Color::WHITE,
            curve: skia::Color::from_rgb(255, 230, 0),
        }
    }

    pub fn presets() -> [Theme; 3] {
        [Self::light(), Self::dark(), Self::high_contrast_dark()]
    }

    /// Preset by name (case-insensitive); unknown names get `light`.
    pub fn find(name: &str) -> Self {
        Self::presets()
            .into_iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
