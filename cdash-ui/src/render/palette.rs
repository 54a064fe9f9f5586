//! Colour scales for the charts
//!
//! Reds and coolwarm are interpolated over fixed stops; viridis is the
//! map plotters ships with.

use cdash_common::ContentType;
use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, DerivedColorMap, ViridisRGB};

/// Neutral grey for unknown series and missing colours
pub const GREY: RGBColor = RGBColor(0x80, 0x80, 0x80);

/// Sequential white → dark red
const REDS_STOPS: [RGBColor; 9] = [
    RGBColor(0xff, 0xf5, 0xf0),
    RGBColor(0xfe, 0xe0, 0xd2),
    RGBColor(0xfc, 0xbb, 0xa1),
    RGBColor(0xfc, 0x92, 0x72),
    RGBColor(0xfb, 0x6a, 0x4a),
    RGBColor(0xef, 0x3b, 0x2c),
    RGBColor(0xcb, 0x18, 0x1d),
    RGBColor(0xa5, 0x0f, 0x15),
    RGBColor(0x67, 0x00, 0x0d),
];

/// Diverging blue → grey → red
const COOLWARM_STOPS: [RGBColor; 5] = [
    RGBColor(0x3b, 0x4c, 0xc0),
    RGBColor(0x8d, 0xb0, 0xfe),
    RGBColor(0xdd, 0xdd, 0xdd),
    RGBColor(0xf4, 0x9a, 0x7b),
    RGBColor(0xb4, 0x04, 0x26),
];

pub fn reds() -> DerivedColorMap<RGBColor> {
    DerivedColorMap::new(&REDS_STOPS)
}

pub fn coolwarm() -> DerivedColorMap<RGBColor> {
    DerivedColorMap::new(&COOLWARM_STOPS)
}

/// `n` colours evenly spaced over `map`, excluding both extremes
pub fn sample<M: ColorMap<RGBColor>>(map: &M, n: usize) -> Vec<RGBColor> {
    (0..n)
        .map(|i| map.get_color((i + 1) as f32 / (n + 1) as f32))
        .collect()
}

/// [`sample`], darkest/last end first
pub fn sample_reversed<M: ColorMap<RGBColor>>(map: &M, n: usize) -> Vec<RGBColor> {
    let mut colours = sample(map, n);
    colours.reverse();
    colours
}

/// `n` viridis colours
pub fn viridis(n: usize) -> Vec<RGBColor> {
    sample(&ViridisRGB, n)
}

/// Relative luminance in [0, 1]
pub fn luminance(colour: RGBColor) -> f64 {
    let RGBColor(r, g, b) = colour;
    (0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64) / 255.0
}

/// Fixed line colour for each trend series
pub fn series_color(content_type: &ContentType) -> RGBColor {
    match content_type {
        ContentType::Movie => RED,
        ContentType::TvShow => BLACK,
        ContentType::Other(_) => GREY,
    }
}
