//! Colors for hero costs and feature tags.

use ratatui::style::Color;

/// Row background for picked heroes (dark slate grey).
pub const SELECTED_BG: Color = Color::Rgb(47, 79, 79);

const FEATURE_PALETTE: [Color; 10] = [
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::Rgb(255, 165, 0),
    Color::Rgb(173, 216, 230),
    Color::Rgb(144, 238, 144),
    Color::Rgb(221, 160, 221),
];

/// Name color by hero tier.
pub fn cost_color(cost: u32) -> Color {
    match cost {
        0 | 1 => Color::Gray,
        2 => Color::Green,
        3 => Color::LightBlue,
        4 => Color::Magenta,
        _ => Color::Rgb(255, 165, 0),
    }
}

/// Stable color for a feature tag, derived from its name.
pub fn feature_color(feature: &str) -> Color {
    let hash = feature
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    FEATURE_PALETTE[hash % FEATURE_PALETTE.len()]
}
