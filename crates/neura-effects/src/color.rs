//! Color helpers for drawing on a dark terminal.

use ratatui::style::Color;

/// Scale a color toward black by `opacity` (0.0-1.0).
///
/// Terminals have no alpha channel, so translucency is approximated against
/// a black background. Non-RGB colors are returned unchanged.
pub fn fade(color: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(scale(r, opacity), scale(g, opacity), scale(b, opacity)),
        other => other,
    }
}

/// Mix a color toward white by `amount` (0.0-1.0).
pub fn lighten(color: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            toward_white(r, amount),
            toward_white(g, amount),
            toward_white(b, amount),
        ),
        other => other,
    }
}

fn scale(channel: u8, factor: f32) -> u8 {
    (f32::from(channel) * factor).round() as u8
}

fn toward_white(channel: u8, amount: f32) -> u8 {
    let c = f32::from(channel);
    (c + (255.0 - c) * amount).round() as u8
}
