//! Color themes and animation speed.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Accent color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    #[default]
    Violet,
    Cyan,
    Magenta,
    Green,
    White,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Violet => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::White,
            ColorTheme::White => ColorTheme::Violet,
        }
    }

    /// Accent color of the theme.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Violet => Color::Rgb(167, 139, 250), // #a78bfa
            ColorTheme::Cyan => Color::Rgb(34, 211, 238),
            ColorTheme::Magenta => Color::Rgb(232, 121, 249),
            ColorTheme::Green => Color::Rgb(74, 222, 128),
            ColorTheme::White => Color::Rgb(229, 231, 235),
        }
    }
}

/// Global animation speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Multiplier applied to elapsed frame time.
    pub fn time_scale(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }
}
