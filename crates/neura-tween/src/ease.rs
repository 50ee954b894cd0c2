//! Easing curves.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Easing functions used to map normalized tween progress.
///
/// The `PowerN` names follow the usual animation-library convention where
/// `Power1` is quadratic, `Power2` cubic and `Power3` quartic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    /// Half a cosine wave, slow at both ends.
    #[default]
    SineInOut,
    Power1In,
    Power1Out,
    Power1InOut,
    Power2Out,
    Power3Out,
}

impl Ease {
    /// Apply this easing function to progress `t`, clamped into `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Self::Power1In => t * t,
            Self::Power1Out => 1.0 - (1.0 - t).powi(2),
            Self::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}
