//! Tweening for neura animations.
//!
//! A [`Tween`] interpolates a value between two endpoints over time with an
//! easing curve, optionally repeating and reversing direction ("yoyo").
//! A [`Timeline`] owns many tweens behind [`TweenId`] handles and reports
//! their progress every tick.

mod ease;
mod lerp;
mod timeline;
mod tween;

pub use ease::Ease;
pub use lerp::Lerp;
pub use timeline::{Timeline, TweenEvent, TweenId};
pub use tween::{Repeat, Step, Tween};
