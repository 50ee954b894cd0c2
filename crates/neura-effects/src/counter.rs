//! Stat counter that counts up once when scrolled into view.

use neura_tween::{Step, Tween};
use tracing::debug;

use crate::CounterConfig;

/// Lifecycle of a [`Counter`]. It never goes back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterState {
    Idle,
    Animating,
    Settled,
}

/// Displays an integer that animates from zero up to `target`.
#[derive(Debug, Clone)]
pub struct Counter {
    target: u32,
    suffix: String,
    config: CounterConfig,
    state: CounterState,
    /// Whether visibility reports are still listened to.
    observing: bool,
    tween: Option<Tween<f32>>,
    displayed: u32,
}

impl Counter {
    pub fn new(target: u32, suffix: impl Into<String>, config: CounterConfig) -> Self {
        Self {
            target,
            suffix: suffix.into(),
            config,
            state: CounterState::Idle,
            observing: true,
            tween: None,
            displayed: 0,
        }
    }

    /// Report how much of the counter is visible (0.0-1.0).
    ///
    /// Returns true only for the report that starts the animation; after
    /// that the counter stops observing.
    pub fn observe(&mut self, visible_ratio: f32) -> bool {
        if !self.observing
            || self.state != CounterState::Idle
            || visible_ratio <= 0.0
            || visible_ratio < self.config.threshold
        {
            return false;
        }
        self.observing = false;
        self.state = CounterState::Animating;
        self.tween = Some(
            Tween::new(0.0, self.target as f32, self.config.duration_secs).ease(self.config.ease),
        );
        debug!(goal = self.target, ratio = visible_ratio, "counter started");
        true
    }

    /// Advance the count by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        match tween.advance(dt) {
            Step::Idle => {}
            Step::Update(value) => self.show(value),
            Step::Complete(_) => {
                // Land exactly on the target regardless of float drift.
                self.displayed = self.target;
                self.tween = None;
                self.state = CounterState::Settled;
            }
        }
    }

    /// Stop animating and stop observing. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.tween = None;
        self.observing = false;
    }

    fn show(&mut self, value: f32) {
        let rounded = value.round().clamp(0.0, self.target as f32) as u32;
        self.displayed = self.displayed.max(rounded).min(self.target);
    }

    /// Text to display, suffix included.
    pub fn text(&self) -> String {
        format!("{}{}", self.displayed, self.suffix)
    }

    pub fn value(&self) -> u32 {
        self.displayed
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn active_tweens(&self) -> usize {
        usize::from(self.tween.is_some())
    }
}

#[cfg(test)]
mod tests {
    use neura_tween::Ease;

    use super::*;

    fn hero_counter() -> Counter {
        Counter::new(150, "+", CounterConfig::default())
    }

    fn numeric(text: &str) -> u32 {
        text.trim_end_matches('+').parse().expect("numeric prefix")
    }

    #[test]
    fn test_counts_up_to_exact_target() {
        let mut counter = hero_counter();
        assert_eq!(counter.text(), "0+");
        assert_eq!(counter.state(), CounterState::Idle);

        assert!(counter.observe(0.6));
        assert_eq!(counter.state(), CounterState::Animating);

        let mut last = 0;
        let mut frames = 0;
        while counter.state() == CounterState::Animating {
            counter.tick(1.0 / 60.0);
            let text = counter.text();
            assert!(text.ends_with('+'));
            let value = numeric(&text);
            assert!(value >= last, "went from {last} to {value}");
            assert!(value <= 150);
            last = value;
            frames += 1;
            assert!(frames < 1000, "counter never settled");
        }
        assert_eq!(counter.text(), "150+");
        assert_eq!(counter.state(), CounterState::Settled);
        assert_eq!(counter.active_tweens(), 0);
    }

    #[test]
    fn test_below_threshold_does_not_start() {
        let mut counter = hero_counter();
        assert!(!counter.observe(0.0));
        assert!(!counter.observe(0.49));
        counter.tick(1.0);
        assert_eq!(counter.text(), "0+");
        assert_eq!(counter.state(), CounterState::Idle);
    }

    #[test]
    fn test_starts_only_once() {
        let mut counter = hero_counter();
        let starts = [0.2, 0.7, 0.0, 1.0, 0.9, 0.5]
            .into_iter()
            .filter(|ratio| counter.observe(*ratio))
            .count();
        assert_eq!(starts, 1);

        counter.tick(10.0);
        assert_eq!(counter.state(), CounterState::Settled);
        assert!(!counter.observe(1.0));
        assert_eq!(counter.state(), CounterState::Settled);
        assert_eq!(counter.text(), "150+");
    }

    #[test]
    fn test_teardown_mid_animation() {
        let mut counter = Counter::new(
            98,
            "%",
            CounterConfig {
                duration_secs: 2.0,
                ease: Ease::Power2Out,
                threshold: 0.5,
            },
        );
        counter.observe(1.0);
        counter.tick(0.5);
        let frozen = counter.value();
        counter.teardown();
        counter.teardown();
        counter.tick(5.0);
        assert_eq!(counter.value(), frozen);
        assert_eq!(counter.active_tweens(), 0);
        assert!(!counter.observe(1.0));
        assert_ne!(counter.state(), CounterState::Idle);
    }

    #[test]
    fn test_teardown_before_visibility_stops_observing() {
        let mut counter = Counter::new(12, "", CounterConfig::default());
        counter.teardown();
        assert!(!counter.observe(1.0));
        assert_eq!(counter.text(), "0");
    }
}
