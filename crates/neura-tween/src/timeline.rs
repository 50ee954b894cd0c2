//! A set of running tweens addressed by handle.

use crate::{Lerp, Step, Tween};

/// Handle to a tween owned by a [`Timeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(u64);

/// Progress reported by [`Timeline::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenEvent<T> {
    pub id: TweenId,
    /// Index of the thing the tween drives.
    pub target: usize,
    pub value: T,
    /// The tween completed and has been removed.
    pub finished: bool,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TweenId,
    target: usize,
    tween: Tween<T>,
}

/// Owns running tweens. Tweens are advanced in spawn order.
#[derive(Debug, Clone)]
pub struct Timeline<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T: Lerp> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start driving `target` with `tween`.
    pub fn spawn(&mut self, target: usize, tween: Tween<T>) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, target, tween });
        id
    }

    /// Stop a tween. Killing an unknown or finished tween is a no-op.
    pub fn kill(&mut self, id: TweenId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Stop every tween driving `target`, returning how many were stopped.
    pub fn kill_target(&mut self, target: usize) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.target != target);
        before - self.entries.len()
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween<T>> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.tween)
    }

    pub fn get_mut(&mut self, id: TweenId) -> Option<&mut Tween<T>> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.tween)
    }

    /// Number of tweens driving `target`.
    pub fn count_target(&self, target: usize) -> usize {
        self.entries.iter().filter(|e| e.target == target).count()
    }

    /// Stop everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance every tween by `dt` seconds and report each new value.
    pub fn advance(&mut self, dt: f32, mut on_event: impl FnMut(TweenEvent<T>)) {
        self.entries.retain_mut(|entry| match entry.tween.advance(dt) {
            Step::Idle => !entry.tween.is_finished(),
            Step::Update(value) => {
                on_event(TweenEvent {
                    id: entry.id,
                    target: entry.target,
                    value,
                    finished: false,
                });
                true
            }
            Step::Complete(value) => {
                on_event(TweenEvent {
                    id: entry.id,
                    target: entry.target,
                    value,
                    finished: true,
                });
                false
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Repeat;

    #[test]
    fn test_spawn_and_advance_reports_targets_in_order() {
        let mut timeline = Timeline::new();
        timeline.spawn(3, Tween::new(0.0_f32, 1.0, 1.0));
        timeline.spawn(1, Tween::new(0.0_f32, 2.0, 1.0));

        let mut seen = Vec::new();
        timeline.advance(0.5, |event| seen.push((event.target, event.value)));
        assert_eq!(seen, vec![(3, 0.5), (1, 1.0)]);
    }

    #[test]
    fn test_finished_tweens_are_removed() {
        let mut timeline = Timeline::new();
        let id = timeline.spawn(0, Tween::new(0.0_f32, 1.0, 1.0));
        timeline.spawn(1, Tween::new(0.0_f32, 1.0, 1.0).repeat(Repeat::Forever));

        let mut finished = Vec::new();
        timeline.advance(2.0, |event| {
            if event.finished {
                finished.push(event.id);
            }
        });
        assert_eq!(finished, vec![id]);
        assert_eq!(timeline.len(), 1);
        assert!(timeline.get(id).is_none());
    }

    #[test]
    fn test_kill_is_idempotent() {
        let mut timeline = Timeline::new();
        let id = timeline.spawn(0, Tween::new(0.0_f32, 1.0, 1.0));
        assert!(timeline.kill(id));
        assert!(!timeline.kill(id));
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_kill_target_removes_competing_tweens() {
        let mut timeline = Timeline::new();
        timeline.spawn(2, Tween::new(0.0_f32, 1.0, 1.0));
        timeline.spawn(2, Tween::new(5.0_f32, 6.0, 1.0));
        timeline.spawn(4, Tween::new(0.0_f32, 1.0, 1.0));
        assert_eq!(timeline.count_target(2), 2);
        assert_eq!(timeline.kill_target(2), 2);
        assert_eq!(timeline.count_target(2), 0);
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_clear_on_empty_timeline() {
        let mut timeline: Timeline<f32> = Timeline::new();
        timeline.clear();
        timeline.clear();
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_redirect_through_handle() {
        let mut timeline = Timeline::new();
        let id = timeline.spawn(0, Tween::new(0.0_f32, 1.0, 1.0));
        if let Some(tween) = timeline.get_mut(id) {
            tween.redirect(10.0, 20.0);
        }
        let mut last = 0.0;
        timeline.advance(0.5, |event| last = event.value);
        assert_eq!(last, 15.0);
    }
}
