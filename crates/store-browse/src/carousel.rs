//! Circular active-index state machine for the featured carousel.
//!
//! The machine owns no timers: transition and auto-advance deadlines
//! are stored as [`Instant`]s and acted on by [`Carousel::tick`], so
//! callers drive it from whatever clock they have and tests use a
//! manual one.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// How long an index transition stays in flight.
pub const TRANSITION: Duration = Duration::from_millis(700);
/// Interval between auto-play advances.
pub const AUTO_ADVANCE_EVERY: Duration = Duration::from_millis(3000);
/// Radius of the rendered window around the active index.
pub const VISIBLE_RADIUS: usize = 3;

/// Whether an index change is currently animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// No transition in flight.
    Idle,
    /// A transition is in flight until the deadline.
    Transitioning {
        /// When the transition ends.
        until: Instant,
    },
}

/// The result of an accepted index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Index before the change.
    pub from: usize,
    /// Index after the change.
    pub to: usize,
    /// True when the change crossed the loop boundary in either
    /// direction (last to first, or first to last).
    pub wrapped: bool,
}

/// Circular carousel index state.
///
/// Invariants: `active < count` whenever `count > 0`; at most one
/// transition is in flight; `entering` is only set during a wrapping
/// transition and names the index coming in at the loop boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    count: usize,
    active: usize,
    phase: TransitionPhase,
    entering: Option<usize>,
    auto_play: bool,
    next_advance: Option<Instant>,
}

impl Carousel {
    /// Create a machine over `count` items, starting at index 0.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            active: 0,
            phase: TransitionPhase::Idle,
            entering: None,
            auto_play: false,
            next_advance: None,
        }
    }

    /// Number of items the machine rotates over.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The active index. Only meaningful when `count > 0`.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, TransitionPhase::Transitioning { .. })
    }

    /// The index entering at the loop boundary during a wrapping
    /// transition, if any.
    pub fn entering(&self) -> Option<usize> {
        self.entering
    }

    /// Whether auto-play is enabled.
    pub fn is_auto_play(&self) -> bool {
        self.auto_play
    }

    /// Enable or disable auto-play, arming or clearing the deadline.
    pub fn set_auto_play(&mut self, on: bool, now: Instant) {
        self.auto_play = on;
        self.next_advance = if on && self.count > 1 {
            Some(now + AUTO_ADVANCE_EVERY)
        } else {
            None
        };
    }

    /// Advance to the next index.
    ///
    /// Ignored while a transition is in flight, and on lists too
    /// small to rotate. A wrap from the last index back to 0 marks
    /// index 0 as entering.
    pub fn advance(&mut self, now: Instant) -> Option<Step> {
        if self.count < 2 || self.is_transitioning() {
            return None;
        }

        let from = self.active;
        let to = (self.active + 1) % self.count;
        let wrapped = to == 0;
        Some(self.begin_transition(from, to, wrapped, now))
    }

    /// Jump to a specific index (indicator click).
    ///
    /// Ignored while a transition is in flight, out of range, or a
    /// no-move. Wrap detection is symmetric: last-to-first and
    /// first-to-last both mark the target as entering. Manual
    /// selection disables auto-play.
    pub fn select(&mut self, index: usize, now: Instant) -> Option<Step> {
        if self.count == 0 || self.is_transitioning() {
            return None;
        }
        if index >= self.count || index == self.active {
            return None;
        }

        self.auto_play = false;
        self.next_advance = None;

        let from = self.active;
        let wrapped = (from == self.count - 1 && index == 0)
            || (from == 0 && index == self.count - 1);
        Some(self.begin_transition(from, index, wrapped, now))
    }

    /// Act on expired deadlines.
    ///
    /// Ends a finished transition (clearing the entering marker), then
    /// fires a due auto-advance. Returns the step an auto-advance
    /// produced, if any.
    pub fn tick(&mut self, now: Instant) -> Option<Step> {
        if let TransitionPhase::Transitioning { until } = self.phase {
            if now < until {
                return None;
            }
            self.phase = TransitionPhase::Idle;
            self.entering = None;
        }

        if self.auto_play {
            if let Some(at) = self.next_advance {
                if now >= at {
                    return self.advance(now);
                }
            }
        }

        None
    }

    /// Re-sync the machine after the underlying list changed.
    ///
    /// Clamps the active index when the list shrank under it, cancels
    /// a transition whose entering index no longer exists, and resets
    /// to a no-op machine at zero items.
    pub fn sync_count(&mut self, count: usize, now: Instant) {
        self.count = count;

        if count == 0 {
            self.active = 0;
            self.phase = TransitionPhase::Idle;
            self.entering = None;
            self.next_advance = None;
            return;
        }

        if self.active >= count {
            self.active = count - 1;
            self.phase = TransitionPhase::Idle;
            self.entering = None;
        }
        if self.entering.map(|e| e >= count).unwrap_or(false) {
            self.phase = TransitionPhase::Idle;
            self.entering = None;
        }

        if self.auto_play && count > 1 && self.next_advance.is_none() {
            self.next_advance = Some(now + AUTO_ADVANCE_EVERY);
        }
    }

    /// Indices within [`VISIBLE_RADIUS`] of the active index, wrapped
    /// circularly, ascending.
    ///
    /// On short lists the whole range is visible; at loop boundaries
    /// the opposite-end neighbors are included so wrap-around stays
    /// rendered.
    pub fn visible_indices(&self) -> Vec<usize> {
        if self.count == 0 {
            return Vec::new();
        }
        if self.count <= 2 * VISIBLE_RADIUS + 1 {
            return (0..self.count).collect();
        }

        let count = self.count as i64;
        let active = self.active as i64;
        let radius = VISIBLE_RADIUS as i64;
        let window: BTreeSet<usize> = (-radius..=radius)
            .map(|offset| (active + offset).rem_euclid(count) as usize)
            .collect();
        window.into_iter().collect()
    }

    /// Whether an index falls inside the rendered window.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible_indices().contains(&index)
    }

    fn begin_transition(&mut self, from: usize, to: usize, wrapped: bool, now: Instant) -> Step {
        self.active = to;
        self.entering = if wrapped { Some(to) } else { None };
        self.phase = TransitionPhase::Transitioning {
            until: now + TRANSITION,
        };
        if self.auto_play {
            self.next_advance = Some(now + AUTO_ADVANCE_EVERY);
        }
        Step { from, to, wrapped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(carousel: &mut Carousel, now: Instant) -> Instant {
        // Let the in-flight transition finish.
        let later = now + TRANSITION;
        carousel.tick(later);
        later
    }

    #[test]
    fn test_five_advances_wrap_once() {
        let mut carousel = Carousel::new(5);
        let mut now = Instant::now();

        let mut wraps = 0;
        for _ in 0..5 {
            let step = carousel.advance(now).unwrap();
            if step.wrapped {
                wraps += 1;
                assert_eq!(step.from, 4);
                assert_eq!(step.to, 0);
            }
            now = settled(&mut carousel, now);
        }

        assert_eq!(carousel.active(), 0);
        assert_eq!(wraps, 1);
    }

    #[test]
    fn test_advance_ignored_while_transitioning() {
        let mut carousel = Carousel::new(5);
        let now = Instant::now();

        carousel.advance(now).unwrap();
        assert!(carousel.is_transitioning());
        assert_eq!(carousel.advance(now), None);
        assert_eq!(carousel.active(), 1);
    }

    #[test]
    fn test_select_ignored_while_transitioning() {
        let mut carousel = Carousel::new(5);
        let now = Instant::now();

        carousel.advance(now).unwrap();
        assert_eq!(carousel.select(3, now), None);
        assert_eq!(carousel.active(), 1);
    }

    #[test]
    fn test_wrap_sets_entering_until_transition_ends() {
        let mut carousel = Carousel::new(3);
        let mut now = Instant::now();

        now = settled(&mut carousel, now);
        carousel.advance(now).unwrap(); // 0 -> 1
        now = settled(&mut carousel, now);
        carousel.advance(now).unwrap(); // 1 -> 2
        now = settled(&mut carousel, now);

        let step = carousel.advance(now).unwrap(); // 2 -> 0, wraps
        assert!(step.wrapped);
        assert_eq!(carousel.entering(), Some(0));

        settled(&mut carousel, now);
        assert_eq!(carousel.entering(), None);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn test_select_backward_wrap() {
        let mut carousel = Carousel::new(4);
        let now = Instant::now();

        let step = carousel.select(3, now).unwrap(); // 0 -> 3, wraps backward
        assert!(step.wrapped);
        assert_eq!(carousel.entering(), Some(3));
    }

    #[test]
    fn test_select_disables_auto_play() {
        let mut carousel = Carousel::new(4);
        let now = Instant::now();
        carousel.set_auto_play(true, now);

        carousel.select(2, now).unwrap();
        assert!(!carousel.is_auto_play());

        // No auto-advance fires afterwards.
        assert_eq!(carousel.tick(now + AUTO_ADVANCE_EVERY * 3), None);
        assert_eq!(carousel.active(), 2);
    }

    #[test]
    fn test_select_out_of_range_or_same_is_noop() {
        let mut carousel = Carousel::new(3);
        let now = Instant::now();
        assert_eq!(carousel.select(0, now), None);
        assert_eq!(carousel.select(7, now), None);
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn test_auto_play_fires_on_schedule() {
        let mut carousel = Carousel::new(3);
        let now = Instant::now();
        carousel.set_auto_play(true, now);

        // Not yet due.
        assert_eq!(carousel.tick(now + Duration::from_millis(100)), None);

        let step = carousel.tick(now + AUTO_ADVANCE_EVERY).unwrap();
        assert_eq!(step.to, 1);
        assert!(carousel.is_transitioning());
    }

    #[test]
    fn test_empty_machine_is_noop() {
        let mut carousel = Carousel::new(0);
        let now = Instant::now();

        assert_eq!(carousel.advance(now), None);
        assert_eq!(carousel.select(0, now), None);
        assert_eq!(carousel.tick(now), None);
        assert!(carousel.visible_indices().is_empty());
    }

    #[test]
    fn test_single_item_does_not_rotate() {
        let mut carousel = Carousel::new(1);
        let now = Instant::now();
        assert_eq!(carousel.advance(now), None);
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn test_sync_count_clamps_active() {
        let mut carousel = Carousel::new(8);
        let mut now = Instant::now();
        for _ in 0..6 {
            carousel.advance(now);
            now = settled(&mut carousel, now);
        }
        assert_eq!(carousel.active(), 6);

        carousel.sync_count(3, now);
        assert_eq!(carousel.active(), 2);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn test_sync_count_to_zero_resets() {
        let mut carousel = Carousel::new(4);
        let now = Instant::now();
        carousel.advance(now);

        carousel.sync_count(0, now);
        assert_eq!(carousel.active(), 0);
        assert_eq!(carousel.advance(now), None);
    }

    #[test]
    fn test_sync_count_rearms_auto_play() {
        let mut carousel = Carousel::new(4);
        let now = Instant::now();
        carousel.set_auto_play(true, now);
        carousel.sync_count(0, now);
        assert!(carousel.tick(now + AUTO_ADVANCE_EVERY).is_none());

        carousel.sync_count(5, now);
        let step = carousel.tick(now + AUTO_ADVANCE_EVERY).unwrap();
        assert_eq!(step.to, 1);
    }

    #[test]
    fn test_visible_window_small_list_shows_all() {
        let carousel = Carousel::new(5);
        assert_eq!(carousel.visible_indices(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_visible_window_wraps_at_start() {
        // 10 items, active 0: window covers 7,8,9,0,1,2,3.
        let carousel = Carousel::new(10);
        assert_eq!(carousel.visible_indices(), vec![0, 1, 2, 3, 7, 8, 9]);
    }

    #[test]
    fn test_visible_window_mid_list() {
        let mut carousel = Carousel::new(10);
        let mut now = Instant::now();
        for _ in 0..5 {
            carousel.advance(now);
            now = settled(&mut carousel, now);
        }
        assert_eq!(carousel.active(), 5);
        assert_eq!(carousel.visible_indices(), vec![2, 3, 4, 5, 6, 7, 8]);
        assert!(!carousel.is_visible(9));
    }
}
