//! The hidden admin-promotion gesture.
//!
//! Tapping the storefront logo several times in quick succession
//! reveals the admin-promotion prompt. The tap counter is local state
//! with a sliding window: taps expire out of the window instead of
//! accumulating forever on a global object.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Taps required within the window, by default.
pub const DEFAULT_REQUIRED_TAPS: u32 = 5;
/// Default sliding window length.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(3);

/// A tap counter that triggers after N taps inside a sliding window.
#[derive(Debug, Clone)]
pub struct PromotionGesture {
    required: u32,
    window: Duration,
    taps: VecDeque<Instant>,
}

impl PromotionGesture {
    /// Create a gesture requiring `required` taps within `window`.
    pub fn new(required: u32, window: Duration) -> Self {
        Self {
            required: required.max(1),
            window,
            taps: VecDeque::new(),
        }
    }

    /// Number of taps currently inside the window.
    pub fn pending(&self) -> usize {
        self.taps.len()
    }

    /// Register a tap.
    ///
    /// Returns `true` when this tap completes the gesture; the
    /// counter resets so the next trigger needs a fresh run.
    pub fn tap(&mut self, now: Instant) -> bool {
        while let Some(&oldest) = self.taps.front() {
            if now.duration_since(oldest) >= self.window {
                self.taps.pop_front();
            } else {
                break;
            }
        }

        self.taps.push_back(now);
        if self.taps.len() >= self.required as usize {
            self.taps.clear();
            return true;
        }
        false
    }

    /// Drop any pending taps.
    pub fn reset(&mut self) {
        self.taps.clear();
    }
}

impl Default for PromotionGesture {
    fn default() -> Self {
        Self::new(DEFAULT_REQUIRED_TAPS, DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggers_on_required_taps() {
        let mut gesture = PromotionGesture::new(3, Duration::from_secs(2));
        let now = Instant::now();

        assert!(!gesture.tap(now));
        assert!(!gesture.tap(now + Duration::from_millis(200)));
        assert!(gesture.tap(now + Duration::from_millis(400)));
        // Counter reset after triggering.
        assert_eq!(gesture.pending(), 0);
    }

    #[test]
    fn test_slow_taps_never_trigger() {
        let mut gesture = PromotionGesture::new(3, Duration::from_secs(1));
        let now = Instant::now();

        assert!(!gesture.tap(now));
        assert!(!gesture.tap(now + Duration::from_secs(2)));
        assert!(!gesture.tap(now + Duration::from_secs(4)));
        // Each tap expired before the next arrived.
        assert_eq!(gesture.pending(), 1);
    }

    #[test]
    fn test_window_slides() {
        let mut gesture = PromotionGesture::new(3, Duration::from_secs(1));
        let now = Instant::now();

        gesture.tap(now);
        gesture.tap(now + Duration::from_millis(900));
        // First tap has fallen out; this is tap 2-of-3, not 3-of-3.
        assert!(!gesture.tap(now + Duration::from_millis(1100)));
        // Third tap inside the sliding window completes it.
        assert!(gesture.tap(now + Duration::from_millis(1200)));
    }

    #[test]
    fn test_reset_clears_pending() {
        let mut gesture = PromotionGesture::new(2, Duration::from_secs(5));
        gesture.tap(Instant::now());
        gesture.reset();
        assert_eq!(gesture.pending(), 0);
    }
}
