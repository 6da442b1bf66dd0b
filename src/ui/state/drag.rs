// SPDX-License-Identifier: MPL-2.0
//! Vertical swipe state for the detail overlay.
//!
//! Tracks one drag gesture along the vertical axis: where it began, where the
//! pointer is now, and the resulting displacement. On release the total
//! displacement decides between dismissing the overlay and snapping the photo
//! back. The displacement is recomputed from the origin on every move rather
//! than accumulated, so a missed intermediate event can never skew it.

use std::time::{Duration, Instant};

/// Minimum displacement, in pixels, for a release to count as a dismissal.
/// Direction-agnostic: swipes up and down both dismiss.
pub const MIN_SWIPE_DISTANCE: f32 = 50.0;

/// Duration of the snap-back settle animation after a short swipe.
pub const SNAP_BACK_DURATION: Duration = Duration::from_millis(300);

/// Decision taken when a drag gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Displacement exceeded [`MIN_SWIPE_DISTANCE`]; the overlay should close.
    Dismiss,
    /// Short swipe; the photo returns to its rest position.
    SnapBack,
    /// The gesture never produced a move event. Not a swipe at all.
    Ignored,
}

/// Snap-back interpolation, view-only. The model offset is already zero while
/// this runs.
#[derive(Debug, Clone, Copy)]
struct Settle {
    from: f32,
    started: Instant,
}

/// Manages one open session's swipe state.
#[derive(Debug, Clone)]
pub struct DragState {
    /// Vertical coordinate where the drag began.
    origin: Option<f32>,
    /// Most recent vertical coordinate seen during the drag.
    last: Option<f32>,
    /// Signed displacement `origin - last`, applied to the photo as `-offset`.
    offset: f32,
    /// True strictly between drag-start and drag-end.
    is_dragging: bool,
    /// True from open until the first gesture begins; suppresses the
    /// snap-back transition so nothing animates before any interaction.
    fresh_open: bool,
    settle: Option<Settle>,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            origin: None,
            last: None,
            offset: 0.0,
            is_dragging: false,
            fresh_open: true,
            settle: None,
        }
    }
}

impl DragState {
    /// Returns the state to its fresh-open values. Called on every transition
    /// into the open state, including when a new item replaces an open one.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Starts a drag at the given vertical coordinate.
    pub fn begin(&mut self, position: f32) {
        self.is_dragging = true;
        // Cleared so a stale end coordinate from a previous gesture cannot
        // be reused by this one.
        self.last = None;
        self.origin = Some(position);
        self.fresh_open = false;
        self.settle = None;
    }

    /// Records a move event. No-op unless a drag is in progress; moves
    /// reported without a prior start (or after the end) are dropped.
    /// Returns whether the offset changed.
    pub fn track(&mut self, position: f32) -> bool {
        // Presence check, not truthiness: 0.0 is a valid coordinate.
        let Some(origin) = self.origin else {
            return false;
        };
        if !self.is_dragging {
            return false;
        }

        self.last = Some(position);
        self.offset = origin - position;
        true
    }

    /// Ends the drag and decides what happens to the overlay.
    pub fn finish(&mut self) -> SwipeOutcome {
        self.is_dragging = false;

        let (Some(origin), Some(last)) = (self.origin, self.last) else {
            // The gesture never moved; treat it as a non-event.
            self.offset = 0.0;
            return SwipeOutcome::Ignored;
        };

        let distance = origin - last;
        if distance.abs() > MIN_SWIPE_DISTANCE {
            return SwipeOutcome::Dismiss;
        }

        if self.transition_enabled() && self.offset != 0.0 {
            self.settle = Some(Settle {
                from: self.offset,
                started: Instant::now(),
            });
        }
        self.offset = 0.0;
        SwipeOutcome::SnapBack
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn is_fresh_open(&self) -> bool {
        self.fresh_open
    }

    /// Whether the snap-back transition may play. Active exactly when no drag
    /// is in progress and at least one gesture has happened since open.
    pub fn transition_enabled(&self) -> bool {
        !self.is_dragging && !self.fresh_open
    }

    /// The displacement to draw right now. Equals [`offset`](Self::offset)
    /// while dragging (zero-lag pointer tracking); during a snap-back it
    /// eases from the release displacement down to zero.
    pub fn visual_offset(&self, now: Instant) -> f32 {
        if self.is_dragging {
            return self.offset;
        }

        if let Some(settle) = self.settle {
            let elapsed = now.saturating_duration_since(settle.started);
            if elapsed < SNAP_BACK_DURATION {
                // Cubic ease-out toward zero.
                let t = elapsed.as_secs_f32() / SNAP_BACK_DURATION.as_secs_f32();
                return settle.from * (1.0 - t).powi(3);
            }
        }

        self.offset
    }

    /// Whether the snap-back animation is still running.
    pub fn is_settling(&self, now: Instant) -> bool {
        self.settle
            .is_some_and(|s| now.saturating_duration_since(s.started) < SNAP_BACK_DURATION)
    }

    /// Drops the settle interpolation once it has run its course.
    pub fn tick(&mut self, now: Instant) {
        if let Some(settle) = self.settle {
            if now.saturating_duration_since(settle.started) >= SNAP_BACK_DURATION {
                self.settle = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragged(origin: f32, to: f32) -> DragState {
        let mut state = DragState::default();
        state.begin(origin);
        state.track(to);
        state
    }

    #[test]
    fn default_state_is_fresh_and_at_rest() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert!(state.is_fresh_open());
        assert_eq!(state.offset(), 0.0);
        assert!(!state.transition_enabled());
    }

    #[test]
    fn begin_marks_dragging_and_ends_fresh_open() {
        let mut state = DragState::default();
        state.begin(120.0);
        assert!(state.is_dragging());
        assert!(!state.is_fresh_open());
        assert!(!state.transition_enabled());
    }

    #[test]
    fn offset_is_origin_minus_position_not_cumulative() {
        let mut state = DragState::default();
        state.begin(100.0);
        state.track(90.0);
        assert_eq!(state.offset(), 10.0);
        state.track(90.0);
        assert_eq!(state.offset(), 10.0);
        state.track(130.0);
        assert_eq!(state.offset(), -30.0);
    }

    #[test]
    fn track_without_begin_is_ignored() {
        let mut state = DragState::default();
        assert!(!state.track(40.0));
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn track_after_finish_is_ignored() {
        let mut state = dragged(100.0, 80.0);
        state.finish();
        assert!(!state.track(10.0));
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn origin_zero_is_a_valid_coordinate() {
        let mut state = DragState::default();
        state.begin(0.0);
        assert!(state.track(-60.0));
        assert_eq!(state.offset(), 60.0);
        assert_eq!(state.finish(), SwipeOutcome::Dismiss);
    }

    #[test]
    fn long_swipe_up_dismisses() {
        let mut state = dragged(100.0, 40.0);
        assert_eq!(state.finish(), SwipeOutcome::Dismiss);
        assert!(!state.is_dragging());
    }

    #[test]
    fn long_swipe_down_dismisses() {
        let mut state = dragged(100.0, 160.0);
        assert_eq!(state.finish(), SwipeOutcome::Dismiss);
    }

    #[test]
    fn short_swipe_snaps_back_to_zero() {
        let mut state = dragged(100.0, 70.0);
        assert_eq!(state.offset(), 30.0);
        assert_eq!(state.finish(), SwipeOutcome::SnapBack);
        assert_eq!(state.offset(), 0.0);
        assert!(state.transition_enabled());
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut state = dragged(100.0, 50.0);
        assert_eq!(state.finish(), SwipeOutcome::SnapBack);
    }

    #[test]
    fn finish_without_any_move_is_ignored() {
        let mut state = DragState::default();
        state.begin(200.0);
        assert_eq!(state.finish(), SwipeOutcome::Ignored);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn begin_clears_stale_end_coordinate() {
        let mut state = dragged(100.0, 20.0);
        state.finish();

        state.begin(150.0);
        assert_eq!(state.finish(), SwipeOutcome::Ignored);
    }

    #[test]
    fn snap_back_settles_toward_zero() {
        let mut state = dragged(100.0, 70.0);
        state.finish();

        let now = Instant::now();
        assert!(state.is_settling(now));
        let drawn = state.visual_offset(now);
        assert!(drawn > 0.0 && drawn <= 30.0);

        let later = now + SNAP_BACK_DURATION;
        assert!(!state.is_settling(later));
        assert_eq!(state.visual_offset(later), 0.0);

        state.tick(later);
        assert!(!state.is_settling(now));
    }

    #[test]
    fn ignored_finish_does_not_settle() {
        let mut state = DragState::default();
        state.begin(200.0);
        state.finish();
        assert!(!state.is_settling(Instant::now()));
    }

    #[test]
    fn reset_restores_fresh_open() {
        let mut state = dragged(100.0, 70.0);
        state.finish();
        state.reset();

        assert!(state.is_fresh_open());
        assert_eq!(state.offset(), 0.0);
        assert!(!state.is_settling(Instant::now()));
    }
}
