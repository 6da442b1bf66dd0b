// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure interaction state kept separate from the widget tree so it can be
//! tested without a running event loop.

pub mod drag;

pub use drag::{DragState, SwipeOutcome, MIN_SWIPE_DISTANCE};
