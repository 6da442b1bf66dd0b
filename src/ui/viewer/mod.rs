// SPDX-License-Identifier: MPL-2.0
//! Detail overlay shown when a thumbnail is selected.
//!
//! [`component`] owns the open/closed state and the swipe-dismiss logic;
//! [`pane`] renders the overlay (backdrop, close control, photo, info panel).

pub mod component;
pub mod pane;
