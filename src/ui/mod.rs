// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`gallery`] - Thumbnail grid with loading/empty states
//! - [`viewer`] - Full-window detail overlay with swipe-dismiss
//! - [`state`] - Reusable interaction state (swipe/drag)
//! - [`navbar`] - Header chrome
//! - [`widgets`] - Custom Iced widgets (scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers, overlay)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod state;
pub mod styles;
pub mod viewer;
pub mod widgets;
