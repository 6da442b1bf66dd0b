// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a photo gallery viewer built with the Iced GUI framework.
//!
//! It renders a scrollable grid of thumbnails backed by a JSON manifest and
//! opens a full-window detail overlay on selection. The overlay supports a
//! vertical swipe gesture: the photo follows the pointer while dragging and,
//! on release, either dismisses the overlay or snaps back into place.

pub mod app;
pub mod config;
pub mod error;
pub mod manifest;
pub mod ui;
