// SPDX-License-Identifier: MPL-2.0
//! Styles for the detail overlay: backdrop and info panel.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Near-opaque dimming layer behind the detail panel.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Side panel showing the item name and description.
pub fn info_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.08, 0.08, 0.1))),
        text_color: Some(WHITE),
        ..Default::default()
    }
}
