// SPDX-License-Identifier: MPL-2.0
//! Overlay layout: dimmed backdrop, centered photo with info panel beside it,
//! and a round close control in the top-right corner.
//!
//! Layering matters here: the photo region and the detail panel are wrapped
//! in their own `mouse_area`s, which capture presses before the backdrop
//! layer underneath can see them. Only presses in the margin around the panel
//! reach the backdrop and dismiss the overlay.

use crate::manifest::DisplayItem;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::Message;
use iced::mouse;
use iced::widget::image::Handle;
use iced::widget::{
    button, mouse_area, responsive, Column, Container, Image, Row, Space, Stack, Text,
};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Padding, Size,
};

/// Data needed to render the overlay for one item.
pub struct ViewContext<'a> {
    pub item: &'a DisplayItem,
    pub photo: Handle,
    /// Vertical translation of the photo in pixels (`-offset`).
    pub translation: f32,
    pub is_dragging: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    // The responsive wrapper provides the viewport size, which the swipe
    // translation geometry depends on.
    responsive(move |available: Size| view_inner(&ctx, available)).into()
}

fn view_inner<'a>(ctx: &ViewContext<'a>, available: Size) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let cursor_interaction = if ctx.is_dragging {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    let photo = Image::new(ctx.photo.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Contain);

    let photo_region = mouse_area(photo)
        .on_press(Message::ImagePressed)
        .on_move(Message::ImageCursorMoved)
        .interaction(cursor_interaction);

    // The drawn translation is applied by shifting the photo's vertical
    // breathing room, so no transform support is needed from the renderer.
    let translated_photo = Container::new(photo_region)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(translation_padding(ctx.translation, available));

    let mut details = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.item.name.as_str()).size(typography::TITLE_MD));
    if let Some(description) = ctx.item.description.as_deref() {
        details = details.push(
            Text::new(description)
                .size(typography::BODY)
                .color(palette::GRAY_200),
        );
    }

    let info_panel = Container::new(details)
        .width(Length::Fixed(sizing::INFO_PANEL_WIDTH))
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::overlay::info_panel);

    let panel = Row::new().push(translated_photo).push(info_panel);

    // Swallows presses so a click on the panel never reaches the backdrop.
    let panel = mouse_area(panel).on_press(Message::PanelPressed);

    // The margin band around the panel is where the backdrop stays reachable.
    let positioned_panel = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: spacing::XL,
            right: spacing::XL * 2.0,
            bottom: spacing::XL,
            left: spacing::XL * 2.0,
        });

    let close_control = Container::new(
        button(
            Text::new("✕")
                .size(typography::TITLE_SM)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fixed(sizing::CLOSE_CONTROL))
        .height(Length::Fixed(sizing::CLOSE_CONTROL))
        .style(styles::button::close_control)
        .on_press(Message::ClosePressed),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Top)
    .padding(spacing::MD);

    Stack::new()
        .push(backdrop)
        .push(positioned_panel)
        .push(close_control)
        .into()
}

/// Converts the swipe translation into asymmetric vertical padding around the
/// photo, derived from the viewport height. Each side floors at zero
/// independently: once the photo's leading edge reaches the viewport edge the
/// opposite padding keeps growing, so the drawn position follows the pointer
/// across the whole window instead of stopping at the rest margin.
fn translation_padding(translation: f32, available: Size) -> Padding {
    let margin = (available.height / 4.0).min(sizing::VIEWER_MARGIN);

    Padding {
        top: (margin + translation).max(0.0),
        right: 0.0,
        bottom: (margin - translation).max(0.0),
        left: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1024.0, 768.0);

    #[test]
    fn resting_translation_is_centered() {
        let padding = translation_padding(0.0, VIEWPORT);
        assert_eq!(padding.top, padding.bottom);
        assert_eq!(padding.top, sizing::VIEWER_MARGIN);
    }

    #[test]
    fn upward_translation_shrinks_top_padding() {
        let padding = translation_padding(-30.0, VIEWPORT);
        assert_eq!(padding.top, sizing::VIEWER_MARGIN - 30.0);
        assert_eq!(padding.bottom, sizing::VIEWER_MARGIN + 30.0);
    }

    #[test]
    fn long_drags_keep_following_past_the_rest_margin() {
        let near = translation_padding(-200.0, VIEWPORT);
        let far = translation_padding(-400.0, VIEWPORT);

        // Top padding floors at zero, but the opposite side keeps moving the
        // photo for every further pixel of drag.
        assert_eq!(near.top, 0.0);
        assert_eq!(far.top, 0.0);
        assert!(far.bottom > near.bottom);
        assert_eq!(far.bottom - near.bottom, 200.0);
    }

    #[test]
    fn padding_never_goes_negative() {
        let padding = translation_padding(10_000.0, VIEWPORT);
        assert_eq!(padding.bottom, 0.0);
        assert!(padding.top > 0.0);
    }

    #[test]
    fn small_viewports_shrink_the_rest_margin() {
        let padding = translation_padding(0.0, Size::new(480.0, 200.0));
        assert_eq!(padding.top, 50.0);
        assert_eq!(padding.bottom, 50.0);
    }
}
