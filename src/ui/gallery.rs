// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid view.
//!
//! Renders the manifest as a fixed-column grid of thumbnails between the
//! header and footer chrome, with dedicated loading, error, and empty
//! states. Selection is the only event this surface emits; everything about
//! the open item is the viewer component's business.

use crate::manifest::{self, DisplayItem};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::navbar;
use crate::ui::styles;
use crate::ui::widgets::scroll_lock;
use iced::widget::image::Handle;
use iced::widget::{button, Column, Container, Image, Row, Scrollable, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};
use std::path::Path;
use std::sync::Arc;

/// Messages emitted by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ItemSelected(usize),
}

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub title: &'a str,
    pub items: &'a [Arc<DisplayItem>],
    pub root: &'a Path,
    pub columns: usize,
    pub loading: bool,
    pub load_error: Option<&'a str>,
    /// True while the detail overlay is open; the grid must not scroll
    /// underneath it.
    pub scroll_locked: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = navbar::view(ctx.title);

    let body: Element<'_, Message> = if ctx.loading {
        status_view("Loading images…".to_string())
    } else if let Some(error) = ctx.load_error {
        status_view(format!("Could not load the gallery: {error}"))
    } else if ctx.items.is_empty() {
        empty_view()
    } else {
        grid(ctx.items, ctx.root, ctx.columns.max(1), ctx.scroll_locked)
    };

    let footer = Container::new(
        Text::new(format!("© {}", ctx.title)).size(typography::CAPTION),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding(spacing::SM)
    .style(styles::container::footer);

    Column::new().push(header).push(body).push(footer).into()
}

fn grid<'a>(
    items: &'a [Arc<DisplayItem>],
    root: &Path,
    columns: usize,
    scroll_locked: bool,
) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::MD);

    for (row_index, chunk) in items.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(spacing::MD);

        for (column_index, item) in chunk.iter().enumerate() {
            row = row.push(thumbnail(item, row_index * columns + column_index, root));
        }
        // Pad the trailing row so cell widths stay uniform.
        for _ in chunk.len()..columns {
            row = row.push(
                Space::new()
                    .width(Length::FillPortion(1))
                    .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT)),
            );
        }

        rows = rows.push(row);
    }

    let scrollable = Scrollable::new(
        Container::new(rows).width(Length::Fill).padding(spacing::MD),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    scroll_lock(scrollable, scroll_locked).into()
}

fn thumbnail<'a>(item: &'a Arc<DisplayItem>, index: usize, root: &Path) -> Element<'a, Message> {
    let photo = Image::new(Handle::from_path(item.resolve(root)))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .content_fit(ContentFit::Cover);

    button(photo)
        .padding(0)
        .width(Length::FillPortion(1))
        .style(styles::button::thumbnail)
        .on_press(Message::ItemSelected(index))
        .into()
}

/// Centered single-line status used for the loading and error states.
fn status_view<'a>(message: String) -> Element<'a, Message> {
    Container::new(
        Text::new(message)
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

/// Rendered when the manifest is present but lists no images.
fn empty_view<'a>() -> Element<'a, Message> {
    let title = Text::new("No images yet")
        .size(typography::TITLE_SM)
        .color(palette::GRAY_400);

    let subtitle = Text::new(format!(
        "Drop photos into {}/ and run with --scan to index them",
        manifest::IMAGES_DIR
    ))
    .size(typography::BODY)
    .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
