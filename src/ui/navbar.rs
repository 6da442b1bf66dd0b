// SPDX-License-Identifier: MPL-2.0
//! Header bar shown above the thumbnail grid.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Render the header bar with the gallery title.
pub fn view<'a, Message: 'a>(title: &'a str) -> Element<'a, Message> {
    let heading = Text::new(title)
        .size(typography::TITLE_MD)
        .color(palette::WHITE);

    Container::new(Row::new().push(heading).align_y(Vertical::Center))
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::container::navbar)
        .into()
}
