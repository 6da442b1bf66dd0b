// SPDX-License-Identifier: MPL-2.0
//! Detail overlay component encapsulating state and update logic.
//!
//! The component owns the "currently displayed item or none" state plus the
//! swipe state for the open session. All transitions are synchronous and
//! total: out-of-order or duplicate input events are absorbed by guards
//! rather than treated as failures, which keeps the gesture handling robust
//! against platform event-ordering quirks.

use crate::manifest::DisplayItem;
use crate::ui::state::{DragState, SwipeOutcome};
use crate::ui::viewer::pane;
use iced::widget::image::Handle;
use iced::widget::Space;
use iced::{mouse, touch, Element, Event, Point};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Messages emitted by the overlay's widgets, plus raw window events routed
/// here while a drag is active (so a release outside the photo region is
/// still observed).
#[derive(Debug, Clone)]
pub enum Message {
    /// Press outside the panel, photo, and close control.
    BackdropPressed,
    /// Press on the panel itself; swallowed so it never dismisses.
    PanelPressed,
    ClosePressed,
    /// Press landed on the photo region.
    ImagePressed,
    /// Cursor moved within the photo region.
    ImageCursorMoved(Point),
    RawEvent(Event),
}

/// Side effects the application should react to after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The overlay closed (backdrop, close control, or completed swipe).
    Dismissed,
}

/// Overlay state: the selected item (if any) and the session's drag state.
#[derive(Debug, Clone, Default)]
pub struct State {
    item: Option<Arc<DisplayItem>>,
    drag: DragState,
    /// Last known vertical cursor position over the photo region; a press
    /// there starts the drag at this coordinate.
    cursor_y: Option<f32>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the overlay for `item`. The drag state is fully reset, also
    /// when `item` replaces one that is already open.
    pub fn open(&mut self, item: Arc<DisplayItem>) {
        self.item = Some(item);
        self.drag.reset();
        self.cursor_y = None;
    }

    /// Closes the overlay. Idempotent.
    pub fn close(&mut self) {
        self.item = None;
    }

    pub fn is_open(&self) -> bool {
        self.item.is_some()
    }

    pub fn current_item(&self) -> Option<&DisplayItem> {
        self.item.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_settling(&self, now: Instant) -> bool {
        self.drag.is_settling(now)
    }

    /// Current swipe displacement; exposed for the release decision tests.
    pub fn offset(&self) -> f32 {
        self.drag.offset()
    }

    pub fn tick(&mut self, now: Instant) {
        self.drag.tick(now);
    }

    /// Handle an overlay message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message)`
    /// pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::BackdropPressed | Message::ClosePressed => {
                if self.item.is_none() {
                    return Effect::None;
                }
                self.close();
                Effect::Dismissed
            }
            Message::PanelPressed => Effect::None,
            Message::ImagePressed => {
                if self.item.is_none() {
                    return Effect::None;
                }
                if let Some(position) = self.cursor_y {
                    self.drag.begin(position);
                }
                Effect::None
            }
            Message::ImageCursorMoved(position) => {
                self.cursor_y = Some(position.y);
                if self.drag.is_dragging() {
                    self.drag.track(position.y);
                }
                Effect::None
            }
            Message::RawEvent(event) => self.handle_raw(&event),
        }
    }

    fn handle_raw(&mut self, event: &Event) -> Effect {
        if !self.drag.is_dragging() {
            return Effect::None;
        }

        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor_y = Some(position.y);
                self.drag.track(position.y);
                Effect::None
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => self.release(),
            Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                self.cursor_y = Some(position.y);
                self.drag.track(position.y);
                Effect::None
            }
            Event::Touch(
                touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
            ) => self.release(),
            _ => Effect::None,
        }
    }

    fn release(&mut self) -> Effect {
        match self.drag.finish() {
            SwipeOutcome::Dismiss => {
                self.close();
                Effect::Dismissed
            }
            SwipeOutcome::SnapBack | SwipeOutcome::Ignored => Effect::None,
        }
    }

    /// Renders the overlay, or nothing while closed.
    pub fn view<'a>(&'a self, gallery_root: &Path, now: Instant) -> Element<'a, Message> {
        match self.item.as_deref() {
            Some(item) => pane::view(pane::ViewContext {
                item,
                photo: Handle::from_path(item.resolve(gallery_root)),
                translation: -self.drag.visual_offset(now),
                is_dragging: self.drag.is_dragging(),
            }),
            None => Space::new().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> Arc<DisplayItem> {
        Arc::new(DisplayItem {
            name: name.to_string(),
            source: format!("/images/{name}"),
            description: None,
        })
    }

    fn cursor_moved(y: f32) -> Event {
        Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(0.0, y),
        })
    }

    fn released() -> Event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    fn start_drag(state: &mut State, y: f32) {
        state.handle(Message::ImageCursorMoved(Point::new(0.0, y)));
        state.handle(Message::ImagePressed);
    }

    #[test]
    fn open_then_close_is_idempotent() {
        let mut state = State::new();
        state.open(item("a.jpg"));
        assert!(state.is_open());

        state.close();
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn backdrop_press_dismisses() {
        let mut state = State::new();
        state.open(item("a.jpg"));

        assert_eq!(state.handle(Message::BackdropPressed), Effect::Dismissed);
        assert!(!state.is_open());
    }

    #[test]
    fn backdrop_press_while_closed_is_a_no_op() {
        let mut state = State::new();
        assert_eq!(state.handle(Message::BackdropPressed), Effect::None);
    }

    #[test]
    fn panel_press_never_dismisses() {
        let mut state = State::new();
        state.open(item("a.jpg"));

        assert_eq!(state.handle(Message::PanelPressed), Effect::None);
        assert!(state.is_open());
    }

    #[test]
    fn long_swipe_dismisses_the_overlay() {
        let mut state = State::new();
        state.open(item("a.jpg"));

        start_drag(&mut state, 100.0);
        state.handle(Message::RawEvent(cursor_moved(40.0)));
        assert_eq!(state.offset(), 60.0);

        assert_eq!(state.handle(Message::RawEvent(released())), Effect::Dismissed);
        assert!(!state.is_open());
    }

    #[test]
    fn short_swipe_snaps_back_and_stays_open() {
        let mut state = State::new();
        state.open(item("a.jpg"));

        start_drag(&mut state, 100.0);
        state.handle(Message::RawEvent(cursor_moved(70.0)));
        assert_eq!(state.offset(), 30.0);

        assert_eq!(state.handle(Message::RawEvent(released())), Effect::None);
        assert!(state.is_open());
        assert_eq!(state.current_item().map(|i| i.name.as_str()), Some("a.jpg"));
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn press_without_movement_never_dismisses() {
        let mut state = State::new();
        state.open(item("a.jpg"));

        start_drag(&mut state, 100.0);
        assert_eq!(state.handle(Message::RawEvent(released())), Effect::None);
        assert!(state.is_open());
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn opening_a_new_item_resets_drag_state() {
        let mut state = State::new();
        state.open(item("a.jpg"));

        start_drag(&mut state, 100.0);
        state.handle(Message::RawEvent(cursor_moved(60.0)));
        assert_eq!(state.offset(), 40.0);

        state.open(item("b.jpg"));
        assert_eq!(state.offset(), 0.0);
        assert!(!state.is_dragging());
        assert_eq!(state.current_item().map(|i| i.name.as_str()), Some("b.jpg"));
    }

    #[test]
    fn raw_events_are_ignored_when_not_dragging() {
        let mut state = State::new();
        state.open(item("a.jpg"));

        state.handle(Message::RawEvent(cursor_moved(40.0)));
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.handle(Message::RawEvent(released())), Effect::None);
        assert!(state.is_open());
    }

    #[test]
    fn press_with_unknown_cursor_position_does_not_start_a_drag() {
        let mut state = State::new();
        state.open(item("a.jpg"));

        state.handle(Message::ImagePressed);
        assert!(!state.is_dragging());
    }

    #[test]
    fn finger_lift_ends_a_touch_drag() {
        let mut state = State::new();
        state.open(item("a.jpg"));

        start_drag(&mut state, 200.0);
        state.handle(Message::RawEvent(Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(0),
            position: Point::new(0.0, 120.0),
        })));
        assert_eq!(state.offset(), 80.0);

        let effect = state.handle(Message::RawEvent(Event::Touch(
            touch::Event::FingerLifted {
                id: touch::Finger(0),
                position: Point::new(0.0, 120.0),
            },
        )));
        assert_eq!(effect, Effect::Dismissed);
        assert!(!state.is_open());
    }
}
