// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid and the detail
//! overlay.
//!
//! The `App` struct wires together the gallery manifest, persisted
//! preferences, and the viewer component, and translates messages into side
//! effects like the initial manifest load. Policy decisions (window sizing,
//! where the gallery root comes from, when raw events are routed to the
//! viewer) live here, close to the main update loop.

use crate::config;
use crate::error::Error;
use crate::manifest::{self, DisplayItem};
use crate::ui::gallery;
use crate::ui::viewer::component;
use iced::widget::Stack;
use iced::{event, time, window, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Frame interval for the snap-back settle animation.
const SETTLE_TICK: Duration = Duration::from_millis(16);

const DEFAULT_TITLE: &str = "Gallery";

/// Root Iced application state bridging the manifest, the grid, and the
/// detail overlay.
pub struct App {
    title: String,
    gallery_root: PathBuf,
    items: Vec<Arc<DisplayItem>>,
    grid_columns: u16,
    loading: bool,
    load_error: Option<String>,
    viewer: component::State,
    /// Timestamp of the latest animation tick, used to draw the settle.
    now: Instant,
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ManifestLoaded(Result<Vec<DisplayItem>, Error>),
    Gallery(gallery::Message),
    Viewer(component::Message),
    /// Periodic tick driving the snap-back animation.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional gallery root containing `images.json` and `images/`.
    pub gallery_dir: Option<String>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Reads the manifest on a blocking worker so file I/O never stalls the
/// event loop.
async fn load_manifest(path: PathBuf) -> Result<Vec<DisplayItem>, Error> {
    tokio::task::spawn_blocking(move || manifest::load(&path))
        .await
        .unwrap_or_else(|err| Err(Error::Io(err.to_string())))
}

impl Default for App {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            gallery_root: PathBuf::from("."),
            items: Vec::new(),
            grid_columns: config::DEFAULT_GRID_COLUMNS,
            loading: true,
            load_error: None,
            viewer: component::State::new(),
            now: Instant::now(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the asynchronous manifest
    /// load for the resolved gallery root.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut config = config::load().unwrap_or_default();
        if config::sanitize(&mut config) {
            // Persist the repaired values so the next start reads clean ones.
            if let Err(err) = config::save(&config) {
                eprintln!("Failed to save settings: {}", err);
            }
        }

        let gallery_root = flags
            .gallery_dir
            .map(PathBuf::from)
            .or(config.gallery_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let app = App {
            title: config.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            gallery_root: gallery_root.clone(),
            grid_columns: config.grid_columns.unwrap_or(config::DEFAULT_GRID_COLUMNS),
            ..Self::default()
        };

        let manifest_path = gallery_root.join(manifest::MANIFEST_FILE);
        let task = Task::perform(load_manifest(manifest_path), Message::ManifestLoaded);

        (app, task)
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        // Raw window events are only routed while a drag is active, so a
        // pointer release outside the photo region still ends the gesture.
        let drag_events = if self.viewer.is_dragging() {
            event::listen_with(|event, _status, _window| match &event {
                iced::Event::Mouse(
                    iced::mouse::Event::CursorMoved { .. }
                    | iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left),
                )
                | iced::Event::Touch(_) => {
                    Some(Message::Viewer(component::Message::RawEvent(event.clone())))
                }
                _ => None,
            })
        } else {
            Subscription::none()
        };

        let settle_tick = if self.viewer.is_settling(self.now) {
            time::every(SETTLE_TICK).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([drag_events, settle_tick])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ManifestLoaded(Ok(items)) => {
                self.items = items.into_iter().map(Arc::new).collect();
                self.loading = false;
                Task::none()
            }
            Message::ManifestLoaded(Err(err)) => {
                eprintln!("Failed to load gallery manifest: {}", err);
                self.load_error = Some(err.to_string());
                self.loading = false;
                Task::none()
            }
            Message::Gallery(gallery::Message::ItemSelected(index)) => {
                if let Some(item) = self.items.get(index) {
                    self.viewer.open(item.clone());
                }
                Task::none()
            }
            Message::Viewer(viewer_message) => {
                match self.viewer.handle(viewer_message) {
                    component::Effect::Dismissed => {
                        // Nothing to restore by hand: the grid's scroll lock
                        // is derived from viewer state at view time.
                    }
                    component::Effect::None => {}
                }
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                self.viewer.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let grid = gallery::view(gallery::ViewContext {
            title: &self.title,
            items: &self.items,
            root: &self.gallery_root,
            columns: self.grid_columns as usize,
            loading: self.loading,
            load_error: self.load_error.as_deref(),
            scroll_locked: self.viewer.is_open(),
        })
        .map(Message::Gallery);

        if self.viewer.is_open() {
            Stack::new()
                .push(grid)
                .push(
                    self.viewer
                        .view(&self.gallery_root, self.now)
                        .map(Message::Viewer),
                )
                .into()
        } else {
            grid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_app(names: &[&str]) -> App {
        let mut app = App::default();
        let items: Vec<DisplayItem> = names
            .iter()
            .map(|name| DisplayItem {
                name: (*name).to_string(),
                source: format!("/images/{name}"),
                description: None,
            })
            .collect();
        let _ = app.update(Message::ManifestLoaded(Ok(items)));
        app
    }

    #[test]
    fn manifest_loaded_ok_sets_items() {
        let app = loaded_app(&["a.jpg", "b.jpg"]);
        assert!(!app.loading);
        assert_eq!(app.items.len(), 2);
        assert!(app.load_error.is_none());
    }

    #[test]
    fn manifest_loaded_err_records_error() {
        let mut app = App::default();
        let _ = app.update(Message::ManifestLoaded(Err(Error::Io("gone".into()))));

        assert!(!app.loading);
        assert!(app.load_error.as_deref().unwrap().contains("gone"));
        assert!(app.items.is_empty());
    }

    #[test]
    fn selecting_an_item_opens_the_viewer() {
        let mut app = loaded_app(&["a.jpg"]);
        let _ = app.update(Message::Gallery(gallery::Message::ItemSelected(0)));

        assert!(app.viewer.is_open());
        assert_eq!(
            app.viewer.current_item().map(|i| i.name.as_str()),
            Some("a.jpg")
        );
    }

    #[test]
    fn selecting_out_of_range_is_a_no_op() {
        let mut app = loaded_app(&["a.jpg"]);
        let _ = app.update(Message::Gallery(gallery::Message::ItemSelected(7)));
        assert!(!app.viewer.is_open());
    }

    #[test]
    fn backdrop_dismissal_closes_the_viewer() {
        let mut app = loaded_app(&["a.jpg"]);
        let _ = app.update(Message::Gallery(gallery::Message::ItemSelected(0)));
        let _ = app.update(Message::Viewer(component::Message::BackdropPressed));

        assert!(!app.viewer.is_open());
    }

    #[test]
    fn tick_advances_the_animation_clock() {
        let mut app = App::default();
        let later = app.now + Duration::from_millis(100);
        let _ = app.update(Message::Tick(later));
        assert_eq!(app.now, later);
    }

    #[tokio::test]
    async fn background_manifest_load_reads_items() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(manifest::MANIFEST_FILE);
        std::fs::write(&path, r#"[{"name":"a.jpg","src":"/images/a.jpg"}]"#).unwrap();

        let items = load_manifest(path).await.expect("load failed");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "a.jpg");
    }

    #[tokio::test]
    async fn background_manifest_load_reports_a_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let result = load_manifest(dir.path().join(manifest::MANIFEST_FILE)).await;
        assert!(result.is_err());
    }
}
