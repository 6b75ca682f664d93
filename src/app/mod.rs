// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the feed coordinator, the repository,
//! localization, and config, and translates top-level messages into side
//! effects like feed fetches and programmatic scrolls. Policy decisions
//! (window sizing, feed source switching, save semantics) stay close to
//! the main update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::data::{FeedRepository, Latency};
use crate::error::DataError;
use crate::i18n::I18n;
use crate::ui::feed::Coordinator;
use iced::{window, Subscription, Task, Theme};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Which backing query fills the feed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedSource {
    #[default]
    Home,
    /// Posts about businesses matching the query.
    Search(String),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    repository: Arc<FeedRepository>,
    coordinator: Coordinator,
    source: FeedSource,
    search_input: String,
    /// Whether a feed fetch is in flight.
    loading: bool,
    load_error: Option<DataError>,
    /// Post ids saved to the user's list, applied optimistically.
    saved_ids: HashSet<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source", &self.source)
            .field("loading", &self.loading)
            .field("item_count", &self.coordinator.cards().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const WINDOW_DEFAULT_WIDTH: u32 = 440;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings: a portrait phone-like frame.
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
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            repository: Arc::new(FeedRepository::seeded(Latency::default())),
            coordinator: Coordinator::default(),
            source: FeedSource::Home,
            search_input: String::new(),
            loading: false,
            load_error: None,
            saved_ids: HashSet::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the initial feed fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);
        let latency = if flags.no_latency {
            Latency::none()
        } else {
            Latency::default()
        };

        let mut app = App {
            i18n,
            config,
            repository: Arc::new(FeedRepository::seeded(latency)),
            ..Self::default()
        };

        let task = app.reload();
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self)
    }

    fn autoplay(&self) -> bool {
        self.config.video_autoplay.unwrap_or(true)
    }
}
