// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the showcase page.
//!
//! The `App` struct owns every interactive state machine of the page —
//! reveal observers, counters, typing, carousel, gallery, lightbox, form —
//! and translates messages into side effects like state persistence,
//! anchor scrolling and background image loads. Policy decisions (window
//! bounds, tick cadence, persistence format) stay close to the update loop
//! so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::I18n;
use crate::motion::pointer::MagneticShift;
use crate::motion::{
    CounterAnimation, ObserverOptions, Region, RevealObserver, ScrollAnimation, TargetId,
    TypingEffect, Viewport,
};
use crate::showcase::{
    Carousel, CategoryFilter, ConsultationForm, ImageCache, Lightbox, ProjectCollection,
    SectionId, SERVICES, STATS,
};
use crate::ui::notifications;
use crate::ui::sections::CardGroup;
use iced::{Size, Subscription, Task, Theme};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub use config::{
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};

/// Delay before the floating contact button grows its pulse badge.
pub const PULSE_DELAY: Duration = Duration::from_secs(5);

/// Approximate y-extent of the stat strip inside the intro section,
/// relative to the section top. Drives the half-visible counter trigger.
const STATS_STRIP_TOP: f32 = 260.0;
const STATS_STRIP_HEIGHT: f32 = 120.0;

/// Root Iced application state bridging the page state machines,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    app_state: persisted_state::AppState,
    notifications: notifications::Manager,

    window_size: Size,
    scroll_offset: f32,
    scroll_animation: Option<ScrollAnimation>,
    menu_open: bool,

    /// Entrance reveals, one target per section.
    reveal: RevealObserver,
    section_targets: Vec<(SectionId, TargetId)>,
    /// Half-visible trigger for the stat counters.
    counter_trigger: RevealObserver,
    stats_target: TargetId,
    counters: [CounterAnimation; STATS.len()],
    counter_values: [u64; STATS.len()],

    typing: TypingEffect,
    hovered_card: Option<(CardGroup, usize)>,
    cta_shift: MagneticShift,
    pulse_visible: bool,
    started_at: Instant,

    projects: ProjectCollection,
    lightbox: Lightbox,
    image_cache: ImageCache,
    loads_in_flight: HashSet<PathBuf>,

    carousel: Carousel,
    form: ConsultationForm,
    /// Field currently being edited; editing another field "blurs" it.
    active_field: Option<crate::showcase::form::FieldId>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("scroll_offset", &self.scroll_offset)
            .field("lightbox_open", &self.lightbox.is_open())
            .field("projects", &self.projects.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
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

impl App {
    /// Initializes application state and kicks off the async content scan
    /// when a content directory is configured.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (app_state, state_warning) = persisted_state::AppState::load();

        let now = Instant::now();
        let window_size = Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);
        let motion = config.motion_enabled();

        // Entrance reveals for every section.
        let options = ObserverOptions::entrance_for_width(window_size.width);
        let mut reveal = if motion {
            RevealObserver::new(options)
        } else {
            RevealObserver::disabled(options)
        };
        let mut section_targets = Vec::with_capacity(SectionId::ALL.len());
        for section in SectionId::ALL {
            let target = reveal.observe(Region::new(
                section.anchor_offset(),
                section.design_height(),
            ));
            section_targets.push((section, target));
        }

        // Half-visible trigger for the stat strip.
        let mut counter_trigger = if motion {
            RevealObserver::new(ObserverOptions::half_visible())
        } else {
            RevealObserver::disabled(ObserverOptions::half_visible())
        };
        let stats_target = counter_trigger.observe(Region::new(
            SectionId::Intro.anchor_offset() + STATS_STRIP_TOP,
            STATS_STRIP_HEIGHT,
        ));

        // With motion disabled the counters degrade like the reveals do:
        // zero duration, final values from the start.
        let mut counters = if motion {
            STATS.map(|stat| CounterAnimation::new(stat.value))
        } else {
            STATS.map(|stat| CounterAnimation::with_duration(stat.value, Duration::ZERO))
        };
        let counter_values = if motion {
            [0; STATS.len()]
        } else {
            for counter in &mut counters {
                counter.start(now);
            }
            STATS.map(|stat| stat.value)
        };

        let headline = i18n.tr("hero-headline");
        let narrow = window_size.width <= crate::motion::reveal::MOBILE_BREAKPOINT;
        let typing = if motion && !narrow {
            TypingEffect::start(headline, now)
        } else {
            TypingEffect::completed(headline)
        };

        // Gallery: start from the sample catalog; swap in the scanned
        // content directory when the load finishes.
        let mut projects = ProjectCollection::sample();
        if let Some(slug) = &app_state.gallery_filter {
            projects.set_filter(CategoryFilter::from_slug(slug));
        }

        let mut carousel = Carousel::new(SERVICES.len(), window_size.width);
        carousel.set_autoplay_delay(config.carousel.autoplay_delay());
        if config.carousel.autoplay.unwrap_or(true) {
            carousel.start_autoplay(now);
        }

        let form = match (&app_state.form_draft, config.form.draft_autosave) {
            (Some(draft), Some(true)) => ConsultationForm::from_draft(draft),
            (Some(draft), None) => ConsultationForm::from_draft(draft),
            _ => ConsultationForm::new(),
        };

        let mut app = App {
            i18n,
            config,
            app_state,
            notifications: notifications::Manager::new(),
            window_size,
            scroll_offset: 0.0,
            scroll_animation: None,
            menu_open: false,
            reveal,
            section_targets,
            counter_trigger,
            stats_target,
            counters,
            counter_values,
            typing,
            hovered_card: None,
            cta_shift: MagneticShift::default(),
            pulse_visible: false,
            started_at: now,
            projects,
            lightbox: Lightbox::new(),
            image_cache: ImageCache::new(),
            loads_in_flight: HashSet::new(),
            carousel,
            form,
            active_field: None,
        };

        // Evaluate the initial viewport so above-the-fold sections reveal
        // before the first scroll event.
        let initial = Viewport::new(0.0, app.window_size.height);
        app.reveal.on_viewport(initial);
        app.handle_counter_trigger(initial, now);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let content_dir = flags
            .content_dir
            .map(PathBuf::from)
            .or_else(|| app.config.gallery.content_dir.clone());

        let task = match content_dir {
            Some(dir) => Task::perform(
                async move { ProjectCollection::load(&dir) },
                |result| Message::ProjectsLoaded { result },
            ),
            None => Task::none(),
        };

        (app, task)
    }

    /// Window title, localized.
    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    /// Maps the configured theme mode onto an Iced theme.
    fn theme(&self) -> Theme {
        if self.config.general.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self)
    }

    /// Starts the stat counters once the strip crosses its half-visible
    /// trigger.
    fn handle_counter_trigger(&mut self, viewport: Viewport, now: Instant) {
        let transitions = self.counter_trigger.on_viewport(viewport);
        if transitions
            .iter()
            .any(|t| t.id == self.stats_target && t.revealed)
        {
            for counter in &mut self.counters {
                counter.start(now);
            }
        }
    }
}
