// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::showcase::form::SubmissionOutcome;
use crate::showcase::prefetch::LoadedImage;
use crate::showcase::{lightbox, ProjectCollection};
use crate::ui::header;
use crate::ui::lightbox as lightbox_view;
use crate::ui::notifications;
use crate::ui::sections;
use iced::widget::scrollable;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Section(sections::Message),
    Lightbox(lightbox_view::Message),
    Notification(notifications::NotificationMessage),

    /// The page scrollable moved (user input or animation).
    PageScrolled(scrollable::Viewport),
    /// Raw wheel input; cancels any in-flight anchor animation.
    WheelScrolled,
    /// The window was resized.
    WindowResized(Size),
    /// Periodic animation tick.
    Tick(Instant),
    /// A key the page reacts to (arrows and Escape).
    KeyPressed(lightbox::Key),

    /// The back-to-top control was pressed.
    BackToTop,
    /// The floating contact shortcut was pressed.
    FloatingContactPressed,

    /// The simulated form transport settled.
    SubmissionSettled(SubmissionOutcome),
    /// The transient success/error feedback ran its course.
    FeedbackElapsed,

    /// Result from the async content-directory scan.
    ProjectsLoaded {
        result: Result<ProjectCollection, Error>,
    },
    /// Result from prefetching a lightbox image in the background.
    ProjectImageLoaded {
        path: PathBuf,
        result: Result<LoadedImage, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory holding `projects.toml` and project images.
    /// Takes precedence over the `[gallery]` config section.
    pub content_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `VITRINE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `VITRINE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
