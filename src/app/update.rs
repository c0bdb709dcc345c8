// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The single `App::update` entrypoint routes component messages to their
//! state machines and turns the results into tasks: anchor scrolling,
//! focus moves, background image loads and the simulated form transport.

use super::{persistence, App, Message, PULSE_DELAY};
use crate::motion::pointer::{self, MagneticShift};
use crate::motion::{ScrollAnimation, Viewport};
use crate::showcase::form::{
    Draft, SubmissionOutcome, SubmitDecision, ERROR_RESET_DELAY, SUBMIT_DELAY,
    SUCCESS_RESET_DELAY,
};
use crate::showcase::{lightbox, prefetch, SectionId};
use crate::ui::design_tokens::sizing;
use crate::ui::header;
use crate::ui::lightbox as lightbox_view;
use crate::ui::notifications::Notification;
use crate::ui::sections::{self, consultation};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Nominal size of the hero call-to-action, used by the magnetic math.
const CTA_WIDTH: f32 = 240.0;
const CTA_HEIGHT: f32 = 48.0;

/// Nominal size of a tilt card.
const CARD_WIDTH: f32 = sizing::GALLERY_CARD_WIDTH;
const CARD_HEIGHT: f32 = 200.0;

/// Id of the page scrollable, shared between the view and scroll tasks.
pub fn scroll_id() -> Id {
    Id::new("page-scroll")
}

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(msg) => match header::update(msg, &mut self.menu_open) {
                header::Event::None => Task::none(),
                header::Event::NavigateTo(section) => self.scroll_to_section(section),
            },

            Message::Section(msg) => self.update_section(msg),

            Message::Lightbox(msg) => self.update_lightbox(msg),

            Message::Notification(msg) => {
                self.notifications.update(msg);
                Task::none()
            }

            Message::PageScrolled(viewport) => {
                self.scroll_offset = viewport.absolute_offset().y;
                let vp = Viewport::new(self.scroll_offset, viewport.bounds().height);
                self.reveal.on_viewport(vp);
                self.handle_counter_trigger(vp, Instant::now());
                Task::none()
            }

            Message::WheelScrolled => {
                // Manual input takes the wheel back from an anchor animation.
                self.scroll_animation = None;
                Task::none()
            }

            Message::WindowResized(size) => {
                self.window_size = size;
                if size.width > header::DESKTOP_BREAKPOINT {
                    self.menu_open = false;
                }
                self.carousel.set_width(size.width);
                self.reveal
                    .set_options(crate::motion::ObserverOptions::entrance_for_width(
                        size.width,
                    ));
                if size.width <= pointer::POINTER_EFFECTS_MIN_WIDTH {
                    self.cta_shift = MagneticShift::default();
                    self.hovered_card = None;
                }
                Task::none()
            }

            Message::Tick(now) => self.tick(now),

            Message::KeyPressed(key) => self.handle_key(key),

            Message::BackToTop => self.animate_scroll_to(0.0),

            Message::FloatingContactPressed => self.scroll_to_section(SectionId::Consultation),

            Message::SubmissionSettled(outcome) => {
                self.form.settle(outcome);
                let reset_delay = match outcome {
                    SubmissionOutcome::Delivered => {
                        // A delivered request clears the stored draft.
                        let warn = persistence::store_form_draft(
                            &mut self.app_state,
                            &Draft::default(),
                        );
                        self.push_warning(warn);
                        self.notifications
                            .push(Notification::success("notification-form-delivered"));
                        SUCCESS_RESET_DELAY
                    }
                    SubmissionOutcome::Failed => {
                        self.notifications
                            .push(Notification::error("notification-form-failed"));
                        ERROR_RESET_DELAY
                    }
                };
                Task::perform(tokio::time::sleep(reset_delay), |_| {
                    Message::FeedbackElapsed
                })
            }

            Message::FeedbackElapsed => {
                self.form.finish_feedback();
                self.active_field = None;
                Task::none()
            }

            Message::ProjectsLoaded { result } => {
                match result {
                    Ok(collection) if !collection.is_empty() => {
                        let filter = self.projects.filter();
                        self.projects = collection;
                        self.projects.set_filter(filter);
                        self.lightbox.close();
                    }
                    Ok(_) => {
                        self.notifications
                            .push(Notification::info("notification-content-empty"));
                    }
                    Err(_) => {
                        self.notifications
                            .push(Notification::warning("notification-content-load-error"));
                    }
                }
                Task::none()
            }

            Message::ProjectImageLoaded { path, result } => {
                self.loads_in_flight.remove(&path);
                match result {
                    Ok(image) => self.image_cache.insert(path, image),
                    Err(_) => {
                        self.notifications
                            .push(Notification::warning("notification-image-load-error"));
                    }
                }
                Task::none()
            }
        }
    }

    fn update_section(&mut self, message: sections::Message) -> Task<Message> {
        match message {
            sections::Message::CtaPressed => self.scroll_to_section(SectionId::Consultation),

            sections::Message::CtaCursorMoved(position) => {
                self.cta_shift = pointer::magnetic_shift(
                    position.x,
                    position.y,
                    CTA_WIDTH,
                    CTA_HEIGHT,
                    self.window_size.width,
                );
                Task::none()
            }

            sections::Message::CtaCursorLeft => {
                self.cta_shift = MagneticShift::default();
                Task::none()
            }

            sections::Message::CardCursorMoved {
                group,
                index,
                position,
            } => {
                let tilt = pointer::tilt_transform(
                    position.x,
                    position.y,
                    CARD_WIDTH,
                    CARD_HEIGHT,
                    self.window_size.width,
                );
                self.hovered_card = if tilt == pointer::TiltTransform::default() {
                    None
                } else {
                    Some((group, index))
                };
                Task::none()
            }

            sections::Message::CardCursorLeft => {
                self.hovered_card = None;
                Task::none()
            }

            sections::Message::FilterSelected(filter) => {
                self.projects.set_filter(filter);
                let warn = persistence::store_gallery_filter(&mut self.app_state, filter);
                self.push_warning(warn);
                Task::none()
            }

            sections::Message::ProjectOpened(index) => {
                self.lightbox.open(index, self.projects.len());
                self.prefetch_lightbox_images()
            }

            sections::Message::CarouselNext => {
                self.carousel.advance(Instant::now());
                Task::none()
            }

            sections::Message::CarouselPrevious => {
                self.carousel.retreat(Instant::now());
                Task::none()
            }

            sections::Message::CarouselPage(index) => {
                self.carousel.go_to(index, Instant::now());
                Task::none()
            }

            sections::Message::CarouselHovered(hovered) => {
                self.carousel.set_hovered(hovered, Instant::now());
                Task::none()
            }

            sections::Message::FormInput(field, value) => {
                // Moving to another input counts as leaving the previous
                // one, which is when its predicate runs.
                if let Some(previous) = self.active_field {
                    if previous != field {
                        self.form.blur(previous);
                    }
                }
                self.active_field = Some(field);
                self.form.input(field, value);
                Task::none()
            }

            sections::Message::FormFieldDone(field) => {
                self.form.blur(field);
                self.active_field = None;
                if self.config.form.draft_autosave.unwrap_or(true) {
                    let draft = self.form.draft();
                    let warn = persistence::store_form_draft(&mut self.app_state, &draft);
                    self.push_warning(warn);
                }
                Task::none()
            }

            sections::Message::FormSubmit => match self.form.submit() {
                SubmitDecision::Blocked { first_invalid } => {
                    operation::focus(consultation::input_id(first_invalid))
                }
                SubmitDecision::Accepted => {
                    // The simulated transport always delivers, matching the
                    // page it replaces; `Failed` stays reachable for tests.
                    Task::perform(tokio::time::sleep(SUBMIT_DELAY), |_| {
                        Message::SubmissionSettled(SubmissionOutcome::Delivered)
                    })
                }
            },
        }
    }

    fn update_lightbox(&mut self, message: lightbox_view::Message) -> Task<Message> {
        let len = self.projects.len();
        match message {
            lightbox_view::Message::Close | lightbox_view::Message::BackdropPressed => {
                self.lightbox.close();
                Task::none()
            }
            lightbox_view::Message::Next => {
                self.lightbox.next(len);
                self.prefetch_lightbox_images()
            }
            lightbox_view::Message::Previous => {
                self.lightbox.previous(len);
                self.prefetch_lightbox_images()
            }
            // Captured so frame clicks never fall through to the backdrop.
            lightbox_view::Message::FramePressed => Task::none(),
        }
    }

    fn handle_key(&mut self, key: lightbox::Key) -> Task<Message> {
        if let Some(action) = self.lightbox.key_action(key) {
            self.lightbox.apply(action, self.projects.len());
            return match action {
                lightbox::Action::Close => Task::none(),
                _ => self.prefetch_lightbox_images(),
            };
        }

        // With the overlay closed, Escape still dismisses the mobile menu.
        if key == lightbox::Key::Escape && self.menu_open {
            self.menu_open = false;
        }
        Task::none()
    }

    fn tick(&mut self, now: Instant) -> Task<Message> {
        self.typing.tick(now);

        for (value, counter) in self.counter_values.iter_mut().zip(&mut self.counters) {
            *value = counter.tick(now);
        }

        if self.config.carousel.autoplay.unwrap_or(true) {
            let _ = self.carousel.tick(now);
        }

        let _ = self.notifications.expire(now);

        if !self.pulse_visible
            && now.saturating_duration_since(self.started_at) >= PULSE_DELAY
        {
            self.pulse_visible = true;
        }

        if let Some(animation) = self.scroll_animation {
            let (offset, done) = animation.sample(now);
            if done {
                self.scroll_animation = None;
            }
            return operation::scroll_to(scroll_id(), AbsoluteOffset { x: 0.0, y: offset });
        }

        Task::none()
    }

    /// Animates the page to a section anchor, leaving room for the header.
    fn scroll_to_section(&mut self, section: SectionId) -> Task<Message> {
        let target = (section.anchor_offset() - sizing::HEADER_HEIGHT).max(0.0);
        self.animate_scroll_to(target)
    }

    fn animate_scroll_to(&mut self, target: f32) -> Task<Message> {
        if !self.config.motion_enabled() {
            self.scroll_offset = target;
            return operation::scroll_to(scroll_id(), AbsoluteOffset { x: 0.0, y: target });
        }
        self.scroll_animation = Some(ScrollAnimation::new(self.scroll_offset, target, Instant::now()));
        Task::none()
    }

    /// Loads the shown lightbox image and its neighbors into the cache.
    fn prefetch_lightbox_images(&mut self) -> Task<Message> {
        let len = self.projects.len();
        let mut wanted = Vec::new();
        if let Some(current) = self.lightbox.current() {
            wanted.push(current);
        }
        wanted.extend(self.lightbox.prefetch_targets(len));

        let mut tasks = Vec::new();
        for index in wanted {
            let Some(project) = self.projects.get(index) else {
                continue;
            };
            let path = project.image.clone();
            if !path.is_file()
                || self.image_cache.contains(&path)
                || self.loads_in_flight.contains(&path)
            {
                continue;
            }
            self.loads_in_flight.insert(path.clone());
            let load_path = path.clone();
            tasks.push(Task::perform(
                async move { prefetch::load_image(&load_path) },
                move |result| Message::ProjectImageLoaded {
                    path: path.clone(),
                    result,
                },
            ));
        }
        Task::batch(tasks)
    }

    fn push_warning(&mut self, warning: Option<String>) {
        if let Some(key) = warning {
            self.notifications.push(Notification::warning(&key));
        }
    }
}
