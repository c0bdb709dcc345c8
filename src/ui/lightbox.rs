// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay view.
//!
//! A full-window darkened backdrop with the current project image, its
//! caption, a "current / total" counter and prev/next/close controls.
//! Clicking the backdrop closes; clicking inside the frame does not.

use crate::i18n::I18n;
use crate::showcase::prefetch::LoadedImage;
use crate::showcase::Project;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, mouse_area, row, text, Space};
use iced::{Alignment, Element, Length};
use std::sync::Arc;

/// Messages emitted by the lightbox overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Next,
    Previous,
    /// Click on the darkened area outside the frame.
    BackdropPressed,
    /// Click inside the frame; captured so it never reaches the backdrop.
    FramePressed,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub project: &'a Project,
    /// Zero-based index of the shown project.
    pub index: usize,
    pub total: usize,
    /// Prefetched image, when the cache already has it.
    pub cached: Option<Arc<LoadedImage>>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let picture: Element<'_, Message> = match &ctx.cached {
        Some(loaded) => image(image::Handle::from_bytes(loaded.bytes.clone()))
            .width(Length::Fixed(840.0))
            .into(),
        None if ctx.project.image.is_file() => {
            image(image::Handle::from_path(&ctx.project.image))
                .width(Length::Fixed(840.0))
                .into()
        }
        None => container(
            text(ctx.i18n.tr("gallery-placeholder")).size(typography::BODY_LG),
        )
        .width(Length::Fixed(840.0))
        .height(Length::Fixed(480.0))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into(),
    };

    let caption = column![
        text(ctx.project.title.clone()).size(typography::TITLE_MD),
        text(ctx.project.blurb.clone()).size(typography::BODY),
        text(format!("{} / {}", ctx.index + 1, ctx.total)).size(typography::CAPTION),
    ]
    .spacing(spacing::XXS)
    .align_x(Alignment::Center);

    let controls = row![
        button(text("‹").size(typography::TITLE_LG))
            .on_press(Message::Previous)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::ghost),
        Space::new().width(Length::Fixed(spacing::XL)),
        button(text(ctx.i18n.tr("lightbox-close")).size(typography::BODY))
            .on_press(Message::Close)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::ghost),
        Space::new().width(Length::Fixed(spacing::XL)),
        button(text("›").size(typography::TITLE_LG))
            .on_press(Message::Next)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::ghost),
    ]
    .align_y(Alignment::Center);

    let frame = mouse_area(
        container(
            column![picture, caption, controls]
                .spacing(spacing::LG)
                .align_x(Alignment::Center),
        )
        .padding(spacing::XL),
    )
    .on_press(Message::FramePressed);

    let backdrop = mouse_area(
        container(frame)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::container::overlay_backdrop),
    )
    .on_press(Message::BackdropPressed);

    backdrop.into()
}
