// SPDX-License-Identifier: MPL-2.0
//! Services carousel section.
//!
//! Renders the slice of service cards starting at the carousel's current
//! slide. Fractional slides-per-view surface as one extra partially
//! meaningful card (the native analogue of the sliver of the next slide),
//! with prev/next arrows and clickable pagination bullets underneath.
//! Hovering anywhere over the strip pauses autoplay.

use super::Message;
use crate::i18n::I18n;
use crate::showcase::carousel::Carousel;
use crate::showcase::SERVICES;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, mouse_area, row, text, Space};
use iced::{Alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub carousel: &'a Carousel,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("services-title")).size(typography::TITLE_LG);

    let layout = ctx.carousel.layout();
    let visible = (layout.slides_per_view.ceil() as usize).min(SERVICES.len().max(1));

    let mut strip = row![].spacing(layout.gap).align_y(Alignment::Start);
    for offset in 0..visible {
        let index = (ctx.carousel.current() + offset) % SERVICES.len();
        let service = &SERVICES[index];
        strip = strip.push(
            container(
                column![
                    text(ctx.i18n.tr(service.title_key)).size(typography::TITLE_SM),
                    text(ctx.i18n.tr(service.blurb_key)).size(typography::BODY),
                ]
                .spacing(spacing::SM),
            )
            .padding(spacing::LG)
            .height(Length::Fixed(sizing::CAROUSEL_CARD_HEIGHT))
            .width(Length::FillPortion(1))
            .style(styles::container::card),
        );
    }

    let controls = row![
        button(text("‹").size(typography::TITLE_MD))
            .on_press(Message::CarouselPrevious)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::ghost),
        Space::new().width(Length::Fill),
        bullets(ctx.carousel),
        Space::new().width(Length::Fill),
        button(text("›").size(typography::TITLE_MD))
            .on_press(Message::CarouselNext)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::ghost),
    ]
    .align_y(Alignment::Center);

    let body = column![title, strip, controls]
        .spacing(spacing::LG)
        .padding([spacing::XL, spacing::XL])
        .width(Length::Fill);

    mouse_area(body)
        .on_enter(Message::CarouselHovered(true))
        .on_exit(Message::CarouselHovered(false))
        .into()
}

fn bullets(carousel: &Carousel) -> Element<'_, Message> {
    let mut dots = row![].spacing(spacing::XS).align_y(Alignment::Center);
    for index in 0..carousel.slide_count() {
        let active = index == carousel.current();
        dots = dots.push(
            button(Space::new()
                .width(Length::Fixed(if active { 12.0 } else { 8.0 }))
                .height(Length::Fixed(8.0)))
            .on_press(Message::CarouselPage(index))
            .padding(0.0)
            .style(styles::button::bullet(active)),
        );
    }
    dots.into()
}
