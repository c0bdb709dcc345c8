// SPDX-License-Identifier: MPL-2.0
//! Card-based sections: why-us, the promise banner, the process timeline
//! and the partner banner.
//!
//! The card grids share one hover model: at most one card tilts at a time,
//! tracked by the app as `(group, index)`. Iced cannot rotate widgets, so
//! the tilt renders as the lifted card style; the rotation math still runs
//! in `motion::pointer` and drives when the lift applies.

use super::{CardGroup, Message};
use crate::i18n::I18n;
use crate::showcase::{ProcessStep, Service, PROCESS_STEPS, SERVICES};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{column, container, mouse_area, row, text};
use iced::{Alignment, Element, Length};

/// The card currently under the cursor, if any.
pub type HoveredCard = Option<(CardGroup, usize)>;

pub struct WhyContext<'a> {
    pub i18n: &'a I18n,
    pub hovered: HoveredCard,
}

/// Reasons-to-choose-us cards (i18n keys why-card-0..2).
pub fn why<'a>(ctx: WhyContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("why-title")).size(typography::TITLE_LG);

    let mut cards = row![].spacing(spacing::LG);
    for index in 0..3 {
        let card_body = column![
            text(ctx.i18n.tr(&format!("why-card-{index}-title"))).size(typography::TITLE_SM),
            text(ctx.i18n.tr(&format!("why-card-{index}-blurb"))).size(typography::BODY),
        ]
        .spacing(spacing::SM);
        cards = cards.push(tilt_card(CardGroup::Why, index, ctx.hovered, card_body.into()));
    }

    column![title, cards]
        .spacing(spacing::LG)
        .padding([spacing::XL, spacing::XL])
        .width(Length::Fill)
        .into()
}

pub struct BannerContext<'a> {
    pub i18n: &'a I18n,
    pub title_key: &'static str,
    pub body_key: &'static str,
}

/// A full-width text banner (promise and partner sections).
pub fn banner<'a>(ctx: BannerContext<'a>) -> Element<'a, Message> {
    column![
        text(ctx.i18n.tr(ctx.title_key)).size(typography::TITLE_LG),
        text(ctx.i18n.tr(ctx.body_key)).size(typography::BODY_LG),
    ]
    .spacing(spacing::MD)
    .padding([spacing::XL, spacing::XL])
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

pub struct ProcessContext<'a> {
    pub i18n: &'a I18n,
    pub hovered: HoveredCard,
}

/// The four-step process timeline.
pub fn process<'a>(ctx: ProcessContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("process-title")).size(typography::TITLE_LG);

    let mut cards = row![].spacing(spacing::LG);
    for (index, step) in PROCESS_STEPS.iter().enumerate() {
        cards = cards.push(tilt_card(
            CardGroup::Process,
            index,
            ctx.hovered,
            step_body(ctx.i18n, index, step),
        ));
    }

    column![title, cards]
        .spacing(spacing::LG)
        .padding([spacing::XL, spacing::XL])
        .width(Length::Fill)
        .into()
}

fn step_body<'a>(i18n: &'a I18n, index: usize, step: &ProcessStep) -> Element<'a, Message> {
    column![
        text(format!("{:02}", index + 1)).size(typography::TITLE_MD),
        text(i18n.tr(step.title_key)).size(typography::TITLE_SM),
        text(i18n.tr(step.blurb_key)).size(typography::BODY),
    ]
    .spacing(spacing::SM)
    .into()
}

pub struct ServicesGridContext<'a> {
    pub i18n: &'a I18n,
    pub hovered: HoveredCard,
}

/// The full services grid (every service as a card).
pub fn services_grid<'a>(ctx: ServicesGridContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("services-grid-title")).size(typography::TITLE_LG);

    let mut grid = column![].spacing(spacing::LG);
    let mut current_row = row![].spacing(spacing::LG);
    for (index, service) in SERVICES.iter().enumerate() {
        current_row = current_row.push(tilt_card(
            CardGroup::Service,
            index,
            ctx.hovered,
            service_body(ctx.i18n, service),
        ));
        if index % 3 == 2 {
            grid = grid.push(current_row);
            current_row = row![].spacing(spacing::LG);
        }
    }
    grid = grid.push(current_row);

    column![title, grid]
        .spacing(spacing::LG)
        .padding([spacing::XL, spacing::XL])
        .width(Length::Fill)
        .into()
}

fn service_body<'a>(i18n: &'a I18n, service: &Service) -> Element<'a, Message> {
    column![
        text(i18n.tr(service.title_key)).size(typography::TITLE_SM),
        text(i18n.tr(service.blurb_key)).size(typography::BODY),
    ]
    .spacing(spacing::SM)
    .into()
}

/// Wraps a card body in hover tracking and the lifted style while tilted.
fn tilt_card<'a>(
    group: CardGroup,
    index: usize,
    hovered: HoveredCard,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let lifted = hovered == Some((group, index));
    let card = container(body)
        .padding(spacing::LG)
        .width(Length::FillPortion(1))
        .style(if lifted {
            styles::container::card_lifted
        } else {
            styles::container::card
        });

    mouse_area(card)
        .on_move(move |position| Message::CardCursorMoved {
            group,
            index,
            position,
        })
        .on_exit(Message::CardCursorLeft)
        .into()
}
