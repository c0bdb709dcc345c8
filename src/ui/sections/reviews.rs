// SPDX-License-Identifier: MPL-2.0
//! Client reviews section.

use super::Message;
use crate::i18n::I18n;
use crate::showcase::REVIEWS;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{column, container, row, text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("reviews-title")).size(typography::TITLE_LG);

    let mut cards = row![].spacing(spacing::LG);
    for review in &REVIEWS {
        cards = cards.push(
            container(
                column![
                    text(format!("\u{201c}{}\u{201d}", review.quote)).size(typography::BODY),
                    text(format!("{} — {}", review.author, review.location))
                        .size(typography::BODY_SM),
                ]
                .spacing(spacing::SM),
            )
            .padding(spacing::LG)
            .width(Length::FillPortion(1))
            .style(styles::container::card),
        );
    }

    column![title, cards]
        .spacing(spacing::LG)
        .padding([spacing::XL, spacing::XL])
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reviews_render() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
