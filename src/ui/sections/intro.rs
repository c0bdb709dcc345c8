// SPDX-License-Identifier: MPL-2.0
//! Intro section: studio pitch plus the animated stat strip.

use super::Message;
use crate::i18n::I18n;
use crate::showcase::STATS;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{column, row, text};
use iced::{Alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Current display value per stat, in `STATS` order. Driven by the
    /// counter animations once the strip is half visible.
    pub counter_values: [u64; STATS.len()],
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("intro-title")).size(typography::TITLE_LG);
    let body = text(ctx.i18n.tr("intro-body")).size(typography::BODY_LG);

    let mut strip = row![].spacing(spacing::XXL).align_y(Alignment::Center);
    for (stat, value) in STATS.iter().zip(ctx.counter_values) {
        strip = strip.push(
            column![
                text(value.to_string()).size(typography::TITLE_LG),
                text(ctx.i18n.tr(stat.label_key)).size(typography::BODY_SM),
            ]
            .spacing(spacing::XXS)
            .align_x(Alignment::Center),
        );
    }

    column![title, body, strip]
        .spacing(spacing::LG)
        .padding([spacing::XL, spacing::XL])
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_renders_with_partial_counters() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            counter_values: [120, 5, 9, 16],
        });
    }
}
