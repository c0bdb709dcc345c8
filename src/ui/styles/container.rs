// SPDX-License-Identifier: MPL-2.0
//! Container style helpers.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// A content card (why/process/service tiles).
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(base.background.weak.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::SM,
        ..container::Style::default()
    }
}

/// A card lifted by the hover tilt.
pub fn card_lifted(theme: &Theme) -> container::Style {
    container::Style {
        shadow: shadow::LG,
        ..card(theme)
    }
}

/// The fixed page header; `condensed` once the page is scrolled.
pub fn header(condensed: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette();
        let mut background = base.background.base.color;
        if condensed {
            background.a = opacity::SURFACE;
        }
        container::Style {
            background: Some(Background::Color(background)),
            shadow: if condensed { shadow::SM } else { shadow::NONE },
            ..container::Style::default()
        }
    }
}

/// The darkened backdrop behind the lightbox.
pub fn overlay_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// The scroll progress bar fill.
pub fn progress_fill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BRAND_500)),
        ..container::Style::default()
    }
}

/// The pulse badge on the floating contact button.
pub fn pulse_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BRAND_500)),
        border: Border {
            radius: radius::FULL.into(),
            width: 2.0,
            color: palette::WHITE,
        },
        ..container::Style::default()
    }
}
