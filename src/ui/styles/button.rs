// SPDX-License-Identifier: MPL-2.0
//! Button style helpers shared across the page.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call-to-action: brand background, white text.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BRAND_400,
        button::Status::Pressed => palette::BRAND_600,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active => palette::BRAND_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Quiet button: no chrome until hovered.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(base.background.weak.color))
        }
        button::Status::Active | button::Status::Disabled => None,
    };
    button::Style {
        background,
        text_color: base.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// A gallery filter chip; `active` marks the selected category.
pub fn filter(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette();
        let (background, text_color) = if active {
            (Some(Background::Color(palette::BRAND_500)), palette::WHITE)
        } else {
            match status {
                button::Status::Hovered => (
                    Some(Background::Color(base.background.weak.color)),
                    base.background.base.text,
                ),
                _ => (None, base.background.base.text),
            }
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                width: 1.0,
                color: if active {
                    palette::BRAND_500
                } else {
                    base.background.strong.color
                },
            },
            ..button::Style::default()
        }
    }
}

/// The submit button while feedback shows: success green or error red.
pub fn feedback(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(color)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// A pagination bullet under the carousel.
pub fn bullet(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, _status: button::Status| {
        let base = theme.extended_palette();
        button::Style {
            background: Some(Background::Color(if active {
                palette::BRAND_500
            } else {
                base.background.strong.color
            })),
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}
