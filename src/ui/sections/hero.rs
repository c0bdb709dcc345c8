// SPDX-License-Identifier: MPL-2.0
//! Hero section: typewriter headline, parallax media and the magnetic
//! call-to-action.

use super::Message;
use crate::i18n::I18n;
use crate::motion::pointer::MagneticShift;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, mouse_area, text, Space};
use iced::{Alignment, Element, Length, Padding};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Currently visible slice of the headline (typewriter state).
    pub headline: &'a str,
    /// Vertical parallax offset of the hero media block.
    pub parallax_offset: f32,
    /// Current magnetic translation of the call-to-action.
    pub cta_shift: MagneticShift,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let headline = text(ctx.headline.to_string()).size(typography::DISPLAY);
    let tagline = text(ctx.i18n.tr("hero-tagline")).size(typography::BODY_LG);

    let cta = mouse_area(
        button(text(ctx.i18n.tr("hero-cta")).size(typography::BODY_LG))
            .on_press(Message::CtaPressed)
            .padding([spacing::SM, spacing::XL])
            .style(styles::button::primary),
    )
    .on_move(Message::CtaCursorMoved)
    .on_exit(Message::CtaCursorLeft);

    // The magnetic pull renders as padding around the button; negative
    // shifts become padding on the opposite side.
    let cta_padded = container(cta).padding(shift_padding(ctx.cta_shift));

    // The media block slides down with the parallax offset while the hero
    // is on screen.
    let media = container(
        container(text(ctx.i18n.tr("hero-media-caption")).size(typography::CAPTION))
            .padding(spacing::LG)
            .style(styles::container::card),
    )
    .padding(Padding {
        top: spacing::XL + ctx.parallax_offset,
        ..Padding::new(spacing::XL)
    });

    column![
        Space::new().height(Length::Fixed(spacing::XXL)),
        headline,
        tagline,
        cta_padded,
        media,
    ]
    .spacing(spacing::LG)
    .padding([spacing::XL, spacing::XL])
    .align_x(Alignment::Start)
    .width(Length::Fill)
    .into()
}

fn shift_padding(shift: MagneticShift) -> Padding {
    Padding {
        top: shift.y.max(0.0),
        bottom: (-shift.y).max(0.0),
        left: shift.x.max(0.0),
        right: (-shift.x).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_renders_mid_typing() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            headline: "Interiors th",
            parallax_offset: 42.0,
            cta_shift: MagneticShift { x: -3.0, y: 2.0 },
        });
    }

    #[test]
    fn shift_padding_splits_by_sign() {
        let padding = shift_padding(MagneticShift { x: -4.0, y: 6.0 });
        assert_eq!(padding.right, 4.0);
        assert_eq!(padding.left, 0.0);
        assert_eq!(padding.top, 6.0);
        assert_eq!(padding.bottom, 0.0);
    }
}
