// SPDX-License-Identifier: MPL-2.0
//! Page header: brand mark, section links, and the mobile menu.
//!
//! On wide windows the section links sit inline; below the desktop
//! breakpoint they collapse into a hamburger-toggled dropdown. The menu
//! closes when a link is activated, when Escape is pressed, and when the
//! window grows past the breakpoint again. Scrolling past the top of the
//! page condenses the header.

use crate::i18n::I18n;
use crate::showcase::SectionId;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

/// Width above which the inline link row replaces the hamburger menu.
pub const DESKTOP_BREAKPOINT: f32 = 992.0;

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    pub scrolled: bool,
    pub window_width: f32,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    LinkActivated(SectionId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Scroll the page to a section anchor.
    NavigateTo(SectionId),
}

/// Process a header message and return the corresponding event.
///
/// Mirrors the accessibility contract of the page: `menu_open` is what the
/// toggle reports as its expanded state, and activating a link always
/// closes the menu first.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::LinkActivated(section) => {
            *menu_open = false;
            Event::NavigateTo(section)
        }
    }
}

/// Render the header bar (and the dropdown when the menu is open).
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = text(ctx.i18n.tr("header-brand")).size(typography::TITLE_MD);

    let mut bar = row![brand]
        .spacing(spacing::LG)
        .padding([spacing::SM, spacing::LG])
        .align_y(Alignment::Center);

    bar = bar.push(Space::new().width(Length::Fill));

    let mut content = column![].width(Length::Fill);

    if ctx.window_width > DESKTOP_BREAKPOINT {
        let mut links = row![].spacing(spacing::MD).align_y(Alignment::Center);
        for section in SectionId::NAV {
            links = links.push(
                button(text(ctx.i18n.tr(section.title_key())).size(typography::BODY))
                    .on_press(Message::LinkActivated(section))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::ghost),
            );
        }
        bar = bar.push(links);
        content = content.push(styled_bar(bar, ctx.scrolled));
    } else {
        let toggle = button(text(if ctx.menu_open { "✕" } else { "☰" }))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::button::ghost);
        bar = bar.push(toggle);
        content = content.push(styled_bar(bar, ctx.scrolled));

        if ctx.menu_open {
            let mut menu = column![].spacing(spacing::XXS).padding(spacing::XS);
            for section in SectionId::NAV {
                menu = menu.push(
                    button(text(ctx.i18n.tr(section.title_key())).size(typography::BODY))
                        .on_press(Message::LinkActivated(section))
                        .padding([spacing::XS, spacing::SM])
                        .width(Length::Fill)
                        .style(styles::button::ghost),
                );
            }
            content = content.push(
                container(menu)
                    .width(Length::Fill)
                    .style(styles::container::header(true)),
            );
        }
    }

    content.into()
}

fn styled_bar<'a>(
    bar: iced::widget::Row<'a, Message>,
    scrolled: bool,
) -> Element<'a, Message> {
    container(bar)
        .width(Length::Fill)
        .style(styles::container::header(scrolled))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_the_menu() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu_open = false;
        update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
    }

    #[test]
    fn link_activation_closes_the_menu_and_navigates() {
        let mut menu_open = true;
        let event = update(Message::LinkActivated(SectionId::Gallery), &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::NavigateTo(SectionId::Gallery)));
    }

    #[test]
    fn header_renders_wide_and_narrow() {
        let i18n = I18n::default();
        let _wide = view(ViewContext {
            i18n: &i18n,
            menu_open: false,
            scrolled: false,
            window_width: 1280.0,
        });
        let _narrow_open = view(ViewContext {
            i18n: &i18n,
            menu_open: true,
            scrolled: true,
            window_width: 480.0,
        });
    }
}
