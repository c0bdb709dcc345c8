// SPDX-License-Identifier: MPL-2.0
//! View composition for the application.
//!
//! The page is one scrollable column of fixed-height sections with fixed
//! chrome stacked on top: the scroll progress bar, the header, the
//! floating contact shortcut, the back-to-top control, toasts, and the
//! lightbox overlay above everything when it is open.

use super::update::scroll_id;
use super::{App, Message};
use crate::motion::{pointer, scroll as scroll_motion};
use crate::showcase::{page_height, SectionId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::header;
use crate::ui::lightbox as lightbox_view;
use crate::ui::sections::{self, cards, consultation, gallery_grid, hero, intro, reviews, services};
use crate::ui::styles;
use iced::widget::{button, column, container, scrollable, stack, text, Space};
use iced::{Alignment, Element, Length};

impl App {
    pub(crate) fn view(&self) -> Element<'_, Message> {
        let mut layers = stack![self.page()];

        layers = layers.push(self.header_layer());
        layers = layers.push(self.progress_layer());

        if scroll_motion::back_to_top_visible(self.scroll_offset) {
            layers = layers.push(self.back_to_top_layer());
        }

        layers = layers.push(self.floating_contact_layer());

        if !self.notifications.is_empty() {
            layers = layers.push(self.toast_layer());
        }

        if self.lightbox.is_open() {
            if let Some(overlay) = self.lightbox_layer() {
                layers = layers.push(overlay);
            }
        }

        layers.width(Length::Fill).height(Length::Fill).into()
    }

    fn page(&self) -> Element<'_, Message> {
        let mut content = column![].width(Length::Fill);

        for section in SectionId::ALL {
            let body = self.section_body(section);
            content = content.push(sections::section_block(
                section,
                self.is_section_revealed(section),
                body,
            ));
        }

        scrollable(Element::from(content).map(Message::Section))
            .id(scroll_id())
            .on_scroll(Message::PageScrolled)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn section_body(&self, section: SectionId) -> Element<'_, sections::Message> {
        match section {
            SectionId::Hero => hero::view(hero::ViewContext {
                i18n: &self.i18n,
                headline: self.typing.visible_text(),
                parallax_offset: pointer::parallax_offset(
                    self.scroll_offset,
                    self.window_size.height,
                    self.window_size.width,
                ),
                cta_shift: self.cta_shift,
            }),
            SectionId::Intro => intro::view(intro::ViewContext {
                i18n: &self.i18n,
                counter_values: self.counter_values,
            }),
            SectionId::Why => cards::why(cards::WhyContext {
                i18n: &self.i18n,
                hovered: self.hovered_card,
            }),
            SectionId::Promise => cards::banner(cards::BannerContext {
                i18n: &self.i18n,
                title_key: "promise-title",
                body_key: "promise-body",
            }),
            SectionId::Process => cards::process(cards::ProcessContext {
                i18n: &self.i18n,
                hovered: self.hovered_card,
            }),
            SectionId::ServicesCarousel => services::view(services::ViewContext {
                i18n: &self.i18n,
                carousel: &self.carousel,
            }),
            SectionId::Gallery => gallery_grid::view(gallery_grid::ViewContext {
                i18n: &self.i18n,
                collection: &self.projects,
            }),
            SectionId::ServicesGrid => cards::services_grid(cards::ServicesGridContext {
                i18n: &self.i18n,
                hovered: self.hovered_card,
            }),
            SectionId::Partner => cards::banner(cards::BannerContext {
                i18n: &self.i18n,
                title_key: "partner-title",
                body_key: "partner-body",
            }),
            SectionId::Reviews => reviews::view(reviews::ViewContext { i18n: &self.i18n }),
            SectionId::Consultation => consultation::view(consultation::ViewContext {
                i18n: &self.i18n,
                form: &self.form,
            }),
        }
    }

    fn is_section_revealed(&self, section: SectionId) -> bool {
        self.section_targets
            .iter()
            .find(|(s, _)| *s == section)
            .is_some_and(|(_, target)| self.reveal.is_revealed(*target))
    }

    fn header_layer(&self) -> Element<'_, Message> {
        let bar = header::view(header::ViewContext {
            i18n: &self.i18n,
            menu_open: self.menu_open,
            scrolled: scroll_motion::header_is_scrolled(self.scroll_offset),
            window_width: self.window_size.width,
        })
        .map(Message::Header);

        container(bar)
            .width(Length::Fill)
            .align_y(Alignment::Start)
            .into()
    }

    fn progress_layer(&self) -> Element<'_, Message> {
        let fraction = scroll_motion::progress_fraction(
            self.scroll_offset,
            page_height(),
            self.window_size.height,
        );
        let fill_width = (self.window_size.width * fraction).max(0.0);

        container(
            container(Space::new()
                .width(Length::Fixed(fill_width))
                .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT)))
            .style(styles::container::progress_fill),
        )
        .width(Length::Fill)
        .align_x(Alignment::Start)
        .align_y(Alignment::Start)
        .into()
    }

    fn back_to_top_layer(&self) -> Element<'_, Message> {
        let control = button(text("↑").size(typography::TITLE_MD))
            .on_press(Message::BackToTop)
            .padding(spacing::SM)
            .style(styles::button::primary);

        container(control)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Start)
            .align_y(Alignment::End)
            .padding(spacing::LG)
            .into()
    }

    fn floating_contact_layer(&self) -> Element<'_, Message> {
        let shortcut = button(text(self.i18n.tr("floating-contact")).size(typography::BODY))
            .on_press(Message::FloatingContactPressed)
            .padding(spacing::SM)
            .style(styles::button::primary);

        let with_badge: Element<'_, Message> = if self.pulse_visible {
            let badge = container(Space::new()
                .width(Length::Fixed(sizing::PULSE_BADGE))
                .height(Length::Fixed(sizing::PULSE_BADGE)))
            .style(styles::container::pulse_badge);

            stack![
                container(shortcut).padding(spacing::XS),
                container(badge)
                    .align_x(Alignment::End)
                    .align_y(Alignment::Start)
            ]
            .into()
        } else {
            container(shortcut).padding(spacing::XS).into()
        };

        container(with_badge)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::End)
            .align_y(Alignment::End)
            .padding(spacing::LG)
            .into()
    }

    fn toast_layer(&self) -> Element<'_, Message> {
        container(self.notifications.view(&self.i18n).map(Message::Notification))
            .width(Length::Fill)
            .align_x(Alignment::End)
            .align_y(Alignment::Start)
            .padding([sizing::HEADER_HEIGHT + spacing::SM, spacing::MD])
            .into()
    }

    fn lightbox_layer(&self) -> Option<Element<'_, Message>> {
        let index = self.lightbox.current()?;
        let project = self.projects.get(index)?;

        Some(
            lightbox_view::view(lightbox_view::ViewContext {
                i18n: &self.i18n,
                project,
                index,
                total: self.projects.len(),
                cached: self.image_cache.peek(&project.image),
            })
            .map(Message::Lightbox),
        )
    }
}
