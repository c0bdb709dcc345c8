// SPDX-License-Identifier: MPL-2.0
//! Section views for the scrolled page.
//!
//! Every section renders inside a fixed-height block matching its
//! `design_height`, so content coordinates, anchor offsets and reveal
//! regions all agree. A section that has not revealed yet renders as an
//! empty block of the same height — the entrance is a swap, not a layout
//! shift.

pub mod cards;
pub mod consultation;
pub mod gallery_grid;
pub mod hero;
pub mod intro;
pub mod reviews;
pub mod services;

use crate::showcase::form::FieldId;
use crate::showcase::{CategoryFilter, SectionId};
use iced::widget::{container, Space};
use iced::{Element, Length, Point};

/// Card groups that tilt on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardGroup {
    Why,
    Process,
    Service,
}

/// Interactions originating inside the page sections.
#[derive(Debug, Clone)]
pub enum Message {
    /// Hero call-to-action pressed; scrolls to the consultation form.
    CtaPressed,
    /// Cursor moved over the hero call-to-action (magnetic effect).
    CtaCursorMoved(Point),
    /// Cursor left the hero call-to-action.
    CtaCursorLeft,

    /// Cursor moved over a tilt card.
    CardCursorMoved {
        group: CardGroup,
        index: usize,
        position: Point,
    },
    /// Cursor left the hovered tilt card.
    CardCursorLeft,

    FilterSelected(CategoryFilter),
    ProjectOpened(usize),

    CarouselNext,
    CarouselPrevious,
    CarouselPage(usize),
    CarouselHovered(bool),

    FormInput(FieldId, String),
    FormFieldDone(FieldId),
    FormSubmit,
}

/// Wraps a section body in its fixed-height block; hidden sections keep
/// the height and show nothing.
pub fn section_block<'a>(
    section: SectionId,
    revealed: bool,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let height = Length::Fixed(section.design_height());
    if revealed {
        container(body)
            .width(Length::Fill)
            .height(height)
            .into()
    } else {
        container(Space::new().width(Length::Fill).height(height))
            .width(Length::Fill)
            .height(height)
            .into()
    }
}
