// SPDX-License-Identifier: MPL-2.0
//! Gallery section: filter chips and the project grid.
//!
//! Filtering hides non-matching cards outright. Clicking a card opens the
//! lightbox on the project's index into the full catalog, so lightbox
//! navigation order never depends on the active filter.

use super::Message;
use crate::i18n::I18n;
use crate::showcase::{Category, CategoryFilter, ProjectCollection};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub collection: &'a ProjectCollection,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG);

    let body = column![title, filter_bar(&ctx), grid(&ctx)]
        .spacing(spacing::LG)
        .padding([spacing::XL, spacing::XL])
        .width(Length::Fill);

    body.into()
}

fn filter_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.collection.filter();

    let mut bar = row![].spacing(spacing::XS).align_y(Alignment::Center);
    bar = bar.push(chip(
        ctx.i18n.tr("gallery-filter-all"),
        CategoryFilter::All,
        active == CategoryFilter::All,
    ));
    for category in Category::ALL {
        let filter = CategoryFilter::Only(category);
        bar = bar.push(chip(ctx.i18n.tr(category.label_key()), filter, active == filter));
    }
    bar.into()
}

fn chip<'a>(label: String, filter: CategoryFilter, active: bool) -> Element<'a, Message> {
    button(text(label).size(typography::BODY_SM))
        .on_press(Message::FilterSelected(filter))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::filter(active))
        .into()
}

fn grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut rows = column![].spacing(spacing::LG);
    let mut current_row = row![].spacing(spacing::LG);
    let mut in_row = 0;

    for index in ctx.collection.visible_indices() {
        let Some(project) = ctx.collection.get(index) else {
            continue;
        };

        let thumbnail: Element<'_, Message> = if project.image.is_file() {
            image(image::Handle::from_path(&project.image))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::GALLERY_CARD_HEIGHT - 60.0))
                .into()
        } else {
            container(text(ctx.i18n.tr("gallery-placeholder")).size(typography::CAPTION))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::GALLERY_CARD_HEIGHT - 60.0))
                .style(styles::container::card)
                .into()
        };

        let card = button(
            column![
                thumbnail,
                text(project.title.clone()).size(typography::BODY),
                text(ctx.i18n.tr(project.category.label_key())).size(typography::CAPTION),
            ]
            .spacing(spacing::XXS),
        )
        .on_press(Message::ProjectOpened(index))
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::GALLERY_CARD_WIDTH))
        .style(styles::button::ghost);

        current_row = current_row.push(card);
        in_row += 1;
        if in_row == 3 {
            rows = rows.push(current_row);
            current_row = row![].spacing(spacing::LG);
            in_row = 0;
        }
    }
    if in_row > 0 {
        rows = rows.push(current_row);
    }

    rows.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_renders_filtered_and_unfiltered() {
        let i18n = I18n::default();

        let collection = ProjectCollection::sample();
        let _all = view(ViewContext {
            i18n: &i18n,
            collection: &collection,
        });

        let mut filtered = ProjectCollection::sample();
        filtered.set_filter(CategoryFilter::Only(Category::Kitchens));
        let _subset = view(ViewContext {
            i18n: &i18n,
            collection: &filtered,
        });
    }
}
