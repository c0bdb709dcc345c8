// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows over the page's state machines, exercised the way the
//! update loop drives them.

use iced_vitrine::motion::{ObserverOptions, Region, RevealObserver, Viewport};
use iced_vitrine::showcase::form::{
    ConsultationForm, FieldId, Status, SubmissionOutcome, SubmitDecision,
};
use iced_vitrine::showcase::lightbox::{Action, Key, Lightbox};
use iced_vitrine::showcase::{page_height, Category, CategoryFilter, ProjectCollection, SectionId};

#[test]
fn scrolling_through_the_page_reveals_every_section_once() {
    let mut reveal = RevealObserver::new(ObserverOptions::entrance_for_width(1280.0));
    let targets: Vec<_> = SectionId::ALL
        .iter()
        .map(|s| reveal.observe(Region::new(s.anchor_offset(), s.design_height())))
        .collect();

    // Scroll to the bottom in viewport-sized steps.
    let viewport_height = 760.0;
    let mut offset = 0.0;
    while offset < page_height() {
        reveal.on_viewport(Viewport::new(offset, viewport_height));
        offset += viewport_height / 2.0;
    }
    reveal.on_viewport(Viewport::new(page_height() - viewport_height, viewport_height));

    for target in &targets {
        assert!(reveal.is_revealed(*target));
    }
    // Everything revealed exactly once; nothing left under observation.
    assert_eq!(reveal.observing_count(), 0);

    // Scrolling back up reverts nothing.
    reveal.on_viewport(Viewport::new(0.0, viewport_height));
    for target in &targets {
        assert!(reveal.is_revealed(*target));
    }
}

#[test]
fn gallery_filter_and_lightbox_are_independent() {
    let mut collection = ProjectCollection::sample();
    let mut lightbox = Lightbox::new();

    // Open the last project, then filter the grid down to kitchens.
    let last = collection.len() - 1;
    lightbox.open(last, collection.len());
    collection.set_filter(CategoryFilter::Only(Category::Kitchens));

    // The lightbox still walks the full catalog in order.
    lightbox.next(collection.len());
    assert_eq!(lightbox.current(), Some(0));
    lightbox.previous(collection.len());
    lightbox.previous(collection.len());
    assert_eq!(lightbox.current(), Some(last - 1));

    // And the grid is filtered regardless.
    assert!(collection.visible_indices().len() < collection.len());
}

#[test]
fn keyboard_walks_the_lightbox_and_escape_leaves_it() {
    let collection = ProjectCollection::sample();
    let len = collection.len();
    let mut lightbox = Lightbox::new();

    // Keys do nothing while closed.
    assert_eq!(lightbox.key_action(Key::ArrowRight), None);

    lightbox.open(0, len);
    for _ in 0..len {
        let action = lightbox
            .key_action(Key::ArrowRight)
            .expect("open lightbox maps arrows");
        lightbox.apply(action, len);
    }
    // A full lap lands back on the first project.
    assert_eq!(lightbox.current(), Some(0));

    let action = lightbox.key_action(Key::Escape).expect("escape maps");
    assert_eq!(action, Action::Close);
    lightbox.apply(action, len);
    assert!(!lightbox.is_open());
}

#[test]
fn form_happy_path_runs_the_full_lifecycle() {
    let mut form = ConsultationForm::new();

    form.input(FieldId::Name, "Claire Dumont".into());
    form.input(FieldId::Email, "claire@example.com".into());
    form.input(FieldId::Phone, "+33 142685300".into());
    form.input(
        FieldId::Message,
        "We just bought a dark ground-floor flat in Lyon.".into(),
    );

    assert_eq!(form.submit(), SubmitDecision::Accepted);
    assert_eq!(form.status(), Status::Pending);

    form.settle(SubmissionOutcome::Delivered);
    assert_eq!(form.status(), Status::Success);

    form.finish_feedback();
    assert_eq!(form.status(), Status::Idle);
    for field in FieldId::ALL {
        assert_eq!(form.value(field), "");
    }
}

#[test]
fn form_blocks_with_bad_email_and_recovers() {
    let mut form = ConsultationForm::new();
    form.input(FieldId::Name, "Tomas".into());
    form.input(FieldId::Email, "a@b".into());
    form.input(FieldId::Message, "A message long enough to pass.".into());

    assert_eq!(
        form.submit(),
        SubmitDecision::Blocked {
            first_invalid: FieldId::Email
        }
    );
    assert_eq!(form.status(), Status::Idle);

    form.input(FieldId::Email, "a@b.com".into());
    assert_eq!(form.submit(), SubmitDecision::Accepted);
}
