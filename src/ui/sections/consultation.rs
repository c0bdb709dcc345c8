// SPDX-License-Identifier: MPL-2.0
//! Consultation form section.
//!
//! Inputs carry stable widget ids so a blocked submission can focus the
//! first invalid field. Inline errors render under their field; the submit
//! button mirrors the submission lifecycle (pending, success, error).

use super::Message;
use crate::i18n::I18n;
use crate::showcase::form::{ConsultationForm, FieldId, Status, Validity};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, text, text_input, Id};
use iced::{Element, Length};

/// Stable widget id for a form input, shared with the focus task.
pub fn input_id(field: FieldId) -> Id {
    match field {
        FieldId::Name => Id::new("consultation-name"),
        FieldId::Email => Id::new("consultation-email"),
        FieldId::Phone => Id::new("consultation-phone"),
        FieldId::Message => Id::new("consultation-message"),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a ConsultationForm,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("consultation-title")).size(typography::TITLE_LG);
    let lede = text(ctx.i18n.tr("consultation-lede")).size(typography::BODY_LG);

    let mut body = column![title, lede].spacing(spacing::LG);

    for field in FieldId::ALL {
        body = body.push(field_block(&ctx, field));
    }

    body = body.push(submit_button(&ctx));

    body.padding([spacing::XL, spacing::XL])
        .width(Length::Fill)
        .max_width(640.0)
        .into()
}

fn field_block<'a>(ctx: &ViewContext<'a>, field: FieldId) -> Element<'a, Message> {
    let label = text(ctx.i18n.tr(field.label_key())).size(typography::BODY_SM);

    let input = text_input(
        &ctx.i18n.tr(field.label_key()),
        ctx.form.value(field),
    )
    .id(input_id(field))
    .on_input(move |value| Message::FormInput(field, value))
    .on_submit(Message::FormFieldDone(field))
    .padding(spacing::SM)
    .size(typography::BODY_LG);

    let mut block = column![label, input].spacing(spacing::XXS);

    match ctx.form.validity(field) {
        Validity::Invalid(error) => {
            let message = match error {
                crate::showcase::validate::FieldError::MinLength(min) => ctx
                    .i18n
                    .tr_with(error.message_key(), &[("min", min.to_string())]),
                _ => ctx.i18n.tr(error.message_key()),
            };
            block = block.push(
                text(message)
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        }
        Validity::Valid => {
            block = block.push(
                text("✓")
                    .size(typography::CAPTION)
                    .color(palette::SUCCESS_500),
            );
        }
        Validity::Untouched => {}
    }

    block.into()
}

fn submit_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (key, enabled) = match ctx.form.status() {
        Status::Idle => ("form-submit", true),
        Status::Pending => ("form-submit-pending", false),
        Status::Success => ("form-submit-success", false),
        Status::Error => ("form-submit-error", false),
    };

    let label = text(ctx.i18n.tr(key)).size(typography::BODY_LG);
    let mut submit = button(label).padding([spacing::SM, spacing::XL]);

    submit = match ctx.form.status() {
        Status::Success => submit.style(styles::button::feedback(palette::SUCCESS_500)),
        Status::Error => submit.style(styles::button::feedback(palette::ERROR_500)),
        _ => submit.style(styles::button::primary),
    };

    if enabled {
        submit = submit.on_press(Message::FormSubmit);
    }

    submit.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::form::SubmissionOutcome;

    #[test]
    fn form_renders_in_every_lifecycle_state() {
        let i18n = I18n::default();

        let idle = ConsultationForm::new();
        {
            let _e = view(ViewContext {
                i18n: &i18n,
                form: &idle,
            });
        }

        let mut busy = ConsultationForm::new();
        busy.input(FieldId::Name, "Nadia".into());
        busy.input(FieldId::Email, "nadia@example.com".into());
        busy.input(FieldId::Message, "A long enough message.".into());
        busy.submit();
        {
            let _e = view(ViewContext {
                i18n: &i18n,
                form: &busy,
            });
        }

        busy.settle(SubmissionOutcome::Delivered);
        {
            let _e = view(ViewContext {
                i18n: &i18n,
                form: &busy,
            });
        }
    }

    #[test]
    fn input_ids_are_distinct() {
        let ids: Vec<String> = FieldId::ALL
            .iter()
            .map(|f| format!("{:?}", input_id(*f)))
            .collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }
}
