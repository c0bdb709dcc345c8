// SPDX-License-Identifier: MPL-2.0
//! Consultation form state and submission lifecycle.
//!
//! Fields validate on blur and re-validate on input only while they are
//! marked invalid, so typing does not nag before the first blur. Submitting
//! validates every required field; if any fails the submission is blocked
//! and the first invalid field (in form order) should receive focus. An
//! accepted submission goes through a pending state for the simulated
//! transport, then a transient success or error state, then the form
//! resets. The transport outcome is injected so both branches are
//! exercisable in tests; the app always injects success, as the page did.

use super::validate::{self, FieldError, FieldKind, FieldRules};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated transport time before a submission settles.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the success state shows before the form resets.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_millis(3000);
/// How long the error state shows before the button re-enables.
pub const ERROR_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Form fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Message,
    ];

    pub fn rules(self) -> FieldRules {
        match self {
            FieldId::Name => FieldRules {
                required: true,
                kind: FieldKind::Text,
                min_length: None,
            },
            FieldId::Email => FieldRules {
                required: true,
                kind: FieldKind::Email,
                min_length: None,
            },
            FieldId::Phone => FieldRules {
                required: false,
                kind: FieldKind::Phone,
                min_length: None,
            },
            FieldId::Message => FieldRules {
                required: true,
                kind: FieldKind::Text,
                min_length: Some(10),
            },
        }
    }

    /// i18n key for the field label.
    pub fn label_key(self) -> &'static str {
        match self {
            FieldId::Name => "form-label-name",
            FieldId::Email => "form-label-email",
            FieldId::Phone => "form-label-phone",
            FieldId::Message => "form-label-message",
        }
    }
}

/// Per-field validity as shown next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    /// Never blurred; no mark either way.
    #[default]
    Untouched,
    Valid,
    Invalid(FieldError),
}

impl Validity {
    pub fn is_invalid(self) -> bool {
        matches!(self, Validity::Invalid(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct FieldState {
    value: String,
    validity: Validity,
}

/// Where the submission lifecycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    /// Transport in flight; the submit button is disabled.
    Pending,
    /// Transient "request sent" state before the reset.
    Success,
    /// Transient "try again" state before the button re-enables.
    Error,
}

/// Result of the simulated transport, injected when it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered,
    Failed,
}

/// What `submit` decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Validation failed; focus this field.
    Blocked { first_invalid: FieldId },
    /// Transport started; settle it with `settle`.
    Accepted,
}

/// Unsubmitted field text, persisted across sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.message.is_empty()
    }
}

/// The consultation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsultationForm {
    name: FieldState,
    email: FieldState,
    phone: FieldState,
    message: FieldState,
    status: Status,
}

impl ConsultationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_draft(draft: &Draft) -> Self {
        let mut form = Self::default();
        form.name.value = draft.name.clone();
        form.email.value = draft.email.clone();
        form.phone.value = draft.phone.clone();
        form.message.value = draft.message.clone();
        form
    }

    pub fn draft(&self) -> Draft {
        Draft {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            phone: self.phone.value.clone(),
            message: self.message.value.clone(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn value(&self, field: FieldId) -> &str {
        &self.field(field).value
    }

    pub fn validity(&self, field: FieldId) -> Validity {
        self.field(field).validity
    }

    /// Whether the submit button accepts a press right now.
    pub fn can_submit(&self) -> bool {
        matches!(self.status, Status::Idle)
    }

    /// Edits a field. While the field is marked invalid it re-validates on
    /// every keystroke so the error clears as soon as the value is fixed.
    pub fn input(&mut self, field: FieldId, value: String) {
        let state = self.field_mut(field);
        state.value = value;
        if state.validity.is_invalid() {
            Self::validate_field(state, field.rules());
        }
    }

    /// Leaves a field: run its predicate and set the mark.
    pub fn blur(&mut self, field: FieldId) {
        let state = self.field_mut(field);
        Self::validate_field(state, field.rules());
    }

    /// Attempts to submit. Validates required fields in form order; on
    /// failure nothing is sent and the first invalid field is reported for
    /// focusing. On success the status moves to `Pending`.
    pub fn submit(&mut self) -> SubmitDecision {
        if !self.can_submit() {
            return SubmitDecision::Blocked {
                first_invalid: FieldId::Name,
            };
        }

        let mut first_invalid = None;
        for field in FieldId::ALL {
            if !field.rules().required {
                continue;
            }
            let state = self.field_mut(field);
            Self::validate_field(state, field.rules());
            if state.validity.is_invalid() && first_invalid.is_none() {
                first_invalid = Some(field);
            }
        }

        if let Some(field) = first_invalid {
            return SubmitDecision::Blocked {
                first_invalid: field,
            };
        }

        self.status = Status::Pending;
        SubmitDecision::Accepted
    }

    /// Settles the in-flight transport with its outcome.
    pub fn settle(&mut self, outcome: SubmissionOutcome) {
        if self.status != Status::Pending {
            return;
        }
        self.status = match outcome {
            SubmissionOutcome::Delivered => Status::Success,
            SubmissionOutcome::Failed => Status::Error,
        };
    }

    /// Ends the transient feedback state. After a success the whole form
    /// resets; after an error the entries survive so the visitor can try
    /// again.
    pub fn finish_feedback(&mut self) {
        match self.status {
            Status::Success => *self = Self::default(),
            Status::Error => self.status = Status::Idle,
            Status::Idle | Status::Pending => {}
        }
    }

    fn validate_field(state: &mut FieldState, rules: FieldRules) {
        state.validity = match validate::validate(&state.value, rules) {
            Ok(()) => {
                // An untouched empty optional field keeps its neutral mark.
                if state.value.trim().is_empty() && !rules.required {
                    Validity::Untouched
                } else {
                    Validity::Valid
                }
            }
            Err(error) => Validity::Invalid(error),
        };
    }

    fn field(&self, field: FieldId) -> &FieldState {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: FieldId) -> &mut FieldState {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Message => &mut self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ConsultationForm {
        let mut form = ConsultationForm::new();
        form.input(FieldId::Name, "Nadia Laurent".into());
        form.input(FieldId::Email, "nadia@example.com".into());
        form.input(FieldId::Message, "Please call about our loft.".into());
        form
    }

    #[test]
    fn fields_start_untouched() {
        let form = ConsultationForm::new();
        for field in FieldId::ALL {
            assert_eq!(form.validity(field), Validity::Untouched);
        }
    }

    #[test]
    fn blur_marks_validity() {
        let mut form = ConsultationForm::new();
        form.blur(FieldId::Name);
        assert_eq!(
            form.validity(FieldId::Name),
            Validity::Invalid(FieldError::Required)
        );

        form.input(FieldId::Email, "a@b.com".into());
        form.blur(FieldId::Email);
        assert_eq!(form.validity(FieldId::Email), Validity::Valid);
    }

    #[test]
    fn typing_does_not_validate_before_first_blur() {
        let mut form = ConsultationForm::new();
        form.input(FieldId::Email, "a@b".into());
        assert_eq!(form.validity(FieldId::Email), Validity::Untouched);
    }

    #[test]
    fn invalid_field_revalidates_on_input() {
        let mut form = ConsultationForm::new();
        form.input(FieldId::Email, "a@b".into());
        form.blur(FieldId::Email);
        assert!(form.validity(FieldId::Email).is_invalid());

        // The mark clears the moment the value becomes valid.
        form.input(FieldId::Email, "a@b.com".into());
        assert_eq!(form.validity(FieldId::Email), Validity::Valid);
    }

    #[test]
    fn submit_blocks_on_first_invalid_required_field() {
        let mut form = ConsultationForm::new();
        form.input(FieldId::Email, "nadia@example.com".into());

        let decision = form.submit();
        assert_eq!(
            decision,
            SubmitDecision::Blocked {
                first_invalid: FieldId::Name
            }
        );
        assert_eq!(form.status(), Status::Idle);
    }

    #[test]
    fn blocked_submission_never_reaches_success() {
        let mut form = ConsultationForm::new();
        let decision = form.submit();
        assert!(matches!(decision, SubmitDecision::Blocked { .. }));

        // Settling has nothing to act on.
        form.settle(SubmissionOutcome::Delivered);
        assert_eq!(form.status(), Status::Idle);
    }

    #[test]
    fn optional_phone_does_not_block_submission() {
        let mut form = filled_form();
        let decision = form.submit();
        assert_eq!(decision, SubmitDecision::Accepted);
        assert_eq!(form.status(), Status::Pending);
    }

    #[test]
    fn delivered_submission_shows_success_then_resets() {
        let mut form = filled_form();
        assert_eq!(form.submit(), SubmitDecision::Accepted);

        form.settle(SubmissionOutcome::Delivered);
        assert_eq!(form.status(), Status::Success);

        form.finish_feedback();
        assert_eq!(form.status(), Status::Idle);
        assert_eq!(form.value(FieldId::Name), "");
        assert_eq!(form.validity(FieldId::Name), Validity::Untouched);
    }

    #[test]
    fn failed_submission_keeps_the_entries() {
        let mut form = filled_form();
        form.submit();
        form.settle(SubmissionOutcome::Failed);
        assert_eq!(form.status(), Status::Error);

        form.finish_feedback();
        assert_eq!(form.status(), Status::Idle);
        assert_eq!(form.value(FieldId::Name), "Nadia Laurent");
    }

    #[test]
    fn pending_form_rejects_another_submit() {
        let mut form = filled_form();
        form.submit();
        assert!(!form.can_submit());
        assert!(matches!(form.submit(), SubmitDecision::Blocked { .. }));
    }

    #[test]
    fn draft_round_trips() {
        let form = filled_form();
        let draft = form.draft();
        assert!(!draft.is_empty());

        let restored = ConsultationForm::from_draft(&draft);
        assert_eq!(restored.value(FieldId::Email), "nadia@example.com");
        // Restored fields start unmarked.
        assert_eq!(restored.validity(FieldId::Email), Validity::Untouched);
    }
}
