// SPDX-License-Identifier: MPL-2.0
//! Write-back of transient state from update handlers.
//!
//! Update code mutates in-memory state first and then calls into here;
//! persistence failures surface as notification keys, never as panics,
//! because losing a state write is not worth interrupting the page.

use super::persisted_state::AppState;
use crate::showcase::form::Draft;
use crate::showcase::CategoryFilter;

/// Persists the active gallery filter into the state file.
pub fn store_gallery_filter(state: &mut AppState, filter: CategoryFilter) -> Option<String> {
    state.gallery_filter = Some(filter.slug().to_string());
    state.save()
}

/// Persists (or clears) the consultation draft into the state file.
pub fn store_form_draft(state: &mut AppState, draft: &Draft) -> Option<String> {
    state.form_draft = if draft.is_empty() {
        None
    } else {
        Some(draft.clone())
    };
    state.save()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::Category;

    #[test]
    fn store_gallery_filter_records_the_slug() {
        let mut state = AppState::default();
        // Saving may warn in a sandboxed test environment; the in-memory
        // mutation is what this test checks.
        let _ = store_gallery_filter(&mut state, CategoryFilter::Only(Category::Bedrooms));
        assert_eq!(state.gallery_filter.as_deref(), Some("bedrooms"));
    }

    #[test]
    fn empty_draft_clears_the_stored_draft() {
        let mut state = AppState {
            form_draft: Some(Draft {
                name: "Nadia".into(),
                ..Draft::default()
            }),
            ..AppState::default()
        };
        let _ = store_form_draft(&mut state, &Draft::default());
        assert_eq!(state.form_draft, None);
    }
}
