// SPDX-License-Identifier: MPL-2.0
//! UI layer: design tokens, theming, styles and the page views.

pub mod design_tokens;
pub mod header;
pub mod lightbox;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
