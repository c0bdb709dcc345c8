// SPDX-License-Identifier: MPL-2.0
//! `iced_vitrine` is an interactive interior-design studio showcase built
//! with the Iced GUI framework.
//!
//! The page's behaviors — scroll reveals, stat counters, the services
//! carousel, the gallery lightbox, the consultation form — are explicit
//! state machines under `motion` and `showcase`, driven by the Elm-style
//! application in `app`. A CLI mode (`assemble`) concatenates HTML section
//! partials into the static edition of the page.

#![doc(html_root_url = "https://docs.rs/iced_vitrine/0.2.0")]

pub mod app;
pub mod assembly;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod motion;
pub mod showcase;
pub mod ui;
