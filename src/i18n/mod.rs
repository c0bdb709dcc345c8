// SPDX-License-Identifier: MPL-2.0
//! Internationalization via Fluent bundles.

pub mod fluent;

pub use fluent::I18n;
