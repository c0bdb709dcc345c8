// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Carousel**: Autoplay timing bounds
//! - **Window**: Startup window geometry
//! - **Gallery**: Prefetch cache limits

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default autoplay interval between slide advances (in milliseconds).
pub const DEFAULT_AUTOPLAY_DELAY_MS: u64 = 4000;

/// Minimum autoplay interval (in milliseconds).
pub const MIN_AUTOPLAY_DELAY_MS: u64 = 1000;

/// Maximum autoplay interval (in milliseconds).
pub const MAX_AUTOPLAY_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width at startup.
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;

/// Default window height at startup.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: u32 = 600;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default maximum number of prefetched lightbox images.
pub const DEFAULT_PREFETCH_IMAGES: usize = 16;

/// Minimum prefetched images.
pub const MIN_PREFETCH_IMAGES: usize = 4;

/// Maximum prefetched images.
pub const MAX_PREFETCH_IMAGES: usize = 32;

// ==========================================================================
// Serde default helpers
// ==========================================================================

pub(super) fn default_motion_enabled() -> Option<bool> {
    Some(true)
}

pub(super) fn default_autoplay() -> Option<bool> {
    Some(true)
}

pub(super) fn default_autoplay_delay_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_DELAY_MS)
}

pub(super) fn default_prefetch_images() -> Option<usize> {
    Some(DEFAULT_PREFETCH_IMAGES)
}

pub(super) fn default_draft_autosave() -> Option<bool> {
    Some(true)
}

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Carousel validation
    assert!(MIN_AUTOPLAY_DELAY_MS > 0);
    assert!(MAX_AUTOPLAY_DELAY_MS >= MIN_AUTOPLAY_DELAY_MS);
    assert!(DEFAULT_AUTOPLAY_DELAY_MS >= MIN_AUTOPLAY_DELAY_MS);
    assert!(DEFAULT_AUTOPLAY_DELAY_MS <= MAX_AUTOPLAY_DELAY_MS);

    // Window validation
    assert!(MIN_WINDOW_WIDTH > 0);
    assert!(MIN_WINDOW_HEIGHT > 0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);

    // Prefetch validation
    assert!(MIN_PREFETCH_IMAGES > 0);
    assert!(MAX_PREFETCH_IMAGES >= MIN_PREFETCH_IMAGES);
    assert!(DEFAULT_PREFETCH_IMAGES >= MIN_PREFETCH_IMAGES);
    assert!(DEFAULT_PREFETCH_IMAGES <= MAX_PREFETCH_IMAGES);
};
