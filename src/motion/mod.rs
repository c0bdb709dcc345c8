// SPDX-License-Identifier: MPL-2.0
//! Motion layer: scroll reveals, counters, typing, smooth scrolling and
//! pointer-driven transforms.
//!
//! Everything in here is pure state-machine code driven by viewport updates
//! and clock ticks; rendering decisions stay in the `ui` layer.

pub mod counter;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod typing;

pub use counter::CounterAnimation;
pub use reveal::{ObserverOptions, Region, RevealMode, RevealObserver, TargetId, Viewport};
pub use scroll::ScrollAnimation;
pub use typing::TypingEffect;
