// SPDX-License-Identifier: MPL-2.0
//! Scroll-reveal trigger for section and card entrance animations.
//!
//! The observer watches registered target regions (in content coordinates)
//! and flips their visible flag once enough of the target enters the
//! viewport. Observation is one-shot by default: after the transition the
//! target is dropped from further checks, mirroring the unobserve-after-
//! reveal behavior the page relies on. A `Toggle` mode keeps observing and
//! reverts the flag when the target leaves the region again.
//!
//! When motion is disabled (reduced-motion preference or config), the
//! observer degrades to revealing every target immediately.

use crate::domain::motion::{RevealMargin, VisibilityFraction};

/// Handle to a registered reveal target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(u64);

/// Whether a revealed target may ever become hidden again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    /// Reveal once, then stop observing the target.
    #[default]
    Once,
    /// Keep observing; the flag follows the target in and out of view.
    Toggle,
}

/// Vertical extent of a target in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f32,
    pub height: f32,
}

impl Region {
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// The currently visible slice of the scrolled content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Absolute scroll offset of the top edge.
    pub offset: f32,
    /// Height of the visible area.
    pub height: f32,
}

impl Viewport {
    pub fn new(offset: f32, height: f32) -> Self {
        Self {
            offset,
            height: height.max(0.0),
        }
    }
}

/// Options shared by every target of one observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the target that must be visible before it reveals.
    pub threshold: VisibilityFraction,
    /// Inset applied to the bottom edge of the viewport, so targets reveal
    /// a little after they actually enter the window.
    pub margin: RevealMargin,
    pub mode: RevealMode,
}

impl ObserverOptions {
    /// Entrance-animation options matched to the viewport width: narrow
    /// windows use a gentler threshold so content is not held back on
    /// short screens.
    pub fn entrance_for_width(width: f32) -> Self {
        if width <= MOBILE_BREAKPOINT {
            Self {
                threshold: VisibilityFraction::new(0.05),
                margin: RevealMargin::new(30.0),
                mode: RevealMode::Once,
            }
        } else {
            Self {
                threshold: VisibilityFraction::new(0.15),
                margin: RevealMargin::new(50.0),
                mode: RevealMode::Once,
            }
        }
    }

    /// Options for triggers that should only fire once the target is half
    /// visible (stat counters).
    pub fn half_visible() -> Self {
        Self {
            threshold: VisibilityFraction::new(0.5),
            margin: RevealMargin::new(0.0),
            mode: RevealMode::Once,
        }
    }
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: VisibilityFraction::new(0.15),
            margin: RevealMargin::new(50.0),
            mode: RevealMode::Once,
        }
    }
}

/// Width at or below which the gentler mobile reveal options apply.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// A state change reported by [`RevealObserver::on_viewport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub id: TargetId,
    pub revealed: bool,
}

#[derive(Debug, Clone)]
struct Entry {
    id: TargetId,
    bounds: Region,
    revealed: bool,
    observing: bool,
}

/// Watches registered regions and reports visibility transitions.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    options: ObserverOptions,
    entries: Vec<Entry>,
    next_id: u64,
    enabled: bool,
}

impl RevealObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
            next_id: 0,
            enabled: true,
        }
    }

    /// Observer for environments without motion: every target reveals the
    /// moment it is registered.
    pub fn disabled(options: ObserverOptions) -> Self {
        Self {
            enabled: false,
            ..Self::new(options)
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    /// Replaces the options (e.g. after a resize across the mobile
    /// breakpoint). Already-revealed targets keep their state.
    pub fn set_options(&mut self, options: ObserverOptions) {
        self.options = options;
    }

    /// Registers a target region and returns its handle.
    ///
    /// On a disabled observer the target is revealed immediately.
    pub fn observe(&mut self, bounds: Region) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        let revealed = !self.enabled;
        self.entries.push(Entry {
            id,
            bounds,
            revealed,
            observing: self.enabled,
        });
        id
    }

    /// Updates a target's region after a relayout.
    pub fn update_bounds(&mut self, id: TargetId, bounds: Region) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.bounds = bounds;
        }
    }

    /// Evaluates every observed target against the viewport and returns the
    /// transitions that occurred.
    pub fn on_viewport(&mut self, viewport: Viewport) -> Vec<Transition> {
        if !self.enabled {
            return Vec::new();
        }

        let threshold = self.options.threshold.value();
        let margin = self.options.margin.value();
        let mode = self.options.mode;

        let mut transitions = Vec::new();
        for entry in &mut self.entries {
            if !entry.observing {
                continue;
            }

            let visible = visible_fraction(entry.bounds, viewport, margin) >= threshold.max(f32::EPSILON);
            if visible != entry.revealed {
                match mode {
                    RevealMode::Once => {
                        if visible {
                            entry.revealed = true;
                            entry.observing = false;
                            transitions.push(Transition {
                                id: entry.id,
                                revealed: true,
                            });
                        }
                    }
                    RevealMode::Toggle => {
                        entry.revealed = visible;
                        transitions.push(Transition {
                            id: entry.id,
                            revealed: visible,
                        });
                    }
                }
            }
        }
        transitions
    }

    pub fn is_revealed(&self, id: TargetId) -> bool {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .is_some_and(|e| e.revealed)
    }

    /// Reveals every target unconditionally and stops observing.
    pub fn reveal_all(&mut self) {
        for entry in &mut self.entries {
            entry.revealed = true;
            entry.observing = false;
        }
    }

    /// Number of targets still being watched.
    pub fn observing_count(&self) -> usize {
        self.entries.iter().filter(|e| e.observing).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fraction of `bounds` that overlaps the margin-adjusted viewport.
///
/// Zero-height targets report full visibility as soon as they sit inside
/// the viewport at all.
fn visible_fraction(bounds: Region, viewport: Viewport, margin: f32) -> f32 {
    let view_top = viewport.offset;
    let view_bottom = viewport.offset + (viewport.height - margin).max(0.0);

    let overlap = (bounds.bottom().min(view_bottom) - bounds.top.max(view_top)).max(0.0);

    if bounds.height <= f32::EPSILON {
        let inside = bounds.top >= view_top && bounds.top <= view_bottom;
        return if inside { 1.0 } else { 0.0 };
    }

    overlap / bounds.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entrance() -> ObserverOptions {
        ObserverOptions::default()
    }

    #[test]
    fn target_reveals_when_crossing_threshold() {
        let mut observer = RevealObserver::new(entrance());
        let id = observer.observe(Region::new(1000.0, 200.0));

        // Far above the target: nothing happens.
        assert!(observer.on_viewport(Viewport::new(0.0, 600.0)).is_empty());
        assert!(!observer.is_revealed(id));

        // Scrolled so ~50% of the target is inside the margin-adjusted view.
        let transitions = observer.on_viewport(Viewport::new(550.0, 600.0));
        assert_eq!(
            transitions,
            vec![Transition { id, revealed: true }]
        );
        assert!(observer.is_revealed(id));
    }

    #[test]
    fn once_mode_never_reverts() {
        let mut observer = RevealObserver::new(entrance());
        let id = observer.observe(Region::new(1000.0, 200.0));

        observer.on_viewport(Viewport::new(900.0, 600.0));
        assert!(observer.is_revealed(id));

        // Scroll back to the top: the flag must stay set and the target is
        // no longer observed.
        let transitions = observer.on_viewport(Viewport::new(0.0, 600.0));
        assert!(transitions.is_empty());
        assert!(observer.is_revealed(id));
        assert_eq!(observer.observing_count(), 0);
    }

    #[test]
    fn toggle_mode_follows_visibility() {
        let options = ObserverOptions {
            mode: RevealMode::Toggle,
            ..entrance()
        };
        let mut observer = RevealObserver::new(options);
        let id = observer.observe(Region::new(1000.0, 200.0));

        observer.on_viewport(Viewport::new(900.0, 600.0));
        assert!(observer.is_revealed(id));

        let transitions = observer.on_viewport(Viewport::new(0.0, 600.0));
        assert_eq!(
            transitions,
            vec![Transition {
                id,
                revealed: false
            }]
        );
        assert!(!observer.is_revealed(id));
        assert_eq!(observer.observing_count(), 1);
    }

    #[test]
    fn margin_delays_the_reveal() {
        let no_margin = ObserverOptions {
            margin: RevealMargin::new(0.0),
            ..entrance()
        };
        let wide_margin = ObserverOptions {
            margin: RevealMargin::new(300.0),
            ..entrance()
        };

        // Target just barely at the bottom edge of a 600px view.
        let bounds = Region::new(560.0, 200.0);

        let mut plain = RevealObserver::new(no_margin);
        let id = plain.observe(bounds);
        plain.on_viewport(Viewport::new(0.0, 600.0));
        assert!(plain.is_revealed(id));

        let mut inset = RevealObserver::new(wide_margin);
        let id = inset.observe(bounds);
        inset.on_viewport(Viewport::new(0.0, 600.0));
        assert!(!inset.is_revealed(id));
    }

    #[test]
    fn disabled_observer_reveals_immediately() {
        let mut observer = RevealObserver::disabled(entrance());
        let id = observer.observe(Region::new(5000.0, 200.0));
        assert!(observer.is_revealed(id));
        assert!(observer.on_viewport(Viewport::new(0.0, 600.0)).is_empty());
    }

    #[test]
    fn reveal_all_short_circuits_everything() {
        let mut observer = RevealObserver::new(entrance());
        let a = observer.observe(Region::new(1000.0, 200.0));
        let b = observer.observe(Region::new(3000.0, 200.0));

        observer.reveal_all();
        assert!(observer.is_revealed(a));
        assert!(observer.is_revealed(b));
        assert_eq!(observer.observing_count(), 0);
    }

    #[test]
    fn zero_height_target_reveals_on_overlap() {
        let mut observer = RevealObserver::new(ObserverOptions {
            margin: RevealMargin::new(0.0),
            ..entrance()
        });
        let id = observer.observe(Region::new(300.0, 0.0));
        observer.on_viewport(Viewport::new(0.0, 600.0));
        assert!(observer.is_revealed(id));
    }

    #[test]
    fn empty_observer_yields_no_transitions() {
        let mut observer = RevealObserver::new(entrance());
        assert!(observer.on_viewport(Viewport::new(0.0, 600.0)).is_empty());
        assert!(observer.is_empty());
    }

    #[test]
    fn late_registration_is_picked_up_on_next_viewport() {
        let mut observer = RevealObserver::new(entrance());
        observer.on_viewport(Viewport::new(0.0, 600.0));

        let id = observer.observe(Region::new(100.0, 200.0));
        assert!(!observer.is_revealed(id));

        observer.on_viewport(Viewport::new(0.0, 600.0));
        assert!(observer.is_revealed(id));
    }

    #[test]
    fn entrance_options_adapt_to_narrow_widths() {
        let mobile = ObserverOptions::entrance_for_width(500.0);
        let desktop = ObserverOptions::entrance_for_width(1200.0);
        assert!(mobile.threshold.value() < desktop.threshold.value());
        assert!(mobile.margin.value() < desktop.margin.value());
    }
}
