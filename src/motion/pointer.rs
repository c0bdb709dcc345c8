// SPDX-License-Identifier: MPL-2.0
//! Pointer- and scroll-driven cosmetic transforms.
//!
//! Pure math for the parallax hero media, the magnetic primary buttons and
//! the card tilt. The view layer decides how much of each transform it can
//! express; the functions here are the behavioral contract.

/// Parallax factor applied to the hero media while it is on screen.
pub const PARALLAX_FACTOR: f32 = 0.3;
/// Fraction of the cursor delta a magnetic button follows.
pub const MAGNETIC_FACTOR: f32 = 0.15;
/// Divisor converting cursor distance from center into tilt degrees.
pub const TILT_DIVISOR: f32 = 20.0;
/// Vertical lift, in logical pixels, of a hovered tilt card.
pub const TILT_LIFT: f32 = 10.0;

/// Width at or below which pointer effects are disabled entirely.
pub const POINTER_EFFECTS_MIN_WIDTH: f32 = 768.0;
/// Width below which cards stop tilting (they still lift on hover).
pub const TILT_MIN_WIDTH: f32 = 992.0;

/// Vertical offset for the hero media at the given scroll offset.
///
/// The effect only applies while the hero is still on screen (offset less
/// than one viewport height) and on windows wide enough for motion.
pub fn parallax_offset(scroll_offset: f32, viewport_height: f32, window_width: f32) -> f32 {
    if window_width <= POINTER_EFFECTS_MIN_WIDTH {
        return 0.0;
    }
    if scroll_offset >= viewport_height {
        return 0.0;
    }
    scroll_offset * PARALLAX_FACTOR
}

/// Translation of a magnetic button toward the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MagneticShift {
    pub x: f32,
    pub y: f32,
}

/// Follows the cursor by a fraction of its delta from the button center.
/// `cursor` is in the button's local coordinates.
pub fn magnetic_shift(
    cursor_x: f32,
    cursor_y: f32,
    width: f32,
    height: f32,
    window_width: f32,
) -> MagneticShift {
    if window_width <= POINTER_EFFECTS_MIN_WIDTH {
        return MagneticShift::default();
    }
    MagneticShift {
        x: (cursor_x - width / 2.0) * MAGNETIC_FACTOR,
        y: (cursor_y - height / 2.0) * MAGNETIC_FACTOR,
    }
}

/// Tilt of a hovered card. Rotation is in degrees; `lift` is the upward
/// translation in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltTransform {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub lift: f32,
}

/// Computes the card tilt for a cursor at local coordinates.
///
/// Cursor above center tips the card away (negative X rotation); cursor to
/// the left of center turns the card toward the viewer (positive Y).
pub fn tilt_transform(
    cursor_x: f32,
    cursor_y: f32,
    width: f32,
    height: f32,
    window_width: f32,
) -> TiltTransform {
    if window_width < TILT_MIN_WIDTH {
        return TiltTransform::default();
    }
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    TiltTransform {
        rotate_x_deg: (cursor_y - center_y) / TILT_DIVISOR,
        rotate_y_deg: (center_x - cursor_x) / TILT_DIVISOR,
        lift: TILT_LIFT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_follows_scroll_within_the_first_viewport() {
        assert_eq!(parallax_offset(0.0, 800.0, 1280.0), 0.0);
        assert_eq!(parallax_offset(400.0, 800.0, 1280.0), 120.0);
    }

    #[test]
    fn parallax_stops_once_the_hero_is_gone() {
        assert_eq!(parallax_offset(800.0, 800.0, 1280.0), 0.0);
        assert_eq!(parallax_offset(2000.0, 800.0, 1280.0), 0.0);
    }

    #[test]
    fn parallax_is_disabled_on_narrow_windows() {
        assert_eq!(parallax_offset(400.0, 800.0, 600.0), 0.0);
    }

    #[test]
    fn magnetic_shift_is_zero_at_center() {
        let shift = magnetic_shift(100.0, 25.0, 200.0, 50.0, 1280.0);
        assert_eq!(shift, MagneticShift::default());
    }

    #[test]
    fn magnetic_shift_pulls_toward_the_cursor() {
        let shift = magnetic_shift(200.0, 50.0, 200.0, 50.0, 1280.0);
        assert_eq!(shift.x, 100.0 * MAGNETIC_FACTOR);
        assert_eq!(shift.y, 25.0 * MAGNETIC_FACTOR);

        let shift = magnetic_shift(0.0, 0.0, 200.0, 50.0, 1280.0);
        assert!(shift.x < 0.0 && shift.y < 0.0);
    }

    #[test]
    fn magnetic_shift_is_disabled_on_narrow_windows() {
        let shift = magnetic_shift(200.0, 50.0, 200.0, 50.0, 700.0);
        assert_eq!(shift, MagneticShift::default());
    }

    #[test]
    fn tilt_direction_matches_the_cursor_quadrant() {
        // Cursor in the top-left quadrant of a 300x200 card.
        let tilt = tilt_transform(50.0, 40.0, 300.0, 200.0, 1280.0);
        assert!(tilt.rotate_x_deg < 0.0);
        assert!(tilt.rotate_y_deg > 0.0);
        assert_eq!(tilt.lift, TILT_LIFT);
    }

    #[test]
    fn tilt_magnitude_scales_with_distance_from_center() {
        let near = tilt_transform(160.0, 110.0, 300.0, 200.0, 1280.0);
        let far = tilt_transform(290.0, 190.0, 300.0, 200.0, 1280.0);
        assert!(far.rotate_x_deg.abs() > near.rotate_x_deg.abs());
        assert!(far.rotate_y_deg.abs() > near.rotate_y_deg.abs());
    }

    #[test]
    fn tilt_is_disabled_below_the_desktop_breakpoint() {
        let tilt = tilt_transform(50.0, 40.0, 300.0, 200.0, 991.0);
        assert_eq!(tilt, TiltTransform::default());
    }
}
