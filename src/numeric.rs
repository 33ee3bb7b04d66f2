//! Numeric conversion helpers used across the project.
//!
//! World coordinates are `f32` while render items carry whole screen pixels.
//! These helpers keep that boundary explicit and saturating instead of
//! relying on bare `as` casts at every call-site.

/// Round to the nearest integer and clamp into the `i32` domain.
///
/// Non-finite input maps to `0`.
///
/// # Examples
///
/// ```
/// use sidescroll::numeric::round_to_i32;
/// assert_eq!(round_to_i32(2.5), 3);
/// assert_eq!(round_to_i32(-2.4), -2);
/// assert_eq!(round_to_i32(f32::NAN), 0);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn round_to_i32(value: f32) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let rounded = f64::from(value).round();
    let clamped = rounded.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    clamped as i32
}

/// Convert a texture dimension into world units.
#[expect(
    clippy::cast_precision_loss,
    reason = "Texture dimensions are far below the 2^24 limit of exact f32 integers."
)]
#[must_use]
pub fn dimension_to_f32(value: u32) -> f32 {
    value as f32
}
