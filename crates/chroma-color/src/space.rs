//! The shared capability set of the interpolation spaces.
//!
//! [`LinearRgb`](crate::LinearRgb) and [`Oklab`](crate::Oklab) both
//! support linear interpolation and conversion back to the 8-bit sRGB
//! boundary type. The set of spaces is closed and known at compile time,
//! so the trait exists for static dispatch and generic tests, not for
//! trait objects.

use crate::Srgb;

/// A color space that supports linear interpolation and conversion back
/// to 8-bit sRGB.
///
/// # Example
///
/// ```rust
/// use chroma_color::{ColorSpace, Oklab};
///
/// let red = Oklab::from_srgb_u8(255, 0, 0);
/// let blue = Oklab::from_srgb_u8(0, 0, 255);
///
/// // Perceptual midpoint between red and blue
/// let mid = red.lerp(blue, 0.5);
/// let srgb = mid.to_srgb();
/// assert_ne!(srgb, red.to_srgb());
/// ```
pub trait ColorSpace: Copy + Sized {
    /// Component-wise linear interpolation toward `end`.
    ///
    /// `t = 0.0` returns `self`, `t = 1.0` returns `end`. `t` is not
    /// clamped; values outside [0, 1] extrapolate.
    fn lerp(self, end: Self, t: f64) -> Self;

    /// Converts to the 8-bit sRGB boundary type.
    ///
    /// Channels are gamma-encoded, scaled to [0, 255], rounded half away
    /// from zero, and saturated to the 8-bit range.
    fn to_srgb(self) -> Srgb;

    /// Converts to a packed `0xRRGGBB` integer.
    #[inline]
    fn to_packed(self) -> u32 {
        self.to_srgb().to_packed()
    }
}
