//! Linear RGB: gamma-free light, the pivot space of the pipeline.
//!
//! Every cross-space conversion routes through [`LinearRgb`]: sRGB is
//! decoded here before going to Oklab, and Oklab comes back through here
//! before being re-encoded. Blending in this space is physically
//! correct, which is what makes it worth having alongside plain sRGB.

use crate::{ColorSpace, Srgb};
use chroma_math::{Vec3, lerp};
use chroma_transfer::srgb::{eotf, eotf_rgb, oetf_rgb};

/// An RGB color in linear light (gamma removed).
///
/// Components are nominally in [0, 1] but are never clamped; negative or
/// above-range values flow through conversions and interpolation and are
/// only saturated at the final 8-bit boundary.
///
/// # Example
///
/// ```rust
/// use chroma_color::{ColorSpace, LinearRgb};
///
/// let white = LinearRgb::from_srgb_u8(255, 255, 255);
/// assert_eq!(white.to_packed(), 0xFFFFFF);
///
/// let black = LinearRgb::from_srgb_u8(0, 0, 0);
/// let gray = white.lerp(black, 0.5);
/// assert_eq!(gray.r, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearRgb {
    /// Red channel, linear light.
    pub r: f64,
    /// Green channel, linear light.
    pub g: f64,
    /// Blue channel, linear light.
    pub b: f64,
}

impl LinearRgb {
    /// Creates a linear RGB color from raw channel values.
    ///
    /// No validation or clamping; out-of-range values are legal
    /// intermediates.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Decodes an 8-bit sRGB color.
    #[inline]
    pub fn from_srgb(color: Srgb) -> Self {
        let [r, g, b] = eotf_rgb(color.to_f64());
        Self::new(r, g, b)
    }

    /// Decodes sRGB from three 8-bit components.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_srgb(Srgb::new(r, g, b))
    }

    /// Decodes sRGB from normalized float components in [0, 1].
    #[inline]
    pub fn from_srgb_f64(r: f64, g: f64, b: f64) -> Self {
        Self::new(eotf(r), eotf(g), eotf(b))
    }

    /// Decodes a packed `0xRRGGBB` sRGB color.
    #[inline]
    pub fn from_packed(packed: u32) -> Self {
        Self::from_srgb(Srgb::from_packed(packed))
    }

    #[inline]
    pub(crate) fn to_vec(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    #[inline]
    pub(crate) fn from_vec(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl ColorSpace for LinearRgb {
    #[inline]
    fn lerp(self, end: Self, t: f64) -> Self {
        Self::new(
            lerp(self.r, end.r, t),
            lerp(self.g, end.g, t),
            lerp(self.b, end.b, t),
        )
    }

    #[inline]
    fn to_srgb(self) -> Srgb {
        let [r, g, b] = oetf_rgb([self.r, self.g, self.b]);
        Srgb::from_f64(r, g, b)
    }
}
