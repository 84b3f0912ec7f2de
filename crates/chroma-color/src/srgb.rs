//! The 8-bit sRGB boundary type.
//!
//! [`Srgb`] is the representation colors enter and leave the library in:
//! three gamma-encoded 8-bit components, optionally packed into a single
//! `0xRRGGBB` integer. No interpolation is defined here; blending happens
//! in [`LinearRgb`](crate::LinearRgb) or [`Oklab`](crate::Oklab), which
//! both convert back to this type.

use crate::error::{ColorError, ColorResult};
use chroma_math::clamp;
use std::fmt;

/// A gamma-encoded sRGB color with 8-bit components.
///
/// Construction never validates anything; the `u8` components make
/// out-of-range values unrepresentable.
///
/// # Example
///
/// ```rust
/// use chroma_color::Srgb;
///
/// let c = Srgb::new(255, 128, 0);
/// assert_eq!(c.to_packed(), 0xFF8000);
/// assert_eq!(Srgb::from_packed(0xFF8000), c);
/// assert_eq!(c.to_string(), "#ff8000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srgb {
    /// Red component, [0, 255].
    pub r: u8,
    /// Green component, [0, 255].
    pub g: u8,
    /// Blue component, [0, 255].
    pub b: u8,
}

impl Srgb {
    /// Creates a color from three 8-bit components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpacks a color from a `0xRRGGBB` integer.
    ///
    /// Bits 16-23 are red, 8-15 green, 0-7 blue. Bits above 23 are
    /// ignored.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self::new(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        )
    }

    /// Packs the color into a `0xRRGGBB` integer.
    ///
    /// ```rust
    /// use chroma_color::Srgb;
    ///
    /// assert_eq!(Srgb::new(0x12, 0x34, 0x56).to_packed(), 0x123456);
    /// ```
    #[inline]
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Creates a color from normalized float components.
    ///
    /// Each component is scaled by 255, rounded half away from zero, and
    /// saturated to [0, 255]. Inputs outside [0, 1] are therefore
    /// accepted but land on the cube boundary.
    #[inline]
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self::new(quantize(r), quantize(g), quantize(b))
    }

    /// Returns the components as normalized floats in [0, 1].
    #[inline]
    pub fn to_f64(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Parses a color from a hex string.
    ///
    /// Accepts `"#RRGGBB"` or `"RRGGBB"`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] when the digit count is wrong or a
    /// character is not a hex digit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_color::Srgb;
    ///
    /// let c = Srgb::from_hex("#FF8000").unwrap();
    /// assert_eq!(c, Srgb::new(255, 128, 0));
    /// assert!(Srgb::from_hex("#F80").is_err());
    /// ```
    pub fn from_hex(s: &str) -> ColorResult<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(ColorError::InvalidHexLength(s.to_string()));
        }
        // from_str_radix also accepts a sign, which is not a hex digit
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHexDigit(s.to_string()));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorError::InvalidHexDigit(s.to_string()))?;
        Ok(Self::from_packed(packed))
    }
}

impl fmt::Display for Srgb {
    /// Formats as lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<u32> for Srgb {
    #[inline]
    fn from(packed: u32) -> Self {
        Self::from_packed(packed)
    }
}

impl From<Srgb> for u32 {
    #[inline]
    fn from(c: Srgb) -> u32 {
        c.to_packed()
    }
}

/// Scales a normalized component to 8 bits, rounding half away from zero
/// and saturating to [0, 255].
#[inline]
pub(crate) fn quantize(v: f64) -> u8 {
    clamp((v * 255.0).round(), 0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        let c = Srgb::new(0xAB, 0xCD, 0xEF);
        assert_eq!(c.to_packed(), 0xABCDEF);
        assert_eq!(Srgb::from_packed(0xABCDEF), c);
    }

    #[test]
    fn test_from_packed_ignores_high_bits() {
        assert_eq!(Srgb::from_packed(0xFF123456), Srgb::from_packed(0x123456));
    }

    #[test]
    fn test_f64_roundtrip() {
        for v in [0u8, 1, 17, 128, 254, 255] {
            let c = Srgb::new(v, v, v);
            let [r, g, b] = c.to_f64();
            assert_eq!(Srgb::from_f64(r, g, b), c);
        }
    }

    #[test]
    fn test_from_f64_saturates() {
        assert_eq!(Srgb::from_f64(-0.5, 1.5, 0.5), Srgb::new(0, 255, 128));
        assert_eq!(Srgb::from_f64(f64::NAN, 0.0, 0.0).r, 0);
    }

    #[test]
    fn test_from_f64_rounds_to_nearest() {
        // 0.002 * 255 = 0.51, 0.0019 * 255 = 0.4845
        assert_eq!(quantize(0.002), 1);
        assert_eq!(quantize(0.0019), 0);
        // 0.5 * 255 = 127.5 exactly; f64::round ties away from zero
        assert_eq!(quantize(0.5), 128);
    }

    #[test]
    fn test_hex_parse() {
        assert_eq!(Srgb::from_hex("#ff8000").unwrap(), Srgb::new(255, 128, 0));
        assert_eq!(Srgb::from_hex("FF8000").unwrap(), Srgb::new(255, 128, 0));
        assert_eq!(Srgb::from_hex("#000000").unwrap(), Srgb::new(0, 0, 0));
    }

    #[test]
    fn test_hex_parse_errors() {
        assert!(matches!(
            Srgb::from_hex("#fff"),
            Err(ColorError::InvalidHexLength(_))
        ));
        assert!(matches!(
            Srgb::from_hex("#zzzzzz"),
            Err(ColorError::InvalidHexDigit(_))
        ));
        assert!(matches!(
            Srgb::from_hex(""),
            Err(ColorError::InvalidHexLength(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Srgb::new(255, 128, 0).to_string(), "#ff8000");
        assert_eq!(Srgb::new(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_hex_display_roundtrip() {
        let c = Srgb::new(1, 2, 3);
        assert_eq!(Srgb::from_hex(&c.to_string()).unwrap(), c);
    }
}
