//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! # Range
//!
//! - Input/Output: nominally [0, 1]; values outside the range (including
//!   NaN and infinities) are not rejected and propagate per IEEE-754.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999
//!
//! The breakpoint is evaluated as `v >= 0.04045` (power branch inclusive
//! of the breakpoint). The two branches do not meet exactly at the
//! published constants, and 8-bit round trips are only exact when both
//! directions make the same choice at the boundary.

/// sRGB EOTF: decodes (linearizes) a gamma-encoded sRGB value.
///
/// # Formula
///
/// ```text
/// if V >= 0.04045:
///     L = ((V + 0.055) / 1.055)^2.4
/// else:
///     L = V / 12.92
/// ```
///
/// # Example
///
/// ```rust
/// use chroma_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.2140).abs() < 0.001);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v >= 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

/// sRGB OETF: encodes (delinearizes) a linear light value.
///
/// # Formula
///
/// ```text
/// if L >= 0.0031308:
///     V = 1.055 * L^(1/2.4) - 0.055
/// else:
///     V = L * 12.92
/// ```
///
/// # Example
///
/// ```rust
/// use chroma_transfer::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l >= 0.0031308 {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    } else {
        l * 12.92
    }
}

/// Applies the sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

/// Applies the sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}
