//! Oklab: a perceptually uniform color space.
//!
//! Oklab is designed so that equal numeric distances correspond to
//! roughly equal perceived color differences, which makes it the space
//! of choice for visually smooth gradients. The transform from linear
//! RGB is two fixed 3x3 matrices around a component-wise cube root:
//!
//! ```text
//! LinearRGB --M1--> LMS --cbrt--> LMS' --M2--> (L, a, b)
//! ```
//!
//! and the inverse cubes instead of taking roots. LMS approximates the
//! response of the long/medium/short-wavelength cones.
//!
//! # Reference
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! (2020). The matrix constants below are the published ones, reproduced
//! to their full 10 decimal digits; the forward/inverse pairs are
//! numerically sensitive and round trips degrade visibly if they drift.

use crate::{ColorSpace, LinearRgb, Srgb};
use chroma_math::{Mat3, Vec3, lerp};

/// Linear RGB to cone response (M1).
const LINEAR_TO_LMS: Mat3 = Mat3::from_rows([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

/// Cube-rooted cone response to Oklab (M2).
const LMS_TO_OKLAB: Mat3 = Mat3::from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// Oklab to cube-rooted cone response (M2 inverse).
const OKLAB_TO_LMS: Mat3 = Mat3::from_rows([
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
]);

/// Cone response to linear RGB (M1 inverse).
const LMS_TO_LINEAR: Mat3 = Mat3::from_rows([
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
]);

/// A color in the Oklab perceptual space.
///
/// `l` is lightness (nominally [0, 1]); `a` and `b` are unbounded signed
/// chroma axes (green-red and blue-yellow). Gray colors sit on the
/// achromatic axis with `a` and `b` at zero.
///
/// # Example
///
/// ```rust
/// use chroma_color::{ColorSpace, Oklab};
///
/// let red = Oklab::from_srgb_u8(255, 0, 0);
/// assert!((red.l - 0.6280).abs() < 1e-3);
///
/// // Round trip back to sRGB
/// assert_eq!(red.to_packed(), 0xFF0000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklab {
    /// Lightness, nominally [0, 1].
    pub l: f64,
    /// Green-red chroma axis, unbounded.
    pub a: f64,
    /// Blue-yellow chroma axis, unbounded.
    pub b: f64,
}

impl Oklab {
    /// Creates an Oklab color from raw components. No validation.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Converts a linear RGB color to Oklab.
    ///
    /// The cube root is sign-preserving, so channels driven negative by
    /// interpolation or earlier round trips stay well defined.
    pub fn from_linear(color: LinearRgb) -> Self {
        let lms = LINEAR_TO_LMS * color.to_vec();
        let lab = LMS_TO_OKLAB * lms.cbrt();
        Self::new(lab.x, lab.y, lab.z)
    }

    /// Converts an 8-bit sRGB color to Oklab, via linear RGB.
    #[inline]
    pub fn from_srgb(color: Srgb) -> Self {
        Self::from_linear(LinearRgb::from_srgb(color))
    }

    /// Converts sRGB from three 8-bit components to Oklab.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_linear(LinearRgb::from_srgb_u8(r, g, b))
    }

    /// Converts sRGB from normalized float components to Oklab.
    #[inline]
    pub fn from_srgb_f64(r: f64, g: f64, b: f64) -> Self {
        Self::from_linear(LinearRgb::from_srgb_f64(r, g, b))
    }

    /// Converts a packed `0xRRGGBB` sRGB color to Oklab.
    #[inline]
    pub fn from_packed(packed: u32) -> Self {
        Self::from_linear(LinearRgb::from_packed(packed))
    }

    /// Converts this Oklab color back to linear RGB.
    pub fn to_linear(self) -> LinearRgb {
        let lms = OKLAB_TO_LMS * Vec3::new(self.l, self.a, self.b);
        LinearRgb::from_vec(LMS_TO_LINEAR * lms.cube())
    }
}

impl ColorSpace for Oklab {
    #[inline]
    fn lerp(self, end: Self, t: f64) -> Self {
        Self::new(
            lerp(self.l, end.l, t),
            lerp(self.a, end.a, t),
            lerp(self.b, end.b, t),
        )
    }

    #[inline]
    fn to_srgb(self) -> Srgb {
        self.to_linear().to_srgb()
    }
}
