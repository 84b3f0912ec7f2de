//! # chroma-color
//!
//! Color value types in three spaces — 8-bit sRGB, linear RGB, and Oklab
//! — with lossless (within floating-point precision) conversion between
//! them and linear interpolation in the two float spaces.
//!
//! Interpolating directly in sRGB produces visually uneven transitions;
//! blending in linear RGB is physically correct, and blending in Oklab
//! is perceptually even. Multiple representations exist precisely so the
//! caller can pick the space to blend in.
//!
//! # Architecture
//!
//! ```text
//!   Srgb (u8, packed 0xRRGGBB)
//!     ^
//!     | EOTF / OETF          (chroma-transfer)
//!     v
//!   LinearRgb  <-- pivot: every cross-space conversion routes here
//!     ^
//!     | M1, cbrt, M2         (chroma-math)
//!     v
//!   Oklab
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use chroma_color::{ColorSpace, Oklab, Srgb};
//!
//! let from = Oklab::from_srgb(Srgb::from_hex("#ff0000")?);
//! let to = Oklab::from_srgb(Srgb::from_hex("#0000ff")?);
//!
//! // A perceptually even five-step gradient
//! let steps: Vec<Srgb> = (0..5)
//!     .map(|i| from.lerp(to, i as f64 / 4.0).to_srgb())
//!     .collect();
//!
//! assert_eq!(steps[0].to_packed(), 0xFF0000);
//! assert_eq!(steps[4].to_packed(), 0x0000FF);
//! # Ok::<(), chroma_color::ColorError>(())
//! ```
//!
//! # Guarantees
//!
//! - sRGB -> LinearRgb -> sRGB reproduces all 8-bit components exactly.
//! - LinearRgb -> Oklab -> LinearRgb is a near-identity (worst case
//!   ~1.6e-8 absolute over [0,1]^3; the published Oklab matrices are
//!   rounded to 10 decimal digits).
//! - All operations are total: NaN and infinities propagate per IEEE-754
//!   instead of being rejected. The one fallible API is
//!   [`Srgb::from_hex`].
//!
//! # Feature flags
//!
//! - `serde` - derive `Serialize`/`Deserialize` for the value types
//!
//! # Dependencies
//!
//! - [`chroma-math`](chroma_math) - `Vec3`/`Mat3` and scalar lerp
//! - [`chroma-transfer`](chroma_transfer) - the sRGB EOTF/OETF pair

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod linear;
mod oklab;
mod space;
mod srgb;

pub use error::{ColorError, ColorResult};
pub use linear::LinearRgb;
pub use oklab::Oklab;
pub use space::ColorSpace;
pub use srgb::Srgb;

// Re-export sub-crates for convenience
pub use chroma_math as math;
pub use chroma_transfer as transfer;

/// Prelude with commonly used types.
pub mod prelude {
    pub use crate::{ColorError, ColorSpace, LinearRgb, Oklab, Srgb};
}
