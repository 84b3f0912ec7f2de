//! # chroma-transfer
//!
//! Transfer functions (OETF/EOTF) for color encoding and decoding.
//!
//! Transfer functions convert between linear light values and the
//! gamma-encoded values used for storage and display.
//!
//! # Terminology
//!
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!   (also called *linearize* / gamma decode)
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//!   (also called *delinearize* / gamma encode)
//!
//! # Usage
//!
//! ```rust
//! use chroma_transfer::srgb;
//!
//! // Decode sRGB to linear
//! let linear = srgb::eotf(0.5);
//!
//! // Encode linear to sRGB
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! Only the sRGB pair lives here; the conversion pipeline has no other
//! encoded space.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

// Re-export common functions
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
