//! # chroma-math
//!
//! Double-precision math primitives for color space conversions.
//!
//! This crate provides the small numeric toolkit the conversion pipeline
//! is built on:
//!
//! - [`Mat3`] - 3x3 matrices for linear color space transforms
//! - [`Vec3`] - 3D vectors for RGB/LMS/Lab triplets
//! - Interpolation utilities ([`lerp`], [`inverse_lerp`], [`clamp`])
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column
//! vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Everything is `f64`. Color transform matrices are published to 10+
//! significant digits and round trips are expected to hold to a few
//! parts in 1e8 absolute, which single precision cannot deliver.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows([
//!     [0.4122214708, 0.5363325363, 0.0514459929],
//!     [0.2119034982, 0.6806995451, 0.1073969566],
//!     [0.0883024619, 0.2817188376, 0.6299787005],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let lms = m * rgb;
//! assert!(lms.x > 0.0);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with its `f64` types (`DVec3`, `DMat3`)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;
mod vec3;

pub use interp::*;
pub use mat3::*;
pub use vec3::*;

/// Re-export of the glam `f64` types for direct use.
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
