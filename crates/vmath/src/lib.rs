//! Single-precision vector and quaternion primitives.
//!
//! This crate is the bottom layer of a real-time graphics stack: it provides 2-, 3- and
//! 4-dimensional [`f32`] vectors and a [`Quat`] type for 3D rotations, and nothing else.
//!
//! # Goals & Non-Goals
//!
//! - Only [`f32`] elements. There are no double-precision or integer variants.
//! - No matrices. Rotations are expressed with quaternions.
//! - No SIMD-specific code paths; the element-wise loops are left to the optimizer.
//! - All types are small [`Copy`] values. Operations take their inputs by value and return a new
//!   value, so a result can never be corrupted by an input that shares storage with the output.
//!   In-place variants (`+=`, [`Vector::normalize_mut`], [`Vec3f::cross_assign`], ...) read all of
//!   their inputs before writing anything.
//! - Preconditions (non-zero length for normalization, unit length for rotation) are documented,
//!   not checked. Debug builds log a warning when they are violated.
//! - [`Vector`] and [`Quat`] implement the comparison traits of the [`approx`] crate, so tests can
//!   use `assert_abs_diff_eq!` and friends on them.
//!
//! # Crate Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Vector`] and [`Quat`]. Both are
//!   represented as a sequence of their components.

mod error;
mod quat;
#[cfg(feature = "serde")]
mod serde_impls;
mod vector;

pub use error::*;
pub use quat::*;
pub use vector::*;
