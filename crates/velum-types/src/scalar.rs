//! Scalar type alias for the simulation.
//!
//! Using `f32` to match the math stack (`glam` is f32-native).
//! This alias makes it easy to experiment with `f64` precision if needed.

/// The floating-point type used throughout the simulation.
///
/// Set to `f32`. Change to `f64` for double-precision CPU-only
/// validation runs.
pub type Scalar = f32;
