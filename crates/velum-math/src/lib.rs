//! # velum-math
//!
//! Linear algebra primitives for the Velum simulation engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Vec3`, etc.)
//! - Triangle geometry helpers (face normal, area) used by the
//!   aerodynamic force model

pub mod triangle;

// Re-export glam types as the canonical math types for Velum.
pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
