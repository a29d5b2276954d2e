//! # velum-sim
//!
//! The deformable-body simulation core: particle state, constraint
//! topology and its relaxation solver, force accumulation, and the
//! Offset Geometric Contact (OGC) model.
//!
//! ## Key Types
//!
//! - [`Particle`] — Verlet point mass; velocity is implicit in the
//!   position history
//! - [`Constraint`] — one distance constraint; the generated list's
//!   order drives Gauss-Seidel projection order
//! - [`ClothSimulation`] — owns all state and runs the fixed-order step
//! - [`CollisionBackend`] — injected capability that supplies raw
//!   collision candidates once per step
//! - [`OgcContactModel`] — converts accepted candidates into contact
//!   forces and immediate position corrections
//!
//! ## Step order
//!
//! `update(dt)` performs, strictly in order: force accumulation →
//! Verlet integration (with velocity damping) → N constraint relaxation
//! passes → one collision backend query → OGC contact resolution.

pub mod backend;
pub mod config;
pub mod constraint;
pub mod contact;
pub mod forces;
pub mod ogc;
pub mod particle;
pub mod simulation;
pub mod solver;

pub use backend::{CollisionBackend, NullBackend, RawCandidate};
pub use config::{ContactConfig, SimulationConfig};
pub use constraint::Constraint;
pub use contact::Contact;
pub use ogc::OgcContactModel;
pub use particle::Particle;
pub use simulation::{ClothSimulation, StepResult};
