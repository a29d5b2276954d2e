//! Strongly-typed identifiers for simulation entities.
//!
//! The newtype wrapper prevents accidental mixing of particle indices
//! with plain loop counters or grid coordinates.

use serde::{Deserialize, Serialize};

/// Index into the particle array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticleId(pub u32);

impl ParticleId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ParticleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
