//! Benchmark scenarios — grid setup, pinning, obstacles, and config
//! for each test case.

use serde::{Deserialize, Serialize};
use velum_collide::AnalyticBackend;
use velum_math::{Vec2, Vec3};
use velum_sim::{ClothSimulation, SimulationConfig};
use velum_types::VelumResult;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Cloth pinned along the top row, hanging under gravity.
    HangingCloth,
    /// Cloth dropped onto a cylinder pedestal above a floor.
    CylinderDrape,
    /// Cloth pinned along the top row in a steady lateral wind.
    WindyFlag,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::HangingCloth,
            ScenarioKind::CylinderDrape,
            ScenarioKind::WindyFlag,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::HangingCloth => "hanging_cloth",
            ScenarioKind::CylinderDrape => "cylinder_drape",
            ScenarioKind::WindyFlag => "windy_flag",
        }
    }
}

/// A fully specified benchmark scenario.
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Grid resolution (particles per side).
    pub width: usize,
    /// Grid resolution (particles per side).
    pub height: usize,
    /// Cloth extents in meters.
    pub cloth_size: Vec2,
    /// Center of the initial (flat) cloth.
    pub origin: Vec3,
    /// Per-particle mass (kg).
    pub particle_mass: f32,
    /// Engine configuration.
    pub config: SimulationConfig,
    /// Number of timesteps to simulate.
    pub timesteps: u32,
    /// Timestep size (seconds).
    pub dt: f32,
}

impl Scenario {
    /// The hanging cloth scenario.
    ///
    /// A 2m × 2m cloth at 20×20 resolution pinned along the top row,
    /// hanging under gravity for 2 seconds at 60fps.
    pub fn hanging_cloth() -> Self {
        Self {
            kind: ScenarioKind::HangingCloth,
            width: 20,
            height: 20,
            cloth_size: Vec2::new(2.0, 2.0),
            origin: Vec3::new(0.0, 3.0, 0.0),
            particle_mass: 0.1,
            config: SimulationConfig::default(),
            timesteps: 120,
            dt: 1.0 / 60.0,
        }
    }

    /// The cylinder drape scenario.
    ///
    /// A free 2m × 2m cloth dropped from 3m onto a 0.5m-radius cylinder
    /// pedestal, with a floor box below to catch the overhang.
    pub fn cylinder_drape() -> Self {
        Self {
            kind: ScenarioKind::CylinderDrape,
            width: 20,
            height: 20,
            cloth_size: Vec2::new(2.0, 2.0),
            origin: Vec3::new(0.0, 3.0, 0.0),
            particle_mass: 0.1,
            config: SimulationConfig::default(),
            timesteps: 180,
            dt: 1.0 / 60.0,
        }
    }

    /// The windy flag scenario.
    ///
    /// Pinned top row with a steady diagonal wind pushing the cloth.
    pub fn windy_flag() -> Self {
        let mut config = SimulationConfig::default();
        config.wind = [0.5, 0.0, 0.2];
        Self {
            kind: ScenarioKind::WindyFlag,
            width: 20,
            height: 20,
            cloth_size: Vec2::new(2.0, 2.0),
            origin: Vec3::new(0.0, 3.0, 0.0),
            particle_mass: 0.1,
            config,
            timesteps: 120,
            dt: 1.0 / 60.0,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::HangingCloth => Self::hanging_cloth(),
            ScenarioKind::CylinderDrape => Self::cylinder_drape(),
            ScenarioKind::WindyFlag => Self::windy_flag(),
        }
    }

    /// Replaces the engine configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds a ready-to-step simulation: grid, pinning, and obstacles.
    pub fn build_simulation(&self) -> VelumResult<ClothSimulation> {
        let mut sim = ClothSimulation::new(self.config.clone());
        sim.initialize(
            self.width,
            self.height,
            self.cloth_size,
            self.origin,
            self.particle_mass,
        )?;

        match self.kind {
            ScenarioKind::HangingCloth | ScenarioKind::WindyFlag => {
                // Pin the top row
                for x in 0..self.width {
                    sim.set_particle_fixed(x, true)?;
                }
            }
            ScenarioKind::CylinderDrape => {
                let mut backend = AnalyticBackend::new();
                backend.add_cylinder(Vec3::new(0.0, 1.0, 0.0), 0.5, 1.0);
                backend.add_floor(Vec3::new(0.0, -1.0, 0.0), Vec3::new(5.0, 0.1, 5.0));
                sim.set_collision_backend(Box::new(backend));
            }
        }

        Ok(sim)
    }
}
