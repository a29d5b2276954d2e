//! The cloth simulation orchestrator.
//!
//! Owns all particle, constraint, and contact state and runs the
//! fixed-order step. Single-threaded by design: one `update(dt)` call
//! performs force accumulation, integration, constraint relaxation, one
//! collision backend query, and OGC contact resolution, in that order,
//! with nothing suspending mid-step.

use std::time::Instant;

use velum_math::{Vec2, Vec3};
use velum_telemetry::{EventBus, EventKind, SimulationEvent};
use velum_types::{VelumError, VelumResult};

use crate::backend::{CollisionBackend, NullBackend};
use crate::config::SimulationConfig;
use crate::constraint::{self, Constraint};
use crate::contact::{self, Contact};
use crate::forces;
use crate::ogc::OgcContactModel;
use crate::particle::Particle;
use crate::solver;

/// Result of one simulation step.
#[derive(Debug, Clone, Default)]
pub struct StepResult {
    /// Step index (0-based).
    pub step: u32,
    /// Number of contacts resolved this step.
    pub contact_count: u32,
    /// Maximum penetration depth among them (meters).
    pub max_penetration: f32,
    /// Sum of scalar contact force magnitudes.
    pub total_contact_force: f32,
    /// Wall-clock time for this step (seconds).
    pub wall_time: f64,
}

/// Particle-based cloth simulation with OGC contact resolution.
///
/// Construct with [`ClothSimulation::new`], then call
/// [`initialize`](Self::initialize) before stepping. The collision
/// backend defaults to [`NullBackend`] (no environment geometry).
pub struct ClothSimulation {
    width: usize,
    height: usize,
    cloth_size: Vec2,
    origin: Vec3,
    particle_mass: f32,

    config: SimulationConfig,
    gravity: Vec3,
    wind: Vec3,
    damping: f32,

    particles: Vec<Particle>,
    constraints: Vec<Constraint>,
    contacts: Vec<Contact>,

    backend: Box<dyn CollisionBackend>,
    contact_model: OgcContactModel,

    bus: EventBus,
    step_index: u32,
    initialized: bool,
}

impl ClothSimulation {
    /// Creates an uninitialized simulation from a config.
    pub fn new(config: SimulationConfig) -> Self {
        let mut contact_model = OgcContactModel::new(
            config.contact.contact_radius,
            config.contact.stiffness,
            config.contact.damping,
        );
        contact_model.set_position_correction_factor(config.contact.position_correction_factor);

        Self {
            width: 0,
            height: 0,
            cloth_size: Vec2::new(2.0, 2.0),
            origin: Vec3::new(0.0, 3.0, 0.0),
            particle_mass: 0.1,
            gravity: Vec3::from_array(config.gravity),
            wind: Vec3::from_array(config.wind),
            damping: config.damping,
            config,
            particles: Vec::new(),
            constraints: Vec::new(),
            contacts: Vec::new(),
            backend: Box::new(NullBackend),
            contact_model,
            bus: EventBus::new(),
            step_index: 0,
            initialized: false,
        }
    }

    /// Replaces the collision backend.
    pub fn set_collision_backend(&mut self, backend: Box<dyn CollisionBackend>) {
        self.backend = backend;
    }

    /// Telemetry bus; add sinks and enable it to receive step events.
    pub fn telemetry_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Builds the particle grid and constraint list.
    ///
    /// `width × height` particles are spread over `cloth_size` centered
    /// on `origin`, all at the origin's height. Fails without touching
    /// existing state if the dimensions leave the grid spacing
    /// undefined (`width` or `height` < 2), an extent is non-positive,
    /// or the particle mass is non-positive.
    pub fn initialize(
        &mut self,
        width: usize,
        height: usize,
        cloth_size: Vec2,
        origin: Vec3,
        particle_mass: f32,
    ) -> VelumResult<()> {
        if width < 2 || height < 2 {
            return Err(VelumError::InvalidConfig(format!(
                "grid must be at least 2x2 particles, got {width}x{height}"
            )));
        }
        if cloth_size.x <= 0.0 || cloth_size.y <= 0.0 {
            return Err(VelumError::InvalidConfig(format!(
                "cloth size must be positive on both axes, got {cloth_size}"
            )));
        }
        if particle_mass <= 0.0 {
            return Err(VelumError::InvalidConfig(format!(
                "particle mass must be positive, got {particle_mass}"
            )));
        }

        self.width = width;
        self.height = height;
        self.cloth_size = cloth_size;
        self.origin = origin;
        self.particle_mass = particle_mass;

        self.create_particles();

        let dx = cloth_size.x / (width - 1) as f32;
        let dy = cloth_size.y / (height - 1) as f32;
        self.constraints = constraint::generate_constraints(width, height, dx, dy, &self.config);

        self.contacts.clear();
        self.step_index = 0;
        self.initialized = true;
        Ok(())
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// A non-positive `dt` performs no work and returns an empty
    /// result — the Verlet formula at `dt = 0` would still advance
    /// positions by the implicit velocity, so the early-out is what
    /// makes "zero displacement" hold.
    pub fn update(&mut self, dt: f32) -> VelumResult<StepResult> {
        if !self.initialized {
            return Err(VelumError::InvalidConfig(
                "simulation not initialized; call initialize() first".into(),
            ));
        }
        if dt <= 0.0 {
            return Ok(StepResult {
                step: self.step_index,
                ..StepResult::default()
            });
        }

        let start = Instant::now();
        self.bus
            .emit(SimulationEvent::new(self.step_index, EventKind::StepBegin { dt }));

        // 1. External forces
        forces::apply_gravity(&mut self.particles, self.gravity);
        forces::apply_wind(&mut self.particles, self.width, self.height, self.wind);

        // 2. Verlet integration + velocity damping
        for particle in &mut self.particles {
            particle.update(dt);
            if !particle.is_fixed() {
                let velocity = particle.velocity();
                particle.set_velocity(velocity * self.damping);
            }
        }

        // 3. Constraint relaxation
        solver::relax(
            &mut self.particles,
            &self.constraints,
            self.config.constraint_iterations,
        );
        self.bus.emit(SimulationEvent::new(
            self.step_index,
            EventKind::ConstraintRelaxation {
                iterations: self.config.constraint_iterations,
                constraint_count: self.constraints.len() as u32,
            },
        ));

        // 4. Collision query — once per step
        let candidates = self.backend.detect_contacts(&self.particles)?;
        self.contacts = contact::collect_contacts(
            &candidates,
            self.particles.len(),
            self.config.contact.distance_threshold,
            self.config.contact.contact_radius,
        );

        // 5. OGC resolution: forces for the next step, corrections now
        let stats = self
            .contact_model
            .process_contacts(&mut self.contacts, &mut self.particles);
        self.bus.emit(SimulationEvent::new(
            self.step_index,
            EventKind::ContactResolution {
                contact_count: stats.contact_count,
                max_penetration: stats.max_penetration,
                total_force: stats.total_force,
            },
        ));

        let wall_time = start.elapsed().as_secs_f64();
        self.bus
            .emit(SimulationEvent::new(self.step_index, EventKind::StepEnd { wall_time }));
        self.bus.flush();

        let result = StepResult {
            step: self.step_index,
            contact_count: stats.contact_count,
            max_penetration: stats.max_penetration,
            total_contact_force: stats.total_force,
            wall_time,
        };
        self.step_index += 1;
        Ok(result)
    }

    /// Restores every particle to its originally computed grid position
    /// with zero velocity, and clears contacts and pending forces.
    pub fn reset(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let index = constraint::particle_index(x, y, self.width).index();
                let position = self.grid_position(x, y);
                let particle = &mut self.particles[index];
                particle.set_position(position);
                particle.set_velocity(Vec3::ZERO);
                particle.clear_forces();
            }
        }
        self.contacts.clear();
        self.step_index = 0;
    }

    /// Pins or releases one particle.
    pub fn set_particle_fixed(&mut self, index: usize, fixed: bool) -> VelumResult<()> {
        let count = self.particles.len();
        let particle = self
            .particles
            .get_mut(index)
            .ok_or(VelumError::ParticleOutOfRange { index, count })?;
        particle.set_fixed(fixed);
        Ok(())
    }

    /// Sets the gravity vector.
    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    /// Sets the wind vector; zero disables the aerodynamic force.
    pub fn set_wind(&mut self, wind: Vec3) {
        self.wind = wind;
    }

    /// Sets the post-integration velocity damping factor.
    pub fn set_damping(&mut self, damping: f32) {
        self.damping = damping;
    }

    /// Read-only particle list.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Read-only constraint list, in generation order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Contacts resolved during the most recent step.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Grid dimensions as `(width, height)` in particles.
    pub fn grid_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of steps taken since initialization or reset.
    pub fn step_count(&self) -> u32 {
        self.step_index
    }

    fn create_particles(&mut self) {
        self.particles.clear();
        self.particles.reserve(self.width * self.height);

        for y in 0..self.height {
            for x in 0..self.width {
                let position = self.grid_position(x, y);
                self.particles.push(Particle::new(position, self.particle_mass));
            }
        }
    }

    /// The rest position of grid cell `(x, y)`: linearly interpolated
    /// across the cloth extents, at the origin's height.
    fn grid_position(&self, x: usize, y: usize) -> Vec3 {
        let fx = x as f32 / (self.width - 1) as f32;
        let fy = y as f32 / (self.height - 1) as f32;
        Vec3::new(
            self.origin.x + (fx - 0.5) * self.cloth_size.x,
            self.origin.y,
            self.origin.z + (fy - 0.5) * self.cloth_size.y,
        )
    }
}
