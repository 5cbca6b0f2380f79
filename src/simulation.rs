//! Orbit simulation state and its fixed-step scheduler
//!
//! [`Simulation`] owns the satellite's position and velocity, the running
//! flag, and the [`Trail`]. Every integration step has the same length; a
//! tick batches a configurable number of steps so that simulated-time
//! resolution is independent of the display's frame rate.

use crate::config::PhysicsConfig;
use crate::physics::gravity::{CentralGravity, specific_orbital_energy};
use crate::physics::integrators::{AccelerationField, Integrator, RungeKuttaSecondOrderMidpoint};
use crate::physics::math::{Scalar, Vector, vector_from_pair};
use crate::physics::trail::{DEFAULT_TRAIL_CAPACITY, Trail};
use bevy::prelude::*;

/// Kinematic state of the orbiting body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub position: Vector,
    pub velocity: Vector,
    pub running: bool,
}

impl SimulationState {
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

/// Starting point restored by every reset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialConditions {
    pub position: Vector,
    pub velocity: Vector,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            position: Vector::new(0.0, 1.0e7),
            velocity: Vector::new(7.8e3, 0.0),
        }
    }
}

/// What a sink receives after a reset or a completed tick
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub position: Vector,
    pub velocity: Vector,
    pub trail: &'a Trail,
    pub elapsed: Scalar,
}

/// Receiver of simulation frames, typically the renderer
pub trait FrameSink {
    fn present(&mut self, frame: Frame<'_>);
}

/// Sink that drops every frame
impl FrameSink for () {
    fn present(&mut self, _frame: Frame<'_>) {}
}

/// Whether the driver should schedule another tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Idle,
}

#[derive(Resource)]
pub struct Simulation {
    state: SimulationState,
    trail: Trail,
    initial: InitialConditions,
    field: Box<dyn AccelerationField>,
    integrator: Box<dyn Integrator>,
    time_step: Scalar,
    steps_per_tick: usize,
    mu: Scalar,
    ticks: u64,
    steps: u64,
    diverged: bool,
}

impl Simulation {
    /// Builds an idle simulation described by `physics`, sitting at its
    /// initial conditions. The integrator named in the config is not resolved
    /// here; pass the one to use.
    pub fn from_config(physics: &PhysicsConfig, integrator: Box<dyn Integrator>) -> Self {
        let gravity = CentralGravity::new(physics.gravitational_constant, physics.central_mass);
        let initial = InitialConditions {
            position: vector_from_pair(physics.initial_position),
            velocity: vector_from_pair(physics.initial_velocity),
        };

        Self::new(
            Box::new(gravity),
            gravity.mu(),
            integrator,
            initial,
            physics.time_step,
            physics.steps_per_tick,
            physics.trail_capacity,
        )
    }

    /// `mu` is only used for telemetry; `field` drives the motion.
    pub fn new(
        field: Box<dyn AccelerationField>,
        mu: Scalar,
        integrator: Box<dyn Integrator>,
        initial: InitialConditions,
        time_step: Scalar,
        steps_per_tick: usize,
        trail_capacity: usize,
    ) -> Self {
        Self {
            state: SimulationState {
                position: initial.position,
                velocity: initial.velocity,
                running: false,
            },
            trail: Trail::new(initial.position, trail_capacity),
            initial,
            field,
            integrator,
            time_step,
            steps_per_tick,
            mu,
            ticks: 0,
            steps: 0,
            diverged: false,
        }
    }

    /// Returns to the initial conditions and stops advancing.
    ///
    /// The trail is replaced by the single initial position and `sink` is
    /// shown the fresh state. Repeated calls yield the same state.
    pub fn reset(&mut self, sink: &mut impl FrameSink) {
        self.state = SimulationState {
            position: self.initial.position,
            velocity: self.initial.velocity,
            running: false,
        };
        self.trail.reset_to(self.initial.position);
        self.ticks = 0;
        self.steps = 0;
        self.diverged = false;

        info!(
            "Simulation reset: position {:?} m, velocity {:?} m/s",
            self.state.position, self.state.velocity
        );
        sink.present(self.frame());
    }

    /// Sets the running flag. Returns `false` if it was already set.
    pub fn start(&mut self) -> bool {
        if self.state.running {
            return false;
        }

        self.state.running = true;
        info!("Simulation started with {}", self.integrator.name());
        true
    }

    /// Advances one fixed step of `time_step` seconds and records the new
    /// position in the trail.
    pub fn step(&mut self) {
        let SimulationState {
            mut position,
            mut velocity,
            ..
        } = self.state;

        self.integrator.step(
            &mut position,
            &mut velocity,
            self.field.as_ref(),
            self.time_step,
        );

        self.state.position = position;
        self.state.velocity = velocity;
        self.trail.push(position);
        self.steps += 1;
    }

    /// Runs one batch of `steps_per_tick` steps and presents the result.
    ///
    /// A stopped simulation does nothing and reports [`TickOutcome::Idle`]:
    /// no steps, no field evaluations, no frame.
    pub fn advance_tick(&mut self, sink: &mut impl FrameSink) -> TickOutcome {
        if !self.state.running {
            return TickOutcome::Idle;
        }

        for _ in 0..self.steps_per_tick {
            self.step();
        }
        self.ticks += 1;

        if !self.diverged && !self.state.is_finite() {
            self.diverged = true;
            warn!(
                "Orbit state became non-finite after {} steps (position {:?}, velocity {:?})",
                self.steps, self.state.position, self.state.velocity
            );
        }

        debug!(
            "Rendering position: ({:.2}, {:.2}) m",
            self.state.position.x, self.state.position.y
        );
        sink.present(self.frame());

        if self.state.running {
            TickOutcome::Continue
        } else {
            TickOutcome::Idle
        }
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            position: self.state.position,
            velocity: self.state.velocity,
            trail: &self.trail,
            elapsed: self.elapsed(),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn position(&self) -> Vector {
        self.state.position
    }

    pub fn velocity(&self) -> Vector {
        self.state.velocity
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn integrator(&self) -> &dyn Integrator {
        self.integrator.as_ref()
    }

    pub fn time_step(&self) -> Scalar {
        self.time_step
    }

    pub fn steps_per_tick(&self) -> usize {
        self.steps_per_tick
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated seconds since the last reset
    pub fn elapsed(&self) -> Scalar {
        self.steps as Scalar * self.time_step
    }

    pub fn specific_energy(&self) -> Scalar {
        specific_orbital_energy(self.state.position, self.state.velocity, self.mu)
    }

    /// True once the state has gone non-finite since the last reset
    pub fn has_diverged(&self) -> bool {
        self.diverged
    }
}

impl Default for Simulation {
    fn default() -> Self {
        let gravity = CentralGravity::new(6.67430e-11, 5.972e24);
        Self::new(
            Box::new(gravity),
            gravity.mu(),
            Box::new(RungeKuttaSecondOrderMidpoint),
            InitialConditions::default(),
            10.0,
            10,
            DEFAULT_TRAIL_CAPACITY,
        )
    }
}
