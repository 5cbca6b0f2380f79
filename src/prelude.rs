//! Orbitdrift prelude module
//!
//! This module re-exports the most commonly used types, traits, and functions
//! across the Orbitdrift application to reduce import boilerplate.

// External crate re-exports
pub use bevy::prelude::*;

// Internal re-exports - Config
pub use crate::config::{PhysicsConfig, RenderingConfig, SimulationConfig, UiConfig};

// Internal re-exports - Events
pub use crate::events::SimulationCommand;

// Internal re-exports - Physics
pub use crate::physics::integrators::{AccelerationField, Integrator, IntegratorRegistry};
pub use crate::physics::math::{Scalar, Vector};
pub use crate::physics::trail::Trail;

// Internal re-exports - Simulation
pub use crate::resources::OrbitView;
pub use crate::simulation::{Frame, FrameSink, Simulation, TickOutcome};
