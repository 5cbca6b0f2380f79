//! Numerical integration methods for orbital motion

use crate::physics::math::{Scalar, Vector};

pub mod heun;
pub mod registry;
pub mod runge_kutta;
pub mod velocity_verlet;

pub use heun::Heun;
pub use registry::{IntegratorRegistry, UnknownIntegrator};
pub use runge_kutta::{RungeKuttaFourthOrder, RungeKuttaSecondOrderMidpoint};
pub use velocity_verlet::VelocityVerlet;

/// Trait for evaluating acceleration at arbitrary positions
pub trait AccelerationField: Send + Sync {
    /// Get the acceleration at the given position
    fn at(&self, position: Vector) -> Vector;
}

/// Base trait for all integrators
///
/// Integrators are stateless: everything they need arrives as arguments, so
/// one instance can be shared and cloned freely.
pub trait Integrator: Send + Sync {
    fn clone_box(&self) -> Box<dyn Integrator>;

    /// Advance position and velocity by one step of length `dt`
    ///
    /// # Arguments
    /// * `position` - Mutable reference to position
    /// * `velocity` - Mutable reference to velocity vector
    /// * `field` - Acceleration field, evaluated as many times as the method needs
    /// * `dt` - Time step
    fn step(
        &self,
        position: &mut Vector,
        velocity: &mut Vector,
        field: &dyn AccelerationField,
        dt: Scalar,
    );

    fn convergence_order(&self) -> usize;

    fn name(&self) -> &'static str;

    fn aliases(&self) -> Vec<&'static str> {
        vec![]
    }
}

impl Clone for Box<dyn Integrator> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl std::fmt::Debug for dyn Integrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Integrator")
            .field("name", &self.name())
            .field("convergence_order", &self.convergence_order())
            .finish()
    }
}
