//! Velocity Verlet integration method

use super::{AccelerationField, Integrator};
use crate::physics::math::{Scalar, Vector};

/// Velocity Verlet integrator
///
/// A second-order symplectic integrator. On a Kepler orbit its energy error
/// oscillates but stays bounded, unlike the Runge-Kutta family whose error
/// drifts steadily over many periods.
///
/// The algorithm:
/// 1. a(t) = a(x(t))
/// 2. x(t+dt) = x(t) + v(t)*dt + 0.5*a(t)*dt²
/// 3. a(t+dt) = a(x(t+dt))
/// 4. v(t+dt) = v(t) + 0.5*(a(t) + a(t+dt))*dt
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityVerlet;

impl Integrator for VelocityVerlet {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn step(
        &self,
        position: &mut Vector,
        velocity: &mut Vector,
        field: &dyn AccelerationField,
        dt: Scalar,
    ) {
        let acceleration = field.at(*position);
        *position += *velocity * dt + acceleration * (0.5 * dt * dt);

        let next_acceleration = field.at(*position);
        *velocity += (acceleration + next_acceleration) * (0.5 * dt);
    }

    fn convergence_order(&self) -> usize {
        2
    }

    fn name(&self) -> &'static str {
        "velocity_verlet"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["verlet"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::integrators::test_fields::SpringField;

    #[test]
    fn test_velocity_verlet_simple_step() {
        let integrator = VelocityVerlet;
        let field = SpringField { k: 1.0 };
        let mut position = Vector::new(1.0, 0.0);
        let mut velocity = Vector::ZERO;

        integrator.step(&mut position, &mut velocity, &field, 0.5);

        // x = 1 - 0.5 * 0.25 = 0.875; v = 0.5 * (-1 - 0.875) * 0.5
        assert_eq!(position, Vector::new(0.875, 0.0));
        assert_eq!(velocity, Vector::new(-0.46875, 0.0));
    }

    #[test]
    fn test_velocity_verlet_energy_stays_bounded() {
        let integrator = VelocityVerlet;
        let field = SpringField { k: 1.0 };
        let mut position = Vector::new(1.0, 0.0);
        let mut velocity = Vector::ZERO;
        let energy = |x: Vector, v: Vector| 0.5 * v.length_squared() + 0.5 * x.length_squared();
        let initial_energy = energy(position, velocity);

        let mut max_error: Scalar = 0.0;
        for _ in 0..10_000 {
            integrator.step(&mut position, &mut velocity, &field, 0.01);
            let error = ((energy(position, velocity) - initial_energy) / initial_energy).abs();
            max_error = max_error.max(error);
        }

        assert!(max_error < 1e-4, "Energy error too large: {max_error}");
    }
}
