//! Heun's method (Improved Euler) integration
//!
//! A classical second-order predictor-corrector method. It shares its order
//! and cost (two field evaluations) with the midpoint method but averages the
//! slopes at both ends of the step instead of sampling the middle, which makes
//! it a useful comparison when studying energy drift on an orbit.

use super::{AccelerationField, Integrator};
use crate::physics::math::{Scalar, Vector};

/// Heun's method (explicit trapezoidal rule)
///
/// ```text
/// Stage 1 (Predictor):
///   k1_x = v(t)
///   k1_v = a(x(t))
///
/// Stage 2 (Evaluate at predicted endpoint):
///   x_pred = x(t) + k1_x * dt
///   k2_x = v(t) + k1_v * dt
///   k2_v = a(x_pred)
///
/// Final update (Average):
///   x(t+dt) = x(t) + (k1_x + k2_x) * dt/2
///   v(t+dt) = v(t) + (k1_v + k2_v) * dt/2
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Heun;

impl Integrator for Heun {
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
        let k1_x = *velocity;
        let k1_v = field.at(*position);

        let pos_predicted = *position + k1_x * dt;
        let k2_x = *velocity + k1_v * dt;
        let k2_v = field.at(pos_predicted);

        *position += (k1_x + k2_x) * (dt * 0.5);
        *velocity += (k1_v + k2_v) * (dt * 0.5);
    }

    fn convergence_order(&self) -> usize {
        2
    }

    fn name(&self) -> &'static str {
        "heun"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["improved_euler"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::integrators::test_fields::{ConstantField, SpringField};

    #[test]
    fn test_heun_basic_step() {
        let integrator = Heun;
        let mut position = Vector::new(0.0, 0.0);
        let mut velocity = Vector::new(1.0, 0.0);
        let field = ConstantField(Vector::new(0.0, -9.81));
        let dt = 0.01;

        integrator.step(&mut position, &mut velocity, &field, dt);

        assert!(position.x > 0.0);
        assert!(velocity.y < 0.0);
        assert!((velocity.y + 9.81 * dt).abs() < 1e-15);
    }

    #[test]
    fn test_heun_second_order_convergence() {
        let integrator = Heun;
        let field = SpringField { k: 1.0 };
        let final_time = 0.5;

        let error_for = |dt: Scalar| {
            let mut position = Vector::new(1.0, 0.0);
            let mut velocity = Vector::ZERO;
            for _ in 0..(final_time / dt).round() as usize {
                integrator.step(&mut position, &mut velocity, &field, dt);
            }
            (position - Vector::new(final_time.cos(), 0.0)).length()
        };

        // Halving the step should quarter the error
        let error_ratio = error_for(0.01) / error_for(0.02);
        assert!(
            (error_ratio - 0.25).abs() < 0.1,
            "Second-order convergence not satisfied. Error ratio: {error_ratio}, expected ~0.25"
        );
    }
}
