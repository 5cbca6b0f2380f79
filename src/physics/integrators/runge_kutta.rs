//! Runge-Kutta integration methods

use super::{AccelerationField, Integrator};
use crate::physics::math::{Scalar, Vector};

/// Second-order Runge-Kutta method (explicit midpoint method)
///
/// This is a 2-stage, 2nd order accurate integrator that evaluates
/// the acceleration at an estimated midpoint of the step.
///
/// Algorithm:
/// - a1 = a(x)
/// - v_mid = v + a1 * dt/2
/// - x_mid = x + v * dt/2
/// - a2 = a(x_mid)
/// - v' = v + a2 * dt
/// - x' = x + v_mid * dt
///
/// Exactly two field evaluations per step, no error estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKuttaSecondOrderMidpoint;

impl Integrator for RungeKuttaSecondOrderMidpoint {
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
        let half_dt = dt * 0.5;

        // Stage 1: derivative at the start of the step
        let a1 = field.at(*position);

        // Stage 2: derivative at the estimated midpoint
        let vel_mid = *velocity + a1 * half_dt;
        let pos_mid = *position + *velocity * half_dt;
        let a2 = field.at(pos_mid);

        *velocity += a2 * dt;
        *position += vel_mid * dt;
    }

    fn convergence_order(&self) -> usize {
        2
    }

    fn name(&self) -> &'static str {
        "midpoint"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["rk2", "runge_kutta_second_order_midpoint"]
    }
}

/// Fourth-order Runge-Kutta integrator (RK4)
///
/// The RK4 algorithm:
/// 1. k1 = f(t, y)
/// 2. k2 = f(t + dt/2, y + k1*dt/2)
/// 3. k3 = f(t + dt/2, y + k2*dt/2)
/// 4. k4 = f(t + dt, y + k3*dt)
/// 5. y(t+dt) = y(t) + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKuttaFourthOrder;

impl Integrator for RungeKuttaFourthOrder {
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

        let k2_x = *velocity + k1_v * (dt * 0.5);
        let k2_v = field.at(*position + k1_x * (dt * 0.5));

        let k3_x = *velocity + k2_v * (dt * 0.5);
        let k3_v = field.at(*position + k2_x * (dt * 0.5));

        let k4_x = *velocity + k3_v * dt;
        let k4_v = field.at(*position + k3_x * dt);

        *position += (k1_x + k2_x * 2.0 + k3_x * 2.0 + k4_x) * (dt / 6.0);
        *velocity += (k1_v + k2_v * 2.0 + k3_v * 2.0 + k4_v) * (dt / 6.0);
    }

    fn convergence_order(&self) -> usize {
        4
    }

    fn name(&self) -> &'static str {
        "runge_kutta_fourth_order"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["rk4"]
    }
}
