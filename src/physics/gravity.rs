//! Central gravity field of a fixed body sitting at the origin

use super::integrators::AccelerationField;
use super::math::{Scalar, Vector};

/// Newtonian gravity of a single, non-moving central mass at the origin.
///
/// The acceleration at `r` is `-G·M / |r|³ · r`: it points at the origin with
/// magnitude `G·M / |r|²`. The field is singular at the origin and does not
/// guard against it; a position of exactly zero yields non-finite components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralGravity {
    pub gravitational_constant: Scalar,
    pub central_mass: Scalar,
}

impl CentralGravity {
    pub fn new(gravitational_constant: Scalar, central_mass: Scalar) -> Self {
        Self {
            gravitational_constant,
            central_mass,
        }
    }

    /// Standard gravitational parameter `G·M`
    #[inline]
    pub fn mu(&self) -> Scalar {
        self.gravitational_constant * self.central_mass
    }

    /// Acceleration produced by the central mass at `position`
    #[inline]
    pub fn acceleration(&self, position: Vector) -> Vector {
        let r = (position.x * position.x + position.y * position.y).sqrt();
        let accel = -self.gravitational_constant * self.central_mass / r.powi(3);
        Vector::new(accel * position.x, accel * position.y)
    }
}

impl AccelerationField for CentralGravity {
    fn at(&self, position: Vector) -> Vector {
        self.acceleration(position)
    }
}

/// Specific mechanical energy of an orbit, `|v|²/2 − μ/|r|`
pub fn specific_orbital_energy(position: Vector, velocity: Vector, mu: Scalar) -> Scalar {
    0.5 * velocity.length_squared() - mu / position.length()
}
