use crate::physics::math::{Scalar, Vector};
use crate::simulation::{Frame, FrameSink};
use bevy::prelude::*;

/// Latest frame handed over by the simulation, read by the renderers.
///
/// Gizmos are redrawn every frame, so the view keeps its own copy of the
/// trail instead of borrowing the simulation's.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct OrbitView {
    pub position: Vector,
    pub velocity: Vector,
    /// Oldest to newest
    pub trail: Vec<Vector>,
    pub elapsed: Scalar,
    /// Number of frames presented so far
    pub frames: u64,
}

impl FrameSink for OrbitView {
    fn present(&mut self, frame: Frame<'_>) {
        self.position = frame.position;
        self.velocity = frame.velocity;
        self.trail.clear();
        self.trail.extend(frame.trail.iter().copied());
        self.elapsed = frame.elapsed;
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::trail::Trail;

    #[test]
    fn test_orbit_view_copies_frame() {
        let mut trail = Trail::new(Vector::new(0.0, 1.0), 3);
        trail.push(Vector::new(1.0, 1.0));
        let mut view = OrbitView::default();

        view.present(Frame {
            position: Vector::new(1.0, 1.0),
            velocity: Vector::new(0.5, 0.0),
            trail: &trail,
            elapsed: 20.0,
        });

        assert_eq!(view.position, Vector::new(1.0, 1.0));
        assert_eq!(view.velocity, Vector::new(0.5, 0.0));
        assert_eq!(view.trail, vec![Vector::new(0.0, 1.0), Vector::new(1.0, 1.0)]);
        assert_eq!(view.elapsed, 20.0);
        assert_eq!(view.frames, 1);
    }

    #[test]
    fn test_orbit_view_replaces_previous_trail() {
        let mut view = OrbitView::default();
        let long = {
            let mut trail = Trail::new(Vector::ZERO, 10);
            for i in 1..5 {
                trail.push(Vector::new(i as f64, 0.0));
            }
            trail
        };
        let short = Trail::new(Vector::new(9.0, 9.0), 10);

        view.present(Frame {
            position: Vector::new(4.0, 0.0),
            velocity: Vector::ZERO,
            trail: &long,
            elapsed: 40.0,
        });
        assert_eq!(view.trail.len(), 5);

        view.present(Frame {
            position: Vector::new(9.0, 9.0),
            velocity: Vector::ZERO,
            trail: &short,
            elapsed: 0.0,
        });

        assert_eq!(view.trail, vec![Vector::new(9.0, 9.0)]);
        assert_eq!(view.frames, 2);
    }
}
