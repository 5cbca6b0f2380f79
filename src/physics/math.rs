/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 2D vector type for positions, velocities, and accelerations
pub type Vector = bevy::math::DVec2;

/// Converts a `[x, y]` pair (as stored in configuration) into a vector
#[inline]
pub fn vector_from_pair(pair: [Scalar; 2]) -> Vector {
    Vector::new(pair[0], pair[1])
}

/// Projects a position in meters onto the screen plane in pixels
#[inline]
pub fn to_screen(position: Vector, meters_to_pixels: Scalar) -> bevy::math::Vec2 {
    (position * meters_to_pixels).as_vec2()
}
