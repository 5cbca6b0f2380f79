//! Physics core: the central gravity field, the numerical integration
//! methods that advance a body through it, and the bounded trail history.

pub mod gravity;
pub mod integrators;
pub mod math;
pub mod trail;
