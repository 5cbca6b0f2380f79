//! Orbitdrift library
//!
//! This provides the core functionality of orbitdrift as a library
//! to enable integration testing and benchmarking.

pub mod cli;
pub mod config;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod simulation;

// Test utilities are public for integration tests
pub mod test_utils;
