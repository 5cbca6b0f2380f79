//! Centralized event definitions
//!
//! Input handlers (keyboard and buttons) translate user intent into
//! [`SimulationCommand`] events; the simulation plugin is the only reader
//! that acts on `Start` and `Reset`.

use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationCommand {
    Start,
    Reset,
    Quit,
}
