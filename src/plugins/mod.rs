pub mod controls;
pub mod headless;
pub mod hud;
pub mod simulation;
pub mod visualization;
