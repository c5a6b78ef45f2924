// src/ui/mod.rs
pub mod controls;
pub mod interactions;

pub use controls::StepControls;
pub use interactions::setup_interactions;
