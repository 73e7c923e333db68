//! Simulation control, behaviour analysis and run reporting

pub mod analysis;
pub mod controller;
pub mod report;

pub use analysis::{classify, find_period, Behavior, Shape};
pub use controller::Simulation;
pub use report::{GenerationStats, RunReport};
