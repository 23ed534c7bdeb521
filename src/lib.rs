pub mod config;
pub mod core;
pub mod detectors;
pub mod intel;
pub mod pipeline;
