//! Planar - collision filtering and 2D transforms
//!
//! Library entry point for integration tests and the `planar` binary.
//! The core types live in [`planar_math`] and [`planar_physics`]; this crate
//! adds configuration loading and collision matrix evaluation.

pub mod config;
pub mod matrix;

pub use planar_math;
pub use planar_physics;
