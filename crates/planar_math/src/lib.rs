//! 2D Mathematics Library
//!
//! This crate provides the vector and affine transform types used to map
//! shape geometry between local and world space.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components
//! - [`Transform2D`] - 2x3 affine transform (rotation, scale, shear, translation)

mod vec2;
pub mod transform2d;

pub use vec2::Vec2;
pub use transform2d::Transform2D;
