//! 2D collision filtering
//!
//! This crate provides the fast rejection test a broad phase runs before
//! narrow-phase collision detection:
//! - Groups (shapes of one compound object never collide with each other)
//! - Category/mask bitmasks with a configurable width
//! - Pluggable rules for games that need a different rejection test

pub mod bitmask;
pub mod collision;
pub mod rule;

// Re-export commonly used types
pub use bitmask::Bitmask;
pub use collision::{should_collide, CollisionFilter, CollisionLayer, Group};
pub use rule::{DefaultRule, FilterRule};
