//! Pluggable collision rejection rules
//!
//! The default group/category/mask test suits objects that sit in a single
//! category. Games that put objects in several categories (a red-team
//! player bullet, say) can swap in their own rule.

use crate::bitmask::Bitmask;
use crate::collision::{should_collide, CollisionFilter};

/// Decides whether two filtered shapes may collide
pub trait FilterRule<M: Bitmask = u32> {
    /// Return true if the pair should go on to narrow-phase detection
    fn should_collide(&self, a: &CollisionFilter<M>, b: &CollisionFilter<M>) -> bool;

    /// Return true if the pair is rejected
    fn rejects(&self, a: &CollisionFilter<M>, b: &CollisionFilter<M>) -> bool {
        !self.should_collide(a, b)
    }
}

/// The standard group/category/mask rule (see [`should_collide`])
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultRule;

impl<M: Bitmask> FilterRule<M> for DefaultRule {
    #[inline]
    fn should_collide(&self, a: &CollisionFilter<M>, b: &CollisionFilter<M>) -> bool {
        should_collide(a, b)
    }
}

impl<M, F> FilterRule<M> for F
where
    M: Bitmask,
    F: Fn(&CollisionFilter<M>, &CollisionFilter<M>) -> bool,
{
    #[inline]
    fn should_collide(&self, a: &CollisionFilter<M>, b: &CollisionFilter<M>) -> bool {
        self(a, b)
    }
}
