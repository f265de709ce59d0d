//! Collision filtering for 2D shapes
//!
//! Provides the cheap group/category/mask rejection test the broad phase runs
//! before narrow-phase collision detection.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::bitmask::Bitmask;

/// Collision group identifier. Group 0 means "no group".
pub type Group = u64;

bitflags! {
    /// Named collision categories for a typical shooter setup
    ///
    /// Each category is a bit in a 32-bit mask. Objects can belong to multiple
    /// categories and can define which categories they collide with via a mask.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CollisionLayer: u32 {
        /// Player characters
        const PLAYER = 1 << 0;
        /// Enemies/NPCs
        const ENEMY = 1 << 1;
        /// Bullets fired by players
        const PLAYER_BULLET = 1 << 2;
        /// Bullets fired by enemies
        const ENEMY_BULLET = 1 << 3;
        /// Static world geometry
        const WALL = 1 << 4;
        /// All layers (collide with everything)
        const ALL = 0xFFFFFFFF;
    }
}

impl Bitmask for CollisionLayer {
    const BITS: u32 = u32::BITS;
    const NONE: Self = Self::empty();
    const ALL: Self = Self::all();

    #[inline]
    fn bit(index: u32) -> Option<Self> {
        1u32.checked_shl(index).map(Self::from_bits_retain)
    }
}

/// Collision filter attached to a shape
///
/// - `group`: shapes sharing a non-zero group never collide
/// - `categories`: which categories this shape belongs to
/// - `mask`: which categories this shape collides with
///
/// Two shapes A and B collide if they are not in the same non-zero group and:
/// - (A.categories & B.mask) != 0, AND
/// - (B.categories & A.mask) != 0
///
/// By default a shape has no group, belongs to every category and collides
/// with every category. The mask width is chosen with `M` (32 bits unless
/// stated otherwise).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "M: Bitmask + Deserialize<'de>"))]
pub struct CollisionFilter<M: Bitmask = u32> {
    /// Group identifier (0 = none)
    pub group: Group,
    /// Which categories this shape belongs to
    pub categories: M,
    /// Which categories this shape collides with
    pub mask: M,
}

impl<M: Bitmask> Default for CollisionFilter<M> {
    fn default() -> Self {
        Self::ALL
    }
}

impl<M: Bitmask> CollisionFilter<M> {
    /// No group, every category, collides with everything
    pub const ALL: Self = Self {
        group: 0,
        categories: M::ALL,
        mask: M::ALL,
    };

    /// No group, no categories, collides with nothing
    pub const NONE: Self = Self {
        group: 0,
        categories: M::NONE,
        mask: M::NONE,
    };

    /// Create a new collision filter
    pub fn new(group: Group, categories: M, mask: M) -> Self {
        Self {
            group,
            categories,
            mask,
        }
    }

    /// Mask with every category set
    #[inline]
    pub fn all_categories() -> M {
        M::ALL
    }

    /// Mask that collides with every category
    #[inline]
    pub fn all_masks() -> M {
        M::ALL
    }

    /// Replace the group
    #[inline]
    pub fn with_group(mut self, group: Group) -> Self {
        self.group = group;
        self
    }

    /// Replace the categories
    #[inline]
    pub fn with_categories(mut self, categories: M) -> Self {
        self.categories = categories;
        self
    }

    /// Replace the mask
    #[inline]
    pub fn with_mask(mut self, mask: M) -> Self {
        self.mask = mask;
        self
    }

    /// Check if this filter allows collision with another filter
    #[inline]
    pub fn collides_with(&self, other: &Self) -> bool {
        should_collide(self, other)
    }

    /// Check if this filter rejects collision with another filter
    #[inline]
    pub fn rejects(&self, other: &Self) -> bool {
        !should_collide(self, other)
    }
}

/// Decide whether two shapes may be tested for collision
///
/// Shapes in the same non-zero group are always rejected. Otherwise each
/// shape's categories must intersect the other's mask.
#[inline]
pub fn should_collide<M: Bitmask>(a: &CollisionFilter<M>, b: &CollisionFilter<M>) -> bool {
    if a.group != 0 && a.group == b.group {
        return false;
    }
    // Both must agree on the collision
    a.categories.intersects(b.mask) && b.categories.intersects(a.mask)
}
