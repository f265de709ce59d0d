//! Category/mask bit widths
//!
//! Collision filters are generic over the integer width of their category and
//! mask fields. 32 bits covers most games; switch to `u64` when more
//! categories are needed.

use std::fmt::Debug;
use std::ops::{BitAnd, BitOr};

/// A fixed-width set of collision categories
pub trait Bitmask:
    Copy + Eq + Debug + BitAnd<Output = Self> + BitOr<Output = Self> + Send + Sync + 'static
{
    /// Number of categories this width can express
    const BITS: u32;
    /// No categories
    const NONE: Self;
    /// Every category
    const ALL: Self;

    /// Mask containing only the category at `index` (zero-based)
    ///
    /// Returns `None` if `index` does not fit in this width.
    fn bit(index: u32) -> Option<Self>;

    /// Check whether the two masks share at least one category
    #[inline]
    fn intersects(self, other: Self) -> bool {
        (self & other) != Self::NONE
    }

    /// Union of the categories at the given indices
    ///
    /// Returns `None` if any index is out of range. An empty iterator gives
    /// [`Bitmask::NONE`].
    fn from_indices<I>(indices: I) -> Option<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        indices
            .into_iter()
            .try_fold(Self::NONE, |acc, index| Some(acc | Self::bit(index)?))
    }
}

macro_rules! impl_bitmask_for_int {
    ($($ty:ty),*) => {
        $(
            impl Bitmask for $ty {
                const BITS: u32 = <$ty>::BITS;
                const NONE: Self = 0;
                const ALL: Self = <$ty>::MAX;

                #[inline]
                fn bit(index: u32) -> Option<Self> {
                    (1 as $ty).checked_shl(index)
                }
            }
        )*
    };
}

impl_bitmask_for_int!(u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(<u32 as Bitmask>::BITS, 32);
        assert_eq!(<u64 as Bitmask>::BITS, 64);
        assert_eq!(<u32 as Bitmask>::ALL, 0xFFFF_FFFF);
        assert_eq!(<u64 as Bitmask>::ALL, u64::MAX);
    }

    #[test]
    fn test_bit() {
        assert_eq!(u32::bit(0), Some(1));
        assert_eq!(u32::bit(31), Some(1 << 31));
        assert_eq!(u32::bit(32), None);
        assert_eq!(u64::bit(40), Some(1 << 40));
        assert_eq!(u64::bit(64), None);
    }

    #[test]
    fn test_intersects() {
        assert!(0b0110u32.intersects(0b0100));
        assert!(!0b0110u32.intersects(0b1001));
        assert!(!0u32.intersects(u32::ALL));
    }

    #[test]
    fn test_from_indices() {
        assert_eq!(u32::from_indices([0, 2]), Some(0b101));
        assert_eq!(u32::from_indices([]), Some(0));
        assert_eq!(u32::from_indices([1, 1]), Some(0b10));
        assert_eq!(u32::from_indices([3, 32]), None);
        assert_eq!(u64::from_indices([32, 63]), Some((1 << 32) | (1 << 63)));
    }
}
