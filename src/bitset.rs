//! Generic, fixed-size bitsets
//!
//! The elimination rules work with sets of [`Digit`s](crate::board::Digit) and
//! with sets of [`Position`s](crate::board::positions::Position) inside a unit
//! all the time. Both fit in a `u16` bitmask, but a raw mask makes it too easy
//! to mix up what is being counted. The [`Set`] wrapper here is generic over
//! the element type, so digit masks and position masks stay apart.

use crate::board::{Digit, Position};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// Generic, fixed-size bitset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Set<T: SetElement>(T::Storage);

/// Iterator over the elements contained in a [`Set`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iter<T: SetElement>(T::Storage);

impl<T: SetElement> IntoIterator for Set<T>
where
    Iter<T>: Iterator,
{
    type Item = <Iter<T> as Iterator>::Item;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.0)
    }
}

impl<T: SetElement> From<T> for Set<T> {
    fn from(element: T) -> Self {
        element.as_set()
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////
//                                  Bitops
///////////////////////////////////////////////////////////////////////////////////////////////

macro_rules! impl_binary_bitops {
    ( $( $trait:ident, $fn_name:ident);* $(;)* ) => {
        $(
            impl<T: SetElement> $trait for Set<T> {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: Self) -> Self {
                    Set(
                        $trait::$fn_name(self.0, other.0)
                    )
                }
            }

            impl<T: SetElement> $trait<T> for Set<T> {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: T) -> Self {
                    $trait::$fn_name(self, other.as_set())
                }
            }
        )*
    };
}

macro_rules! impl_bitops_assign {
    ( $( $trait:ident, $fn_name:ident);* $(;)* ) => {
        $(
            impl<T: SetElement> $trait for Set<T> {
                #[inline(always)]
                fn $fn_name(&mut self, other: Self) {
                    $trait::$fn_name(&mut self.0, other.0)
                }
            }

            impl<T: SetElement> $trait<T> for Set<T> {
                #[inline(always)]
                fn $fn_name(&mut self, other: T) {
                    $trait::$fn_name(self, other.as_set())
                }
            }
        )*
    };
}

impl_binary_bitops!(
    BitAnd, bitand;
    BitOr, bitor;
    BitXor, bitxor;
);

impl_bitops_assign!(
    BitAndAssign, bitand_assign;
    BitOrAssign, bitor_assign;
    BitXorAssign, bitxor_assign;
);

impl<T: SetElement> Not for Set<T>
where
    Self: PartialEq + Copy,
{
    type Output = Self;
    fn not(self) -> Self {
        Self::ALL.without(self)
    }
}

impl<T: SetElement> Set<T>
where
    Self: PartialEq + Copy,
{
    /// Set containing all possible elements
    pub const ALL: Set<T> = Set(<T as SetElement>::ALL);

    /// Empty Set
    pub const NONE: Set<T> = Set(<T as SetElement>::NONE);

    /// Construct a bitset from a raw integer.
    ///
    /// # Panic
    /// Panics, if the integer contains bits above [`Set::ALL`]
    pub fn from_bits(mask: T::Storage) -> Self {
        assert!(mask <= <T as SetElement>::ALL);
        Set(mask)
    }

    /// Return the raw integer backing the set.
    pub fn bits(self) -> T::Storage {
        self.0
    }

    /// Returns the set of elements in this set, that aren't present in `other`.
    pub fn without(self, other: Self) -> Self {
        Set(self.0 & !other.0)
    }

    /// Deletes all elements from this set that are present in `other`.
    pub fn remove(&mut self, other: impl Into<Self>) {
        self.0 &= !other.into().0;
    }

    /// Checks if `self` contains `other`.
    pub fn contains(&self, other: impl Into<Self>) -> bool {
        let other = other.into();
        *self & other == other
    }

    /// Returns the number of elements in this set.
    pub fn len(&self) -> u8 {
        T::count_possibilities(self.0) as u8
    }

    /// Checks whether this set contains any element.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks whether this set contains all possible elements.
    pub fn is_full(&self) -> bool {
        *self == Self::ALL
    }

    /// Returns the only element in this set, iff exactly 1 element exists.
    pub fn unique(self) -> Option<T>
    where
        Iter<T>: Iterator<Item = T>,
    {
        match self.len() {
            1 => self.into_iter().next(),
            _ => None,
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////

/// Trait for types that can be stored in a [`Set`]
#[allow(missing_docs)]
pub trait SetElement: Sized + set_element::Sealed {
    const ALL: Self::Storage;
    const NONE: Self::Storage;

    type Storage: BitAnd<Output = Self::Storage>
        + BitAndAssign
        + BitOr<Output = Self::Storage>
        + BitOrAssign
        + BitXor<Output = Self::Storage>
        + BitXorAssign
        + Not<Output = Self::Storage>
        + PartialOrd
        + std::fmt::Binary
        + Copy;

    fn count_possibilities(set: Self::Storage) -> u32;
    fn as_set(self) -> Set<Self>;
}
mod set_element {
    use super::*;
    pub trait Sealed {}

    macro_rules! impl_sealed {
        ($($type:ty),*) => {
            $(
                impl Sealed for $type {}
            )*
        };
    }

    impl_sealed! {
        Digit, Position
    }
}

macro_rules! impl_setelement {
    ( $( $type:ty => $storage_ty:ty, $all:expr),* $(,)* ) => {
        $(
            impl SetElement for $type {
                const ALL: $storage_ty = $all;
                const NONE: $storage_ty = 0;

                type Storage = $storage_ty;

                fn count_possibilities(set: Self::Storage) -> u32 {
                    set.count_ones()
                }

                fn as_set(self) -> Set<Self> {
                    Set(1 << self.as_index() as u8)
                }
            }

            impl $type {
                /// Returns a `Set<Self>` with the bit corresponding to this element set.
                pub fn as_set(self) -> Set<Self> {
                    SetElement::as_set(self)
                }
            }
        )*
    };
}

impl_setelement!(
    // 9 digits
    Digit => u16, 0o777,
    // 9 positions per unit
    Position => u16, 0o777,
);

macro_rules! impl_iter_for_setiter {
    ( $( $type:ty => $constructor:expr ),* $(,)* ) => {
        $(
            impl Iterator for Iter<$type> {
                type Item = $type;

                fn next(&mut self) -> Option<Self::Item> {
                    debug_assert!(self.0 <= <Set<$type>>::ALL.0, "{:o}", self.0);
                    if self.0 == 0 {
                        return None;
                    }
                    let lowest_bit = self.0 & (!self.0 + 1);
                    let bit_pos = lowest_bit.trailing_zeros() as u8;
                    self.0 ^= lowest_bit;
                    Some($constructor(bit_pos))
                }
            }
        )*
    };
}

// can't do this generically
impl_iter_for_setiter!(
    Digit => Digit::from_index,
    Position => Position::new,
);

use std::fmt;
impl<T: SetElement> fmt::Binary for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_and_none() {
        assert_eq!(<Set<Digit>>::ALL.len(), 9);
        assert_eq!(<Set<Digit>>::ALL.bits(), 0o777);
        assert_eq!(<Set<Digit>>::NONE.len(), 0);
        assert!(<Set<Digit>>::NONE.is_empty());
        assert!(<Set<Digit>>::ALL.is_full());
    }

    #[test]
    fn digits_iterate_in_ascending_order() {
        let digits = <Set<Digit>>::ALL.into_iter().map(Digit::get).collect::<Vec<_>>();
        assert_eq!(digits, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(Digit::all().eq(<Set<Digit>>::ALL));
    }

    #[test]
    fn contains_is_subset_test() {
        let small = Set::from_bits(0b_000_010_001);
        let large = Set::from_bits(0b_100_010_001);
        assert!(large.contains(small));
        assert!(!small.contains(large));
        assert!(large.contains(Digit::new(1)));
        assert!(!large.contains(Digit::new(2)));
        // every set contains itself and the empty set
        assert!(small.contains(small));
        assert!(small.contains(<Set<Digit>>::NONE));
    }

    #[test]
    fn without_and_remove_agree() {
        let set = <Set<Digit>>::ALL;
        let dropped = Set::from_bits(0b_001_100_000);
        let mut removed = set;
        removed.remove(dropped);
        assert_eq!(set.without(dropped), removed);
        assert_eq!(removed.len(), 7);
    }

    #[test]
    fn remove_absent_element_is_noop() {
        let mut set = Set::from_bits(0o007);
        set.remove(Digit::new(9));
        assert_eq!(set, Set::from_bits(0o007));
    }

    #[test]
    fn unique() {
        assert_eq!(<Set<Digit>>::NONE.unique(), None);
        assert_eq!(<Set<Digit>>::ALL.unique(), None);
        assert_eq!(Digit::new(4).as_set().unique(), Some(Digit::new(4)));
        for digit in <Set<Digit>>::ALL {
            assert_eq!(digit.as_set().into_iter().count(), 1);
        }
    }

    #[test]
    fn positions_roundtrip() {
        let mut set = <Set<Position>>::NONE;
        for pos in [0u8, 3, 8].iter().copied().map(Position::new) {
            set |= pos;
        }
        assert_eq!(set.len(), 3);
        assert!(set.contains(Position::new(3)));
        assert!(!set.contains(Position::new(4)));
        let positions = set.into_iter().map(|p| p.get()).collect::<Vec<_>>();
        assert_eq!(positions, [0, 3, 8]);
    }
}
