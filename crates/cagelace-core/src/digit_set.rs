//! A set of digits 1-9, backed by a 9-bit mask.

use std::{
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::Digit;

/// A set of digits 1-9, commonly used for candidate notes in a cell.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively, providing compact storage and fast set operations.
/// Iteration always yields digits in ascending order.
///
/// # Examples
///
/// ```
/// use cagelace_core::{Digit, DigitSet};
///
/// let mut notes = DigitSet::new();
/// notes.insert(Digit::D4);
/// notes.insert(Digit::D9);
///
/// assert_eq!(notes.len(), 2);
/// assert!(notes.contains(Digit::D4));
/// assert!(!notes.contains(Digit::D5));
/// ```
///
/// # Set Operations
///
/// ```
/// use cagelace_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_iter([Digit::D1]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

const MASK: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all digits 1-9.
    pub const FULL: Self = Self { bits: MASK };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= bit(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !bit(digit);
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(&self, digit: Digit) -> bool {
        self.bits & bit(digit) != 0
    }

    /// Returns the only digit in the set, or `None` if the set does not
    /// contain exactly one digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use cagelace_core::{Digit, DigitSet};
    ///
    /// let mut set = DigitSet::new();
    /// assert_eq!(set.as_single(), None);
    /// set.insert(Digit::D7);
    /// assert_eq!(set.as_single(), Some(Digit::D7));
    /// set.insert(Digit::D2);
    /// assert_eq!(set.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(&self) -> Option<Digit> {
        if self.bits.count_ones() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns the raw bit representation (bits 0-8 = digits 1-9).
    #[must_use]
    pub const fn bits(&self) -> u16 {
        self.bits
    }

    /// Creates a set from a raw bit representation, returning `None` if bits
    /// outside the digit range are set.
    #[must_use]
    pub const fn try_from_bits(bits: u16) -> Option<Self> {
        if bits & !MASK == 0 {
            Some(Self { bits })
        } else {
            None
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub fn iter(&self) -> Iter {
        Iter { bits: self.bits }
    }
}

const fn bit(digit: Digit) -> u16 {
    1 << (digit.value() - 1)
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Some(Digit::from_value(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use crate::Digit::*;

    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        set.insert(D1);
        set.insert(D9);
        assert!(set.contains(D1));
        assert!(set.contains(D9));
        assert!(!set.contains(D5));
        assert_eq!(set.len(), 2);

        set.remove(D1);
        assert!(!set.contains(D1));
        assert_eq!(set.len(), 1);

        // Removing an absent digit is a no-op
        set.remove(D1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::FULL.as_single(), None);
        assert_eq!(DigitSet::from_iter([D6]).as_single(), Some(D6));
    }

    #[test]
    fn test_set_operations() {
        let a = DigitSet::from_iter([D1, D2, D3]);
        let b = DigitSet::from_iter([D2, D3, D4]);

        assert_eq!(a.union(b).len(), 4);
        assert_eq!(a.intersection(b).len(), 2);
        assert_eq!(a.difference(b), DigitSet::from_iter([D1]));
    }

    #[test]
    fn test_bits_round_trip() {
        let set = DigitSet::from_iter([D2, D7]);
        assert_eq!(DigitSet::try_from_bits(set.bits()), Some(set));
        assert_eq!(DigitSet::try_from_bits(0x200), None);
        assert_eq!(DigitSet::try_from_bits(0x1ff), Some(DigitSet::FULL));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }
}
