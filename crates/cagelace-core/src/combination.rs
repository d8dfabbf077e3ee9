//! Enumeration of cage sum combinations.
//!
//! A combination is a strictly increasing tuple of distinct digits 1-9 whose
//! values sum to a cage's target. Because the digits are distinct and the
//! tuple ascending, a combination is exactly a [`DigitSet`]; iterating the
//! set recovers the tuple.

use tinyvec::ArrayVec;

use crate::{Digit, DigitSet};

/// Enumerates all combinations of `len` distinct digits summing to
/// `target_sum`.
///
/// Results are produced in lexicographic tuple order, e.g. for a target of 13
/// over 2 cells: `(4,9)`, `(5,8)`, `(6,7)`. The search is pure and
/// deterministic; infeasible inputs (including `len` of 0 or more than 9)
/// yield an empty vector.
///
/// # Examples
///
/// ```
/// use cagelace_core::{Digit, DigitSet, combination::combinations};
///
/// let combos = combinations(13, 2);
/// assert_eq!(combos.len(), 3);
/// assert_eq!(combos[0], DigitSet::from_iter([Digit::D4, Digit::D9]));
/// ```
#[must_use]
pub fn combinations(target_sum: u8, len: u8) -> Vec<DigitSet> {
    if len == 0 || len > 9 {
        return Vec::new();
    }
    let mut results = Vec::new();
    let mut picks = ArrayVec::<[u8; 9]>::new();
    search(
        i16::from(target_sum),
        usize::from(len),
        1,
        &mut picks,
        &mut results,
    );
    results
}

fn search(
    remaining: i16,
    len: usize,
    lowest: u8,
    picks: &mut ArrayVec<[u8; 9]>,
    results: &mut Vec<DigitSet>,
) {
    if picks.len() == len {
        if remaining == 0 {
            results.push(picks.iter().map(|&v| Digit::from_value(v)).collect());
        }
        return;
    }
    if remaining <= 0 {
        return;
    }
    for value in lowest..=9 {
        picks.push(value);
        search(remaining - i16::from(value), len, value + 1, picks, results);
        picks.pop();
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Digit::*;

    use super::*;

    fn as_values(combo: DigitSet) -> Vec<u8> {
        combo.iter().map(|digit| digit.value()).collect()
    }

    #[test]
    fn test_two_cell_thirteen() {
        let combos = combinations(13, 2);
        let values: Vec<_> = combos.into_iter().map(as_values).collect();
        assert_eq!(values, vec![vec![4, 9], vec![5, 8], vec![6, 7]]);
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(combinations(7, 1), vec![DigitSet::from_iter([D7])]);
        assert_eq!(combinations(10, 1), Vec::<DigitSet>::new());
    }

    #[test]
    fn test_full_house() {
        // All nine digits sum to 45, and that is the only 9-cell combination
        assert_eq!(combinations(45, 9), vec![DigitSet::FULL]);
        assert_eq!(combinations(44, 9), Vec::<DigitSet>::new());
    }

    #[test]
    fn test_infeasible_inputs() {
        assert!(combinations(3, 0).is_empty());
        assert!(combinations(3, 10).is_empty());
        assert!(combinations(3, 3).is_empty()); // minimum for 3 cells is 6
        assert!(combinations(25, 3).is_empty()); // maximum for 3 cells is 24
        assert!(combinations(0, 2).is_empty());
    }

    #[test]
    fn test_lexicographic_order() {
        let combos = combinations(15, 3);
        let values: Vec<_> = combos.into_iter().map(as_values).collect();
        assert_eq!(
            values,
            vec![
                vec![1, 5, 9],
                vec![1, 6, 8],
                vec![2, 4, 9],
                vec![2, 5, 8],
                vec![2, 6, 7],
                vec![3, 4, 8],
                vec![3, 5, 7],
                vec![4, 5, 6],
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_combinations_are_valid(target in 1u8..=45, len in 1u8..=9) {
            let combos = combinations(target, len);
            for combo in &combos {
                prop_assert_eq!(combo.len(), usize::from(len));
                let sum: u8 = combo.iter().map(|digit| digit.value()).sum();
                prop_assert_eq!(sum, target);
            }
            // Distinct by construction
            for (i, a) in combos.iter().enumerate() {
                for b in &combos[i + 1..] {
                    prop_assert_ne!(a, b);
                }
            }
        }
    }
}
