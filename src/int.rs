//! Vose's alias method in exact integer arithmetic.
//!
//! When the total weight is not a multiple of the outcome count, one padding
//! outcome is appended so that it is. Its index is recorded as the table's
//! dummy index and the sampler redraws whenever it comes up.

use crate::error::BuildError;
use crate::table::{AliasTable, Slot};
use crate::twins::{Piece, TwinStacks};

/// Largest number of integer weights: the padding slot must still be
/// addressable with a `u32`.
pub const MAX_INT_OUTCOMES: usize = u32::MAX as usize - 1;

impl AliasTable {
    /// Construct an alias table from positive integer weights. O(n).
    ///
    /// The result is bit-for-bit reproducible: no floating point is involved,
    /// and [`outcome_masses`](Self::outcome_masses) returns the input weights
    /// exactly.
    ///
    /// # Errors
    /// * [`BuildError::TooFewWeights`] if `weights` is empty.
    /// * [`BuildError::TooManyWeights`] if there are more than [`MAX_INT_OUTCOMES`].
    /// * [`BuildError::NonPositiveWeight`] for a weight `<= 0`.
    pub fn from_ints(weights: &[i32]) -> Result<Self, BuildError> {
        let n = weights.len();
        if n == 0 {
            return Err(BuildError::TooFewWeights);
        }
        if n > MAX_INT_OUTCOMES {
            return Err(BuildError::TooManyWeights { len: n });
        }

        let mut total = 0u64;
        for (index, &w) in weights.iter().enumerate() {
            if w <= 0 {
                return Err(BuildError::NonPositiveWeight {
                    index,
                    value: f64::from(w),
                });
            }
            total += w as u64;
        }

        let mut avg = total / n as u64;
        let mut padding = None;
        if avg * n as u64 != total {
            avg += 1;
            padding = Some(avg * (n as u64 + 1) - total);
        }
        let m = n + usize::from(padding.is_some());

        let mut twins = TwinStacks::with_capacity(m);
        let masses = weights.iter().map(|&w| w as u64).chain(padding);
        for (i, mass) in masses.enumerate() {
            let piece = Piece {
                mass,
                outcome: i as u32,
            };
            if mass >= avg {
                twins.push_large(piece);
            } else {
                twins.push_small(piece);
            }
        }
        assert!(twins.is_full(), "internal error: int partition lost a weight");

        // avg <= max weight < 2^31, so every threshold fits below the limit.
        let unit = avg as u32;
        let mut slots = vec![Slot::default(); m];

        while let Some((l, mut g)) = twins.pop_pair() {
            // l.mass >= 1: weights are positive and a large piece never
            // drops below the small piece it absorbed.
            slots[l.outcome as usize] = Slot {
                threshold: (l.mass - 1) as u32,
                alias: g.outcome,
            };

            g.mass = (g.mass + l.mass) - avg;
            if g.mass < avg {
                twins.push_small(g);
            } else {
                twins.push_large(g);
            }
        }

        assert!(
            twins.smalls().is_empty(),
            "internal error: {} small pieces left after pairing",
            twins.smalls().len()
        );
        for piece in twins.larges() {
            slots[piece.outcome as usize] = Slot {
                threshold: unit - 1,
                alias: piece.outcome,
            };
        }

        let table = AliasTable::from_parts(slots, unit, n as u32);
        table.check_full_slot();
        log::debug!(
            "built int alias table: {m} slots, unit {unit}, padding {}",
            padding.unwrap_or(0)
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(AliasTable::from_ints(&[]), Err(BuildError::TooFewWeights));
        assert_eq!(
            AliasTable::from_ints(&[3, 0]),
            Err(BuildError::NonPositiveWeight { index: 1, value: 0.0 })
        );
        assert_eq!(
            AliasTable::from_ints(&[-4]),
            Err(BuildError::NonPositiveWeight { index: 0, value: -4.0 })
        );
    }

    #[test]
    fn divisible_total_needs_no_padding() {
        let t = AliasTable::from_ints(&[1, 1]).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.unit(), 1);
        assert_eq!(t.dummy_index(), None);
        assert_eq!(t.outcome_masses(), vec![1, 1]);

        let t = AliasTable::from_ints(&[2, 6, 4]).unwrap();
        assert_eq!(t.unit(), 4);
        assert_eq!(t.dummy_index(), None);
        assert_eq!(t.outcome_masses(), vec![2, 6, 4]);
    }

    #[test]
    fn uneven_total_adds_padding_slot() {
        // total 20 over 3 outcomes: avg rounds up to 7, padding 7 * 4 - 20 = 8.
        let t = AliasTable::from_ints(&[8, 10, 2]).unwrap();
        assert_eq!(t.len(), 4);
        assert_eq!(t.outcomes(), 3);
        assert_eq!(t.unit(), 7);
        assert_eq!(t.dummy_index(), Some(3));
        assert_eq!(t.outcome_masses(), vec![8, 10, 2, 8]);
    }

    #[test]
    fn masses_match_weights_exactly() {
        let weights = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1000];
        let t = AliasTable::from_ints(&weights).unwrap();
        let masses = t.outcome_masses();
        for (i, &w) in weights.iter().enumerate() {
            assert_eq!(masses[i], w as u64, "outcome {i}");
        }
        for slot in t.slots() {
            assert!(slot.threshold < t.unit());
            assert!((slot.alias as usize) < t.len());
        }
    }

    #[test]
    fn largest_weights_stay_in_range() {
        let t = AliasTable::from_ints(&[i32::MAX, i32::MAX - 1, 1]).unwrap();
        assert!(t.unit() < crate::THRESHOLD_LIMIT);
        assert_eq!(
            &t.outcome_masses()[..3],
            &[i32::MAX as u64, i32::MAX as u64 - 1, 1]
        );
    }
}
