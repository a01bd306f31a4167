//! Vose's alias method over floating-point weights, quantized to a 2^31
//! fixed-point scale.

use crate::error::BuildError;
use crate::table::{AliasTable, FLOAT_UNIT, MAX_OUTCOMES, Slot};
use crate::twins::{Piece, TwinStacks};

impl AliasTable {
    /// Construct an alias table from positive weights. O(n).
    ///
    /// For example `AliasTable::new(&[8.0, 10.0, 2.0])` yields outcome 0
    /// 40% of the time, 1 50% of the time and 2 10% of the time.
    ///
    /// # Errors
    /// * [`BuildError::TooFewWeights`] if `weights` is empty.
    /// * [`BuildError::TooManyWeights`] if there are more than [`MAX_OUTCOMES`].
    /// * [`BuildError::NonPositiveWeight`] / [`BuildError::NonFiniteWeight`]
    ///   for a weight `<= 0`, NaN or infinite.
    pub fn new(weights: &[f64]) -> Result<Self, BuildError> {
        let n = weights.len();
        if n == 0 {
            return Err(BuildError::TooFewWeights);
        }
        if n > MAX_OUTCOMES {
            return Err(BuildError::TooManyWeights { len: n });
        }

        let mut max = 0.0f64;
        for (index, &w) in weights.iter().enumerate() {
            if w.is_nan() || w.is_infinite() {
                return Err(BuildError::NonFiniteWeight { index });
            }
            if w <= 0.0 {
                return Err(BuildError::NonPositiveWeight { index, value: w });
            }
            max = max.max(w);
        }

        // Relative to the largest weight the total lies in [1, n], so neither
        // it nor `mult` can overflow whatever the magnitude of the input.
        let total: f64 = weights.iter().map(|&w| w / max).sum();
        let mult = n as f64 / total;
        let mut twins = TwinStacks::with_capacity(n);
        for (i, &w) in weights.iter().enumerate() {
            let piece = Piece {
                mass: (w / max) * mult,
                outcome: i as u32,
            };
            if piece.mass >= 1.0 {
                twins.push_large(piece);
            } else {
                twins.push_small(piece);
            }
        }
        assert!(twins.is_full(), "internal error: float partition lost a weight");

        let full = FLOAT_UNIT - 1;
        let scale = f64::from(full);
        let mut slots = vec![Slot::default(); n];

        while let Some((l, mut g)) = twins.pop_pair() {
            slots[l.outcome as usize] = Slot {
                threshold: (l.mass * scale).round() as u32,
                alias: g.outcome,
            };

            g.mass = (g.mass + l.mass) - 1.0;
            if g.mass < 1.0 {
                twins.push_small(g);
            } else {
                twins.push_large(g);
            }
        }

        // Whatever is left keeps itself. Rounding can strand a piece just
        // under 1 on the small side.
        for piece in twins.larges().iter().chain(twins.smalls()) {
            slots[piece.outcome as usize] = Slot {
                threshold: full,
                alias: piece.outcome,
            };
        }

        let table = AliasTable::from_parts(slots, FLOAT_UNIT, n as u32);
        table.check_full_slot();
        log::debug!("built float alias table: {n} slots, unit {FLOAT_UNIT}");
        Ok(table)
    }
}
