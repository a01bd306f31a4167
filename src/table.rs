//! The alias table shared by both builders, the sampler and the codec.

use crate::sampler::rejection_bound;

/// Fixed-point scale of float-built tables.
pub const FLOAT_UNIT: u32 = 1 << 31;

/// Every stored threshold is strictly below this value.
pub const THRESHOLD_LIMIT: u32 = 1 << 31;

/// Largest number of outcomes a float-built table accepts.
pub const MAX_OUTCOMES: usize = u32::MAX as usize;

/// One table slot: keep the slot's own outcome when the threshold draw is
/// `<= threshold`, otherwise redirect to `alias`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Slot {
    pub threshold: u32,
    pub alias: u32,
}

/// Immutable alias table over `outcomes()` weighted outcomes.
///
/// Build it with [`AliasTable::new`] (float weights) or
/// [`AliasTable::from_ints`] (integer weights), or restore one with
/// [`AliasTable::decode`]. A table owns no external resources and can be
/// shared across threads freely; each thread brings its own RNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    pub(crate) slots: Vec<Slot>,
    pub(crate) unit: u32,
    pub(crate) slot_bound: u32,
    pub(crate) unit_bound: u32,
    pub(crate) dummy: u32,
}

impl AliasTable {
    /// Assembles a table and precomputes its rejection bounds.
    /// `slots` must be non-empty and `unit` non-zero.
    pub(crate) fn from_parts(slots: Vec<Slot>, unit: u32, dummy: u32) -> Self {
        let m = slots.len() as u32;
        Self {
            slot_bound: rejection_bound(m),
            unit_bound: rejection_bound(unit),
            slots,
            unit,
            dummy,
        }
    }

    /// Panics unless some slot holds `unit - 1`. The codec recovers `unit`
    /// from the largest threshold, so a builder must never produce a table
    /// without one.
    pub(crate) fn check_full_slot(&self) {
        assert!(
            self.slots.iter().any(|s| s.threshold == self.unit - 1),
            "internal error: no slot with threshold unit - 1 (unit = {})",
            self.unit
        );
    }

    /// Number of slots, including the padding slot if any.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; a table has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of outcomes callers can receive from [`sample`](Self::sample).
    pub fn outcomes(&self) -> usize {
        self.dummy as usize
    }

    pub fn unit(&self) -> u32 {
        self.unit
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Index of the padding outcome, if the integer builder had to add one.
    pub fn dummy_index(&self) -> Option<usize> {
        (self.dummy as usize != self.slots.len()).then_some(self.dummy as usize)
    }

    /// Exact mass of every slot's outcome, in units of `1 / (len() * unit())`.
    ///
    /// For a table built by [`AliasTable::from_ints`] entry `i` equals the
    /// input weight `i`; the padding outcome, if present, is included.
    pub fn outcome_masses(&self) -> Vec<u64> {
        let mut masses = vec![0u64; self.slots.len()];
        for (i, slot) in self.slots.iter().enumerate() {
            let keep = u64::from(slot.threshold) + 1;
            masses[i] += keep;
            masses[slot.alias as usize] += u64::from(self.unit) - keep;
        }
        masses
    }
}
