use rand::distr::Distribution;
use rand::{Rng, RngCore};

use crate::{IndexSampler, table::AliasTable};

const RAW_SPAN: u64 = 1 << 32;

/// Largest raw 32-bit value that can be reduced modulo `modulus` without
/// bias. Raw values above it must be redrawn.
#[inline]
pub(crate) const fn rejection_bound(modulus: u32) -> u32 {
    let m = modulus as u64;
    (RAW_SPAN - RAW_SPAN % m - 1) as u32
}

/// Unbiased `raw % modulus`, or `None` if `raw` falls in the biased tail.
#[inline]
pub(crate) fn reduce(raw: u32, modulus: u32, bound: u32) -> Option<u32> {
    (raw <= bound).then(|| raw % modulus)
}

impl AliasTable {
    /// Draw a single outcome in O(1) expected time.
    ///
    /// The result lies in `0..self.outcomes()` and never equals the padding
    /// index. Each attempt consumes one `u64` from `rng`; an attempt is
    /// discarded when either half lands in a biased tail or the draw resolves
    /// to the padding outcome.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let m = self.slots.len() as u32;
        loop {
            let bits = rng.next_u64();
            let slot = reduce(bits as u32, m, self.slot_bound);
            let level = reduce((bits >> 32) as u32, self.unit, self.unit_bound);
            let (Some(slot), Some(level)) = (slot, level) else {
                continue;
            };

            let entry = self.slots[slot as usize];
            let outcome = if level > entry.threshold {
                entry.alias
            } else {
                slot
            };
            if outcome != self.dummy {
                return outcome as usize;
            }
        }
    }

    /// Draw `draws` samples, returning counts per outcome.
    pub fn sample_counts<R: Rng + ?Sized>(&self, rng: &mut R, draws: usize) -> Vec<usize> {
        let mut counts = vec![0usize; self.outcomes()];
        for _ in 0..draws {
            counts[self.sample(rng)] += 1;
        }
        counts
    }
}

impl IndexSampler for AliasTable {
    #[inline]
    fn len(&self) -> usize {
        self.outcomes()
    }
    #[inline]
    fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        // call the inherent method explicitly to avoid trait-recursion
        AliasTable::sample(self, rng)
    }
}

impl Distribution<usize> for AliasTable {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        AliasTable::sample(self, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Slot;
    use rand::{SeedableRng, rngs::StdRng};

    /// Replays a fixed list of words, then repeats the last one.
    struct Script {
        words: Vec<u64>,
        at: usize,
    }

    impl RngCore for Script {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }
        fn next_u64(&mut self) -> u64 {
            let w = self.words[self.at.min(self.words.len() - 1)];
            self.at += 1;
            w
        }
        fn fill_bytes(&mut self, dst: &mut [u8]) {
            rand::rand_core::impls::fill_bytes_via_next(self, dst)
        }
    }

    fn word(slot_raw: u32, level_raw: u32) -> u64 {
        (u64::from(level_raw) << 32) | u64::from(slot_raw)
    }

    #[test]
    fn bounds() {
        assert_eq!(rejection_bound(1), u32::MAX);
        assert_eq!(rejection_bound(1 << 31), u32::MAX);
        // 2^32 = 3 * 1431655765 + 1
        assert_eq!(rejection_bound(3), u32::MAX - 1);
        assert_eq!(reduce(u32::MAX, 3, rejection_bound(3)), None);
        assert_eq!(reduce(u32::MAX - 1, 3, rejection_bound(3)), Some(2));
        assert_eq!(reduce(7, 5, rejection_bound(5)), Some(2));
    }

    #[test]
    fn biased_tail_is_redrawn() {
        // 3 slots: u32::MAX is in the biased tail for modulus 3.
        let t = AliasTable::from_parts(
            vec![
                Slot { threshold: 3, alias: 0 },
                Slot { threshold: 3, alias: 1 },
                Slot { threshold: 3, alias: 2 },
            ],
            4,
            3,
        );
        let mut rng = Script {
            words: vec![word(u32::MAX, 0), word(4, 0)],
            at: 0,
        };
        assert_eq!(t.sample(&mut rng), 1);
        assert_eq!(rng.at, 2);
    }

    #[test]
    fn redirects_above_threshold() {
        let t = AliasTable::from_parts(
            vec![
                Slot { threshold: 1, alias: 1 },
                Slot { threshold: 3, alias: 1 },
            ],
            4,
            2,
        );
        let mut keep = Script { words: vec![word(0, 1)], at: 0 };
        assert_eq!(t.sample(&mut keep), 0);
        let mut jump = Script { words: vec![word(0, 2)], at: 0 };
        assert_eq!(t.sample(&mut jump), 1);
    }

    #[test]
    fn padding_outcome_is_redrawn() {
        // slot 2 is padding; the first word lands on it directly.
        let t = AliasTable::from_parts(
            vec![
                Slot { threshold: 3, alias: 0 },
                Slot { threshold: 3, alias: 1 },
                Slot { threshold: 3, alias: 2 },
            ],
            4,
            2,
        );
        let mut rng = Script {
            words: vec![word(2, 0), word(1, 0)],
            at: 0,
        };
        assert_eq!(t.sample(&mut rng), 1);
        assert_eq!(rng.at, 2);
    }

    #[test]
    fn int_table_never_yields_padding() {
        let t = AliasTable::from_ints(&[8, 10, 2]).unwrap();
        assert_eq!(t.dummy_index(), Some(3));
        let mut rng = StdRng::seed_from_u64(7);
        let counts = t.sample_counts(&mut rng, 20_000);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.iter().sum::<usize>(), 20_000);
    }

    #[test]
    fn trait_and_distribution_agree() {
        let t = AliasTable::new(&[1.0, 2.0, 3.0]).unwrap();
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let x = t.sample_index(&mut a);
            let y: usize = Distribution::sample(&t, &mut b);
            assert_eq!(x, y);
        }
        assert_eq!(IndexSampler::len(&t), 3);
    }

    #[test]
    fn degenerate_singleton() {
        let t = AliasTable::new(&[5.0]).unwrap();
        let mut rng = rand::rng();
        for _ in 0..1000 {
            assert_eq!(t.sample(&mut rng), 0);
        }
    }
}
