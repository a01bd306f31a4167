//! # alias_table
//!
//! O(1) sampling from a fixed discrete distribution with
//! [the alias method](https://en.wikipedia.org/wiki/Alias_method),
//! built in O(n) with Vose's algorithm.
//!
//! Two builders produce the same [`AliasTable`]:
//!
//! 1. [`AliasTable::new`] takes `f64` weights and quantizes keep-probabilities
//!    to a 2^31 fixed-point scale.
//! 2. [`AliasTable::from_ints`] takes `i32` weights and stays in exact
//!    integer arithmetic, so the table is reproducible bit for bit. When the
//!    total is not divisible by the count it pads with a hidden outcome that
//!    the sampler never returns.
//!
//! Tables can be persisted with [`AliasTable::encode`] and restored with
//! [`AliasTable::decode`].
//!
//! ## Quick start
//!
//! ```rust
//! use alias_table::AliasTable;
//!
//! let table = AliasTable::new(&[8.0, 10.0, 2.0]).unwrap();
//! let mut rng = rand::rng();
//! let i = table.sample(&mut rng); // 0 40%, 1 50%, 2 10% of the time
//! assert!(i < 3);
//!
//! let bytes = table.encode();
//! assert_eq!(AliasTable::decode(&bytes).unwrap(), table);
//! ```
//!
//! ## Items instead of indices
//!
//! ```rust
//! use alias_table::WeightedTable;
//!
//! let table = WeightedTable::from_int_pairs([
//!     ("common", 60),
//!     ("uncommon", 30),
//!     ("rare", 9),
//!     ("legendary", 1),
//! ]).unwrap();
//!
//! let mut rng = rand::rng();
//! let tier = table.sample(&mut rng); // &&str
//! println!("you got: {tier}");
//! ```
//!
//! ## Performance
//! * **Build**: O(n).
//! * **Sample**: O(1) expected; one `u64` from the RNG per attempt, and
//!   attempts are rarely repeated.
//! * **Space**: 8 bytes per slot.
//!
//! ## Randomness
//! The table never owns an RNG. It is immutable after construction, so any
//! number of threads may sample the same table, each with its own RNG.

mod codec;
mod error;
mod float;
mod int;
mod sampler;
mod table;
mod twins;

/// A minimal interface for “index samplers”.
#[allow(clippy::len_without_is_empty)]
pub trait IndexSampler {
    fn len(&self) -> usize;
    fn sample_index<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> usize;
}

pub use error::{BuildError, DecodeError};
pub use int::MAX_INT_OUTCOMES;
pub use table::{AliasTable, FLOAT_UNIT, MAX_OUTCOMES, Slot, THRESHOLD_LIMIT};

use rand::Rng;

/// Items paired with an [`AliasTable`] over their weights.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    alias: AliasTable,
    items: Vec<T>,
}

impl<T> WeightedTable<T> {
    /// Build from any `(item, weight)` iterator using float weights.
    ///
    /// # Errors
    /// Same as [`AliasTable::new`].
    pub fn from_pairs<I>(pairs: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let (items, weights): (Vec<T>, Vec<f64>) = pairs.into_iter().unzip();
        let alias = AliasTable::new(&weights)?;
        Ok(Self { alias, items })
    }

    /// Build from any `(item, weight)` iterator using integer weights.
    ///
    /// # Errors
    /// Same as [`AliasTable::from_ints`].
    pub fn from_int_pairs<I>(pairs: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (T, i32)>,
    {
        let (items, weights): (Vec<T>, Vec<i32>) = pairs.into_iter().unzip();
        let alias = AliasTable::from_ints(&weights)?;
        Ok(Self { alias, items })
    }

    /// Pair items with an existing table, typically one from
    /// [`AliasTable::decode`].
    ///
    /// # Errors
    /// [`BuildError::OutcomeMismatch`] unless there is exactly one item per
    /// outcome.
    pub fn with_table(items: Vec<T>, alias: AliasTable) -> Result<Self, BuildError> {
        if items.len() != alias.outcomes() {
            return Err(BuildError::OutcomeMismatch {
                items: items.len(),
                outcomes: alias.outcomes(),
            });
        }
        Ok(Self { alias, items })
    }

    /// Sample an item **by reference** (no `Clone` bound).
    pub fn sample<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> &'a T {
        &self.items[self.alias.sample(rng)]
    }

    /// Sample an item **by value** (clones the chosen element).
    ///
    /// Prefer [`sample`](Self::sample) if you don’t need ownership.
    pub fn sample_owned<R: Rng + ?Sized>(&self, rng: &mut R) -> T
    where
        T: Clone,
    {
        self.items[self.alias.sample(rng)].clone()
    }

    /// The underlying table, e.g. to [`encode`](AliasTable::encode) it.
    pub fn table(&self) -> &AliasTable {
        &self.alias
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items in the table.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the table is empty. Always false for a built table.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IndexSampler for WeightedTable<T> {
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
    #[inline]
    fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.alias.sample(rng)
    }
}
