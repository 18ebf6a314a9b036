//! Residue-bucketed indexes over accepted terms.
//!
//! Two ordered sets keyed by `(residue, value)`: a low index for residues
//! below `0.5 + ε` and a high index for residues above `0.5 − ε`. The
//! residue-based uniqueness test only ever scans a prefix of the low index
//! and a suffix of the high index, so both are kept in `BTreeSet`s that
//! support bounded range walks. `OrderedFloat` supplies the total order on
//! residues; value breaks ties so the scan order over equal residues is
//! deterministic.

use std::collections::BTreeSet;

use ordered_float::OrderedFloat;

use crate::residue::TOLERANCE;

/// Index key: residue first, term value as tie-break.
pub type ResidueKey = (OrderedFloat<f64>, u64);

/// The two residue indexes backing the optimized uniqueness test.
#[derive(Clone, Debug, Default)]
pub struct ResiduePartition {
    low: BTreeSet<ResidueKey>,
    high: BTreeSet<ResidueKey>,
}

impl ResiduePartition {
    /// Create an empty partition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term into exactly one index.
    ///
    /// The low and high conditions overlap in the band `(0.5−ε, 0.5+ε)`;
    /// terms in the band land in the low index only, never both.
    pub fn insert(&mut self, residue: f64, value: u64) {
        if residue < 0.5 + TOLERANCE {
            self.low.insert((OrderedFloat(residue), value));
        } else if residue > 0.5 - TOLERANCE {
            self.high.insert((OrderedFloat(residue), value));
        }
    }

    /// Low-index entries with key at most `(max_residue, 0)`, ascending.
    ///
    /// An entry whose residue equals `max_residue` exactly is excluded,
    /// since its key `(max_residue, value)` with `value > 0` sorts above
    /// the bound.
    pub fn range_ascending(&self, max_residue: f64) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.low
            .range(..=(OrderedFloat(max_residue), 0))
            .map(|&(res, value)| (res.into_inner(), value))
    }

    /// High-index entries with key at least `(min_residue, 0)`, descending.
    pub fn range_descending(&self, min_residue: f64) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.high
            .range((OrderedFloat(min_residue), 0)..)
            .rev()
            .map(|&(res, value)| (res.into_inner(), value))
    }

    /// Number of entries in the low index.
    pub fn low_len(&self) -> usize {
        self.low.len()
    }

    /// Number of entries in the high index.
    pub fn high_len(&self) -> usize {
        self.high.len()
    }
}
