//! The membership test: does a candidate have exactly one representation as
//! a sum of two distinct accepted terms?
//!
//! Two interchangeable strategies answer the question. The brute-force scan
//! is exact and walks the whole history; the residue scan exploits the
//! clustering of residues modulo λ to test only a narrow slice of it. If
//! `a + b = c` then `r_a + r_b ≡ r_c (mod 1)`, which forces at least one of
//! `r_a`, `r_b` into `[0, r_c/2]` or `[(r_c+1)/2, 1)` — so only terms whose
//! residue falls in those bands can start a pair. The narrowing is reliable
//! only when `r_c` sits away from the extremes; the sequence builder routes
//! extreme-residue candidates to brute force instead.
//!
//! Both strategies return `Some(addend)` when the representation is unique,
//! with `addend` one of the two terms of that single pair, and `None`
//! otherwise.

use crate::partition::ResiduePartition;
use crate::residue::TOLERANCE;
use crate::store::TermStore;

/// Which uniqueness test to run for a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Exact descending scan over all accepted terms.
    BruteForce,
    /// Narrowed scan over the residue partition.
    ResidueScan,
}

impl Strategy {
    /// Pick a strategy from a candidate's residue.
    ///
    /// The residue bands backing the narrowed scan thin out near 0 and 1
    /// ("mind the gap"), so extreme residues fall back to brute force.
    /// Comparisons are strict: residues exactly 0.24 or 0.80 take the
    /// residue scan.
    pub fn for_residue(res: f64) -> Strategy {
        if res < 0.24 || res > 0.80 {
            Strategy::BruteForce
        } else {
            Strategy::ResidueScan
        }
    }
}

/// Exact uniqueness test: scan every accepted term, largest first.
///
/// For each term `a` the complement `b = cand − a` is probed in the
/// membership set. Once `b ≥ a` the remaining terms can only repeat pairs
/// already seen from the other side, so the scan stops. Every accepted term
/// is strictly below `cand`, which keeps the subtraction in range.
pub fn unique_sum_brute_force(store: &TermStore, cand: u64) -> Option<u64> {
    let mut found = 0u32;
    let mut addend = 0u64;

    for cur in store.iter_descending() {
        let other = cand - cur;
        if other >= cur {
            break;
        }
        if !store.contains(other) {
            continue;
        }

        found += 1;
        if found > 1 {
            return None;
        }
        addend = cur;
    }

    (found == 1).then_some(addend)
}

/// Narrowed uniqueness test over the residue partition.
///
/// Two passes share one running match count: the low index ascending up to
/// `r_c/2 + ε`, then the high index descending from `r_c/2 + 0.5 − ε`.
/// Unlike the brute-force scan, a pair can be reached from either of its
/// addends here, so a complement equal to the recorded addend is skipped to
/// avoid double-counting the same unordered pair.
pub fn unique_sum_by_residue(
    store: &TermStore,
    partition: &ResiduePartition,
    cand: u64,
    cand_res: f64,
) -> Option<u64> {
    let mut found = 0u32;
    let mut addend = 0u64;

    let low_threshold = cand_res / 2.0 + TOLERANCE;
    for (_, cur) in partition.range_ascending(low_threshold) {
        let other = cand - cur;
        if other == cur {
            continue;
        }
        if other == addend {
            continue;
        }
        if !store.contains(other) {
            continue;
        }

        found += 1;
        if found > 1 {
            return None;
        }
        addend = cur;
    }

    let high_threshold = cand_res / 2.0 + 0.5 - TOLERANCE;
    for (_, cur) in partition.range_descending(high_threshold) {
        let other = cand - cur;
        if other == cur {
            continue;
        }
        if other == addend {
            continue;
        }
        if !store.contains(other) {
            continue;
        }

        found += 1;
        if found > 1 {
            return None;
        }
        addend = cur;
    }

    (found == 1).then_some(addend)
}
