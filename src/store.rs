//! Canonical storage for accepted terms.
//!
//! An append-only log of the sequence in acceptance order plus a hash set for
//! O(1) membership queries. Both uniqueness strategies read through this:
//! the brute-force scan walks the log newest-first, and the residue scan
//! probes the membership set for complements.

use std::collections::HashSet;

/// The accepted terms of a sequence under construction.
///
/// Terms are registered in strictly increasing order and never removed, so
/// the log doubles as the sorted sequence.
#[derive(Clone, Debug, Default)]
pub struct TermStore {
    terms: Vec<u64>,
    members: HashSet<u64>,
}

impl TermStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the log and membership set.
    ///
    /// The caller guarantees `value` exceeds every term registered so far.
    pub fn register(&mut self, value: u64) {
        self.terms.push(value);
        self.members.insert(value);
    }

    /// Whether `value` has been accepted.
    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        self.members.contains(&value)
    }

    /// Accepted terms, most recent first.
    ///
    /// The brute-force test relies on this order: the larger addend of any
    /// pair is reached before the smaller, so the scan can stop at the
    /// candidate's midpoint.
    pub fn iter_descending(&self) -> impl Iterator<Item = u64> + '_ {
        self.terms.iter().rev().copied()
    }

    /// Accepted terms in acceptance (ascending) order.
    pub fn terms(&self) -> &[u64] {
        &self.terms
    }

    /// Number of accepted terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no terms have been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_contains() {
        let mut store = TermStore::new();
        assert!(store.is_empty());

        store.register(1);
        store.register(2);
        store.register(3);

        assert_eq!(store.len(), 3);
        assert!(store.contains(2));
        assert!(!store.contains(5));
        assert_eq!(store.terms(), &[1, 2, 3]);
    }

    #[test]
    fn descending_iteration_is_newest_first() {
        let mut store = TermStore::new();
        for v in [1, 2, 3, 4, 6] {
            store.register(v);
        }
        let descending: Vec<u64> = store.iter_descending().collect();
        assert_eq!(descending, vec![6, 4, 3, 2, 1]);
    }

    #[test]
    fn descending_iteration_is_restartable() {
        let mut store = TermStore::new();
        store.register(1);
        store.register(2);

        let first: Vec<u64> = store.iter_descending().collect();
        let second: Vec<u64> = store.iter_descending().collect();
        assert_eq!(first, second);
    }
}
