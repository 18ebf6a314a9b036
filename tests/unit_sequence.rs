//! Unit tests for sequence construction against known U(1,n) prefixes.

use std::collections::HashSet;

use ulam::ulam_sequence;

/// U(1,2) up to 100 (the classic Ulam sequence).
const U12_PREFIX: [u64; 26] = [
    1, 2, 3, 4, 6, 8, 11, 13, 16, 18, 26, 28, 36, 38, 47, 48, 53, 57, 62, 69, 72, 77, 82, 87, 97,
    99,
];

#[test]
fn u12_demo_bound() {
    assert_eq!(ulam_sequence(2, 13), vec![1, 2, 3, 4, 6, 8, 11, 13]);
}

#[test]
fn u12_known_prefix() {
    assert_eq!(ulam_sequence(2, 100), U12_PREFIX.to_vec());
}

#[test]
fn u13_known_prefix() {
    assert_eq!(ulam_sequence(3, 20), vec![1, 3, 4, 5, 6, 8, 10, 12, 17]);
}

#[test]
fn bound_equal_to_seed_yields_seeds_only() {
    assert_eq!(ulam_sequence(2, 2), vec![1, 2]);
    assert_eq!(ulam_sequence(5, 5), vec![1, 5]);
}

/// Count unordered pairs {a, b} of distinct values in `prefix` with a+b = t.
fn representation_count(prefix: &[u64], t: u64) -> usize {
    let members: HashSet<u64> = prefix.iter().copied().collect();
    prefix
        .iter()
        .filter(|&&a| a < t && t - a > a && members.contains(&(t - a)))
        .count()
}

#[test]
fn u13_terms_have_exactly_one_representation() {
    let terms = ulam_sequence(3, 20);
    for (i, &t) in terms.iter().enumerate().skip(2) {
        let count = representation_count(&terms[..i], t);
        assert_eq!(count, 1, "term {t} has {count} representations");
    }
}

#[test]
fn u12_terms_have_exactly_one_representation() {
    let terms = ulam_sequence(2, 100);
    for (i, &t) in terms.iter().enumerate().skip(2) {
        assert_eq!(representation_count(&terms[..i], t), 1);
    }
}
