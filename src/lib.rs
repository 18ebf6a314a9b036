//! Ulam-type sequences U(1,n)
//!
//! A strictly increasing sequence seeded with 1 and n, where every later
//! term is the smallest integer greater than the previous term that is the
//! sum of two *distinct* earlier terms in *exactly one* way.
//!
//! Deciding that unique-sum property is the whole game: the naive test
//! scans the entire history for every candidate. This crate implements
//! Gibbs' residue optimization — accepted terms cluster modulo a constant
//! λ ≈ 2.4434, so most candidates only need a narrow residue band of the
//! history tested — with the exact brute-force scan kept as the fallback
//! where the clustering argument is weak.

pub mod builder;
pub mod partition;
pub mod residue;
pub mod store;
pub mod uniqueness;

pub use builder::{
    create_output_file, BuilderConfig, LineSink, NullSink, RunSummary, SequenceBuilder,
    SequenceState, TermSink,
};
pub use partition::{ResidueKey, ResiduePartition};
pub use residue::{residue, LAMBDA, TOLERANCE};
pub use store::TermStore;
pub use uniqueness::{unique_sum_brute_force, unique_sum_by_residue, Strategy};

/// All terms of U(1,n) up to and including `limit`.
pub fn ulam_sequence(n: u64, limit: u64) -> Vec<u64> {
    let mut builder = SequenceBuilder::new(BuilderConfig {
        n,
        limit,
        ..BuilderConfig::default()
    });
    builder.run();
    builder.terms().to_vec()
}
