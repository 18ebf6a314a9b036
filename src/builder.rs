//! Sequence construction: the candidate loop that grows U(1,n).
//!
//! `SequenceBuilder` owns all mutable state for one run — the term store and
//! the residue partition, bundled as a `SequenceState` — and drives candidates
//! upward one at a time. Each candidate is routed to a uniqueness strategy by
//! its residue, and on acceptance is registered into both indexes and handed
//! to a `TermSink`. Runs are independent: building two sequences in one
//! process never shares state.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use crate::partition::ResiduePartition;
use crate::residue::residue;
use crate::store::TermStore;
use crate::uniqueness::{unique_sum_brute_force, unique_sum_by_residue, Strategy};

// ============================================================================
// STATE
// ============================================================================

/// All mutable state of a sequence under construction.
#[derive(Clone, Debug, Default)]
pub struct SequenceState {
    /// Accepted terms in order, with fast membership.
    pub store: TermStore,
    /// Residue-bucketed indexes over the same terms.
    pub partition: ResiduePartition,
}

impl SequenceState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `value` into both indexes.
    ///
    /// `res` is the value's residue when the caller already computed it
    /// (the residue-scan path); otherwise it is derived here.
    pub fn register(&mut self, value: u64, res: Option<f64>) {
        let res = res.unwrap_or_else(|| residue(value));
        self.store.register(value);
        self.partition.insert(res, value);
    }
}

// ============================================================================
// CONFIGURATION AND SUMMARY
// ============================================================================

/// Parameters of one run.
#[derive(Clone, Copy, Debug)]
pub struct BuilderConfig {
    /// Second seed term; the first is always 1.
    pub n: u64,
    /// Inclusive upper bound on candidates.
    pub limit: u64,
    /// Force the brute-force strategy for every candidate, skipping residue
    /// computation entirely. Used to validate the residue optimization.
    pub brute_force_only: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            n: 2,
            limit: 13,
            brute_force_only: false,
        }
    }
}

/// Final counts reported after a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Total accepted terms, seeds included.
    pub terms: usize,
    /// Entries in the low residue index.
    pub low_entries: usize,
    /// Entries in the high residue index.
    pub high_entries: usize,
}

// ============================================================================
// OUTPUT SINKS
// ============================================================================

/// Receiver for accepted terms as the run produces them.
///
/// Seeds are not reported; only terms that passed the uniqueness test.
pub trait TermSink {
    /// Called once per accepted term, with the smaller of its two addends.
    fn accept(&mut self, value: u64, smaller_addend: u64) -> io::Result<()>;
}

/// Sink that discards every term.
pub struct NullSink;

impl TermSink for NullSink {
    fn accept(&mut self, _value: u64, _smaller_addend: u64) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that writes one line per term: the value, optionally followed by a
/// space and the smaller addend.
pub struct LineSink<W: Write> {
    out: W,
    with_addends: bool,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W, with_addends: bool) -> Self {
        Self { out, with_addends }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> TermSink for LineSink<W> {
    fn accept(&mut self, value: u64, smaller_addend: u64) -> io::Result<()> {
        if self.with_addends {
            writeln!(self.out, "{} {}", value, smaller_addend)
        } else {
            writeln!(self.out, "{}", value)
        }
    }
}

/// Create the output file for a run, removing any previous file at `path`.
///
/// Output is overwrite-only; there are no append semantics across runs.
pub fn create_output_file(path: &Path) -> io::Result<File> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    File::create(path)
}

// ============================================================================
// BUILDER
// ============================================================================

/// Drives term-by-term construction of U(1,n) up to a bound.
pub struct SequenceBuilder {
    config: BuilderConfig,
    state: SequenceState,
}

impl SequenceBuilder {
    /// Create a builder with empty state.
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config,
            state: SequenceState::new(),
        }
    }

    /// Run to the configured bound, discarding per-term output.
    pub fn run(&mut self) -> RunSummary {
        let mut sink = NullSink;
        match self.run_with_sink(&mut sink) {
            Ok(summary) => summary,
            Err(_) => unreachable!("NullSink never fails"),
        }
    }

    /// Run to the configured bound, reporting each accepted term to `sink`.
    ///
    /// Seeds 1 and `n` are registered unconditionally, then every candidate
    /// from `n + 1` through `limit` is tested. A candidate accepted under
    /// the residue scan reuses its already-computed residue when registered.
    pub fn run_with_sink<S: TermSink>(&mut self, sink: &mut S) -> io::Result<RunSummary> {
        self.state.register(1, None);
        self.state.register(self.config.n, None);

        let mut cand = self.config.n;
        loop {
            cand += 1;
            if cand > self.config.limit {
                break;
            }

            let (res, strategy) = if self.config.brute_force_only {
                (None, Strategy::BruteForce)
            } else {
                let r = residue(cand);
                (Some(r), Strategy::for_residue(r))
            };

            let verdict = match (strategy, res) {
                (Strategy::ResidueScan, Some(r)) => {
                    unique_sum_by_residue(&self.state.store, &self.state.partition, cand, r)
                }
                _ => unique_sum_brute_force(&self.state.store, cand),
            };

            if let Some(addend) = verdict {
                self.state.register(cand, res);
                sink.accept(cand, addend.min(cand - addend))?;
            }
        }

        Ok(self.summary())
    }

    /// Accepted terms so far, in order.
    pub fn terms(&self) -> &[u64] {
        self.state.store.terms()
    }

    /// Read access to the run's state.
    pub fn state(&self) -> &SequenceState {
        &self.state
    }

    /// Current counts.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            terms: self.state.store.len(),
            low_entries: self.state.partition.low_len(),
            high_entries: self.state.partition.high_len(),
        }
    }
}
