//! Single-pass collection of the raw counts all four tests need.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bits::BitSequence;

/// Poker block size in bits.
pub const POKER_BLOCK_SIZE: usize = 4;

/// Number of non-overlapping poker blocks in a full sequence.
pub const POKER_BLOCK_COUNT: usize = crate::bits::SEQUENCE_LENGTH / POKER_BLOCK_SIZE;

/// Number of run-length buckets used by the series test (1..=5 and 6+).
pub const RUN_BUCKETS: usize = 6;

/// Count of runs for each exact run length, kept per symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunHistogram {
    zeros: BTreeMap<usize, usize>,
    ones: BTreeMap<usize, usize>,
}

impl RunHistogram {
    pub fn record(&mut self, bit: bool, length: usize) {
        *self.runs_mut(bit).entry(length).or_insert(0) += 1;
    }

    /// Runs of `bit`, keyed by exact length.
    pub fn runs(&self, bit: bool) -> &BTreeMap<usize, usize> {
        if bit {
            &self.ones
        } else {
            &self.zeros
        }
    }

    fn runs_mut(&mut self, bit: bool) -> &mut BTreeMap<usize, usize> {
        if bit {
            &mut self.ones
        } else {
            &mut self.zeros
        }
    }

    /// Longest run of either symbol, 0 for an empty histogram.
    pub fn longest(&self) -> usize {
        let longest_of = |runs: &BTreeMap<usize, usize>| runs.keys().next_back().copied();
        longest_of(&self.zeros)
            .into_iter()
            .chain(longest_of(&self.ones))
            .max()
            .unwrap_or(0)
    }

    /// Run counts for `bit` collapsed into buckets 1, 2, 3, 4, 5 and 6+.
    pub fn bucketed(&self, bit: bool) -> [usize; RUN_BUCKETS] {
        let mut buckets = [0; RUN_BUCKETS];
        for (&length, &count) in self.runs(bit) {
            buckets[length.min(RUN_BUCKETS) - 1] += count;
        }
        buckets
    }

    /// Total bits covered by all recorded runs.
    pub fn covered_bits(&self) -> usize {
        self.zeros
            .iter()
            .chain(self.ones.iter())
            .map(|(length, count)| length * count)
            .sum()
    }
}

/// Count of non-overlapping blocks for each observed block value.
///
/// Only observed values are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHistogram {
    counts: BTreeMap<u8, usize>,
}

impl BlockHistogram {
    pub fn record(&mut self, block: u8) {
        *self.counts.entry(block).or_insert(0) += 1;
    }

    pub fn count(&self, block: u8) -> usize {
        self.counts.get(&block).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts.iter().map(|(&block, &count)| (block, count))
    }

    /// Number of distinct block values seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Everything the evaluators read, gathered in one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedStats {
    pub zero_count: usize,
    pub one_count: usize,
    pub runs: RunHistogram,
    pub blocks: BlockHistogram,
}

impl CollectedStats {
    pub fn bit_count(&self) -> usize {
        self.zero_count + self.one_count
    }
}

/// Walk `sequence` once, filling bit counts, the run histogram and the
/// poker block histogram.
pub fn collect(sequence: &BitSequence<'_>) -> CollectedStats {
    debug!("Collecting statistics over {} bits", sequence.len());

    let mut stats = CollectedStats::default();
    let mut current: Option<(bool, usize)> = None;
    let mut block = 0u8;

    for (i, bit) in sequence.iter().enumerate() {
        if bit {
            stats.one_count += 1;
        } else {
            stats.zero_count += 1;
        }

        current = match current {
            Some((run_bit, length)) if run_bit == bit => Some((run_bit, length + 1)),
            Some((run_bit, length)) => {
                stats.runs.record(run_bit, length);
                Some((bit, 1))
            }
            None => Some((bit, 1)),
        };

        block = (block << 1) | u8::from(bit);
        if (i + 1) % POKER_BLOCK_SIZE == 0 {
            stats.blocks.record(block);
            block = 0;
        }
    }

    // The last run has no differing bit after it.
    if let Some((run_bit, length)) = current {
        stats.runs.record(run_bit, length);
    }

    debug!(
        "Collected {} ones, {} zeros, {} distinct blocks, longest run {}",
        stats.one_count,
        stats.zero_count,
        stats.blocks.distinct(),
        stats.runs.longest()
    );
    stats
}
