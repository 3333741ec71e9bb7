//! Result types: the outcome histogram and the selected hash.

use crate::core::BitRegister;
use std::collections::HashMap;
use std::fmt;

/// Occurrence counts of sampled outcomes, accumulated across all trials of
/// one run. Keys are basis indices; registers are materialized only in the
/// sorted views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashHistogram {
    counts: HashMap<usize, u64>,
    n_qubits: usize,
}

impl HashHistogram {
    /// Creates an empty histogram for `n_qubits`-bit outcomes.
    pub(crate) fn new(n_qubits: usize) -> Self {
        Self {
            counts: HashMap::new(),
            n_qubits,
        }
    }

    /// Records one sampled outcome.
    pub(crate) fn increment(&mut self, index: usize) {
        *self.counts.entry(index).or_insert(0) += 1;
    }

    /// Folds another histogram into this one. Used to merge per-worker local
    /// histograms after the trial pool drains.
    pub(crate) fn merge(&mut self, other: HashHistogram) {
        for (index, count) in other.counts {
            *self.counts.entry(index).or_insert(0) += count;
        }
    }

    /// Count for a specific outcome register.
    pub fn count(&self, register: &BitRegister) -> u64 {
        self.counts.get(&register.to_index()).copied().unwrap_or(0)
    }

    /// Total number of recorded trials.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes observed.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// All outcomes sorted descending by count, ascending by bitstring value
    /// on ties.
    pub fn sorted_counts(&self) -> Vec<(BitRegister, u64)> {
        let mut entries: Vec<(usize, u64)> =
            self.counts.iter().map(|(&i, &c)| (i, c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
            .into_iter()
            .map(|(i, c)| (BitRegister::from_index(i, self.n_qubits), c))
            .collect()
    }

    /// The dominant outcome and its count: maximum count, ties broken by the
    /// numerically smallest bitstring value. `None` only for an empty
    /// histogram, which a completed run never produces.
    pub(crate) fn mode(&self) -> Option<(BitRegister, u64)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(&i, &c)| (BitRegister::from_index(i, self.n_qubits), c))
    }
}

/// The outcome of one full hashing run: the winning register, its count, and
/// the complete histogram it was selected from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashResult {
    hash: BitRegister,
    count: u64,
    shots: u64,
    histogram: HashHistogram,
}

impl HashResult {
    pub(crate) fn new(hash: BitRegister, count: u64, shots: u64, histogram: HashHistogram) -> Self {
        Self {
            hash,
            count,
            shots,
            histogram,
        }
    }

    /// The winning outcome register.
    pub fn hash(&self) -> &BitRegister {
        &self.hash
    }

    /// The winning outcome as a lowercase hex string (LSB-first integer,
    /// zero-padded to `ceil(n/4)` digits).
    pub fn hash_hex(&self) -> String {
        self.hash.to_hex()
    }

    /// How many trials produced the winning outcome.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Total number of trials in the run.
    pub fn shots(&self) -> u64 {
        self.shots
    }

    /// The full outcome histogram.
    pub fn histogram(&self) -> &HashHistogram {
        &self.histogram
    }

    /// The `k` most frequent outcomes (descending count, ascending bitstring
    /// value on ties).
    pub fn top_k(&self, k: usize) -> Vec<(BitRegister, u64)> {
        let mut entries = self.histogram.sorted_counts();
        entries.truncate(k);
        entries
    }
}

impl fmt::Display for HashResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RQC-Hash Result:")?;
        writeln!(f, "  hash  : {} (hex {})", self.hash, self.hash_hex())?;
        writeln!(f, "  count : {} / {} shots", self.count, self.shots)?;
        writeln!(f, "  top outcomes:")?;
        for (register, count) in self.top_k(8) {
            writeln!(f, "    {} : {}", register, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_breaks_ties_by_smallest_value() {
        let mut h = HashHistogram::new(3);
        h.increment(5);
        h.increment(5);
        h.increment(2);
        h.increment(2);
        h.increment(7);
        let (winner, count) = h.mode().unwrap();
        assert_eq!(winner.to_index(), 2);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_sorted_counts_ordering() {
        let mut h = HashHistogram::new(4);
        for _ in 0..3 {
            h.increment(9);
        }
        for _ in 0..3 {
            h.increment(1);
        }
        h.increment(4);
        let sorted = h.sorted_counts();
        let indices: Vec<usize> = sorted.iter().map(|(r, _)| r.to_index()).collect();
        assert_eq!(indices, vec![1, 9, 4]);
    }

    #[test]
    fn test_merge_accumulates() {
        let mut a = HashHistogram::new(2);
        a.increment(0);
        a.increment(1);
        let mut b = HashHistogram::new(2);
        b.increment(1);
        b.increment(3);
        a.merge(b);
        assert_eq!(a.total(), 4);
        assert_eq!(a.count(&BitRegister::from_index(1, 2)), 2);
    }
}
