//! Result container for interval-producing searches.

use std::ops::Index;

use codonic_core::Summarizable;

use crate::interval::{IntervalKind, SeqInterval};

/// An ordered list of [`SeqInterval`]s plus metadata about the search that
/// produced them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalResult {
    intervals: Vec<SeqInterval>,
    kind: Option<IntervalKind>,
    seq_id: Option<String>,
    seq_length: usize,
    sequence: Option<String>,
}

impl IntervalResult {
    pub fn new(
        intervals: Vec<SeqInterval>,
        kind: Option<IntervalKind>,
        seq_id: Option<String>,
        seq_length: usize,
        sequence: Option<String>,
    ) -> Self {
        Self {
            intervals,
            kind,
            seq_id,
            seq_length,
            sequence,
        }
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeqInterval> {
        self.intervals.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&SeqInterval> {
        self.intervals.get(idx)
    }

    pub fn intervals(&self) -> &[SeqInterval] {
        &self.intervals
    }

    pub fn into_intervals(self) -> Vec<SeqInterval> {
        self.intervals
    }

    /// What kind of intervals the search reported.
    pub fn kind(&self) -> Option<&IntervalKind> {
        self.kind.as_ref()
    }

    pub fn seq_id(&self) -> Option<&str> {
        self.seq_id.as_deref()
    }

    /// Length of the searched sequence.
    pub fn seq_length(&self) -> usize {
        self.seq_length
    }

    /// The searched sequence (DNA form), if it was kept.
    pub fn sequence(&self) -> Option<&str> {
        self.sequence.as_deref()
    }
}

impl Index<usize> for IntervalResult {
    type Output = SeqInterval;

    fn index(&self, idx: usize) -> &SeqInterval {
        &self.intervals[idx]
    }
}

impl<'a> IntoIterator for &'a IntervalResult {
    type Item = &'a SeqInterval;
    type IntoIter = std::slice::Iter<'a, SeqInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl IntoIterator for IntervalResult {
    type Item = SeqInterval;
    type IntoIter = std::vec::IntoIter<SeqInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl Summarizable for IntervalResult {
    fn summary(&self) -> String {
        let kind = self
            .kind
            .as_ref()
            .map_or_else(|| "interval".to_string(), |k| k.to_string());
        match &self.seq_id {
            Some(id) => format!("{} {kind}(s) on {id} ({} bp)", self.len(), self.seq_length),
            None => format!("{} {kind}(s) ({} bp)", self.len(), self.seq_length),
        }
    }
}
