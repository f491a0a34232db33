//! Half-open sequence intervals and strand orientation.
//!
//! [`SeqInterval`] is the record type produced by the ORF scanner and the
//! sliding-window GC scan. Coordinates are 0-based, `[start, end)`, always on
//! the forward strand of the sequence they were found on.

use std::fmt;
use std::str::FromStr;

use codonic_core::{CodonicError, Result};

/// Strand orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strand {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Forward,
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Reverse,
}

impl Strand {
    /// Returns `true` if this is the forward (+) strand.
    pub fn is_forward(&self) -> bool {
        matches!(self, Strand::Forward)
    }

    /// Returns `true` if this is the reverse (-) strand.
    pub fn is_reverse(&self) -> bool {
        matches!(self, Strand::Reverse)
    }

    /// `'+'` or `'-'`.
    pub fn symbol(&self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Strand {
    type Err = CodonicError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            other => Err(CodonicError::InvalidInput(format!(
                "strand must be '+' or '-', got '{other}'"
            ))),
        }
    }
}

/// What an interval describes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntervalKind {
    /// Open reading frame.
    Orf,
    /// Sliding-window GC measurement.
    Gc,
    Other(String),
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalKind::Orf => f.write_str("ORF"),
            IntervalKind::Gc => f.write_str("GC"),
            IntervalKind::Other(s) => f.write_str(s),
        }
    }
}

/// A half-open interval `[start, end)` on a sequence, with optional payload.
///
/// `frame` is 1..=3 for forward-strand ORFs and -1..=-3 for reverse-strand
/// ones. `nt_seq` is read 5'→3' on `strand`, so a reverse-strand ORF's
/// `nt_seq` is the reverse complement of `[start, end)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeqInterval {
    start: usize,
    end: usize,
    strand: Strand,
    frame: Option<i8>,
    kind: Option<IntervalKind>,
    seq_id: Option<String>,
    nt_seq: Option<String>,
    aa_seq: Option<String>,
    gc: Option<f64>,
}

impl SeqInterval {
    /// Create a forward-strand interval.
    ///
    /// Returns an error if `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(CodonicError::InvalidInput(format!(
                "interval start ({start}) must not exceed end ({end})"
            )));
        }
        Ok(Self::from_bounds(start, end))
    }

    /// Bounds already known to satisfy `start <= end`.
    pub(crate) fn from_bounds(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end,
            strand: Strand::Forward,
            frame: None,
            kind: None,
            seq_id: None,
            nt_seq: None,
            aa_seq: None,
            gc: None,
        }
    }

    pub fn with_strand(mut self, strand: Strand) -> Self {
        self.strand = strand;
        self
    }

    pub fn with_frame(mut self, frame: i8) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn with_kind(mut self, kind: IntervalKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_seq_id(mut self, seq_id: Option<String>) -> Self {
        self.seq_id = seq_id;
        self
    }

    pub fn with_nt_seq(mut self, nt_seq: Option<String>) -> Self {
        self.nt_seq = nt_seq;
        self
    }

    pub fn with_aa_seq(mut self, aa_seq: Option<String>) -> Self {
        self.aa_seq = aa_seq;
        self
    }

    pub fn with_gc(mut self, gc: f64) -> Self {
        self.gc = Some(gc);
        self
    }

    /// Map a reverse-complement-local interval onto the forward strand of a
    /// sequence of `total_len` bases.
    pub(crate) fn remap_to_forward(mut self, total_len: usize) -> Self {
        let (start, end) = (total_len - self.end, total_len - self.start);
        self.start = start;
        self.end = end;
        self.strand = Strand::Reverse;
        self
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn frame(&self) -> Option<i8> {
        self.frame
    }

    pub fn kind(&self) -> Option<&IntervalKind> {
        self.kind.as_ref()
    }

    pub fn seq_id(&self) -> Option<&str> {
        self.seq_id.as_deref()
    }

    pub fn nt_seq(&self) -> Option<&str> {
        self.nt_seq.as_deref()
    }

    pub fn aa_seq(&self) -> Option<&str> {
        self.aa_seq.as_deref()
    }

    /// GC percentage, set on sliding-window intervals.
    pub fn gc(&self) -> Option<f64> {
        self.gc
    }

    /// Length in bases.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether both intervals lie on the same sequence and share a base.
    pub fn overlaps(&self, other: &SeqInterval) -> bool {
        self.seq_id == other.seq_id && self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely inside `self` on the same sequence.
    pub fn contains(&self, other: &SeqInterval) -> bool {
        self.seq_id == other.seq_id && self.start <= other.start && other.end <= self.end
    }

    pub fn contains_position(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Gap in bases between two intervals; 0 if they overlap.
    ///
    /// # Errors
    ///
    /// Returns an error if the intervals belong to different sequences.
    pub fn distance_to(&self, other: &SeqInterval) -> Result<usize> {
        if self.seq_id != other.seq_id {
            return Err(CodonicError::InvalidInput(format!(
                "cannot measure distance between intervals on different sequences: {:?} vs {:?}",
                self.seq_id, other.seq_id
            )));
        }
        if self.overlaps(other) {
            Ok(0)
        } else if self.start >= other.end {
            Ok(self.start - other.end)
        } else {
            Ok(other.start - self.end)
        }
    }
}

impl fmt::Display for SeqInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(kind) = &self.kind {
            write!(f, "{kind} ")?;
        }
        write!(f, "[{}, {})({})", self.start, self.end, self.strand)?;
        if let Some(frame) = self.frame {
            write!(f, " frame={frame}")?;
        }
        write!(f, " length={}", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(seq_id: &str, start: usize, end: usize) -> SeqInterval {
        SeqInterval::new(start, end)
            .unwrap()
            .with_seq_id(Some(seq_id.to_string()))
    }

    #[test]
    fn strand_display_and_parse() {
        assert_eq!(Strand::Forward.to_string(), "+");
        assert_eq!(Strand::Reverse.to_string(), "-");
        assert_eq!("-".parse::<Strand>().unwrap(), Strand::Reverse);
        assert!("x".parse::<Strand>().is_err());
        assert!(Strand::default().is_forward());
    }

    #[test]
    fn new_rejects_inverted_bounds() {
        assert!(SeqInterval::new(9, 0).is_err());
        let empty = SeqInterval::new(4, 4).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn defaults_and_builders() {
        let s = SeqInterval::new(0, 9).unwrap();
        assert_eq!(s.strand(), Strand::Forward);
        assert!(s.frame().is_none() && s.kind().is_none() && s.nt_seq().is_none());

        let s = s
            .with_strand(Strand::Reverse)
            .with_frame(-1)
            .with_kind(IntervalKind::Orf)
            .with_nt_seq(Some("ATGAAATAA".into()))
            .with_aa_seq(Some("MK".into()));
        assert_eq!(s.frame(), Some(-1));
        assert_eq!(s.nt_seq(), Some("ATGAAATAA"));
        assert_eq!(s.aa_seq(), Some("MK"));
        assert_eq!(s.to_string(), "ORF [0, 9)(-) frame=-1 length=9");
    }

    #[test]
    fn length() {
        let s = SeqInterval::new(123, 9123).unwrap();
        assert_eq!(s.len(), 9000);
    }

    #[test]
    fn remap_reverse_coordinates() {
        // RC-local [0, 9) on a 12 bp sequence is forward [3, 12).
        let s = SeqInterval::new(0, 9).unwrap().remap_to_forward(12);
        assert_eq!((s.start(), s.end()), (3, 12));
        assert_eq!(s.strand(), Strand::Reverse);
    }

    #[test]
    fn overlaps_requires_same_sequence() {
        assert!(on("a", 0, 10).overlaps(&on("a", 9, 12)));
        assert!(!on("a", 0, 10).overlaps(&on("a", 10, 12)));
        assert!(!on("a", 0, 10).overlaps(&on("b", 5, 6)));
    }

    #[test]
    fn contains_interval_and_position() {
        assert!(on("a", 0, 10).contains(&on("a", 2, 10)));
        assert!(!on("a", 0, 10).contains(&on("a", 2, 11)));
        assert!(!on("a", 0, 10).contains(&on("b", 2, 3)));
        let s = on("a", 3, 6);
        assert!(s.contains_position(3));
        assert!(!s.contains_position(6));
    }

    #[test]
    fn distance() {
        assert_eq!(on("a", 6, 12).distance_to(&on("a", 3, 19)).unwrap(), 0);
        assert_eq!(on("a", 0, 5).distance_to(&on("a", 8, 9)).unwrap(), 3);
        assert_eq!(on("a", 8, 9).distance_to(&on("a", 0, 5)).unwrap(), 3);
        assert!(on("a", 0, 5).distance_to(&on("b", 8, 9)).is_err());
    }
}
