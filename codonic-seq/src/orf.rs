//! Open Reading Frame (ORF) finder.
//!
//! Scans nucleotide sequences for ORFs across up to six reading frames
//! (three forward, three reverse complement). An ORF begins at a start codon
//! (ATG by default) and ends at the next in-frame stop codon (TAA, TAG, TGA),
//! inclusive. Start codons with no in-frame stop before the end of the
//! sequence produce nothing.
//!
//! Two layers:
//!
//! 1. [`OrfScanner::scan`] walks one frame of one strand and reports ORFs in
//!    strand-local coordinates.
//! 2. [`find_orfs`] validates an [`OrfOptions`], normalizes the input to DNA,
//!    runs the scanner over every requested frame and strand, maps
//!    reverse-strand hits back to forward coordinates and wraps the result in
//!    an [`IntervalResult`].
//!
//! # Example
//!
//! ```
//! use codonic_seq::orf::{find_orfs, OrfOptions};
//!
//! let opts = OrfOptions { min_length: 6, max_length: 12, translate: true, ..Default::default() };
//! let result = find_orfs("ATGAAATAA", &opts).unwrap();
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].aa_seq(), Some("MK"));
//! ```

use std::borrow::Cow;

use codonic_core::{CodonicError, Result};

use crate::codon;
use crate::interval::{IntervalKind, SeqInterval, Strand};
use crate::result::IntervalResult;
use crate::seq::NucleotideSeq;

// ---------------------------------------------------------------------------
// Start codons
// ---------------------------------------------------------------------------

/// A validated, non-empty set of start codons in uppercase T-form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct StartCodons(Vec<[u8; 3]>);

impl StartCodons {
    /// Normalize (uppercase, `U` → `T`) and validate a collection of codons.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is empty or any entry is not
    /// exactly 3 nucleotides long.
    pub fn new<I, S>(codons: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: Vec<[u8; 3]> = Vec::new();
        for codon in codons {
            let codon = codon.as_ref();
            let bytes: [u8; 3] = codon.as_bytes().try_into().map_err(|_| {
                CodonicError::InvalidInput(format!(
                    "start codon '{codon}' must be exactly 3 nucleotides long"
                ))
            })?;
            let normalized = bytes.map(|b| match b.to_ascii_uppercase() {
                b'U' => b'T',
                other => other,
            });
            if !set.contains(&normalized) {
                set.push(normalized);
            }
        }
        if set.is_empty() {
            return Err(CodonicError::InvalidInput("start_codons cannot be empty".into()));
        }
        Ok(Self(set))
    }

    /// Whether `codon` (uppercase T-form) is one of the start codons.
    pub fn contains(&self, codon: &[u8]) -> bool {
        self.0.iter().any(|c| c.as_slice() == codon)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| std::str::from_utf8(c).unwrap_or_default())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; construction rejects an empty set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for StartCodons {
    fn default() -> Self {
        Self(vec![*b"ATG"])
    }
}

impl TryFrom<Vec<String>> for StartCodons {
    type Error = CodonicError;

    fn try_from(codons: Vec<String>) -> Result<Self> {
        Self::new(codons)
    }
}

impl From<StartCodons> for Vec<String> {
    fn from(codons: StartCodons) -> Self {
        codons.iter().map(str::to_owned).collect()
    }
}

// ---------------------------------------------------------------------------
// Frames
// ---------------------------------------------------------------------------

/// A subset of the reading-frame offsets {0, 1, 2}, iterated in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct FrameSet(u8);

impl FrameSet {
    /// All three frames.
    pub const ALL: FrameSet = FrameSet(0b111);

    /// Build a set from frame offsets. Duplicates are ignored; an empty
    /// collection gives an empty set (nothing is scanned).
    ///
    /// # Errors
    ///
    /// Returns an error if any offset is not 0, 1, or 2.
    pub fn new(frames: impl IntoIterator<Item = u8>) -> Result<Self> {
        let mut mask = 0u8;
        for frame in frames {
            if frame > 2 {
                return Err(CodonicError::InvalidInput(format!(
                    "invalid frame: {frame}, frame must be 0, 1, or 2"
                )));
            }
            mask |= 1 << frame;
        }
        Ok(Self(mask))
    }

    /// A set holding one frame.
    pub fn single(frame: u8) -> Result<Self> {
        Self::new([frame])
    }

    pub fn contains(&self, frame: u8) -> bool {
        frame < 3 && self.0 & (1 << frame) != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..3).filter(move |&f| self.contains(f))
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for FrameSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl TryFrom<u8> for FrameSet {
    type Error = CodonicError;

    fn try_from(frame: u8) -> Result<Self> {
        Self::single(frame)
    }
}

impl TryFrom<Vec<u8>> for FrameSet {
    type Error = CodonicError;

    fn try_from(frames: Vec<u8>) -> Result<Self> {
        Self::new(frames)
    }
}

impl TryFrom<&[u8]> for FrameSet {
    type Error = CodonicError;

    fn try_from(frames: &[u8]) -> Result<Self> {
        Self::new(frames.iter().copied())
    }
}

impl From<FrameSet> for Vec<u8> {
    fn from(frames: FrameSet) -> Self {
        frames.iter().collect()
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// ORF search parameters.
///
/// ```
/// use codonic_seq::orf::{FrameSet, OrfOptions, StartCodons};
///
/// let opts = OrfOptions {
///     min_length: 30,
///     overlap: true,
///     start_codons: StartCodons::new(["ATG", "GTG"]).unwrap(),
///     frames: FrameSet::new([0, 2]).unwrap(),
///     ..Default::default()
/// };
/// assert!(opts.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct OrfOptions {
    /// Minimum ORF length in nucleotides, stop codon included.
    pub min_length: usize,
    /// Maximum ORF length in nucleotides, stop codon included.
    pub max_length: usize,
    /// Report every start codon before a stop, not just the first.
    pub overlap: bool,
    /// Also scan the reverse complement.
    pub include_reverse: bool,
    /// Sort by length, longest first (stable).
    pub sort_by_length: bool,
    /// Attach the amino-acid translation (stop excluded) to each ORF.
    pub translate: bool,
    pub start_codons: StartCodons,
    pub seq_id: Option<String>,
    pub frames: FrameSet,
    /// Attach the nucleotide sequence to each ORF. Implied by `translate`.
    pub include_nt_seq: bool,
    /// Keep the scanned sequence in the result's metadata.
    pub keep_sequence: bool,
}

impl Default for OrfOptions {
    fn default() -> Self {
        Self {
            min_length: 100,
            max_length: 10_000,
            overlap: false,
            include_reverse: true,
            sort_by_length: true,
            translate: false,
            start_codons: StartCodons::default(),
            seq_id: None,
            frames: FrameSet::ALL,
            include_nt_seq: true,
            keep_sequence: true,
        }
    }
}

impl OrfOptions {
    /// Check the constraints the field types cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.max_length < self.min_length {
            return Err(CodonicError::InvalidInput(format!(
                "max_length ({}) must be >= min_length ({})",
                self.max_length, self.min_length
            )));
        }
        Ok(())
    }

    fn scan_params<'a>(&'a self, seq_id: Option<&'a str>) -> ScanParams<'a> {
        ScanParams {
            min_length: self.min_length,
            max_length: self.max_length,
            overlap: self.overlap,
            translate: self.translate,
            include_nt_seq: self.include_nt_seq,
            start_codons: &self.start_codons,
            seq_id: seq_id.or(self.seq_id.as_deref()),
        }
    }
}

// ---------------------------------------------------------------------------
// Input normalization
// ---------------------------------------------------------------------------

/// Anything [`find_orfs`] accepts as a sequence.
#[derive(Debug, Clone, Copy)]
pub enum SeqInput<'a> {
    /// An already validated sequence, used as is.
    Seq(&'a NucleotideSeq),
    /// Raw text, parsed leniently (unknown bytes become `N`).
    Raw(&'a [u8]),
}

impl<'a> SeqInput<'a> {
    /// Resolve to a DNA sequence, borrowing when no conversion is needed.
    pub fn into_dna(self) -> Result<Cow<'a, NucleotideSeq>> {
        let seq = match self {
            SeqInput::Seq(seq) => Cow::Borrowed(seq),
            SeqInput::Raw(raw) => Cow::Owned(NucleotideSeq::lenient(raw)?),
        };
        if seq.is_rna() {
            Ok(Cow::Owned(seq.reverse_transcribe()))
        } else {
            Ok(seq)
        }
    }
}

impl<'a> From<&'a NucleotideSeq> for SeqInput<'a> {
    fn from(seq: &'a NucleotideSeq) -> Self {
        SeqInput::Seq(seq)
    }
}

impl<'a> From<&'a str> for SeqInput<'a> {
    fn from(raw: &'a str) -> Self {
        SeqInput::Raw(raw.as_bytes())
    }
}

impl<'a> From<&'a String> for SeqInput<'a> {
    fn from(raw: &'a String) -> Self {
        SeqInput::Raw(raw.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for SeqInput<'a> {
    fn from(raw: &'a [u8]) -> Self {
        SeqInput::Raw(raw)
    }
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

/// Per-scan parameters for [`OrfScanner::scan`].
#[derive(Debug, Clone, Copy)]
pub struct ScanParams<'a> {
    pub min_length: usize,
    pub max_length: usize,
    pub overlap: bool,
    pub translate: bool,
    pub include_nt_seq: bool,
    pub start_codons: &'a StartCodons,
    pub seq_id: Option<&'a str>,
}

/// Single-frame ORF scanner.
///
/// Holds the active-start buffer so repeated scans (frames, strands, batch
/// records) reuse one allocation.
#[derive(Debug, Default)]
pub struct OrfScanner {
    active: Vec<usize>,
}

impl OrfScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one frame of `seq` (uppercase T-form) and return its ORFs.
    ///
    /// Coordinates are local to `seq`. The reported frame is `frame + 1` for
    /// [`Strand::Forward`] and `-(frame + 1)` for [`Strand::Reverse`].
    ///
    /// # Errors
    ///
    /// Returns an error if `frame` is not 0, 1, or 2.
    pub fn scan(
        &mut self,
        seq: &[u8],
        frame: u8,
        strand: Strand,
        params: &ScanParams<'_>,
    ) -> Result<Vec<SeqInterval>> {
        let mut out = Vec::new();
        self.scan_into(seq, frame, strand, params, &mut out)?;
        Ok(out)
    }

    /// Like [`scan`](Self::scan), appending to `out`.
    pub fn scan_into(
        &mut self,
        seq: &[u8],
        frame: u8,
        strand: Strand,
        params: &ScanParams<'_>,
        out: &mut Vec<SeqInterval>,
    ) -> Result<()> {
        if frame > 2 {
            return Err(CodonicError::InvalidInput(format!(
                "invalid frame: {frame}, frame must be 0, 1, or 2"
            )));
        }
        let reported_frame = match strand {
            Strand::Forward => frame as i8 + 1,
            Strand::Reverse => -(frame as i8 + 1),
        };
        let materialize = params.include_nt_seq || params.translate;
        let before = out.len();

        self.active.clear();
        let mut i = frame as usize;
        while i + 3 <= seq.len() {
            let triplet = &seq[i..i + 3];
            if codon::is_stop_codon(triplet) {
                let end = i + 3;
                for &start in &self.active {
                    let length = end - start;
                    if length < params.min_length || length > params.max_length {
                        continue;
                    }
                    let coding = &seq[start..end];
                    let nt_seq = materialize.then(|| String::from_utf8_lossy(coding).into_owned());
                    let aa_seq = params.translate.then(|| codon::translate_to_stop(coding));
                    out.push(
                        SeqInterval::from_bounds(start, end)
                            .with_kind(IntervalKind::Orf)
                            .with_strand(strand)
                            .with_frame(reported_frame)
                            .with_seq_id(params.seq_id.map(str::to_owned))
                            .with_nt_seq(nt_seq)
                            .with_aa_seq(aa_seq),
                    );
                }
                self.active.clear();
            } else if params.start_codons.contains(triplet)
                && (params.overlap || self.active.is_empty())
            {
                self.active.push(i);
            }
            i += 3;
        }
        self.active.clear();

        log::trace!(
            "frame {reported_frame}: {} ORF(s) in {} bp",
            out.len() - before,
            seq.len()
        );
        Ok(())
    }

    /// Run a full ORF search; see [`find_orfs`].
    pub fn find<'a>(
        &mut self,
        seq: impl Into<SeqInput<'a>>,
        opts: &OrfOptions,
    ) -> Result<IntervalResult> {
        self.find_with_id(seq.into(), opts, None)
    }

    /// Search with `seq_id` overriding `opts.seq_id` when set.
    pub(crate) fn find_with_id(
        &mut self,
        seq: SeqInput<'_>,
        opts: &OrfOptions,
        seq_id: Option<&str>,
    ) -> Result<IntervalResult> {
        opts.validate()?;
        let seq = seq.into_dna()?;
        let params = opts.scan_params(seq_id);
        let total = seq.len();

        let mut orfs = Vec::new();
        for frame in opts.frames.iter() {
            self.scan_into(&seq, frame, Strand::Forward, &params, &mut orfs)?;
        }

        if opts.include_reverse {
            let rc = seq.reverse_complement();
            let mut local = Vec::new();
            for frame in opts.frames.iter() {
                self.scan_into(&rc, frame, Strand::Reverse, &params, &mut local)?;
            }
            orfs.extend(local.into_iter().map(|orf| orf.remap_to_forward(total)));
        }

        if opts.sort_by_length {
            // Stable: equal lengths keep discovery order.
            orfs.sort_by(|a, b| b.len().cmp(&a.len()));
        }

        log::debug!(
            "find_orfs: {} ORF(s) in {} bp (seq_id={:?}, frames={}, reverse={})",
            orfs.len(),
            total,
            params.seq_id,
            opts.frames.len(),
            opts.include_reverse
        );

        Ok(IntervalResult::new(
            orfs,
            Some(IntervalKind::Orf),
            params.seq_id.map(str::to_owned),
            total,
            opts.keep_sequence.then(|| seq.as_str().to_owned()),
        ))
    }
}

/// Find ORFs in `seq`.
///
/// RNA input is reverse-transcribed first. All parameter validation happens
/// before any scanning; an empty result is not an error.
///
/// # Errors
///
/// Returns an error if `opts` is inconsistent (`max_length < min_length`) or
/// if raw input cannot be parsed as a nucleotide sequence.
pub fn find_orfs<'a>(seq: impl Into<SeqInput<'a>>, opts: &OrfOptions) -> Result<IntervalResult> {
    OrfScanner::new().find(seq, opts)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna(max_len: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![Just('A'), Just('C'), Just('G'), Just('T'), Just('N')],
            0..=max_len,
        )
        .prop_map(|v| v.into_iter().collect())
    }

    proptest! {
        #[test]
        fn orfs_are_codon_aligned_and_well_formed(
            seq in dna(300),
            overlap in any::<bool>(),
            alt_start in any::<bool>(),
        ) {
            let start_codons = if alt_start {
                StartCodons::new(["ATG", "GTG", "TTG"]).unwrap()
            } else {
                StartCodons::default()
            };
            let opts = OrfOptions {
                min_length: 0,
                max_length: usize::MAX,
                overlap,
                start_codons: start_codons.clone(),
                ..Default::default()
            };
            let result = find_orfs(seq.as_str(), &opts).unwrap();
            for orf in result.iter() {
                prop_assert_eq!(orf.len() % 3, 0);
                prop_assert!(orf.len() >= 3);
                prop_assert!(orf.end() <= seq.len());
                let nt = orf.nt_seq().unwrap().as_bytes();
                prop_assert!(start_codons.contains(&nt[..3]));
                prop_assert!(codon::STOP_CODONS.iter().any(|s| s == &nt[nt.len() - 3..]));
            }
        }

        #[test]
        fn sort_is_stable_descending(seq in dna(300)) {
            let base = OrfOptions { min_length: 0, max_length: usize::MAX, overlap: true, ..Default::default() };
            let unsorted = find_orfs(seq.as_str(), &OrfOptions { sort_by_length: false, ..base.clone() }).unwrap();
            let sorted = find_orfs(seq.as_str(), &base).unwrap();

            let mut expected: Vec<_> = unsorted.iter().cloned().collect();
            expected.sort_by(|a, b| b.len().cmp(&a.len()));
            prop_assert_eq!(sorted.intervals(), expected.as_slice());
        }

        #[test]
        fn rna_and_dna_give_same_orfs(seq in dna(200)) {
            let rna: String = seq.chars().map(|c| if c == 'T' { 'U' } else { c }).collect();
            let opts = OrfOptions { min_length: 0, ..Default::default() };
            let a = find_orfs(seq.as_str(), &opts).unwrap();
            let b = find_orfs(rna.as_str(), &opts).unwrap();
            prop_assert_eq!(a.intervals(), b.intervals());
        }
    }
}
