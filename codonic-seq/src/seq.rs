//! Validated nucleotide sequence type.
//!
//! [`NucleotideSeq`] is a `Vec<u8>` newtype tagged with a runtime
//! [`NucleicAcid`] kind. Construction uppercases and validates every byte, so
//! the inner data is always uppercase and `Deref<Target=[u8]>` and
//! `as_bytes()` are zero-cost and safe to pass to downstream `&[u8]` APIs.
//!
//! Derived sequences (complement, transcription) are new values. The only
//! in-place mutations, [`NucleotideSeq::set_base`] and
//! [`NucleotideSeq::replace_range`], re-validate before committing.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;

use codonic_core::{CodonicError, Result, Sequence, Summarizable};

use crate::alphabet::NucleicAcid;
use crate::composition;
use crate::interval::{SeqInterval, Strand};

/// A validated DNA or RNA sequence.
///
/// A DNA sequence never holds `U`, an RNA sequence never holds `T`. In strict
/// mode an unrecognized byte is an error; in lenient mode it becomes `N`.
#[derive(Clone)]
pub struct NucleotideSeq {
    data: Vec<u8>,
    kind: NucleicAcid,
    strict: bool,
}

impl NucleotideSeq {
    /// Create a strict sequence, inferring DNA or RNA from its content.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        Self::with_options(bytes, None, true)
    }

    /// Create a lenient sequence: unrecognized bytes degrade to `N`.
    pub fn lenient(bytes: impl AsRef<[u8]>) -> Result<Self> {
        Self::with_options(bytes, None, false)
    }

    /// Create a sequence with an explicit kind and strictness.
    ///
    /// When `kind` is `None` the sequence is RNA if it contains `U` and DNA
    /// otherwise; containing both `T` and `U` is an error in either mode.
    pub fn with_options(
        bytes: impl AsRef<[u8]>,
        kind: Option<NucleicAcid>,
        strict: bool,
    ) -> Result<Self> {
        let mut data: Vec<u8> = bytes.as_ref().iter().map(|b| b.to_ascii_uppercase()).collect();
        let kind = match kind {
            Some(kind) => kind,
            None => infer_kind(&data)?,
        };
        validate(&mut data, kind, strict)?;
        Ok(Self { data, kind, strict })
    }

    /// An empty sequence of the given kind.
    pub fn empty(kind: NucleicAcid) -> Self {
        Self {
            data: Vec::new(),
            kind,
            strict: true,
        }
    }

    /// Wrap bytes already known to be valid uppercase members of `kind`.
    pub(crate) fn from_validated(data: Vec<u8>, kind: NucleicAcid, strict: bool) -> Self {
        Self { data, kind, strict }
    }

    pub fn kind(&self) -> NucleicAcid {
        self.kind
    }

    pub fn is_rna(&self) -> bool {
        self.kind == NucleicAcid::Rna
    }

    /// Whether later edits reject unrecognized bytes instead of masking them.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// The sequence as a string slice. Always ASCII.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.data).unwrap_or_default()
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    // -- mutation ----------------------------------------------------------

    /// Replace the base at `idx`, re-validating under the current kind.
    ///
    /// The sequence is unchanged if the new base is rejected.
    pub fn set_base(&mut self, idx: usize, base: u8) -> Result<()> {
        if idx >= self.data.len() {
            return Err(CodonicError::InvalidInput(format!(
                "index {} out of range for sequence of length {}",
                idx,
                self.data.len()
            )));
        }
        let mut candidate = self.data.clone();
        candidate[idx] = base.to_ascii_uppercase();
        validate(&mut candidate, self.kind, self.strict)?;
        self.data = candidate;
        Ok(())
    }

    /// Replace `[start, end)` with `new`, re-validating under the current kind.
    pub fn replace_range(&mut self, start: usize, end: usize, new: impl AsRef<[u8]>) -> Result<()> {
        if start > end || end > self.data.len() {
            return Err(CodonicError::InvalidInput(format!(
                "range [{}, {}) out of bounds for sequence of length {}",
                start,
                end,
                self.data.len()
            )));
        }
        let new = new.as_ref();
        let mut candidate = Vec::with_capacity(self.data.len() - (end - start) + new.len());
        candidate.extend_from_slice(&self.data[..start]);
        candidate.extend(new.iter().map(|b| b.to_ascii_uppercase()));
        candidate.extend_from_slice(&self.data[end..]);
        validate(&mut candidate, self.kind, self.strict)?;
        self.data = candidate;
        Ok(())
    }

    // -- composition -------------------------------------------------------

    /// Number of occurrences of `base` (case-insensitive).
    pub fn count(&self, base: u8) -> usize {
        let base = base.to_ascii_uppercase();
        self.data.iter().filter(|&&b| b == base).count()
    }

    /// Occurrences of every base present, keyed by base.
    pub fn base_counts(&self) -> BTreeMap<char, usize> {
        let mut counts = BTreeMap::new();
        for &b in &self.data {
            *counts.entry(b as char).or_insert(0) += 1;
        }
        counts
    }

    /// GC content as a fraction in [0.0, 1.0].
    ///
    /// Only counts unambiguous G and C bases. Returns 0.0 for empty sequences.
    pub fn gc_content(&self) -> f64 {
        composition::gc_fraction(&self.data)
    }

    /// GC content formatted as a percentage, e.g. `"50.00%"`.
    pub fn gc_percent(&self) -> String {
        composition::to_percentage(self.gc_content())
    }

    /// AT (or AU) content as a fraction in [0.0, 1.0].
    pub fn at_content(&self) -> f64 {
        composition::at_fraction(&self.data)
    }

    /// AT content formatted as a percentage.
    pub fn at_percent(&self) -> String {
        composition::to_percentage(self.at_content())
    }

    /// GC percentage over sliding windows; see [`composition::sliding_gc`].
    pub fn sliding_gc(
        &self,
        window: usize,
        step: usize,
        seq_id: Option<&str>,
    ) -> Result<Vec<SeqInterval>> {
        composition::sliding_gc(&self.data, window, step, seq_id)
    }

    // -- derived sequences -------------------------------------------------

    /// Base-wise complement, same kind.
    pub fn complement(&self) -> NucleotideSeq {
        let kind = self.kind;
        let comp: Vec<u8> = self.data.iter().map(|&b| kind.complement(b)).collect();
        NucleotideSeq::from_validated(comp, kind, self.strict)
    }

    /// Return the reverse complement.
    pub fn reverse_complement(&self) -> NucleotideSeq {
        let kind = self.kind;
        let rc: Vec<u8> = self.data.iter().rev().map(|&b| kind.complement(b)).collect();
        NucleotideSeq::from_validated(rc, kind, self.strict)
    }

    /// Transcribe DNA to RNA (T → U).
    ///
    /// With [`Strand::Reverse`] the complement strand is transcribed. An RNA
    /// sequence is returned as a copy.
    pub fn transcribe(&self, strand: Strand) -> NucleotideSeq {
        if self.is_rna() {
            return self.clone();
        }
        let template = match strand {
            Strand::Forward => self.data.clone(),
            Strand::Reverse => self.complement().into_bytes(),
        };
        let rna: Vec<u8> = template
            .into_iter()
            .map(|b| if b == b'T' { b'U' } else { b })
            .collect();
        NucleotideSeq::from_validated(rna, NucleicAcid::Rna, self.strict)
    }

    /// Reverse-transcribe RNA to DNA (U → T). A DNA sequence is returned as a copy.
    pub fn reverse_transcribe(&self) -> NucleotideSeq {
        if !self.is_rna() {
            return self.clone();
        }
        let dna: Vec<u8> = self
            .data
            .iter()
            .map(|&b| if b == b'U' { b'T' } else { b })
            .collect();
        NucleotideSeq::from_validated(dna, NucleicAcid::Dna, self.strict)
    }
}

fn infer_kind(data: &[u8]) -> Result<NucleicAcid> {
    let has_t = data.contains(&b'T');
    let has_u = data.contains(&b'U');
    match (has_t, has_u) {
        (true, true) => Err(CodonicError::AmbiguousNucleicAcid),
        (_, true) => Ok(NucleicAcid::Rna),
        _ => Ok(NucleicAcid::Dna),
    }
}

/// Check every (uppercased) byte against `kind`; lenient mode masks with `N`.
fn validate(data: &mut [u8], kind: NucleicAcid, strict: bool) -> Result<()> {
    for (i, b) in data.iter_mut().enumerate() {
        if kind.is_valid(*b) {
            continue;
        }
        if strict {
            return Err(CodonicError::InvalidBase {
                kind: kind.name(),
                base: *b as char,
                position: i,
            });
        }
        *b = b'N';
    }
    Ok(())
}

impl Deref for NucleotideSeq {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for NucleotideSeq {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Sequence for NucleotideSeq {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Summarizable for NucleotideSeq {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = &self.as_str()[..preview_len];
        if self.data.len() > 20 {
            format!("{} sequence ({} bp): {}...", self.kind, self.data.len(), preview)
        } else {
            format!("{} sequence ({} bp): {}", self.kind, self.data.len(), preview)
        }
    }
}

impl FromStr for NucleotideSeq {
    type Err = CodonicError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Debug for NucleotideSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", self.kind, self.as_str())
    }
}

impl fmt::Display for NucleotideSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for NucleotideSeq {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for NucleotideSeq {}

impl PartialEq<str> for NucleotideSeq {
    fn eq(&self, other: &str) -> bool {
        self.data.eq_ignore_ascii_case(other.as_bytes())
    }
}

impl PartialEq<&str> for NucleotideSeq {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for NucleotideSeq {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl Hash for NucleotideSeq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NucleotideSeq {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NucleotideSeq {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}
