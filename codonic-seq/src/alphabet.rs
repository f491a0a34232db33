//! Nucleotide alphabets and the DNA/RNA kind flag.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of valid bytes (uppercase). [`NucleicAcid`] selects one
//! of them at runtime; it is the kind carried by every
//! [`NucleotideSeq`](crate::NucleotideSeq).

use std::fmt;

/// Trait for biological sequence alphabets.
///
/// Implementors define a fixed set of valid uppercase bytes. Sequence
/// constructors uppercase input first, then validate against the alphabet.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid uppercase bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte (assumed already uppercased) is valid.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }
}

/// IUPAC DNA alphabet plus gap: `ACGTNRYSWKMBDHV-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGTNRYSWKMBDHV-";
}

/// IUPAC RNA alphabet plus gap: `ACGUNRYSWKMBDHV-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const VALID_BYTES: &'static [u8] = b"ACGUNRYSWKMBDHV-";
}

/// Which nucleotide alphabet a sequence is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NucleicAcid {
    #[default]
    Dna,
    Rna,
}

impl NucleicAcid {
    /// Alphabet name, `"DNA"` or `"RNA"`.
    pub fn name(self) -> &'static str {
        match self {
            NucleicAcid::Dna => DnaAlphabet::NAME,
            NucleicAcid::Rna => RnaAlphabet::NAME,
        }
    }

    /// Check an uppercase byte against this kind's alphabet.
    pub fn is_valid(self, b: u8) -> bool {
        match self {
            NucleicAcid::Dna => DnaAlphabet::is_valid(b),
            NucleicAcid::Rna => RnaAlphabet::is_valid(b),
        }
    }

    /// Complement of an uppercase base under this kind (full IUPAC).
    ///
    /// Bytes without a partner (`S`, `W`, `N`, `-`) map to themselves.
    pub fn complement(self, b: u8) -> u8 {
        match b {
            b'A' => match self {
                NucleicAcid::Dna => b'T',
                NucleicAcid::Rna => b'U',
            },
            b'T' | b'U' => b'A',
            b'C' => b'G',
            b'G' => b'C',
            b'R' => b'Y', // A|G -> T|C
            b'Y' => b'R',
            b'K' => b'M', // G|T -> C|A
            b'M' => b'K',
            b'B' => b'V', // C|G|T -> G|C|A
            b'V' => b'B',
            b'D' => b'H', // A|G|T -> T|C|A
            b'H' => b'D',
            other => other,
        }
    }
}

impl fmt::Display for NucleicAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_accepts_all_iupac_bases_and_gap() {
        for &b in b"ACGTNRYSWKMBDHV-" {
            assert!(DnaAlphabet::is_valid(b), "DNA should accept {}", b as char);
        }
    }

    #[test]
    fn dna_rejects_u() {
        assert!(!DnaAlphabet::is_valid(b'U'));
        assert!(!NucleicAcid::Dna.is_valid(b'U'));
    }

    #[test]
    fn rna_accepts_all_iupac_bases_and_gap() {
        for &b in b"ACGUNRYSWKMBDHV-" {
            assert!(RnaAlphabet::is_valid(b), "RNA should accept {}", b as char);
        }
    }

    #[test]
    fn rna_rejects_t() {
        assert!(!RnaAlphabet::is_valid(b'T'));
        assert!(!NucleicAcid::Rna.is_valid(b'T'));
    }

    #[test]
    fn rejects_lowercase_and_junk() {
        assert!(!NucleicAcid::Dna.is_valid(b'a'));
        assert!(!NucleicAcid::Dna.is_valid(b'X'));
        assert!(!NucleicAcid::Rna.is_valid(b' '));
    }

    #[test]
    fn complement_depends_on_kind() {
        assert_eq!(NucleicAcid::Dna.complement(b'A'), b'T');
        assert_eq!(NucleicAcid::Rna.complement(b'A'), b'U');
        assert_eq!(NucleicAcid::Rna.complement(b'U'), b'A');
    }

    #[test]
    fn complement_is_involutive_over_alphabet() {
        for kind in [NucleicAcid::Dna, NucleicAcid::Rna] {
            let valid = match kind {
                NucleicAcid::Dna => DnaAlphabet::VALID_BYTES,
                NucleicAcid::Rna => RnaAlphabet::VALID_BYTES,
            };
            for &b in valid {
                let c = kind.complement(b);
                assert!(kind.is_valid(c), "{kind}: complement of {} left alphabet", b as char);
                assert_eq!(kind.complement(c), b);
            }
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(NucleicAcid::Dna.to_string(), "DNA");
        assert_eq!(NucleicAcid::Rna.to_string(), "RNA");
    }
}
