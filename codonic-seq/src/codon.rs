//! Codon translation with the standard genetic code (NCBI Table 1).
//!
//! The table is a `const` array indexed by codon, so lookups are
//! allocation-free and safe to share across threads. DNA and RNA share it:
//! `U` is read as `T`, and input case is ignored.

use codonic_core::{CodonicError, Result};

/// Amino acid emitted for codons outside the table (ambiguity codes, gaps).
pub const UNKNOWN_AA: u8 = b'X';

/// Symbol for a stop codon.
pub const STOP_SYMBOL: u8 = b'*';

/// Stop codons in T-form.
pub const STOP_CODONS: [[u8; 3]; 3] = [*b"TAA", *b"TAG", *b"TGA"];

// ---------------------------------------------------------------------------
// Base encoding: A=0, C=1, G=2, T/U=3
// ---------------------------------------------------------------------------

fn base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}

/// Convert a 3-base codon to an index in [0, 64).
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

/// Index of `ATG`.
const ATG_INDEX: usize = 14;

// Codon order: AAA, AAC, AAG, AAT, ACA, ACC, ACG, ACT, AGA, AGC, AGG, AGT,
//              ATA, ATC, ATG, ATT, CAA, CAC, CAG, CAT, CCA, CCC, CCG, CCT,
//              CGA, CGC, CGG, CGT, CTA, CTC, CTG, CTT, GAA, GAC, GAG, GAT,
//              GCA, GCC, GCG, GCT, GGA, GGC, GGG, GGT, GTA, GTC, GTG, GTT,
//              TAA, TAC, TAG, TAT, TCA, TCC, TCG, TCT, TGA, TGC, TGG, TGT,
//              TTA, TTC, TTG, TTT
const STANDARD_CODE: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// Translate a single codon.
///
/// Returns [`STOP_SYMBOL`] for stops and [`UNKNOWN_AA`] for anything the
/// table does not cover.
pub fn translate_codon(codon: &[u8]) -> u8 {
    codon_index(codon).map_or(UNKNOWN_AA, |idx| STANDARD_CODE[idx])
}

/// Whether `codon` is `TAA`, `TAG` or `TGA` (any case, `U` for `T` allowed).
pub fn is_stop_codon(codon: &[u8]) -> bool {
    codon_index(codon).is_some_and(|idx| STANDARD_CODE[idx] == STOP_SYMBOL)
}

/// Whether `codon` is `ATG`/`AUG`.
pub fn is_atg(codon: &[u8]) -> bool {
    codon_index(codon) == Some(ATG_INDEX)
}

/// Translation policy.
///
/// A stop codon always ends translation. `to_stop` drops the stop symbol;
/// otherwise `stop_symbol` decides whether `*` is appended before halting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct TranslateOptions {
    pub stop_symbol: bool,
    pub to_stop: bool,
    /// Offset of the first codon, 0, 1, or 2.
    pub frame: u8,
    /// Begin at the first in-frame `ATG`; translate nothing if there is none.
    pub require_start: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            stop_symbol: true,
            to_stop: false,
            frame: 0,
            require_start: false,
        }
    }
}

/// Translate `seq` under `opts`.
///
/// Reads successive non-overlapping codons from the frame offset; incomplete
/// trailing codons are ignored and input shorter than one codon yields `""`.
///
/// # Errors
///
/// Returns an error if `opts.frame` is not 0, 1, or 2.
pub fn translate(seq: &[u8], opts: &TranslateOptions) -> Result<String> {
    if opts.frame > 2 {
        return Err(CodonicError::InvalidInput(format!(
            "invalid frame: {}, frame must be 0, 1, or 2",
            opts.frame
        )));
    }
    let frame = opts.frame as usize;
    if seq.len() < frame + 3 {
        return Ok(String::new());
    }
    let body = &seq[frame..];

    let begin = if opts.require_start {
        match body.chunks_exact(3).position(is_atg) {
            Some(codon) => codon * 3,
            None => return Ok(String::new()),
        }
    } else {
        0
    };

    let emit_stop = !opts.to_stop && opts.stop_symbol;
    Ok(translate_codons(&body[begin..], emit_stop))
}

/// Translate all three forward frames with the same policy.
pub fn translate_frames(seq: &[u8], opts: &TranslateOptions) -> Result<[String; 3]> {
    let mut out: [String; 3] = Default::default();
    for (frame, slot) in (0u8..3).zip(out.iter_mut()) {
        *slot = translate(seq, &TranslateOptions { frame, ..*opts })?;
    }
    Ok(out)
}

/// Translate an in-frame coding slice up to (not including) the first stop.
pub(crate) fn translate_to_stop(coding: &[u8]) -> String {
    translate_codons(coding, false)
}

fn translate_codons(seq: &[u8], emit_stop: bool) -> String {
    let mut protein = String::with_capacity(seq.len() / 3);
    for codon in seq.chunks_exact(3) {
        let aa = translate_codon(codon);
        if aa == STOP_SYMBOL {
            if emit_stop {
                protein.push(STOP_SYMBOL as char);
            }
            break;
        }
        protein.push(aa as char);
    }
    protein
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T'), Just(b'N')],
            0..=max_len,
        )
    }

    proptest! {
        #[test]
        fn dna_and_rna_translate_identically(
            seq in dna(120),
            frame in 0u8..3,
            stop_symbol in any::<bool>(),
            to_stop in any::<bool>(),
            require_start in any::<bool>(),
        ) {
            let rna: Vec<u8> = seq.iter().map(|&b| if b == b'T' { b'U' } else { b }).collect();
            let o = TranslateOptions { stop_symbol, to_stop, frame, require_start };
            prop_assert_eq!(translate(&seq, &o).unwrap(), translate(&rna, &o).unwrap());
        }

        #[test]
        fn output_never_longer_than_codon_count(seq in dna(120)) {
            let protein = translate(&seq, &TranslateOptions::default()).unwrap();
            prop_assert!(protein.len() <= seq.len() / 3);
        }
    }
}
