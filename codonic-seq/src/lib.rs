//! Nucleotide sequences, codon translation and ORF finding.
//!
//! - **Alphabets**: [`DnaAlphabet`], [`RnaAlphabet`], runtime [`NucleicAcid`]
//! - **Sequences**: [`NucleotideSeq`], validated DNA or RNA with composition,
//!   complement and transcription
//! - **Codon translation**: Standard genetic code (NCBI Table 1)
//! - **ORF finding**: six-frame scan via [`find_orfs`] and [`OrfScanner`]
//! - **FASTA/FASTQ**: [`read_fasta`] into an id-ordered map
//! - **Reports**: TSV/CSV output via [`write_orfs`]
//!
//! # Example
//!
//! ```
//! use codonic_seq::{find_orfs, NucleotideSeq, OrfOptions, Strand, TranslateOptions};
//!
//! // Lowercase input is normalized
//! let dna = NucleotideSeq::new("atgaaagcttaa").unwrap();
//! assert_eq!(dna.as_str(), "ATGAAAGCTTAA");
//! assert_eq!(dna.reverse_complement(), "TTAAGCTTTCAT");
//! assert_eq!(dna.transcribe(Strand::Forward), "AUGAAAGCUUAA");
//!
//! // Translation stops at TAA
//! let protein = codonic_seq::translate(&dna, &TranslateOptions::default()).unwrap();
//! assert_eq!(protein, "MKA*");
//!
//! let opts = OrfOptions { min_length: 6, translate: true, ..Default::default() };
//! let orfs = find_orfs(&dna, &opts).unwrap();
//! assert_eq!(orfs[0].aa_seq(), Some("MKA"));
//! ```

pub mod alphabet;
pub mod batch;
pub mod codon;
pub mod composition;
pub mod fasta;
pub mod interval;
pub mod orf;
pub mod report;
pub mod result;
pub mod seq;

pub use alphabet::{Alphabet, DnaAlphabet, NucleicAcid, RnaAlphabet};

pub use seq::NucleotideSeq;

pub use codon::{is_stop_codon, translate, translate_codon, translate_frames, TranslateOptions};

pub use interval::{IntervalKind, SeqInterval, Strand};
pub use result::IntervalResult;

pub use orf::{find_orfs, FrameSet, OrfOptions, OrfScanner, ScanParams, SeqInput, StartCodons};
pub use batch::find_orfs_batch;

pub use fasta::{read_fasta, read_fasta_with};
pub use report::{write_orfs, WriteOptions};
