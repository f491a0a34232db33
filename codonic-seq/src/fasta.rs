//! FASTA/FASTQ loading into validated sequences.

use std::path::Path;

use codonic_core::{CodonicError, Result};
use indexmap::map::Entry;
use indexmap::IndexMap;
use needletail::parse_fastx_file;

use crate::seq::NucleotideSeq;

/// Read every record of a FASTA/FASTQ file (gzip handled transparently),
/// keyed by record id in file order.
///
/// The id is the header up to the first whitespace. Sequences are validated
/// strictly.
///
/// # Errors
///
/// Returns [`CodonicError::Parse`] for unreadable or malformed input and for
/// duplicate ids; alphabet errors from validation propagate unchanged.
pub fn read_fasta(path: impl AsRef<Path>) -> Result<IndexMap<String, NucleotideSeq>> {
    read_fasta_with(path, true)
}

/// Like [`read_fasta`], choosing strict or lenient validation.
pub fn read_fasta_with(
    path: impl AsRef<Path>,
    strict: bool,
) -> Result<IndexMap<String, NucleotideSeq>> {
    let path = path.as_ref();
    let mut reader = parse_fastx_file(path).map_err(|e| CodonicError::Parse(e.to_string()))?;

    let mut records = IndexMap::new();
    while let Some(record) = reader.next() {
        let record = record.map_err(|e| CodonicError::Parse(e.to_string()))?;
        let id = record_id(record.id());
        let seq = NucleotideSeq::with_options(record.seq(), None, strict).map_err(|e| {
            log::warn!("{}: record '{id}' rejected: {e}", path.display());
            e
        })?;
        match records.entry(id) {
            Entry::Occupied(e) => {
                return Err(CodonicError::Parse(format!(
                    "duplicate sequence id '{}' in {}",
                    e.key(),
                    path.display()
                )));
            }
            Entry::Vacant(e) => {
                e.insert(seq);
            }
        }
    }

    log::debug!("{}: read {} record(s)", path.display(), records.len());
    Ok(records)
}

fn record_id(header: &[u8]) -> String {
    let header = String::from_utf8_lossy(header);
    header.split_whitespace().next().unwrap_or_default().to_string()
}
