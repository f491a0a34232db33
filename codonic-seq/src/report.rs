//! Tabular ORF output.
//!
//! One row per ORF with the columns
//! `seq_id, start, end, strand, frame, length` and optionally `nt_seq` and
//! `aa_seq`. Missing values are written as empty fields.

use std::io::{self, Write};

use ::csv::WriterBuilder;
use codonic_core::{CodonicError, Result};

use crate::result::IntervalResult;

/// Output settings for [`write_orfs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Field delimiter; tab by default.
    pub delimiter: u8,
    pub include_nt_seq: bool,
    pub include_aa_seq: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            include_nt_seq: true,
            include_aa_seq: true,
        }
    }
}

fn csv_err(e: ::csv::Error) -> CodonicError {
    CodonicError::Io(io::Error::from(e))
}

/// Write the ORFs of every result as one table with a header row.
///
/// A record without its own `seq_id` takes the id of the result it belongs to.
pub fn write_orfs<'a, W: Write>(
    writer: W,
    results: impl IntoIterator<Item = &'a IntervalResult>,
    opts: &WriteOptions,
) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(opts.delimiter)
        .from_writer(writer);

    let mut header = vec!["seq_id", "start", "end", "strand", "frame", "length"];
    if opts.include_nt_seq {
        header.push("nt_seq");
    }
    if opts.include_aa_seq {
        header.push("aa_seq");
    }
    wtr.write_record(&header).map_err(csv_err)?;

    let mut rows = 0usize;
    for result in results {
        for orf in result {
            let frame = orf.frame().map(|f| f.to_string()).unwrap_or_default();
            let mut row = vec![
                orf.seq_id().or(result.seq_id()).unwrap_or_default().to_string(),
                orf.start().to_string(),
                orf.end().to_string(),
                orf.strand().to_string(),
                frame,
                orf.len().to_string(),
            ];
            if opts.include_nt_seq {
                row.push(orf.nt_seq().unwrap_or_default().to_string());
            }
            if opts.include_aa_seq {
                row.push(orf.aa_seq().unwrap_or_default().to_string());
            }
            wtr.write_record(&row).map_err(csv_err)?;
            rows += 1;
        }
    }
    wtr.flush()?;

    log::debug!("wrote {rows} ORF row(s)");
    Ok(())
}
