//! Multi-record ORF search.

use codonic_core::Result;
use indexmap::IndexMap;

use crate::orf::{OrfOptions, OrfScanner, SeqInput};
use crate::result::IntervalResult;
use crate::seq::NucleotideSeq;

/// Run [`find_orfs`](crate::orf::find_orfs) on every record, keyed by id.
///
/// Each record id becomes the `seq_id` of its result and ORFs, overriding
/// `opts.seq_id`. Results keep the input order. The first failing record
/// aborts the batch. With the `parallel` feature records are scanned on the
/// rayon pool, one scanner per worker.
pub fn find_orfs_batch(
    records: &IndexMap<String, NucleotideSeq>,
    opts: &OrfOptions,
) -> Result<Vec<IntervalResult>> {
    opts.validate()?;
    let entries: Vec<(&String, &NucleotideSeq)> = records.iter().collect();

    #[cfg(feature = "parallel")]
    let results: Result<Vec<IntervalResult>> = {
        use rayon::prelude::*;
        entries
            .par_iter()
            .map_init(OrfScanner::new, |scanner, (id, seq)| {
                scanner.find_with_id(SeqInput::Seq(seq), opts, Some(id.as_str()))
            })
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results: Result<Vec<IntervalResult>> = {
        let mut scanner = OrfScanner::new();
        entries
            .iter()
            .map(|(id, seq)| scanner.find_with_id(SeqInput::Seq(seq), opts, Some(id.as_str())))
            .collect()
    };

    let results = results?;
    log::debug!(
        "find_orfs_batch: {} record(s), {} ORF(s)",
        results.len(),
        results.iter().map(IntervalResult::len).sum::<usize>()
    );
    Ok(results)
}
