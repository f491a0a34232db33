//! Base composition: GC/AT fractions and sliding-window GC.

use codonic_core::{CodonicError, Result};

use crate::interval::{IntervalKind, SeqInterval};

fn is_gc(b: u8) -> bool {
    matches!(b.to_ascii_uppercase(), b'G' | b'C')
}

fn is_at(b: u8) -> bool {
    matches!(b.to_ascii_uppercase(), b'A' | b'T' | b'U')
}

/// Fraction of `G`/`C` bases. 0.0 for an empty slice.
pub fn gc_fraction(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    seq.iter().filter(|&&b| is_gc(b)).count() as f64 / seq.len() as f64
}

/// Fraction of `A`/`T`/`U` bases. 0.0 for an empty slice.
pub fn at_fraction(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    seq.iter().filter(|&&b| is_at(b)).count() as f64 / seq.len() as f64
}

/// Format a fraction as a percentage with two decimals, e.g. `"42.86%"`.
pub fn to_percentage(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// GC percentage over windows of `window` bases advancing by `step`.
///
/// Each window is returned as a [`SeqInterval`] of kind [`IntervalKind::Gc`]
/// carrying its GC percentage (rounded to 2 decimals). A window at least as
/// long as the sequence yields one interval covering everything; trailing
/// bases that do not fill a whole window are not reported.
///
/// # Errors
///
/// Returns an error if `window` or `step` is zero.
pub fn sliding_gc(
    seq: &[u8],
    window: usize,
    step: usize,
    seq_id: Option<&str>,
) -> Result<Vec<SeqInterval>> {
    if window == 0 || step == 0 {
        return Err(CodonicError::InvalidInput(
            "window and step must be positive".into(),
        ));
    }
    let n = seq.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let make = |start: usize, end: usize, gc: usize| {
        SeqInterval::from_bounds(start, end)
            .with_kind(IntervalKind::Gc)
            .with_gc(round2(gc as f64 / (end - start) as f64 * 100.0))
            .with_seq_id(seq_id.map(str::to_owned))
    };

    if window >= n {
        let gc = seq.iter().filter(|&&b| is_gc(b)).count();
        return Ok(vec![make(0, n, gc)]);
    }

    let mut windows = Vec::with_capacity((n - window) / step + 1);
    let mut gc = seq[..window].iter().filter(|&&b| is_gc(b)).count();
    windows.push(make(0, window, gc));

    let mut start = 0;
    while start + step + window <= n {
        let next = start + step;
        if step < window {
            // Slide: drop [start, next), add [start + window, next + window).
            gc -= seq[start..next].iter().filter(|&&b| is_gc(b)).count();
            gc += seq[start + window..next + window].iter().filter(|&&b| is_gc(b)).count();
        } else {
            gc = seq[next..next + window].iter().filter(|&&b| is_gc(b)).count();
        }
        windows.push(make(next, next + window, gc));
        start = next;
    }

    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_empty() {
        assert_eq!(gc_fraction(b""), 0.0);
        assert_eq!(at_fraction(b""), 0.0);
        assert_eq!(to_percentage(gc_fraction(b"")), "0.00%");
    }

    #[test]
    fn fractions_basic() {
        assert!((gc_fraction(b"GGCA") - 0.75).abs() < 1e-10);
        assert!((at_fraction(b"aaug") - 0.75).abs() < 1e-10);
        assert_eq!(to_percentage(3.0 / 7.0), "42.86%");
    }

    #[test]
    fn sliding_gc_rejects_zero_window_or_step() {
        assert!(sliding_gc(b"ACGT", 0, 1, None).is_err());
        assert!(sliding_gc(b"ACGT", 2, 0, None).is_err());
    }

    #[test]
    fn sliding_gc_empty_sequence() {
        assert!(sliding_gc(b"", 10, 5, None).unwrap().is_empty());
    }

    #[test]
    fn sliding_gc_window_covers_sequence() {
        let w = sliding_gc(b"GGAT", 10, 1, Some("chr1")).unwrap();
        assert_eq!(w.len(), 1);
        assert_eq!((w[0].start(), w[0].end()), (0, 4));
        assert_eq!(w[0].gc(), Some(50.0));
        assert_eq!(w[0].seq_id(), Some("chr1"));
        assert_eq!(w[0].kind(), Some(&IntervalKind::Gc));
    }

    #[test]
    fn sliding_gc_windows() {
        //        0123456789
        let seq = b"GGGGAAAACC";
        let w = sliding_gc(seq, 4, 2, None).unwrap();
        let bounds: Vec<_> = w.iter().map(|i| (i.start(), i.end())).collect();
        assert_eq!(bounds, vec![(0, 4), (2, 6), (4, 8), (6, 10)]);
        let gc: Vec<_> = w.iter().map(|i| i.gc().unwrap()).collect();
        assert_eq!(gc, vec![100.0, 50.0, 0.0, 50.0]);
    }

    #[test]
    fn sliding_gc_step_larger_than_window() {
        let seq = b"GGAAGGAACC";
        let w = sliding_gc(seq, 2, 3, None).unwrap();
        let bounds: Vec<_> = w.iter().map(|i| (i.start(), i.end())).collect();
        assert_eq!(bounds, vec![(0, 2), (3, 5), (6, 8)]);
        let gc: Vec<_> = w.iter().map(|i| i.gc().unwrap()).collect();
        assert_eq!(gc, vec![100.0, 50.0, 0.0]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn incremental_matches_direct_count(
            seq in proptest::collection::vec(
                prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')], 1..300),
            window in 1usize..40,
            step in 1usize..40,
        ) {
            for w in sliding_gc(&seq, window, step, None).unwrap() {
                let direct = gc_fraction(&seq[w.start()..w.end()]) * 100.0;
                prop_assert!((w.gc().unwrap() - round2(direct)).abs() < 1e-9);
            }
        }
    }
}
