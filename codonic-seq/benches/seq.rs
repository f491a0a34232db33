use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use codonic_seq::{find_orfs, NucleotideSeq, OrfOptions, OrfScanner, TranslateOptions};
use std::io::Write;

// LCG so runs are reproducible without a rand dependency.
fn random_dna(len: usize, mut state: u64) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(bases[((state >> 33) % 4) as usize]);
    }
    seq
}

fn make_fasta(n_seqs: usize, seq_len: usize) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    for i in 0..n_seqs {
        writeln!(f, ">seq_{}", i).unwrap();
        f.write_all(&random_dna(seq_len, i as u64)).unwrap();
        writeln!(f).unwrap();
    }
    f.flush().unwrap();
    f
}

fn bench_gc_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("gc_content");

    let seq_10k = NucleotideSeq::new(random_dna(10_000, 42)).unwrap();
    group.bench_function("10kb", |b| b.iter(|| black_box(&seq_10k).gc_content()));
    group.bench_function("sliding_100_10", |b| {
        b.iter(|| black_box(&seq_10k).sliding_gc(100, 10, None).unwrap().len())
    });

    group.finish();
}

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");

    let seq = random_dna(10_000, 7);
    let opts = TranslateOptions { stop_symbol: false, require_start: false, ..Default::default() };
    group.bench_function("10kb", |b| {
        b.iter(|| codonic_seq::translate(black_box(&seq), &opts).unwrap())
    });
    group.bench_function("frames_10kb", |b| {
        b.iter(|| codonic_seq::translate_frames(black_box(&seq), &opts).unwrap())
    });

    group.finish();
}

fn bench_find_orfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_orfs");

    for len in [1_000usize, 10_000, 100_000] {
        let seq = NucleotideSeq::new(random_dna(len, 42)).unwrap();
        let opts = OrfOptions { min_length: 30, ..Default::default() };
        group.bench_with_input(BenchmarkId::new("six_frame", len), &seq, |b, seq| {
            b.iter(|| find_orfs(black_box(seq), &opts).unwrap().len())
        });

        let overlap = OrfOptions { overlap: true, translate: true, ..opts.clone() };
        group.bench_with_input(BenchmarkId::new("overlap_translate", len), &seq, |b, seq| {
            let mut scanner = OrfScanner::new();
            b.iter(|| scanner.find(black_box(seq), &overlap).unwrap().len())
        });
    }

    group.finish();
}

fn bench_fasta_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("fasta_batch");
    group.sample_size(20);

    // ~1MB: 1000 seqs × 1000bp
    let f_1mb = make_fasta(1000, 1000);
    group.bench_function("read_1MB", |b| {
        b.iter(|| codonic_seq::read_fasta(black_box(f_1mb.path())).unwrap().len())
    });

    let records = codonic_seq::read_fasta(f_1mb.path()).unwrap();
    let opts = OrfOptions { min_length: 60, ..Default::default() };
    group.bench_function("find_orfs_1MB", |b| {
        b.iter(|| codonic_seq::find_orfs_batch(black_box(&records), &opts).unwrap().len())
    });

    group.finish();
}

criterion_group!(benches, bench_gc_content, bench_translate, bench_find_orfs, bench_fasta_batch);
criterion_main!(benches);
