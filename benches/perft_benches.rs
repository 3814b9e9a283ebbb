use criterion::{black_box, criterion_group, criterion_main, Criterion};

use perch::board::perft::{perft, perft_parallel};
use perch::Board;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";

fn movegen_benches(c: &mut Criterion) {
    let start = Board::start_pos();
    let kiwipete = Board::from_fen(KIWIPETE).unwrap();

    c.bench_function("movegen_start_pos", |b| {
        b.iter(|| black_box(&start).generate_moves().len())
    });
    c.bench_function("movegen_kiwipete", |b| {
        b.iter(|| black_box(&kiwipete).generate_moves().len())
    });
}

fn perft_benches(c: &mut Criterion) {
    let start = Board::start_pos();
    let kiwipete = Board::from_fen(KIWIPETE).unwrap();

    c.bench_function("perft_start_pos_4", |b| {
        b.iter(|| perft(black_box(&start), 4))
    });
    c.bench_function("perft_kiwipete_3", |b| {
        b.iter(|| perft(black_box(&kiwipete), 3))
    });

    let mut deep = c.benchmark_group("perft_deep");
    deep.sample_size(10);
    deep.bench_function("perft_start_pos_5", |b| {
        b.iter(|| perft(black_box(&start), 5))
    });
    deep.bench_function("perft_parallel_kiwipete_4", |b| {
        b.iter(|| perft_parallel(black_box(&kiwipete), 4))
    });
    deep.finish();
}

criterion_group!(benches, movegen_benches, perft_benches);
criterion_main!(benches);
