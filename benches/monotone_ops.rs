use criterion::{black_box, criterion_group, criterion_main, Criterion};
use circle_mis::MonotoneSequence;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_raises(c: &mut Criterion) {
    let mut group = c.benchmark_group("monotone_sequence");
    for &len in &[1_000usize, 100_000] {
        let mut rng = StdRng::seed_from_u64(11);
        let ops: Vec<(usize, u64)> = (0..10_000)
            .map(|_| (rng.gen_range(0..=len), rng.gen_range(1..4)))
            .collect();
        group.bench_function(format!("raise_len_{len}"), |b| {
            b.iter(|| {
                let mut seq = MonotoneSequence::new(len);
                for &(idx, bump) in &ops {
                    let value = seq.get(idx) + bump;
                    black_box(seq.set(idx, value));
                }
                seq.num_breakpoints()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_raises);
criterion_main!(benches);
