use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wa_core::FrequencyRecord;
use wa_words::{rank, read_frequencies, FrequencyOptions, WordContext};

fn synthetic_table(n: usize) -> Vec<FrequencyRecord> {
    (0..n)
        .map(|i| {
            let count = (n - i) as u64 * 7 % 10_007;
            FrequencyRecord::new(format!("w{}", "o".repeat(i % 12)), count)
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let table = synthetic_table(100_000);
    c.bench_function("rank_100k", |b| {
        b.iter(|| black_box(rank(black_box(table.clone()))))
    });

    let csv: String = table.iter().map(|r| format!("{},{}\n", r.word, r.count)).collect();
    c.bench_function("parse_frequencies_100k", |b| {
        b.iter(|| black_box(read_frequencies(csv.as_bytes(), FrequencyOptions::default()).unwrap()))
    });
}

fn bench_select(c: &mut Criterion) {
    let corpus: Vec<String> = (0..50_000).map(|i| format!("word{i}")).collect();
    let ctx = WordContext::new(corpus, synthetic_table(100_000), 1000).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("select_any_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(ctx.select(None, &mut rng));
            }
        })
    });

    c.bench_function("select_length_5_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(ctx.select(Some(5), &mut rng));
            }
        })
    });

    c.bench_function("lookup_tail_100", |b| {
        b.iter(|| {
            for _ in 0..100 {
                black_box(ctx.lookup("word49999"));
            }
        })
    });
}

criterion_group!(benches, bench_rank, bench_select);
criterion_main!(benches);
