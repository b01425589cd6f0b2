use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scram_dictionary::{Dictionary, DictionaryConfig, StorageStrategy};
use scram_finder::Finder;
use tracing::Span;

/// Deterministic pseudo-random lowercase text.
fn text(seed: u64, len: usize) -> String {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (b'a' + ((state >> 33) % 26) as u8) as char
        })
        .collect()
}

fn dictionary(strategy: StorageStrategy) -> Dictionary {
    let config = DictionaryConfig::new(2, 10, 10_000)
        .expect("valid config")
        .with_storage(strategy);
    let mut dict = Dictionary::from_config(config, Span::none()).expect("valid config");
    let words: Vec<String> = (0..500).map(|i| text(i, 2 + (i as usize % 9))).collect();
    for word in &words {
        // Random words may repeat; duplicates are irrelevant here.
        let _ = dict.add_word(word);
    }
    dict
}

fn bench_count_matches(c: &mut Criterion) {
    let inputs: Vec<String> = (0..20).map(|i| text(1_000 + i, 500)).collect();
    let mut group = c.benchmark_group("count_matches");
    for strategy in [StorageStrategy::Eager, StorageStrategy::Lazy] {
        let dict = dictionary(strategy);
        group.bench_with_input(BenchmarkId::from_parameter(strategy), &inputs, |b, inputs| {
            b.iter(|| {
                let finder = Finder::new(&dict);
                black_box(finder.find_matches_in(inputs))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_count_matches);
criterion_main!(benches);
