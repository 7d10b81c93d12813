use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use xwords_themes::{
    find::{parallel::ParallelFinder, simple::SimpleFinder},
    Finder, FinderConfig, WordList,
};

fn words(count: usize) -> Vec<String> {
    let list = WordList::load("./benches/words.txt").unwrap();
    list.words().into_iter().take(count).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_themes");
    group.sample_size(10);

    for count in [100, 300].iter() {
        let input = words(*count);

        group.bench_with_input(BenchmarkId::new("simple", count), &input, |b, input| {
            b.iter(|| SimpleFinder::new(FinderConfig::default()).find(input).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("parallel", count), &input, |b, input| {
            b.iter(|| ParallelFinder::new(FinderConfig::default()).find(input).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
