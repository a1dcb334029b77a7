//! Benchmarks for whole-tree transforms

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use wakachi_engine::{Container, ContentTree, SplitterConfig, TextSplitter};

/// Generate mixed Japanese and English text of roughly `size_kb` kilobytes
fn generate_text(size_kb: usize) -> String {
    let base_text = "「東京タワー」へ行った。It's 3.14 km (e.g. a short walk)… ";
    let target_size = size_kb * 1024;
    let repeat_count = target_size / base_text.len() + 1;
    base_text.repeat(repeat_count)
}

fn tree_of(text: &str) -> ContentTree {
    ContentTree::new(
        Container::new()
            .with_lang("ja")
            .child(text)
            .child(Container::labeled("em").child(text)),
    )
}

fn bench_merge_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_modes");

    let modes = [
        ("word_merge", SplitterConfig::default()),
        (
            "char_merge",
            SplitterConfig::builder().concat_char(true).build().unwrap(),
        ),
        (
            "no_rules",
            SplitterConfig::builder()
                .line_breaking_rules(false)
                .build()
                .unwrap(),
        ),
    ];

    for size_kb in [1, 10, 50] {
        let text = generate_text(size_kb);
        group.throughput(Throughput::Bytes(2 * text.len() as u64));

        for (name, config) in &modes {
            let splitter = TextSplitter::with_config(config.clone());
            group.bench_with_input(
                BenchmarkId::new(*name, format!("{}KB", size_kb)),
                &text,
                |b, text| {
                    b.iter_batched(
                        || tree_of(text),
                        |mut tree| black_box(splitter.transform(&mut tree)),
                        criterion::BatchSize::LargeInput,
                    );
                },
            );
        }
    }

    group.finish();
}

fn bench_word_segmenter(c: &mut Criterion) {
    let text = generate_text(10);
    let config = SplitterConfig::builder().word_segmenter(true).build().unwrap();
    let splitter = TextSplitter::with_config(config);

    c.bench_function("word_segmenter_10KB", |b| {
        b.iter_batched(
            || tree_of(&text),
            |mut tree| black_box(splitter.transform(&mut tree)),
            criterion::BatchSize::LargeInput,
        );
    });
}

fn bench_revert(c: &mut Criterion) {
    let text = generate_text(10);
    let splitter = TextSplitter::new();

    c.bench_function("transform_and_revert_10KB", |b| {
        b.iter_batched(
            || tree_of(&text),
            |mut tree| {
                let mut split = splitter.transform(&mut tree);
                black_box(split.revert(&mut tree))
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_merge_modes, bench_word_segmenter, bench_revert);
criterion_main!(benches);
