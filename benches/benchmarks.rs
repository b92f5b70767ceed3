//! Benchmarks for passage-qa core operations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use passage_qa::chunker::{split_sentences, Segmenter};
use passage_qa::config::{PassageConfig, VectorizerConfig};
use passage_qa::index::rank;
use passage_qa::{answer_question, CorpusIndex, Document};

/// Generate sample documents for benchmarking
fn generate_docs(count: usize) -> Vec<Document> {
    (0..count)
        .map(|i| {
            let text = format!(
                "Document number {} talks about rivers, mountains and topic{}. \
                 Glaciers carve valleys over thousands of years! Rivers carry \
                 sediment toward the sea. Why do mountains erode? Wind and \
                 water wear rock down slowly. Section {} closes here. ",
                i,
                i % 17,
                i
            )
            .repeat(6);
            Document::new(format!("doc{:05}_full.txt", i), text)
        })
        .collect()
}

fn bench_segmentation(c: &mut Criterion) {
    let segmenter = Segmenter::new(400, 200).unwrap();
    let text = generate_docs(1).remove(0).text.repeat(20);

    c.bench_function("segment_long_document", |bencher| {
        bencher.iter(|| black_box(segmenter.segment(black_box(&text))))
    });

    let passage: String = text.chars().take(400).collect();
    c.bench_function("split_sentences_passage", |bencher| {
        bencher.iter(|| black_box(split_sentences(black_box(&passage))))
    });
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_index");

    for count in [10, 100, 500] {
        let docs = generate_docs(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &docs, |bencher, docs| {
            bencher.iter(|| {
                black_box(
                    CorpusIndex::build(
                        docs,
                        &PassageConfig::default(),
                        &VectorizerConfig::default(),
                    )
                    .unwrap(),
                )
            })
        });
    }

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let docs = generate_docs(500);
    let index =
        CorpusIndex::build(&docs, &PassageConfig::default(), &VectorizerConfig::default()).unwrap();

    let query = index.space().transform_one("why do glaciers carve valleys topic3");

    c.bench_function("rank_all_passages", |bencher| {
        bencher.iter(|| black_box(rank(black_box(&query), index.vectors())))
    });

    c.bench_function("answer_question", |bencher| {
        bencher.iter(|| black_box(answer_question(&index, "why do glaciers carve valleys topic3")))
    });
}

criterion_group!(benches, bench_segmentation, bench_fit, bench_query);
criterion_main!(benches);
