//! Criterion benchmarks for Kindred.
//!
//! Covers text analysis and more like this query construction over the
//! term vector and stored value paths.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kindred::analysis::{Analyzer, StandardAnalyzer};
use kindred::document::Document;
use kindred::index::MemoryIndexReader;
use kindred::more_like_this::{MoreLikeThisBuilder, MoreLikeThisConfig};
use kindred::similarity::ClassicSimilarity;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "search",
        "engine",
        "full",
        "text",
        "index",
        "query",
        "document",
        "field",
        "term",
        "phrase",
        "boolean",
        "similarity",
        "relevance",
        "score",
        "analysis",
        "tokenization",
        "clustering",
        "algorithm",
        "structure",
        "performance",
        "memory",
        "storage",
        "retrieval",
        "ranking",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13 + j * j) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

fn build_reader(texts: &[String], term_vectors: bool) -> MemoryIndexReader {
    let mut builder = MemoryIndexReader::builder();
    if term_vectors {
        builder = builder.store_term_vectors("body");
    }
    builder
        .add_documents(
            texts
                .iter()
                .map(|text| Document::builder().add_text("body", text.as_str()).build()),
        )
        .build()
        .unwrap()
}

/// Benchmark text analysis and tokenization.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = StandardAnalyzer::new();
    let texts = generate_test_documents(1000);

    group.bench_function("analyze_single_document", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&texts[0])).unwrap().collect();
            black_box(tokens)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let count = analyzer.analyze(black_box(text)).unwrap().count();
                black_box(count);
            }
        })
    });

    group.finish();
}

/// Benchmark query construction from an indexed reference document.
fn bench_more_like_this(c: &mut Criterion) {
    let mut group = c.benchmark_group("more_like_this");

    let texts = generate_test_documents(1000);
    let readers = [
        ("term_vectors", build_reader(&texts, true)),
        ("stored_values", build_reader(&texts, false)),
    ];

    for (name, reader) in &readers {
        group.bench_with_input(BenchmarkId::new("build", name), reader, |b, reader| {
            b.iter(|| {
                let query = MoreLikeThisBuilder::<Document>::new("Doc", reader, &ClassicSimilarity)
                    .compatible_fields(["body"])
                    .field("body")
                    .like_document(black_box(42))
                    .build()
                    .unwrap();
                black_box(query)
            })
        });
    }

    let reader = &readers[0].1;
    for max_query_terms in [5, 25, 0] {
        let config = MoreLikeThisConfig::default()
            .with_max_query_terms(max_query_terms)
            .with_boost(true);
        group.bench_with_input(
            BenchmarkId::new("max_query_terms", max_query_terms),
            &config,
            |b, config| {
                b.iter(|| {
                    let query =
                        MoreLikeThisBuilder::<Document>::new("Doc", reader, &ClassicSimilarity)
                            .compatible_fields(["body"])
                            .field("body")
                            .like_document(7)
                            .config(config.clone())
                            .build()
                            .unwrap();
                    black_box(query)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_more_like_this);

criterion_main!(benches);
