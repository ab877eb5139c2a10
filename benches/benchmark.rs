use bow_vectorizer::{BagOfWords, Config, WeightingScheme};
use criterion::{criterion_group, criterion_main, Criterion};

const WORDS: &[&str] = &[
    "the", "project", "gutenberg", "ebook", "of", "war", "and", "peace", "by", "leo",
    "tolstoy", "pride", "prejudice", "alice", "wonderland", "treasure", "island", "great",
    "expectations", "tale", "two", "cities", "strange", "case", "doctor",
];

/// deterministic synthetic corpus with a growing tail vocabulary
fn make_docs(n: usize) -> Vec<String> {
    let mut state = 0x1234_5678u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    (0..n)
        .map(|i| {
            let mut doc = String::new();
            for _ in 0..64 {
                doc.push_str(WORDS[next() as usize % WORDS.len()]);
                doc.push(' ');
            }
            doc.push_str(&format!("term{} term{}", i % 97, next() % 500));
            doc
        })
        .collect()
}

fn ingest_and_weight_benchmark(c: &mut Criterion) {
    let docs = make_docs(2_000);

    c.bench_function("add_documents", |b| {
        b.iter(|| {
            let model: BagOfWords = BagOfWords::new(Config::default());
            model.add_documents(&docs).unwrap();
            model
        });
    });

    c.bench_function("par_add_documents", |b| {
        b.iter(|| {
            let model: BagOfWords = BagOfWords::new(Config::default());
            model.par_add_documents(&docs).unwrap();
            model
        });
    });

    let model: BagOfWords =
        BagOfWords::new(Config::default().with_weighting(WeightingScheme::TfIdf));
    model.add_documents(&docs).unwrap();

    c.bench_function("doc_vectors_weighted_tfidf", |b| {
        b.iter(|| model.doc_vectors_weighted().unwrap());
    });
}

criterion_group!(benches, ingest_and_weight_benchmark);
criterion_main!(benches);
