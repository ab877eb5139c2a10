use parking_lot::{RwLock, RwLockReadGuard};
use rayon::prelude::*;

/// Append-only store of document vectors
/// Each vector is as wide as the vocabulary was when it was built.
/// Order is append order.
#[derive(Debug, Default)]
pub struct Corpus {
    docs: RwLock<Vec<Vec<u32>>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document vector, returns its position
    pub fn push(&self, vector: Vec<u32>) -> usize {
        let mut docs = self.docs.write();
        docs.push(vector);
        docs.len() - 1
    }

    pub fn doc_num(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Vec<Vec<u32>>> {
        self.docs.read()
    }
}

/// Deep copy of `docs`, each vector zero padded to `width`.
///
/// `width` is expected to cover every vector; wider vectors are kept whole.
pub fn padded(docs: &[Vec<u32>], width: usize) -> Vec<Vec<u32>> {
    docs.iter()
        .map(|doc| {
            let mut vec = Vec::with_capacity(width.max(doc.len()));
            vec.extend_from_slice(doc);
            vec.resize(width.max(doc.len()), 0);
            vec
        })
        .collect()
}

/// Number of documents with a non-zero value in each of the `width` slots.
pub fn doc_freq(docs: &[Vec<u32>], width: usize) -> Vec<u64> {
    docs.par_iter()
        .fold(
            || vec![0u64; width],
            |mut df, doc| {
                for (slot, &tf) in df.iter_mut().zip(doc) {
                    if tf > 0 {
                        *slot += 1;
                    }
                }
                df
            },
        )
        .reduce(
            || vec![0u64; width],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_positions() {
        let corpus = Corpus::new();
        assert!(corpus.is_empty());
        assert_eq!(corpus.push(vec![1, 3]), 0);
        assert_eq!(corpus.push(vec![0, 1, 1]), 1);
        assert_eq!(corpus.doc_num(), 2);
    }

    #[test]
    fn padded_is_rectangular_and_independent() {
        let docs = vec![vec![1, 3], vec![0, 1, 1, 1]];
        let mut copy = padded(&docs, 4);
        assert_eq!(copy, vec![vec![1, 3, 0, 0], vec![0, 1, 1, 1]]);
        copy[0][0] = 42;
        assert_eq!(docs[0], vec![1, 3]);
    }

    #[test]
    fn doc_freq_counts_documents_not_occurrences() {
        let docs = vec![vec![0, 1, 2], vec![5, 1], vec![0, 0, 0, 7]];
        assert_eq!(doc_freq(&docs, 4), vec![1, 2, 1, 1]);
        assert_eq!(doc_freq(&[], 3), vec![0, 0, 0]);
    }

    #[test]
    fn concurrent_push_loses_nothing() {
        let corpus = Corpus::new();
        std::thread::scope(|s| {
            for t in 0..8u32 {
                let corpus = &corpus;
                s.spawn(move || {
                    for i in 0..100u32 {
                        corpus.push(vec![t, i]);
                    }
                });
            }
        });
        assert_eq!(corpus.doc_num(), 800);
        let docs = corpus.read();
        let mut seen: Vec<(u32, u32)> = docs.iter().map(|d| (d[0], d[1])).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 800);
    }
}
