pub mod config;
pub mod corpus;
pub mod tfidf;
pub mod token;
pub mod tokenizer;
pub mod vocab;

use std::{marker::PhantomData, sync::Arc};

use num::Float;
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::{
    error::{BowError, Result},
    vectorizer::{
        config::{Config, WeightingScheme},
        corpus::Corpus,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        token::TokenFrequency,
        tokenizer::{DefaultTokenizer, Tokenizer},
        vocab::Vocabulary,
    },
};

/// Bag-of-words model
///
/// `BagOfWords<E>` has one generic parameter:
/// - `E`: TF-IDF calculation engine (default `DefaultTFIDFEngine`)
///
/// All operations take `&self`, so one model can be shared between threads.
/// The vocabulary and the document store are locked separately, always in
/// that order.
pub struct BagOfWords<E = DefaultTFIDFEngine> {
    config: Config,
    tokenizer: Arc<dyn Tokenizer>,
    /// token → index
    vocab: Vocabulary,
    /// stored document vectors
    corpus: Corpus,
    _marker: PhantomData<E>,
}

impl<E> std::fmt::Debug for BagOfWords<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BagOfWords")
            .field("config", &self.config)
            .field("vocab_size", &self.vocab.len())
            .field("doc_num", &self.corpus.doc_num())
            .finish()
    }
}

impl Default for BagOfWords {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<E> BagOfWords<E> {
    /// Create an empty model
    /// A config without tokenizer uses `DefaultTokenizer`.
    pub fn new(config: Config) -> Self {
        let tokenizer: Arc<dyn Tokenizer> = match &config.tokenizer {
            Some(tokenizer) => Arc::clone(tokenizer),
            None => Arc::new(DefaultTokenizer),
        };
        Self {
            config,
            tokenizer,
            vocab: Vocabulary::new(),
            corpus: Corpus::new(),
            _marker: PhantomData,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tokenize `doc` and store its vector.
    ///
    /// A document without tokens is accepted and changes nothing.
    pub fn add_document(&self, doc: &str) -> Result<()> {
        let tokens = self.tokenizer.tokenize(doc).map_err(|err| {
            debug!(error = %err, "tokenizer rejected document");
            BowError::from(err)
        })?;
        if tokens.is_empty() {
            trace!("skipping document without tokens");
            return Ok(());
        }
        trace!(tokens = tokens.len(), "document tokenized");

        let freq: TokenFrequency = tokens.iter().collect();
        self.add_token_frequency(&freq);
        Ok(())
    }

    /// Store an already aggregated document.
    ///
    /// Same as `add_document` after tokenization; empty input is ignored.
    pub fn add_token_frequency(&self, freq: &TokenFrequency) {
        if freq.is_empty() {
            return;
        }
        let encoded = self
            .vocab
            .extend_and_encode(freq, |count| self.config.slot_value(count));
        let width = encoded.vector.len();
        if encoded.new_tokens > 0 {
            debug!(new_tokens = encoded.new_tokens, vocab_size = width, "vocabulary extended");
        }
        let doc_id = self.corpus.push(encoded.vector);
        trace!(doc_id, width, "document vector stored");
    }

    /// Add documents one after another.
    ///
    /// Stops at the first failure; documents before it stay ingested.
    pub fn add_documents<I, T>(&self, docs: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for (index, doc) in docs.into_iter().enumerate() {
            if let Err(err) = self.add_document(doc.as_ref()) {
                warn!(index, error = %err, "batch ingestion stopped");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Add documents on the rayon thread pool.
    ///
    /// Store order follows completion, not `docs` order. Every document is
    /// attempted; the first failure in input order is returned and
    /// documents that succeeded stay ingested.
    pub fn par_add_documents<T>(&self, docs: &[T]) -> Result<()>
    where
        T: AsRef<str> + Sync,
        E: Sync,
    {
        docs.par_iter()
            .map(|doc| self.add_document(doc.as_ref()))
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<()>>()
            .map_err(|err| {
                warn!(error = %err, "parallel ingestion had failures");
                err
            })
    }

    /// Tokens ordered by index
    pub fn vocab(&self) -> Vec<String> {
        self.vocab.tokens()
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    pub fn doc_num(&self) -> usize {
        self.corpus.doc_num()
    }

    pub fn token_index(&self, token: &str) -> Option<usize> {
        self.vocab.index_of(token)
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.vocab.contains(token)
    }

    /// Copy of every stored vector, zero padded to the vocabulary size.
    pub fn raw_doc_vectors(&self) -> Vec<Vec<u32>> {
        self.snapshot()
    }

    /// Consistent, rectangular copy of the store
    fn snapshot(&self) -> Vec<Vec<u32>> {
        let vocab = self.vocab.read();
        let docs = self.corpus.read();
        corpus::padded(&docs, vocab.len())
    }

    /// Document vectors weighted with the configured scheme, as `f64`.
    pub fn doc_vectors_weighted(&self) -> Result<Vec<Vec<f64>>>
    where
        E: TFIDFEngine<f64>,
    {
        self.doc_vectors_weighted_as::<f64>()
    }

    /// Document vectors weighted with the configured scheme.
    ///
    /// TF-IDF together with binary encoding is rejected, even on an empty
    /// model.
    pub fn doc_vectors_weighted_as<N>(&self) -> Result<Vec<Vec<N>>>
    where
        N: Float + Send + Sync,
        E: TFIDFEngine<N>,
    {
        match self.config.weighting {
            WeightingScheme::TfIdf if self.config.use_binary_encoding => {
                debug!(weighting = %self.config.weighting, "tf-idf requested on binary vectors");
                Err(BowError::UnsupportedConfiguration(
                    "tf-idf weighting is not supported with binary encoding",
                ))
            }
            WeightingScheme::TfIdf => Ok(self.compute_tfidf_as::<N>()),
            WeightingScheme::Raw => Ok(self
                .snapshot()
                .iter()
                .map(|doc| E::raw_vec(doc))
                .collect()),
        }
    }

    /// TF-IDF of the stored vectors regardless of the configured scheme.
    pub fn compute_tfidf(&self) -> Vec<Vec<f64>>
    where
        E: TFIDFEngine<f64>,
    {
        self.compute_tfidf_as::<f64>()
    }

    /// TF-IDF of the stored vectors as `N`; empty when no document exists.
    pub fn compute_tfidf_as<N>(&self) -> Vec<Vec<N>>
    where
        N: Float + Send + Sync,
        E: TFIDFEngine<N>,
    {
        let docs = self.snapshot();
        if docs.is_empty() {
            return Vec::new();
        }
        let width = docs.iter().map(Vec::len).max().unwrap_or(0);
        let doc_freq = corpus::doc_freq(&docs, width);
        let idf = E::idf_vec(&doc_freq, docs.len() as u64);
        debug!(doc_num = docs.len(), vocab_size = width, "computing tf-idf");
        docs.par_iter()
            .map(|doc| E::tfidf_vec(doc, &idf))
            .collect()
    }
}
