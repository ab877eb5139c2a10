//! This crate is a bag-of-words vectorizer with raw, binary and TF-IDF weighting.

pub mod error;
pub mod vectorizer;

/// Bag-of-Words Model
/// The top-level struct of this crate.
/// It turns a stream of documents into count vectors over a vocabulary that
/// grows as new tokens are seen, and weights them on demand.
///
/// Internally, it holds:
/// - The vocabulary (token → stable index, assigned in lexical order per document)
/// - The document vectors, one per ingested document
/// - The configured tokenizer
///
/// `BagOfWords<E>` has the following generic parameter:
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// # Thread Safety
/// Every operation takes `&self`. Documents may be added from many threads
/// at once while other threads read vectors.
///
/// # Vector shape
/// Stored vectors keep the width the vocabulary had when they were built.
/// Reads pad every vector with zeros to the current vocabulary size, so the
/// returned matrix is always rectangular.
pub use vectorizer::BagOfWords;

/// Model configuration
/// - `use_binary_encoding`: record presence (0/1) instead of counts
/// - `weighting`: `WeightingScheme::Raw` or `WeightingScheme::TfIdf`
/// - `tokenizer`: custom tokenizer, `DefaultTokenizer` when unset
///
/// # Serialization
/// Supported, except for the tokenizer.
pub use vectorizer::config::{Config, WeightingScheme};

/// Tokenizer Trait
/// A single-method trait turning text into ordered tokens.
/// Closures of the form `Fn(&str) -> Result<Vec<String>, TokenizeError>`
/// implement it too.
///
/// `DefaultTokenizer` splits on every char that is not a letter or digit
/// and lowercases letters.
pub use vectorizer::tokenizer::{DefaultTokenizer, Tokenizer};

/// Token Frequency structure
/// Per-document token counts, used to build one document vector.
pub use vectorizer::token::TokenFrequency;

/// TF IDF Calculation Engine Trait
/// A trait that defines how stored count vectors become weighted vectors.
///
/// `DefaultTFIDFEngine` uses the smoothed IDF `ln((N + 1) / (df + 1)) + 1`
/// and supports the following output types:
/// - f32
/// - f64
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

pub use error::{BowError, Result, TokenizeError};
