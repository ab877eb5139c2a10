use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vectorizer::tokenizer::Tokenizer;

/// Weighting applied by `doc_vectors_weighted`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightingScheme {
    /// stored counts (or presence flags) as floats
    #[default]
    Raw,
    /// smoothed TF-IDF over the stored counts
    TfIdf,
}

impl WeightingScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightingScheme::Raw => "raw",
            WeightingScheme::TfIdf => "tfidf",
        }
    }
}

impl fmt::Display for WeightingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown weighting scheme `{0}`")]
pub struct ParseWeightingSchemeError(String);

impl FromStr for WeightingScheme {
    type Err = ParseWeightingSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("raw") {
            Ok(WeightingScheme::Raw)
        } else if s.eq_ignore_ascii_case("tfidf") {
            Ok(WeightingScheme::TfIdf)
        } else {
            Err(ParseWeightingSchemeError(s.to_owned()))
        }
    }
}

/// Model configuration
/// Fixed once handed to [`BagOfWords::new`](crate::BagOfWords::new).
///
/// The tokenizer is not part of the serialized form; a missing tokenizer
/// resolves to [`DefaultTokenizer`](crate::DefaultTokenizer).
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// record presence (1/0) instead of counts
    pub use_binary_encoding: bool,
    pub weighting: WeightingScheme,
    #[serde(skip)]
    pub tokenizer: Option<Arc<dyn Tokenizer>>,
}

impl Config {
    pub fn with_binary_encoding(mut self, enabled: bool) -> Self {
        self.use_binary_encoding = enabled;
        self
    }

    pub fn with_weighting(mut self, weighting: WeightingScheme) -> Self {
        self.weighting = weighting;
        self
    }

    pub fn with_tokenizer<T>(mut self, tokenizer: T) -> Self
    where
        T: Tokenizer + 'static,
    {
        self.tokenizer = Some(Arc::new(tokenizer));
        self
    }

    /// value stored in a vector slot for a token seen `count` times
    #[inline]
    pub(crate) fn slot_value(&self, count: u32) -> u32 {
        if self.use_binary_encoding {
            1
        } else {
            count
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("use_binary_encoding", &self.use_binary_encoding)
            .field("weighting", &self.weighting)
            .field("custom_tokenizer", &self.tokenizer.is_some())
            .finish()
    }
}
