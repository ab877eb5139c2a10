use thiserror::Error;

/// Error returned by a [`Tokenizer`](crate::vectorizer::tokenizer::Tokenizer).
///
/// Wraps whatever the tokenizer failed with; the message is shown as is.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct TokenizeError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl TokenizeError {
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self { source: err.into() }
    }
}

/// Errors produced by the bag-of-words model.
#[derive(Debug, Error)]
pub enum BowError {
    /// The configured tokenizer rejected a document.
    #[error(transparent)]
    Tokenization(#[from] TokenizeError),

    /// The requested operation is not defined for the model's configuration.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(&'static str),
}

pub type Result<T> = std::result::Result<T, BowError>;
