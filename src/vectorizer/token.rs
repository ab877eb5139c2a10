use indexmap::IndexMap;

/// TokenFrequency
/// Counts how often each token occurs in a single document.
/// Tokens keep first-seen order; `sorted_token_set` gives the lexical order
/// used when the vocabulary assigns new indices.
///
/// # Examples
/// ```
/// use bow_vectorizer::TokenFrequency;
/// let mut freq = TokenFrequency::new();
/// freq.add_tokens(&["go", "go", "fast"]);
/// assert_eq!(freq.token_sum(), 3);
/// assert_eq!(freq.sorted_token_set(), vec!["fast", "go"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFrequency {
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

impl TokenFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// add one occurrence of `token`
    /// A token's count saturates at `u32::MAX`; `token_sum` keeps counting.
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        match self.token_count.get_mut(token) {
            Some(count) => *count = count.saturating_add(1),
            None => {
                self.token_count.insert(token.to_owned(), 1);
            }
        }
        self.total_token_count += 1;
        self
    }

    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    /// total number of tokens added, duplicates included
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_count.is_empty()
    }

    /// `(token, count)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.token_count.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// distinct tokens in first-seen order
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(String::as_str).collect()
    }

    /// distinct tokens in ascending lexical order
    pub fn sorted_token_set(&self) -> Vec<&str> {
        let mut tokens = self.token_set_ref_str();
        tokens.sort_unstable();
        tokens
    }
}

impl<T> FromIterator<T> for TokenFrequency
where
    T: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut freq = TokenFrequency::new();
        for token in iter {
            freq.add_token(token.as_ref());
        }
        freq
    }
}
