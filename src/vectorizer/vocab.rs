use indexmap::IndexSet;
use parking_lot::{RwLock, RwLockReadGuard, RwLockUpgradableReadGuard, RwLockWriteGuard};

use crate::vectorizer::token::TokenFrequency;

/// Token → index mapping
/// The position of a token in the set is its index, so indices are always
/// the contiguous range `0..len` and never move once assigned.
#[derive(Debug, Default)]
pub struct Vocabulary {
    tokens: RwLock<IndexSet<Box<str>>>,
}

/// Result of [`Vocabulary::extend_and_encode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// slot `i` holds the value for token `i`
    pub vector: Vec<u32>,
    /// tokens this call added to the vocabulary
    pub new_tokens: usize,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.read().is_empty()
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.tokens.read().get_index_of(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.read().contains(token)
    }

    /// tokens ordered by index
    pub fn tokens(&self) -> Vec<String> {
        self.tokens.read().iter().map(|t| t.to_string()).collect()
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, IndexSet<Box<str>>> {
        self.tokens.read()
    }

    /// Adds the unseen tokens of `freq` and encodes `freq` as a vector.
    ///
    /// Unseen tokens are appended in ascending lexical order. The vector is
    /// built under the same lock acquisition, downgraded to shared access, so
    /// its width always covers every index it encodes. `slot` maps a token
    /// count to the stored value.
    pub fn extend_and_encode<F>(&self, freq: &TokenFrequency, slot: F) -> Encoded
    where
        F: Fn(u32) -> u32,
    {
        // fast path: every token is already known, shared access is enough
        {
            let guard = self.tokens.read();
            if Self::covers(&guard, freq) {
                return Encoded {
                    vector: Self::encode(&guard, freq, &slot),
                    new_tokens: 0,
                };
            }
        }

        // another writer may have added the missing tokens in between
        let guard = self.tokens.upgradable_read();
        let (guard, new_tokens) = if Self::covers(&guard, freq) {
            (RwLockUpgradableReadGuard::downgrade(guard), 0)
        } else {
            let mut tokens = RwLockUpgradableReadGuard::upgrade(guard);
            let before = tokens.len();
            for token in freq.sorted_token_set() {
                if !tokens.contains(token) {
                    tokens.insert(token.into());
                }
            }
            let added = tokens.len() - before;
            (RwLockWriteGuard::downgrade(tokens), added)
        };
        Encoded {
            vector: Self::encode(&guard, freq, &slot),
            new_tokens,
        }
    }

    fn covers(tokens: &IndexSet<Box<str>>, freq: &TokenFrequency) -> bool {
        freq.iter().all(|(token, _)| tokens.contains(token))
    }

    fn encode<F>(tokens: &IndexSet<Box<str>>, freq: &TokenFrequency, slot: &F) -> Vec<u32>
    where
        F: Fn(u32) -> u32,
    {
        let mut vector = vec![0; tokens.len()];
        for (token, count) in freq.iter() {
            if let Some(idx) = tokens.get_index_of(token) {
                vector[idx] = slot(count);
            }
        }
        vector
    }
}
