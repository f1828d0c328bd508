//! Prefix completion over registered command words.

use std::sync::{Arc, PoisonError, RwLock};

/// A shared, append-only list of completion candidates.
///
/// Cloning gives another handle to the same list.
#[derive(Debug, Clone, Default)]
pub struct Completions {
    words: Arc<RwLock<Vec<String>>>,
}

impl Completions {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends words to the index. Words are never removed.
    pub fn register<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let new_words: Vec<String> = words.into_iter().map(Into::into).collect();
        let mut guard = self.words.write().unwrap_or_else(PoisonError::into_inner);
        guard.extend(new_words);
    }

    /// Returns every registered word starting with `prefix`, ignoring case,
    /// in registration order.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let guard = self.words.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .iter()
            .filter(|word| word.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect()
    }

    /// Number of registered words.
    pub fn len(&self) -> usize {
        self.words.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
