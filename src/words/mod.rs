mod dataset;

use crate::core::{Difficulty, TargetWord};
use crate::error::{Result, WordGameError};
use rand::seq::SliceRandom;

/// In-memory collection of playable words.
///
/// The default store holds the embedded dataset; [`WordStore::with_words`]
/// accepts a custom pool, which is how tests and future loaders plug in.
pub struct WordStore {
    words: Vec<TargetWord>,
}

impl WordStore {
    /// Build the store from the embedded dataset.
    pub fn new() -> Self {
        let words = dataset::WORDS
            .iter()
            .map(|&(id, word, definition, difficulty)| {
                TargetWord::new(id, word, definition, difficulty)
            })
            .collect();

        Self { words }
    }

    /// Build a store over a caller-supplied pool.
    pub fn with_words(words: Vec<TargetWord>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in the store, in dataset order.
    pub fn words(&self) -> &[TargetWord] {
        &self.words
    }

    /// Look up a word by its id.
    pub fn get(&self, id: u32) -> Option<&TargetWord> {
        self.words.iter().find(|w| w.id == id)
    }

    /// The subset matching `difficulty`, or the whole pool for `None`.
    pub fn filter(&self, difficulty: Option<Difficulty>) -> Vec<&TargetWord> {
        self.words
            .iter()
            .filter(|w| difficulty.map_or(true, |d| w.difficulty == d))
            .collect()
    }

    /// Draw a random word, optionally restricted to one difficulty.
    pub fn pick(&self, difficulty: Option<Difficulty>) -> Result<TargetWord> {
        let pool = self.filter(difficulty);
        let mut rng = rand::thread_rng();

        pool.choose(&mut rng).map(|w| (*w).clone()).ok_or_else(|| {
            WordGameError::EmptyWordSet(
                difficulty.map_or_else(|| "any".to_string(), |d| d.to_string()),
            )
        })
    }
}

impl Default for WordStore {
    fn default() -> Self {
        Self::new()
    }
}
