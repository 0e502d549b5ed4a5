use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use super::core::Language;
use crate::error::SessionError;

/// Trait for different word selection strategies
pub trait WordSelector {
    fn select_words(
        &self,
        language: &Language,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, SessionError>;
}

/// Shuffled draw without repetition
pub struct RandomSelector;

impl WordSelector for RandomSelector {
    fn select_words(
        &self,
        language: &Language,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, SessionError> {
        draw(&language.words, count, rng)
    }
}

/// Uniform permutation of `dictionary` cut down to `count` words.
///
/// Asking for more words than the dictionary has returns every word once.
pub fn draw<R: Rng + ?Sized>(
    dictionary: &[String],
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, SessionError> {
    if dictionary.is_empty() {
        return Err(SessionError::EmptyWordSet);
    }

    let mut words = dictionary.to_vec();
    words.shuffle(rng);
    words.truncate(count.min(dictionary.len()));
    Ok(words)
}
