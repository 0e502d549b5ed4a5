use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::SessionEngine;
use crate::error::SetupError;
use crate::language::{Language, RandomSelector, WordSelector};
use crate::session::SessionConfig;

/// Configuration for word generation
#[derive(Debug, Clone)]
pub struct WordGenConfig {
    pub word_set: String,
    /// Fixed seed for a reproducible word order
    pub seed: Option<u64>,
}

/// Draws word lists for new sessions
pub struct WordGenerator {
    config: WordGenConfig,
    rng: StdRng,
}

impl WordGenerator {
    pub fn new(config: WordGenConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn generate_words(&mut self, count: usize) -> Result<Vec<String>, SetupError> {
        let language = Language::load(&self.config.word_set)?;
        let words = RandomSelector.select_words(&language, count, &mut self.rng)?;
        Ok(words)
    }

    /// Fresh idle session over a newly drawn list of `config.number_of_words` words
    pub fn new_session(&mut self, config: SessionConfig) -> Result<SessionEngine, SetupError> {
        let words = self.generate_words(config.number_of_words)?;
        let session = SessionEngine::new(&words, config)?;
        Ok(session)
    }
}
