use serde::{Deserialize, Serialize};

use crate::stats::Score;

pub const DEFAULT_DURATION_SECS: u64 = 30;
pub const DEFAULT_NUMBER_OF_WORDS: usize = 50;

/// Lifecycle of a single session
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    Pending,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSlot {
    pub expected: char,
    pub status: LetterStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordStatus {
    Pending,
    Active,
    CompletedCorrect,
    CompletedMarked,
}

/// One target word together with the verdict for each of its letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSlot {
    text: String,
    letters: Vec<LetterSlot>,
    status: WordStatus,
}

impl WordSlot {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            letters: text
                .chars()
                .map(|expected| LetterSlot {
                    expected,
                    status: LetterStatus::Pending,
                })
                .collect(),
            status: WordStatus::Pending,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn letters(&self) -> &[LetterSlot] {
        &self.letters
    }

    pub fn status(&self) -> WordStatus {
        self.status
    }

    /// Number of letters (chars, not bytes)
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn count(&self, status: LetterStatus) -> usize {
        self.letters.iter().filter(|l| l.status == status).count()
    }

    pub(crate) fn set_status(&mut self, status: WordStatus) {
        self.status = status;
    }

    /// Overwrites every letter verdict. Callers only do this for the active word.
    pub(crate) fn apply_letter_statuses(&mut self, statuses: &[LetterStatus]) {
        debug_assert_eq!(statuses.len(), self.letters.len());
        for (slot, status) in self.letters.iter_mut().zip(statuses) {
            slot.status = *status;
        }
    }
}

/// Position of the highlighted letter. `letter_index == word.len()` means the word is
/// full and waiting for the commit key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub word_index: usize,
    pub letter_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub duration_secs: u64,
    pub number_of_words: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            number_of_words: DEFAULT_NUMBER_OF_WORDS,
        }
    }
}

/// Everything the renderer needs to paint a session. Only the engine mutates it.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub(crate) phase: Phase,
    pub(crate) word_index: usize,
    pub(crate) time_remaining: u64,
    pub(crate) typed_buffer: String,
    pub(crate) words: Vec<WordSlot>,
    pub(crate) cursor: Cursor,
    pub(crate) score: Option<Score>,
}

impl SessionState {
    pub(crate) fn new(words: Vec<WordSlot>, duration_secs: u64) -> Self {
        Self {
            phase: Phase::Idle,
            word_index: 0,
            time_remaining: duration_secs,
            typed_buffer: String::new(),
            words,
            cursor: Cursor::default(),
            score: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn time_remaining(&self) -> u64 {
        self.time_remaining
    }

    pub fn typed_text(&self) -> &str {
        &self.typed_buffer
    }

    pub fn words(&self) -> &[WordSlot] {
        &self.words
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }

    pub fn active_word(&self) -> Option<&WordSlot> {
        match self.phase {
            Phase::Running => self.words.get(self.word_index),
            _ => None,
        }
    }

    pub(crate) fn active_word_mut(&mut self) -> Option<&mut WordSlot> {
        match self.phase {
            Phase::Running => self.words.get_mut(self.word_index),
            _ => None,
        }
    }
}
