use tracing::{debug, info};

use crate::error::SessionError;
use crate::session::{Cursor, Phase, SessionConfig, SessionState, WordSlot, WordStatus};
use crate::stats::{compute_score, Score};
use crate::typing_policy::{completion_status, erase_last, evaluate_letters};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    pub time_remaining: u64,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceResult {
    /// The active word was accepted and frozen
    pub completed: bool,
    /// The accepted word had at least one wrong letter
    pub marked: bool,
    pub game_over: bool,
}

/// Drives one typing session from idle to finished.
///
/// Every operation either applies completely or returns an error and leaves the
/// session exactly as it was.
#[derive(Debug, Clone)]
pub struct SessionEngine {
    config: SessionConfig,
    state: SessionState,
}

impl SessionEngine {
    pub fn new<I, S>(words: I, config: SessionConfig) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if config.duration_secs == 0 {
            return Err(SessionError::InvalidConfig(
                "duration must be at least one second".to_string(),
            ));
        }

        let slots: Vec<WordSlot> = words
            .into_iter()
            .map(|w| WordSlot::new(w.as_ref()))
            .filter(|slot| !slot.is_empty())
            .collect();

        if slots.is_empty() {
            return Err(SessionError::EmptyWordSet);
        }

        Ok(Self {
            state: SessionState::new(slots, config.duration_secs),
            config,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read-only view for renderers
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn words(&self) -> &[WordSlot] {
        self.state.words()
    }

    pub fn cursor(&self) -> Cursor {
        self.state.cursor
    }

    pub fn time_remaining(&self) -> u64 {
        self.state.time_remaining
    }

    pub fn typed_text(&self) -> &str {
        &self.state.typed_buffer
    }

    pub fn active_word(&self) -> Option<&WordSlot> {
        self.state.active_word()
    }

    pub fn is_idle(&self) -> bool {
        self.state.phase == Phase::Idle
    }

    pub fn is_running(&self) -> bool {
        self.state.phase == Phase::Running
    }

    pub fn has_finished(&self) -> bool {
        self.state.phase == Phase::Finished
    }

    /// The frozen score, available once the session has finished
    pub fn score(&self) -> Option<Score> {
        self.state.score
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        self.require("start", Phase::Idle)?;

        let state = &mut self.state;
        state.phase = Phase::Running;
        state.word_index = 0;
        state.time_remaining = self.config.duration_secs;
        state.typed_buffer.clear();
        state.words[0].set_status(WordStatus::Active);
        state.cursor = Cursor::default();

        info!(
            words = state.words.len(),
            duration_secs = self.config.duration_secs,
            "session started"
        );
        Ok(())
    }

    pub fn tick(&mut self) -> Result<TickResult, SessionError> {
        self.require("tick", Phase::Running)?;

        self.state.time_remaining = self.state.time_remaining.saturating_sub(1);
        if self.state.time_remaining == 0 {
            self.finish("time expired");
        }

        Ok(TickResult {
            time_remaining: self.state.time_remaining,
            finished: self.has_finished(),
        })
    }

    /// Replaces the text typed for the active word and re-judges all of its letters.
    pub fn set_typed_text(&mut self, text: &str) -> Result<(), SessionError> {
        self.require("type", Phase::Running)?;

        let word_index = self.state.word_index;
        let word = self
            .state
            .active_word_mut()
            .ok_or(SessionError::InvalidTransition {
                operation: "type",
                phase: Phase::Running,
            })?;
        let statuses = evaluate_letters(word.letters(), text)?;
        word.apply_letter_statuses(&statuses);

        self.state.cursor = Cursor {
            word_index,
            letter_index: text.chars().count(),
        };
        self.state.typed_buffer = text.to_string();
        Ok(())
    }

    /// Commits the active word. Only a fully typed word can be committed.
    pub fn submit_word(&mut self) -> Result<AdvanceResult, SessionError> {
        self.require("submit", Phase::Running)?;

        let typed = self.state.typed_buffer.chars().count();
        let word_index = self.state.word_index;
        let word = &mut self.state.words[word_index];
        if typed != word.len() {
            return Err(SessionError::PrematureSubmit {
                typed,
                expected: word.len(),
            });
        }

        let status = completion_status(word.letters());
        word.set_status(status);
        debug!(word_index, word = word.text(), ?status, "word submitted");

        self.state.typed_buffer.clear();
        let marked = status == WordStatus::CompletedMarked;

        let next = word_index + 1;
        if next < self.state.words.len() {
            self.state.word_index = next;
            self.state.words[next].set_status(WordStatus::Active);
            self.state.cursor = Cursor {
                word_index: next,
                letter_index: 0,
            };
            return Ok(AdvanceResult {
                completed: true,
                marked,
                game_over: false,
            });
        }

        self.finish("words exhausted");
        Ok(AdvanceResult {
            completed: true,
            marked,
            game_over: true,
        })
    }

    /// Removes the last letter typed for the active word. Completed words stay frozen,
    /// so this never crosses a word boundary.
    pub fn backspace(&mut self) -> Result<(), SessionError> {
        self.require("erase", Phase::Running)?;

        let shorter = erase_last(&self.state.typed_buffer).ok_or(SessionError::AtWordStart)?;
        self.set_typed_text(&shorter)
    }

    /// Input-source entry point for a printable key: the first key starts the session.
    pub fn type_char(&mut self, c: char) -> Result<(), SessionError> {
        if self.is_idle() {
            self.start()?;
        }

        let mut text = self.state.typed_buffer.clone();
        text.push(c);
        self.set_typed_text(&text)
    }

    fn require(&self, operation: &'static str, phase: Phase) -> Result<(), SessionError> {
        if self.state.phase == phase {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                operation,
                phase: self.state.phase,
            })
        }
    }

    fn finish(&mut self, reason: &str) {
        self.state.phase = Phase::Finished;
        let score = compute_score(&self.state.words, self.config.duration_secs);
        self.state.score = Some(score);

        info!(
            reason,
            wpm = score.words_per_minute,
            accuracy = score.accuracy,
            "session finished"
        );
    }
}
