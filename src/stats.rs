use serde::Serialize;

use crate::session::{LetterStatus, WordSlot, WordStatus};
use crate::util::{percentage, round_to};

/// Final result of a session, frozen at the moment it finishes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub words_per_minute: f64,
    pub accuracy: f64,
    pub correct_words: usize,
    pub correct_letters: usize,
    pub incorrect_letters: usize,
}

/// Raw counts collected from every word slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub correct_words: usize,
    pub correct_letters: usize,
    pub incorrect_letters: usize,
}

impl Tally {
    /// Letters are counted on every slot, including a half-typed active word.
    pub fn from_words(words: &[WordSlot]) -> Self {
        words.iter().fold(Self::default(), |mut tally, word| {
            if word.status() == WordStatus::CompletedCorrect {
                tally.correct_words += 1;
            }
            tally.correct_letters += word.count(LetterStatus::Correct);
            tally.incorrect_letters += word.count(LetterStatus::Incorrect);
            tally
        })
    }

    pub fn evaluated_letters(&self) -> usize {
        self.correct_letters + self.incorrect_letters
    }
}

/// Percentage of evaluated letters that were correct, two decimals. Zero when nothing
/// was evaluated.
pub fn accuracy(tally: &Tally) -> f64 {
    percentage(tally.correct_letters, tally.evaluated_letters())
        .map(|acc| round_to(acc, 2))
        .unwrap_or(0.0)
}

pub fn words_per_minute(correct_words: usize, duration_secs: u64) -> f64 {
    if duration_secs == 0 {
        return 0.0;
    }
    round_to(correct_words as f64 * (60.0 / duration_secs as f64), 0)
}

pub fn compute_score(words: &[WordSlot], duration_secs: u64) -> Score {
    let tally = Tally::from_words(words);

    Score {
        words_per_minute: words_per_minute(tally.correct_words, duration_secs),
        accuracy: accuracy(&tally),
        correct_words: tally.correct_words,
        correct_letters: tally.correct_letters,
        incorrect_letters: tally.incorrect_letters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::LetterStatus::*;

    fn slot(text: &str, statuses: &[LetterStatus], status: WordStatus) -> WordSlot {
        let mut word = WordSlot::new(text);
        word.apply_letter_statuses(statuses);
        word.set_status(status);
        word
    }

    #[test]
    fn test_tally_counts_every_slot() {
        let words = vec![
            slot("cat", &[Correct, Correct, Correct], WordStatus::CompletedCorrect),
            slot("dog", &[Correct, Incorrect, Correct], WordStatus::CompletedMarked),
            slot("fox", &[Correct, Pending, Pending], WordStatus::Active),
            slot("owl", &[Pending, Pending, Pending], WordStatus::Pending),
        ];

        let tally = Tally::from_words(&words);
        assert_eq!(
            tally,
            Tally {
                correct_words: 1,
                correct_letters: 6,
                incorrect_letters: 1,
            }
        );
    }

    #[test]
    fn test_accuracy_rounds_to_two_places() {
        let tally = Tally {
            correct_words: 0,
            correct_letters: 2,
            incorrect_letters: 1,
        };
        assert_eq!(accuracy(&tally), 66.67);
    }

    #[test]
    fn test_accuracy_without_letters_is_zero() {
        assert_eq!(accuracy(&Tally::default()), 0.0);
    }

    #[test]
    fn test_accuracy_all_correct_is_hundred() {
        let tally = Tally {
            correct_words: 3,
            correct_letters: 9,
            incorrect_letters: 0,
        };
        assert_eq!(accuracy(&tally), 100.0);
    }

    #[test]
    fn test_words_per_minute_scales_by_duration() {
        assert_eq!(words_per_minute(10, 60), 10.0);
        assert_eq!(words_per_minute(10, 30), 20.0);
        assert_eq!(words_per_minute(1, 45), 1.0);
        assert_eq!(words_per_minute(0, 30), 0.0);
    }

    #[test]
    fn test_compute_score() {
        let words = vec![
            slot("hi", &[Correct, Correct], WordStatus::CompletedCorrect),
            slot("yo", &[Incorrect, Correct], WordStatus::CompletedMarked),
        ];

        let score = compute_score(&words, 60);
        assert_eq!(score.words_per_minute, 1.0);
        assert_eq!(score.accuracy, 75.0);
        assert_eq!(score.correct_words, 1);
        assert_eq!(score.correct_letters, 3);
        assert_eq!(score.incorrect_letters, 1);
    }
}
