use crate::error::SessionError;
use crate::session::{LetterSlot, LetterStatus, WordStatus};

/// Recomputes every letter verdict of a word from the full typed text.
///
/// Letters covered by `typed` are `Correct` or `Incorrect`, the rest go back to
/// `Pending`. Text longer than the word is refused rather than clipped.
pub fn evaluate_letters(
    letters: &[LetterSlot],
    typed: &str,
) -> Result<Vec<LetterStatus>, SessionError> {
    let len = typed.chars().count();
    if len > letters.len() {
        return Err(SessionError::OutOfBoundsInput {
            len,
            max: letters.len(),
        });
    }

    let mut typed_chars = typed.chars();
    Ok(letters
        .iter()
        .map(|slot| match typed_chars.next() {
            Some(c) if c == slot.expected => LetterStatus::Correct,
            Some(_) => LetterStatus::Incorrect,
            None => LetterStatus::Pending,
        })
        .collect())
}

/// Final verdict for a submitted word
pub fn completion_status(letters: &[LetterSlot]) -> WordStatus {
    if letters.iter().all(|l| l.status == LetterStatus::Correct) {
        WordStatus::CompletedCorrect
    } else {
        WordStatus::CompletedMarked
    }
}

/// `typed` with its last char removed, or `None` when there is nothing to remove
pub fn erase_last(typed: &str) -> Option<String> {
    let mut chars = typed.chars();
    chars.next_back()?;
    Some(chars.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::WordSlot;
    use assert_matches::assert_matches;

    use crate::session::LetterStatus::*;

    #[test]
    fn test_partial_text_leaves_tail_pending() {
        let word = WordSlot::new("dog");
        let statuses = evaluate_letters(word.letters(), "dx").unwrap();
        assert_eq!(statuses, vec![Correct, Incorrect, Pending]);
    }

    #[test]
    fn test_empty_text_is_all_pending() {
        let word = WordSlot::new("dog");
        let statuses = evaluate_letters(word.letters(), "").unwrap();
        assert_eq!(statuses, vec![Pending, Pending, Pending]);
    }

    #[test]
    fn test_too_long_text_is_refused() {
        let word = WordSlot::new("hi");
        assert_matches!(
            evaluate_letters(word.letters(), "hit"),
            Err(SessionError::OutOfBoundsInput { len: 3, max: 2 })
        );
    }

    #[test]
    fn test_multibyte_chars_compare_per_char() {
        let word = WordSlot::new("niño");
        let statuses = evaluate_letters(word.letters(), "nino").unwrap();
        assert_eq!(statuses, vec![Correct, Correct, Incorrect, Correct]);
    }

    #[test]
    fn test_completion_requires_every_letter_correct() {
        let mut word = WordSlot::new("cat");
        word.apply_letter_statuses(&[Correct, Correct, Correct]);
        assert_eq!(completion_status(word.letters()), WordStatus::CompletedCorrect);

        word.apply_letter_statuses(&[Correct, Correct, Incorrect]);
        assert_eq!(completion_status(word.letters()), WordStatus::CompletedMarked);
    }

    #[test]
    fn test_erase_last_char() {
        assert_eq!(erase_last("cat").as_deref(), Some("ca"));
        assert_eq!(erase_last("ñ").as_deref(), Some(""));
        assert_eq!(erase_last(""), None);
    }
}
