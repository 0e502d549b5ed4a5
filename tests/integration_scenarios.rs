use assert_matches::assert_matches;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wordrush::language::draw;
use wordrush::{LetterStatus, SessionConfig, SessionEngine, SessionError, WordStatus};

fn config(duration_secs: u64) -> SessionConfig {
    SessionConfig {
        duration_secs,
        number_of_words: 50,
    }
}

fn letters(engine: &SessionEngine, index: usize) -> Vec<LetterStatus> {
    engine.words()[index]
        .letters()
        .iter()
        .map(|l| l.status)
        .collect()
}

#[test]
fn scenario_a_two_word_dictionary() {
    let dictionary = vec!["cat".to_string(), "dog".to_string()];
    let drawn = draw(&dictionary, 2, &mut StdRng::seed_from_u64(2024)).unwrap();

    let engine = SessionEngine::new(&drawn, config(60)).unwrap();
    assert_eq!(engine.words().len(), 2);
    for (slot, word) in engine.words().iter().zip(&drawn) {
        assert_eq!(slot.text(), word);
        assert_eq!(
            slot.letters().iter().map(|l| l.expected).collect::<String>(),
            *word
        );
    }
    let mut texts: Vec<&str> = engine.words().iter().map(|w| w.text()).collect();
    texts.sort();
    assert_eq!(texts, vec!["cat", "dog"]);
}

#[test]
fn scenario_b_marked_word_advances() {
    let mut engine = SessionEngine::new(["cat", "dog"], config(60)).unwrap();
    engine.start().unwrap();

    engine.set_typed_text("cap").unwrap();
    assert_eq!(
        letters(&engine, 0),
        vec![
            LetterStatus::Correct,
            LetterStatus::Correct,
            LetterStatus::Incorrect
        ]
    );

    let advance = engine.submit_word().unwrap();
    assert!(advance.completed);
    assert!(!advance.game_over);
    assert_eq!(engine.words()[0].status(), WordStatus::CompletedMarked);
    assert_eq!(engine.active_word().unwrap().text(), "dog");
}

#[test]
fn scenario_c_unfinished_word_cannot_be_submitted() {
    let mut engine = SessionEngine::new(["dog", "cat"], config(60)).unwrap();
    engine.start().unwrap();
    engine.set_typed_text("do").unwrap();

    assert_matches!(
        engine.submit_word(),
        Err(SessionError::PrematureSubmit { .. })
    );
    assert_eq!(engine.active_word().unwrap().text(), "dog");
    assert_eq!(engine.words()[0].status(), WordStatus::Active);
    assert_eq!(engine.typed_text(), "do");
}

#[test]
fn scenario_d_single_word_session() {
    for duration in [30_u64, 60, 45] {
        let mut engine = SessionEngine::new(["hi"], config(duration)).unwrap();
        engine.start().unwrap();
        engine.set_typed_text("hi").unwrap();

        assert!(engine.submit_word().unwrap().game_over);
        let score = engine.score().unwrap();
        assert_eq!(score.words_per_minute, (60.0 / duration as f64).round());
        assert_eq!(score.accuracy, 100.0);
    }
}

#[test]
fn scenario_e_timeout_with_nothing_typed() {
    let mut engine = SessionEngine::new(["cat", "dog"], config(10)).unwrap();
    engine.start().unwrap();

    let mut ticks = 0;
    while !engine.tick().unwrap().finished {
        ticks += 1;
    }
    assert_eq!(ticks, 9);

    let score = engine.score().unwrap();
    assert_eq!(score.words_per_minute, 0.0);
    assert_eq!(score.accuracy, 0.0);
}

#[test]
fn score_is_frozen_after_finish() {
    let mut engine = SessionEngine::new(["hi", "yo"], config(1)).unwrap();
    engine.start().unwrap();
    engine.set_typed_text("hx").unwrap();
    engine.tick().unwrap();

    let score = engine.score().unwrap();
    assert!(engine.set_typed_text("hi").is_err());
    assert!(engine.submit_word().is_err());
    assert_eq!(engine.score(), Some(score));
    assert_eq!(score.correct_letters, 1);
    assert_eq!(score.incorrect_letters, 1);
}
