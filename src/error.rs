use thiserror::Error;

use crate::session::Phase;

/// Reasons a session operation was refused. A refused call never touches the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {operation} while session is {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: Phase,
    },

    #[error("typed text has {len} chars but the active word only has {max}")]
    OutOfBoundsInput { len: usize, max: usize },

    #[error("word not finished: {typed} of {expected} letters typed")]
    PrematureSubmit { typed: usize, expected: usize },

    #[error("no words to build a session from")]
    EmptyWordSet,

    #[error("nothing to erase at the start of a word")]
    AtWordStart,

    #[error("invalid session config: {0}")]
    InvalidConfig(String),
}

/// Failures while loading an embedded word list.
#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("word list `{0}` not found")]
    NotFound(String),

    #[error("word list `{0}` is not valid utf-8")]
    NotUtf8(String),

    #[error("word list `{name}` could not be parsed")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("word list `{0}` has no usable words")]
    Empty(String),
}

/// Anything that can stop a new session from being put together
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Language(#[from] LanguageError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
