// Library surface for headless/integration tests and reuse.
// The terminal front-end in main.rs only renders and forwards keys.
pub mod app_dirs;
pub mod config;
pub mod engine;
pub mod error;
pub mod language;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod stats;
pub mod typing_policy;
pub mod util;
pub mod word_generator;

pub use engine::{AdvanceResult, SessionEngine, TickResult};
pub use error::{LanguageError, SessionError, SetupError};
pub use session::{Cursor, LetterStatus, Phase, SessionConfig, WordSlot, WordStatus};
pub use stats::Score;
