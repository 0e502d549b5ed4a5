pub mod core;
pub mod selector;

pub use self::core::Language;
pub use selector::{draw, RandomSelector, WordSelector};
