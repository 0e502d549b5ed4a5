use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;

use crate::error::LanguageError;

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

/// A named word list embedded into the binary
#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    /// Loads `src/lang/<file_name>.json`
    pub fn load(file_name: &str) -> Result<Self, LanguageError> {
        let file = LANG_DIR
            .get_file(format!("{file_name}.json"))
            .ok_or_else(|| LanguageError::NotFound(file_name.to_string()))?;

        let file_as_str = file
            .contents_utf8()
            .ok_or_else(|| LanguageError::NotUtf8(file_name.to_string()))?;

        Self::from_json(file_name, file_as_str)
    }

    pub fn from_json(name: &str, json: &str) -> Result<Self, LanguageError> {
        let mut lang: Language = from_str(json).map_err(|source| LanguageError::Parse {
            name: name.to_string(),
            source,
        })?;

        lang.words = lang
            .words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        if lang.words.is_empty() {
            return Err(LanguageError::Empty(name.to_string()));
        }

        Ok(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_language_load_english() {
        let lang = Language::load("english").unwrap();

        assert_eq!(lang.name, "english");
        assert!(!lang.words.is_empty());
        assert!(lang.size > 0);
    }

    #[test]
    fn test_language_load_english_long() {
        let lang = Language::load("english_long").unwrap();

        assert_eq!(lang.name, "english_long");
        assert!(lang.words.iter().all(|w| w.chars().count() >= 6));
    }

    #[test]
    fn test_embedded_words_are_plain_lowercase() {
        for name in ["english", "english_long"] {
            let lang = Language::load(name).unwrap();
            assert!(lang
                .words
                .iter()
                .all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
        }
    }

    #[test]
    fn test_language_deserialization() {
        let json_data = r#"
        {
            "name": "test",
            "size": 3,
            "words": ["hello", "world", "test"]
        }
        "#;

        let lang = Language::from_json("test", json_data).unwrap();

        assert_eq!(lang.name, "test");
        assert_eq!(lang.size, 3);
        assert_eq!(lang.words, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_blank_words_are_dropped() {
        let json_data = r#"{"name": "t", "size": 3, "words": [" cat ", "", "  "]}"#;

        let lang = Language::from_json("t", json_data).unwrap();
        assert_eq!(lang.words, vec!["cat"]);
    }

    #[test]
    fn test_only_blank_words_is_empty() {
        let json_data = r#"{"name": "t", "size": 1, "words": [" "]}"#;
        assert_matches!(
            Language::from_json("t", json_data),
            Err(LanguageError::Empty(name)) if name == "t"
        );
    }

    #[test]
    fn test_malformed_json() {
        assert_matches!(
            Language::from_json("bad", "{ nope"),
            Err(LanguageError::Parse { .. })
        );
    }

    #[test]
    fn test_unknown_language_file() {
        assert_matches!(
            Language::load("nonexistent"),
            Err(LanguageError::NotFound(name)) if name == "nonexistent"
        );
    }
}
