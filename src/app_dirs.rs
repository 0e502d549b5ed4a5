use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "wordrush";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", APP_NAME)
            .map(|pd| pd.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from(format!("{APP_NAME}_config.json")))
    }

    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join(APP_NAME);
            Some(state_dir.join(format!("{APP_NAME}.log")))
        } else {
            ProjectDirs::from("", "", APP_NAME)
                .map(|proj_dirs| proj_dirs.data_local_dir().join(format!("{APP_NAME}.log")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_json() {
        let path = AppDirs::config_path();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
    }

    #[test]
    fn test_log_path_names_the_app() {
        if let Some(path) = AppDirs::log_path() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }
}
