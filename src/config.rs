/// Application configuration.
///
/// Read once from the environment at startup. The credential deliberately
/// has no default: an empty key means no remote call is ever attempted and
/// every operation reports the configuration error instead.
#[derive(Clone, Debug)]
pub struct Config {
    /// Gemini API credential. Empty means unconfigured.
    pub api_key: String,
    pub api_base_url: String,
    pub model_name: String,
    /// Log extra per-call diagnostics.
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: "https://generativelanguage.googleapis.com".to_string(),
            model_name: "gemini-2.5-flash".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or(default.api_key),
            api_base_url: std::env::var("GEMINI_API_BASE_URL").unwrap_or(default.api_base_url),
            model_name: std::env::var("GEMINI_MODEL_NAME").unwrap_or(default.model_name),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
        }
    }

    /// Whether a usable credential is present.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_counts_as_missing() {
        let config = Config::default();
        assert!(!config.has_api_key());

        let config = Config {
            api_key: "   ".to_string(),
            ..Config::default()
        };
        assert!(!config.has_api_key());

        let config = Config {
            api_key: "k".to_string(),
            ..Config::default()
        };
        assert!(config.has_api_key());
    }
}
