use serde::{Deserialize, Serialize};

const KNOWN_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    pub fn is_known_level(level: &str) -> bool {
        KNOWN_LEVELS.iter().any(|l| l.eq_ignore_ascii_case(level))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
