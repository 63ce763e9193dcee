//! Environment-driven shell configuration.

use bookstack_observability::LogFormat;

/// Log line format (`pretty` or `json`).
pub const ENV_LOG_FORMAT: &str = "BOOKSTACK_LOG_FORMAT";
/// Whether to load the base catalog at startup (`true`/`false`).
pub const ENV_SEED: &str = "BOOKSTACK_SEED";
/// Author used by the "author in stock" report.
pub const ENV_AUTHOR: &str = "BOOKSTACK_AUTHOR";

pub const DEFAULT_AUTHOR: &str = "Jorge Luis Borges";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub log_format: LogFormat,
    pub seed_on_start: bool,
    pub author: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            seed_on_start: true,
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

/// A variable that was set but could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub variable: &'static str,
    pub value: String,
}

impl core::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ignoring invalid {}={:?}", self.variable, self.value)
    }
}

impl ShellConfig {
    /// Read the configuration from the process environment.
    ///
    /// Invalid values fall back to their defaults and are returned as
    /// warnings, to be logged once logging is up.
    pub fn from_env() -> (Self, Vec<ConfigWarning>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigWarning>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(_) => warnings.push(ConfigWarning {
                    variable: ENV_LOG_FORMAT,
                    value: raw,
                }),
            }
        }

        if let Some(raw) = lookup(ENV_SEED) {
            match parse_flag(&raw) {
                Some(flag) => config.seed_on_start = flag,
                None => warnings.push(ConfigWarning {
                    variable: ENV_SEED,
                    value: raw,
                }),
            }
        }

        if let Some(raw) = lookup(ENV_AUTHOR) {
            let author = raw.trim();
            if author.is_empty() {
                warnings.push(ConfigWarning {
                    variable: ENV_AUTHOR,
                    value: raw,
                });
            } else {
                config.author = author.to_string();
            }
        }

        (config, warnings)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
