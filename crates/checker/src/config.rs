/// Output format for verdict lines written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<code>\t<valid|invalid>[\t<reason>]`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Format of the tracing lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be one of {expected}, got '{value}'")]
    InvalidValue {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Checker configuration loaded from environment variables.
///
/// All fields have defaults; an unset variable never fails, a set but
/// unrecognized one does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Verdict line format (default: `text`).
    pub output: OutputFormat,
    /// Append the rejection reason to text verdicts (default: `false`).
    pub show_reason: bool,
    /// Log line format (default: `text`).
    pub log_format: LogFormat,
}

impl CheckerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var               | Default |
    /// |-----------------------|---------|
    /// | `CHECKER_OUTPUT`      | `text`  |
    /// | `CHECKER_SHOW_REASON` | `false` |
    /// | `LOG_FORMAT`          | `text`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let output = match lookup("CHECKER_OUTPUT") {
            None => OutputFormat::default(),
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(invalid("CHECKER_OUTPUT", "text, json", v)),
            },
        };

        let show_reason = match lookup("CHECKER_SHOW_REASON") {
            None => false,
            Some(v) => parse_flag(&v)
                .ok_or_else(|| invalid("CHECKER_SHOW_REASON", "true, false, 1, 0", v))?,
        };

        let log_format = match lookup("LOG_FORMAT") {
            None => LogFormat::default(),
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => return Err(invalid("LOG_FORMAT", "text, json", v)),
            },
        };

        Ok(Self {
            output,
            show_reason,
            log_format,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn invalid(var: &'static str, expected: &'static str, value: String) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        expected,
        value,
    }
}
