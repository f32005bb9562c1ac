//! Per-code verdicts and their rendering.

use chrono::NaiveDate;
use serde::Serialize;

use platedesk_core::identity_code::{self, IdentityCodeInfo};

use crate::config::{CheckerConfig, OutputFormat};

/// Outcome of checking one identity code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub code: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

impl Verdict {
    pub fn for_code(code: &str) -> Self {
        match identity_code::inspect(code) {
            Ok(IdentityCodeInfo {
                region_name,
                birth_date,
                ..
            }) => Self {
                code: code.to_string(),
                valid: true,
                reason: None,
                region: Some(region_name),
                birth_date: Some(birth_date),
            },
            Err(err) => {
                tracing::debug!(reason = err.reason(), error = %err, "Code rejected");
                Self {
                    code: code.to_string(),
                    valid: false,
                    reason: Some(err.reason()),
                    region: None,
                    birth_date: None,
                }
            }
        }
    }

    /// Render as a single output line (no trailing newline).
    pub fn render(&self, config: &CheckerConfig) -> Result<String, serde_json::Error> {
        match config.output {
            OutputFormat::Json => serde_json::to_string(self),
            OutputFormat::Text => {
                let status = if self.valid { "valid" } else { "invalid" };
                Ok(match (config.show_reason, self.reason) {
                    (true, Some(reason)) => format!("{}\t{status}\t{reason}", self.code),
                    _ => format!("{}\t{status}", self.code),
                })
            }
        }
    }
}
