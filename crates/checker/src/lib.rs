//! `platedesk-checker` library crate.
//!
//! Batch identity-code checking for desk operators. The binary entrypoint
//! lives in `main.rs`; this crate exposes the loop for integration testing.

pub mod config;
pub mod report;

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::config::CheckerConfig;
use crate::report::Verdict;

/// Exit status when every checked code is valid.
pub const EXIT_OK: u8 = 0;
/// Exit status when at least one code is invalid.
pub const EXIT_INVALID: u8 = 1;
/// Exit status on a configuration or I/O failure.
pub const EXIT_FAILURE: u8 = 2;

/// Counts accumulated over one checker run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub checked: usize,
    pub invalid: usize,
}

impl Summary {
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }

    fn record(&mut self, verdict: &Verdict) {
        self.checked += 1;
        if !verdict.valid {
            self.invalid += 1;
        }
    }
}

/// Process exit status for the outcome of a run or of loading its config.
pub fn exit_status<E>(outcome: &Result<Summary, E>) -> u8 {
    match outcome {
        Ok(summary) if summary.all_valid() => EXIT_OK,
        Ok(_) => EXIT_INVALID,
        Err(_) => EXIT_FAILURE,
    }
}

/// Check every code in `args`, or every line of `input` when `args` is
/// empty, writing one verdict line per code to `out`. Codes are trimmed;
/// blank arguments and blank lines are skipped.
pub fn run<R: BufRead, W: Write>(
    config: &CheckerConfig,
    args: &[String],
    input: R,
    out: &mut W,
) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    if args.is_empty() {
        for (idx, line) in input.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read input line {}", idx + 1))?;
            let code = line.trim();
            if code.is_empty() {
                continue;
            }
            emit(config, code, out, &mut summary)?;
        }
    } else {
        for code in args.iter().map(|a| a.trim()).filter(|a| !a.is_empty()) {
            emit(config, code, out, &mut summary)?;
        }
    }

    tracing::info!(
        checked = summary.checked,
        invalid = summary.invalid,
        "Identity code check complete",
    );
    Ok(summary)
}

fn emit<W: Write>(
    config: &CheckerConfig,
    code: &str,
    out: &mut W,
    summary: &mut Summary,
) -> anyhow::Result<()> {
    let verdict = Verdict::for_code(code);
    summary.record(&verdict);
    let line = verdict.render(config).context("Failed to render verdict")?;
    writeln!(out, "{line}").context("Failed to write verdict")?;
    Ok(())
}
