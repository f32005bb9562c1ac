//! `platedesk-checker` -- batch resident identity-code checker.
//!
//! Checks the codes given as arguments, or one code per stdin line when no
//! arguments are given, and prints one verdict per code to stdout. Logs go
//! to stderr.
//!
//! Exit status: `0` all codes valid, `1` at least one invalid, `2`
//! configuration or I/O failure.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default | Description                        |
//! |-----------------------|----------|---------|------------------------------------|
//! | `CHECKER_OUTPUT`      | no       | `text`  | Verdict format: `text` or `json`   |
//! | `CHECKER_SHOW_REASON` | no       | `false` | Append the rejection reason (text) |
//! | `LOG_FORMAT`          | no       | `text`  | Log format: `text` or `json`       |
//! | `RUST_LOG`            | no       | `platedesk_checker=info,platedesk_core=warn` | Tracing filter |

use std::process::ExitCode;

use platedesk_checker::config::{CheckerConfig, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match CheckerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("platedesk-checker: {e}");
            return ExitCode::from(platedesk_checker::exit_status(&Err(e)));
        }
    };

    init_tracing(config.log_format);

    let args: Vec<String> = std::env::args().skip(1).collect();
    tracing::debug!(
        output = ?config.output,
        show_reason = config.show_reason,
        arg_count = args.len(),
        "Starting platedesk-checker",
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = platedesk_checker::run(&config, &args, stdin.lock(), &mut out);
    if let Err(e) = &outcome {
        tracing::error!(error = %format!("{e:#}"), "Checker failed");
    }
    ExitCode::from(platedesk_checker::exit_status(&outcome))
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "platedesk_checker=info,platedesk_core=warn".into());

    let (text, json) = match format {
        LogFormat::Text => (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .init();
}
