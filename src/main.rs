//! `privacy-checkr` — score the privacy risk of Korean personal-information consent notices.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]), then apply CLI overrides.
//! 3. `analyze`: read the notice, score it ([`scoring`]), optionally wrap it
//!    ([`summary`]), and render the requested report ([`report`]).
//!    Exit `1` when `--fail-on` is met.
//! 4. `serve`: expose the scorer over HTTP ([`server`]).

mod cli;
mod config;
mod models;
mod report;
mod scoring;
mod server;
mod summary;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, LabelArg, ReportFormat};
use config::{load_config, Config};
use models::RiskLabel;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(Path::new("."), cli.config.as_deref())?;

    match cli.command {
        Command::Analyze {
            text,
            file,
            report,
            summary,
            fail_on,
            quiet,
        } => {
            let label = analyze(&config, text, file, report, summary, quiet)?;
            if fails(label, fail_on) {
                std::process::exit(1);
            }
        }
        Command::Serve { host, port } => {
            let mut server = config.server;
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            server::start(server).await?;
        }
    }

    Ok(())
}

fn analyze(
    config: &Config,
    text: Option<String>,
    file: Option<PathBuf>,
    report: ReportFormat,
    with_summary: bool,
    quiet: bool,
) -> Result<RiskLabel> {
    let (text, source) = match (text, file) {
        (Some(text), _) => (text, "<argument>".to_string()),
        (None, Some(path)) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            (text, path.display().to_string())
        }
        (None, None) => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read notice from stdin")?;
            (text, "<stdin>".to_string())
        }
    };

    tracing::debug!(source = %source, chars = text.chars().count(), "Scoring notice");

    if with_summary {
        let summary = summary::summarize(
            &text,
            config.server.preview_chars,
            config.server.frontend_base_url(),
        );
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(summary.label);
    }

    let result = scoring::score(&text);
    match report {
        ReportFormat::Terminal => {
            let findings = scoring::evaluate(&text);
            report::terminal::render(&result, &findings, &source, quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(result.label)
}

/// Whether `label` reaches the `--fail-on` threshold. `no-content` never fails.
fn fails(label: RiskLabel, fail_on: Option<LabelArg>) -> bool {
    match fail_on {
        Some(threshold) => label != RiskLabel::NoContent && label >= RiskLabel::from(threshold),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_on_threshold() {
        assert!(fails(RiskLabel::Danger, Some(LabelArg::Caution)));
        assert!(fails(RiskLabel::Caution, Some(LabelArg::Caution)));
        assert!(!fails(RiskLabel::Low, Some(LabelArg::Caution)));
        assert!(!fails(RiskLabel::Danger, None));
    }

    #[test]
    fn test_no_content_never_fails() {
        assert!(!fails(RiskLabel::NoContent, Some(LabelArg::Good)));
    }

    #[test]
    fn test_analyze_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notice.txt");
        std::fs::write(&path, "보유기간은 영구입니다").unwrap();

        let label = analyze(
            &Config::default(),
            None,
            Some(path),
            ReportFormat::Json,
            false,
            true,
        )
        .unwrap();
        // indefinite 20, short text -10
        assert_eq!(label, RiskLabel::Good);
    }

    #[test]
    fn test_analyze_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = analyze(
            &Config::default(),
            None,
            Some(dir.path().join("missing.txt")),
            ReportFormat::Json,
            false,
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
