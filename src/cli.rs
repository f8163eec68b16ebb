use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::RiskLabel;

#[derive(Parser, Debug)]
#[command(
    name = "privacy-checkr",
    about = "Score the privacy risk of personal-information consent notices",
    version
)]
pub struct Cli {
    /// Config file [default: ./.privacy-checkr/config.toml, fallback ~/.config/privacy-checkr/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a notice given inline, from a file, or on stdin
    Analyze {
        /// Notice text; read from stdin when neither TEXT nor --file is given
        text: Option<String>,

        /// Read the notice from a file
        #[arg(long, short, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Report format
        #[arg(long, default_value = "terminal", value_name = "FORMAT")]
        report: ReportFormat,

        /// Include preview, truncation and result link (JSON report)
        #[arg(long)]
        summary: bool,

        /// Exit with code 1 when the label is at or above this tier
        #[arg(long, value_name = "LABEL")]
        fail_on: Option<LabelArg>,

        /// Only print the score line
        #[arg(short, long)]
        quiet: bool,
    },

    /// Serve the scorer over HTTP
    Serve {
        /// Bind host [default: from config, 127.0.0.1]
        #[arg(long)]
        host: Option<String>,

        /// Bind port [default: from config, 8080]
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LabelArg {
    Good,
    Low,
    Caution,
    Danger,
}

impl From<LabelArg> for RiskLabel {
    fn from(arg: LabelArg) -> Self {
        match arg {
            LabelArg::Good => RiskLabel::Good,
            LabelArg::Low => RiskLabel::Low,
            LabelArg::Caution => RiskLabel::Caution,
            LabelArg::Danger => RiskLabel::Danger,
        }
    }
}
