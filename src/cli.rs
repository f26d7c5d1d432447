// Command-line interface for pathtemplate

use clap::{Arg, ArgAction, ArgMatches};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::report::OutputFormat;

/// Parsed command-line options
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub file: Option<PathBuf>,
    pub format: OutputFormat,
    pub verbosity: u8,
    pub quiet: bool,
}

impl CliOptions {
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let format = matches
            .get_one::<String>("format")
            .map(|s| s.as_str())
            .unwrap_or("text")
            .parse()?;

        Ok(Self {
            file: matches.get_one::<String>("file").map(PathBuf::from),
            format,
            verbosity: matches.get_count("verbose"),
            quiet: matches.get_flag("quiet"),
        })
    }

    /// WARN by default, one step more verbose per `-v`; `-q` wins
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

pub fn command() -> clap::Command {
    clap::Command::new("pathtemplate")
        .about("Validate and finish parsed path templates")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("YAML or JSON document of segment sequences (defaults to templates.yml)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .value_parser(["text", "json", "yaml"])
                .default_value("text")
                .help("Report format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v, -vv, -vvv)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only log errors"),
        )
}
