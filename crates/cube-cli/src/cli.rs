//! CLI argument definitions for cube-dbt.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "cube-dbt",
    version,
    about = "Render Cube dimensions from data-model column metadata",
    long_about = "Normalize column metadata (name, description, declared type, tags, meta)\n\
                  into Cube dimension descriptors.\n\n\
                  Input files are JSON objects mapping model names to column records."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include timestamps in log output.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log output.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Configuration file (default: ./cube-dbt.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render dimensions for a model, or a single column of it.
    Dimensions(DimensionsArgs),

    /// Normalize every column of every model and report unknown types.
    Check(CheckArgs),

    /// List the built-in vendor type mappings.
    Types,
}

#[derive(Parser)]
pub struct DimensionsArgs {
    /// JSON file mapping model names to column records.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Model whose columns are rendered.
    #[arg(long = "model", short = 'm')]
    pub model: String,

    /// Render only this column.
    #[arg(long = "column", short = 'c')]
    pub column: Option<String>,

    /// Indentation for continuation lines (overrides config).
    #[arg(long = "indent")]
    pub indent: Option<usize>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "yaml")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// JSON file mapping model names to column records.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Yaml,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Build logging configuration from CLI flags with consistent precedence.
pub fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
