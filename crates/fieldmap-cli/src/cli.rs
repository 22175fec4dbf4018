//! CLI argument definitions for the field mapping reviewer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fieldmap",
    version,
    about = "Review and edit a source-to-target field mapping",
    long_about = "Review and edit a mapping between a source and a target field list.\n\n\
                  Gestures (connect, disconnect, open, cancel, commit) are replayed from a\n\
                  JSON script against a mapping fixture; without --fixture the built-in\n\
                  customer schema is used."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// List the source and target fields.
    Fields(FixtureArgs),

    /// List the edges the session starts with.
    Edges(FixtureArgs),

    /// Replay a gesture script and report the resulting mapping.
    Replay(ReplayArgs),
}

#[derive(Parser)]
pub struct FixtureArgs {
    /// Mapping fixture (JSON with source_fields, target_fields, edges).
    #[arg(long = "fixture", value_name = "PATH")]
    pub fixture: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// JSON array of gestures to apply in order.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    #[command(flatten)]
    pub fixture: FixtureArgs,

    /// Print the replay report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
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
