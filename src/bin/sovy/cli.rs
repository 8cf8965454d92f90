//! # Cli
//!
//! Everything needed for parsing the CLI arguments for Sovy.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Struct containing the CLI configuration for Sovy.
#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Specify the log level of the interpreter.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}

/// Enum for specifying the log level of Sovy.
#[derive(ValueEnum, Clone, Default, Debug)]
pub enum LogLevel {
    /// The default log level. Only critical errors will be logged.
    #[default]
    #[value(alias("0"))]
    Error,

    /// Also log warnings.
    #[value(alias("1"))]
    Warn,

    /// Also log information about the general state of the interpreter,
    /// e.g., which libraries are loaded.
    #[value(alias("2"))]
    Info,

    /// Log everything which happens internally in the interpreter.
    #[value(alias("3"))]
    Debug,

    /// Log extra information.
    #[value(alias("4"))]
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a Solara source file.
    Run(RunArgs),

    /// Reformat a Solara source file into the canonical layout.
    Fmt(FmtArgs),

    /// Install a library into the local registry.
    Install(InstallArgs),

    /// List the installed libraries.
    List,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// The path to the Solara source file.
    #[arg(index = 1)]
    pub file: std::path::PathBuf,

    /// Whether to dump the parsed AST (for debugging).
    #[arg(long)]
    pub dump_ast: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FmtArgs {
    /// The path to the Solara source file.
    #[arg(index = 1)]
    pub file: std::path::PathBuf,

    /// Whether the edit should be done in place.
    #[arg(short = 'i', long)]
    pub in_place: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InstallArgs {
    /// The name of the library to install.
    #[arg(index = 1)]
    pub library: String,
}
