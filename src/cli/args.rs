//! CLI argument definitions for `NuTranscript`

use clap::{
    builder::{BoolishValueParser, RangedU64ValueParser},
    Parser, Subcommand, ValueEnum,
};
use std::path::PathBuf;

use nu_transcript::config::ConfigOverrides;
use nu_transcript::core::report::ReportFormat;
use nu_transcript::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Report format argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain-text report
    Text,
    /// Markdown report
    Markdown,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Markdown => Self::Markdown,
        }
    }
}

/// Line-length limits must be positive, matching `config set max_line_length`
fn line_length_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(1..)
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `max_line_length`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Evaluate a transcript.
    ///
    /// Reads `code|credit|prerequisites|grade` records up to the first empty
    /// line and prints GPA, credit totals and the courses that can be taken next.
    Evaluate {
        /// Transcript file (reads standard input when omitted)
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Write the report to a file instead of standard output
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,

        /// Truncate record lines to this many characters (overrides config)
        #[arg(long, value_name = "CHARS", value_parser = line_length_parser())]
        max_line_length: Option<usize>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "nutranscript",
    about = "NuTranscript command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config maximum record line length
    #[arg(
        long = "config-max-line-length",
        value_name = "CHARS",
        value_parser = line_length_parser()
    )]
    pub config_max_line_length: Option<usize>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `evaluate --max-line-length` takes precedence over
    /// `--config-max-line-length` when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let command_max_line_length = match &self.command {
            Command::Evaluate {
                max_line_length, ..
            } => *max_line_length,
            Command::Config { .. } => None,
        };

        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            max_line_length: command_max_line_length.or(self.config_max_line_length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_parse_evaluate_command() {
        let cli = Cli::parse_from([
            "nutranscript",
            "evaluate",
            "in.txt",
            "-o",
            "out.md",
            "-f",
            "markdown",
        ]);
        match cli.command {
            Command::Evaluate {
                input_file,
                output,
                format,
                max_line_length,
            } => {
                assert_eq!(input_file, Some(PathBuf::from("in.txt")));
                assert_eq!(output, Some(PathBuf::from("out.md")));
                assert_eq!(format, FormatArg::Markdown);
                assert_eq!(max_line_length, None);
            }
            Command::Config { .. } => panic!("expected evaluate"),
        }
    }

    #[test]
    fn test_evaluate_defaults_to_stdin_and_text() {
        let cli = Cli::parse_from(["nutranscript", "evaluate"]);
        assert!(matches!(
            cli.command,
            Command::Evaluate {
                input_file: None,
                output: None,
                format: FormatArg::Text,
                ..
            }
        ));
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::parse_from(["nutranscript", "config"]);
        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.max_line_length.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::parse_from([
            "nutranscript",
            "--config-level",
            "debug",
            "--config-log-file",
            "/tmp/test.log",
            "--config-verbose",
            "yes",
            "--config-max-line-length",
            "80",
            "config",
        ]);
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.max_line_length, Some(80));
    }

    #[test]
    fn test_command_max_line_length_takes_precedence() {
        let cli = Cli::parse_from([
            "nutranscript",
            "--config-max-line-length",
            "80",
            "evaluate",
            "--max-line-length",
            "40",
        ]);
        assert_eq!(cli.to_config_overrides().max_line_length, Some(40));
    }

    #[test]
    fn test_zero_max_line_length_is_rejected() {
        assert!(Cli::try_parse_from(["nutranscript", "evaluate", "--max-line-length", "0"]).is_err());
        assert!(
            Cli::try_parse_from(["nutranscript", "--config-max-line-length", "0", "config"]).is_err()
        );
        assert!(Cli::try_parse_from(["nutranscript", "evaluate", "--max-line-length", "-1"]).is_err());

        let cli = Cli::try_parse_from(["nutranscript", "evaluate", "--max-line-length", "1"])
            .expect("a one-character limit is valid");
        assert_eq!(cli.to_config_overrides().max_line_length, Some(1));
    }
}
