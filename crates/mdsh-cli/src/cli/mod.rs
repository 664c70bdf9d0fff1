use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, HeredocArg, PlanArgs};

/// Top-level CLI parser for the `mdsh` binary.
#[derive(Debug, Parser)]
#[command(
    name = "mdsh",
    version,
    about = "mdsh - gather shell tests from Markdown documentation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, HeredocArg, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["mdsh", "--format", "table", "--verbose", "plan", "docs"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        let Commands::Plan(args) = cli.command;
        assert_eq!(args.directory, PathBuf::from("docs"));
        assert!(!args.lenient_frontmatter);
        assert_eq!(args.heredoc, None);
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["mdsh", "plan", "docs", "-f", "raw", "-q"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn plan_overrides_parse() {
        let cli = Cli::try_parse_from([
            "mdsh",
            "plan",
            "docs",
            "--lenient-frontmatter",
            "--heredoc",
            "verbatim",
        ])
        .expect("cli should parse");

        let Commands::Plan(args) = cli.command;
        assert!(args.lenient_frontmatter);
        assert_eq!(args.heredoc, Some(HeredocArg::Verbatim));
    }

    #[test]
    fn plan_requires_directory() {
        assert!(Cli::try_parse_from(["mdsh", "plan"]).is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["mdsh", "--format", "xml", "plan", "docs"]).is_err());
    }

    #[test]
    fn default_format_is_json() {
        let cli = Cli::try_parse_from(["mdsh", "plan", "docs"]).expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Json);
        assert!(!flags.quiet);
        assert!(!flags.verbose);
    }
}
