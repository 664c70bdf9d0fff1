use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use mdsh_core::HeredocMode;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Gather the test plan of a documentation tree and print it.
    Plan(PlanArgs),
}

#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    /// Root directory of the Markdown documentation.
    pub directory: PathBuf,

    /// Skip pages without frontmatter instead of failing.
    #[arg(long)]
    pub lenient_frontmatter: bool,

    /// How prompts inside heredoc bodies are treated (overrides config).
    #[arg(long, value_enum)]
    pub heredoc: Option<HeredocArg>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum HeredocArg {
    /// Strip `$ ` prompts everywhere.
    Inert,
    /// Keep `$ ` lines inside heredoc bodies.
    Verbatim,
}

impl From<HeredocArg> for HeredocMode {
    fn from(arg: HeredocArg) -> Self {
        match arg {
            HeredocArg::Inert => Self::Inert,
            HeredocArg::Verbatim => Self::Verbatim,
        }
    }
}
