use anyhow::Context;
use mdsh_config::MdshConfig;
use mdsh_core::{Category, FrontmatterPolicy};
use mdsh_gather::{GatherOptions, Gatherer};
use serde::Serialize;

use crate::cli::{GlobalFlags, PlanArgs};
use crate::output::{Tabular, output};

/// The gathered plan; serializes to `null` when nothing is runnable.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct PlanView(pub Option<Category>);

impl Tabular for PlanView {
    fn headers() -> &'static [&'static str] {
        &[
            "category",
            "page",
            "line",
            "run",
            "wait",
            "timeout",
            "hook",
            "expectError",
            "command",
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let Some(plan) = &self.0 else {
            return Vec::new();
        };

        plan.walk_pages()
            .into_iter()
            .flat_map(|(category, page)| {
                page.scripts.iter().map(move |script| {
                    vec![
                        category.title().to_string(),
                        page.title.clone(),
                        script.line_number.to_string(),
                        category.run().to_string(),
                        script.wait.to_string(),
                        script.timeout.to_string(),
                        script.hook.clone().unwrap_or_else(|| "-".to_string()),
                        script.expect_error.to_string(),
                        script.command.lines().next().unwrap_or_default().to_string(),
                    ]
                })
            })
            .collect()
    }
}

/// Handle `mdsh plan`.
pub fn handle(args: &PlanArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = MdshConfig::load_with_dotenv().context("failed to load mdsh configuration")?;
    let options = resolve_options(config.gather.options(), args);

    let plan = Gatherer::new(options)
        .gather(&args.directory)
        .with_context(|| {
            format!(
                "failed to gather test plan from '{}'",
                args.directory.display()
            )
        })?;

    match &plan {
        Some(category) => tracing::info!(
            scripts = category.script_count(),
            pages = category.walk_pages().len(),
            "gathered test plan"
        ),
        None => tracing::warn!(
            directory = %args.directory.display(),
            "no runnable pages found"
        ),
    }

    output(&PlanView(plan), flags.format)
}

/// Apply command-line overrides on top of configured options.
fn resolve_options(mut options: GatherOptions, args: &PlanArgs) -> GatherOptions {
    if args.lenient_frontmatter {
        options.frontmatter = FrontmatterPolicy::Skip;
    }
    if let Some(heredoc) = args.heredoc {
        options.heredoc = heredoc.into();
    }
    options
}
