//! Pack command: resolve, prompt, write the archive.

use crate::cli::Cli;
use crate::error::add_pack_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use crate::prompt::AUTHOR_PROMPT;
use crate::prompt::Prompter;
use crate::prompt::VERSION_PROMPT;
use anyhow::Result;
use console::Term;
use ncpack_core::MatchMode;
use ncpack_core::ModLayout;
use ncpack_core::NoopProgress;
use ncpack_core::PackConfig;
use ncpack_core::ProgressCallback;
use ncpack_core::create_pack;

pub fn execute(args: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = resolve_config(args)?;

    if args.dry_run {
        return super::plan::execute(&config, formatter);
    }

    let mut progress: Box<dyn ProgressCallback> = if args.json {
        Box::new(NoopProgress)
    } else {
        Box::new(CliProgress::new(args.quiet))
    };

    let report = add_pack_context(create_pack(&config, &mut *progress))?;
    drop(progress);

    if report.links_skipped > 0 {
        formatter.format_warning(&links_skipped_warning(report.links_skipped));
    }

    formatter.format_pack_result(&config.archive_path(), &report)
}

pub fn links_skipped_warning(count: usize) -> String {
    format!("{count} symbolic link(s) not packaged: target is a directory or missing.")
}

/// Validates the input path, then collects author and version.
fn resolve_config(args: &Cli) -> Result<PackConfig> {
    let layout = add_pack_context(ModLayout::from_inputs(&args.inputs))?;

    // JSON mode reserves stdout for the result document
    let term = if args.json {
        Term::stderr()
    } else {
        Term::stdout()
    };
    let mut prompter = Prompter::stdin(term);
    let author = prompter.value_or_ask(args.author.as_deref(), AUTHOR_PROMPT)?;
    let version = prompter.value_or_ask(args.mod_version.as_deref(), VERSION_PROMPT)?;

    let mode = if args.strict_exclusions {
        MatchMode::Component
    } else {
        MatchMode::Literal
    };

    Ok(PackConfig::new(layout, author, version).with_match_mode(mode))
}
