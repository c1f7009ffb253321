//! Dry run: print the plan without writing anything.

use crate::error::add_pack_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use ncpack_core::PackConfig;
use ncpack_core::plan_pack;

pub fn execute(config: &PackConfig, formatter: &dyn OutputFormatter) -> Result<()> {
    let plan = add_pack_context(plan_pack(config))?;

    if plan.archive_path.exists() {
        formatter.format_warning(&format!(
            "File \"{}\" already exists; a real run would stop here.",
            plan.archive_path.display()
        ));
    }

    if plan.links_skipped() > 0 {
        formatter.format_warning(&super::pack::links_skipped_warning(plan.links_skipped()));
    }

    formatter.format_plan(&plan)
}
