use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    scenario: i64,
    step: u32,
    title: &str,
    reported_by: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let defect = ctx.db.add_defect(scenario, step, title, reported_by).await?;
    tracing::info!(id = defect.id, scenario, step, "defect raised");
    output(&defect, flags.format)
}
