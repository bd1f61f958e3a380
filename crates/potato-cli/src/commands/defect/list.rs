use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(scenario: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // Surface an unknown scenario as an error rather than an empty list.
    ctx.db.get_scenario(scenario).await?;
    let defects = ctx.db.list_defects(scenario).await?;
    output(&defects, flags.format)
}
