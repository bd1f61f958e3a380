use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(scenario: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.db.get_scenario(scenario).await?;
    let proofs = ctx.db.list_proofs(scenario).await?;
    output(&proofs, flags.format)
}
