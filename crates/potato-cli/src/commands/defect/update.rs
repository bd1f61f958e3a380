use potato_core::enums::DefectStatus;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, status: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status: DefectStatus = status.parse()?;
    let defect = ctx.db.update_defect_status(id, status).await?;
    output(&defect, flags.format)
}
