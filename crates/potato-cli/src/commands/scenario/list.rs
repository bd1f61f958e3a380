use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    page: u32,
    per_page: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let per_page = per_page.unwrap_or(ctx.config.general.page_size);
    let listing = ctx.db.list_scenarios(page, per_page).await?;
    output(&listing, flags.format)
}
