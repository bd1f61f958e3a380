use potato_core::entities::NewScenario;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    area: &str,
    scenario_type: &str,
    assigned_to: &str,
    steps: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let steps = steps.unwrap_or(ctx.config.general.default_steps);
    let input = NewScenario {
        name: name.to_string(),
        area: area.to_string(),
        scenario_type: scenario_type.to_string(),
        assigned_to: assigned_to.to_string(),
    };

    let scenario = ctx.db.create_scenario(&input, steps).await?;
    tracing::info!(id = scenario.id, steps, "scenario created");
    let detail = ctx.db.scenario_detail(scenario.id).await?;
    output(&detail, flags.format)
}
