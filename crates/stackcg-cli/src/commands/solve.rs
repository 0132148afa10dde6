use crate::cli::SolveArgs;
use crate::config::PartialScenarioConfig;
use crate::error::Result;
use crate::report::{self, SolveReport};
use crate::utils::progress::CliProgressHandler;
use stackcg::engine::progress::ProgressReporter;
use stackcg::workflows;
use tracing::{info, warn};

pub fn run(args: SolveArgs) -> Result<()> {
    let partial_config = PartialScenarioConfig::load(args.config.as_deref())?;
    info!("Merging scenario from file and CLI arguments...");
    let (scenario, search_config) = partial_config.merge_with_cli(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Searching placements for {} movable element(s)...",
        scenario.movable_ids().len()
    );
    info!("Invoking the core search workflow...");
    let outcome = workflows::search::run(&scenario, &search_config, &reporter)?;

    info!(
        orders = outcome.stats.orders,
        candidates = outcome.stats.candidates,
        feasible = outcome.stats.feasible,
        in_range = outcome.stats.in_range,
        "Workflow finished."
    );
    if !outcome.result.is_found() {
        warn!("Search completed but no candidate satisfied the target CG range.");
    }

    print!("\n{}", report::render_text(&scenario, &outcome.result));

    if let Some(path) = &args.report {
        SolveReport::new(&scenario, search_config.objective, &outcome).write_to(path)?;
        println!("Report written to: {}", path.display());
    }

    Ok(())
}
