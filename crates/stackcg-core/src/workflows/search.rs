use crate::core::models::assignment::Assignment;
use crate::core::models::ids::ElementId;
use crate::core::models::scenario::Scenario;
use crate::engine::config::SearchConfig;
use crate::engine::error::EngineError;
use crate::engine::layout::Layout;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{BestCandidate, SearchStats};
use crate::engine::tasks::enumeration::{self, OrderOutcome};
use itertools::Itertools;
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Beyond this many movable elements the `n!` assignment orders dominate the run time.
const ORDER_COUNT_WARNING_THRESHOLD: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    /// Best configuration: heights of every element (fixed ones included) and its CG.
    Found { heights: Assignment, cg: f64 },
    /// No feasible candidate has a CG inside the target range.
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found { .. })
    }

    pub fn cg(&self) -> Option<f64> {
        match self {
            SearchResult::Found { cg, .. } => Some(*cg),
            SearchResult::NotFound => None,
        }
    }

    pub fn heights(&self) -> Option<&Assignment> {
        match self {
            SearchResult::Found { heights, .. } => Some(heights),
            SearchResult::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub result: SearchResult,
    pub stats: SearchStats,
}

/// Finds the feasible configuration with the lowest CG inside the scenario's target range.
///
/// This is [`run`] with the default configuration and no progress reporting.
///
/// # Errors
///
/// Returns [`EngineError::InvalidScenario`] when the total mass is not positive.
pub fn search(scenario: &Scenario) -> Result<SearchResult, EngineError> {
    run(scenario, &SearchConfig::default(), &ProgressReporter::new()).map(|report| report.result)
}

/// Runs the placement search.
///
/// Every permutation of the movable elements defines an assignment order; within one order
/// the movable heights are enumerated as nested integer ranges (see
/// [`crate::engine::bounds::range_for`]). Each complete candidate is checked against all
/// distance bounds, its CG computed, and the best in-range candidate under
/// `config.objective` retained. Ties go to the candidate found first when orders are
/// visited in permutation order and heights ascending, with or without the `parallel`
/// feature.
///
/// # Arguments
///
/// * `scenario` - The immutable input.
/// * `config` - Objective selection.
/// * `reporter` - Receives phase and per-order progress events.
///
/// # Errors
///
/// Returns [`EngineError::InvalidScenario`] before any enumeration when the total mass is
/// zero, negative or not a number.
#[instrument(skip_all, name = "placement_search")]
pub fn run(
    scenario: &Scenario,
    config: &SearchConfig,
    reporter: &ProgressReporter,
) -> Result<SearchReport, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    let layout = Layout::prepare(scenario)?;
    reporter.report(Progress::PhaseFinish);

    if !layout.fixed_feasible() {
        info!("Fixed elements violate their own distance bounds; no configuration is feasible.");
        reporter.message(|| "Fixed elements violate their distance bounds.".to_string());
        return Ok(SearchReport {
            result: SearchResult::NotFound,
            stats: SearchStats::default(),
        });
    }

    let orders = assignment_orders(layout.movable());
    if layout.movable().len() > ORDER_COUNT_WARNING_THRESHOLD {
        warn!(
            movable = layout.movable().len(),
            orders = orders.len(),
            "Many movable elements; the number of assignment orders grows factorially."
        );
    }
    info!(
        movable = layout.movable().len(),
        orders = orders.len(),
        objective = ?config.objective,
        "Starting placement enumeration."
    );

    reporter.report(Progress::PhaseStart {
        name: "Enumerating placements",
    });
    reporter.report(Progress::OrdersPlanned {
        total: orders.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = orders.iter();

    #[cfg(feature = "parallel")]
    let iterator = orders.par_iter();

    let outcomes: Vec<OrderOutcome> = iterator
        .map(|order| {
            let outcome = enumeration::explore(&layout, order, config.objective);
            reporter.report(Progress::OrderExplored {
                candidates: outcome.stats.candidates,
            });
            outcome
        })
        .collect();

    reporter.report(Progress::OrdersFinished);

    let mut best = BestCandidate::new();
    let mut stats = SearchStats::default();
    for outcome in outcomes {
        stats += outcome.stats;
        best.merge(outcome.best);
    }

    reporter.report(Progress::PhaseFinish);

    let result = match best.into_inner() {
        Some(candidate) => {
            info!(
                cg = candidate.cg,
                candidates = stats.candidates,
                feasible = stats.feasible,
                in_range = stats.in_range,
                "Best configuration found."
            );
            SearchResult::Found {
                heights: candidate.assignment,
                cg: candidate.cg,
            }
        }
        None => {
            info!(
                candidates = stats.candidates,
                feasible = stats.feasible,
                "No feasible configuration inside the target CG range."
            );
            SearchResult::NotFound
        }
    };

    Ok(SearchReport { result, stats })
}

/// All nesting orders of the movable elements, in lexicographic permutation order.
/// With no movable elements there is exactly one, empty, order.
fn assignment_orders(movable: &[ElementId]) -> Vec<Vec<ElementId>> {
    if movable.is_empty() {
        return vec![Vec::new()];
    }
    movable.iter().copied().permutations(movable.len()).collect()
}
