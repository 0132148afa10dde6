use crate::error::{CliError, Result};
use serde::Serialize;
use stackcg::core::models::scenario::Scenario;
use stackcg::engine::config::Objective;
use stackcg::engine::state::SearchStats;
use stackcg::workflows::search::{SearchReport, SearchResult};
use std::path::Path;
use tracing::info;

pub const NOT_FOUND_MESSAGE: &str = "No valid configuration found within the desired CG range.";

pub fn objective_label(objective: Objective) -> String {
    match objective {
        Objective::Lowest => "lowest".to_string(),
        Objective::Highest => "highest".to_string(),
        Objective::NearestTo(target) => format!("nearest-to={}", target),
    }
}

/// Human-readable result: every element's center height, then the CG.
pub fn render_text(scenario: &Scenario, result: &SearchResult) -> String {
    match result {
        SearchResult::Found { heights, cg } => {
            let mut text = String::from("Best configuration found!\n");
            for (id, height) in heights.iter() {
                text.push_str(&format!(
                    "  {} -> Center height: {:.2} mm\n",
                    scenario.element(id).name,
                    height
                ));
            }
            text.push_str(&format!(
                "Center of Gravity (CG): {:.2} mm (within target range)\n",
                cg
            ));
            text
        }
        SearchResult::NotFound => format!("{}\n", NOT_FOUND_MESSAGE),
    }
}

#[derive(Debug, Serialize)]
struct ElementEntry {
    name: String,
    role: &'static str,
    height: f64,
}

#[derive(Debug, Serialize)]
struct TargetEntry {
    min: f64,
    max: f64,
}

/// Machine-readable result written by `solve --report`.
#[derive(Debug, Serialize)]
pub struct SolveReport {
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    cg: Option<f64>,
    objective: String,
    #[serde(rename = "total-height")]
    total_height: f64,
    target: TargetEntry,
    elements: Vec<ElementEntry>,
    stats: SearchStats,
}

impl SolveReport {
    pub fn new(scenario: &Scenario, objective: Objective, report: &SearchReport) -> Self {
        let range = scenario.target_cg_range();
        let elements = report
            .result
            .heights()
            .map(|heights| {
                heights
                    .iter()
                    .map(|(id, height)| {
                        let element = scenario.element(id);
                        ElementEntry {
                            name: element.name.clone(),
                            role: if element.is_movable() {
                                "movable"
                            } else {
                                "fixed"
                            },
                            height,
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            found: report.result.is_found(),
            cg: report.result.cg(),
            objective: objective_label(objective),
            total_height: scenario.total_height(),
            target: TargetEntry {
                min: range.min,
                max: range.max,
            },
            elements,
            stats: report.stats,
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to serialize report: {}", e)))
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        info!("Report written to {:?}", path);
        Ok(())
    }
}
