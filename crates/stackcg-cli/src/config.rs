mod defaults;

pub use defaults::DEFAULT_SCENARIO_TOML;

use crate::cli::SolveArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use serde::Deserialize;
use stackcg::core::models::distance::{DEFAULT_MAX_DISTANCE, DEFAULT_MIN_DISTANCE};
use stackcg::core::models::scenario::{CgRange, Scenario, ScenarioBuilder};
use stackcg::engine::config::{Objective, SearchConfig, SearchConfigBuilder};
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case")]
enum PartialPlacement {
    Bottom,
    Top,
    Movable,
    Height(f64),
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct PartialElement {
    name: String,
    mass: f64,
    thickness: f64,
    placement: PartialPlacement,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct PartialExternal {
    name: String,
    mass: f64,
    height: f64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct PartialDistance {
    pair: [String; 2],
    min: Option<f64>,
    max: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialRange {
    min: Option<f64>,
    max: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialSearchConfig {
    objective: Option<Objective>,
}

/// Scenario file as written on disk; every scalar may still be overridden from the CLI.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PartialScenarioConfig {
    #[serde(rename = "total-height")]
    total_height: Option<f64>,
    target: Option<PartialRange>,
    #[serde(rename = "distance-defaults")]
    distance_defaults: Option<PartialRange>,
    search: Option<PartialSearchConfig>,
    #[serde(default)]
    elements: Vec<PartialElement>,
    #[serde(default)]
    externals: Vec<PartialExternal>,
    #[serde(default)]
    distances: Vec<PartialDistance>,
}

impl PartialScenarioConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading scenario from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// The built-in CubeSat scenario.
    pub fn builtin() -> Result<Self> {
        debug!("Using the built-in CubeSat scenario.");
        toml::from_str(DEFAULT_SCENARIO_TOML)
            .map_err(|e| CliError::Config(format!("Built-in scenario is malformed: {}", e)))
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    /// Resolves the final scenario and search configuration.
    ///
    /// Precedence, lowest first: file values, `-S key=value` overrides, dedicated flags.
    pub fn merge_with_cli(mut self, args: &SolveArgs) -> Result<(Scenario, SearchConfig)> {
        self.apply_set_values(&args.set_values)?;

        let target = self.target.take().unwrap_or_default();
        let distance_defaults = self.distance_defaults.take().unwrap_or_default();

        let total_height = args
            .total_height
            .or(self.total_height)
            .ok_or_else(|| CliError::Config("`total-height` is required.".to_string()))?;
        let target_min = args
            .target_min
            .or(target.min)
            .ok_or_else(|| CliError::Config("`target.min` is required.".to_string()))?;
        let target_max = args
            .target_max
            .or(target.max)
            .ok_or_else(|| CliError::Config("`target.max` is required.".to_string()))?;

        if self.elements.is_empty() {
            return Err(CliError::Config(
                "At least one `[[elements]]` entry is required.".to_string(),
            ));
        }

        let mut builder = Scenario::builder(total_height, CgRange::new(target_min, target_max))
            .default_distances(
                distance_defaults.min.unwrap_or(DEFAULT_MIN_DISTANCE),
                distance_defaults.max.unwrap_or(DEFAULT_MAX_DISTANCE),
            );
        builder = Self::merge_elements(builder, self.elements);
        for external in &self.externals {
            builder = builder.external(&external.name, external.mass, external.height);
        }
        builder = Self::merge_distances(builder, self.distances)?;

        let scenario = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let objective = args
            .objective
            .or(self.search.and_then(|search| search.objective))
            .unwrap_or_default();
        let search_config = SearchConfigBuilder::new()
            .objective(objective)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        debug!(
            elements = scenario.elements().len(),
            movable = scenario.movable_ids().len(),
            externals = scenario.externals().len(),
            total_height,
            target_min,
            target_max,
            ?objective,
            "Scenario resolved."
        );

        Ok((scenario, search_config))
    }

    fn merge_elements(builder: ScenarioBuilder, elements: Vec<PartialElement>) -> ScenarioBuilder {
        elements
            .into_iter()
            .fold(builder, |builder, element| match element.placement {
                PartialPlacement::Bottom => {
                    builder.fixed_bottom(&element.name, element.mass, element.thickness)
                }
                PartialPlacement::Top => {
                    builder.fixed_top(&element.name, element.mass, element.thickness)
                }
                PartialPlacement::Movable => {
                    builder.movable(&element.name, element.mass, element.thickness)
                }
                PartialPlacement::Height(height) => {
                    builder.fixed(&element.name, element.mass, element.thickness, height)
                }
            })
    }

    fn merge_distances(
        mut builder: ScenarioBuilder,
        distances: Vec<PartialDistance>,
    ) -> Result<ScenarioBuilder> {
        for distance in distances {
            let [a, b] = &distance.pair;
            if distance.min.is_none() && distance.max.is_none() {
                return Err(CliError::Config(format!(
                    "Distance entry for ('{}', '{}') needs `min`, `max` or both.",
                    a, b
                )));
            }
            if let Some(min) = distance.min {
                builder = builder.min_distance(a, b, min);
            }
            if let Some(max) = distance.max {
                builder = builder.max_distance(a, b, max);
            }
        }
        Ok(builder)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = parser::split_assignment(kv_pair)?;

            match key {
                "total-height" => {
                    self.total_height = Some(parser::parse_number(key, value_str)?);
                }
                "target.min" => {
                    self.target.get_or_insert_with(Default::default).min =
                        Some(parser::parse_number(key, value_str)?);
                }
                "target.max" => {
                    self.target.get_or_insert_with(Default::default).max =
                        Some(parser::parse_number(key, value_str)?);
                }
                "distance-defaults.min" => {
                    self.distance_defaults
                        .get_or_insert_with(Default::default)
                        .min = Some(parser::parse_number(key, value_str)?);
                }
                "distance-defaults.max" => {
                    self.distance_defaults
                        .get_or_insert_with(Default::default)
                        .max = Some(parser::parse_number(key, value_str)?);
                }
                "search.objective" => {
                    self.search.get_or_insert_with(Default::default).objective =
                        Some(parser::parse_objective(value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::utils::parser::ParseError;
    use clap::Parser;
    use stackcg::core::models::ids::ElementId;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SMALL_SCENARIO: &str = r#"
total-height = 60.0

[target]
min = 20.0
max = 40.0

[search]
objective = { nearest-to = 30.0 }

[[elements]]
name = "BASE"
mass = 50.0
thickness = 6.0
placement = "bottom"

[[elements]]
name = "A"
mass = 80.0
thickness = 4.0
placement = "movable"

[[elements]]
name = "SHELF"
mass = 10.0
thickness = 2.0
placement = { height = 25.0 }

[[elements]]
name = "LID"
mass = 40.0
thickness = 3.0
placement = "top"

[[externals]]
name = "Frame"
mass = 60.0
height = 30.0

[[distances]]
pair = ["A", "BASE"]
min = 2.5

[[distances]]
pair = ["A", "LID"]
min = 1.0
max = 40.0
"#;

    fn write_config_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn solve_args(extra: &[&str]) -> SolveArgs {
        let mut args = vec!["stackcg", "solve"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Solve(solve_args) => solve_args,
            _ => panic!("Expected 'solve' subcommand"),
        }
    }

    #[test]
    fn builtin_scenario_is_the_cubesat_preset() {
        let (scenario, config) = PartialScenarioConfig::builtin()
            .unwrap()
            .merge_with_cli(&solve_args(&[]))
            .unwrap();

        assert_eq!(scenario.total_height(), 98.0);
        assert_eq!(scenario.target_cg_range(), CgRange::new(40.0, 60.0));
        assert_eq!(scenario.elements().len(), 4);
        assert_eq!(scenario.externals().len(), 3);
        assert_eq!(
            scenario.movable_ids(),
            vec![ElementId::new(1), ElementId::new(2)]
        );
        assert_eq!(
            scenario.fixed_assignment().as_slice(),
            &[10.0, 0.0, 0.0, 90.5]
        );
        assert_eq!(config.objective, Objective::Lowest);
    }

    #[test]
    fn file_placements_and_distances_are_resolved() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "small.toml", SMALL_SCENARIO);

        let (scenario, config) = PartialScenarioConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&solve_args(&[]))
            .unwrap();

        assert_eq!(
            scenario.fixed_assignment().as_slice(),
            &[3.0, 0.0, 25.0, 58.5]
        );
        let base = scenario.element_id("BASE").unwrap();
        let a = scenario.element_id("A").unwrap();
        let lid = scenario.element_id("LID").unwrap();
        assert_eq!(scenario.min_distance().get(base, a), 2.5);
        assert_eq!(scenario.max_distance().get(base, a), DEFAULT_MAX_DISTANCE);
        assert_eq!(scenario.min_distance().get(lid, a), 1.0);
        assert_eq!(scenario.max_distance().get(lid, a), 40.0);
        assert_eq!(config.objective, Objective::NearestTo(30.0));
    }

    #[test]
    fn set_values_override_file_and_flags_override_set_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "small.toml", SMALL_SCENARIO);

        let args = solve_args(&[
            "-S",
            "target.min=22",
            "-S",
            "target.max=35",
            "-S",
            "distance-defaults.max=50",
            "-S",
            "search.objective=highest",
            "--target-max",
            "38",
        ]);
        let (scenario, config) = PartialScenarioConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(scenario.target_cg_range(), CgRange::new(22.0, 38.0));
        let shelf = scenario.element_id("SHELF").unwrap();
        let lid = scenario.element_id("LID").unwrap();
        assert_eq!(scenario.max_distance().get(shelf, lid), 50.0);
        assert_eq!(config.objective, Objective::Highest);

        let args = solve_args(&["-S", "search.objective=highest", "--objective", "lowest"]);
        let (_, config) = PartialScenarioConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();
        assert_eq!(config.objective, Objective::Lowest);
    }

    #[test]
    fn total_height_flag_moves_top_elements() {
        let args = solve_args(&["-S", "total-height=90", "--total-height", "100"]);
        let (scenario, _) = PartialScenarioConfig::builtin()
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();
        let rad = scenario.element_id("RAD").unwrap();
        assert_eq!(scenario.total_height(), 100.0);
        assert_eq!(scenario.element(rad).fixed_height(), Some(92.5));
    }

    #[test]
    fn missing_target_returns_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            "no_target.toml",
            r#"
total-height = 50.0

[[elements]]
name = "A"
mass = 1.0
thickness = 1.0
placement = "movable"
"#,
        );

        let result = PartialScenarioConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&solve_args(&[]));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("target.min")));

        let result = PartialScenarioConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&solve_args(&["--target-min", "1", "--target-max", "2"]));
        assert!(result.is_ok());
    }

    #[test]
    fn unknown_fields_are_rejected_when_parsing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "typo.toml", "total-hieght = 98.0\n");
        let result = PartialScenarioConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PartialScenarioConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn unknown_element_in_distances_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let content = format!("{}\n[[distances]]\npair = [\"A\", \"GPS\"]\nmin = 1.0\n", SMALL_SCENARIO);
        let path = write_config_file(&dir, "unknown.toml", &content);

        let result = PartialScenarioConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&solve_args(&[]));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("GPS")));
    }

    #[test]
    fn empty_distance_entry_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let content = format!("{}\n[[distances]]\npair = [\"A\", \"LID\"]\n", SMALL_SCENARIO);
        let path = write_config_file(&dir, "empty.toml", &content);

        let result = PartialScenarioConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&solve_args(&[]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn invalid_set_values_are_reported() {
        let config = PartialScenarioConfig::builtin().unwrap();
        let result = config.merge_with_cli(&solve_args(&["-S", "target.mid=50"]));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("target.mid")));

        let config = PartialScenarioConfig::builtin().unwrap();
        let result = config.merge_with_cli(&solve_args(&["-S", "target.min"]));
        assert!(matches!(
            result,
            Err(CliError::Argument(ParseError::InvalidAssignment(_)))
        ));

        let config = PartialScenarioConfig::builtin().unwrap();
        let result = config.merge_with_cli(&solve_args(&["-S", "target.min=low"]));
        assert!(matches!(
            result,
            Err(CliError::Argument(ParseError::InvalidNumber { .. }))
        ));
    }
}
