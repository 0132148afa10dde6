use crate::utils::parser::parse_objective;
use clap::{Args, Parser, Subcommand};
use stackcg::engine::config::Objective;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tomas Oliveira",
    version,
    about = "stackcg - Places the boards of a stacked enclosure (e.g. a CubeSat) so that the center of gravity lands inside a target range.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to explore assignment orders.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for the placement of the movable elements with the best center of gravity.
    Solve(SolveArgs),
    /// Write the built-in CubeSat scenario to a file as a starting point.
    Init(InitArgs),
}

/// Arguments for the `solve` subcommand.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Path to the scenario file in TOML format. The built-in CubeSat scenario is used
    /// when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the enclosure height.
    #[arg(long, value_name = "FLOAT")]
    pub total_height: Option<f64>,

    /// Override the lower end of the target CG range.
    #[arg(long, value_name = "FLOAT")]
    pub target_min: Option<f64>,

    /// Override the upper end of the target CG range.
    #[arg(long, value_name = "FLOAT")]
    pub target_max: Option<f64>,

    /// Override the search objective: 'lowest', 'highest' or 'nearest-to=<FLOAT>'.
    #[arg(long, value_name = "OBJECTIVE", value_parser = parse_objective)]
    pub objective: Option<Objective>,

    /// Set a specific scenario value, overriding the config file.
    /// Can be used multiple times. Example: -S target.min=45
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    /// Also write the result and search statistics to a TOML report.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

/// Arguments for the `init` subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Destination of the scenario file.
    #[arg(short, long, value_name = "PATH", default_value = "scenario.toml")]
    pub output: PathBuf,

    /// Overwrite the destination if it already exists.
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_parses_overrides_and_global_flags() {
        let cli = Cli::parse_from([
            "stackcg",
            "-vv",
            "-j",
            "2",
            "solve",
            "--target-min",
            "45",
            "--objective",
            "nearest-to=50",
            "-S",
            "total-height=100",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.threads, Some(2));
        let Commands::Solve(args) = cli.command else {
            panic!("Expected 'solve' subcommand");
        };
        assert!(args.config.is_none());
        assert_eq!(args.target_min, Some(45.0));
        assert_eq!(args.objective, Some(Objective::NearestTo(50.0)));
        assert_eq!(args.set_values, vec!["total-height=100".to_string()]);
    }

    #[test]
    fn init_defaults_to_scenario_toml() {
        let cli = Cli::parse_from(["stackcg", "init"]);
        let Commands::Init(args) = cli.command else {
            panic!("Expected 'init' subcommand");
        };
        assert_eq!(args.output, PathBuf::from("scenario.toml"));
        assert!(!args.force);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["stackcg", "-q", "-v", "init"]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_objective_is_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["stackcg", "solve", "--objective", "median"]);
        assert!(result.is_err());
    }
}
