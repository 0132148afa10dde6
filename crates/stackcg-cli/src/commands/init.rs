use crate::cli::InitArgs;
use crate::config::DEFAULT_SCENARIO_TOML;
use crate::error::{CliError, Result};
use std::path::Path;
use tracing::info;

pub fn run(args: InitArgs) -> Result<()> {
    write_default_scenario(&args.output, args.force)?;
    println!("Default scenario written to: {}", args.output.display());
    Ok(())
}

fn write_default_scenario(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "'{}' already exists. Use --force to overwrite it.",
            path.display()
        )));
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_SCENARIO_TOML)?;
    info!("Wrote the built-in scenario to {:?}", path);
    Ok(())
}
