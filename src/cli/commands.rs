//! Command dispatch: wires discovery, tree building and linearization

use std::path::Path;

use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::discovery::CatalogDiscovery;
use crate::domain::{DependencyMap, DependencyTreeBuilder, LevelOrderLinearizer};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { dir, module }) => _tree(dir, module.as_deref()),
        Some(Commands::List { dir, module }) => _list(dir, module.as_deref()),
        Some(Commands::Entities { dir, module }) => _entities(dir, module.as_deref()),
        None => Ok(()),
    }
}

fn discover(dir: &Path, module: Option<&str>) -> CliResult<DependencyMap> {
    let settings = Settings::load()?;
    // CLI flag wins over the configured default filter
    let module_filter = module.map(str::to_string).or(settings.module);
    debug!("module filter: {:?}", module_filter);

    let map = CatalogDiscovery::new(settings.model_extension)
        .with_module_filter(module_filter)
        .discover_directory(dir)?;

    if map.is_empty() {
        output::warning(&format!("no entities found in {}", dir.display()));
    }
    Ok(map)
}

#[instrument]
fn _tree(dir: &Path, module: Option<&str>) -> CliResult<()> {
    let map = discover(dir, module)?;
    let tree = DependencyTreeBuilder::new().build(&map)?;

    for subtree in tree.arena().to_tree_string().leaves {
        output::info(&subtree);
    }
    output::info(&format!("Height: {}", tree.height()));
    Ok(())
}

#[instrument]
fn _list(dir: &Path, module: Option<&str>) -> CliResult<()> {
    let map = discover(dir, module)?;
    let tree = DependencyTreeBuilder::new().build(&map)?;

    for entity in LevelOrderLinearizer::linearize(&tree) {
        output::info(&entity);
    }
    Ok(())
}

#[instrument]
fn _entities(dir: &Path, module: Option<&str>) -> CliResult<()> {
    let map = discover(dir, module)?;

    for (entity, dependencies) in map.iter() {
        if dependencies.is_empty() {
            output::info(entity);
        } else {
            output::info(&format!("{} <- {}", entity, dependencies.join(", ")));
        }
    }
    Ok(())
}
