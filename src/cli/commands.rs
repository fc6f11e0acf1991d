use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use rand::thread_rng;
use tracing::{debug, instrument};

use crate::application::services::ExplorerService;
use crate::cli::args::{Cli, Commands, ConfigCommands, OrderArg, StrategyArg};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::shell::Shell;
use crate::config::{global_config_path, Settings};
use crate::domain::{PlaceId, Strategy, TraversalOrder};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::ReaderInput;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(Commands::Completion { shell }) = &cli.command {
        return _completion(*shell);
    }

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(catalog) = &cli.catalog {
        settings.catalog_file = Some(catalog.clone());
    }

    if let Some(Commands::Config { command }) = &cli.command {
        return _config(command, &settings, cli.config.as_deref());
    }

    let show_random_pick = settings.show_random_pick;
    let container = ServiceContainer::new(settings);
    let mut explorer = container.explorer()?;

    match &cli.command {
        None | Some(Commands::Browse) => _browse(&mut explorer, show_random_pick),
        Some(Commands::List) => _list(&explorer),
        Some(Commands::Search { query }) => _search(&explorer, query),
        Some(Commands::Nearby { miles }) => _nearby(&explorer, *miles),
        Some(Commands::Traverse { order }) => _traverse(&explorer, *order),
        Some(Commands::Recommend { name, by }) => _recommend(&explorer, name, *by),
        Some(Commands::Surprise) => _surprise(&explorer),
        Some(Commands::Config { .. }) | Some(Commands::Completion { .. }) => Ok(()),
    }
}

#[instrument(skip(explorer))]
fn _browse(explorer: &mut ExplorerService, show_random_pick: bool) -> CliResult<()> {
    let stdout = io::stdout();
    let mut shell = Shell::new(explorer, ReaderInput::stdin(), stdout.lock());
    shell
        .run(show_random_pick)
        .map_err(|e| InfraError::io("interactive session", e))?;
    Ok(())
}

fn print_places(explorer: &ExplorerService, ids: &[PlaceId]) {
    if ids.is_empty() {
        output::info("No places to show.");
        return;
    }
    for place in explorer.places(ids) {
        output::info(place);
    }
}

#[instrument(skip(explorer))]
fn _list(explorer: &ExplorerService) -> CliResult<()> {
    output::header("All Places:");
    print_places(explorer, &explorer.list_all());
    Ok(())
}

#[instrument(skip(explorer))]
fn _search(explorer: &ExplorerService, query: &str) -> CliResult<()> {
    let ids = explorer.search(query);
    debug!("search {:?}: {} hits", query, ids.len());
    output::header(&format!("Results for '{}':", query));
    print_places(explorer, &ids);
    Ok(())
}

#[instrument(skip(explorer))]
fn _nearby(explorer: &ExplorerService, miles: f64) -> CliResult<()> {
    if !miles.is_finite() {
        return Err(CliError::InvalidArgs(format!("invalid distance: {}", miles)));
    }
    output::header(&format!("Places within {} miles:", miles));
    print_places(explorer, &explorer.filter_by_max_distance(miles));
    Ok(())
}

#[instrument(skip(explorer))]
fn _traverse(explorer: &ExplorerService, order: OrderArg) -> CliResult<()> {
    let order: TraversalOrder = order.into();
    let tree = output::render_tree(
        &format!("Places ({})", order),
        explorer.traverse(order),
        explorer.catalog(),
    );
    output::info(&tree);
    Ok(())
}

#[instrument(skip(explorer))]
fn _recommend(explorer: &ExplorerService, name: &str, by: StrategyArg) -> CliResult<()> {
    let reference = explorer.find_by_name(name)?;
    let strategy: Strategy = by.into();
    let ids = explorer.recommend(reference, strategy);

    match strategy {
        Strategy::Similarity => output::header(&format!("Recommendations based on {}:", name)),
        Strategy::Proximity => output::header(&format!("Closest places to {}:", name)),
    }
    if ids.is_empty() {
        output::info("No recommendations found.");
    }
    for place in explorer.places(&ids) {
        output::detail(&output::place_line(place));
    }
    Ok(())
}

#[instrument(skip(explorer))]
fn _surprise(explorer: &ExplorerService) -> CliResult<()> {
    match explorer.surprise(&mut thread_rng()) {
        Some(id) => {
            if let Some(place) = explorer.place(id) {
                output::info(&format!("Surprise Pick: {}", place));
            }
        }
        None => output::warning("No places to pick from!"),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _config(command: &ConfigCommands, settings: &Settings, local: Option<&Path>) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => {
                    let status = if path.exists() { "" } else { " (not found)" };
                    output::info(&format!("Global: {}{}", path.display(), status));
                }
                None => output::warning("Global: no config directory available"),
            }
            match local {
                Some(path) => output::info(&format!("Local:  {}", path.display())),
                None => output::info("Local:  (none, use --config)"),
            }
        }
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut stdout = io::stdout();
    generate(shell, &mut cmd, name, &mut stdout);
    stdout
        .flush()
        .map_err(|e| InfraError::io("write completions", e))?;
    Ok(())
}
