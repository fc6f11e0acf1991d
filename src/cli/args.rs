//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::{Strategy, TraversalOrder};

/// Explore local hidden gems: browse by category, search, traverse and get recommendations
#[derive(Parser, Debug)]
#[command(name = "hidden-gems")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Catalog file (TOML) instead of the built-in sample
    #[arg(long, global = true, value_hint = ValueHint::FilePath, env = "HIDDENGEMS_CATALOG_FILE")]
    pub catalog: Option<PathBuf>,

    /// Additional config file
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (default)
    Browse,

    /// List all places
    List,

    /// Find places by name (case-insensitive substring)
    Search {
        /// Text contained in the place name
        query: String,
    },

    /// Places within a distance
    Nearby {
        /// Maximum distance in miles
        miles: f64,
    },

    /// Show the category tree
    Traverse {
        /// Walk order
        #[arg(short, long, value_enum, default_value_t = OrderArg::Dfs)]
        order: OrderArg,
    },

    /// Recommend places related to a place
    Recommend {
        /// Reference place name
        name: String,
        /// Recommendation strategy
        #[arg(short, long, value_enum, default_value_t = StrategyArg::Similarity)]
        by: StrategyArg,
    },

    /// Pick a random place
    Surprise,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a config template
    Template,
    /// Show config file locations
    Path,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    /// Depth-first
    Dfs,
    /// Breadth-first
    Bfs,
}

impl From<OrderArg> for TraversalOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Dfs => TraversalOrder::Dfs,
            OrderArg::Bfs => TraversalOrder::Bfs,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// Same subcategory, then same category
    Similarity,
    /// Closest distance
    Proximity,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Similarity => Strategy::Similarity,
            StrategyArg::Proximity => Strategy::Proximity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_recommend_args_when_parsing_then_reads_strategy() {
        let cli = Cli::parse_from(["hidden-gems", "recommend", "Gong Cha", "--by", "proximity"]);
        match cli.command {
            Some(Commands::Recommend { name, by }) => {
                assert_eq!(name, "Gong Cha");
                assert_eq!(by, StrategyArg::Proximity);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn given_repeated_debug_flag_when_parsing_then_counts() {
        let cli = Cli::parse_from(["hidden-gems", "-dd", "list"]);
        assert_eq!(cli.debug, 2);
    }
}
