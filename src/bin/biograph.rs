//! CLI entry point for the `biograph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use biograph::cli::{commands, exit_code, parse_pair};
use biograph::config;
use biograph::engine::SolverStrategy;

#[derive(Parser)]
#[command(
    name = "biograph",
    about = "Complexes, shortest paths and hubs in protein interaction networks"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the shortest-path strategy: linear_scan or binary_heap
    #[arg(long)]
    solver: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summary statistics for an interaction file
    Stats {
        /// Path to the .csv file
        file: PathBuf,
    },
    /// List proteins with their degree
    Proteins {
        /// Path to the .csv file
        file: PathBuf,
    },
    /// Show the active neighbours of a protein
    Neighbors {
        /// Path to the .csv file
        file: PathBuf,
        /// Protein name
        protein: String,
    },
    /// Find protein complexes (connected components)
    Complexes {
        /// Path to the .csv file
        file: PathBuf,
        /// Interaction to ignore, as A:B (repeatable)
        #[arg(long)]
        deactivate: Vec<String>,
    },
    /// Cheapest route between two proteins
    Path {
        /// Path to the .csv file
        file: PathBuf,
        /// Origin protein
        origin: String,
        /// Destination protein
        destination: String,
        /// Interaction to ignore, as A:B (repeatable)
        #[arg(long)]
        deactivate: Vec<String>,
    },
    /// Most connected proteins
    Hubs {
        /// Path to the .csv file
        file: PathBuf,
        /// Number of hubs to list (0 = all)
        #[arg(long)]
        top: Option<usize>,
        /// Interaction to ignore, as A:B (repeatable)
        #[arg(long)]
        deactivate: Vec<String>,
    },
    /// Add an interaction to the file
    Link {
        /// Path to the .csv file
        file: PathBuf,
        /// First protein
        origin: String,
        /// Second protein
        destination: String,
        /// Interaction cost
        weight: f64,
    },
    /// Remove an interaction from the file
    Unlink {
        /// Path to the .csv file
        file: PathBuf,
        /// First protein
        origin: String,
        /// Second protein
        destination: String,
    },
    /// Remove a protein and its interactions from the file
    Remove {
        /// Path to the .csv file
        file: PathBuf,
        /// Protein name
        protein: String,
    },
    /// Write a normalised copy of the file
    Export {
        /// Path to the .csv file
        file: PathBuf,
        /// Destination .csv file
        output: PathBuf,
    },
}

fn parse_pairs(raw: &[String]) -> Vec<(String, String)> {
    raw.iter()
        .map(|text| match parse_pair(text) {
            Some(pair) => pair,
            None => {
                eprintln!("Invalid interaction {:?}, expected A:B", text);
                process::exit(3);
            }
        })
        .collect()
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let mut config = match config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(exit_code(&e));
        }
    };
    if let Some(name) = &cli.solver {
        config.solver = match SolverStrategy::from_name(name) {
            Some(strategy) => strategy,
            None => {
                eprintln!("Invalid solver: {}", name);
                process::exit(3);
            }
        };
    }

    let result = match cli.command {
        Commands::Stats { file } => commands::cmd_stats(&file, &config, json),
        Commands::Proteins { file } => commands::cmd_proteins(&file, &config, json),
        Commands::Neighbors { file, protein } => {
            commands::cmd_neighbors(&file, &protein, &config, json)
        }
        Commands::Complexes { file, deactivate } => {
            commands::cmd_complexes(&file, &parse_pairs(&deactivate), &config, json)
        }
        Commands::Path {
            file,
            origin,
            destination,
            deactivate,
        } => commands::cmd_path(
            &file,
            &origin,
            &destination,
            &parse_pairs(&deactivate),
            &config,
            json,
        ),
        Commands::Hubs {
            file,
            top,
            deactivate,
        } => commands::cmd_hubs(&file, top, &parse_pairs(&deactivate), &config, json),
        Commands::Link {
            file,
            origin,
            destination,
            weight,
        } => commands::cmd_link(&file, &origin, &destination, weight, &config, json),
        Commands::Unlink {
            file,
            origin,
            destination,
        } => commands::cmd_unlink(&file, &origin, &destination, &config, json),
        Commands::Remove { file, protein } => {
            commands::cmd_remove(&file, &protein, &config, json)
        }
        Commands::Export { file, output } => commands::cmd_export(&file, &output, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(exit_code(&e));
    }
}
