//! CLI entry point for the `ftrip` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use flight_trips::cli::commands;
use flight_trips::index::Filter;

#[derive(Parser)]
#[command(
    name = "ftrip",
    about = "Flight trips CLI — query a trip dataset by number, city or carrier"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display summary information about a dataset
    Info {
        /// Path to the JSON dataset
        file: PathBuf,
    },
    /// List every trip in flight-number order
    List {
        /// Path to the JSON dataset
        file: PathBuf,
    },
    /// Look up a single trip by flight number
    Find {
        /// Path to the JSON dataset
        file: PathBuf,
        /// Flight number, e.g. AI-855
        flight_number: String,
    },
    /// Find all trips matching one attribute value
    Search {
        /// Path to the JSON dataset
        file: PathBuf,
        /// Attribute to match: origin, destination or carrier
        filter: String,
        /// Attribute value, e.g. a city or carrier name
        value: String,
    },
    /// Highest fare among a carrier's trips
    MaxFare {
        /// Path to the JSON dataset
        file: PathBuf,
        /// Carrier name
        carrier: String,
    },
    /// Lowest fare on a direct connection between two cities
    MinFare {
        /// Path to the JSON dataset
        file: PathBuf,
        /// Origin city
        origin: String,
        /// Destination city
        destination: String,
    },
    /// Integer-truncating average fare over the whole dataset
    Average {
        /// Path to the JSON dataset
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::List { file } => commands::cmd_list(&file, json),
        Commands::Find {
            file,
            flight_number,
        } => commands::cmd_find(&file, &flight_number, json),
        Commands::Search {
            file,
            filter,
            value,
        } => {
            let filter = match Filter::from_name(&filter) {
                Some(filter) => filter,
                None => {
                    eprintln!("Invalid filter: {}", filter);
                    process::exit(3);
                }
            };
            commands::cmd_search(&file, filter, &value, json)
        }
        Commands::MaxFare { file, carrier } => commands::cmd_max_fare(&file, &carrier, json),
        Commands::MinFare {
            file,
            origin,
            destination,
        } => commands::cmd_min_fare(&file, &origin, &destination, json),
        Commands::Average { file } => commands::cmd_average(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            flight_trips::TripError::Io(_) => 1,
            flight_trips::TripError::Dataset(_) => 2,
            flight_trips::TripError::TripNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
