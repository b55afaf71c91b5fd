mod api;
mod config;
mod display;
mod error;
mod resolve;
mod view;

use api::client::RiotApiClient;
use api::data_dragon::DataDragonClient;
use clap::{Parser, Subcommand};
use config::Config;
use display::output::{
    display_catalog, display_champion, display_error, display_info, display_profile,
    display_success, print_json,
};
use error::AppError;
use indicatif::ProgressBar;
use std::time::Duration;
use view::champion::{build_catalog, lookup_champion};
use view::summoner::lookup_profile;

#[derive(Parser, Debug)]
#[command(name = "League Lookup")]
#[command(about = "Look up summoner profiles and champion abilities", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Platform region (default: RIOT_REGION or na1)
    #[arg(short, long, global = true)]
    region: Option<String>,

    /// Data Dragon patch (default: DDRAGON_VERSION or 10.1.1)
    #[arg(long, global = true)]
    patch: Option<String>,

    /// Print the view model as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Profile, solo/duo rank and recent matches for a summoner name
    Summoner {
        name: String,

        /// Number of recent matches to show
        #[arg(short, long, default_value = "10")]
        matches: usize,
    },
    /// Stats, passive and resolved Q/W/E/R for one champion id (e.g. DrMundo)
    Champion { name: String },
    /// Every champion id on the configured patch
    Champions,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "league_lookup=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn spinner(enabled: bool, message: String) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }
    if let Some(patch) = args.patch {
        config.data_version = patch;
    }
    let interactive = !args.json;

    match args.command {
        Command::Summoner { name, matches } => {
            let client = RiotApiClient::new(&config)?;

            if interactive {
                display_info(&format!("Looking up {} in region {}", name, config.region));
            }
            let pb = spinner(interactive, "Fetching profile, rank and matches".to_string());
            let profile = lookup_profile(&client, &name, &config.data_version);
            pb.finish_and_clear();
            let profile = profile?;

            if args.json {
                print_json(&profile)?;
            } else {
                display_success(&format!("Found {}", profile.name));
                display_profile(&profile, matches);
            }
        }
        Command::Champion { name } => {
            let client = DataDragonClient::new(&config);

            let pb = spinner(interactive, format!("Fetching {} (patch {})", name, client.version()));
            let champion = lookup_champion(&client, &name);
            pb.finish_and_clear();
            let champion = champion?;

            if args.json {
                print_json(&champion)?;
            } else {
                display_champion(&champion);
            }
        }
        Command::Champions => {
            let client = DataDragonClient::new(&config);

            let pb = spinner(interactive, format!("Fetching champion list (patch {})", client.version()));
            let catalog = client.get_champion_catalog();
            pb.finish_and_clear();
            let entries = build_catalog(&catalog?);

            if args.json {
                print_json(&entries)?;
            } else {
                display_catalog(&entries, client.version());
            }
        }
    }

    Ok(())
}
