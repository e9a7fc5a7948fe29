use clap::Parser;
use nemestats_processor::{
    args::Args,
    database::{HistoryError, HistorySnapshot},
    model::{
        group::index_by_player, player_details, player_quick_stats, players_to_create, players_with_nemesis,
        DateRangeFilter, StatsError
    }
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Error)]
enum ProcessorError {
    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Nothing to do: pass --player, --gaming-group, or --user with --gaming-group")]
    NothingRequested
}

fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    init_tracing(&args.log_level);

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str) {
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();
}

fn run(args: &Args) -> Result<(), ProcessorError> {
    let range = DateRangeFilter::new(args.from, args.to)?;
    let history = HistorySnapshot::from_path(&args.history)?;
    let mut printed = false;

    if let Some(player_id) = args.player {
        let details = player_details(&history, player_id, args.recent_games)?;
        info!("Computed details for player {} ({})", details.id, details.name);
        print_json(&details)?;
        printed = true;
    }

    if let Some(gaming_group_id) = args.gaming_group {
        match &args.user {
            Some(user) => {
                print_json(&player_quick_stats(&history, user, gaming_group_id))?;
                print_json(&players_to_create(&history, user, gaming_group_id))?;
            }
            None => {
                let listing = index_by_player(players_with_nemesis(&history, gaming_group_id, &range));
                print_json(&listing)?;
            }
        }
        printed = true;
    }

    if !printed {
        return Err(ProcessorError::NothingRequested);
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ProcessorError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
