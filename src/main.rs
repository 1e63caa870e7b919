use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use connect_four_agents::ai::{build_agent, AgentKind};
use connect_four_agents::arena::{play_match, GameRecord};
use connect_four_agents::config::AppConfig;
use connect_four_agents::game::{render, Player};
use connect_four_agents::logging::setup_logging;

/// Pit two Connect Four agents against each other.
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect Four matches between search agents")]
struct Cli {
    /// Agent playing Red in the first game
    #[arg(long, value_enum, default_value = "minimax")]
    red: AgentKind,

    /// Agent playing Yellow in the first game
    #[arg(long, value_enum, default_value = "random")]
    yellow: AgentKind,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Alternate colours between games (true/false)
    #[arg(long)]
    swap_colors: Option<bool>,

    /// Override minimax search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override MCTS time budget per move, in seconds
    #[arg(long)]
    time_budget: Option<f64>,

    /// Seed the random and MCTS agents
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Write the match summary as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the final board of every game
    #[arg(long)]
    show_boards: bool,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = setup_logging(&cli.log_level).context("initializing logger")?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if let Some(swap) = cli.swap_colors {
        config.arena.swap_colors = swap;
    }
    if let Some(depth) = cli.depth {
        config.minimax.depth = depth;
    }
    if let Some(budget) = cli.time_budget {
        config.mcts.time_budget_secs = budget;
    }
    if let Some(seed) = cli.seed {
        config.random.seed = Some(seed);
        config.mcts.seed = Some(seed.wrapping_add(1));
    }
    config.validate().context("invalid configuration")?;

    let mut first = build_agent(cli.red, &config);
    let mut second = build_agent(cli.yellow, &config);
    info!(
        "{} vs {}: {} games{}",
        first.name(),
        second.name(),
        config.arena.games,
        if config.arena.swap_colors { ", swapping colours" } else { "" }
    );

    let show_boards = cli.show_boards;
    let summary = play_match(
        &config.arena,
        first.as_mut(),
        second.as_mut(),
        |index, record| print_game(index, record, show_boards),
    )
    .context("match aborted")?;

    println!();
    println!("{:<10} {:>6} {:>8}", "agent", "wins", "rate");
    println!(
        "{:<10} {:>6} {:>7.1}%",
        summary.first,
        summary.first_wins,
        summary.first_win_rate() * 100.0
    );
    println!(
        "{:<10} {:>6} {:>7.1}%",
        summary.second,
        summary.second_wins,
        summary.second_win_rate() * 100.0
    );
    println!(
        "{:<10} {:>6} {:>7.1}%",
        "draws",
        summary.draws,
        summary.draw_rate() * 100.0
    );
    println!("average game length: {:.1} moves", summary.average_game_length());

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&summary).context("serializing summary")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!("report written to {}", path.display());
    }

    Ok(())
}

fn print_game(index: usize, record: &GameRecord, show_board: bool) {
    let outcome = match record.winner {
        Some(player) => {
            let name = match player {
                Player::Red => &record.red,
                Player::Yellow => &record.yellow,
            };
            format!("{name} ({}) wins", player.name())
        }
        None => "draw".to_string(),
    };
    println!(
        "game {:>3}: {} (X) vs {} (O), {} in {} moves",
        index + 1,
        record.red,
        record.yellow,
        outcome,
        record.length()
    );
    if show_board {
        println!("{}", render(&record.final_board));
    }
}
