//! mana-duel CLI - run seeded duels and report the winners.

use std::time::Instant;

use clap::Parser;
use mana_duel::{GamePlay, MatchConfig, MatchReport, Seat, Seats};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mana-duel")]
#[command(about = "Simulate two-player mana duels")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Seed for the first match; later matches use seed + match index
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Name of the player who moves first
    #[arg(long, default_value = "Player 1")]
    player_one: String,

    /// Name of the player who moves second
    #[arg(long, default_value = "Player 2")]
    player_two: String,

    /// Abandon a match after this many turns
    #[arg(long, default_value = "10000")]
    max_turns: u32,

    /// Print one JSON report per match instead of text
    #[arg(long)]
    json: bool,

    /// Enable turn-by-turn narration
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise quiet unless --verbose
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting {} match(es) from seed {}", args.games, args.seed);

    let start = Instant::now();
    let mut reports = Vec::new();
    let mut errors = 0u32;

    for game_index in 0..args.games {
        let config = MatchConfig::default()
            .with_seed(args.seed.wrapping_add(u64::from(game_index)))
            .with_max_turns(args.max_turns);
        let mut game = GamePlay::from_names(args.player_one.as_str(), args.player_two.as_str(), config);

        if let Err(e) = game.play() {
            errors += 1;
            warn!("Match {} failed: {}", game_index + 1, e);
            continue;
        }
        let report = game.report().ok_or("finished match produced no report")?;

        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!(
                "Match {}: {} wins after {} turns",
                game_index + 1,
                report.winner_name,
                report.turns
            );
        }
        reports.push(report);
    }

    if !args.json {
        print_summary(&reports, errors, start.elapsed(), args.games);
    }
    Ok(())
}

fn print_summary(reports: &[MatchReport], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", reports.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);

    if reports.is_empty() {
        return;
    }

    let mut wins = Seats::new(0u32, 0u32);
    let mut turns = 0u64;
    for report in reports {
        wins[report.winner] += 1;
        turns += u64::from(report.turns);
    }

    println!("Average turns per match: {:.1}", turns as f64 / reports.len() as f64);
    for seat in Seat::ALL {
        let name = &reports[0].players[seat].name;
        let win_rate = f64::from(wins[seat]) / reports.len() as f64 * 100.0;
        println!("{} ({}): wins={} ({:.1}%)", seat, name, wins[seat], win_rate);
    }
}
