//! # Temporal Funhouse - Protocol Demo
//!
//! Runs Othello games under the four variant protocols with the baseline AI
//! players, prints a colored summary, and optionally writes the JSON match
//! reports.
//!
//! ## Usage
//! ```text
//! play --protocol retro --ai greedy
//! play --protocol all --ai corner --seed 7
//! play --protocol babel --games 20 --jobs 4 --json results.json
//! ```
//!
//! LLM-backed players are a library feature: build an
//! [`funhouse::players::LlmPlayer`] with your provider call as the transport
//! closure and hand it to [`funhouse::arena::run_game`].

use clap::{Parser, ValueEnum};
use colored::Colorize;
use funhouse::arena::{self, GameConfig};
use funhouse::board::Color;
use funhouse::players::{CornerPlayer, GreedyPlayer, RandomPlayer};
use funhouse::protocols::ProtocolKind;
use funhouse::scoring::MatchReport;
use funhouse::Player;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProtocolArg {
    Babel,
    Retro,
    Schrodinger,
    Concept,
    /// Run every protocol once.
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AiArg {
    Random,
    Greedy,
    Corner,
}

/// Temporal Funhouse - Othello under reality-bending protocols.
#[derive(Parser, Debug)]
#[command(name = "play", about = "Temporal Funhouse protocol demo")]
struct Args {
    /// Protocol to run.
    #[arg(long, value_enum, default_value_t = ProtocolArg::Babel)]
    protocol: ProtocolArg,

    /// Baseline AI for both sides.
    #[arg(long, value_enum, default_value_t = AiArg::Greedy)]
    ai: AiArg,

    /// Base RNG seed; omit for a time-derived one.
    #[arg(long)]
    seed: Option<u64>,

    /// Games per protocol (batch evaluation when > 1).
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Worker threads for batch runs; 0 uses all CPUs.
    #[arg(long, default_value_t = 0)]
    jobs: usize,

    /// Write all match reports to this file as JSON.
    #[arg(long)]
    json: Option<PathBuf>,
}

fn make_players(ai: AiArg, seed: u64) -> (Box<dyn Player>, Box<dyn Player>) {
    match ai {
        AiArg::Random => (
            Box::new(RandomPlayer::new(Color::Black, seed)),
            Box::new(RandomPlayer::new(Color::White, seed ^ 0x5151)),
        ),
        AiArg::Greedy => (
            Box::new(GreedyPlayer::new(Color::Black)),
            Box::new(GreedyPlayer::new(Color::White)),
        ),
        AiArg::Corner => (
            Box::new(CornerPlayer::new(Color::Black)),
            Box::new(CornerPlayer::new(Color::White)),
        ),
    }
}

fn banner(protocol: ProtocolKind) {
    let line = "=".repeat(60);
    println!("\n{}", line.cyan());
    let title = match protocol {
        ProtocolKind::Babel => "BABEL PROTOCOL - Communication Breakdown",
        ProtocolKind::Retro => "RETRO PROTOCOL - Time Paradoxes",
        ProtocolKind::Schrodinger => "SCHRODINGER PROTOCOL - Quantum Uncertainty",
        ProtocolKind::Concept => "CONCEPT PROTOCOL - Aesthetics & Ethics",
    };
    println!("  {}", title.bold());
    println!("{}\n", line.cyan());
}

fn summarize(report: &MatchReport) {
    println!(
        "  {} {} - {} {}",
        "Black".green().bold(),
        report.black.stones,
        "White".red().bold(),
        report.white.stones
    );
    println!(
        "  Final score: {} {:.1} - {} {:.1}  ({} turns)",
        "Black".green(),
        report.black.total,
        "White".red(),
        report.white.total,
        report.turns_played
    );
    match report.winner {
        Some(Color::Black) => println!("  Winner: {}", "Black".green().bold()),
        Some(Color::White) => println!("  Winner: {}", "White".red().bold()),
        None => println!("  Result: {}", "Draw".yellow()),
    }
    match report.protocol {
        ProtocolKind::Retro => {
            println!(
                "  Time quakes logged: {}, paradoxes detected: {}",
                report.paradoxes.len(),
                report.paradox_count()
            );
            for p in &report.paradoxes {
                println!(
                    "    turn {:>2} erased turn {:>2}: {} discrepant cells",
                    p.trigger_turn, p.target_turn, p.cell_discrepancies
                );
            }
        }
        ProtocolKind::Babel => {
            println!("  Corrupted messages delivered: {}", report.corrupted_messages)
        }
        ProtocolKind::Schrodinger => {
            println!("  Stones settled by decoherence: {}", report.collapses)
        }
        ProtocolKind::Concept => println!(
            "  Aesthetics B/W: {:.2}/{:.2}  Ethics B/W: {:.2}/{:.2}",
            report.black.aesthetics,
            report.white.aesthetics,
            report.black.ethics,
            report.white.ethics
        ),
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let protocols: Vec<ProtocolKind> = match args.protocol {
        ProtocolArg::Babel => vec![ProtocolKind::Babel],
        ProtocolArg::Retro => vec![ProtocolKind::Retro],
        ProtocolArg::Schrodinger => vec![ProtocolKind::Schrodinger],
        ProtocolArg::Concept => vec![ProtocolKind::Concept],
        ProtocolArg::All => ProtocolKind::ALL.to_vec(),
    };

    let mut all_reports = Vec::new();
    for protocol in protocols {
        banner(protocol);
        let config = GameConfig::new(protocol, seed);
        if args.games <= 1 {
            let (mut black, mut white) = make_players(args.ai, seed);
            let report = arena::run_game(&config, black.as_mut(), white.as_mut());
            summarize(&report);
            all_reports.push(report);
        } else {
            let reports = arena::run_batch(&config, args.games, args.jobs, |_, game_seed| {
                make_players(args.ai, game_seed)
            });
            let black_wins = reports
                .iter()
                .filter(|r| r.winner == Some(Color::Black))
                .count();
            let white_wins = reports
                .iter()
                .filter(|r| r.winner == Some(Color::White))
                .count();
            println!(
                "  {} games: {} {} / {} {} / {} draws",
                reports.len(),
                "Black".green(),
                black_wins,
                "White".red(),
                white_wins,
                reports.len() - black_wins - white_wins
            );
            all_reports.extend(reports);
        }
    }

    if let Some(path) = &args.json {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &all_reports)?;
        println!("Reports written to {}", path.display());
    }
    Ok(())
}
