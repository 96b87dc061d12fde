//! # Arena - The Turn Loop
//!
//! Wires one game together: game master (authoritative board), causal ledger,
//! the active protocol's hooks, and two players. Execution is strictly
//! turn-sequential; nothing here blocks or suspends. Batch evaluation runs
//! many games in parallel, but every game owns its own master, ledger, and
//! RNG - there is no shared mutable state between games.
//!
//! Turn cycle:
//! 1. compute legal moves; no moves is a forced, recorded pass
//! 2. build the player's view (BABEL may corrupt it here)
//! 3. the player decides; an illegal or unusable choice degrades to a pass
//! 4. the game master applies the move, then the ledger records the turn
//! 5. scheduled protocol events fire (RETRO quake, SCHRODINGER collapse)

use crate::board::Color;
use crate::game_master::{GameMaster, MoveResult};
use crate::ledger::{CausalLedger, LedgerConfig};
use crate::protocols::{
    babel, retro, schrodinger, BabelConfig, ProtocolKind, QuantumConfig, RetroConfig,
};
use crate::scoring::{MatchReport, ScoringConfig};
use crate::{Action, BoardView, Player};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

/// Full configuration for one game. Built once, passed by reference,
/// never mutated mid-run.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub protocol: ProtocolKind,
    /// Hard stop on committed turns (including passes). Standard Othello
    /// finishes well under this; the cap guards pathological pass loops.
    pub max_turns: usize,
    pub seed: u64,
    pub ledger: LedgerConfig,
    pub retro: RetroConfig,
    pub babel: BabelConfig,
    pub quantum: QuantumConfig,
    pub scoring: ScoringConfig,
}

impl GameConfig {
    pub fn new(protocol: ProtocolKind, seed: u64) -> Self {
        GameConfig {
            protocol,
            max_turns: 120,
            seed,
            ledger: LedgerConfig::default(),
            retro: RetroConfig::default(),
            babel: BabelConfig::default(),
            quantum: QuantumConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

/// Plays one full game and compiles its report.
pub fn run_game(
    config: &GameConfig,
    black: &mut dyn Player,
    white: &mut dyn Player,
) -> MatchReport {
    let mut master = GameMaster::new(config.protocol);
    let mut ledger = CausalLedger::new(config.ledger);
    let mut overlay = schrodinger::QuantumOverlay::new();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
    let mut corrupted_messages = 0usize;
    let mut collapses = 0usize;

    tracing::info!(protocol = %config.protocol, black = black.name(), white = white.name(), "game start");

    while !master.is_game_over() && master.turn_count() < config.max_turns {
        let mover = master.to_move();
        let legal = master.legal_moves();

        let action = if legal.is_empty() {
            // Forced pass: the mover never gets asked.
            Action::Pass
        } else {
            let mut view = BoardView::of(master.board(), mover, config.protocol);
            if config.protocol == ProtocolKind::Babel
                && babel::corrupt_view(&config.babel, &mut view, &mut rng)
            {
                corrupted_messages += 1;
            }
            let player: &mut dyn Player = match mover {
                Color::Black => black,
                Color::White => white,
            };
            player.decide(&view)
        };

        // Commit. A rejected placement (possible under BABEL, or from a
        // confused LLM) costs the turn: it degrades to a pass.
        let committed = match action {
            Action::Place(at) => match master.try_place(at) {
                MoveResult::Placed { .. } => {
                    if config.protocol == ProtocolKind::Schrodinger {
                        overlay.on_place(at);
                    }
                    Some(Some(at))
                }
                MoveResult::Invalid { .. } => {
                    tracing::warn!(mover = %mover, cell = %at, "deceived or invalid move, turn forfeited");
                    master.pass();
                    Some(None)
                }
                MoveResult::Passed | MoveResult::GameOver => None,
            },
            Action::Pass => match master.pass() {
                MoveResult::Passed => Some(None),
                _ => None,
            },
        };

        let Some(recorded) = committed else { break };
        let turn = ledger.record_turn(mover, recorded, master.board());

        match config.protocol {
            ProtocolKind::Retro => {
                // Quake reports accumulate inside the ledger's own log.
                retro::maybe_quake(&config.retro, turn, &mut ledger);
            }
            ProtocolKind::Schrodinger => {
                if overlay.is_collapse_turn(&config.quantum, turn) {
                    let events = overlay.collapse(&config.quantum, master.board_mut(), &mut rng);
                    collapses += events.len();
                    master.refresh_status();
                }
            }
            _ => {}
        }
    }

    let report = MatchReport::compile(
        &config.scoring,
        config.protocol,
        master.board(),
        master.status(),
        master.turn_count(),
        black.name(),
        white.name(),
        ledger.reports().to_vec(),
        corrupted_messages,
        collapses,
    );
    tracing::info!(
        turns = report.turns_played,
        winner = ?report.winner,
        paradoxes = report.paradox_count(),
        "game over"
    );
    report
}

/// Runs `games` independent games in parallel and returns their reports in
/// game order. `jobs == 0` sizes the pool to the machine.
///
/// `make_players` receives the game index and must build fresh player
/// instances; per-game seeds are derived from the base seed so a batch is
/// reproducible end to end.
pub fn run_batch<F>(config: &GameConfig, games: usize, jobs: usize, make_players: F) -> Vec<MatchReport>
where
    F: Fn(usize, u64) -> (Box<dyn Player>, Box<dyn Player>) + Sync,
{
    let threads = if jobs > 0 { jobs } else { num_cpus::get() };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .expect("failed to build batch thread pool");
    pool.install(|| {
        (0..games)
            .into_par_iter()
            .map(|i| {
                let mut game_config = config.clone();
                // Distinct, stable stream per game.
                game_config.seed = config.seed.wrapping_add(0x9E37_79B9_7F4A_7C15u64.wrapping_mul(i as u64 + 1));
                let (mut black, mut white) = make_players(i, game_config.seed);
                run_game(&game_config, black.as_mut(), white.as_mut())
            })
            .collect()
    })
}
