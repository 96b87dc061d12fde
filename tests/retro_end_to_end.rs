//! End-to-end RETRO scenario: a scripted 10-turn game, a time quake at turn 9
//! reaching 5 turns back, and an exact accounting of the paradox it creates.
//!
//! The move script is hand-checked: every move is legal when played, turn 4
//! (Black D6) flips exactly two stones (D5 and D4), and turns 5-9 stay on
//! lines that do not cross those cells, so the divergence after erasing turn 4
//! is exactly the placed stone plus its two flips.

use funhouse::board::{Board, Color, Coord};
use funhouse::ledger::{CausalLedger, LedgerConfig, RecordedAction, RetroOutcome};

/// (mover, cell) for turns 0-9, strictly alternating, all legal in sequence.
const SCRIPT: [(Color, Coord); 10] = [
    (Color::Black, Coord(2, 3)), // D3, flips D4
    (Color::White, Coord(4, 2)), // C5, flips D5
    (Color::Black, Coord(5, 5)), // F6, flips E5
    (Color::White, Coord(2, 4)), // E3, flips D4
    (Color::Black, Coord(5, 3)), // D6, flips D5 and D4
    (Color::White, Coord(2, 2)), // C3, flips D3
    (Color::Black, Coord(1, 2)), // C2, flips D3
    (Color::White, Coord(0, 2)), // C1, flips C2
    (Color::Black, Coord(2, 1)), // B3, flips C3
    (Color::White, Coord(2, 0)), // A3, flips B3, C3, D3
];

fn play_script() -> (Board, CausalLedger) {
    let mut board = Board::new();
    let mut ledger = CausalLedger::new(LedgerConfig::default());
    for (i, &(mover, at)) in SCRIPT.iter().enumerate() {
        assert!(
            board.is_valid_move(mover, at),
            "scripted turn {i} ({mover} at {at}) is not legal"
        );
        board.apply(mover, at);
        let idx = ledger.record_turn(mover, Some(at), &board);
        assert_eq!(idx, i);
    }
    (board, ledger)
}

#[test]
fn turn_four_flips_exactly_two_stones() {
    let mut board = Board::new();
    for &(mover, at) in &SCRIPT[..4] {
        board.apply(mover, at);
    }
    let flipped = board.apply(Color::Black, SCRIPT[4].1);
    assert_eq!(flipped.len(), 2);
    assert!(flipped.contains(&Coord(4, 3)));
    assert!(flipped.contains(&Coord(3, 3)));
}

#[test]
fn quake_at_turn_nine_reports_exactly_three_discrepancies() {
    let (board, mut ledger) = play_script();

    let outcome = ledger.trigger_retrocausal_event(9, 5).unwrap();
    let report = match outcome {
        RetroOutcome::Erased(r) => r,
        other => panic!("expected a fresh erasure, got {other:?}"),
    };

    assert_eq!(report.trigger_turn, 9);
    assert_eq!(report.target_turn, 4);
    // The erased placement (D6) plus its two flips (D5, D4); nothing else,
    // because the later moves never touch those cells in either timeline.
    assert_eq!(report.cell_discrepancies, 3);

    // Turn 4 now reads erased; the physical board still shows the move.
    assert_eq!(ledger.records()[4].action, RecordedAction::Erased);
    assert_eq!(board.get(Coord(5, 3)), Some(Color::Black));

    // The replayed timeline disagrees at exactly the three known cells.
    let replayed = ledger.replay_from(9).unwrap();
    assert_eq!(replayed.get(Coord(5, 3)), None);
    assert_eq!(replayed.get(Coord(4, 3)), Some(Color::White));
    assert_eq!(board.get(Coord(4, 3)), Some(Color::Black));
    assert_eq!(replayed.get(Coord(3, 3)), Some(Color::White));
    assert_eq!(board.get(Coord(3, 3)), Some(Color::Black));
    assert_eq!(replayed.discrepancies(&board), 3);
}

#[test]
fn quake_report_is_logged_once_and_stable() {
    let (_, mut ledger) = play_script();
    let first = *ledger.trigger_retrocausal_event(9, 5).unwrap().report();
    let again = ledger.trigger_retrocausal_event(9, 5).unwrap();
    match again {
        RetroOutcome::AlreadyErased(r) => assert_eq!(r, first),
        other => panic!("expected idempotent no-op, got {other:?}"),
    }
    assert_eq!(ledger.reports(), [first].as_slice());
}

#[test]
fn ledger_indices_stay_contiguous_through_the_quake() {
    let (board, mut ledger) = play_script();
    ledger.trigger_retrocausal_event(9, 5).unwrap();
    let idx = ledger.record_turn(Color::Black, None, &board);
    assert_eq!(idx, 10);
    assert_eq!(ledger.len(), 11);
    for (i, record) in ledger.records().iter().enumerate() {
        assert_eq!(record.turn_index, i);
    }
}

#[test]
fn replay_without_erasure_matches_live_board() {
    let (board, ledger) = play_script();
    assert_eq!(ledger.replay_from(9).unwrap(), board);
}
