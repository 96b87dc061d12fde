//! # Othello Board Engine
//!
//! 8x8 board state and move application for standard Othello. Players place
//! stones that sandwich opponent stones between the new stone and an existing
//! stone of their own color; all sandwiched stones flip.
//!
//! Legality checking and flip application live here; everything above this
//! module (the game master, the causal ledger, the protocols) treats the
//! board as the single physical source of truth.

use std::fmt;
use std::str::FromStr;

/// Board dimension. The funhouse only plays standard 8x8 Othello.
pub const SIZE: usize = 8;

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Stone color / mover identity. Black is the first mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other side.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Single-letter display used in board text and logs.
    pub fn letter(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// A cell coordinate: (row, col), both 0-based in [0,7].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Coord(pub usize, pub usize);

impl Coord {
    /// True when both components are on the board.
    pub fn in_bounds(self) -> bool {
        self.0 < SIZE && self.1 < SIZE
    }
}

impl fmt::Display for Coord {
    /// Algebraic notation: column letter A-H then 1-based row, e.g. "D3".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.1 as u8) as char, self.0 + 1)
    }
}

impl FromStr for Coord {
    type Err = String;

    /// Parses algebraic notation like "D3" or "d3" (column letter, 1-based row).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col = match chars.next() {
            Some(c @ 'A'..='H') => c as usize - 'A' as usize,
            Some(c @ 'a'..='h') => c as usize - 'a' as usize,
            _ => return Err(format!("expected column letter A-H in {:?}", s)),
        };
        let row: usize = chars
            .as_str()
            .parse::<usize>()
            .map_err(|e| e.to_string())?;
        if !(1..=SIZE).contains(&row) {
            return Err(format!("row {} out of range 1-8", row));
        }
        Ok(Coord(row - 1, col))
    }
}

/// The physical 8x8 board.
///
/// `None` is an empty cell. The standard four-stone starting position is laid
/// out by [`Board::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Color>; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position: White at D4/E5, Black at E4/D5.
    pub fn new() -> Self {
        let mut cells = [[None; SIZE]; SIZE];
        let mid = SIZE / 2;
        cells[mid - 1][mid - 1] = Some(Color::White);
        cells[mid - 1][mid] = Some(Color::Black);
        cells[mid][mid - 1] = Some(Color::Black);
        cells[mid][mid] = Some(Color::White);
        Board { cells }
    }

    /// A completely empty board. Used by tests that build positions by hand.
    pub fn empty() -> Self {
        Board {
            cells: [[None; SIZE]; SIZE],
        }
    }

    pub fn get(&self, at: Coord) -> Option<Color> {
        self.cells[at.0][at.1]
    }

    /// Directly sets a cell. Test and collapse-event helper; normal play goes
    /// through [`Board::apply`].
    pub fn set(&mut self, at: Coord, value: Option<Color>) {
        self.cells[at.0][at.1] = value;
    }

    /// True if `color` placing at `at` would flip at least one opponent stone.
    pub fn is_valid_move(&self, color: Color, at: Coord) -> bool {
        if !at.in_bounds() || self.cells[at.0][at.1].is_some() {
            return false;
        }
        let opponent = color.opponent();
        for (dr, dc) in DIRECTIONS.iter() {
            let mut found_opponent = false;
            let mut nr = at.0 as i32 + dr;
            let mut nc = at.1 as i32 + dc;
            while (0..SIZE as i32).contains(&nr) && (0..SIZE as i32).contains(&nc) {
                match self.cells[nr as usize][nc as usize] {
                    Some(c) if c == opponent => {
                        found_opponent = true;
                    }
                    Some(_) => {
                        if found_opponent {
                            return true;
                        }
                        break;
                    }
                    None => break,
                }
                nr += dr;
                nc += dc;
            }
        }
        false
    }

    /// All legal placements for `color`, scanned in row-major order.
    pub fn legal_moves(&self, color: Color) -> Vec<Coord> {
        let mut moves = Vec::new();
        for r in 0..SIZE {
            for c in 0..SIZE {
                if self.is_valid_move(color, Coord(r, c)) {
                    moves.push(Coord(r, c));
                }
            }
        }
        moves
    }

    /// Number of stones a placement would flip. Zero means the move is illegal.
    pub fn count_flips(&self, color: Color, at: Coord) -> usize {
        self.flips_for(color, at).len()
    }

    /// Places a stone for `color` at `at` and flips every sandwiched opponent
    /// stone, returning the flipped cells.
    ///
    /// No legality check: callers (the game master, ledger replay) are
    /// responsible for validating first. Replay deliberately re-applies
    /// recorded moves on boards where they may no longer be "legal".
    pub fn apply(&mut self, color: Color, at: Coord) -> Vec<Coord> {
        let flipped = self.flips_for(color, at);
        self.cells[at.0][at.1] = Some(color);
        for f in &flipped {
            self.cells[f.0][f.1] = Some(color);
        }
        flipped
    }

    fn flips_for(&self, color: Color, at: Coord) -> Vec<Coord> {
        let opponent = color.opponent();
        let mut flipped = Vec::new();
        for (dr, dc) in DIRECTIONS.iter() {
            let mut line = Vec::new();
            let mut nr = at.0 as i32 + dr;
            let mut nc = at.1 as i32 + dc;
            while (0..SIZE as i32).contains(&nr) && (0..SIZE as i32).contains(&nc) {
                match self.cells[nr as usize][nc as usize] {
                    Some(c) if c == opponent => {
                        line.push(Coord(nr as usize, nc as usize));
                    }
                    Some(_) => {
                        flipped.append(&mut line);
                        break;
                    }
                    None => break,
                }
                nr += dr;
                nc += dc;
            }
        }
        flipped
    }

    /// Stone counts as (black, white).
    pub fn counts(&self) -> (usize, usize) {
        let mut black = 0;
        let mut white = 0;
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(Color::Black) => black += 1,
                    Some(Color::White) => white += 1,
                    None => {}
                }
            }
        }
        (black, white)
    }

    /// All occupied cells with their colors, row-major.
    pub fn occupied(&self) -> Vec<(Coord, Color)> {
        let mut out = Vec::new();
        for r in 0..SIZE {
            for c in 0..SIZE {
                if let Some(color) = self.cells[r][c] {
                    out.push((Coord(r, c), color));
                }
            }
        }
        out
    }

    pub fn has_any_move(&self, color: Color) -> bool {
        for r in 0..SIZE {
            for c in 0..SIZE {
                if self.is_valid_move(color, Coord(r, c)) {
                    return true;
                }
            }
        }
        false
    }

    /// Game is over when neither side can move.
    pub fn is_game_over(&self) -> bool {
        !self.has_any_move(Color::Black) && !self.has_any_move(Color::White)
    }

    /// Count of cells that hold different contents on the two boards.
    pub fn discrepancies(&self, other: &Board) -> usize {
        let mut count = 0;
        for r in 0..SIZE {
            for c in 0..SIZE {
                if self.cells[r][c] != other.cells[r][c] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Plain-text rendering used in LLM prompts and logs:
    ///
    /// ```text
    ///   A B C D E F G H
    /// 1 . . . . . . . .
    /// ```
    pub fn to_text(&self) -> String {
        let mut text = String::from("  A B C D E F G H\n");
        for (i, row) in self.cells.iter().enumerate() {
            text.push_str(&format!("{} ", i + 1));
            for cell in row {
                let ch = match cell {
                    Some(c) => c.letter(),
                    None => '.',
                };
                text.push(ch);
                text.push(' ');
            }
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_setup() {
        let board = Board::new();
        assert_eq!(board.get(Coord(3, 3)), Some(Color::White));
        assert_eq!(board.get(Coord(3, 4)), Some(Color::Black));
        assert_eq!(board.get(Coord(4, 3)), Some(Color::Black));
        assert_eq!(board.get(Coord(4, 4)), Some(Color::White));
        assert_eq!(board.counts(), (2, 2));
    }

    #[test]
    fn test_black_opening_moves() {
        let board = Board::new();
        let moves = board.legal_moves(Color::Black);
        assert_eq!(
            moves,
            vec![Coord(2, 3), Coord(3, 2), Coord(4, 5), Coord(5, 4)]
        );
    }

    #[test]
    fn test_apply_flips_sandwiched_stone() {
        let mut board = Board::new();
        let flipped = board.apply(Color::Black, Coord(2, 3));
        assert_eq!(flipped, vec![Coord(3, 3)]);
        assert_eq!(board.get(Coord(3, 3)), Some(Color::Black));
        assert_eq!(board.counts(), (4, 1));
    }

    #[test]
    fn test_occupied_cell_is_invalid() {
        let board = Board::new();
        assert!(!board.is_valid_move(Color::Black, Coord(3, 3)));
        assert!(!board.is_valid_move(Color::White, Coord(4, 4)));
    }

    #[test]
    fn test_no_flip_is_invalid() {
        let board = Board::new();
        assert!(!board.is_valid_move(Color::Black, Coord(0, 0)));
        assert!(!board.is_valid_move(Color::Black, Coord(2, 2)));
    }

    #[test]
    fn test_count_flips_matches_apply() {
        let board = Board::new();
        for mv in board.legal_moves(Color::Black) {
            let mut copy = board.clone();
            assert_eq!(board.count_flips(Color::Black, mv), copy.apply(Color::Black, mv).len());
        }
    }

    #[test]
    fn test_multi_direction_flip() {
        // Black at (2,2) flips both south and east lines at once.
        let mut board = Board::empty();
        board.set(Coord(3, 2), Some(Color::White));
        board.set(Coord(4, 2), Some(Color::Black));
        board.set(Coord(2, 3), Some(Color::White));
        board.set(Coord(2, 4), Some(Color::Black));
        let mut flipped = board.apply(Color::Black, Coord(2, 2));
        flipped.sort_by_key(|c| (c.0, c.1));
        assert_eq!(flipped, vec![Coord(2, 3), Coord(3, 2)]);
        assert_eq!(board.get(Coord(2, 3)), Some(Color::Black));
        assert_eq!(board.get(Coord(3, 2)), Some(Color::Black));
    }

    #[test]
    fn test_coord_algebraic_round_trip() {
        let c = Coord::from_str("D3").unwrap();
        assert_eq!(c, Coord(2, 3));
        assert_eq!(c.to_string(), "D3");
        assert_eq!(Coord::from_str("a1").unwrap(), Coord(0, 0));
        assert_eq!(Coord::from_str("H8").unwrap(), Coord(7, 7));
        assert!(Coord::from_str("I3").is_err());
        assert!(Coord::from_str("A9").is_err());
        assert!(Coord::from_str("").is_err());
    }

    #[test]
    fn test_game_over_on_full_board() {
        let mut board = Board::empty();
        for r in 0..SIZE {
            for c in 0..SIZE {
                board.set(Coord(r, c), Some(Color::Black));
            }
        }
        assert!(board.is_game_over());
    }

    #[test]
    fn test_discrepancies_counts_cell_differences() {
        let a = Board::new();
        let mut b = Board::new();
        assert_eq!(a.discrepancies(&b), 0);
        b.set(Coord(0, 0), Some(Color::Black));
        b.set(Coord(3, 3), Some(Color::Black));
        assert_eq!(a.discrepancies(&b), 2);
    }
}
