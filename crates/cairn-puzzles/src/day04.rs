//! Day 4: Giant Squid.

use cairn_arena::{Arena, ArenaVec};
use cairn_input::{parse_int, split_str};

use crate::common;
use crate::error::PuzzleError;
use crate::puzzle::{Answers, Day, Puzzle};

const DAY: Day = Day(4);
const SIDE: usize = 5;
const CELLS: usize = SIDE * SIDE;

/// Plays bingo against the squid, first and last winning boards.
#[derive(Debug, Default)]
pub struct GiantSquid;

/// One 5×5 board. Both slices live in the solve's arena.
struct Board<'a> {
    numbers: &'a [i64],
    marked: &'a mut [bool],
    won: bool,
}

impl Board<'_> {
    /// Mark `draw`; returns the board's score if this completed a row or
    /// column.
    fn mark(&mut self, draw: i64) -> Option<i64> {
        let at = self.numbers.iter().position(|&n| n == draw)?;
        self.marked[at] = true;

        let (row, col) = (at / SIDE, at % SIDE);
        let row_done = (0..SIDE).all(|c| self.marked[row * SIDE + c]);
        let col_done = (0..SIDE).all(|r| self.marked[r * SIDE + col]);
        if !(row_done || col_done) {
            return None;
        }

        self.won = true;
        let unmarked: i64 = self
            .numbers
            .iter()
            .zip(self.marked.iter())
            .filter_map(|(&n, &m)| (!m).then_some(n))
            .sum();
        Some(unmarked * draw)
    }
}

impl Puzzle for GiantSquid {
    fn day(&self) -> Day {
        DAY
    }

    fn title(&self) -> &str {
        "Giant Squid"
    }

    fn solve(&self, arena: &Arena, input: &str) -> Result<Answers, PuzzleError> {
        let lines = common::lines(arena, input)?;
        let Some((draw_line, board_lines)) = lines.split_first() else {
            return Err(PuzzleError::malformed(DAY, "missing draw order"));
        };
        let draws = common::numbers(arena, draw_line, ",")?;

        let mut cells = ArenaVec::try_with_capacity_in(board_lines.len() * SIDE, arena)?;
        for line in board_lines {
            let before = cells.len();
            for &token in split_str(arena, line, " ")?.iter() {
                if !token.is_empty() {
                    cells.try_push(parse_int(token, 10)?)?;
                }
            }
            if cells.len() - before != SIDE {
                return Err(PuzzleError::malformed(
                    DAY,
                    format!("board row needs {SIDE} numbers: {line:?}"),
                ));
            }
        }
        if cells.is_empty() || cells.len() % CELLS != 0 {
            return Err(PuzzleError::malformed(DAY, "boards must be complete 5x5 grids"));
        }

        let cells = cells.into_slice();
        let marked = arena.alloc_slice_fill_copy(cells.len(), false)?;
        let mut boards = ArenaVec::try_with_capacity_in(cells.len() / CELLS, arena)?;
        for (numbers, marked) in cells.chunks(CELLS).zip(marked.chunks_mut(CELLS)) {
            boards.try_push(Board {
                numbers,
                marked,
                won: false,
            })?;
        }

        let mut first = None;
        let mut last = None;
        for &draw in draws.iter() {
            for board in boards.iter_mut().filter(|b| !b.won) {
                if let Some(score) = board.mark(draw) {
                    if first.is_none() {
                        first = Some(score);
                    }
                    last = Some(score);
                }
            }
        }

        match (first, last) {
            (Some(first), Some(last)) => Ok(Answers::new(first, last)),
            _ => Err(PuzzleError::malformed(DAY, "no board ever wins")),
        }
    }
}
