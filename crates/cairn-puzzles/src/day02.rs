//! Day 2: Dive!

use cairn_arena::{Arena, ArenaVec};
use cairn_input::parse_int;

use crate::common;
use crate::error::PuzzleError;
use crate::puzzle::{Answers, Day, Puzzle};

const DAY: Day = Day(2);

/// Follows the submarine's course, with and without aim.
#[derive(Debug, Default)]
pub struct Dive;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl Command {
    fn parse(line: &str) -> Result<Self, PuzzleError> {
        let (word, amount) = line
            .split_once(' ')
            .ok_or_else(|| PuzzleError::malformed(DAY, format!("expected `<command> <n>`, got {line:?}")))?;
        let amount = parse_int(amount.trim(), 10)?;
        match word {
            "forward" => Ok(Self::Forward(amount)),
            "down" => Ok(Self::Down(amount)),
            "up" => Ok(Self::Up(amount)),
            other => Err(PuzzleError::malformed(DAY, format!("unknown command {other:?}"))),
        }
    }
}

impl Puzzle for Dive {
    fn day(&self) -> Day {
        DAY
    }

    fn title(&self) -> &str {
        "Dive!"
    }

    fn solve(&self, arena: &Arena, input: &str) -> Result<Answers, PuzzleError> {
        let lines = common::lines(arena, input)?;
        let mut commands = ArenaVec::try_with_capacity_in(lines.len(), arena)?;
        for line in lines.iter() {
            commands.try_push(Command::parse(line)?)?;
        }
        let overflow = || PuzzleError::malformed(DAY, "course leaves the i64 range");
        let part_one = plain_course(&commands).ok_or_else(overflow)?;
        let part_two = aimed_course(&commands).ok_or_else(overflow)?;
        Ok(Answers::new(part_one, part_two))
    }
}

/// `horizontal × depth` when "down" and "up" move the submarine directly.
fn plain_course(commands: &[Command]) -> Option<i64> {
    let (mut horizontal, mut depth) = (0i64, 0i64);
    for command in commands {
        match *command {
            Command::Forward(n) => horizontal = horizontal.checked_add(n)?,
            Command::Down(n) => depth = depth.checked_add(n)?,
            Command::Up(n) => depth = depth.checked_sub(n)?,
        }
    }
    horizontal.checked_mul(depth)
}

/// `horizontal × depth` when "down" and "up" steer and depth follows aim.
fn aimed_course(commands: &[Command]) -> Option<i64> {
    let (mut horizontal, mut depth, mut aim) = (0i64, 0i64, 0i64);
    for command in commands {
        match *command {
            Command::Forward(n) => {
                horizontal = horizontal.checked_add(n)?;
                depth = depth.checked_add(aim.checked_mul(n)?)?;
            }
            Command::Down(n) => aim = aim.checked_add(n)?,
            Command::Up(n) => aim = aim.checked_sub(n)?,
        }
    }
    horizontal.checked_mul(depth)
}
