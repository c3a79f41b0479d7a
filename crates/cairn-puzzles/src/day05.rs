//! Day 5: Hydrothermal Venture.

use cairn_arena::{Arena, ArenaVec};
use cairn_input::parse_int;

use crate::common;
use crate::error::PuzzleError;
use crate::puzzle::{Answers, Day, Puzzle};

const DAY: Day = Day(5);

/// Counts grid points covered by two or more vent lines.
#[derive(Debug, Default)]
pub struct HydrothermalVenture;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Segment {
    x1: usize,
    y1: usize,
    x2: usize,
    y2: usize,
}

impl Segment {
    fn parse(line: &str) -> Result<Self, PuzzleError> {
        let bad = || PuzzleError::malformed(DAY, format!("expected `x1,y1 -> x2,y2`, got {line:?}"));
        let (from, to) = line.split_once("->").ok_or_else(bad)?;
        let (x1, y1) = from.trim().split_once(',').ok_or_else(bad)?;
        let (x2, y2) = to.trim().split_once(',').ok_or_else(bad)?;

        let coord = |text: &str| -> Result<usize, PuzzleError> {
            let value = parse_int(text.trim(), 10)?;
            usize::try_from(value)
                .map_err(|_| PuzzleError::malformed(DAY, format!("negative coordinate {value}")))
        };
        let segment = Self {
            x1: coord(x1)?,
            y1: coord(y1)?,
            x2: coord(x2)?,
            y2: coord(y2)?,
        };

        if !segment.is_straight() && segment.x1.abs_diff(segment.x2) != segment.y1.abs_diff(segment.y2) {
            return Err(PuzzleError::malformed(DAY, format!("line is not at 45 degrees: {line:?}")));
        }
        Ok(segment)
    }

    fn is_straight(&self) -> bool {
        self.x1 == self.x2 || self.y1 == self.y2
    }

    /// Every grid point on the segment, endpoints included.
    fn points(&self) -> impl Iterator<Item = (usize, usize)> {
        let step = |from: usize, to: usize| -> isize {
            match to.cmp(&from) {
                std::cmp::Ordering::Less => -1,
                std::cmp::Ordering::Equal => 0,
                std::cmp::Ordering::Greater => 1,
            }
        };
        let (dx, dy) = (step(self.x1, self.x2), step(self.y1, self.y2));
        let steps = self.x1.abs_diff(self.x2).max(self.y1.abs_diff(self.y2));
        let (x1, y1) = (self.x1, self.y1);
        (0..=steps).map(move |i| {
            (
                x1.wrapping_add_signed(dx * i as isize),
                y1.wrapping_add_signed(dy * i as isize),
            )
        })
    }
}

/// Overlap counts over a dense grid carved from the arena.
struct Grid<'a> {
    cells: &'a mut [u8],
    width: usize,
}

impl Grid<'_> {
    fn draw(&mut self, segment: &Segment) {
        for (x, y) in segment.points() {
            let cell = &mut self.cells[y * self.width + x];
            *cell = cell.saturating_add(1);
        }
    }

    fn overlaps(&self) -> i64 {
        self.cells.iter().filter(|&&c| c >= 2).count() as i64
    }
}

impl Puzzle for HydrothermalVenture {
    fn day(&self) -> Day {
        DAY
    }

    fn title(&self) -> &str {
        "Hydrothermal Venture"
    }

    fn solve(&self, arena: &Arena, input: &str) -> Result<Answers, PuzzleError> {
        let lines = common::lines(arena, input)?;
        let mut segments = ArenaVec::try_with_capacity_in(lines.len(), arena)?;
        let (mut width, mut height) = (0usize, 0usize);
        for line in lines.iter() {
            let segment = Segment::parse(line)?;
            width = width.max(segment.x1 + 1).max(segment.x2 + 1);
            height = height.max(segment.y1 + 1).max(segment.y2 + 1);
            segments.try_push(segment)?;
        }

        let area = width
            .checked_mul(height)
            .ok_or_else(|| PuzzleError::malformed(DAY, "grid dimensions overflow"))?;
        let mut grid = Grid {
            cells: arena.alloc_slice_fill_copy(area, 0u8)?,
            width,
        };

        for segment in segments.iter().filter(|s| s.is_straight()) {
            grid.draw(segment);
        }
        let part_one = grid.overlaps();

        for segment in segments.iter().filter(|s| !s.is_straight()) {
            grid.draw(segment);
        }
        Ok(Answers::new(part_one, grid.overlaps()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_test_utils::samples::DAY05;

    #[test]
    fn sample_answers() {
        let arena = Arena::new(1024).unwrap();
        let answers = HydrothermalVenture.solve(&arena, DAY05.input).unwrap();
        assert_eq!(answers, Answers::new(DAY05.part_one, DAY05.part_two));
    }

    #[test]
    fn diagonal_points_walk_both_axes() {
        let segment = Segment::parse("9,7 -> 7,9").unwrap();
        let points: Vec<_> = segment.points().collect();
        assert_eq!(points, [(9, 7), (8, 8), (7, 9)]);
    }

    #[test]
    fn single_point_segment_is_straight() {
        let segment = Segment::parse("3,3 -> 3,3").unwrap();
        assert!(segment.is_straight());
        assert_eq!(segment.points().count(), 1);
    }

    #[test]
    fn skewed_line_is_malformed() {
        let err = Segment::parse("0,0 -> 2,1").unwrap_err();
        assert!(matches!(err, PuzzleError::Malformed { .. }));
    }

    #[test]
    fn negative_coordinate_is_malformed() {
        let err = Segment::parse("-1,0 -> 2,0").unwrap_err();
        assert!(matches!(err, PuzzleError::Malformed { .. }));
    }

    #[test]
    fn no_segments_means_no_overlaps() {
        let arena = Arena::new(1024).unwrap();
        let answers = HydrothermalVenture.solve(&arena, "\n").unwrap();
        assert_eq!(answers, Answers::new(0, 0));
    }
}
