//! Solves days against on-disk inputs with one reusable arena.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use cairn::prelude::*;

use crate::config::RunConfig;

/// Outcome of one solved day, with the arena footprint it left behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DayReport {
    pub day: Day,
    pub title: String,
    pub answers: Answers,
    pub regions: usize,
    pub used_bytes: usize,
}

impl fmt::Display for DayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Day {}: {}", self.day, self.title)?;
        writeln!(f, "  part one: {}", self.answers.part_one)?;
        write!(f, "  part two: {}", self.answers.part_two)
    }
}

pub(crate) struct Runner {
    registry: PuzzleRegistry,
    arena: Arena,
    config: RunConfig,
}

impl Runner {
    pub(crate) fn new(config: RunConfig) -> Result<Self> {
        let arena = Arena::with_config(config.arena_config()).with_context(|| {
            format!("failed to create a {} byte arena", config.arena_capacity)
        })?;
        Ok(Self {
            registry: PuzzleRegistry::with_all(),
            arena,
            config,
        })
    }

    /// Solve `day` from `input`, or from its conventional path when `None`.
    ///
    /// The arena is reset first, so the report reflects this day alone.
    pub(crate) fn run(&mut self, day: Day, input: Option<&Path>) -> Result<DayReport> {
        let puzzle = self.registry.get(day).ok_or(PuzzleError::UnknownDay(day))?;
        let default_path;
        let path = match input {
            Some(path) => path,
            None => {
                default_path = self.config.input_path(day);
                default_path.as_path()
            }
        };

        self.arena.reset();
        let text = read_input(&self.arena, path)
            .with_context(|| format!("failed to read input for day {day}"))?;
        let answers = self
            .registry
            .solve(day, &self.arena, text)
            .with_context(|| format!("day {day} ({}) failed", puzzle.title()))?;

        let report = DayReport {
            day,
            title: puzzle.title().to_owned(),
            answers,
            regions: self.arena.region_count(),
            used_bytes: self.arena.used_bytes(),
        };
        tracing::info!(
            day = day.0,
            part_one = answers.part_one,
            part_two = answers.part_two,
            regions = report.regions,
            used_bytes = report.used_bytes,
            capacity_bytes = self.arena.capacity_bytes(),
            "day solved"
        );
        Ok(report)
    }

    /// Solve every registered day whose input exists under the input
    /// directory, in day order. Missing inputs are skipped.
    pub(crate) fn run_all(&mut self) -> Result<Vec<DayReport>> {
        let days: Vec<Day> = self.registry.days().collect();
        let mut reports = Vec::with_capacity(days.len());
        for day in days {
            let path = self.config.input_path(day);
            if !path.is_file() {
                tracing::debug!(day = day.0, path = %path.display(), "no input, skipping");
                continue;
            }
            reports.push(self.run(day, Some(&path))?);
        }
        if reports.is_empty() {
            anyhow::bail!(
                "no puzzle inputs found under {}",
                self.config.input_dir.display()
            );
        }
        Ok(reports)
    }
}
