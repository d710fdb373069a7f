//! Solutions implemented for Advent of Code 2016.
//!
//! This module provides [`run_day`] to dynamically run a solution by its day.
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule to hold the solution implementation.
//! 2. Have the submodule implement [`AdventOfCode2016<DAY>`] for its day as a [`SolutionRunner`].
//! 3. Import the submodule below `IMPORT SUBMODULES HERE`
//! 4. Add a match case to run [`AdventOfCode2016<DAY>`] for a day, below `MATCH SOLUTIONS HERE`:
//!
//! ```ignore
//! // matching for day 1
//! 1 => AdventOfCode2016::<1>::run(input, handler, options),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_framework::DynamicResult;
use aoc_framework::runner::{OutputHandler, RunOptions, SolutionRunner};
use thiserror::Error;

// --- IMPORT SUBMODULES HERE ---
mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;

/// A structure collecting solutions by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] for the day with
/// [`#[solution_runner]`][aoc_framework::runner::solution_runner]:
///
/// ```ignore
/// // in a submodule "day01.rs"
/// #[solution_runner(name = "Day 1", part_one = Day01)]
/// impl super::AdventOfCode2016<1> {}
/// ```
struct AdventOfCode2016<const DAY: u8>;

/// A solution for a day is not available.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// Run a solution based on the day.
///
/// # Errors
///
/// If the solution for the given day is not available, a [`DayNotAvailable`] error is returned.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn run_day(
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    options: RunOptions,
) -> DynamicResult<()> {
    match day {
        // --- MATCH SOLUTIONS HERE ---
        1 => AdventOfCode2016::<1>::run(input, handler, options),
        2 => AdventOfCode2016::<2>::run(input, handler, options),
        3 => AdventOfCode2016::<3>::run(input, handler, options),
        4 => AdventOfCode2016::<4>::run(input, handler, options),
        5 => AdventOfCode2016::<5>::run(input, handler, options),
        6 => AdventOfCode2016::<6>::run(input, handler, options),
        7 => AdventOfCode2016::<7>::run(input, handler, options),
        _ => Err(DayNotAvailable(day).into()),
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Display;
    use std::time::Duration;

    use aoc_framework::PartKind;

    use super::*;

    /// Keeps part outputs and diagnostics as text.
    #[derive(Default)]
    struct CollectingHandler {
        outputs: Vec<String>,
        diagnostics: Vec<String>,
    }

    impl OutputHandler for CollectingHandler {
        fn solution_name(&mut self, _name: &str) {}

        fn parse_start(&mut self) {}

        fn parse_end(&mut self, _duration_opt: Option<Duration>) {}

        fn part_start(&mut self, _part: PartKind) {}

        fn part_diagnostic(&mut self, part: PartKind, message: &str) {
            self.diagnostics.push(format!("{part}: {message}"));
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            _duration_opt: Option<Duration>,
        ) {
            self.outputs.push(format!("{part}: {output}"));
        }
    }

    #[test]
    fn runs_day_one_through_runner() -> DynamicResult<()> {
        let mut handler = CollectingHandler::default();
        AdventOfCode2016::<1>::run("R8, R4, R4, R8", &mut handler, RunOptions::default())?;
        assert_eq!(
            handler.outputs,
            [
                "Part 1: Final distance: 8",
                "Part 2: First double visit is 4 blocks away"
            ]
        );
        assert!(handler.diagnostics.is_empty());
        Ok(())
    }

    #[test]
    fn debug_run_forwards_both_parts_diagnostics() -> DynamicResult<()> {
        let mut handler = CollectingHandler::default();
        let options = RunOptions {
            timed: false,
            debug: true,
        };
        run_day(1, "R2, L3", &mut handler, options)?;
        assert!(handler.diagnostics.contains(&"Part 1: dealing with R2".to_owned()));
        assert!(handler.diagnostics.contains(&"Part 2: dealing with L3".to_owned()));
        Ok(())
    }

    #[test]
    fn day_six_part_two_forwards_diagnostics() -> DynamicResult<()> {
        let mut handler = CollectingHandler::default();
        let options = RunOptions {
            timed: false,
            debug: true,
        };
        run_day(6, "ab\nab\ncb\n", &mut handler, options)?;
        assert_eq!(handler.outputs, ["Part 1: ab", "Part 2: cb"]);
        assert!(handler.diagnostics.iter().any(|d| d.starts_with("Part 2: column 0")));
        Ok(())
    }

    #[test]
    fn unknown_day_is_not_available() {
        let mut handler = CollectingHandler::default();
        let result = run_day(8, "", &mut handler, RunOptions::default());
        assert!(result.is_err());
        assert!(handler.outputs.is_empty());
    }
}
