//! Running solutions and reporting their progress.
//!
//! # Quick Start
//!
//! Annotate a struct or impl block with [`#[solution_runner]`][solution_runner]:
//!
//! ```
//! # use aoc_framework::runner::solution_runner;
//! # use aoc_framework::{DynamicResult, PartOne, Solution};
//! #
//! struct Day07;
//!
//! impl Solution<PartOne> for Day07 {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(_input: &Self::Input) -> DynamicResult<usize> {
//! #        Ok(0)
//! #    }
//! }
//!
//! #[solution_runner(name = "Day 7", part_one = Day07)]
//! struct Day07Runner;
//! ```

use std::fmt::Display;
use std::time::Duration;

use crate::{Diagnostics, DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

// re-export procedural macro
pub use aoc_framework_macros::solution_runner;

/// Options for a single run of a solution.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Measure how long parsing and each part take.
    pub timed: bool,
    /// Collect diagnostics from solutions and pass them to the handler.
    pub debug: bool,
}

/// Receives the events of running a solution.
pub trait OutputHandler {
    /// The solution's name, before anything else runs.
    fn solution_name(&mut self, name: &str);

    /// Parsing input starts.
    fn parse_start(&mut self);

    /// Parsing input finished, with its duration if timed.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// A part starts.
    fn part_start(&mut self, part: PartKind);

    /// A debug message recorded while solving a part.
    ///
    /// Only called when running with [`RunOptions::debug`].
    fn part_diagnostic(&mut self, part: PartKind, message: &str);

    /// A part finished with its output, and its duration if timed.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Evaluate an expression once, returning its result and elapsed [`Duration`].
macro_rules! measure_duration {
    ($expr:expr) => {{
        let start = ::std::time::Instant::now();
        let result = $expr;
        let elapsed = start.elapsed();
        (result, elapsed)
    }};
}

/// Evaluate an expression once, returning its result and `Some` elapsed duration only if `$timed`.
macro_rules! measure_with_optional_duration {
    ($expr:expr, $timed:expr) => {{
        if $timed {
            let (result, duration) = measure_duration!($expr);
            (result, Some(duration))
        } else {
            ($expr, None)
        }
    }};
}

/// Run one part, passing diagnostics and output to the handler.
///
/// Diagnostics are forwarded even when the part fails, so the trace leading up to an error is
/// still visible.
///
/// # Errors
///
/// Any error from the solution is propagated.
fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    options: RunOptions,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    handler.part_start(part);
    let mut diagnostics = Diagnostics::new(options.debug);
    let (result, duration_opt) = measure_with_optional_duration!(
        S::solve_with_diagnostics(input, &mut diagnostics),
        options.timed
    );
    for message in diagnostics.take() {
        handler.part_diagnostic(part, &message);
    }
    let output = result?;
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

/// Run the parse step, passing events to the handler.
///
/// # Errors
///
/// Any error from parsing is propagated.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    options: RunOptions,
) -> DynamicResult<D> {
    handler.parse_start();
    let (result, duration_opt) = measure_with_optional_duration!(D::parse(input), options.timed);
    let parsed = result?;
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Run a solution with only part one, solving directly from the input string.
///
/// # Errors
///
/// Any error from the solution is propagated.
pub fn solve_half_solution<S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    options: RunOptions,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, options)
}

/// Run a solution with both parts, solving directly from the input string.
///
/// # Errors
///
/// Any error from either part is propagated; part two does not run if part one fails.
pub fn solve_full_solution<S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    options: RunOptions,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, options)?;
    run_part::<S2, PartTwo>(input, handler, options)
}

/// Run a solution with only part one, parsing the input into `D` first.
///
/// # Errors
///
/// Any error from parsing or the solution is propagated.
pub fn solve_parsed_half_solution<D, S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    options: RunOptions,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, options)?;
    run_part::<S1, PartOne>(&parsed, handler, options)
}

/// Run a solution with both parts, parsing the input into `D` once for both.
///
/// # Errors
///
/// Any error from parsing or either part is propagated.
pub fn solve_parsed_full_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    options: RunOptions,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, options)?;
    run_part::<S1, PartOne>(&parsed, handler, options)?;
    run_part::<S2, PartTwo>(&parsed, handler, options)
}

/// A solution that can be run from an input string.
///
/// Usually implemented with the [`solution_runner`] attribute macro.
pub trait SolutionRunner {
    /// Run the solution on `input`, passing events to `handler`.
    ///
    /// # Errors
    ///
    /// Any error from parsing or solving is propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, options: RunOptions)
    -> DynamicResult<()>;
}
