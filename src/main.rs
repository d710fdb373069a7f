#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Error, Result};
use aoc_framework::PartKind;
use aoc_framework::runner::{OutputHandler, RunOptions};
use clap::{ArgAction, Parser};

mod solutions;

/// Directory holding puzzle inputs named `dayNN.txt`.
const INPUT_DIR: &str = "inputs";

/// Solve Advent of Code 2016 puzzles, one day at a time.
#[derive(Parser, Debug)]
struct Cli {
    /// Puzzle day to solve.
    day: u8,

    /// Read puzzle input from FILE instead of `inputs/dayNN.txt`.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Report how long parsing and each part took.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Hide reported durations shorter than this many milliseconds.
    #[arg(long, value_name = "MS", default_value_t)]
    min_timing_ms: u64,

    /// Print solver diagnostics to stderr.
    #[arg(short, long, action = ArgAction::SetTrue)]
    debug: bool,
}

impl Cli {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            timed: self.timed,
            debug: self.debug,
        }
    }

    fn read_input(&self) -> Result<String> {
        if let Some(path) = &self.input {
            return fs::read_to_string(path)
                .with_context(|| format!("could not read input file at: {}", path.display()));
        }

        let path = default_input_path(self.day);
        fs::read_to_string(&path).with_context(|| {
            format!(
                "no input for day {} at {}; save it there or pass --input",
                self.day,
                path.display()
            )
        })
    }
}

fn default_input_path(day: u8) -> PathBuf {
    Path::new(INPUT_DIR).join(format!("day{day:02}.txt"))
}

/// Render a duration with three decimals in the largest unit it reaches.
fn format_duration(duration: Duration) -> String {
    const UNITS: [(Duration, &str); 3] = [
        (Duration::from_secs(1), "s"),
        (Duration::from_millis(1), "ms"),
        (Duration::from_micros(1), "µs"),
    ];

    UNITS
        .iter()
        .find(|(unit, _)| duration >= *unit)
        .map_or_else(
            || format!("{} ns", duration.as_nanos()),
            |&(unit, name)| format!("{:.3} {name}", duration.div_duration_f64(unit)),
        )
}

/// Prints solution events to the terminal.
struct ConsoleHandler {
    min_duration: Duration,
}

impl ConsoleHandler {
    fn timing_suffix(&self, duration_opt: Option<Duration>) -> String {
        duration_opt
            .filter(|duration| *duration >= self.min_duration)
            .map(|duration| format!(" ({})", format_duration(duration)))
            .unwrap_or_default()
    }
}

impl OutputHandler for ConsoleHandler {
    fn solution_name(&mut self, name: &str) {
        println!("= {name} =");
    }

    fn parse_start(&mut self) {}

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        let suffix = self.timing_suffix(duration_opt);
        if !suffix.is_empty() {
            println!("Input parsed{suffix}");
        }
    }

    fn part_start(&mut self, part: PartKind) {
        println!("-- {part} --");
    }

    fn part_diagnostic(&mut self, part: PartKind, message: &str) {
        eprintln!("[debug] {part}: {message}");
    }

    fn part_output(
        &mut self,
        _part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        println!("{output}{}", self.timing_suffix(duration_opt));
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let input = args.read_input()?;
    let mut handler = ConsoleHandler {
        min_duration: Duration::from_millis(args.min_timing_ms),
    };

    solutions::run_day(args.day, &input, &mut handler, args.run_options())
        .map_err(|dyn_error| Error::from_boxed(dyn_error).context("failed to run solution"))
}
