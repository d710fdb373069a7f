use std::collections::HashMap;
use std::fmt::{self, Display};
use std::num::ParseIntError;

use aoc_framework::parsing::parse_delimited;
use aoc_framework::runner::solution_runner;
use aoc_framework::{Diagnostics, DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::{Point2, Vector2};
use regex::Regex;

#[solution_runner(
    name = "Day 1: No Time for a Taxicab",
    parsed = Commands,
    part_one = Day01,
    part_two = Day01
)]
impl super::AdventOfCode2016<1> {}

/*
Input is a single line of comma separated instructions, like `R2, L3`.

Starting at the origin of a city grid facing north, each instruction turns left (`L`) or right
(`R`) 90 degrees, then walks forward the given number of blocks.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Left,
    Right,
}

type Distance = u32;

/// One instruction: turn, then walk `distance` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Command {
    turn: Turn,
    distance: Distance,
}

impl Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let turn = match self.turn {
            Turn::Left => 'L',
            Turn::Right => 'R',
        };
        write!(f, "{turn}{}", self.distance)
    }
}

#[derive(thiserror::Error, Debug)]
enum ParseCommandError {
    #[error("expected a turn letter followed by digits, found {0:?}")]
    Malformed(String),

    #[error("unrecognized turn {turn:?} in {token:?} (expected \"L\" or \"R\")")]
    UnrecognizedTurn { turn: char, token: String },

    #[error("distance does not fit in a command: {token:?}")]
    DistanceOutOfRange {
        token: String,
        source: ParseIntError,
    },
}

struct CommandParser {
    /// Regex capturing the turn letter and distance digits of a whole token.
    command_re: Regex,
}

impl CommandParser {
    const COMMAND_PATTERN: &str = r"^([A-Za-z])(\d+)$";

    fn new() -> Self {
        let command_re = Regex::new(Self::COMMAND_PATTERN).expect("pattern should be valid");
        Self { command_re }
    }

    fn parse(&self, token: &str) -> Result<Command, ParseCommandError> {
        let captures = self
            .command_re
            .captures(token)
            .ok_or_else(|| ParseCommandError::Malformed(token.to_owned()))?;
        let turn_match = captures.get(1).expect("turn should be in capture group 1");
        let distance_match = captures
            .get(2)
            .expect("distance should be in capture group 2");

        let turn = match turn_match.as_str() {
            "L" => Turn::Left,
            "R" => Turn::Right,
            other => {
                return Err(ParseCommandError::UnrecognizedTurn {
                    turn: other.chars().next().unwrap_or_default(),
                    token: token.to_owned(),
                });
            }
        };
        let distance = distance_match.as_str().parse::<Distance>().map_err(|source| {
            ParseCommandError::DistanceOutOfRange {
                token: token.to_owned(),
                source,
            }
        })?;

        Ok(Command { turn, distance })
    }
}

/// The parsed instructions, in order.
#[derive(Debug, PartialEq, Eq)]
struct Commands(Vec<Command>);

impl ParseData for Commands {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let parser = CommandParser::new();
        let commands = parse_delimited(input, ',', |token| Ok(parser.parse(token)?))
            .collect::<Result<_, _>>()?;
        Ok(Self(commands))
    }
}

/*
For part 1, find how many blocks away the final position is. Blocks are on a grid, so distance is
the Manhattan distance.
*/

/// A block on the city grid, `x` growing east and `y` growing north.
type Position = Point2<i64>;

/// A facing direction, ordered clockwise so a variant's index is its rotation count from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    const CLOCKWISE: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Quarter turns clockwise from north, in `0..4`.
    fn rotation(self) -> usize {
        self as usize
    }

    fn turned(self, turn: Turn) -> Self {
        // a left turn is three right turns
        let quarter_turns = match turn {
            Turn::Right => 1,
            Turn::Left => 3,
        };
        Self::CLOCKWISE[(self.rotation() + quarter_turns) % Self::CLOCKWISE.len()]
    }

    fn unit_step(self) -> Vector2<i64> {
        match self {
            Self::North => Vector2::y(),
            Self::East => Vector2::x(),
            Self::South => -Vector2::y(),
            Self::West => -Vector2::x(),
        }
    }
}

/// How many times each block has been walked onto.
///
/// Only visited blocks are keys, so every count is at least 1.
#[derive(Debug, Default)]
struct VisitLog(HashMap<Position, u32>);

impl VisitLog {
    /// Count a visit to `position`, returning its visit count including this one.
    fn visit(&mut self, position: Position) -> u32 {
        let count = self.0.entry(position).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// The number of distinct blocks visited.
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// The outcome of a [`GridWalker`] following every command.
#[derive(Debug)]
struct Walk {
    final_position: Position,
    /// The first block walked onto a second time, if any.
    first_repeat: Option<Position>,
    final_heading: Heading,
    visits: VisitLog,
    /// Debug messages, only recorded when the walker was created with `debug`.
    trace: Vec<String>,
}

/// Walks commands block by block from the origin, tracking revisited blocks.
///
/// The origin counts as visited before the first command. A walker is consumed by
/// [`GridWalker::walk`].
struct GridWalker {
    debug: bool,
    position: Position,
    heading: Heading,
    visits: VisitLog,
    first_repeat: Option<Position>,
    trace: Vec<String>,
}

impl GridWalker {
    fn new(debug: bool) -> Self {
        let position = Position::origin();
        let mut visits = VisitLog::default();
        visits.visit(position);
        Self {
            debug,
            position,
            heading: Heading::North,
            visits,
            first_repeat: None,
            trace: Vec::new(),
        }
    }

    fn record<F>(&mut self, message: F)
    where
        F: FnOnce() -> String,
    {
        if self.debug {
            self.trace.push(message());
        }
    }

    fn turn(&mut self, turn: Turn) {
        self.heading = self.heading.turned(turn);
        let heading = self.heading;
        self.record(|| format!("turned {turn:?}, now facing {heading:?}"));
    }

    /// Walk forward one block at a time, so a revisit in the middle of a segment is caught.
    fn advance(&mut self, distance: Distance) {
        let step = self.heading.unit_step();
        for _ in 0..distance {
            self.position += step;
            let visit_count = self.visits.visit(self.position);
            if visit_count > 1 && self.first_repeat.is_none() {
                self.first_repeat = Some(self.position);
                let position = self.position;
                self.record(|| format!("first double visit at ({}, {})", position.x, position.y));
            }
        }
    }

    fn walk(mut self, commands: &[Command]) -> Walk {
        for command in commands {
            self.record(|| format!("dealing with {command}"));
            self.turn(command.turn);
            self.advance(command.distance);
        }

        Walk {
            final_position: self.position,
            first_repeat: self.first_repeat,
            final_heading: self.heading,
            visits: self.visits,
            trace: self.trace,
        }
    }
}

/// Blocks away from the origin, walking along the grid.
fn manhattan_distance(position: &Position) -> u64 {
    position
        .x
        .unsigned_abs()
        .saturating_add(position.y.unsigned_abs())
}

/// Part 1 answer, the final position's distance from the origin.
struct FinalDistance(u64);

impl Display for FinalDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Final distance: {}", self.0)
    }
}

/// Walk with diagnostics enabled if requested, forwarding the walker's trace.
fn walk_commands(commands: &Commands, diagnostics: &mut Diagnostics) -> Walk {
    let mut walk = GridWalker::new(diagnostics.is_enabled()).walk(&commands.0);
    diagnostics.extend(std::mem::take(&mut walk.trace));
    diagnostics.record(|| {
        format!(
            "finished facing {:?} after visiting {} blocks",
            walk.final_heading,
            walk.visits.len()
        )
    });
    walk
}

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = Commands;
    type Output = FinalDistance;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        <Self as Solution<PartOne>>::solve_with_diagnostics(input, &mut Diagnostics::disabled())
    }

    fn solve_with_diagnostics(
        input: &Self::Input,
        diagnostics: &mut Diagnostics,
    ) -> DynamicResult<Self::Output> {
        let walk = walk_commands(input, diagnostics);
        Ok(FinalDistance(manhattan_distance(&walk.final_position)))
    }
}

/*
For part 2, the real destination is the first block visited twice. Every block passed through
counts, not only where instructions end.
*/

#[derive(thiserror::Error, Debug)]
enum Day01Error {
    #[error("no block was visited twice")]
    NoDoubleVisit,
}

/// Part 2 answer, the first revisited block's distance from the origin.
struct FirstDoubleVisit(u64);

impl Display for FirstDoubleVisit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "First double visit is {} blocks away", self.0)
    }
}

impl Solution<PartTwo> for Day01 {
    type Input = Commands;
    type Output = FirstDoubleVisit;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        <Self as Solution<PartTwo>>::solve_with_diagnostics(input, &mut Diagnostics::disabled())
    }

    fn solve_with_diagnostics(
        input: &Self::Input,
        diagnostics: &mut Diagnostics,
    ) -> DynamicResult<Self::Output> {
        let walk = walk_commands(input, diagnostics);
        let first_repeat = walk.first_repeat.ok_or(Day01Error::NoDoubleVisit)?;
        Ok(FirstDoubleVisit(manhattan_distance(&first_repeat)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_input(input: &str) -> DynamicResult<Walk> {
        let commands = Commands::parse(input)?;
        Ok(GridWalker::new(false).walk(&commands.0))
    }

    #[test]
    fn part_one_solves_examples() -> DynamicResult<()> {
        for (input, expected) in [("R2, L3", 5), ("R2, R2, R2", 2), ("R5, L5, R5, R3", 12)] {
            let parsed = Commands::parse(input)?;
            let result = <Day01 as Solution<PartOne>>::solve(&parsed)?;
            assert_eq!(result.0, expected, "input {input:?}");
        }
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Commands::parse("R8, R4, R4, R8")?;
        let result = <Day01 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result.0, 4);
        assert_eq!(result.to_string(), "First double visit is 4 blocks away");
        Ok(())
    }

    #[test]
    fn revisit_is_found_mid_segment() -> DynamicResult<()> {
        let walk = walk_input("R8, R4, R4, R8")?;
        // the last segment crosses the first one on its way north
        assert_eq!(walk.first_repeat, Some(Position::new(4, 0)));
        assert_eq!(walk.final_position, Position::new(4, 4));
        Ok(())
    }

    #[test]
    fn first_repeat_is_never_replaced() -> DynamicResult<()> {
        // crosses (4, 0) first, then crosses (8, 0) heading south
        let walk = walk_input("R8, R4, R4, R8, R4, R8")?;
        assert_eq!(walk.first_repeat, Some(Position::new(4, 0)));
        Ok(())
    }

    #[test]
    fn returning_to_origin_is_a_repeat() -> DynamicResult<()> {
        let walk = walk_input("R1, R1, R1, R1")?;
        assert_eq!(walk.final_position, Position::origin());
        assert_eq!(walk.first_repeat, Some(Position::origin()));
        assert_eq!(walk.visits.0.get(&Position::origin()), Some(&2));
        Ok(())
    }

    #[test]
    fn no_commands_stays_at_origin() -> DynamicResult<()> {
        let walk = walk_input("")?;
        assert_eq!(walk.final_position, Position::origin());
        assert_eq!(walk.first_repeat, None);
        assert_eq!(walk.final_heading, Heading::North);
        assert_eq!(walk.visits.len(), 1);
        Ok(())
    }

    #[test]
    fn zero_distance_only_turns() -> DynamicResult<()> {
        let walk = walk_input("R0")?;
        assert_eq!(walk.final_heading, Heading::East);
        assert_eq!(walk.final_position, Position::origin());
        assert_eq!(walk.visits.len(), 1);
        assert_eq!(walk.visits.0.get(&Position::origin()), Some(&1));
        Ok(())
    }

    #[test]
    fn headings_wrap_both_ways() {
        let mut heading = Heading::North;
        for _ in 0..9 {
            heading = heading.turned(Turn::Right);
            assert!(heading.rotation() < 4);
        }
        assert_eq!(heading, Heading::East);

        for _ in 0..6 {
            heading = heading.turned(Turn::Left);
            assert!(heading.rotation() < 4);
        }
        assert_eq!(heading, Heading::West);
    }

    #[test]
    fn steps_follow_heading() -> DynamicResult<()> {
        assert_eq!(walk_input("R3")?.final_position, Position::new(3, 0));
        assert_eq!(walk_input("L3")?.final_position, Position::new(-3, 0));
        assert_eq!(walk_input("R0, R3")?.final_position, Position::new(0, -3));
        assert_eq!(walk_input("L0, L0, L0, L3")?.final_position, Position::new(0, 3));
        Ok(())
    }

    #[test]
    fn visit_log_has_no_zero_counts() -> DynamicResult<()> {
        let walk = walk_input("R5, L5, R5, R3, R8, R4, R4, R8, L0, L12")?;
        assert!(walk.visits.0.values().all(|&count| count >= 1));
        // every unit step adds one visit, plus the origin
        let total: u32 = walk.visits.0.values().sum();
        assert_eq!(total, 1 + 5 + 5 + 5 + 3 + 8 + 4 + 4 + 8 + 12);
        Ok(())
    }

    #[test]
    fn parsing_is_repeatable() -> DynamicResult<()> {
        let input = "R5, L5, R5, R3\n";
        let first = Commands::parse(input)?;
        let second = Commands::parse(input)?;
        assert_eq!(first, second);
        assert_eq!(
            first.0[1],
            Command {
                turn: Turn::Left,
                distance: 5
            }
        );
        Ok(())
    }

    #[test]
    fn parse_error_names_token() {
        for (input, token) in [("R2, X3", "X3"), ("R2, L", "L"), ("R-2", "R-2"), ("R2,, L1", "")] {
            let Err(error) = Commands::parse(input) else {
                panic!("{input:?} should fail to parse");
            };
            assert!(
                error.to_string().contains(&format!("{token:?}")),
                "error for {input:?} should name {token:?}: {error}"
            );
        }
    }

    #[test]
    fn unrecognized_turn_is_reported() {
        let parser = CommandParser::new();
        let Err(error) = parser.parse("U4") else {
            panic!("U should not be a turn");
        };
        assert!(matches!(
            error,
            ParseCommandError::UnrecognizedTurn { turn: 'U', .. }
        ));
    }

    #[test]
    fn part_two_fails_without_double_visit() -> DynamicResult<()> {
        let parsed = Commands::parse("R2, L3")?;
        let result = <Day01 as Solution<PartTwo>>::solve(&parsed);
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn debug_walker_records_trace() -> DynamicResult<()> {
        let commands = Commands::parse("R1, R1, R1, R1")?;
        let quiet = GridWalker::new(false).walk(&commands.0);
        assert!(quiet.trace.is_empty());

        let mut diagnostics = Diagnostics::new(true);
        let result =
            <Day01 as Solution<PartOne>>::solve_with_diagnostics(&commands, &mut diagnostics)?;
        assert_eq!(result.to_string(), "Final distance: 0");
        let messages = diagnostics.take();
        assert_eq!(messages[0], "dealing with R1");
        assert_eq!(messages[1], "turned Right, now facing East");
        assert_eq!(
            messages[messages.len() - 2],
            "first double visit at (0, 0)"
        );
        assert_eq!(
            messages.last().map(String::as_str),
            Some("finished facing North after visiting 4 blocks")
        );
        Ok(())
    }
}
