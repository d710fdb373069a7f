use std::collections::HashMap;

use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{Diagnostics, DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::{Point2, Vector2};

#[solution_runner(
    name = "Day 2: Bathroom Security",
    parsed = Instructions,
    part_one = Day02,
    part_two = Day02
)]
impl super::AdventOfCode2016<2> {}

/*
Input is lines of finger moves on a keypad: up (`U`), down (`D`), left (`L`), and right (`R`).

The finger starts on the `5` key. A move toward a spot with no key is ignored. At the end of each
line, the key under the finger is pressed, and the pressed keys form the bathroom code.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Up,
    Down,
    Left,
    Right,
}

#[derive(thiserror::Error, Debug)]
enum MoveTryFromCharError {
    #[error("expected a move (\"U\", \"D\", \"L\", or \"R\"), found {0:?}")]
    InvalidChar(char),
}

impl TryFrom<char> for Move {
    type Error = MoveTryFromCharError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Self::Up),
            'D' => Ok(Self::Down),
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            _ => Err(MoveTryFromCharError::InvalidChar(value)),
        }
    }
}

impl Move {
    /// Rows of a keypad go down the screen, so up is negative y.
    fn to_vector2(self) -> Vector2<i8> {
        match self {
            Self::Up => -Vector2::y(),
            Self::Down => Vector2::y(),
            Self::Left => -Vector2::x(),
            Self::Right => Vector2::x(),
        }
    }
}

/// One line of moves per key press.
struct Instructions(Vec<Vec<Move>>);

impl ParseData for Instructions {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let lines: Vec<Vec<Move>> = parse_input_lines(input, |_, line| {
            Ok(line
                .trim()
                .chars()
                .map(Move::try_from)
                .collect::<Result<Vec<_>, _>>()?)
        })
        .collect::<Result<_, _>>()?;

        // blank lines don't press a key
        Ok(Self(lines.into_iter().filter(|moves| !moves.is_empty()).collect()))
    }
}

/*
For part 1, the keypad is the usual 3x3 grid of keys `1` to `9`.
*/

/// The key layouts a finger can move around.
#[derive(Debug, Clone, Copy)]
enum KeypadLayout {
    /// `1` to `9` in a 3x3 grid.
    Square,
    /// Keys `1` to `9` and `A` to `D`, arranged in a diamond around the `7`.
    Diamond,
}

impl KeypadLayout {
    fn rows(self) -> &'static [&'static str] {
        match self {
            Self::Square => &["123", "456", "789"],
            Self::Diamond => &["  1  ", " 234 ", "56789", " ABC ", "  D  "],
        }
    }
}

type KeyPosition = Point2<i8>;

struct Keypad {
    keys: HashMap<KeyPosition, char>,
}

impl Keypad {
    const START_KEY: char = '5';

    fn new(layout: KeypadLayout) -> Self {
        let mut keys = HashMap::new();
        for (y, row) in (0..).zip(layout.rows()) {
            for (x, key) in (0..).zip(row.chars()) {
                if key != ' ' {
                    keys.insert(KeyPosition::new(x, y), key);
                }
            }
        }
        Self { keys }
    }

    fn start(&self) -> KeyPosition {
        self.keys
            .iter()
            .find_map(|(&position, &key)| (key == Self::START_KEY).then_some(position))
            .expect("every layout should have a start key")
    }

    fn key_at(&self, position: &KeyPosition) -> Option<char> {
        self.keys.get(position).copied()
    }
}

/// Follow every line of moves from the start key, pressing a key after each line.
fn bathroom_code(
    instructions: &Instructions,
    layout: KeypadLayout,
    diagnostics: &mut Diagnostics,
) -> String {
    let keypad = Keypad::new(layout);
    let mut finger = keypad.start();
    let mut code = String::new();

    for moves in &instructions.0 {
        for step in moves {
            let next = finger + step.to_vector2();
            if keypad.key_at(&next).is_some() {
                finger = next;
            }
        }

        let key = keypad
            .key_at(&finger)
            .expect("finger should only move onto keys");
        diagnostics.record(|| format!("pressed {key} at ({}, {})", finger.x, finger.y));
        code.push(key);
    }

    code
}

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = Instructions;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        <Self as Solution<PartOne>>::solve_with_diagnostics(input, &mut Diagnostics::disabled())
    }

    fn solve_with_diagnostics(
        input: &Self::Input,
        diagnostics: &mut Diagnostics,
    ) -> DynamicResult<Self::Output> {
        Ok(bathroom_code(input, KeypadLayout::Square, diagnostics))
    }
}

/*
For part 2, the keypad turns out to be a diamond:

```
    1
  2 3 4
5 6 7 8 9
  A B C
    D
```

The finger still starts on `5`.
*/

impl Solution<PartTwo> for Day02 {
    type Input = Instructions;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        <Self as Solution<PartTwo>>::solve_with_diagnostics(input, &mut Diagnostics::disabled())
    }

    fn solve_with_diagnostics(
        input: &Self::Input,
        diagnostics: &mut Diagnostics,
    ) -> DynamicResult<Self::Output> {
        Ok(bathroom_code(input, KeypadLayout::Diamond, diagnostics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"ULL
RRDDD
LURDL
UUUUD
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Instructions::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, "1985");
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Instructions::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, "5DB3");
        Ok(())
    }

    #[test]
    fn indented_lines_are_trimmed() -> DynamicResult<()> {
        let parsed = Instructions::parse("ULL\n     RRDDD\n     LURDL\n     UUUUD\n\n")?;
        assert_eq!(parsed.0.len(), 4);
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, "1985");
        Ok(())
    }

    #[test]
    fn diamond_starts_on_left_corner() {
        let keypad = Keypad::new(KeypadLayout::Diamond);
        assert_eq!(keypad.start(), KeyPosition::new(0, 2));
        assert_eq!(keypad.key_at(&KeyPosition::new(0, 1)), None);
        assert_eq!(keypad.key_at(&KeyPosition::new(2, 4)), Some('D'));
    }

    #[test]
    fn invalid_move_fails_parsing() {
        let Err(error) = Instructions::parse("UL\nUX") else {
            panic!("X should not be a move");
        };
        assert_eq!(error.to_string(), "failure parsing line 2");
    }

    #[test]
    fn presses_are_recorded_as_diagnostics() -> DynamicResult<()> {
        let parsed = Instructions::parse("ULL\nRRDDD")?;
        let mut diagnostics = Diagnostics::new(true);
        <Day02 as Solution<PartOne>>::solve_with_diagnostics(&parsed, &mut diagnostics)?;
        assert_eq!(
            diagnostics.take(),
            ["pressed 1 at (0, 0)", "pressed 9 at (2, 2)"]
        );
        Ok(())
    }
}
