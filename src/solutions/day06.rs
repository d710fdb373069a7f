use std::cmp::Reverse;
use std::collections::BTreeMap;

use aoc_framework::runner::solution_runner;
use aoc_framework::{Diagnostics, DynamicResult, PartOne, PartTwo, Solution};

#[solution_runner(name = "Day 6: Signals and Noise", part_one = Day06, part_two = Day06)]
impl super::AdventOfCode2016<6> {}

/*
Input is a list of repeated copies of a message, one per line, each corrupted by noise.

The message can be recovered one column at a time from how often each letter appears in that
column.
*/

/// How to pick a column's letter from its frequencies.
#[derive(Debug, Clone, Copy)]
enum DecodeMode {
    MostCommon,
    LeastCommon,
}

/// Count each letter per column, across every whitespace separated word.
///
/// Words may differ in length; a column only counts the words reaching it.
fn column_frequencies(input: &str) -> Vec<BTreeMap<char, usize>> {
    let mut columns: Vec<BTreeMap<char, usize>> = Vec::new();
    for word in input.split_whitespace() {
        for (index, letter) in word.chars().enumerate() {
            if columns.len() <= index {
                columns.resize_with(index + 1, BTreeMap::new);
            }
            *columns[index].entry(letter).or_default() += 1;
        }
    }
    columns
}

/// Pick one letter per column. Ties go to the letter earliest in the alphabet.
fn decode(input: &str, mode: DecodeMode, diagnostics: &mut Diagnostics) -> String {
    column_frequencies(input)
        .iter()
        .enumerate()
        .filter_map(|(index, frequencies)| {
            diagnostics.record(|| format!("column {index}: {frequencies:?}"));
            let counts = frequencies.iter().map(|(&letter, &count)| (letter, count));
            let picked = match mode {
                DecodeMode::MostCommon => {
                    counts.min_by_key(|&(letter, count)| (Reverse(count), letter))
                }
                DecodeMode::LeastCommon => counts.min_by_key(|&(letter, count)| (count, letter)),
            };
            picked.map(|(letter, _)| letter)
        })
        .collect()
}

/*
For part 1, the message is made of the most common letter of each column.
*/

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = str;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        <Self as Solution<PartOne>>::solve_with_diagnostics(input, &mut Diagnostics::disabled())
    }

    fn solve_with_diagnostics(
        input: &Self::Input,
        diagnostics: &mut Diagnostics,
    ) -> DynamicResult<Self::Output> {
        Ok(decode(input, DecodeMode::MostCommon, diagnostics))
    }
}

/*
For part 2, the message uses the least common letter of each column instead.
*/

impl Solution<PartTwo> for Day06 {
    type Input = str;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        <Self as Solution<PartTwo>>::solve_with_diagnostics(input, &mut Diagnostics::disabled())
    }

    fn solve_with_diagnostics(
        input: &Self::Input,
        diagnostics: &mut Diagnostics,
    ) -> DynamicResult<Self::Output> {
        Ok(decode(input, DecodeMode::LeastCommon, diagnostics))
    }
}
