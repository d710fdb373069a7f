use std::str::FromStr;

use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 7: Internet Protocol Version 7",
    parsed = Addresses,
    part_one = Day07,
    part_two = Day07
)]
impl super::AdventOfCode2016<7> {}

/*
Input is a list of IPv7 addresses, one per line, like `abba[mnop]qrst`.

Sequences inside square brackets are hypernet sequences; the rest are supernet sequences.
*/

#[derive(Debug)]
struct Address {
    supernets: Vec<String>,
    hypernets: Vec<String>,
}

#[derive(thiserror::Error, Debug)]
enum ParseAddressError {
    #[error("opening bracket at {0} is inside another hypernet sequence")]
    NestedBracket(usize),

    #[error("closing bracket at {0} has no opening bracket")]
    UnmatchedClosingBracket(usize),

    #[error("hypernet sequence is missing a closing bracket")]
    UnclosedHypernet,
}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut supernets = Vec::new();
        let mut hypernets = Vec::new();
        let mut current = String::new();
        let mut in_hypernet = false;

        for (index, c) in s.char_indices() {
            match c {
                '[' if in_hypernet => return Err(ParseAddressError::NestedBracket(index)),
                ']' if !in_hypernet => {
                    return Err(ParseAddressError::UnmatchedClosingBracket(index));
                }
                '[' => {
                    supernets.push(std::mem::take(&mut current));
                    in_hypernet = true;
                }
                ']' => {
                    hypernets.push(std::mem::take(&mut current));
                    in_hypernet = false;
                }
                _ => current.push(c),
            }
        }

        if in_hypernet {
            return Err(ParseAddressError::UnclosedHypernet);
        }
        supernets.push(current);

        Ok(Self {
            supernets,
            hypernets,
        })
    }
}

struct Addresses(Vec<Address>);

impl ParseData for Addresses {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let addresses =
            parse_input_lines(input, |_, line| Ok(line.trim().parse::<Address>()?))
                .collect::<Result<_, _>>()?;
        Ok(Self(addresses))
    }
}

/*
For part 1, an address supports TLS if a supernet sequence has an ABBA, and no hypernet sequence
has one. An ABBA is four characters where a pair of two different characters is followed by its
reverse, like `xyyx`.
*/

fn has_abba(sequence: &str) -> bool {
    sequence
        .as_bytes()
        .windows(4)
        .any(|w| w[0] != w[1] && w[0] == w[3] && w[1] == w[2])
}

impl Address {
    fn supports_tls(&self) -> bool {
        self.supernets.iter().any(|s| has_abba(s)) && !self.hypernets.iter().any(|h| has_abba(h))
    }
}

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = Addresses;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.0.iter().filter(|address| address.supports_tls()).count())
    }
}

/*
For part 2, an address supports SSL if a supernet sequence has an ABA, like `xyx`, and some hypernet
sequence has the matching BAB, `yxy`.
*/

/// Every ABA in a sequence, as the three bytes of its matching BAB.
fn babs_for_abas(sequence: &str) -> impl Iterator<Item = [u8; 3]> + '_ {
    sequence
        .as_bytes()
        .windows(3)
        .filter(|w| w[0] != w[1] && w[0] == w[2])
        .map(|w| [w[1], w[0], w[1]])
}

impl Address {
    fn supports_ssl(&self) -> bool {
        self.supernets
            .iter()
            .flat_map(|supernet| babs_for_abas(supernet))
            .any(|bab| {
                self.hypernets
                    .iter()
                    .any(|hypernet| hypernet.as_bytes().windows(3).any(|w| w == bab))
            })
    }
}

impl Solution<PartTwo> for Day07 {
    type Input = Addresses;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.0.iter().filter(|address| address.supports_ssl()).count())
    }
}
