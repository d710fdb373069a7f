use std::fmt::Write;

use aoc_framework::runner::solution_runner;
use aoc_framework::{Diagnostics, DynamicResult, ParseData, PartOne, PartTwo, Solution};
use md5::Digest;

#[solution_runner(
    name = "Day 5: How About a Nice Game of Chess?",
    parsed = DoorId,
    part_one = Day05,
    part_two = Day05
)]
impl super::AdventOfCode2016<5> {}

/*
Input is a door ID, a short string of lowercase letters.

Each password character is found by taking the MD5 hash of the door ID followed by an increasing
integer index (starting from 0). A hash is interesting when its hexadecimal form starts with five
zeroes.
*/

#[derive(thiserror::Error, Debug)]
enum ParseDoorIdError {
    #[error("door ID is empty")]
    Empty,
}

struct DoorId(String);

impl ParseData for DoorId {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let door_id = input.trim();
        if door_id.is_empty() {
            return Err(ParseDoorIdError::Empty.into());
        }
        Ok(Self(door_id.to_owned()))
    }
}

/// Check for five leading zeroes in hexadecimal, i.e. the first 20 bits are unset.
fn is_interesting(digest: &Digest) -> bool {
    digest[0] == 0 && digest[1] == 0 && digest[2] & 0xF0 == 0
}

/// The sixth hexadecimal digit of a digest.
fn sixth_hex_digit(digest: &Digest) -> u8 {
    digest[2] & 0x0F
}

/// The seventh hexadecimal digit of a digest.
fn seventh_hex_digit(digest: &Digest) -> u8 {
    digest[3] >> 4
}

fn hex_char(nibble: u8) -> char {
    char::from_digit(u32::from(nibble), 16).expect("nibble should be a hexadecimal digit")
}

/// An endless iterator of interesting digests for a door ID, paired with the index hashed.
///
/// Ends only if the index would overflow.
struct InterestingHashes<'a> {
    door_id: &'a str,
    next_index: Option<u64>,
    /// Reused between hashes to hold the door ID followed by the index.
    buffer: String,
}

impl<'a> InterestingHashes<'a> {
    fn new(door_id: &'a str) -> Self {
        Self::starting_at(door_id, 0)
    }

    fn starting_at(door_id: &'a str, index: u64) -> Self {
        Self {
            door_id,
            next_index: Some(index),
            buffer: String::with_capacity(door_id.len() + 20),
        }
    }
}

impl Iterator for InterestingHashes<'_> {
    type Item = (u64, Digest);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.next_index {
            self.next_index = index.checked_add(1);

            self.buffer.clear();
            self.buffer.push_str(self.door_id);
            write!(self.buffer, "{index}").expect("writing to a string should not fail");

            let digest = md5::compute(self.buffer.as_bytes());
            if is_interesting(&digest) {
                return Some((index, digest));
            }
        }
        None
    }
}

const PASSWORD_LENGTH: usize = 8;

#[derive(thiserror::Error, Debug)]
enum Day05Error {
    #[error("ran out of indices before the password was complete")]
    IndicesExhausted,
}

/*
For part 1, the sixth character of each interesting hash is the next character of the password.
*/

fn sequential_password(
    door_id: &str,
    diagnostics: &mut Diagnostics,
) -> Result<String, Day05Error> {
    let mut password = String::with_capacity(PASSWORD_LENGTH);
    for (index, digest) in InterestingHashes::new(door_id).take(PASSWORD_LENGTH) {
        diagnostics.record(|| format!("index {index}: {digest:x}"));
        password.push(hex_char(sixth_hex_digit(&digest)));
    }

    if password.len() == PASSWORD_LENGTH {
        Ok(password)
    } else {
        Err(Day05Error::IndicesExhausted)
    }
}

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = DoorId;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        <Self as Solution<PartOne>>::solve_with_diagnostics(input, &mut Diagnostics::disabled())
    }

    fn solve_with_diagnostics(
        input: &Self::Input,
        diagnostics: &mut Diagnostics,
    ) -> DynamicResult<Self::Output> {
        Ok(sequential_password(&input.0, diagnostics)?)
    }
}

/*
For part 2, the sixth character of an interesting hash is a position in the password instead, and
the seventh is the character to put there. Positions outside the password are ignored, and only the
first character found for a position is used.
*/

fn positioned_password(
    door_id: &str,
    diagnostics: &mut Diagnostics,
) -> Result<String, Day05Error> {
    let mut slots: [Option<char>; PASSWORD_LENGTH] = [None; PASSWORD_LENGTH];
    let mut hashes = InterestingHashes::new(door_id);

    while slots.iter().any(Option::is_none) {
        let (index, digest) = hashes.next().ok_or(Day05Error::IndicesExhausted)?;
        let position = usize::from(sixth_hex_digit(&digest));
        if let Some(slot) = slots.get_mut(position)
            && slot.is_none()
        {
            let character = hex_char(seventh_hex_digit(&digest));
            *slot = Some(character);
            diagnostics.record(|| format!("index {index}: {character} into position {position}"));
        }
    }

    Ok(slots.into_iter().flatten().collect())
}

impl Solution<PartTwo> for Day05 {
    type Input = DoorId;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        <Self as Solution<PartTwo>>::solve_with_diagnostics(input, &mut Diagnostics::disabled())
    }

    fn solve_with_diagnostics(
        input: &Self::Input,
        diagnostics: &mut Diagnostics,
    ) -> DynamicResult<Self::Output> {
        Ok(positioned_password(&input.0, diagnostics)?)
    }
}
