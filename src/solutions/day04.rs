use std::cmp::Reverse;
use std::collections::BTreeMap;

use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{Diagnostics, DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use regex::Regex;

#[solution_runner(
    name = "Day 4: Security Through Obscurity",
    parsed = Rooms,
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2016<4> {}

/*
Input is a list of encrypted rooms, one per line, like `aaaaa-bbb-z-y-x-123[abxyz]`.

Each room has an encrypted name of lowercase letters separated by dashes, a sector ID, and a
checksum in square brackets.
*/

type SectorId = u32;

#[derive(Debug)]
struct Room {
    encrypted_name: String,
    sector_id: SectorId,
    checksum: String,
}

#[derive(thiserror::Error, Debug)]
enum ParseRoomError {
    #[error("expected pattern \"[name]-[sector id][[checksum]]\", found {0:?}")]
    NotRoomSpec(String),
}

struct RoomParser {
    /// Regex capturing encrypted name, sector ID, and checksum.
    room_re: Regex,
}

impl RoomParser {
    const ROOM_PATTERN: &str = r"^([a-z]+(?:-[a-z]+)*)-(\d+)\[([a-z]+)\]$";

    fn new() -> Self {
        let room_re = Regex::new(Self::ROOM_PATTERN).expect("pattern should be valid");
        Self { room_re }
    }

    fn parse(&self, line: &str) -> DynamicResult<Room> {
        let captures = self
            .room_re
            .captures(line)
            .ok_or_else(|| ParseRoomError::NotRoomSpec(line.to_owned()))?;
        let name_match = captures.get(1).expect("name should be in capture group 1");
        let sector_match = captures
            .get(2)
            .expect("sector ID should be in capture group 2");
        let checksum_match = captures
            .get(3)
            .expect("checksum should be in capture group 3");

        Ok(Room {
            encrypted_name: name_match.as_str().to_owned(),
            sector_id: parse_with_context(sector_match.as_str())?,
            checksum: checksum_match.as_str().to_owned(),
        })
    }
}

struct Rooms(Vec<Room>);

impl ParseData for Rooms {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let room_parser = RoomParser::new();
        let rooms = parse_input_lines(input, |_, line| room_parser.parse(line))
            .collect::<Result<_, _>>()?;
        Ok(Self(rooms))
    }
}

/*
For part 1, a room is real if its checksum is the five most common letters in the encrypted name,
in order, with ties broken alphabetically. Sum the sector IDs of the real rooms.
*/

impl Room {
    const CHECKSUM_LENGTH: usize = 5;

    fn calculated_checksum(&self) -> String {
        // a BTreeMap keeps letters alphabetical, so a stable sort by count resolves ties
        let mut letter_counts: BTreeMap<char, usize> = BTreeMap::new();
        for letter in self.encrypted_name.chars().filter(char::is_ascii_lowercase) {
            *letter_counts.entry(letter).or_default() += 1;
        }

        let mut by_count: Vec<(char, usize)> = letter_counts.into_iter().collect();
        by_count.sort_by_key(|&(_, count)| Reverse(count));
        by_count
            .into_iter()
            .take(Self::CHECKSUM_LENGTH)
            .map(|(letter, _)| letter)
            .collect()
    }

    fn is_real(&self) -> bool {
        self.checksum == self.calculated_checksum()
    }
}

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = Rooms;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let sum = input
            .0
            .iter()
            .filter(|room| room.is_real())
            .map(|room| u64::from(room.sector_id))
            .checked_sum()
            .expect("should not have integer overflow during summation");
        Ok(sum)
    }
}

/*
For part 2, names are decrypted with a shift cipher: every letter rotates forward through the
alphabet once per sector ID, and dashes become spaces. Find the sector ID of the room where North
Pole objects are stored.
*/

/// Rotate a lowercase letter forward through the alphabet, wrapping from `z` to `a`.
///
/// Anything else is returned unchanged.
fn rotate_letter(letter: char, rotations: SectorId) -> char {
    if !letter.is_ascii_lowercase() {
        return letter;
    }
    let offset = u8::try_from(rotations % 26).expect("remainder of 26 should fit u8");
    let index = (letter as u8 - b'a' + offset) % 26;
    char::from(b'a' + index)
}

/// Decrypt text with a shift cipher of the given rotations, turning dashes into spaces.
fn decrypt(text: &str, rotations: SectorId) -> String {
    text.chars()
        .map(|c| if c == '-' { ' ' } else { rotate_letter(c, rotations) })
        .collect()
}

#[derive(thiserror::Error, Debug)]
enum Day04Error {
    #[error("no real room is named {0:?}")]
    RoomNotFound(&'static str),
}

impl Solution<PartTwo> for Day04 {
    type Input = Rooms;
    type Output = SectorId;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        <Self as Solution<PartTwo>>::solve_with_diagnostics(input, &mut Diagnostics::disabled())
    }

    fn solve_with_diagnostics(
        input: &Self::Input,
        diagnostics: &mut Diagnostics,
    ) -> DynamicResult<Self::Output> {
        const TARGET_NAME: &str = "northpole object storage";

        for room in input.0.iter().filter(|room| room.is_real()) {
            let name = decrypt(&room.encrypted_name, room.sector_id);
            diagnostics.record(|| format!("sector {}: {name}", room.sector_id));
            if name == TARGET_NAME {
                return Ok(room.sector_id);
            }
        }

        Err(Day04Error::RoomNotFound(TARGET_NAME).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"aaaaa-bbb-z-y-x-123[abxyz]
a-b-c-d-e-f-g-h-987[abcde]
not-a-real-room-404[oarel]
totally-real-room-200[decoy]
";

    #[test]
    fn checks_example_rooms() -> DynamicResult<()> {
        let parsed = Rooms::parse(EXAMPLE_INPUT)?;
        let real: Vec<bool> = parsed.0.iter().map(Room::is_real).collect();
        assert_eq!(real, [true, true, true, false]);
        assert_eq!(parsed.0[3].calculated_checksum(), "loart");
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Rooms::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 1514);
        Ok(())
    }

    #[test]
    fn decrypts_example_name() {
        assert_eq!(decrypt("qzmt-zixmtkozy-ivhz", 343), "very encrypted name");
        assert_eq!(rotate_letter('z', 1), 'a');
        assert_eq!(rotate_letter('a', 26), 'a');
    }

    #[test]
    fn part_two_finds_storage_room() -> DynamicResult<()> {
        let parsed = Rooms::parse(
            r"qzmt-zixmtkozy-ivhz-343[zimth]
opsuiqpmf-pckfdu-tupsbhf-27[pfusb]
",
        )?;
        let mut diagnostics = Diagnostics::new(true);
        let result =
            <Day04 as Solution<PartTwo>>::solve_with_diagnostics(&parsed, &mut diagnostics)?;
        assert_eq!(result, 27);
        assert_eq!(
            diagnostics.take(),
            [
                "sector 343: very encrypted name",
                "sector 27: northpole object storage"
            ]
        );
        Ok(())
    }

    #[test]
    fn part_two_fails_without_storage_room() -> DynamicResult<()> {
        let parsed = Rooms::parse(EXAMPLE_INPUT)?;
        assert!(<Day04 as Solution<PartTwo>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn malformed_room_fails_parsing() {
        for line in ["aaaaa-bbb-123[abxyz", "-123[abcde]", "abc-xyz[abcde]", "abc-12-[a]"] {
            assert!(Rooms::parse(line).is_err(), "{line:?} should fail");
        }
    }
}
