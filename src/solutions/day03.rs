use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 3: Squares With Three Sides",
    parsed = SideRows,
    part_one = Day03,
    part_two = Day03
)]
impl super::AdventOfCode2016<3> {}

/*
Input is lines of three whitespace separated side lengths, right aligned in columns.

A set of sides forms a triangle when the sum of any two sides is larger than the remaining side.
*/

type SideLength = i32;

/// Check if side lengths can form a triangle.
///
/// Checking the two smallest against the largest is enough, and rules out zero or negative
/// lengths as a side effect. Anything but three sides is not a triangle.
fn is_triangle(sides: &[SideLength]) -> bool {
    let mut sorted = match sides {
        &[a, b, c] => [a, b, c],
        _ => return false,
    };
    sorted.sort_unstable();
    let [shortest, middle, longest] = sorted;
    // widen so large lengths can't overflow the sum
    i64::from(shortest) + i64::from(middle) > i64::from(longest)
}

#[derive(thiserror::Error, Debug)]
enum ParseSideRowError {
    #[error("expected exactly 3 side lengths, found {0}")]
    ExpectedThreeSides(usize),
}

/// Rows of three side lengths, in input order.
struct SideRows(Vec<[SideLength; 3]>);

impl ParseData for SideRows {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rows = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let sides: Vec<SideLength> = line
                .split_whitespace()
                .map(parse_with_context::<SideLength>)
                .collect::<Result<_, _>>()?;
            let row = <[SideLength; 3]>::try_from(sides)
                .map_err(|sides| ParseSideRowError::ExpectedThreeSides(sides.len()))?;
            Ok(row)
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(rows))
    }
}

/*
For part 1, count how many rows are triangles.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = SideRows;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.0.iter().filter(|row| is_triangle(row.as_slice())).count())
    }
}

/*
For part 2, triangles are specified in columns instead. Every group of three rows holds three
triangles, one down each column.
*/

#[derive(thiserror::Error, Debug)]
enum Day03Error {
    #[error("row count {0} doesn't divide into groups of three")]
    IncompleteColumnGroup(usize),
}

/// Read triangles down the columns of every group of three rows.
fn column_triangles(rows: &[[SideLength; 3]]) -> Result<Vec<[SideLength; 3]>, Day03Error> {
    if rows.len() % 3 != 0 {
        return Err(Day03Error::IncompleteColumnGroup(rows.len()));
    }

    Ok(rows
        .chunks_exact(3)
        .flat_map(|group| {
            (0..3).map(move |column| [group[0][column], group[1][column], group[2][column]])
        })
        .collect())
}

impl Solution<PartTwo> for Day03 {
    type Input = SideRows;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let triangles = column_triangles(&input.0)?;
        Ok(triangles
            .iter()
            .filter(|sides| is_triangle(sides.as_slice()))
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_triangles() {
        assert!(is_triangle(&[2, 2, 3]));
        assert!(is_triangle(&[5, 5, 5]));
        assert!(is_triangle(&[3, 5, 4]));
    }

    #[test]
    fn rejects_non_triangles() {
        assert!(!is_triangle(&[5, 10, 25]));
        assert!(!is_triangle(&[1, 2, 3]));
        assert!(!is_triangle(&[-1, 3, 3]));
        assert!(!is_triangle(&[-5, 5, 5]));
        assert!(!is_triangle(&[1, 2, 3, 4]));
        assert!(!is_triangle(&[3, 3]));
    }

    #[test]
    fn part_one_counts_rows() -> DynamicResult<()> {
        let parsed = SideRows::parse("  5  10  25\n  3   4   5\n  2   2   3\n")?;
        let result = <Day03 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2);
        Ok(())
    }

    const COLUMN_EXAMPLE: &str = r"101 301 501
102 302 502
103 303 503
201 401 601
202 402 602
203 403 603
";

    #[test]
    fn part_two_reads_columns() -> DynamicResult<()> {
        let parsed = SideRows::parse(COLUMN_EXAMPLE)?;
        let triangles = column_triangles(&parsed.0)?;
        assert_eq!(triangles[0], [101, 102, 103]);
        assert_eq!(triangles[2], [501, 502, 503]);
        assert_eq!(triangles[4], [401, 402, 403]);
        let result = <Day03 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 6);
        Ok(())
    }

    #[test]
    fn part_two_rejects_partial_group() -> DynamicResult<()> {
        let parsed = SideRows::parse("1 2 3\n4 5 6\n")?;
        assert!(<Day03 as Solution<PartTwo>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn wrong_side_count_fails_parsing() {
        assert!(SideRows::parse("1 2 3\n4 5\n").is_err());
        assert!(SideRows::parse("1 2 three\n").is_err());
    }
}
