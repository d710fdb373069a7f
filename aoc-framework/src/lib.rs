//! Traits and helpers for writing Advent of Code solutions.
//!
//! # Quick Start
//!
//! 1. Define a parsed input type by implementing [`ParseData`]:
//!
//! ```
//! # use aoc_framework::{DynamicResult, ParseData};
//! #
//! struct Rows(Vec<String>);
//!
//! impl ParseData for Rows {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         Ok(Self(input.lines().map(str::to_owned).collect()))
//!     }
//! }
//! ```
//!
//! 2. Implement [`Solution`] for a [`Part`]:
//!
//! ```
//! # use aoc_framework::{DynamicResult, ParseData, PartOne, Solution};
//! #
//! # struct Rows(Vec<String>);
//! # impl ParseData for Rows {
//! #     fn parse(input: &str) -> DynamicResult<Self> {
//! #         Ok(Self(input.lines().map(str::to_owned).collect()))
//! #     }
//! # }
//! #
//! struct Day03;
//!
//! impl Solution<PartOne> for Day03 {
//!     type Input = Rows;
//!     type Output = usize;
//!
//!     fn solve(input: &Self::Input) -> DynamicResult<usize> {
//!         Ok(input.0.len())
//!     }
//! }
//! ```
//!
//! 3. Run it through the [`runner`] module, usually with the
//!    [`#[solution_runner]`][runner::solution_runner] attribute.
//!
//! # Diagnostics
//!
//! A solution can report debug messages by overriding [`Solution::solve_with_diagnostics`]. The
//! runner only enables [`Diagnostics`] when explicitly asked to through
//! [`RunOptions`][runner::RunOptions]:
//!
//! ```
//! use aoc_framework::{Diagnostics, DynamicResult, PartOne, Solution};
//!
//! struct Day06;
//!
//! impl Solution<PartOne> for Day06 {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         <Self as Solution<PartOne>>::solve_with_diagnostics(input, &mut Diagnostics::disabled())
//!     }
//!
//!     fn solve_with_diagnostics(
//!         input: &str,
//!         diagnostics: &mut Diagnostics,
//!     ) -> DynamicResult<usize> {
//!         let count = input.lines().count();
//!         diagnostics.record(|| format!("counted {count} lines"));
//!         Ok(count)
//!     }
//! }
//! ```

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
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

mod diagnostics;
pub mod parsing;
pub mod runner;

pub use diagnostics::Diagnostics;

mod private {
    /// Sealing trait so [`Part`][super::Part] can only be implemented in this crate.
    pub trait Sealed {}
}

/// A boxed, dynamically dispatched error.
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result with a [`DynamicError`] as its error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// Identifies which part of a puzzle a solution answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// Marker trait for the part a [`Solution<P>`] is implemented for.
pub trait Part: private::Sealed {
    /// The [`PartKind`] this marker stands for.
    fn kind() -> PartKind;
}

/// Marks a [`Solution`] for part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Marks a [`Solution`] for part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A solution to one [`Part`] of a puzzle.
pub trait Solution<P: Part> {
    /// The input passed by reference to [`Solution::solve`].
    ///
    /// Use `str` to solve directly from the raw input, or a [`ParseData`] type to share a parse
    /// step between parts.
    type Input: ?Sized;

    /// The answer produced, displayed by the runner.
    type Output: Display;

    /// Solve with the given input.
    ///
    /// # Errors
    ///
    /// Invalid input or a failed search is returned as a dynamically dispatched error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;

    /// Solve with the given input, recording debug messages into `diagnostics`.
    ///
    /// The default ignores `diagnostics` and defers to [`Solution::solve`].
    ///
    /// # Errors
    ///
    /// Same as [`Solution::solve`].
    fn solve_with_diagnostics(
        input: &Self::Input,
        diagnostics: &mut Diagnostics,
    ) -> DynamicResult<Self::Output> {
        let _ = diagnostics;
        <Self as Solution<P>>::solve(input)
    }
}

/// Data created by parsing the input string.
pub trait ParseData {
    /// Parse the input string.
    ///
    /// # Errors
    ///
    /// Any parsing failure, as a dynamically dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}
