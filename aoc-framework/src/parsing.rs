//! Parsing helpers that attach the failing text or position to errors.

use std::str::FromStr;

use thiserror::Error;

use crate::{DynamicError, DynamicResult};

/// A parsing error that keeps the string which failed to parse.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    string: String,
    source: E,
}

impl<E> ParseContextError<E>
where
    E: std::error::Error,
{
    /// Wrap `source` with the `string` being parsed when it occurred.
    pub fn new(source: E, string: &str) -> Self {
        Self {
            string: string.to_owned(),
            source,
        }
    }

    /// The string that failed to parse.
    #[must_use]
    pub fn string(&self) -> &str {
        &self.string
    }
}

/// Parse a string slice with [`str::parse`], adding the string as error context.
///
/// # Errors
///
/// A [`ParseContextError`] sourcing [`F::Err`][FromStr::Err] if parsing fails.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string
        .parse::<F>()
        .map_err(|source| ParseContextError::new(source, string))
}

/// A line of input failed to parse.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// Zero based, displayed one based.
    line_index: usize,
    source: DynamicError,
}

/// Parse each line of `input` with `parser`, which is given the zero based line index and line.
///
/// # Errors
///
/// Each item is an [`InvalidLine`] error sourcing the parser's error if that line failed.
pub fn parse_input_lines<T, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    F: FnMut(usize, &str) -> DynamicResult<T>,
{
    input.lines().enumerate().map(move |(line_index, line)| {
        parser(line_index, line).map_err(|source| InvalidLine { line_index, source })
    })
}

/// A delimited token of input failed to parse.
#[derive(Error, Debug)]
#[error("failure parsing token {} ({token:?})", .token_index.saturating_add(1))]
pub struct InvalidToken {
    /// Zero based, displayed one based.
    token_index: usize,
    token: String,
    source: DynamicError,
}

/// Parse the tokens of `input` separated by `delimiter`.
///
/// The input and every token are trimmed of surrounding whitespace first, so `"R2, L3\n"` split on
/// `','` yields `"R2"` and `"L3"`. Blank input yields no tokens.
///
/// # Errors
///
/// Each item is an [`InvalidToken`] error sourcing the parser's error if that token failed.
pub fn parse_delimited<T, F>(
    input: &str,
    delimiter: char,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidToken>>
where
    F: FnMut(&str) -> DynamicResult<T>,
{
    let trimmed = input.trim();
    trimmed
        .split(delimiter)
        .filter(move |_| !trimmed.is_empty())
        .map(str::trim)
        .enumerate()
        .map(move |(token_index, token)| {
            parser(token).map_err(|source| InvalidToken {
                token_index,
                token: token.to_owned(),
                source,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_context_keeps_string() {
        let Err(error) = parse_with_context::<u8>("300") else {
            panic!("300 should overflow u8");
        };
        assert_eq!(error.string(), "300");
        assert_eq!(error.to_string(), "failed to parse string: \"300\"");
    }

    #[test]
    fn parse_input_lines_reports_one_based_line() {
        let results: Vec<_> =
            parse_input_lines("1\nx\n3", |_, line| Ok(line.parse::<u8>()?)).collect();
        assert_eq!(results[0].as_ref().ok(), Some(&1));
        let Err(error) = &results[1] else {
            panic!("second line should fail");
        };
        assert_eq!(error.to_string(), "failure parsing line 2");
    }

    #[test]
    fn parse_delimited_trims_tokens() -> DynamicResult<()> {
        let tokens: Vec<String> = parse_delimited(" R2, L3\n", ',', |token| Ok(token.to_owned()))
            .collect::<Result<_, _>>()?;
        assert_eq!(tokens, ["R2", "L3"]);
        Ok(())
    }

    #[test]
    fn parse_delimited_blank_input_has_no_tokens() {
        assert_eq!(parse_delimited("  \n", ',', |_| Ok(())).count(), 0);
    }

    #[test]
    fn parse_delimited_names_failing_token() {
        let Err(error) = parse_delimited("1, two, 3", ',', |token| Ok(token.parse::<u8>()?))
            .collect::<Result<Vec<_>, _>>()
        else {
            panic!("second token should fail");
        };
        assert_eq!(error.to_string(), "failure parsing token 2 (\"two\")");
    }
}
