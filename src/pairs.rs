//! Training samples in the textual key form `x,y;x,y;...`.
//!
//! # Examples
//!
//! ```
//! use approximator::pairs::{format_pairs, parse_pairs};
//!
//! let pairs = parse_pairs("0,0;1,1;2,4").unwrap();
//! assert_eq!(pairs, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
//! assert_eq!(format_pairs(&pairs), "0,0;1,1;2,4");
//! ```

use itertools::Itertools;
use winnow::{
    ascii::multispace0,
    combinator::{delimited, separated, terminated},
    prelude::*,
    token::take_while,
};

#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// The key is not a `;`-separated list of `,`-separated fields.
    Syntax(String),
    /// The sample at the given position does not have exactly two fields.
    Arity { index: usize, found: usize },
    /// A field is not a number.
    Number(String),
}
impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match *self {
            ParseError::Syntax(ref err) => write!(f, "could not parse key: {}", err),
            ParseError::Arity { index, found } => write!(
                f,
                "sample {} has {} fields, expected an x and a y",
                index, found
            ),
            ParseError::Number(ref field) => write!(f, "invalid number {}", field),
        }
    }
}
impl std::error::Error for ParseError {}

fn field_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '+'
}

fn parse_field<'i>(input: &mut &'i str) -> PResult<&'i str> {
    delimited(multispace0, take_while(1.., field_char), multispace0).parse_next(input)
}

fn parse_sample<'i>(input: &mut &'i str) -> PResult<Vec<&'i str>> {
    separated(1.., parse_field, ",").parse_next(input)
}

fn parse_key<'i>(input: &mut &'i str) -> PResult<Vec<Vec<&'i str>>> {
    terminated(
        separated(1.., parse_sample, ";"),
        take_while(0.., |c: char| c == ';' || c.is_whitespace()),
    )
    .parse_next(input)
}

fn parse_number(field: &str) -> Result<f64, ParseError> {
    field
        .parse::<f64>()
        .map_err(|_| ParseError::Number(field.to_owned()))
}

/// Parse `x,y` samples separated by `;`. The inverse of [`format_pairs`].
///
/// There must be at least one sample, and trailing `;` separators are ignored. Numbers use
/// Rust's float syntax, so `inf`, `-inf` and `NaN` are accepted.
pub fn parse_pairs(key: &str) -> Result<Vec<(f64, f64)>, ParseError> {
    let samples = parse_key
        .parse(key)
        .map_err(|err| ParseError::Syntax(err.to_string()))?;
    samples
        .into_iter()
        .enumerate()
        .map(|(index, fields)| match fields[..] {
            [x, y] => Ok((parse_number(x)?, parse_number(y)?)),
            _ => Err(ParseError::Arity {
                index,
                found: fields.len(),
            }),
        })
        .collect()
}

/// The inverse of [`parse_pairs`].
pub fn format_pairs(pairs: &[(f64, f64)]) -> String {
    pairs.iter().map(|(x, y)| format!("{},{}", x, y)).join(";")
}
