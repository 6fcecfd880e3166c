use std::borrow::Cow;
use winnow::{
    ascii::multispace0,
    combinator::{alt, delimited, opt},
    prelude::*,
    token::{one_of, take_while},
};

use super::{BinaryOp, Expression, UnaryOp, VARIABLE_LABEL};

#[derive(Clone, Debug)]
pub enum ParseError {
    UnknownFunction(String),
    UnknownAtom(String),
    Other(String),
}
impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match *self {
            ParseError::UnknownFunction(ref name) => write!(f, "unknown function {}", name),
            ParseError::UnknownAtom(ref atom) => write!(f, "invalid constant or variable {}", atom),
            ParseError::Other(ref err) => write!(f, "could not parse: {}", err),
        }
    }
}
impl std::error::Error for ParseError {}

#[derive(Debug)]
enum Item {
    Atom(String),
    Unary(String, Box<Item>),
    Binary(char, Box<Item>, Box<Item>),
}
impl Item {
    fn into_expression(self) -> Result<Expression, ParseError> {
        match self {
            Item::Atom(atom) => atom_expression(atom),
            Item::Unary(name, child) => {
                let op = UnaryOp::from_name(&name).ok_or(ParseError::UnknownFunction(name))?;
                Ok(Expression::unary(op, child.into_expression()?))
            }
            Item::Binary(symbol, left, right) => {
                let op = BinaryOp::from_symbol(symbol)
                    .ok_or_else(|| ParseError::Other(format!("unknown operator {}", symbol)))?;
                Ok(Expression::binary(
                    op,
                    left.into_expression()?,
                    right.into_expression()?,
                ))
            }
        }
    }
}

fn atom_expression(atom: String) -> Result<Expression, ParseError> {
    if atom == VARIABLE_LABEL {
        Ok(Expression::Variable)
    } else if atom == "INF" {
        Ok(Expression::INF)
    } else if let Ok(value) = atom.parse::<f64>() {
        Ok(Expression::Constant {
            value,
            label: Cow::Owned(atom),
        })
    } else {
        Err(ParseError::UnknownAtom(atom))
    }
}

fn atom_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.'
}

fn parse_atom(input: &mut &str) -> PResult<Item> {
    multispace0(input)?;
    let atom = (opt("-"), take_while(1.., atom_char))
        .recognize()
        .parse_next(input)?;
    multispace0(input)?;
    Ok(Item::Atom(atom.to_owned()))
}

fn parse_unary(input: &mut &str) -> PResult<Item> {
    multispace0(input)?;
    let name = take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)?;
    let child = delimited("(", parse_expr, ")").parse_next(input)?;
    multispace0(input)?;
    Ok(Item::Unary(name.to_owned(), Box::new(child)))
}

fn parse_binary(input: &mut &str) -> PResult<Item> {
    multispace0(input)?;
    let (left, symbol, right) = delimited(
        "(",
        (parse_expr, one_of(['*', '/', '+', '-', '^']), parse_expr),
        ")",
    )
    .parse_next(input)?;
    multispace0(input)?;
    Ok(Item::Binary(symbol, Box::new(left), Box::new(right)))
}

fn parse_expr(input: &mut &str) -> PResult<Item> {
    alt((parse_unary, parse_binary, parse_atom)).parse_next(input)
}

pub fn parse(input: &str) -> Result<Expression, ParseError> {
    match parse_expr.parse(input) {
        Ok(item) => item.into_expression(),
        Err(err) => Err(ParseError::Other(err.to_string())),
    }
}
