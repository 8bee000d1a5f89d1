//! Strict recursive-descent grammar over repaired input.
//!
//! ```text
//! Conn    := Or (('<->' | '^' | '@' | '#') Or)*
//! Or      := And ('+' And)*
//! And     := Unary ('*' Unary)*
//! Unary   := '!' Unary | Primary
//! Primary := 'A'..'Z' | '0' | '1' | '(' Conn ')'
//! ```
//!
//! NOT binds tighter than AND binds tighter than OR; the extended
//! connectives sit below OR. Parentheses only group, they are never
//! retained structurally.

use crate::error::ParseError;
use bool_ast::Expr;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::multispace0,
    combinator::map,
    multi::fold_many0,
    sequence::{delimited, pair, preceded},
    IResult,
};
use std::rc::Rc;

fn parse_constant(input: &str) -> IResult<&str, Rc<Expr>> {
    alt((
        map(tag("0"), |_| Expr::constant(false)),
        map(tag("1"), |_| Expr::constant(true)),
    ))(input)
}

fn parse_variable(input: &str) -> IResult<&str, Rc<Expr>> {
    match input.chars().next() {
        Some(c) if c.is_ascii_uppercase() => {
            Ok((&input[1..], Expr::var(&c.to_string())))
        }
        _ => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Alpha,
        ))),
    }
}

fn parse_parens(input: &str) -> IResult<&str, Rc<Expr>> {
    delimited(
        tag("("),
        parse_connective,
        preceded(multispace0, tag(")")),
    )(input)
}

fn parse_primary(input: &str) -> IResult<&str, Rc<Expr>> {
    preceded(
        multispace0,
        alt((parse_constant, parse_variable, parse_parens)),
    )(input)
}

fn parse_unary(input: &str) -> IResult<&str, Rc<Expr>> {
    alt((
        map(
            pair(preceded(multispace0, tag("!")), parse_unary),
            |(_, operand)| Expr::not(operand),
        ),
        parse_primary,
    ))(input)
}

fn parse_and(input: &str) -> IResult<&str, Rc<Expr>> {
    let (input, init) = parse_unary(input)?;
    fold_many0(
        preceded(preceded(multispace0, tag("*")), parse_unary),
        move || init.clone(),
        Expr::and,
    )(input)
}

fn parse_or(input: &str) -> IResult<&str, Rc<Expr>> {
    let (input, init) = parse_and(input)?;
    fold_many0(
        preceded(preceded(multispace0, tag("+")), parse_and),
        move || init.clone(),
        Expr::or,
    )(input)
}

fn parse_connective(input: &str) -> IResult<&str, Rc<Expr>> {
    let (input, init) = parse_or(input)?;
    fold_many0(
        pair(
            preceded(
                multispace0,
                alt((tag("<->"), tag("^"), tag("@"), tag("#"))),
            ),
            parse_or,
        ),
        move || init.clone(),
        |acc, (op, val)| match op {
            "<->" => Expr::xnor(acc, val),
            "^" => Expr::xor(acc, val),
            "@" => Expr::nand(acc, val),
            "#" => Expr::nor(acc, val),
            _ => unreachable!(),
        },
    )(input)
}

pub(crate) fn parse_repaired(input: &str) -> Result<Rc<Expr>, ParseError> {
    let (remaining, expr) =
        parse_connective(input).map_err(|e| ParseError::Syntax(e.to_string()))?;
    let remaining = remaining.trim();
    if !remaining.is_empty() {
        return Err(ParseError::UnconsumedInput(remaining.to_string()));
    }
    Ok(expr)
}
