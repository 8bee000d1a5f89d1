//! Text to [`bool_ast::Expr`] parsing.
//!
//! `parse` auto-detects LaTeX/Unicode notation by token scan and otherwise
//! assumes standard notation (`!`, `*`, `+`, single uppercase variables,
//! `0`/`1`). Input is validated, then repaired (see [`repair`]), then
//! parsed by the strict grammar. Parse failures are the only errors this
//! workspace propagates to callers; everything downstream of a successful
//! parse degrades gracefully.

pub mod error;
mod latex;
mod parser;
mod repair;

pub use error::ParseError;
pub use latex::looks_like_latex;

use bool_ast::Expr;
use std::rc::Rc;

/// Parse standard or LaTeX/Unicode notation, auto-detected.
pub fn parse(input: &str) -> Result<Rc<Expr>, ParseError> {
    if latex::looks_like_latex(input) {
        parse_latex(input)
    } else {
        parse_standard(input)
    }
}

/// Parse standard notation only.
pub fn parse_standard(input: &str) -> Result<Rc<Expr>, ParseError> {
    let text = input.trim();
    validate(text)?;
    let repaired = repair::repair(text);
    if repaired.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    parser::parse_repaired(&repaired)
}

/// Parse LaTeX/Unicode notation by normalizing operator tokens to the
/// standard grammar first.
pub fn parse_latex(input: &str) -> Result<Rc<Expr>, ParseError> {
    parse_standard(&latex::normalize(input))
}

/// Reject inputs the repair pass must not touch: reserved tokens, invalid
/// variable characters, and unbalanced parentheses (each with a distinct
/// reason). Runs after LaTeX normalization, so operator words are already
/// discounted.
fn validate(text: &str) -> Result<(), ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let lower = text.to_ascii_lowercase();
    for reserved in ["undefined", "null"] {
        if lower.contains(reserved) {
            return Err(ParseError::ReservedToken(reserved.to_string()));
        }
    }

    // Depth must never go negative and must return to zero.
    let mut depth: i32 = 0;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(ParseError::UnbalancedParens);
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ParseError::UnbalancedParens);
    }

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            'A'..='Z' | '0' | '1' | '!' | '*' | '+' | '(' | ')' | '^' | '@' | '#' => {}
            '<' => {
                // the only multi-char token is '<->'
                if chars.next() != Some('-') || chars.next() != Some('>') {
                    return Err(ParseError::InvalidVariable('<'));
                }
            }
            c if c.is_whitespace() => {}
            c => return Err(ParseError::InvalidVariable(c)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_detects_latex() {
        let a = parse("A \\land B").unwrap();
        let b = parse("A * B").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_auto_detects_unicode() {
        let a = parse("¬A ∨ B").unwrap();
        let b = parse("!A + B").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(parse(""), Err(ParseError::EmptyInput));
        assert_eq!(parse("   "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_reserved_tokens_rejected() {
        assert!(matches!(
            parse("undefined"),
            Err(ParseError::ReservedToken(_))
        ));
        assert!(matches!(parse("A + null"), Err(ParseError::ReservedToken(_))));
    }

    #[test]
    fn test_lowercase_variable_rejected() {
        assert_eq!(parse("a + B"), Err(ParseError::InvalidVariable('a')));
    }

    #[test]
    fn test_unbalanced_parens_rejected() {
        assert_eq!(parse("(A + B"), Err(ParseError::UnbalancedParens));
        assert_eq!(parse("A + B)"), Err(ParseError::UnbalancedParens));
        assert_eq!(parse("())("), Err(ParseError::UnbalancedParens));
    }

    #[test]
    fn test_repair_feeds_strict_parse() {
        // dangling ! and trailing * both repaired, then parsed strictly
        let e = parse("A * !").unwrap();
        let expected = Expr::and(Expr::var("A"), Expr::not(Expr::constant(false)));
        assert_eq!(e, expected);

        let e = parse("A +").unwrap();
        assert_eq!(e, Expr::or(Expr::var("A"), Expr::constant(false)));
    }

    #[test]
    fn test_empty_group_repaired() {
        let e = parse("A + ()").unwrap();
        assert_eq!(e, Expr::or(Expr::var("A"), Expr::constant(false)));
    }

    #[test]
    fn test_overline_negation() {
        let e = parse("\\overline{A \\land B}").unwrap();
        let expected = Expr::not(Expr::and(Expr::var("A"), Expr::var("B")));
        assert_eq!(e, expected);
    }

    #[test]
    fn test_xnor_via_leftrightarrow() {
        let e = parse("A \\leftrightarrow B").unwrap();
        assert_eq!(e, Expr::xnor(Expr::var("A"), Expr::var("B")));
    }
}
