//! Forgiving pre-processor that fixes common malformed fragments before
//! the strict grammar runs.
//!
//! Repairs, per level:
//! - empty parentheses `()` become the constant `0`
//! - a dangling `!` with no operand becomes `!0`
//! - a `*` missing an operand is filled with `1`, a `+` with `0`
//! - a digit immediately followed by `!` gets a `*` inserted
//!
//! The pass recurses into parenthesized groups first, so nested malformed
//! fragments are fixed before the enclosing level is tokenized.

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    Atom(String),
    Not,
    And,
    Or,
    Conn(&'static str),
}

/// Repair a (balanced) input fragment. Callers validate paren balance
/// before invoking this; a stray `)` is skipped rather than repaired.
pub fn repair(input: &str) -> String {
    let tokens = tokenize(input);
    let tokens = fix_tokens(tokens);
    render(&tokens)
}

fn tokenize(s: &str) -> Vec<Tok> {
    let chars: Vec<char> = s.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            '(' => {
                // find matching close, recurse into the group
                let mut depth = 1;
                let mut j = i + 1;
                while j < chars.len() && depth > 0 {
                    match chars[j] {
                        '(' => depth += 1,
                        ')' => depth -= 1,
                        _ => {}
                    }
                    j += 1;
                }
                let inner: String = chars[i + 1..j.saturating_sub(1)].iter().collect();
                let repaired = repair(&inner);
                if repaired.trim().is_empty() {
                    tokens.push(Tok::Atom("0".to_string()));
                } else {
                    tokens.push(Tok::Atom(format!("({})", repaired)));
                }
                i = j;
            }
            ')' => i += 1,
            '!' => {
                tokens.push(Tok::Not);
                i += 1;
            }
            '*' => {
                tokens.push(Tok::And);
                i += 1;
            }
            '+' => {
                tokens.push(Tok::Or);
                i += 1;
            }
            '^' => {
                tokens.push(Tok::Conn("^"));
                i += 1;
            }
            '@' => {
                tokens.push(Tok::Conn("@"));
                i += 1;
            }
            '#' => {
                tokens.push(Tok::Conn("#"));
                i += 1;
            }
            '<' if chars.get(i + 1) == Some(&'-') && chars.get(i + 2) == Some(&'>') => {
                tokens.push(Tok::Conn("<->"));
                i += 3;
            }
            'A'..='Z' | '0' | '1' => {
                tokens.push(Tok::Atom(c.to_string()));
                i += 1;
            }
            _ => i += 1, // whitespace and anything validation let through
        }
    }
    tokens
}

fn is_binary(tok: &Tok) -> bool {
    matches!(tok, Tok::And | Tok::Or | Tok::Conn(_))
}

fn identity_for(tok: &Tok) -> Tok {
    match tok {
        // AND identity is 1, OR identity is 0
        Tok::And => Tok::Atom("1".to_string()),
        _ => Tok::Atom("0".to_string()),
    }
}

fn fix_tokens(tokens: Vec<Tok>) -> Vec<Tok> {
    // Insert `*` between a digit atom and a following `!`
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    for tok in tokens {
        if tok == Tok::Not {
            if let Some(Tok::Atom(a)) = out.last() {
                if a == "0" || a == "1" {
                    out.push(Tok::And);
                }
            }
        }
        out.push(tok);
    }

    // A `!` with nothing to negate gets the operand `0`
    let mut fixed: Vec<Tok> = Vec::with_capacity(out.len());
    let len = out.len();
    for (i, tok) in out.into_iter().enumerate() {
        let is_not = tok == Tok::Not;
        fixed.push(tok);
        if is_not {
            let next_is_operand = i + 1 < len;
            if !next_is_operand {
                fixed.push(Tok::Atom("0".to_string()));
            }
        }
    }
    // Dangling `!` before a binary operator (the end case is handled above)
    let mut result: Vec<Tok> = Vec::with_capacity(fixed.len());
    let mut iter = fixed.into_iter().peekable();
    while let Some(tok) = iter.next() {
        let is_not = tok == Tok::Not;
        result.push(tok);
        if is_not {
            if let Some(next) = iter.peek() {
                if is_binary(next) {
                    result.push(Tok::Atom("0".to_string()));
                }
            }
        }
    }

    // Leading, trailing, and doubled binary operators get the operator's
    // identity element as the missing operand.
    let mut padded: Vec<Tok> = Vec::with_capacity(result.len() + 2);
    for tok in result {
        let need_operand_before = padded.last().map_or(true, is_binary);
        if is_binary(&tok) && need_operand_before {
            padded.push(identity_for(&tok));
        }
        padded.push(tok);
    }
    if let Some(last) = padded.last() {
        if is_binary(last) {
            let fill = identity_for(last);
            padded.push(fill);
        }
    }
    padded
}

fn render(tokens: &[Tok]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(tokens.len());
    for tok in tokens {
        parts.push(match tok {
            Tok::Atom(s) => s.as_str(),
            Tok::Not => "!",
            Tok::And => "*",
            Tok::Or => "+",
            Tok::Conn(c) => c,
        });
    }
    parts.join(" ")
}
