//! LaTeX and Unicode notation support.
//!
//! LaTeX input is handled by token normalization: operator words and
//! Unicode glyphs are rewritten to the standard-notation operators and the
//! result goes through the same repair + strict-parse pipeline. Braces map
//! to parentheses, which also makes `\overline{...}` a plain `!(...)`.

/// Token replacement table, longest-match first (`\leftrightarrow` must be
/// rewritten before `\left` is stripped).
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\\leftrightarrow", " <-> "),
    ("\\overline", " ! "),
    ("\\uparrow", " @ "),
    ("\\downarrow", " # "),
    ("\\oplus", " ^ "),
    ("\\wedge", " * "),
    ("\\land", " * "),
    ("\\lnot", " ! "),
    ("\\neg", " ! "),
    ("\\vee", " + "),
    ("\\lor", " + "),
    ("\\left", " "),
    ("\\right", " "),
    ("∧", " * "),
    ("∨", " + "),
    ("¬", " ! "),
    ("↔", " <-> "),
    ("⊕", " ^ "),
    ("↑", " @ "),
    ("↓", " # "),
    ("{", "("),
    ("}", ")"),
];

/// Tokens whose presence switches the parser into LaTeX/Unicode mode.
const DETECT: &[&str] = &[
    "\\land",
    "\\lor",
    "\\lnot",
    "\\vee",
    "\\wedge",
    "\\neg",
    "\\overline",
    "\\leftrightarrow",
    "\\oplus",
    "∧",
    "∨",
    "¬",
    "↔",
    "⊕",
    "↑",
    "↓",
];

pub fn looks_like_latex(text: &str) -> bool {
    DETECT.iter().any(|tok| text.contains(tok))
}

pub fn normalize(text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in REPLACEMENTS {
        out = out.replace(from, to);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection() {
        assert!(looks_like_latex("A \\land B"));
        assert!(looks_like_latex("A ∨ ¬B"));
        assert!(!looks_like_latex("A * !B"));
    }

    #[test]
    fn test_normalize_operators() {
        assert_eq!(normalize("A \\land B").trim(), "A  *  B".trim());
        assert!(normalize("\\lnot A").contains('!'));
        assert!(normalize("A ↔ B").contains("<->"));
    }

    #[test]
    fn test_overline_becomes_negated_group() {
        let n = normalize("\\overline{A \\lor B}");
        let squeezed: String = n.split_whitespace().collect();
        assert_eq!(squeezed, "!(A+B)");
    }

    #[test]
    fn test_leftrightarrow_not_eaten_by_left() {
        let n = normalize("A \\leftrightarrow B");
        assert!(n.contains("<->"));
    }
}
