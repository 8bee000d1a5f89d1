use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    EmptyInput,
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("invalid variable '{0}': variables are single uppercase letters A-Z")]
    InvalidVariable(char),
    #[error("reserved token '{0}' is not a valid expression")]
    ReservedToken(String),
    #[error("unconsumed input: {0}")]
    UnconsumedInput(String),
    #[error("syntax error near: {0}")]
    Syntax(String),
}
