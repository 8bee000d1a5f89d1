use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("expression has {count} variables, above the {max}-variable ceiling")]
    TooManyVariables { count: usize, max: usize },
    #[error("unbound variable '{0}' during evaluation")]
    UnboundVariable(String),
}
