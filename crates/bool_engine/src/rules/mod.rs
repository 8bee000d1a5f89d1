//! The rule library, one module per law family. Every rule is a local
//! pattern match on a single node; the engine walks the tree and applies
//! rules at any depth.

pub mod absorption;
pub mod constants;
pub mod consensus;
pub mod contradiction;
pub mod demorgan;
pub mod distributive;
pub mod idempotence;
pub mod negation;
