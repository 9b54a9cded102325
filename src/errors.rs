//! Error types for tree construction.
//!
//! Query operations on an existing tree are total; the only fallible
//! surface is building a tree from a level-order description.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("level-order description is empty or starts with an absent root")]
    MissingRoot,

    #[error("value at position {index} has no parent slot to attach to")]
    OrphanValue { index: usize },
}

pub type TreeResult<T> = Result<T, TreeError>;
