//! Failures of the table-driven parser and of the structures it reads.

use thiserror::Error;

use super::types::{Action, ProductionId, Symbol};

/// Why a parse was abandoned. No partial tree survives any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Neither shift, goto nor reduce applies at the cursor.
    #[error("no action at symbol #{position} ({name}) in state {state}")]
    NoAction {
        /// 1-based position in the input the caller passed.
        position: usize,
        symbol: Symbol,
        name: String,
        state: usize,
    },

    /// The termination test held but the node stack did not collapse
    /// to a single root.
    #[error("input did not reduce to a single node, left on the stack: {}", .residual.join(" "))]
    Incomplete { residual: Vec<String> },

    #[error("the table has no final state")]
    NoFinalState,

    /// The start symbol is read from the reduction a final state
    /// performs on end of input.
    #[error("final state {state} does not reduce on end of input")]
    NoStartSymbol { state: usize },

    #[error("production {production} needs {needed} stack entries, only {available} left")]
    StackUnderflow {
        production: ProductionId,
        needed: usize,
        available: usize,
    },

    #[error("the table refers to unknown production {0}")]
    UnknownProduction(ProductionId),
}

/// Attempt to overwrite a table entry with a different action.
/// The table has no symbol names, callers that do should print `symbol` themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("conflict in state {state}: {existing} vs {attempted}")]
pub struct TableError {
    pub state: usize,
    pub symbol: Symbol,
    pub existing: Action,
    pub attempted: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("\"{0}\" is already interned as the other kind of symbol")]
    KindClash(String),

    #[error("unknown symbol \"{0}\"")]
    UnknownSymbol(String),

    #[error("the left side of a production must be a non-terminal, got \"{0}\"")]
    TerminalLeftSide(String),
}
