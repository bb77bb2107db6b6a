
mod types;
mod grammar;
mod table;
mod tree;
mod pda;
mod error;

pub use types::{Symbol, Production, ProductionId, Action};
pub use grammar::{SymbolPool, Grammar};
pub use table::ActionTable;
pub use tree::{ParseTree, Node, NodeId, TreeVisitor};
pub use pda::PDA;
pub use error::{ParseError, TableError, GrammarError};
