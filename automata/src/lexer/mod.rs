
mod nfa;
mod dot;

pub use nfa::{Nfa, StateId, Fragment, TransMap};
pub use dot::edge_line;
