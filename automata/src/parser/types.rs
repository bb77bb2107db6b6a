
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Symbol {
    // Terminal
    T(usize),
    // Non-terminal
    N(usize),
}

impl Symbol {
    pub const EOF: Symbol = Symbol::T(0);
    pub const EPSILON: Symbol = Symbol::T(1);

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::T(_))
    }

    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Symbol::N(_))
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ProductionId(pub usize);

impl fmt::Display for ProductionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Production {
   pub left: Symbol,
   pub right: Vec<Symbol>,
}

impl Production {
    pub fn arity(&self) -> usize {
        self.right.len()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Shift(usize),
    // Same move as a shift, on a non-terminal a reduction
    // just wrote at the cursor : no leaf is built.
    Goto(usize),
    Reduce(ProductionId),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Shift(q) => write!(f, "s{}", q),
            Action::Goto(q) => write!(f, "g{}", q),
            Action::Reduce(p) => write!(f, "r{}", p),
        }
    }
}
