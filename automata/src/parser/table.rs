
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use super::error::TableError;
use super::grammar::SymbolPool;
use super::types::*;

/*
 * Sparse action table : state -> symbol -> action, plus the
 * states at which end of input may be accepted. Filled once
 * by a table builder, then only read.
 */
#[derive(Clone, Debug, Default)]
pub struct ActionTable {
    rows: BTreeMap<usize, BTreeMap<Symbol, Action>>,
    finals: BTreeSet<usize>,
}

impl ActionTable {
    pub fn new() -> ActionTable {
        ActionTable::default()
    }

    fn set(&mut self, state: usize, symbol: Symbol, action: Action) -> Result<(), TableError> {
        let row = self.rows.entry(state).or_insert_with(BTreeMap::new);
        if let Some(existing) = row.get(&symbol).copied() {
            if existing != action {
                return Err(TableError {state, symbol, existing, attempted: action})
            }
        }
        row.insert(symbol, action);
        Ok(())
    }

    /*
     * On a non-terminal this is a goto, otherwise a shift :
     * the engine looks both up the same way and only differs
     * in whether it builds a leaf.
     */
    pub fn set_shift_or_goto(&mut self, state: usize, symbol: Symbol, target: usize) -> Result<(), TableError> {
        let action = match symbol {
            Symbol::N(_) => Action::Goto(target),
            Symbol::T(_) => Action::Shift(target),
        };
        self.set(state, symbol, action)
    }

    pub fn set_reduce(&mut self, state: usize, symbol: Symbol, production: ProductionId) -> Result<(), TableError> {
        self.set(state, symbol, Action::Reduce(production))
    }

    pub fn mark_final(&mut self, state: usize) {
        self.finals.insert(state);
    }

    pub fn final_states(&self) -> &BTreeSet<usize> {
        &self.finals
    }

    pub fn action(&self, state: usize, symbol: Symbol) -> Option<Action> {
        self.rows.get(&state).and_then(|row| row.get(&symbol)).copied()
    }

    // Every symbol that has an entry in some row.
    pub fn symbols(&self) -> BTreeSet<Symbol> {
        self.rows.values().flat_map(|row| row.keys().copied()).collect()
    }

    /*
     * Tab separated matrix : a header with the symbol names,
     * then one line per state. The eof column of a final state
     * reads "acc".
     */
    pub fn render(&self, pool: &SymbolPool) -> String {
        let symbols = self.symbols();
        let mut out = String::new();

        for s in symbols.iter() {
            out.push('\t');
            out.push_str(pool.name(*s));
        }
        out.push('\n');

        for (state, row) in self.rows.iter() {
            let _ = write!(out, "{}", state);
            for s in symbols.iter() {
                out.push('\t');
                if let Some(action) = row.get(s) {
                    if self.finals.contains(state) && *s == Symbol::EOF {
                        out.push_str("acc");
                    } else {
                        let _ = write!(out, "{}", action);
                    }
                }
            }
            out.push('\n');
        }

        out
    }
}
