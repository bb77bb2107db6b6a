
use super::error::ParseError;
use super::grammar::Grammar;
use super::table::ActionTable;
use super::tree::{Arena, NodeId, ParseTree};
use super::types::*;

/*
 * One run of the shift/reduce automaton. Reductions write their
 * left-hand side back into the token buffer, at the position just
 * before the cursor, and step the cursor back onto it : the next
 * lookup then reads the non-terminal like any other input symbol
 * (hence the gotos).
 */
pub struct PDA<'a> {
    grammar: &'a Grammar,
    table: &'a ActionTable,
    states: Vec<usize>,
    nodes: Vec<NodeId>,
    arena: Arena,
    tokens: Vec<Symbol>,
    pos: usize,
    // Symbols inserted in front of the input by empty reductions.
    prepended: usize,
}

impl<'a> PDA<'a> {
    pub fn new(grammar: &'a Grammar, table: &'a ActionTable, tokens: &[Symbol]) -> PDA<'a> {
        PDA {
            grammar,
            table,
            states: vec!(0), // The first state is 0.
            nodes: Vec::new(),
            arena: Arena::default(),
            tokens: tokens.to_vec(),
            pos: 0,
            prepended: 0,
        }
    }

    /*
     * There is no explicit accept action : the start symbol is the
     * left side of whatever a final state reduces on eof, and the
     * parse is over once it is the last symbol of the buffer.
     */
    fn start_symbol(&self) -> Result<Symbol, ParseError> {
        let state = *self.table.final_states().iter().next().ok_or(ParseError::NoFinalState)?;

        match self.table.action(state, Symbol::EOF) {
            Some(Action::Reduce(p)) => self.grammar.production(p)
                .map(|p| p.left)
                .ok_or(ParseError::UnknownProduction(p)),
            _ => Err(ParseError::NoStartSymbol {state}),
        }
    }

    fn lookahead(&self) -> Symbol {
        self.tokens.get(self.pos).copied().unwrap_or(Symbol::EOF)
    }

    // 1-based position of the cursor in the caller's input.
    fn position(&self) -> usize {
        (self.pos + 1).saturating_sub(self.prepended).max(1)
    }

    fn done(&self, start: Symbol) -> bool {
        self.pos + 1 == self.tokens.len() && self.tokens[self.pos] == start
    }

    fn reduce(&mut self, id: ProductionId) -> Result<(), ParseError> {
        let grammar = self.grammar;
        let rule = grammar.production(id).ok_or(ParseError::UnknownProduction(id))?;
        let k = rule.arity();

        // The bottom state is never popped.
        let available = self.nodes.len().min(self.states.len() - 1);
        if k > available {
            return Err(ParseError::StackUnderflow {production: id, needed: k, available})
        }

        self.states.truncate(self.states.len() - k);
        let children = self.nodes.split_off(self.nodes.len() - k);
        let node = self.arena.internal(rule.left, id, children);
        self.nodes.push(node);

        // An empty production at the very start has nothing behind
        // the cursor to overwrite : make room for its symbol.
        if self.pos == 0 {
            self.tokens.insert(0, rule.left);
            self.prepended += 1;
        } else {
            self.pos -= 1;
            if self.pos >= self.tokens.len() {
                self.tokens.resize(self.pos + 1, Symbol::EOF);
            }
            self.tokens[self.pos] = rule.left;
        }

        log::trace!("reduce by {} -> cursor {}", grammar.describe(id), self.pos);
        Ok(())
    }

    pub fn parse(mut self) -> Result<ParseTree, ParseError> {
        let start = self.start_symbol()?;
        let grammar = self.grammar;
        let pool = grammar.pool();
        log::debug!("parsing {} symbols towards {}", self.tokens.len(), pool.name(start));

        while !self.done(start) {
            // The stack starts with a state and only reductions pop,
            // never past the bottom.
            let state = self.states.last().copied().unwrap_or(0);
            let symbol = self.lookahead();

            let action = match self.table.action(state, symbol) {
                Some(action) => action,
                None => return Err(ParseError::NoAction {
                    position: self.position(),
                    symbol,
                    name: pool.name(symbol).to_string(),
                    state,
                }),
            };
            log::trace!("state {}, #{} {} : {}", state, self.position(), pool.name(symbol), action);

            match action {
                Action::Shift(q) => {
                    let leaf = self.arena.leaf(symbol);
                    self.nodes.push(leaf);
                    self.states.push(q);
                    self.pos += 1;
                },
                Action::Goto(q) => {
                    self.states.push(q);
                    self.pos += 1;
                },
                Action::Reduce(p) => self.reduce(p)?,
            }
        }

        if self.nodes.len() != 1 {
            let residual = self.nodes.iter()
                .map(|n| pool.name(self.arena.get(*n).value()).to_string())
                .collect();
            return Err(ParseError::Incomplete {residual})
        }

        let root = self.nodes[0];
        let tree = self.arena.into_tree(root);
        log::debug!("parsed into {} nodes", tree.len());
        Ok(tree)
    }
}

impl ActionTable {
    /*
     * Runs the automaton on a private copy of `tokens`; the table
     * itself is only read.
     */
    pub fn parse(&self, grammar: &Grammar, tokens: &[Symbol]) -> Result<ParseTree, ParseError> {
        PDA::new(grammar, self, tokens).parse()
    }
}
