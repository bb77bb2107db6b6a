
use std::collections::BTreeMap;

use super::error::GrammarError;
use super::types::*;

/*
 * Interns terminal and non-terminal names. Symbols are plain
 * indices, so two symbols are equal iff they were interned
 * from the same name.
 */
#[derive(Clone, Debug)]
pub struct SymbolPool {
    terms: Vec<String>,
    nterms: Vec<String>,
    by_name: BTreeMap<String, Symbol>,
}

impl Default for SymbolPool {
    fn default() -> Self {
        SymbolPool::new()
    }
}

impl SymbolPool {
    pub fn new() -> SymbolPool {
        let mut pool = SymbolPool {
            terms: Vec::new(),
            nterms: Vec::new(),
            by_name: BTreeMap::new(),
        };
        // Both reserved names are fresh, this can't clash.
        let _ = pool.terminal("eof");
        let _ = pool.terminal("null");
        pool
    }

    pub fn terminal(&mut self, name: &str) -> Result<Symbol, GrammarError> {
        match self.by_name.get(name) {
            Some(s @ Symbol::T(_)) => Ok(*s),
            Some(Symbol::N(_)) => Err(GrammarError::KindClash(name.to_string())),
            None => {
                let s = Symbol::T(self.terms.len());
                self.terms.push(name.to_string());
                self.by_name.insert(name.to_string(), s);
                Ok(s)
            }
        }
    }

    pub fn nonterminal(&mut self, name: &str) -> Result<Symbol, GrammarError> {
        match self.by_name.get(name) {
            Some(s @ Symbol::N(_)) => Ok(*s),
            Some(Symbol::T(_)) => Err(GrammarError::KindClash(name.to_string())),
            None => {
                let s = Symbol::N(self.nterms.len());
                self.nterms.push(name.to_string());
                self.by_name.insert(name.to_string(), s);
                Ok(s)
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }

    pub fn resolve(&self, name: &str) -> Result<Symbol, GrammarError> {
        self.get(name).ok_or_else(|| GrammarError::UnknownSymbol(name.to_string()))
    }

    pub fn name(&self, sym: Symbol) -> &str {
        let name = match sym {
            Symbol::T(k) => self.terms.get(k),
            Symbol::N(k) => self.nterms.get(k),
        };
        name.map(|s| s.as_str()).unwrap_or("?")
    }
}

/*
 * The productions a table refers to, numbered in insertion
 * order. Tables built elsewhere key their reductions on these
 * numbers.
 */
#[derive(Clone, Debug, Default)]
pub struct Grammar {
    pool: SymbolPool,
    rules: Vec<Production>,
}

impl Grammar {
    pub fn new(pool: SymbolPool) -> Grammar {
        Grammar {
            pool,
            rules: Vec::new(),
        }
    }

    pub fn pool(&self) -> &SymbolPool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut SymbolPool {
        &mut self.pool
    }

    pub fn add_production(&mut self, left: Symbol, right: Vec<Symbol>) -> Result<ProductionId, GrammarError> {
        if !left.is_nonterminal() {
            return Err(GrammarError::TerminalLeftSide(self.pool.name(left).to_string()))
        }
        let id = ProductionId(self.rules.len());
        self.rules.push(Production {left, right});
        Ok(id)
    }

    /*
     * Same as `add_production`, from a `left -> right...` pair of
     * names (all of them must already be interned).
     */
    pub fn add_named(&mut self, left: &str, right: &[&str]) -> Result<ProductionId, GrammarError> {
        let left = self.pool.resolve(left)?;
        let right = right.iter()
            .map(|name| self.pool.resolve(name))
            .collect::<Result<Vec<_>, _>>()?;
        self.add_production(left, right)
    }

    pub fn production(&self, id: ProductionId) -> Option<&Production> {
        self.rules.get(id.0)
    }

    pub fn productions(&self) -> &[Production] {
        &self.rules
    }

    pub fn describe(&self, id: ProductionId) -> String {
        match self.production(id) {
            Some(p) => {
                let right = p.right.iter()
                    .map(|s| self.pool.name(*s))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{} -> {}", self.pool.name(p.left), right)
            },
            None => format!("<production {}>", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_terminals() {
        let pool = SymbolPool::new();
        assert_eq!(pool.get("eof"), Some(Symbol::EOF));
        assert_eq!(pool.get("null"), Some(Symbol::EPSILON));
        assert_eq!(pool.name(Symbol::EOF), "eof");
    }

    #[test]
    fn interning_is_idempotent() {
        let mut pool = SymbolPool::new();
        let a = pool.terminal("a").unwrap();
        assert_eq!(pool.terminal("a").unwrap(), a);
        let x = pool.nonterminal("X").unwrap();
        assert_eq!(pool.nonterminal("X").unwrap(), x);
        assert_ne!(a, x);
    }

    #[test]
    fn kinds_do_not_mix() {
        let mut pool = SymbolPool::new();
        pool.terminal("a").unwrap();
        assert_eq!(pool.nonterminal("a"), Err(GrammarError::KindClash("a".to_string())));
    }

    #[test]
    fn productions_are_numbered() {
        let mut pool = SymbolPool::new();
        pool.terminal("a").unwrap();
        pool.nonterminal("X").unwrap();
        let mut g = Grammar::new(pool);
        assert_eq!(g.add_named("X", &["a", "a"]).unwrap(), ProductionId(0));
        assert_eq!(g.add_named("X", &[]).unwrap(), ProductionId(1));
        assert_eq!(g.describe(ProductionId(0)), "X -> a a");
        assert_eq!(g.production(ProductionId(0)).unwrap().arity(), 2);
    }

    #[test]
    fn terminal_cannot_be_reduced_to() {
        let mut pool = SymbolPool::new();
        pool.terminal("a").unwrap();
        let mut g = Grammar::new(pool);
        assert!(matches!(g.add_named("a", &["a"]), Err(GrammarError::TerminalLeftSide(_))));
        assert!(matches!(g.add_named("Y", &[]), Err(GrammarError::UnknownSymbol(_))));
    }
}
