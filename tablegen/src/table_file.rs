
use thiserror::Error;

use automata::parser::{ActionTable, Grammar, GrammarError, ProductionId, SymbolPool, TableError};

/*
 * Line oriented description of a grammar and of the action table
 * some external builder computed for it :
 *
 *   terminals a b
 *   nonterminals S X
 *   production X -> a b
 *   shift 0 a 1
 *   goto 0 X 3
 *   reduce 2 eof 0
 *   final 3
 *
 * Anything after '#' is ignored. Productions are numbered from 0 in
 * the order they appear.
 */
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("line {line}: {source}")]
    Grammar { line: usize, source: GrammarError },

    #[error("line {line}: {source} on \"{name}\"")]
    Table { line: usize, name: String, source: TableError },
}

#[derive(Debug)]
pub struct Loaded {
    pub grammar: Grammar,
    pub table: ActionTable,
}

fn syntax(line: usize, message: impl Into<String>) -> LoadError {
    LoadError::Syntax {line, message: message.into()}
}

fn conflict(line: usize, pool: &SymbolPool, source: TableError) -> LoadError {
    LoadError::Table {line, name: pool.name(source.symbol).to_string(), source}
}

fn number(line: usize, word: &str) -> Result<usize, LoadError> {
    word.parse().map_err(|_| syntax(line, format!("expected a number, got \"{}\"", word)))
}

pub fn load(src: &str) -> Result<Loaded, LoadError> {
    let mut grammar = Grammar::new(SymbolPool::new());
    let mut table = ActionTable::new();

    for (i, raw) in src.lines().enumerate() {
        let line = i + 1;
        let text = raw.split('#').next().unwrap_or("");
        let words: Vec<&str> = text.split_whitespace().collect();

        let (keyword, args) = match words.split_first() {
            Some((k, rest)) => (*k, rest),
            None => continue,
        };

        let grammar_err = |source| LoadError::Grammar {line, source};

        match keyword {
            "terminals" => for name in args {
                grammar.pool_mut().terminal(name).map_err(grammar_err)?;
            },
            "nonterminals" => for name in args {
                grammar.pool_mut().nonterminal(name).map_err(grammar_err)?;
            },
            "production" => match args {
                [left, "->", right @ ..] => {
                    let id = grammar.add_named(left, right).map_err(grammar_err)?;
                    log::debug!("production {}: {}", id, grammar.describe(id));
                },
                _ => return Err(syntax(line, "expected \"production <left> -> <right>...\"")),
            },
            "shift" | "goto" => match args {
                [state, symbol, target] => {
                    let symbol = grammar.pool().resolve(symbol).map_err(grammar_err)?;
                    table.set_shift_or_goto(number(line, state)?, symbol, number(line, target)?)
                        .map_err(|e| conflict(line, grammar.pool(), e))?;
                },
                _ => return Err(syntax(line, format!("expected \"{} <state> <symbol> <target>\"", keyword))),
            },
            "reduce" => match args {
                [state, symbol, production] => {
                    let symbol = grammar.pool().resolve(symbol).map_err(grammar_err)?;
                    let id = ProductionId(number(line, production)?);
                    if grammar.production(id).is_none() {
                        return Err(syntax(line, format!("unknown production {}", id)))
                    }
                    table.set_reduce(number(line, state)?, symbol, id)
                        .map_err(|e| conflict(line, grammar.pool(), e))?;
                },
                _ => return Err(syntax(line, "expected \"reduce <state> <symbol> <production>\"")),
            },
            "final" => for state in args {
                table.mark_final(number(line, state)?);
            },
            other => return Err(syntax(line, format!("unknown directive \"{}\"", other))),
        }
    }

    Ok(Loaded {grammar, table})
}
