
mod logger;
mod table_file;

use std::fs;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Arg, App, ArgMatches, SubCommand};

use automata::ids::SerialIds;
use automata::lexer::Nfa;
use automata::parser::{ProductionId, Symbol, SymbolPool};

use table_file::{load, Loaded};

fn read_file(name: &str) -> Result<String> {
    fs::read_to_string(name).with_context(|| format!("Couldn't read {}", name))
}

fn load_file(name: &str) -> Result<Loaded> {
    let src = read_file(name)?;
    load(&src).with_context(|| format!("In {}", name))
}

/*
 * One literal chain per keyword, all hanging from a common
 * start state through empty transitions.
 */
fn nfa(words: &[&str]) -> Result<()> {
    let mut g = Nfa::new(Arc::new(SerialIds::new()));
    let epsilon = SymbolPool::new().name(Symbol::EPSILON).to_string();
    let start = g.add_state();

    for word in words {
        let frag = g.literal(word);
        g.add_transition(start, &epsilon, frag.start);
    }

    print!("{}", g.to_dot(start));
    Ok(())
}

fn table(file_name: &str) -> Result<()> {
    let Loaded {grammar, table} = load_file(file_name)?;
    for i in 0..grammar.productions().len() {
        println!("{}: {}", i, grammar.describe(ProductionId(i)));
    }
    println!();
    print!("{}", table.render(grammar.pool()));
    Ok(())
}

fn parse(file_name: &str, input: &[&str]) -> Result<()> {
    let Loaded {grammar, table} = load_file(file_name)?;
    let tokens = input.iter()
        .map(|name| grammar.pool().resolve(name))
        .collect::<Result<Vec<_>, _>>()?;

    let tree = table.parse(&grammar, &tokens)?;
    print!("{}", tree.render(grammar.pool()));
    Ok(())
}

fn verbosity(matches: &ArgMatches) -> u64 {
    let top = matches.occurrences_of("verbose");
    let sub = matches.subcommand().1.map(|m| m.occurrences_of("verbose")).unwrap_or(0);
    top.max(sub)
}

fn main() -> Result<()> {
    let verbose = Arg::with_name("verbose")
        .short("v")
        .long("verbose")
        .multiple(true)
        .global(true)
        .help("Logs more (repeat for debug and trace output)");

    let matches = App::new("tablegen")
        .version("0.1")
        .author("thejohncrafter")
        .about("Inspects lexer automata and runs table-driven parsers")
        .arg(verbose)
        .subcommand(SubCommand::with_name("nfa")
            .about("Prints the automaton recognizing the given keywords, as graphviz")
            .arg(Arg::with_name("words")
                .help("The keywords")
                .required(true)
                .multiple(true)
                .index(1)))
        .subcommand(SubCommand::with_name("table")
            .about("Prints the productions and the action table of a table file")
            .arg(Arg::with_name("input")
                .help("The table file")
                .required(true)
                .index(1)))
        .subcommand(SubCommand::with_name("parse")
            .about("Parses a sequence of token names with a table file")
            .arg(Arg::with_name("input")
                .help("The table file")
                .required(true)
                .index(1))
            .arg(Arg::with_name("tokens")
                .help("Token names, eof is implied")
                .multiple(true)
                .index(2)))
        .get_matches();

    logger::init(verbosity(&matches));

    match matches.subcommand() {
        ("nfa", Some(matches)) => {
            let words: Vec<&str> = matches.values_of("words").map(|v| v.collect()).unwrap_or_default();
            nfa(&words)
        },
        ("table", Some(matches)) => {
            let file_name = matches.value_of("input").ok_or_else(|| anyhow!("Missing table file"))?;
            table(file_name)
        },
        ("parse", Some(matches)) => {
            let file_name = matches.value_of("input").ok_or_else(|| anyhow!("Missing table file"))?;
            let tokens: Vec<&str> = matches.values_of("tokens").map(|v| v.collect()).unwrap_or_default();
            parse(file_name, &tokens)
        },
        _ => Err(anyhow!("Expected a subcommand, see --help")),
    }
}
