use rstest::rstest;

use automata::parser::*;

/*
 * S -> L        (0)
 * L -> L c a    (1)
 * L -> a        (2)
 *
 *  state | a   c   eof | L
 *  0     | s1          | g2
 *  1     |     r2  r2  |
 *  2     |     s3  r0  |       final
 *  3     | s4          |
 *  4     |     r1  r1  |
 */
fn list_grammar() -> (Grammar, ActionTable) {
    let mut pool = SymbolPool::new();
    let a = pool.terminal("a").unwrap();
    let c = pool.terminal("c").unwrap();
    let s = pool.nonterminal("S").unwrap();
    let l = pool.nonterminal("L").unwrap();

    let mut g = Grammar::new(pool);
    let p0 = g.add_production(s, vec!(l)).unwrap();
    let p1 = g.add_production(l, vec!(l, c, a)).unwrap();
    let p2 = g.add_production(l, vec!(a)).unwrap();

    let mut t = ActionTable::new();
    t.set_shift_or_goto(0, a, 1).unwrap();
    t.set_shift_or_goto(0, l, 2).unwrap();
    t.set_reduce(1, c, p2).unwrap();
    t.set_reduce(1, Symbol::EOF, p2).unwrap();
    t.set_shift_or_goto(2, c, 3).unwrap();
    t.set_reduce(2, Symbol::EOF, p0).unwrap();
    t.set_shift_or_goto(3, a, 4).unwrap();
    t.set_reduce(4, c, p1).unwrap();
    t.set_reduce(4, Symbol::EOF, p1).unwrap();
    t.mark_final(2);

    (g, t)
}

fn tokens(g: &Grammar, names: &[&str]) -> Vec<Symbol> {
    names.iter().map(|n| g.pool().get(n).unwrap()).collect()
}

fn names(g: &Grammar, syms: Vec<Symbol>) -> Vec<String> {
    syms.into_iter().map(|s| g.pool().name(s).to_string()).collect()
}

/*
 * X -> a b  (0)
 * S -> X    (1)
 * 0 -a-> 1 -b-> 2, 2 reduces X on eof, 0 -X-> 3, 3 is final.
 */
#[test]
fn pair_reduces_to_its_nonterminal() {
    let mut pool = SymbolPool::new();
    let a = pool.terminal("a").unwrap();
    let b = pool.terminal("b").unwrap();
    let x = pool.nonterminal("X").unwrap();
    let s = pool.nonterminal("S").unwrap();
    let mut g = Grammar::new(pool);
    let pair = g.add_production(x, vec!(a, b)).unwrap();
    let top = g.add_production(s, vec!(x)).unwrap();

    let mut t = ActionTable::new();
    t.set_shift_or_goto(0, a, 1).unwrap();
    t.set_shift_or_goto(1, b, 2).unwrap();
    t.set_reduce(2, Symbol::EOF, pair).unwrap();
    t.set_shift_or_goto(0, x, 3).unwrap();
    t.set_reduce(3, Symbol::EOF, top).unwrap();
    t.mark_final(3);

    let tree = t.parse(&g, &[a, b]).unwrap();
    let root = tree.node(tree.root());
    assert_eq!(root.value(), s);

    let xn = tree.node(root.child(0).unwrap());
    assert_eq!(xn.value(), x);
    assert_eq!(xn.production(), Some(pair));
    assert_eq!(xn.children().len(), 2);
    assert_eq!(tree.node(xn.child(0).unwrap()).value(), a);
    assert_eq!(tree.node(xn.child(1).unwrap()).value(), b);
    assert!(tree.node(xn.child(0).unwrap()).is_leaf());
    assert!(tree.node(xn.child(1).unwrap()).is_leaf());
    assert_eq!(tree.render(g.pool()), "|S\n|-X\n|--a\n|--b\n");
}

#[rstest]
#[case(&["a"], "|S\n|-L\n|--a\n")]
#[case(&["a", "c", "a"], "|S\n|-L\n|--L\n|---a\n|--c\n|--a\n")]
#[case(&["a", "c", "a", "c", "a"], "|S\n|-L\n|--L\n|---L\n|----a\n|---c\n|---a\n|--c\n|--a\n")]
fn left_recursive_lists(#[case] input: &[&str], #[case] expected: &str) {
    let (g, t) = list_grammar();
    let tree = t.parse(&g, &tokens(&g, input)).unwrap();
    assert_eq!(tree.render(g.pool()), expected);
    assert_eq!(names(&g, tree.leaves()), input.to_vec());
}

#[rstest]
#[case(&["c"], 1, "c")]
#[case(&["a", "a"], 2, "a")]
#[case(&["a", "c", "c"], 3, "c")]
#[case(&["a", "c"], 3, "eof")]
#[case(&[], 1, "eof")]
fn lookup_miss_reports_position(#[case] input: &[&str], #[case] position: usize, #[case] symbol: &str) {
    let (g, t) = list_grammar();
    match t.parse(&g, &tokens(&g, input)) {
        Err(ParseError::NoAction {position: p, name, ..}) => {
            assert_eq!(p, position);
            assert_eq!(name, symbol);
        },
        other => panic!("expected a lookup miss, got {:?}", other),
    }
}

#[test]
fn every_reduction_has_the_production_arity() {
    let (g, t) = list_grammar();
    let tree = t.parse(&g, &tokens(&g, &["a", "c", "a", "c", "a", "c", "a"])).unwrap();

    let mut pending = vec!(tree.root());
    let mut internal = 0;
    while let Some(id) = pending.pop() {
        let node = tree.node(id);
        if let Some(p) = node.production() {
            let rule = g.production(p).unwrap();
            assert_eq!(node.children().len(), rule.arity());
            let values: Vec<_> = node.children().iter().map(|c| tree.node(*c).value()).collect();
            assert_eq!(values, rule.right);
            internal += 1;
        }
        pending.extend(node.children().iter().copied());
    }
    assert_eq!(internal, 5);
}

#[test]
fn reparsing_gives_the_same_tree() {
    let (g, t) = list_grammar();
    let input = tokens(&g, &["a", "c", "a"]);
    let first = t.parse(&g, &input).unwrap();
    let second = t.parse(&g, &input).unwrap();
    assert!(first.same_shape(&second));
    // The caller's tokens are left alone.
    assert_eq!(input, tokens(&g, &["a", "c", "a"]));
}

#[test]
fn leftover_nodes_are_reported() {
    // The start symbol already sits at the end of the input :
    // the loop stops with a and b still unreduced.
    let mut pool = SymbolPool::new();
    let a = pool.terminal("a").unwrap();
    let b = pool.terminal("b").unwrap();
    let s = pool.nonterminal("S").unwrap();
    let mut g = Grammar::new(pool);
    let p = g.add_production(s, vec!(a, b)).unwrap();

    let mut t = ActionTable::new();
    t.set_shift_or_goto(0, a, 1).unwrap();
    t.set_shift_or_goto(1, b, 2).unwrap();
    t.set_reduce(3, Symbol::EOF, p).unwrap();
    t.mark_final(3);

    assert_eq!(
        t.parse(&g, &[a, b, s]).unwrap_err(),
        ParseError::Incomplete {residual: vec!("a".to_string(), "b".to_string())},
    );
}

/*
 * S -> E a   (0)
 * E ->       (1)
 * The empty reduction happens before anything was read.
 */
#[test]
fn empty_production_at_the_start() {
    let mut pool = SymbolPool::new();
    let a = pool.terminal("a").unwrap();
    let s = pool.nonterminal("S").unwrap();
    let e = pool.nonterminal("E").unwrap();
    let mut g = Grammar::new(pool);
    let p0 = g.add_production(s, vec!(e, a)).unwrap();
    let p1 = g.add_production(e, vec!()).unwrap();

    let mut t = ActionTable::new();
    t.set_reduce(0, a, p1).unwrap();
    t.set_shift_or_goto(0, e, 1).unwrap();
    t.set_shift_or_goto(1, a, 2).unwrap();
    t.set_reduce(2, Symbol::EOF, p0).unwrap();
    t.mark_final(2);

    let tree = t.parse(&g, &[a]).unwrap();
    let root = tree.node(tree.root());
    let en = tree.node(root.child(0).unwrap());
    assert_eq!(en.value(), e);
    assert!(!en.is_leaf());
    assert!(en.children().is_empty());
    assert_eq!(tree.leaves(), vec!(a));
}

#[test]
fn table_without_final_state() {
    let (g, _) = list_grammar();
    let t = ActionTable::new();
    assert_eq!(t.parse(&g, &[]).unwrap_err(), ParseError::NoFinalState);
}

#[test]
fn final_state_must_reduce_on_eof() {
    let (g, mut t) = list_grammar();
    t.mark_final(0);
    assert_eq!(t.parse(&g, &[]).unwrap_err(), ParseError::NoStartSymbol {state: 0});
}

#[test]
fn reduction_deeper_than_the_stack() {
    let (g, _) = list_grammar();
    let a = g.pool().get("a").unwrap();
    let mut t = ActionTable::new();
    // L -> L c a with a single node on the stack.
    t.set_shift_or_goto(0, a, 1).unwrap();
    t.set_reduce(1, Symbol::EOF, ProductionId(1)).unwrap();
    t.set_reduce(2, Symbol::EOF, ProductionId(0)).unwrap();
    t.mark_final(2);

    assert_eq!(
        t.parse(&g, &[a]).unwrap_err(),
        ParseError::StackUnderflow {production: ProductionId(1), needed: 3, available: 1},
    );
}

/*
 * X -> a b  (0)
 * Reduced straight from the final state, so X is the start symbol.
 */
#[test]
fn pair_reduces_directly_to_the_start_symbol() {
    let mut pool = SymbolPool::new();
    let a = pool.terminal("a").unwrap();
    let b = pool.terminal("b").unwrap();
    let x = pool.nonterminal("X").unwrap();
    let mut g = Grammar::new(pool);
    let pair = g.add_production(x, vec!(a, b)).unwrap();

    let mut t = ActionTable::new();
    t.set_shift_or_goto(0, a, 1).unwrap();
    t.set_shift_or_goto(1, b, 2).unwrap();
    t.set_reduce(2, Symbol::EOF, pair).unwrap();
    t.mark_final(2);

    let tree = t.parse(&g, &[a, b]).unwrap();
    let root = tree.node(tree.root());
    assert_eq!(root.value(), x);
    assert_eq!(root.production(), Some(pair));
    assert_eq!(root.parent(), None);
    let values: Vec<_> = root.children().iter().map(|c| tree.node(*c).value()).collect();
    assert_eq!(values, vec!(a, b));
    assert!(root.children().iter().all(|c| tree.node(*c).is_leaf()));
    assert_eq!(tree.render(g.pool()), "|X\n|-a\n|-b\n");
}

/*
 * S -> a E b   (0)
 * E ->         (1)
 * The empty reduction overwrites the slot of the a already shifted.
 */
#[test]
fn empty_production_after_a_shift() {
    let mut pool = SymbolPool::new();
    let a = pool.terminal("a").unwrap();
    let b = pool.terminal("b").unwrap();
    let s = pool.nonterminal("S").unwrap();
    let e = pool.nonterminal("E").unwrap();
    let mut g = Grammar::new(pool);
    let p0 = g.add_production(s, vec!(a, e, b)).unwrap();
    let p1 = g.add_production(e, vec!()).unwrap();

    let mut t = ActionTable::new();
    t.set_shift_or_goto(0, a, 1).unwrap();
    t.set_reduce(1, b, p1).unwrap();
    t.set_shift_or_goto(1, e, 2).unwrap();
    t.set_shift_or_goto(2, b, 3).unwrap();
    t.set_reduce(3, Symbol::EOF, p0).unwrap();
    t.mark_final(3);

    let tree = t.parse(&g, &[a, b]).unwrap();
    assert_eq!(tree.render(g.pool()), "|S\n|-a\n|-E\n|-b\n");
    let en = tree.node(tree.node(tree.root()).child(1).unwrap());
    assert_eq!(en.value(), e);
    assert!(!en.is_leaf());
    assert!(en.children().is_empty());
    assert_eq!(tree.leaves(), vec!(a, b));
}

/*
 * S -> E a b   (0)
 * E ->         (1)
 * E is put in front of the input, positions still count from the
 * caller's first symbol.
 */
#[test]
fn empty_production_at_the_start_keeps_positions() {
    let mut pool = SymbolPool::new();
    let a = pool.terminal("a").unwrap();
    let b = pool.terminal("b").unwrap();
    let c = pool.terminal("c").unwrap();
    let s = pool.nonterminal("S").unwrap();
    let e = pool.nonterminal("E").unwrap();
    let mut g = Grammar::new(pool);
    let p0 = g.add_production(s, vec!(e, a, b)).unwrap();
    let p1 = g.add_production(e, vec!()).unwrap();

    let mut t = ActionTable::new();
    t.set_reduce(0, a, p1).unwrap();
    t.set_shift_or_goto(0, e, 1).unwrap();
    t.set_shift_or_goto(1, a, 2).unwrap();
    t.set_shift_or_goto(2, b, 3).unwrap();
    t.set_reduce(3, Symbol::EOF, p0).unwrap();
    t.mark_final(3);

    assert_eq!(
        t.parse(&g, &[a, c]).unwrap_err(),
        ParseError::NoAction {position: 2, symbol: c, name: "c".to_string(), state: 2},
    );
    match t.parse(&g, &[a, b, b]).unwrap_err() {
        ParseError::NoAction {position, ..} => assert_eq!(position, 3),
        other => panic!("expected a lookup miss, got {:?}", other),
    }
    assert!(t.parse(&g, &[a, b]).is_ok());
}
