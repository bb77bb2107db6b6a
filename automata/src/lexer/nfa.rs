
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use crate::ids::IdGenerator;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StateId(usize);

impl StateId {
    pub fn index(self) -> usize {
        self.0
    }
}

pub type TransMap = BTreeMap<String, BTreeSet<StateId>>;

#[derive(Debug)]
pub(super) struct NfaState {
    serial: String,
    accepting: bool,
    trans: TransMap,
}

/*
 * A piece of automaton with a single entry and a single exit,
 * as produced for one lexical pattern.
 */
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Fragment {
    pub start: StateId,
    pub end: StateId,
}

/*
 * The states live in an arena and refer to each other by index,
 * so cycles (stars, back-edges) need no shared ownership.
 */
pub struct Nfa {
    ids: Arc<dyn IdGenerator>,
    states: Vec<NfaState>,
}

impl fmt::Debug for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nfa").field("states", &self.states).finish()
    }
}

impl Nfa {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Nfa {
        Nfa {
            ids,
            states: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn add_state(&mut self) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(NfaState {
            serial: self.ids.next_id(),
            accepting: false,
            trans: TransMap::new(),
        });
        id
    }

    pub fn add_transition(&mut self, from: StateId, label: &str, to: StateId) {
        self.states[from.0].trans
            .entry(label.to_string())
            .or_insert_with(BTreeSet::new)
            .insert(to);
    }

    pub fn set_accepting(&mut self, state: StateId, accepting: bool) {
        self.states[state.0].accepting = accepting;
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.states[state.0].accepting
    }

    pub fn serial(&self, state: StateId) -> &str {
        &self.states[state.0].serial
    }

    pub fn transitions(&self, state: StateId) -> &TransMap {
        &self.states[state.0].trans
    }

    /*
     * Builds a chain recognizing exactly `text`, one transition
     * per character. The empty literal is a single accepting state.
     */
    pub fn literal(&mut self, text: &str) -> Fragment {
        let start = self.add_state();
        let mut buf = [0; 4];

        let end = text.chars().fold(start, |prev, c| {
            let next = self.add_state();
            self.add_transition(prev, c.encode_utf8(&mut buf), next);
            next
        });

        self.set_accepting(end, true);
        Fragment {start, end}
    }

    /*
     * Depth-first walk from `start`. `on_edge` sees every
     * (source, label, target) triple of every visited state;
     * each state is expanded at most once.
     */
    pub(super) fn visit<F>(&self, start: StateId, mut on_edge: F) -> BTreeSet<StateId>
        where F: FnMut(StateId, &str, StateId)
    {
        let mut visited = BTreeSet::new();
        let mut pending = vec!(start);
        visited.insert(start);

        while let Some(q) = pending.pop() {
            for (label, targets) in self.transitions(q).iter() {
                for t in targets.iter() {
                    on_edge(q, label, *t);
                    if visited.insert(*t) {
                        pending.push(*t);
                    }
                }
            }
        }

        visited
    }

    // Every state reachable from `start`, itself included.
    pub fn reachable_states(&self, start: StateId) -> BTreeSet<StateId> {
        let reached = self.visit(start, |_, _, _| ());
        log::debug!("{} states reachable from {}", reached.len(), self.serial(start));
        reached
    }
}
