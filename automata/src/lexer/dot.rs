
use std::collections::BTreeSet;
use std::fmt::Write;

use super::nfa::{Nfa, StateId};

pub fn edge_line(src: &str, label: &str, dst: &str) -> String {
    format!("{} -> {}[label=\"{}\"]", src, dst, label)
}

impl Nfa {
    /*
     * One line per (source, label, target) triple reachable from
     * `start`. States are expanded once, so an edge met again
     * through another path is not emitted twice.
     */
    pub fn serialize_edges(&self, start: StateId) -> BTreeSet<String> {
        let mut lines = BTreeSet::new();
        self.visit(start, |q, label, t| {
            lines.insert(edge_line(self.serial(q), label, self.serial(t)));
        });
        log::debug!("{} edges reachable from {}", lines.len(), self.serial(start));
        lines
    }

    pub fn to_dot(&self, start: StateId) -> String {
        let mut out = String::new();
        // Writing into a String can't fail.
        let _ = writeln!(out, "digraph nfa {{");
        let _ = writeln!(out, "    rankdir=LR;");

        for q in self.reachable_states(start) {
            let shape = if self.is_accepting(q) {"doublecircle"} else {"circle"};
            let _ = writeln!(out, "    {} [shape={}];", self.serial(q), shape);
        }
        for line in self.serialize_edges(start) {
            let _ = writeln!(out, "    {};", line);
        }

        out.push_str("}\n");
        out
    }
}
