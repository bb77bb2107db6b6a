
use std::fmt::Write;

use super::grammar::SymbolPool;
use super::types::{ProductionId, Symbol};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
pub struct Node {
    value: Symbol,
    // None for the leaves built by shifts.
    children: Option<Vec<NodeId>>,
    parent: Option<NodeId>,
    production: Option<ProductionId>,
}

impl Node {
    pub fn value(&self) -> Symbol {
        self.value
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn children(&self) -> &[NodeId] {
        self.children.as_deref().unwrap_or(&[])
    }

    // None when `index` is past the production's arity.
    pub fn child(&self, index: usize) -> Option<NodeId> {
        self.children().get(index).copied()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    // The production that built an internal node.
    pub fn production(&self) -> Option<ProductionId> {
        self.production
    }
}

/*
 * Nodes are stored in an arena owned by the tree; parents and
 * children refer to each other by index.
 */
#[derive(Clone, Debug, Default)]
pub(super) struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn leaf(&mut self, value: Symbol) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            children: None,
            parent: None,
            production: None,
        });
        id
    }

    pub fn internal(&mut self, value: Symbol, production: ProductionId, children: Vec<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        children.iter().for_each(|c| self.nodes[c.0].parent = Some(id));
        self.nodes.push(Node {
            value,
            children: Some(children),
            parent: None,
            production: Some(production),
        });
        id
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn into_tree(self, root: NodeId) -> ParseTree {
        ParseTree {nodes: self.nodes, root}
    }
}

/*
 * Callbacks for a post-parse walk. Only internal nodes are
 * visited : `enter` before the node's non-terminal children,
 * `leave` after them.
 */
pub trait TreeVisitor {
    type Error;

    fn enter(&mut self, _tree: &ParseTree, _node: NodeId) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave(&mut self, _tree: &ParseTree, _node: NodeId) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct ParseTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl ParseTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // Leaf values, left to right.
    pub fn leaves(&self) -> Vec<Symbol> {
        let mut out = Vec::new();
        let mut pending = vec!(self.root);

        while let Some(id) = pending.pop() {
            let node = self.node(id);
            if node.is_leaf() {
                out.push(node.value);
            } else {
                pending.extend(node.children().iter().rev());
            }
        }

        out
    }

    /*
     * Same shape and same values. Node numbering may differ.
     */
    pub fn same_shape(&self, other: &ParseTree) -> bool {
        let mut pending = vec!((self.root, other.root));

        while let Some((a, b)) = pending.pop() {
            let (a, b) = (self.node(a), other.node(b));
            if a.value != b.value || a.is_leaf() != b.is_leaf() || a.children().len() != b.children().len() {
                return false
            }
            pending.extend(a.children().iter().copied().zip(b.children().iter().copied()));
        }

        true
    }

    pub fn walk<V: TreeVisitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        enum Step {
            Enter(NodeId),
            Leave(NodeId),
        }

        let mut pending = vec!(Step::Enter(self.root));

        while let Some(step) = pending.pop() {
            match step {
                Step::Enter(id) => {
                    let node = self.node(id);
                    if node.is_leaf() {
                        continue
                    }
                    visitor.enter(self, id)?;
                    pending.push(Step::Leave(id));
                    node.children().iter().rev()
                        .filter(|c| self.node(**c).value.is_nonterminal())
                        .for_each(|c| pending.push(Step::Enter(*c)));
                },
                Step::Leave(id) => visitor.leave(self, id)?,
            }
        }

        Ok(())
    }

    /*
     * One line per node, depth first :
     *   |X
     *   |-a
     * Names starting with '_' are synthesized, the marker is dropped.
     * Other names are printed as they are, with no trailing "'".
     */
    pub fn render(&self, pool: &SymbolPool) -> String {
        let mut out = String::new();
        let mut pending = vec!((self.root, 0));

        while let Some((id, depth)) = pending.pop() {
            let node = self.node(id);
            let name = pool.name(node.value);
            let name = name.strip_prefix('_').unwrap_or(name);
            let _ = writeln!(out, "|{}{}", "-".repeat(depth), name);
            pending.extend(node.children().iter().rev().map(|c| (*c, depth + 1)));
        }

        out
    }
}
