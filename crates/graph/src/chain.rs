use component_protocol::{fold_key, ChainEntry, ComponentMeta, DependencyChain};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::fmt::Write as _;

/// A component reached during chain expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainNode {
    pub name: String,
    pub display_name: String,
    pub requires: Vec<String>,
    pub depth: usize,
}

/// Arena of expanded components.
///
/// Node 0 is the start component; every other node was added exactly once,
/// in pre-order, and is linked from the component whose required phrase
/// resolved to it. Edge weights hold that phrase.
#[derive(Debug, Clone)]
pub struct ChainGraph {
    graph: DiGraph<ChainNode, String>,
    root: NodeIndex,
}

impl ChainGraph {
    #[must_use]
    pub fn new(root: &ComponentMeta, requires: Vec<String>) -> Self {
        let mut graph = DiGraph::new();
        let root = graph.add_node(ChainNode {
            name: root.name.clone(),
            display_name: root.display_name.clone(),
            requires,
            depth: 0,
        });
        Self { graph, root }
    }

    #[must_use]
    pub const fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn add_dependency(&mut self, parent: NodeIndex, phrase: &str, node: ChainNode) -> NodeIndex {
        let idx = self.graph.add_node(node);
        self.graph.add_edge(parent, idx, phrase.to_string());
        idx
    }

    #[must_use]
    pub fn node(&self, idx: NodeIndex) -> Option<&ChainNode> {
        self.graph.node_weight(idx)
    }

    /// Number of resolved dependencies, excluding the start component
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.node_count().saturating_sub(1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let key = fold_key(name);
        self.graph
            .node_weights()
            .any(|node| fold_key(&node.name) == key)
    }

    /// Dependency chain in pre-order, without the start component
    #[must_use]
    pub fn entries(&self) -> DependencyChain {
        self.graph
            .node_indices()
            .filter(|&idx| idx != self.root)
            .filter_map(|idx| {
                let node = &self.graph[idx];
                let matched_phrase = self
                    .graph
                    .edges_directed(idx, petgraph::Direction::Incoming)
                    .next()
                    .map(|edge| edge.weight().clone())?;
                Some(ChainEntry {
                    component: node.name.clone(),
                    requires: node.requires.clone(),
                    depth: node.depth,
                    matched_phrase,
                })
            })
            .collect()
    }

    /// Render the expansion as a Graphviz digraph
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph dependencies {\n    rankdir=LR;\n");
        for idx in self.graph.node_indices() {
            let node = &self.graph[idx];
            let shape = if idx == self.root { "box" } else { "ellipse" };
            let _ = writeln!(
                out,
                "    n{} [label=\"{}\", shape={shape}];",
                idx.index(),
                escape_label(&node.display_name)
            );
        }
        for edge in self.graph.edge_references() {
            let _ = writeln!(
                out,
                "    n{} -> n{} [label=\"{}\"];",
                edge.source().index(),
                edge.target().index(),
                escape_label(edge.weight())
            );
        }
        out.push_str("}\n");
        out
    }
}

fn escape_label(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use component_protocol::Complexity;

    fn meta(name: &str) -> ComponentMeta {
        ComponentMeta {
            id: 1,
            name: name.to_string(),
            display_name: name.to_uppercase(),
            complexity: Complexity::Simple,
            requires_scripting: false,
            framework_specific: false,
        }
    }

    fn node(name: &str, depth: usize) -> ChainNode {
        ChainNode {
            name: name.to_string(),
            display_name: name.to_string(),
            requires: Vec::new(),
            depth,
        }
    }

    #[test]
    fn test_entries_exclude_root_and_keep_insertion_order() {
        let mut chain = ChainGraph::new(&meta("navbar"), vec!["collapse".to_string()]);
        let collapse = chain.add_dependency(chain.root(), "collapse", node("collapse", 1));
        chain.add_dependency(collapse, "transition", node("transitions", 2));

        let entries = chain.entries();
        assert_eq!(chain.len(), 2);
        assert_eq!(entries[0].component, "collapse");
        assert_eq!(entries[1].component, "transitions");
        assert_eq!(entries[1].matched_phrase, "transition");
        assert_eq!(entries[1].depth, 2);
        assert!(chain.contains("NAVBAR"));
    }

    #[test]
    fn test_dot_output_escapes_labels() {
        let mut chain = ChainGraph::new(&meta("card"), Vec::new());
        chain.add_dependency(chain.root(), "say \"hi\"", node("quote", 1));

        let dot = chain.to_dot();
        assert!(dot.starts_with("digraph dependencies {"));
        assert!(dot.contains("n0 [label=\"CARD\", shape=box];"));
        assert!(dot.contains("n0 -> n1 [label=\"say \\\"hi\\\"\"];"));
    }
}
