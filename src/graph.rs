//! Undirected weighted word graph.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Undirected;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Edge weight: a document count or a cosine similarity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Weight {
    Count(u64),
    Similarity(f64),
}

impl Weight {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Weight::Count(c) => c as f64,
            Weight::Similarity(s) => s,
        }
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Weight::Count(c) => c == 0,
            Weight::Similarity(s) => s == 0.0,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Count(c) => write!(f, "{c}"),
            Weight::Similarity(s) => write!(f, "{s:.6}"),
        }
    }
}

/// One edge as handed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: Weight,
}

/// Undirected graph of named nodes with at most one edge per pair and no self-loops.
///
/// Nodes and edges are reported in insertion order.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    graph: Graph<String, Weight, Undirected>,
    index: HashMap<String, NodeIndex>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self {
            graph: Graph::new_undirected(),
            index: HashMap::new(),
        }
    }

    /// Add `name` unless present; returns its index either way.
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Connect `a` and `b`, adding missing endpoints.
    /// Returns `false` for self-loops and pairs that are already connected.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Weight) -> bool {
        if a == b {
            return false;
        }
        let ia = self.add_node(a);
        let ib = self.add_node(b);
        if self.graph.find_edge(ia, ib).is_some() {
            return false;
        }
        self.graph.add_edge(ia, ib, weight);
        true
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn nodes(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|i| self.graph[i].as_str())
            .collect()
    }

    pub fn edges(&self) -> Vec<Edge> {
        self.graph
            .edge_references()
            .map(|e| Edge {
                source: self.graph[e.source()].clone(),
                target: self.graph[e.target()].clone(),
                weight: *e.weight(),
            })
            .collect()
    }

    /// Weight between `a` and `b` in either order.
    pub fn weight(&self, a: &str, b: &str) -> Option<Weight> {
        let ia = *self.index.get(a)?;
        let ib = *self.index.get(b)?;
        self.graph
            .find_edge(ia, ib)
            .map(|e| self.graph[e])
    }

    pub fn degree(&self, name: &str) -> Option<usize> {
        self.index
            .get(name)
            .map(|&i| self.graph.edges(i).count())
    }

    /// Borrow the underlying petgraph graph for further analysis.
    pub fn inner(&self) -> &Graph<String, Weight, Undirected> {
        &self.graph
    }

    /// Size, density and the `top` heaviest edges.
    pub fn summary(&self, top: usize) -> GraphSummary {
        let nodes = self.node_count();
        let edges = self.edge_count();
        let isolated = self
            .graph
            .node_indices()
            .filter(|&i| self.graph.neighbors(i).next().is_none())
            .count();
        let density = if nodes > 1 {
            2.0 * edges as f64 / (nodes as f64 * (nodes as f64 - 1.0))
        } else {
            0.0
        };
        let total_weight = self.graph.edge_weights().map(Weight::as_f64).sum();

        let mut top_edges = self.edges();
        top_edges.sort_by(|a, b| {
            b.weight
                .as_f64()
                .partial_cmp(&a.weight.as_f64())
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.source.cmp(&b.source))
                .then_with(|| a.target.cmp(&b.target))
        });
        top_edges.truncate(top);

        GraphSummary {
            nodes,
            edges,
            isolated,
            density,
            total_weight,
            top_edges,
        }
    }
}

impl PartialEq for WeightedGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes() == other.nodes() && self.edges() == other.edges()
    }
}

impl Serialize for WeightedGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("WeightedGraph", 2)?;
        state.serialize_field("nodes", &self.nodes())?;
        state.serialize_field("edges", &self.edges())?;
        state.end()
    }
}

/// Headline numbers for a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub isolated: usize,
    pub density: f64,
    pub total_weight: f64,
    pub top_edges: Vec<Edge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_self_loops_and_duplicate_pairs() {
        let mut g = WeightedGraph::new();
        assert!(!g.add_edge("a", "a", Weight::Count(1)));
        assert!(g.add_edge("a", "b", Weight::Count(1)));
        assert!(!g.add_edge("b", "a", Weight::Count(5)));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight("b", "a"), Some(Weight::Count(1)));
    }

    #[test]
    fn nodes_keep_insertion_order() {
        let mut g = WeightedGraph::new();
        g.add_node("z");
        g.add_node("a");
        g.add_node("z");
        g.add_edge("a", "m", Weight::Similarity(0.5));
        assert_eq!(g.nodes(), vec!["z", "a", "m"]);
        assert_eq!(g.degree("z"), Some(0));
        assert_eq!(g.degree("a"), Some(1));
        assert_eq!(g.degree("q"), None);
    }

    #[test]
    fn summary_counts_and_sorts() {
        let mut g = WeightedGraph::new();
        g.add_node("lonely");
        g.add_edge("a", "b", Weight::Count(1));
        g.add_edge("a", "c", Weight::Count(3));
        g.add_edge("b", "c", Weight::Count(1));
        let s = g.summary(2);
        assert_eq!(s.nodes, 4);
        assert_eq!(s.edges, 3);
        assert_eq!(s.isolated, 1);
        assert!((s.density - 0.5).abs() < 1e-12);
        assert_eq!(s.total_weight, 5.0);
        assert_eq!(s.top_edges.len(), 2);
        assert_eq!(s.top_edges[0].target, "c");
        assert_eq!(s.top_edges[1].source, "a");
        assert_eq!(s.top_edges[1].target, "b");
    }

    #[test]
    fn serializes_nodes_and_untagged_weights() {
        let mut g = WeightedGraph::new();
        g.add_edge("x", "y", Weight::Count(2));
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(json["nodes"], serde_json::json!(["x", "y"]));
        assert_eq!(json["edges"][0]["weight"], serde_json::json!(2));
    }
}
