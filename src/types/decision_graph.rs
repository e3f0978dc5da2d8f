//! The decision-graph container and its read queries.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{GraphError, Node, NodeId, Vertex, VertexKind};

/// A mutable decision graph: a set of nodes and a set of directed edges.
///
/// The Entry anchor and the True/False sinks are never stored in `nodes`;
/// they only appear as the endpoints of vertices, which is how the same
/// sentinel can belong to many graphs at once. Exactly one vertex is sourced
/// at Entry (the *entry edge*), pointing at the graph's semantic root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionGraph {
  pub nodes: Vec<Node>,
  pub vertices: Vec<Vertex>,
}

impl DecisionGraph {
  /// An empty graph with no entry edge yet. Only the algebra operators are
  /// allowed to leave a graph in this state.
  pub(crate) fn empty() -> Self {
    Self::default()
  }

  /// A single-leaf graph: one ordinary node wired from Entry.
  pub fn with_root(label: impl Into<String>) -> Self {
    let node = Node::new(label);
    let mut graph = Self::empty();
    graph.add_node(node.clone());
    graph.add_vertex(Vertex::unconditional(Node::entry(), node));
    graph
  }

  pub fn add_node(&mut self, node: Node) {
    self.nodes.push(node);
  }

  /// Detaches `node` from this graph's node list. Vertices referencing it are
  /// untouched; splicing code redirects those explicitly.
  pub fn remove_node(&mut self, node: &Node) {
    self.nodes.retain(|n| n != node);
  }

  pub fn add_vertex(&mut self, vertex: Vertex) {
    self.vertices.push(vertex);
  }

  /// Removes the first vertex equal to `vertex` (same endpoints and kind).
  pub fn remove_vertex(&mut self, vertex: &Vertex) {
    if let Some(pos) = self.vertices.iter().position(|v| v == vertex) {
      self.vertices.remove(pos);
    }
  }

  /// Distinct nodes touched by at least one vertex, in first-wired order.
  /// Nodes added but never wired are skipped; sentinels show up here even
  /// though they are not in `nodes`.
  pub fn connected_nodes(&self) -> Vec<Node> {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut out = Vec::new();
    for vertex in &self.vertices {
      for node in [&vertex.source, &vertex.target] {
        if seen.insert(node.id()) {
          out.push(node.clone());
        }
      }
    }
    out
  }

  /// Ordinary nodes with no outgoing vertex.
  pub fn leaves(&self) -> Vec<Node> {
    self
      .nodes
      .iter()
      .filter(|n| !self.vertices.iter().any(|v| v.source == **n))
      .cloned()
      .collect()
  }

  /// Vertices targeting `node`, in the deterministic (kind, target-label)
  /// order. This order is load-bearing for diagram stability and for the
  /// equivalence checker's paired traversal.
  pub fn incoming_vertices(&self, node: &Node) -> Vec<Vertex> {
    let mut incoming: Vec<Vertex> = self
      .vertices
      .iter()
      .filter(|v| v.target == *node)
      .cloned()
      .collect();
    sort_vertices(&mut incoming);
    incoming
  }

  /// Vertices sourced at `node`, in the deterministic (kind, target-label)
  /// order.
  pub fn outgoing_vertices(&self, node: &Node) -> Vec<Vertex> {
    let mut outgoing: Vec<Vertex> = self
      .vertices
      .iter()
      .filter(|v| v.source == *node)
      .cloned()
      .collect();
    sort_vertices(&mut outgoing);
    outgoing
  }

  /// The single vertex sourced at the Entry anchor.
  pub fn entry_vertex(&self) -> Result<Vertex, GraphError> {
    let mut at_entry = self.vertices.iter().filter(|v| v.source.is_entry());
    match (at_entry.next(), at_entry.next()) {
      (Some(vertex), None) => Ok(vertex.clone()),
      (None, _) => Err(GraphError::MalformedGraph {
        reason: "no entry edge".to_string(),
      }),
      (Some(_), Some(_)) => Err(GraphError::MalformedGraph {
        reason: "more than one entry edge".to_string(),
      }),
    }
  }

  /// Number of vertices sourced at Entry. The entry edge is always
  /// `Unconditional`; this exists for invariant checks in tests.
  pub fn entry_edge_count(&self) -> usize {
    self
      .vertices
      .iter()
      .filter(|v| v.source.is_entry() && v.kind == VertexKind::Unconditional)
      .count()
  }

  /// Moves every node and vertex of `other` into this graph. `other` is
  /// spent; the operand graphs of the algebra are merged exactly once.
  pub(crate) fn absorb(&mut self, other: DecisionGraph) {
    self.nodes.extend(other.nodes);
    self.vertices.extend(other.vertices);
  }
}

/// Stable sort by (kind, target label); ties keep insertion order.
fn sort_vertices(vertices: &mut [Vertex]) {
  vertices.sort_by(|a, b| {
    a.kind
      .cmp(&b.kind)
      .then_with(|| a.target.label().cmp(b.target.label()))
  });
}
