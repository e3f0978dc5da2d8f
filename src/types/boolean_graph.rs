//! A decision graph whose every path ends at the True/False sinks.

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use super::{DecisionGraph, Node, Vertex, VertexKind};

/// A boolean-shaped [`DecisionGraph`]: every non-terminal node carries exactly
/// one True and one False outgoing vertex, and every path terminates at the
/// shared True/False sinks.
///
/// The wrapper is produced by the algebra (`as_boolean` and the boolean
/// operators); it derefs to the underlying graph for the read queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooleanGraph {
  graph: DecisionGraph,
}

impl BooleanGraph {
  /// A single-decision graph: one node wired from Entry, with True/False
  /// vertices to the shared sinks.
  pub fn with_root(label: impl Into<String>) -> Self {
    let mut graph = DecisionGraph::with_root(label);
    if let Some(root) = graph.nodes.first().cloned() {
      graph.add_vertex(Vertex::new(root.clone(), Node::true_sink(), VertexKind::True));
      graph.add_vertex(Vertex::new(root, Node::false_sink(), VertexKind::False));
    }
    Self { graph }
  }

  /// Wraps a graph the algebra has already shaped. Callers outside the
  /// algebra go through [`DecisionGraph::as_boolean`] instead.
  pub(crate) fn from_graph_unchecked(graph: DecisionGraph) -> Self {
    Self { graph }
  }

  pub fn into_inner(self) -> DecisionGraph {
    self.graph
  }
}

impl Deref for BooleanGraph {
  type Target = DecisionGraph;

  fn deref(&self) -> &DecisionGraph {
    &self.graph
  }
}

impl DerefMut for BooleanGraph {
  fn deref_mut(&mut self) -> &mut DecisionGraph {
    &mut self.graph
  }
}

impl From<BooleanGraph> for DecisionGraph {
  fn from(boolean: BooleanGraph) -> Self {
    boolean.into_inner()
  }
}
