//! A directed, labeled edge between two decision-graph nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Node, VertexKind};

/// A directed edge from `source` to `target`.
///
/// Source and target are stored as [`Node`] values; since node equality is
/// identity-based, a stored copy stands for the node itself and its label
/// stays resolvable even after the node leaves a graph's node list mid-splice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
  pub source: Node,
  pub target: Node,
  pub kind: VertexKind,
}

impl Vertex {
  pub fn new(source: Node, target: Node, kind: VertexKind) -> Self {
    Self {
      source,
      target,
      kind,
    }
  }

  /// An entry-style edge with no decision outcome attached.
  pub fn unconditional(source: Node, target: Node) -> Self {
    Self::new(source, target, VertexKind::Unconditional)
  }
}

impl fmt::Display for Vertex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} -{}-> {}", self.source, self.kind, self.target)
  }
}
