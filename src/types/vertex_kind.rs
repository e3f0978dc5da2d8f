//! Kind of a decision-graph edge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a [`Vertex`](super::Vertex).
///
/// `Unconditional` is used only for the single edge leaving the Entry anchor;
/// `True`/`False` encode decision outcomes everywhere else. The derived order
/// (`Unconditional` < `True` < `False`) is load-bearing: sibling edges are
/// sorted by it for stable rendering and for the equivalence traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VertexKind {
  Unconditional,
  True,
  False,
}

impl VertexKind {
  /// Short edge label used by diagram output ("T"/"F", empty for entry edges).
  pub fn edge_label(&self) -> &'static str {
    match self {
      VertexKind::Unconditional => "",
      VertexKind::True => "T",
      VertexKind::False => "F",
    }
  }
}

impl fmt::Display for VertexKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      VertexKind::Unconditional => write!(f, "unconditional"),
      VertexKind::True => write!(f, "true"),
      VertexKind::False => write!(f, "false"),
    }
  }
}
