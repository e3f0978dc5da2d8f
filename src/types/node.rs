//! A node in a decision graph.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Identity of a [`Node`].
///
/// `Entry`, `True` and `False` are process-wide sentinels: the tag itself is
/// the identity, so every graph that wires them refers to the same node.
/// Ordinary nodes get a fresh v4 uuid at creation and are never equal to any
/// other node, whatever their labels say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeId {
  Entry,
  True,
  False,
  Local(Uuid),
}

impl NodeId {
  /// Returns true for the Entry/True/False sentinels.
  pub fn is_sentinel(&self) -> bool {
    !matches!(self, NodeId::Local(_))
  }
}

/// A labeled vertex of a decision graph.
///
/// Equality and hashing delegate to [`NodeId`] only; two nodes with the same
/// label are still distinct, and a clone of a node *is* that node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
  id: NodeId,
  label: String,
}

impl Node {
  /// Creates an ordinary node with a fresh identity.
  pub fn new(label: impl Into<String>) -> Self {
    Self {
      id: NodeId::Local(Uuid::new_v4()),
      label: label.into(),
    }
  }

  /// The Entry anchor every graph hangs off.
  pub fn entry() -> Self {
    Self {
      id: NodeId::Entry,
      label: "Entry".to_string(),
    }
  }

  /// The shared True terminal sink.
  pub fn true_sink() -> Self {
    Self {
      id: NodeId::True,
      label: "True".to_string(),
    }
  }

  /// The shared False terminal sink.
  pub fn false_sink() -> Self {
    Self {
      id: NodeId::False,
      label: "False".to_string(),
    }
  }

  pub fn id(&self) -> NodeId {
    self.id
  }

  pub fn label(&self) -> &str {
    &self.label
  }

  pub fn is_sentinel(&self) -> bool {
    self.id.is_sentinel()
  }

  pub fn is_entry(&self) -> bool {
    self.id == NodeId::Entry
  }

  /// Returns true for the True/False terminal sinks.
  pub fn is_sink(&self) -> bool {
    matches!(self.id, NodeId::True | NodeId::False)
  }
}

impl PartialEq for Node {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for Node {}

impl Hash for Node {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state);
  }
}

impl fmt::Display for Node {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.label)
  }
}
