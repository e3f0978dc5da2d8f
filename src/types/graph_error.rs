//! Errors raised by graph construction.

use thiserror::Error;

/// Errors raised while composing decision graphs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
  /// Raised by `compare` when both operands are multi-node graphs. There is
  /// no single value side to fold into the decision side's leaves, so the
  /// whole build aborts rather than emit a partial graph.
  #[error("cannot graph a comparison between two multi-path sub-expressions")]
  UnsupportedComparison,

  /// Raised when a graph lacks exactly one edge leaving the Entry anchor.
  /// This is an algebra invariant violation, not bad user input.
  #[error("malformed graph: {reason}")]
  MalformedGraph { reason: String },
}
