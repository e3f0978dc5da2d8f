//! Structural equivalence oracle.
//!
//! Two graphs encode the same decisions when their entry edges match and the
//! paired, ordered traversal from there never diverges. Labels compare
//! case-insensitively; node identities never matter here, only shape and
//! text. Test-suite oracle, not used by production code.

use crate::types::{DecisionGraph, GraphError, Vertex};

/// Returns true when `expected` and `actual` encode the same decision
/// structure. Fails with [`GraphError::MalformedGraph`] when either side
/// lacks a unique entry edge.
pub fn same_as(expected: &DecisionGraph, actual: &DecisionGraph) -> Result<bool, GraphError> {
  let expected_entry = expected.entry_vertex()?;
  let actual_entry = actual.entry_vertex()?;
  Ok(vertices_match(
    expected,
    &expected_entry,
    actual,
    &actual_entry,
  ))
}

/// Two vertices match when their kinds agree, their target labels agree
/// case-insensitively, and the targets' outgoing vertices — in the
/// deterministic (kind, target-label) order — match pairwise with equal
/// arity. Differing branching factors are never equivalent.
fn vertices_match(
  graph_a: &DecisionGraph,
  vertex_a: &Vertex,
  graph_b: &DecisionGraph,
  vertex_b: &Vertex,
) -> bool {
  if vertex_a.kind != vertex_b.kind {
    return false;
  }
  if vertex_a.target.label().to_lowercase() != vertex_b.target.label().to_lowercase() {
    return false;
  }

  let outgoing_a = graph_a.outgoing_vertices(&vertex_a.target);
  let outgoing_b = graph_b.outgoing_vertices(&vertex_b.target);

  outgoing_a.len() == outgoing_b.len()
    && outgoing_a
      .iter()
      .zip(outgoing_b.iter())
      .all(|(a, b)| vertices_match(graph_a, a, graph_b, b))
}
