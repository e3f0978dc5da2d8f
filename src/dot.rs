//! Graphviz DOT rendering of a decision graph.
//!
//! Output is deterministic for a given graph: nodes receive positional
//! identifiers (`entry`, `t`, `f`, `n0`, `n1`, ...) assigned in label order,
//! so two structurally identical graphs render to identical DOT text. The
//! Entry anchor renders as `Mdiamond` and the sinks as `Msquare`, matching
//! the start/exit shape conventions of Attractor-style DOT pipelines.

use std::collections::HashMap;
use std::fmt::Write;

use crate::types::{DecisionGraph, Node, NodeId, VertexKind};

/// Renders `graph` as a Graphviz `digraph`.
pub fn to_dot(graph: &DecisionGraph) -> String {
  let mut nodes = graph.connected_nodes();
  nodes.sort_by(|a, b| a.label().cmp(b.label()).then_with(|| a.id().cmp(&b.id())));

  let mut ids: HashMap<NodeId, String> = HashMap::new();
  let mut next_ordinary = 0usize;
  for node in &nodes {
    let id = match node.id() {
      NodeId::Entry => "entry".to_string(),
      NodeId::True => "t".to_string(),
      NodeId::False => "f".to_string(),
      NodeId::Local(_) => {
        let id = format!("n{}", next_ordinary);
        next_ordinary += 1;
        id
      }
    };
    ids.insert(node.id(), id);
  }

  let mut out = String::from("digraph decision {\n");

  for node in &nodes {
    let id = &ids[&node.id()];
    let shape = node_shape(node);
    let _ = writeln!(
      out,
      "  {} [label=\"{}\", shape={}];",
      id,
      escape(node.label()),
      shape
    );
  }

  for node in &nodes {
    for vertex in graph.outgoing_vertices(node) {
      let source = &ids[&vertex.source.id()];
      let target = &ids[&vertex.target.id()];
      match vertex.kind {
        VertexKind::Unconditional => {
          let _ = writeln!(out, "  {} -> {};", source, target);
        }
        kind => {
          let _ = writeln!(out, "  {} -> {} [label=\"{}\"];", source, target, kind.edge_label());
        }
      }
    }
  }

  out.push_str("}\n");
  out
}

fn node_shape(node: &Node) -> &'static str {
  match node.id() {
    NodeId::Entry => "Mdiamond",
    NodeId::True | NodeId::False => "Msquare",
    NodeId::Local(_) => "box",
  }
}

fn escape(label: &str) -> String {
  label.replace('\\', "\\\\").replace('"', "\\\"")
}
