//! Graph composition algebra.
//!
//! Each operator consumes its operand graphs by value, detaches their edges
//! and nodes as it splices them, and returns a new owning graph. An operand
//! is merged into exactly one parent; taking ownership makes reuse of a
//! spent operand a compile error.

use tracing::instrument;

use crate::expr::BinaryOp;
use crate::types::{BooleanGraph, DecisionGraph, GraphError, Node, Vertex, VertexKind};

impl DecisionGraph {
  /// Turns a value graph into a boolean one by attaching True/False vertices
  /// from every leaf to the shared sinks, so a bare leaf behaves as a
  /// predicate. A graph that is already boolean-shaped has no ordinary
  /// leaves, which makes this idempotent.
  #[instrument(level = "trace", skip(self))]
  pub fn as_boolean(mut self) -> BooleanGraph {
    for leaf in self.leaves() {
      self.add_vertex(Vertex::new(leaf.clone(), Node::true_sink(), VertexKind::True));
      self.add_vertex(Vertex::new(leaf, Node::false_sink(), VertexKind::False));
    }
    BooleanGraph::from_graph_unchecked(self)
  }

  /// Builds `self <op> right` by replacing every leaf of the decision side
  /// with a comparison node against the single-node value side.
  ///
  /// At most one operand may hold more than one node: the multi-node operand
  /// is the decision side whose leaves get rewritten; the other contributes
  /// its sole node's label. When the right operand is single-node (including
  /// the both-single case) the left graph is rewritten and labels read
  /// `leaf <op> value`; otherwise the right graph is rewritten and the
  /// original textual order is preserved as `value <op> leaf`.
  #[instrument(level = "trace", skip(self, right))]
  pub fn compare(self, op: BinaryOp, right: DecisionGraph) -> Result<BooleanGraph, GraphError> {
    if self.nodes.len() > 1 && right.nodes.len() > 1 {
      return Err(GraphError::UnsupportedComparison);
    }

    let (mut tree, value, reversed) = if right.nodes.len() == 1 {
      let value = right.nodes.into_iter().next().ok_or_else(malformed_operand)?;
      (self, value, false)
    } else {
      let value = self.nodes.into_iter().next().ok_or_else(malformed_operand)?;
      (right, value, true)
    };

    let mut result = DecisionGraph::empty();

    for leaf in tree.leaves() {
      tree.remove_node(&leaf);

      let label = if reversed {
        format!("{} {} {}", value.label(), op.symbol(), leaf.label())
      } else {
        format!("{} {} {}", leaf.label(), op.symbol(), value.label())
      };
      let comparison = Node::new(label);

      result.add_node(comparison.clone());
      result.add_vertex(Vertex::new(
        comparison.clone(),
        Node::true_sink(),
        VertexKind::True,
      ));
      result.add_vertex(Vertex::new(
        comparison.clone(),
        Node::false_sink(),
        VertexKind::False,
      ));

      // Everything that pointed at the leaf (including the entry edge when
      // the leaf was the root) now points at the comparison node, keeping
      // each edge's kind and source.
      for vertex in tree.incoming_vertices(&leaf) {
        tree.remove_vertex(&vertex);
        result.add_vertex(Vertex::new(vertex.source, comparison.clone(), vertex.kind));
      }
    }

    result.absorb(tree);
    Ok(BooleanGraph::from_graph_unchecked(result))
  }

  /// Merges leaves that share the same label text, rewiring every incoming
  /// and outgoing vertex of the duplicates onto a single representative.
  /// Groups are keyed by label, not identity; identities are unique by
  /// construction, so an identity key could never form a group.
  #[instrument(level = "trace", skip(self))]
  pub fn remove_duplicate_leaves(mut self) -> DecisionGraph {
    let mut groups: Vec<(String, Vec<Node>)> = Vec::new();
    for leaf in self.leaves() {
      match groups.iter_mut().find(|(label, _)| label == leaf.label()) {
        Some((_, members)) => members.push(leaf),
        None => groups.push((leaf.label().to_string(), vec![leaf])),
      }
    }

    for (_, members) in groups.into_iter().filter(|(_, m)| m.len() > 1) {
      let primary = &members[0];
      for duplicate in &members[1..] {
        for vertex in &mut self.vertices {
          if vertex.source == *duplicate {
            vertex.source = primary.clone();
          }
          if vertex.target == *duplicate {
            vertex.target = primary.clone();
          }
        }
        self.remove_node(duplicate);
      }
    }

    self
  }
}

impl BooleanGraph {
  /// Builds `self ? if_true : if_false`: edges into the True sink are
  /// redirected to `if_true`'s root, edges into the False sink to
  /// `if_false`'s root, and the branches' own entry edges are removed.
  #[instrument(level = "trace", skip(self, if_true, if_false))]
  pub fn conditional(
    self,
    mut if_true: DecisionGraph,
    mut if_false: DecisionGraph,
  ) -> Result<DecisionGraph, GraphError> {
    let mut test = self.into_inner();
    let mut result = DecisionGraph::empty();

    let true_entry = if_true.entry_vertex()?;
    for vertex in test.incoming_vertices(&Node::true_sink()) {
      test.remove_vertex(&vertex);
      result.add_vertex(Vertex::new(
        vertex.source,
        true_entry.target.clone(),
        vertex.kind,
      ));
    }
    if_true.remove_vertex(&true_entry);

    let false_entry = if_false.entry_vertex()?;
    for vertex in test.incoming_vertices(&Node::false_sink()) {
      test.remove_vertex(&vertex);
      result.add_vertex(Vertex::new(
        vertex.source,
        false_entry.target.clone(),
        vertex.kind,
      ));
    }
    if_false.remove_vertex(&false_entry);

    result.absorb(test);
    result.absorb(if_true);
    result.absorb(if_false);
    Ok(result)
  }

  /// Builds `!self` by swapping the terminal wiring: edges into True go to
  /// False and vice versa. Interior decision nodes are untouched.
  #[instrument(level = "trace", skip(self))]
  pub fn not(self) -> BooleanGraph {
    let mut operand = self.into_inner();
    let mut result = DecisionGraph::empty();

    for vertex in operand.incoming_vertices(&Node::true_sink()) {
      operand.remove_vertex(&vertex);
      result.add_vertex(Vertex::new(vertex.source, Node::false_sink(), vertex.kind));
    }

    for vertex in operand.incoming_vertices(&Node::false_sink()) {
      operand.remove_vertex(&vertex);
      result.add_vertex(Vertex::new(vertex.source, Node::true_sink(), vertex.kind));
    }

    result.absorb(operand);
    BooleanGraph::from_graph_unchecked(result)
  }

  /// Builds `self && right`: edges into the left True sink are redirected to
  /// the right graph's root. The left False wiring is untouched, so a failed
  /// left operand never reaches the right one (short-circuit shape).
  #[instrument(level = "trace", skip(self, right))]
  pub fn and(self, right: BooleanGraph) -> Result<BooleanGraph, GraphError> {
    let mut left = self.into_inner();
    let mut right = right.into_inner();
    let mut result = DecisionGraph::empty();

    let right_entry = right.entry_vertex()?;
    for vertex in left.incoming_vertices(&Node::true_sink()) {
      left.remove_vertex(&vertex);
      result.add_vertex(Vertex::new(
        vertex.source,
        right_entry.target.clone(),
        vertex.kind,
      ));
    }
    right.remove_vertex(&right_entry);

    result.absorb(left);
    result.absorb(right);
    Ok(BooleanGraph::from_graph_unchecked(result))
  }

  /// Builds `self || right`: symmetric to [`BooleanGraph::and`], redirecting
  /// the left False wiring to the right graph's root.
  #[instrument(level = "trace", skip(self, right))]
  pub fn or(self, right: BooleanGraph) -> Result<BooleanGraph, GraphError> {
    let mut left = self.into_inner();
    let mut right = right.into_inner();
    let mut result = DecisionGraph::empty();

    let right_entry = right.entry_vertex()?;
    for vertex in left.incoming_vertices(&Node::false_sink()) {
      left.remove_vertex(&vertex);
      result.add_vertex(Vertex::new(
        vertex.source,
        right_entry.target.clone(),
        vertex.kind,
      ));
    }
    right.remove_vertex(&right_entry);

    result.absorb(left);
    result.absorb(right);
    Ok(BooleanGraph::from_graph_unchecked(result))
  }
}

fn malformed_operand() -> GraphError {
  GraphError::MalformedGraph {
    reason: "comparison operand has no nodes".to_string(),
  }
}
