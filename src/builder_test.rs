//! Tests for the AST-to-graph builder.
//!
//! Fixtures model a record `Entity` with the fields the scenarios exercise:
//! boolean `Flag`, integers `X`/`Y`/`Z`/`Length`, a string `Name`, a nullable
//! boolean, and an enumerated `Day`.

use crate::builder::{build, build_boolean};
use crate::equivalence::same_as;
use crate::expr::{BinaryOp, EnumTy, Expr, Ty};
use crate::types::{DecisionGraph, GraphError, Node, Vertex, VertexKind};

fn entity() -> Expr {
  Expr::parameter("e", Ty::object("Entity"))
}

fn flag() -> Expr {
  Expr::member(entity(), "Flag", Ty::Bool)
}

fn int_field(name: &str) -> Expr {
  Expr::member(entity(), name, Ty::Int)
}

fn name_field() -> Expr {
  Expr::member(entity(), "Name", Ty::Str)
}

fn day_of_week() -> EnumTy {
  EnumTy::new(
    "DayOfWeek",
    vec![
      ("Sunday", 0),
      ("Monday", 1),
      ("Tuesday", 2),
      ("Wednesday", 3),
      ("Thursday", 4),
      ("Friday", 5),
      ("Saturday", 6),
    ],
  )
}

fn entry_to(node: &Node) -> Vertex {
  Vertex::unconditional(Node::entry(), node.clone())
}

fn true_edge(source: &Node, target: &Node) -> Vertex {
  Vertex::new(source.clone(), target.clone(), VertexKind::True)
}

fn false_edge(source: &Node, target: &Node) -> Vertex {
  Vertex::new(source.clone(), target.clone(), VertexKind::False)
}

fn decision(node: &Node) -> Vec<Vertex> {
  vec![
    true_edge(node, &Node::true_sink()),
    false_edge(node, &Node::false_sink()),
  ]
}

#[test]
fn boolean_member_becomes_single_decision() {
  let actual = build(&flag()).unwrap();

  let node = Node::new("Entity.Flag");
  let mut vertices = vec![entry_to(&node)];
  vertices.extend(decision(&node));
  let expected = DecisionGraph {
    nodes: vec![node],
    vertices,
  };

  assert!(same_as(&expected, &actual).unwrap());
}

#[test]
fn and_expression_short_circuits() {
  let expr = Expr::binary(
    BinaryOp::AndAlso,
    flag(),
    Expr::binary(BinaryOp::Eq, int_field("Length"), Expr::int(0)),
  );
  let actual = build(&expr).unwrap();

  let flag_node = Node::new("Entity.Flag");
  let length_node = Node::new("Entity.Length == 0");
  let mut vertices = vec![
    entry_to(&flag_node),
    true_edge(&flag_node, &length_node),
    false_edge(&flag_node, &Node::false_sink()),
  ];
  vertices.extend(decision(&length_node));
  let expected = DecisionGraph {
    nodes: vec![flag_node, length_node],
    vertices,
  };

  assert!(same_as(&expected, &actual).unwrap());
}

#[test]
fn or_expression_short_circuits() {
  let expr = Expr::binary(
    BinaryOp::OrElse,
    flag(),
    Expr::binary(BinaryOp::Eq, int_field("Length"), Expr::int(0)),
  );
  let actual = build(&expr).unwrap();

  let flag_node = Node::new("Entity.Flag");
  let length_node = Node::new("Entity.Length == 0");
  let mut vertices = vec![
    entry_to(&flag_node),
    true_edge(&flag_node, &Node::true_sink()),
    false_edge(&flag_node, &length_node),
  ];
  vertices.extend(decision(&length_node));
  let expected = DecisionGraph {
    nodes: vec![flag_node, length_node],
    vertices,
  };

  assert!(same_as(&expected, &actual).unwrap());
}

#[test]
fn eager_connectives_build_the_same_graphs() {
  let short_circuit = Expr::binary(BinaryOp::AndAlso, flag(), flag());
  let eager = Expr::binary(BinaryOp::And, flag(), flag());
  let a = build(&short_circuit).unwrap();
  let b = build(&eager).unwrap();
  assert!(same_as(&a, &b).unwrap());
}

#[test]
fn not_expression_inverts_sinks() {
  let actual = build(&Expr::not(flag())).unwrap();

  let node = Node::new("Entity.Flag");
  let expected = DecisionGraph {
    nodes: vec![node.clone()],
    vertices: vec![
      entry_to(&node),
      true_edge(&node, &Node::false_sink()),
      false_edge(&node, &Node::true_sink()),
    ],
  };

  assert!(same_as(&expected, &actual).unwrap());
}

#[test]
fn constant_comparison() {
  let expr = Expr::binary(BinaryOp::Gt, int_field("X"), Expr::int(1));
  let actual = build(&expr).unwrap();

  let node = Node::new("Entity.X > 1");
  let mut vertices = vec![entry_to(&node)];
  vertices.extend(decision(&node));
  let expected = DecisionGraph {
    nodes: vec![node],
    vertices,
  };

  assert!(same_as(&expected, &actual).unwrap());
}

#[test]
fn ternary_under_comparison_rewrites_both_branches() {
  // (e.Flag ? e.X : e.Y) > 1
  let expr = Expr::binary(
    BinaryOp::Gt,
    Expr::conditional(flag(), int_field("X"), int_field("Y")),
    Expr::int(1),
  );
  let actual = build(&expr).unwrap();

  let flag_node = Node::new("Entity.Flag");
  let x_node = Node::new("Entity.X > 1");
  let y_node = Node::new("Entity.Y > 1");
  let mut vertices = vec![
    entry_to(&flag_node),
    true_edge(&flag_node, &x_node),
    false_edge(&flag_node, &y_node),
  ];
  vertices.extend(decision(&x_node));
  vertices.extend(decision(&y_node));
  let expected = DecisionGraph {
    nodes: vec![flag_node, x_node, y_node],
    vertices,
  };

  assert!(same_as(&expected, &actual).unwrap());
}

#[test]
fn ternary_on_the_right_preserves_textual_order() {
  // 1 <= (e.Flag ? e.X : e.Y)
  let expr = Expr::binary(
    BinaryOp::Le,
    Expr::int(1),
    Expr::conditional(flag(), int_field("X"), int_field("Y")),
  );
  let actual = build(&expr).unwrap();

  let flag_node = Node::new("Entity.Flag");
  let x_node = Node::new("1 <= Entity.X");
  let y_node = Node::new("1 <= Entity.Y");
  let mut vertices = vec![
    entry_to(&flag_node),
    true_edge(&flag_node, &x_node),
    false_edge(&flag_node, &y_node),
  ];
  vertices.extend(decision(&x_node));
  vertices.extend(decision(&y_node));
  let expected = DecisionGraph {
    nodes: vec![flag_node, x_node, y_node],
    vertices,
  };

  assert!(same_as(&expected, &actual).unwrap());
}

#[test]
fn boolean_ternary_feeding_a_conjunction() {
  // (e.Flag ? e.X > 0 : e.Y <= 1) && e.Z == 2
  let expr = Expr::binary(
    BinaryOp::AndAlso,
    Expr::conditional(
      flag(),
      Expr::binary(BinaryOp::Gt, int_field("X"), Expr::int(0)),
      Expr::binary(BinaryOp::Le, int_field("Y"), Expr::int(1)),
    ),
    Expr::binary(BinaryOp::Eq, int_field("Z"), Expr::int(2)),
  );
  let actual = build(&expr).unwrap();

  let flag_node = Node::new("Entity.Flag");
  let x_node = Node::new("Entity.X > 0");
  let y_node = Node::new("Entity.Y <= 1");
  let z_node = Node::new("Entity.Z == 2");
  let mut vertices = vec![
    entry_to(&flag_node),
    true_edge(&flag_node, &x_node),
    false_edge(&flag_node, &y_node),
    true_edge(&x_node, &z_node),
    false_edge(&x_node, &Node::false_sink()),
    true_edge(&y_node, &z_node),
    false_edge(&y_node, &Node::false_sink()),
  ];
  vertices.extend(decision(&z_node));
  let expected = DecisionGraph {
    nodes: vec![flag_node, x_node, y_node, z_node],
    vertices,
  };

  assert!(same_as(&expected, &actual).unwrap());
}

#[test]
fn arithmetic_expression_stays_an_opaque_leaf() {
  // e.X + e.Y + e.Z has no decisions to graph.
  let expr = Expr::binary(
    BinaryOp::Add,
    Expr::binary(BinaryOp::Add, int_field("X"), int_field("Y")),
    int_field("Z"),
  );
  let actual = build(&expr).unwrap();

  let node = Node::new("(Entity.X + Entity.Y) + Entity.Z");
  let expected = DecisionGraph {
    nodes: vec![node.clone()],
    vertices: vec![entry_to(&node)],
  };

  assert!(same_as(&expected, &actual).unwrap());
  assert_eq!(actual.vertices.len(), 1);
  assert_eq!(actual.leaves().len(), 1);
}

#[test]
fn value_typed_parameter_is_renamed_to_its_type() {
  // i => i > 0 ? i + 1 : i - 1
  let int_param = || Expr::parameter("i", Ty::Int);
  let expr = Expr::conditional(
    Expr::binary(BinaryOp::Gt, int_param(), Expr::int(0)),
    Expr::binary(BinaryOp::Add, int_param(), Expr::int(1)),
    Expr::binary(BinaryOp::Sub, int_param(), Expr::int(1)),
  );
  let actual = build(&expr).unwrap();

  let test_node = Node::new("Int > 0");
  let plus_node = Node::new("Int + 1");
  let minus_node = Node::new("Int - 1");
  let expected = DecisionGraph {
    nodes: vec![test_node.clone(), plus_node.clone(), minus_node.clone()],
    vertices: vec![
      entry_to(&test_node),
      true_edge(&test_node, &plus_node),
      false_edge(&test_node, &minus_node),
    ],
  };

  assert!(same_as(&expected, &actual).unwrap());
}

#[test]
fn static_method_call_is_a_leaf() {
  let expr = Expr::call_static("String", "IsNullOrEmpty", vec![name_field()], Ty::Bool);
  let actual = build(&expr).unwrap();

  let node = Node::new("String.IsNullOrEmpty(Entity.Name)");
  let mut vertices = vec![entry_to(&node)];
  vertices.extend(decision(&node));
  let expected = DecisionGraph {
    nodes: vec![node],
    vertices,
  };

  assert!(same_as(&expected, &actual).unwrap());
}

#[test]
fn instance_method_call_inside_comparison() {
  let expr = Expr::binary(
    BinaryOp::Eq,
    Expr::call_instance(
      int_field("X"),
      "ToString",
      vec![Expr::string("0.000")],
      Ty::Str,
    ),
    Expr::string("1.234"),
  );
  let actual = build(&expr).unwrap();

  let node = Node::new("Entity.X.ToString(\"0.000\") == \"1.234\"");
  let mut vertices = vec![entry_to(&node)];
  vertices.extend(decision(&node));
  let expected = DecisionGraph {
    nodes: vec![node],
    vertices,
  };

  assert!(same_as(&expected, &actual).unwrap());
}

#[test]
fn nullable_member_is_masked_in_labels() {
  // e.NullableFlag == null ? e.X : e.Y — the wrapper's inner accessor never
  // shows up in the rendered condition.
  let nullable_flag = Expr::member(entity(), "NullableFlag", Ty::nullable(Ty::Bool));
  let inner = Expr::member(nullable_flag.clone(), "Value", Ty::Bool);
  assert_eq!(inner.render(), "e.NullableFlag");

  let expr = Expr::conditional(
    Expr::binary(BinaryOp::Eq, nullable_flag, Expr::null()),
    int_field("X"),
    int_field("Y"),
  );
  let actual = build(&expr).unwrap();

  let test_node = Node::new("Entity.NullableFlag == null");
  let x_node = Node::new("Entity.X");
  let y_node = Node::new("Entity.Y");
  let expected = DecisionGraph {
    nodes: vec![test_node.clone(), x_node.clone(), y_node.clone()],
    vertices: vec![
      entry_to(&test_node),
      true_edge(&test_node, &x_node),
      false_edge(&test_node, &y_node),
    ],
  };

  assert!(same_as(&expected, &actual).unwrap());
}

#[test]
fn enum_comparison_uses_member_names() {
  // (int)e.Day == 1 normalizes to Entity.Day == Monday.
  let day = Expr::member(entity(), "Day", Ty::Enum(day_of_week()));
  let expr = Expr::conditional(
    Expr::binary(
      BinaryOp::Eq,
      Expr::convert(day, Ty::Int),
      Expr::int(1),
    ),
    int_field("X"),
    int_field("Y"),
  );
  let actual = build(&expr).unwrap();

  let test_node = Node::new("Entity.Day == Monday");
  let x_node = Node::new("Entity.X");
  let y_node = Node::new("Entity.Y");
  let expected = DecisionGraph {
    nodes: vec![test_node.clone(), x_node.clone(), y_node.clone()],
    vertices: vec![
      entry_to(&test_node),
      true_edge(&test_node, &x_node),
      false_edge(&test_node, &y_node),
    ],
  };

  assert!(same_as(&expected, &actual).unwrap());
}

#[test]
fn enum_constant_on_the_left_also_normalizes() {
  let day = Expr::member(entity(), "Day", Ty::Enum(day_of_week()));
  let expr = Expr::binary(BinaryOp::Eq, Expr::int(2), Expr::convert(day, Ty::Int));
  let actual = build(&expr).unwrap();

  let node = Node::new("Tuesday == Entity.Day");
  let mut vertices = vec![entry_to(&node)];
  vertices.extend(decision(&node));
  let expected = DecisionGraph {
    nodes: vec![node],
    vertices,
  };

  assert!(same_as(&expected, &actual).unwrap());
}

#[test]
fn comparison_of_two_multi_node_graphs_fails() {
  let ternary = || Expr::conditional(flag(), int_field("X"), int_field("Y"));
  let expr = Expr::binary(BinaryOp::Eq, ternary(), ternary());
  assert_eq!(build(&expr).unwrap_err(), GraphError::UnsupportedComparison);
}

#[test]
fn build_boolean_coerces_value_results() {
  let actual = build_boolean(&int_field("X")).unwrap();

  let root = actual.entry_vertex().unwrap().target;
  let out = actual.outgoing_vertices(&root);
  assert_eq!(out.len(), 2);
  assert_eq!(out[0].kind, VertexKind::True);
  assert_eq!(out[1].kind, VertexKind::False);
}

#[test]
fn every_built_boolean_graph_has_decision_shape() {
  let expr = Expr::binary(
    BinaryOp::OrElse,
    Expr::binary(BinaryOp::Ne, int_field("Z"), Expr::int(1)),
    Expr::conditional(
      Expr::binary(BinaryOp::Eq, name_field(), Expr::string("Bob")),
      Expr::binary(BinaryOp::Gt, int_field("X"), Expr::int(0)),
      Expr::not(Expr::binary(
        BinaryOp::AndAlso,
        Expr::binary(BinaryOp::Le, int_field("Y"), Expr::int(1)),
        flag(),
      )),
    ),
  );
  let graph = build(&expr).unwrap();

  assert!(graph.entry_vertex().is_ok());
  for node in &graph.nodes {
    let out = graph.outgoing_vertices(node);
    assert_eq!(out.len(), 2, "node {} is not a decision node", node.label());
    assert_eq!(out[0].kind, VertexKind::True);
    assert_eq!(out[1].kind, VertexKind::False);
  }
}
