//! Tests for the negation-reduction pre-pass.

use crate::builder::build;
use crate::equivalence::same_as;
use crate::expr::{BinaryOp, Expr, Ty};
use crate::not_reducer::reduce_not;

fn flag() -> Expr {
  Expr::member(Expr::parameter("e", Ty::object("Entity")), "Flag", Ty::Bool)
}

fn x_gt(value: i64) -> Expr {
  Expr::binary(
    BinaryOp::Gt,
    Expr::member(Expr::parameter("e", Ty::object("Entity")), "X", Ty::Int),
    Expr::int(value),
  )
}

#[test]
fn negated_comparison_flips_the_operator() {
  let reduced = reduce_not(Expr::not(x_gt(0)));
  assert_eq!(reduced.render(), "e.X <= 0");
}

#[test]
fn double_negation_cancels() {
  let reduced = reduce_not(Expr::not(Expr::not(x_gt(0))));
  assert_eq!(reduced.render(), "e.X > 0");
}

#[test]
fn de_morgan_on_conjunctions() {
  let expr = Expr::not(Expr::binary(BinaryOp::AndAlso, x_gt(0), x_gt(1)));
  let reduced = reduce_not(expr);
  assert_eq!(reduced.render(), "(e.X <= 0) || (e.X <= 1)");
}

#[test]
fn de_morgan_on_disjunctions() {
  let expr = Expr::not(Expr::binary(BinaryOp::OrElse, x_gt(0), x_gt(1)));
  let reduced = reduce_not(expr);
  assert_eq!(reduced.render(), "(e.X <= 0) && (e.X <= 1)");
}

#[test]
fn non_distributable_negation_is_kept() {
  let reduced = reduce_not(Expr::not(flag()));
  assert_eq!(reduced.render(), "!e.Flag");
}

#[test]
fn reduction_preserves_graph_semantics() {
  // !(a && b) reduced should build the same graph as !a || !b.
  let negated = Expr::not(Expr::binary(BinaryOp::AndAlso, flag(), x_gt(0)));
  let reduced_graph = build(&reduce_not(negated)).unwrap();

  let spelled_out = Expr::binary(
    BinaryOp::OrElse,
    Expr::not(flag()),
    Expr::binary(
      BinaryOp::Le,
      Expr::member(Expr::parameter("e", Ty::object("Entity")), "X", Ty::Int),
      Expr::int(0),
    ),
  );
  let expected_graph = build(&spelled_out).unwrap();

  assert!(same_as(&expected_graph, &reduced_graph).unwrap());
}
