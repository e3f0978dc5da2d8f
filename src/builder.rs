//! Bottom-up AST-to-graph builder.
//!
//! A recursive pass over [`Expr`]: leaf kinds become single-node graphs,
//! everything else builds its children's graphs and hands them to an algebra
//! operator. Unrecognized binary operators are not an error; they fall back
//! to an opaque leaf labeled with the whole sub-expression.

use tracing::{debug, instrument};

use crate::expr::{BinaryOp, Expr, Literal, Ty};
use crate::rename::rename_parameters;
use crate::types::{BooleanGraph, DecisionGraph, GraphError};

/// Builds the decision graph for `expr`.
///
/// Runs the parameter-rename pre-pass, then the main bottom-up traversal.
/// Boolean-typed results are boolean-shaped (wired to the True/False sinks);
/// value results keep their plain leaves.
#[instrument(level = "trace", skip(expr))]
pub fn build(expr: &Expr) -> Result<DecisionGraph, GraphError> {
  let expr = rename_parameters(expr.clone());
  let graph = build_graph(&expr)?;
  debug!(
    nodes = graph.nodes.len(),
    vertices = graph.vertices.len(),
    "built decision graph"
  );
  Ok(graph)
}

/// Builds `expr` and coerces the result into a boolean graph.
#[instrument(level = "trace", skip(expr))]
pub fn build_boolean(expr: &Expr) -> Result<BooleanGraph, GraphError> {
  let expr = rename_parameters(expr.clone());
  boolean_graph(&expr)
}

fn build_graph(expr: &Expr) -> Result<DecisionGraph, GraphError> {
  match expr {
    Expr::Constant(_) | Expr::Parameter { .. } | Expr::Member { .. } | Expr::Call { .. } => {
      Ok(leaf(expr))
    }
    Expr::Not(operand) => Ok(boolean_graph(operand)?.not().into_inner()),
    Expr::Binary { op, left, right } => build_binary(expr, *op, left, right),
    Expr::Conditional {
      test,
      if_true,
      if_false,
    } => boolean_graph(test)?.conditional(build_graph(if_true)?, build_graph(if_false)?),
    // A conversion adds nothing to the decision structure; graph its operand.
    Expr::Convert { operand, .. } => build_graph(operand),
  }
}

fn boolean_graph(expr: &Expr) -> Result<BooleanGraph, GraphError> {
  Ok(build_graph(expr)?.as_boolean())
}

fn build_binary(
  expr: &Expr,
  op: BinaryOp,
  left: &Expr,
  right: &Expr,
) -> Result<DecisionGraph, GraphError> {
  if op.is_comparison() {
    let (left, right) = normalize_enum_comparison(left, right);
    let compared = build_graph(&left)?.compare(op, build_graph(&right)?)?;
    Ok(compared.into_inner())
  } else if op.is_and() {
    let combined = boolean_graph(left)?.and(boolean_graph(right)?)?;
    Ok(combined.into_inner())
  } else if op.is_or() {
    let combined = boolean_graph(left)?.or(boolean_graph(right)?)?;
    Ok(combined.into_inner())
  } else {
    // Deliberate refusal to decompose: any other binary operator becomes an
    // opaque leaf rendering the whole sub-expression.
    Ok(DecisionGraph::with_root(expr.render()))
  }
}

/// Rewrites `(widen(enum_value)) <op> int_constant` so the constant side is
/// the symbolic enum member of the converted side's declared type. Labels
/// then show `Entity.Day == Monday`, not `Entity.Day == 1`. Comparisons with
/// no enum conversion, or with a value no member maps to, pass through.
fn normalize_enum_comparison(left: &Expr, right: &Expr) -> (Expr, Expr) {
  if let (Some((operand, enum_ty)), Some(value)) = (enum_conversion(left), int_constant(right)) {
    if let Some(member) = enum_ty.member_by_value(value) {
      let member = member.to_string();
      return (operand.clone(), Expr::enum_member(enum_ty, member));
    }
  }

  if let (Some(value), Some((operand, enum_ty))) = (int_constant(left), enum_conversion(right)) {
    if let Some(member) = enum_ty.member_by_value(value) {
      let member = member.to_string();
      return (Expr::enum_member(enum_ty, member), operand.clone());
    }
  }

  (left.clone(), right.clone())
}

/// The pre-conversion operand and its declared enum type, if `expr` is a
/// widening conversion of an enumerated value.
fn enum_conversion(expr: &Expr) -> Option<(&Expr, crate::expr::EnumTy)> {
  if let Expr::Convert { operand, .. } = expr {
    if let Ty::Enum(enum_ty) = operand.ty() {
      return Some((operand, enum_ty));
    }
  }
  None
}

fn int_constant(expr: &Expr) -> Option<i64> {
  if let Expr::Constant(Literal::Int(value)) = expr {
    Some(*value)
  } else {
    None
  }
}

/// A single-node graph for a leaf expression; boolean-typed leaves are
/// immediately wired to the sinks so they behave as predicates.
fn leaf(expr: &Expr) -> DecisionGraph {
  let label = expr.render();
  if expr.ty().is_bool() {
    BooleanGraph::with_root(label).into_inner()
  } else {
    DecisionGraph::with_root(label)
  }
}
