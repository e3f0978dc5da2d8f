//! Negation-reduction pre-pass.
//!
//! Structurally pushes `!` inward: comparisons flip their operator, logical
//! connectives take their De Morgan dual, and double negations cancel. Not
//! invoked by the builder; callers can apply it first when they want fewer
//! explicit negation wrappers in the resulting graph. Negations that cannot
//! be distributed (e.g. over a bare member access) are kept in place.

use crate::expr::{Expr, Receiver};

/// Rebuilds `expr` with negations pushed as far inward as they will go.
pub fn reduce_not(expr: Expr) -> Expr {
  reduce(expr, false)
}

fn reduce(expr: Expr, negated: bool) -> Expr {
  match expr {
    Expr::Not(operand) => reduce(*operand, !negated),
    Expr::Binary { op, left, right } if negated && op.is_comparison() => Expr::Binary {
      op: op.negated(),
      left: Box::new(reduce(*left, false)),
      right: Box::new(reduce(*right, false)),
    },
    Expr::Binary { op, left, right } if negated && (op.is_and() || op.is_or()) => Expr::Binary {
      op: op.dual(),
      left: Box::new(reduce(*left, true)),
      right: Box::new(reduce(*right, true)),
    },
    other => {
      let rebuilt = reduce_children(other);
      if negated {
        Expr::Not(Box::new(rebuilt))
      } else {
        rebuilt
      }
    }
  }
}

/// Recurses into sub-expressions without a negation context.
fn reduce_children(expr: Expr) -> Expr {
  match expr {
    Expr::Constant(_) | Expr::Parameter { .. } => expr,
    Expr::Member { target, name, ty } => Expr::Member {
      target: Box::new(reduce(*target, false)),
      name,
      ty,
    },
    Expr::Call {
      receiver,
      method,
      args,
      ty,
    } => Expr::Call {
      receiver: match receiver {
        Receiver::Static(type_name) => Receiver::Static(type_name),
        Receiver::Instance(target) => Receiver::Instance(Box::new(reduce(*target, false))),
      },
      method,
      args: args.into_iter().map(|a| reduce(a, false)).collect(),
      ty,
    },
    Expr::Not(operand) => reduce(*operand, true),
    Expr::Binary { op, left, right } => Expr::Binary {
      op,
      left: Box::new(reduce(*left, false)),
      right: Box::new(reduce(*right, false)),
    },
    Expr::Conditional {
      test,
      if_true,
      if_false,
    } => Expr::Conditional {
      test: Box::new(reduce(*test, false)),
      if_true: Box::new(reduce(*if_true, false)),
      if_false: Box::new(reduce(*if_false, false)),
    },
    Expr::Convert { operand, ty } => Expr::Convert {
      operand: Box::new(reduce(*operand, false)),
      ty,
    },
  }
}
