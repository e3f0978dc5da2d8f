//! Parameter-rename pre-pass.
//!
//! Rewrites every free-variable reference to its declared type's name so
//! generated labels read `Entity.Flag` instead of `e.Flag`. Label-only: the
//! graph shape is unaffected.

use crate::expr::{Expr, Receiver};

/// Rebuilds `expr` with every parameter renamed to its type name.
pub fn rename_parameters(expr: Expr) -> Expr {
  match expr {
    Expr::Parameter { ty, .. } => {
      let name = ty.name().to_string();
      Expr::Parameter { name, ty }
    }
    Expr::Constant(_) => expr,
    Expr::Member { target, name, ty } => Expr::Member {
      target: Box::new(rename_parameters(*target)),
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
        Receiver::Instance(target) => Receiver::Instance(Box::new(rename_parameters(*target))),
      },
      method,
      args: args.into_iter().map(rename_parameters).collect(),
      ty,
    },
    Expr::Not(operand) => Expr::Not(Box::new(rename_parameters(*operand))),
    Expr::Binary { op, left, right } => Expr::Binary {
      op,
      left: Box::new(rename_parameters(*left)),
      right: Box::new(rename_parameters(*right)),
    },
    Expr::Conditional {
      test,
      if_true,
      if_false,
    } => Expr::Conditional {
      test: Box::new(rename_parameters(*test)),
      if_true: Box::new(rename_parameters(*if_true)),
      if_false: Box::new(rename_parameters(*if_false)),
    },
    Expr::Convert { operand, ty } => Expr::Convert {
      operand: Box::new(rename_parameters(*operand)),
      ty,
    },
  }
}
