//! Binary operator taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators the builder can encounter. `And`/`Or` are the eager
/// forms, `AndAlso`/`OrElse` the short-circuit forms; the builder treats each
/// pair identically, but the distinction is preserved so source text renders
/// faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
  And,
  AndAlso,
  Or,
  OrElse,
  Eq,
  Ne,
  Lt,
  Le,
  Gt,
  Ge,
  Add,
  Sub,
  Mul,
  Div,
}

impl BinaryOp {
  /// True for both the eager and short-circuit AND forms.
  pub fn is_and(self) -> bool {
    matches!(self, BinaryOp::And | BinaryOp::AndAlso)
  }

  /// True for both the eager and short-circuit OR forms.
  pub fn is_or(self) -> bool {
    matches!(self, BinaryOp::Or | BinaryOp::OrElse)
  }

  pub fn is_comparison(self) -> bool {
    matches!(
      self,
      BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge
    )
  }

  /// Operator text used in rendered labels.
  pub fn symbol(self) -> &'static str {
    match self {
      BinaryOp::And => "&",
      BinaryOp::AndAlso => "&&",
      BinaryOp::Or => "|",
      BinaryOp::OrElse => "||",
      BinaryOp::Eq => "==",
      BinaryOp::Ne => "!=",
      BinaryOp::Lt => "<",
      BinaryOp::Le => "<=",
      BinaryOp::Gt => ">",
      BinaryOp::Ge => ">=",
      BinaryOp::Add => "+",
      BinaryOp::Sub => "-",
      BinaryOp::Mul => "*",
      BinaryOp::Div => "/",
    }
  }

  /// The comparison holding exactly when this one fails; identity for
  /// non-comparisons. Used by the not-reducer.
  pub fn negated(self) -> BinaryOp {
    match self {
      BinaryOp::Eq => BinaryOp::Ne,
      BinaryOp::Ne => BinaryOp::Eq,
      BinaryOp::Lt => BinaryOp::Ge,
      BinaryOp::Le => BinaryOp::Gt,
      BinaryOp::Gt => BinaryOp::Le,
      BinaryOp::Ge => BinaryOp::Lt,
      other => other,
    }
  }

  /// De Morgan dual, preserving eager/short-circuit flavor; identity for
  /// non-logical operators.
  pub fn dual(self) -> BinaryOp {
    match self {
      BinaryOp::And => BinaryOp::Or,
      BinaryOp::AndAlso => BinaryOp::OrElse,
      BinaryOp::Or => BinaryOp::And,
      BinaryOp::OrElse => BinaryOp::AndAlso,
      other => other,
    }
  }
}

impl fmt::Display for BinaryOp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}
