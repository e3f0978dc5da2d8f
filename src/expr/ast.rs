//! The expression AST consumed by the builder.
//!
//! A tagged union over the node kinds the builder dispatches on, plus the
//! two capabilities the graph layer needs from it: the static type of any
//! node ([`Expr::ty`]) and a canonical text rendering ([`Expr::render`]).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BinaryOp, EnumTy, Ty};

/// A constant literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
  Bool(bool),
  Int(i64),
  Float(f64),
  Str(String),
  /// A symbolic enum constant, produced by the builder's enum-comparison
  /// normalization so labels show the member name, not its underlying value.
  Enum(EnumTy, String),
  Null,
}

/// The receiver of a method call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Receiver {
  /// Static call; renders as `TypeName.Method(...)`.
  Static(String),
  Instance(Box<Expr>),
}

/// An expression tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
  Constant(Literal),
  Parameter {
    name: String,
    ty: Ty,
  },
  Member {
    target: Box<Expr>,
    name: String,
    ty: Ty,
  },
  Call {
    receiver: Receiver,
    method: String,
    args: Vec<Expr>,
    ty: Ty,
  },
  Not(Box<Expr>),
  Binary {
    op: BinaryOp,
    left: Box<Expr>,
    right: Box<Expr>,
  },
  Conditional {
    test: Box<Expr>,
    if_true: Box<Expr>,
    if_false: Box<Expr>,
  },
  /// A widening conversion, e.g. an enum value lifted to its underlying
  /// integer type for a comparison.
  Convert {
    operand: Box<Expr>,
    ty: Ty,
  },
}

impl Expr {
  pub fn parameter(name: impl Into<String>, ty: Ty) -> Expr {
    Expr::Parameter {
      name: name.into(),
      ty,
    }
  }

  pub fn member(target: Expr, name: impl Into<String>, ty: Ty) -> Expr {
    Expr::Member {
      target: Box::new(target),
      name: name.into(),
      ty,
    }
  }

  pub fn call_static(
    type_name: impl Into<String>,
    method: impl Into<String>,
    args: Vec<Expr>,
    ty: Ty,
  ) -> Expr {
    Expr::Call {
      receiver: Receiver::Static(type_name.into()),
      method: method.into(),
      args,
      ty,
    }
  }

  pub fn call_instance(target: Expr, method: impl Into<String>, args: Vec<Expr>, ty: Ty) -> Expr {
    Expr::Call {
      receiver: Receiver::Instance(Box::new(target)),
      method: method.into(),
      args,
      ty,
    }
  }

  pub fn not(operand: Expr) -> Expr {
    Expr::Not(Box::new(operand))
  }

  pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
      op,
      left: Box::new(left),
      right: Box::new(right),
    }
  }

  pub fn conditional(test: Expr, if_true: Expr, if_false: Expr) -> Expr {
    Expr::Conditional {
      test: Box::new(test),
      if_true: Box::new(if_true),
      if_false: Box::new(if_false),
    }
  }

  pub fn convert(operand: Expr, ty: Ty) -> Expr {
    Expr::Convert {
      operand: Box::new(operand),
      ty,
    }
  }

  pub fn int(value: i64) -> Expr {
    Expr::Constant(Literal::Int(value))
  }

  pub fn boolean(value: bool) -> Expr {
    Expr::Constant(Literal::Bool(value))
  }

  pub fn string(value: impl Into<String>) -> Expr {
    Expr::Constant(Literal::Str(value.into()))
  }

  pub fn null() -> Expr {
    Expr::Constant(Literal::Null)
  }

  pub fn enum_member(ty: EnumTy, member: impl Into<String>) -> Expr {
    Expr::Constant(Literal::Enum(ty, member.into()))
  }

  /// The static type of this node.
  pub fn ty(&self) -> Ty {
    match self {
      Expr::Constant(literal) => match literal {
        Literal::Bool(_) => Ty::Bool,
        Literal::Int(_) => Ty::Int,
        Literal::Float(_) => Ty::Float,
        Literal::Str(_) => Ty::Str,
        Literal::Enum(enum_ty, _) => Ty::Enum(enum_ty.clone()),
        Literal::Null => Ty::object("Object"),
      },
      Expr::Parameter { ty, .. } => ty.clone(),
      Expr::Member { ty, .. } => ty.clone(),
      Expr::Call { ty, .. } => ty.clone(),
      Expr::Not(_) => Ty::Bool,
      Expr::Binary { op, left, .. } => {
        if op.is_comparison() || op.is_and() || op.is_or() {
          Ty::Bool
        } else {
          left.ty()
        }
      }
      Expr::Conditional { if_true, .. } => if_true.ty(),
      Expr::Convert { ty, .. } => ty.clone(),
    }
  }

  /// Canonical text of this expression, with the outermost parentheses of a
  /// composite node trimmed — labels read `a + b`, not `(a + b)`, while
  /// nested composites stay parenthesized.
  pub fn render(&self) -> String {
    match self {
      Expr::Binary { op, left, right } => {
        format!("{} {} {}", left.text(), op.symbol(), right.text())
      }
      Expr::Conditional {
        test,
        if_true,
        if_false,
      } => format!(
        "{} ? {} : {}",
        test.text(),
        if_true.text(),
        if_false.text()
      ),
      _ => self.text(),
    }
  }

  /// Fully parenthesized text, used for nested positions.
  fn text(&self) -> String {
    match self {
      Expr::Constant(literal) => literal.to_string(),
      Expr::Parameter { name, .. } => name.clone(),
      Expr::Member { target, name, ty } => {
        // Mask members of an optional wrapper with the wrapped access, so
        // labels never leak wrapper-internal member names.
        if is_nullable_member(target, ty) {
          target.text()
        } else {
          format!("{}.{}", target.text(), name)
        }
      }
      Expr::Call {
        receiver,
        method,
        args,
        ..
      } => {
        let rendered_args: Vec<String> = args.iter().map(|a| a.text()).collect();
        let receiver = match receiver {
          Receiver::Static(type_name) => type_name.clone(),
          Receiver::Instance(target) => target.text(),
        };
        format!("{}.{}({})", receiver, method, rendered_args.join(", "))
      }
      Expr::Not(operand) => format!("!{}", operand.text()),
      Expr::Binary { op, left, right } => {
        format!("({} {} {})", left.text(), op.symbol(), right.text())
      }
      Expr::Conditional {
        test,
        if_true,
        if_false,
      } => format!(
        "({} ? {} : {})",
        test.text(),
        if_true.text(),
        if_false.text()
      ),
      Expr::Convert { operand, .. } => operand.text(),
    }
  }
}

/// True when `ty` is the value wrapped by `target`'s optional type: the
/// member is an internal accessor of the wrapper, not a real field.
fn is_nullable_member(target: &Expr, ty: &Ty) -> bool {
  match target.ty() {
    Ty::Nullable(inner) => *inner == *ty,
    _ => false,
  }
}

impl fmt::Display for Literal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Literal::Bool(true) => write!(f, "True"),
      Literal::Bool(false) => write!(f, "False"),
      Literal::Int(value) => write!(f, "{}", value),
      Literal::Float(value) => write!(f, "{}", value),
      Literal::Str(value) => write!(f, "\"{}\"", value),
      Literal::Enum(_, member) => write!(f, "{}", member),
      Literal::Null => write!(f, "null"),
    }
  }
}

impl fmt::Display for Expr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.render())
  }
}
