//! Static types carried by expression nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named member of an enumerated type and its underlying value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
  pub name: String,
  pub value: i64,
}

/// An enumerated type: a name plus its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumTy {
  pub name: String,
  pub members: Vec<EnumMember>,
}

impl EnumTy {
  pub fn new(name: impl Into<String>, members: Vec<(&str, i64)>) -> Self {
    Self {
      name: name.into(),
      members: members
        .into_iter()
        .map(|(name, value)| EnumMember {
          name: name.to_string(),
          value,
        })
        .collect(),
    }
  }

  /// Looks up the member name for an underlying value.
  pub fn member_by_value(&self, value: i64) -> Option<&str> {
    self
      .members
      .iter()
      .find(|m| m.value == value)
      .map(|m| m.name.as_str())
  }
}

/// The static type of an expression node. The builder only ever asks two
/// questions of a type: is it boolean, and what is it called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ty {
  Bool,
  Int,
  Float,
  Str,
  /// A record/object type, e.g. the entity a lambda parameter binds to.
  Object(String),
  Enum(EnumTy),
  /// An optional wrapper around a value type.
  Nullable(Box<Ty>),
}

impl Ty {
  pub fn object(name: impl Into<String>) -> Self {
    Ty::Object(name.into())
  }

  pub fn nullable(inner: Ty) -> Self {
    Ty::Nullable(Box::new(inner))
  }

  pub fn is_bool(&self) -> bool {
    matches!(self, Ty::Bool)
  }

  /// Display name, used by the parameter-rename pre-pass so labels read as
  /// `TypeName.Member`.
  pub fn name(&self) -> &str {
    match self {
      Ty::Bool => "Bool",
      Ty::Int => "Int",
      Ty::Float => "Float",
      Ty::Str => "String",
      Ty::Object(name) => name,
      Ty::Enum(e) => &e.name,
      Ty::Nullable(inner) => inner.name(),
    }
  }
}

impl fmt::Display for Ty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
