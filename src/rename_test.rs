//! Tests for the parameter-rename pre-pass.

use crate::expr::{BinaryOp, Expr, Ty};
use crate::rename::rename_parameters;

#[test]
fn parameter_takes_its_type_name() {
  let expr = Expr::parameter("e", Ty::object("Entity"));
  let renamed = rename_parameters(expr);
  assert_eq!(renamed.render(), "Entity");
}

#[test]
fn value_type_parameters_use_primitive_names() {
  let renamed = rename_parameters(Expr::parameter("i", Ty::Int));
  assert_eq!(renamed.render(), "Int");
}

#[test]
fn rename_reaches_nested_positions() {
  let e = || Expr::parameter("e", Ty::object("Entity"));
  let expr = Expr::binary(
    BinaryOp::Gt,
    Expr::member(e(), "X", Ty::Int),
    Expr::call_instance(Expr::member(e(), "Y", Ty::Int), "Abs", vec![], Ty::Int),
  );
  let renamed = rename_parameters(expr);
  assert_eq!(renamed.render(), "Entity.X > Entity.Y.Abs()");
}

#[test]
fn constants_are_untouched() {
  let renamed = rename_parameters(Expr::int(7));
  assert_eq!(renamed.render(), "7");
}
