//! Expression AST: node kinds, static types, and canonical rendering.

mod ast;
mod op;
mod ty;

pub use ast::{Expr, Literal, Receiver};
pub use op::BinaryOp;
pub use ty::{EnumMember, EnumTy, Ty};
