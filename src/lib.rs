//! # decision-graph
//!
//! Compiles boolean/conditional expressions into decision graphs for visual
//! inspection: a single Entry anchor, decision nodes with True/False
//! outcomes, and shared True/False terminal sinks.
//!
//! ## Architecture
//!
//! The `types` module holds the graph model; the algebra (comparison,
//! conditional, negation, conjunction, disjunction, leaf canonicalization)
//! splices sub-graphs into larger ones; the builder walks an expression AST
//! bottom-up and drives the algebra. `dot` renders the result and
//! `equivalence` is the structural oracle the tests assert with.

pub mod algebra;
pub mod builder;
#[cfg(test)]
mod builder_test;
pub mod dot;
pub mod equivalence;
pub mod expr;
pub mod not_reducer;
#[cfg(test)]
mod not_reducer_test;
pub mod rename;
#[cfg(test)]
mod rename_test;
pub mod types;

pub use builder::{build, build_boolean};
pub use dot::to_dot;
pub use equivalence::same_as;
pub use types::{BooleanGraph, DecisionGraph, GraphError, Node, NodeId, Vertex, VertexKind};
