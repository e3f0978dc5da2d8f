//! Decision-graph data model: nodes, vertices, and the graph containers.
//!
//! Identity is the only notion of equality for graph elements; labels are
//! display text. The Entry anchor and the True/False sinks are shared,
//! tag-identified sentinels that may be wired into many graphs at once.

mod boolean_graph;
mod decision_graph;
mod graph_error;
mod node;
mod vertex;
mod vertex_kind;

pub use boolean_graph::BooleanGraph;
pub use decision_graph::DecisionGraph;
pub use graph_error::GraphError;
pub use node::{Node, NodeId};
pub use vertex::Vertex;
pub use vertex_kind::VertexKind;
