//! Graph view of a resolved model.
//!
//! The model stores relationships on the entities themselves. This module
//! lifts them into a directed graph so that questions spanning several
//! entities, such as which component ends up serving another through an
//! interface, can be answered by traversal.

mod model_graph;

pub use model_graph::{ModelGraph, NodeKind, Relation, Wire};
