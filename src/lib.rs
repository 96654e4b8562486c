pub mod graph;
pub mod uai;

pub use graph::models::{FactorGraph, FactorId, FactorNode, Variable, VariableId, VariableNode};
pub use uai::UaiError;
