pub mod models;

pub use models::{FactorGraph, FactorId, FactorNode, Variable, VariableId, VariableNode};
