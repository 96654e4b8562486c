use ndarray::ArrayD;

/// Index of a variable node within its owning `FactorGraph`
pub type VariableId = usize;

/// Index of a factor node within its owning `FactorGraph`
pub type FactorId = usize;

/// A discrete random variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable {
    /// Position of the variable in declaration order
    pub id: VariableId,
    /// Number of values the variable can take (always >= 1)
    pub cardinality: usize,
}

/// Variable node of the bipartite graph
///
/// Adjacency is stored as indices into the owning graph's factor list rather
/// than as references, so the graph remains the single owner of every node.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableNode {
    /// The variable this node wraps
    pub variable: Variable,
    /// Adjacent factors, in the order the factors were attached
    pub neighbors: Vec<FactorId>,
}

impl VariableNode {
    pub fn new(id: VariableId, cardinality: usize) -> Self {
        Self {
            variable: Variable { id, cardinality },
            neighbors: Vec::new(),
        }
    }

    /// Number of values this node's variable can take
    pub fn cardinality(&self) -> usize {
        self.variable.cardinality
    }
}

/// Factor node of the bipartite graph
///
/// The order of `neighbors` is the order the scope was declared in, and each
/// table dimension corresponds to the neighbor at the same position: axis 0 is
/// `neighbors[0]`, axis 1 is `neighbors[1]`, and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorNode {
    /// Adjacent variables, in declared scope order
    pub neighbors: Vec<VariableId>,
    /// Function table over the neighbor variables, one axis per neighbor
    pub table: ArrayD<f64>,
}

impl FactorNode {
    /// Shape of the factor table, one extent per neighbor
    pub fn shape(&self) -> &[usize] {
        self.table.shape()
    }
}

/// A factor graph: a bipartite graph whose node kinds are variables and
/// factors, with edges only between the two kinds.
///
/// The graph owns every node; nodes refer to each other only through indices
/// into the owning vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorGraph {
    network_type: String,
    variables: Vec<VariableNode>,
    factors: Vec<FactorNode>,
}

impl FactorGraph {
    pub(crate) fn new(network_type: String, variables: Vec<VariableNode>) -> Self {
        Self {
            network_type,
            variables,
            factors: Vec::new(),
        }
    }

    pub(crate) fn attach_factor(&mut self, factor: FactorNode) -> FactorId {
        let id = self.factors.len();
        for &var in &factor.neighbors {
            self.variables[var].neighbors.push(id);
        }
        self.factors.push(factor);
        id
    }

    /// The network-type tag from the file preamble, verbatim (e.g. "MARKOV")
    pub fn network_type(&self) -> &str {
        &self.network_type
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_factors(&self) -> usize {
        self.factors.len()
    }

    /// All variable nodes, in declaration order
    pub fn variables(&self) -> &[VariableNode] {
        &self.variables
    }

    /// All factor nodes, in declaration order
    pub fn factors(&self) -> &[FactorNode] {
        &self.factors
    }

    pub fn variable(&self, id: VariableId) -> Option<&VariableNode> {
        self.variables.get(id)
    }

    pub fn factor(&self, id: FactorId) -> Option<&FactorNode> {
        self.factors.get(id)
    }
}
