use std::io::BufRead;

use log::debug;
use ndarray::{ArrayD, IxDyn};

use crate::graph::models::{FactorGraph, FactorNode, VariableNode};
use crate::uai::error::UaiError;
use crate::uai::tokenizer::TokenReader;

/// Reads a UAI-format model from `input` and builds the factor graph.
///
/// The grammar is consumed in strictly linear phases: network-type preamble,
/// variable cardinalities, factor scopes, factor tables. Any structural
/// violation aborts the build and no partial graph is returned. Tokens left
/// over after the last table are ignored.
pub fn build<R: BufRead>(input: R) -> Result<FactorGraph, UaiError> {
    let mut tokens = TokenReader::new(input);

    // The preamble tag (e.g. MARKOV or BAYES) is kept verbatim; no inference
    // runs here, so an unknown tag is not an error.
    let network_type = tokens.expect_token("network type")?.text;
    debug!("reading {} network", network_type);

    let num_variables = tokens.expect_count("variable count")?;
    let mut variables = Vec::with_capacity(num_variables);
    for id in 0..num_variables {
        let cardinality = tokens.expect_integer("variable cardinality")?;
        if cardinality < 1 {
            return Err(UaiError::InvalidCount {
                what: "variable cardinality",
                value: cardinality,
            });
        }
        variables.push(VariableNode::new(id, cardinality as usize));
    }
    let mut graph = FactorGraph::new(network_type, variables);
    debug!("declared {} variables", num_variables);

    let num_factors = tokens.expect_count("factor count")?;

    // The UAI format lists every scope before any table, so the scopes are
    // retained as a pending list until the table phase fills them in.
    let mut scopes = Vec::with_capacity(num_factors);
    for factor in 0..num_factors {
        let scope_size = tokens.expect_count("factor scope size")?;
        let mut scope = Vec::with_capacity(scope_size);
        for _ in 0..scope_size {
            let variable = tokens.expect_count("variable index")?;
            if variable >= num_variables {
                return Err(UaiError::InvalidReference {
                    factor,
                    variable,
                    num_variables,
                });
            }
            scope.push(variable);
        }
        scopes.push(scope);
    }
    debug!("declared {} factor scopes", num_factors);

    for (factor, scope) in scopes.into_iter().enumerate() {
        let shape: Vec<usize> = scope
            .iter()
            .map(|&v| graph.variables()[v].cardinality())
            .collect();
        let expected = shape.iter().fold(1usize, |acc, &c| acc.saturating_mul(c));
        let declared = tokens.expect_count("factor table size")?;
        if declared != expected {
            return Err(UaiError::TableSizeMismatch {
                factor,
                declared,
                expected,
            });
        }
        let mut values = Vec::with_capacity(declared);
        for _ in 0..declared {
            values.push(tokens.expect_float("table value")?);
        }
        // UAI tables are row-major with the last scope variable varying
        // fastest, which is exactly ndarray's default layout.
        let table = ArrayD::from_shape_vec(IxDyn(&shape), values).map_err(|_| {
            UaiError::TableSizeMismatch {
                factor,
                declared,
                expected,
            }
        })?;
        graph.attach_factor(FactorNode {
            neighbors: scope,
            table,
        });
    }
    debug!(
        "built factor graph: {} variables, {} factors",
        graph.num_variables(),
        graph.num_factors()
    );

    Ok(graph)
}
