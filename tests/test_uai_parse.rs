#[cfg(test)]
mod test_uai_parse {
    use std::io::Write;
    use uaigraph::{FactorGraph, UaiError};

    const SIMPLE_MARKOV: &str = "MARKOV\n2\n2 2\n1\n2 0 1\n4\n0.1 0.2 0.3 0.4\n";

    #[test]
    fn test_simple_markov_network() {
        let graph = FactorGraph::from_reader(SIMPLE_MARKOV.as_bytes()).unwrap();

        assert_eq!(graph.network_type(), "MARKOV");
        assert_eq!(graph.num_variables(), 2);
        assert_eq!(graph.num_factors(), 1);
        for variable in graph.variables() {
            assert_eq!(variable.cardinality(), 2);
            assert_eq!(variable.neighbors, vec![0]);
        }

        let factor = graph.factor(0).unwrap();
        assert_eq!(factor.neighbors, vec![0, 1]);
        assert_eq!(factor.shape(), &[2, 2]);
        let flat: Vec<f64> = factor.table.iter().copied().collect();
        assert_eq!(flat, vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_table_size_mismatch() {
        let input = "MARKOV\n2\n2 2\n1\n2 0 1\n3\n0.1 0.2 0.3\n";
        let err = FactorGraph::from_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            UaiError::TableSizeMismatch {
                factor: 0,
                declared: 3,
                expected: 4,
            }
        ));
    }

    #[test]
    fn test_scope_references_unknown_variable() {
        let input = "MARKOV\n2\n2 2\n1\n2 0 5\n4\n0.1 0.2 0.3 0.4\n";
        let err = FactorGraph::from_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            UaiError::InvalidReference {
                factor: 0,
                variable: 5,
                num_variables: 2,
            }
        ));
    }

    #[test]
    fn test_truncated_before_tables() {
        let input = "MARKOV\n2\n2 2\n1\n2 0 1\n";
        let err = FactorGraph::from_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(err, UaiError::UnexpectedEndOfInput { .. }));
    }

    #[test]
    fn test_truncated_inside_table() {
        let input = "MARKOV\n2\n2 2\n1\n2 0 1\n4\n0.1 0.2\n";
        let err = FactorGraph::from_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            UaiError::UnexpectedEndOfInput {
                expected: "table value",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_network() {
        let graph = FactorGraph::from_reader("MARKOV 0 0".as_bytes()).unwrap();
        assert_eq!(graph.num_variables(), 0);
        assert_eq!(graph.num_factors(), 0);
    }

    #[test]
    fn test_trailing_tokens_are_ignored() {
        let input = format!("{} trailing 42 garbage", SIMPLE_MARKOV);
        let graph = FactorGraph::from_reader(input.as_bytes()).unwrap();
        assert_eq!(graph.num_factors(), 1);
    }

    #[test]
    fn test_unknown_network_type_is_kept_verbatim() {
        let input = "MYSTERY\n1\n3\n0\n";
        let graph = FactorGraph::from_reader(input.as_bytes()).unwrap();
        assert_eq!(graph.network_type(), "MYSTERY");
        assert_eq!(graph.variable(0).unwrap().cardinality(), 3);
    }

    #[test]
    fn test_zero_cardinality_is_rejected() {
        let input = "MARKOV\n2\n2 0\n0\n";
        let err = FactorGraph::from_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            UaiError::InvalidCount {
                what: "variable cardinality",
                value: 0,
            }
        ));
    }

    #[test]
    fn test_negative_variable_count_is_rejected() {
        let err = FactorGraph::from_reader("MARKOV -1".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            UaiError::InvalidCount {
                what: "variable count",
                value: -1,
            }
        ));
    }

    #[test]
    fn test_malformed_table_value() {
        let input = "MARKOV\n1\n2\n1\n1 0\n2\n0.5 oops\n";
        let err = FactorGraph::from_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            UaiError::MalformedToken { ref token, expected: "table value", .. } if token == "oops"
        ));
    }

    #[test]
    fn test_identical_bytes_build_identical_graphs() {
        let first = FactorGraph::from_reader(SIMPLE_MARKOV.as_bytes()).unwrap();
        let second = FactorGraph::from_reader(SIMPLE_MARKOV.as_bytes()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SIMPLE_MARKOV.as_bytes()).unwrap();
        file.flush().unwrap();

        let graph = FactorGraph::from_file(file.path()).unwrap();
        assert_eq!(graph.num_variables(), 2);
        assert_eq!(graph.num_factors(), 1);
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let err = FactorGraph::from_file("/no/such/model.uai").unwrap_err();
        assert!(matches!(err, UaiError::Io(_)));
    }
}
