use thiserror::Error;

/// Errors produced while reading a model in the UAI competition format.
///
/// Every variant is terminal: the build aborts on the first violation and no
/// partially constructed graph is ever returned.
#[derive(Debug, Error)]
pub enum UaiError {
    /// A whitespace-delimited chunk could not be parsed as the number the
    /// grammar requires at that position.
    #[error("token {index} at byte {offset}: '{token}' is not a valid {expected}")]
    MalformedToken {
        token: String,
        index: usize,
        offset: u64,
        expected: &'static str,
    },

    /// A factor scope names a variable index outside the declared range.
    #[error(
        "factor {factor} references variable {variable}, but only {num_variables} variables are declared"
    )]
    InvalidReference {
        factor: usize,
        variable: usize,
        num_variables: usize,
    },

    /// A declared table size disagrees with the product of the factor's
    /// neighbor cardinalities.
    #[error(
        "factor {factor}: declared table size {declared} does not match the product of neighbor cardinalities ({expected})"
    )]
    TableSizeMismatch {
        factor: usize,
        declared: usize,
        expected: usize,
    },

    /// The stream ended before the grammar was complete.
    #[error("unexpected end of input at byte {offset} while reading {expected}")]
    UnexpectedEndOfInput { offset: u64, expected: &'static str },

    /// A count or cardinality is outside its allowed range.
    #[error("invalid {what}: {value}")]
    InvalidCount { what: &'static str, value: i64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
