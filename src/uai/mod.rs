pub mod builder;
pub mod error;
pub mod tokenizer;

pub use error::UaiError;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::graph::models::FactorGraph;

impl FactorGraph {
    /// Reads a UAI-format model from the file at `path`.
    ///
    /// The file handle is released when the call returns, on success and on
    /// failure alike.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, UaiError> {
        let file = File::open(path)?;
        builder::build(BufReader::new(file))
    }

    /// Reads a UAI-format model from an already-open stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, UaiError> {
        builder::build(BufReader::new(reader))
    }

    /// Reads a UAI-format model from standard input.
    pub fn from_stdin() -> Result<Self, UaiError> {
        let stdin = io::stdin();
        builder::build(stdin.lock())
    }
}
