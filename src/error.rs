use thiserror::Error;

use crate::graph::Vertex;

/// Errors raised while reading, writing or generating graph files.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("input is empty, expected the number of vertices on the first line")]
    MissingHeader,

    #[error("cannot parse vertex count `{token}` at input line {line}")]
    InvalidHeader { line: usize, token: String },

    #[error("cannot parse `{token}` at input line {line}")]
    InvalidToken { line: usize, token: String },

    #[error("malformed entry `{entry}` at input line {line}, expected `neighbour-weight`")]
    InvalidEntry { line: usize, entry: String },

    #[error("vertex {vertex} at input line {line} is outside of [0, {n})")]
    VertexOutOfRange { line: usize, vertex: Vertex, n: usize },

    #[error("row at input line {line} has {found} entries, expected {expected}")]
    RowLength { line: usize, expected: usize, found: usize },

    #[error("expected {expected} matrix rows, found {found}")]
    MissingRows { expected: usize, found: usize },

    #[error("invalid file `{0}`, the supported formats are `.txt.gz` and `.txt`")]
    UnsupportedFormat(String),

    #[error("{0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
