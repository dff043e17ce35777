// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use geom2graph_core::GraphError;
use thiserror::Error;

/// Errors raised while reading WKT or TGF text.
///
/// `line` is 1-based and counts every physical line of the input, including
/// blank lines that were skipped.
#[derive(Debug, Error)]
pub enum ReadError {
    /// A line did not parse as WKT.
    #[error("line {line}: invalid WKT: {message}")]
    Wkt {
        /// Line number of the offending geometry.
        line: usize,
        /// Parser diagnostic.
        message: String,
    },
    /// A TGF node or edge record was malformed.
    #[error("line {line}: invalid TGF: {message}")]
    Tgf {
        /// Line number of the offending record.
        line: usize,
        /// What was wrong with the record.
        message: String,
    },
    /// The records parsed but do not form a graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadError {
    pub(crate) fn tgf(line: usize, message: impl Into<String>) -> Self {
        Self::Tgf { line, message: message.into() }
    }
}
