use thiserror::Error;

/// Errors raised by sequence operations.
///
/// Operations with a well-defined result on empty input (`contains`,
/// `sum_all`, `concat` and friends) never fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The operation has no result for an empty sequence.
    #[error("{operation}: input sequence is empty")]
    EmptyInput {
        /// Name of the operation that was called.
        operation: &'static str,
    },
    /// An element could not be parsed as a number.
    ///
    /// Conversion stops at the first failing element; no partial output is
    /// produced.
    #[error("cannot parse element {index} ({value:?}) as an integer")]
    Parse {
        /// Position of the offending element in the input.
        index: usize,
        /// The offending element.
        value: String,
        #[source]
        source: lexical::Error,
    },
}

impl Error {
    pub(crate) fn empty_input(operation: &'static str) -> Self {
        tracing::debug!(operation, "empty input sequence");
        Error::EmptyInput { operation }
    }

    /// Whether this error reports an empty input sequence.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::EmptyInput { .. })
    }

    /// Whether this error reports a string that did not parse.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
