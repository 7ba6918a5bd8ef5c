use thiserror::Error;

/// Result type for solver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the dynamic programming solvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The problem instance is malformed (empty, ragged, mismatched, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No seeded greedy pass reduced the target to exactly zero
    #[error("No exact change for {target}: smallest greedy remainder is {remainder}")]
    UnsatisfiableRemainder { target: usize, remainder: usize },

    /// The instance is well formed but admits no solution
    #[error("No solution: {0}")]
    NoSolution(String),

    /// A running total exceeded the value type
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

impl Error {
    /// Builds an [`Error::InvalidInput`] from any message.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Builds an [`Error::Overflow`] naming the quantity that overflowed.
    pub fn overflow<S: Into<String>>(msg: S) -> Self {
        Error::Overflow(msg.into())
    }
}
