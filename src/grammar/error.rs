use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A nonterminal was asked for its alternatives but heads no rule.
    #[error("undefined symbol `{0}`: no production has it on the left side")]
    UndefinedSymbol(String),
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
    #[error("start symbol is not set")]
    MissingStart,
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
