//! UCI protocol errors.

/// Errors that can occur while parsing a line of UCI input.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The `position` command is missing its `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN: {fen}")]
    InvalidFen { fen: String },

    /// A move string in the `position ... moves` list could not be parsed
    /// or applied to the position reached so far.
    #[error("invalid move: {uci_move}")]
    InvalidMove { uci_move: String },

    /// `setoption name CoeffPath` was sent without a `value`.
    #[error("setoption CoeffPath is missing its value")]
    MissingOptionValue,

    /// An I/O error occurred while reading from stdin.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
