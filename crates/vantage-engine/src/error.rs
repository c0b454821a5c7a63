//! Engine-level errors.

/// Errors that can occur while configuring or running the engine.
///
/// [`crate::eval::ml::LogRegModel::load`] never constructs these — a
/// missing or malformed coefficient file is swallowed there and the
/// caller falls back to [`crate::eval::HandcraftedEval`]. These variants
/// cover the cases that do need to surface: a loaded model whose shape
/// doesn't match the position it's asked to score, and a malformed FEN at
/// a CLI/UCI boundary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A coefficient file named a feature set this build does not know
    /// how to compute.
    #[error("unknown feature set: {0}")]
    UnknownFeatureSet(String),

    /// A coefficient file's weight vector length did not match its
    /// declared feature names.
    #[error("coefficient shape mismatch: {weights} weights for {names} feature names")]
    ShapeMismatch {
        /// Number of weights found.
        weights: usize,
        /// Number of feature names found.
        names: usize,
    },

    /// A FEN string could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}
