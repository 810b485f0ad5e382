/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when resolving cards or spreads.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No card matches the given name or key.
    #[error("unknown card: \"{0}\"")]
    UnknownCard(String),

    /// No spread layout has the given id.
    #[error("unknown spread: \"{0}\"")]
    UnknownSpread(String),
}
