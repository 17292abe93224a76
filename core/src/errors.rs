//! Error types shared across the mohu workspace.

/// Crate-wide result type defaulting to [`MohuError`].
pub type Result<T, E = MohuError> = std::result::Result<T, E>;

/// Errors surfaced by index construction and matching.
///
/// Validation failures (`InvalidArgument`) are reported before any result is
/// produced; file errors (`Io`, `Json`, `InvalidData`) are fatal at load time.
#[derive(Debug, thiserror::Error)]
pub enum MohuError {
    /// A caller-supplied value is outside its documented domain.
    #[error("invalid argument: {arg}: {msg}")]
    InvalidArgument {
        /// Name of the offending argument.
        arg: &'static str,
        /// What was wrong with it.
        msg: String,
    },

    /// An I/O failure while reading a data file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A data file contained syntactically invalid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A data file parsed but violated its schema.
    #[error("invalid data in {source_name}: {msg}")]
    InvalidData {
        /// Human-readable origin of the data (usually a path).
        source_name: String,
        /// Schema violation description.
        msg: String,
    },
}

impl MohuError {
    /// Shorthand for an [`MohuError::InvalidArgument`].
    pub fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument {
            arg,
            msg: msg.into(),
        }
    }

    /// Shorthand for an [`MohuError::InvalidData`].
    pub fn invalid_data<S, M>(source_name: S, msg: M) -> Self
    where
        S: Into<String>,
        M: Into<String>,
    {
        Self::InvalidData {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }
}
