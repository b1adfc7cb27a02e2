use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathKindError {
    // Caller input
    #[error("invalid path type {0:?}: expected \"any\", \"file\", \"dir\" or \"directory\"")]
    InvalidPathType(String),

    #[error("malformed extension {0:?}: expected \"\", \".\", a group name, or text starting with \".\"")]
    MalformedExtension(String),

    #[error("no valid extensions given")]
    EmptyExtensionSpec,

    // Verdict
    #[error("{0}")]
    InvalidPath(String),
}

impl PathKindError {
    /// Whether this error comes from the shape of the arguments rather
    /// than from classifying the path.
    ///
    /// Caller errors surface before any classification runs and never appear
    /// in a [`Report`](crate::Report) log.
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, Self::InvalidPath(_))
    }
}
