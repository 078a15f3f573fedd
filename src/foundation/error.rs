pub type WaypathResult<T> = Result<T, WaypathError>;

#[derive(thiserror::Error, Debug)]
pub enum WaypathError {
    /// The document declares a version this build does not know about.
    /// There is no upgrade path, so the file cannot be opened.
    #[error("unknown document version: {0}")]
    UnknownVersion(String),

    /// The document body does not deserialize as its declared version.
    #[error("document parse error: {0}")]
    Parse(String),

    /// The upgrade loop exceeded the number of registered versions.
    /// Indicates a corrupted registry, not bad user data.
    #[error("migration did not converge; version registry is inconsistent")]
    MigrationCycle,

    #[error("validation error: {0}")]
    Validation(String),

    #[error("sampling error: {0}")]
    Sampling(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WaypathError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn sampling(msg: impl Into<String>) -> Self {
        Self::Sampling(msg.into())
    }
}
