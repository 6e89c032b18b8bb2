//! Errors raised while deriving build descriptors.

/// Result type for descriptor generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Which required declaration field was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Misconfiguration {
    #[error("entry file is empty")]
    EmptyEntryFile,
    #[error("display name is empty")]
    EmptyDisplayName,
    #[error("output base name is empty")]
    EmptyOutputBaseName,
}

/// Error type for descriptor generation.
///
/// Missing entry files, syntax errors and minifier failures belong to the
/// external bundler and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A package declaration cannot produce targets. Generation stops at this
    /// package rather than silently omitting it.
    #[error("misconfigured package '{package}': {reason}")]
    MisconfiguredPackage {
        package: String,
        reason: Misconfiguration,
    },
}

impl Error {
    /// Name of the package that failed.
    pub fn package(&self) -> &str {
        match self {
            Self::MisconfiguredPackage { package, .. } => package,
        }
    }
}
