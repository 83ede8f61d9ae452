/// Convenience result type used across gridcut.
pub type GridcutResult<T> = Result<T, GridcutError>;

/// Top-level error taxonomy used by the crate's APIs.
#[derive(thiserror::Error, Debug)]
pub enum GridcutError {
    /// The input project lacks expected MLT structure (missing profile or
    /// tractor, non-numeric dimensions).
    #[error("malformed project: {0}")]
    MalformedProject(String),

    /// A track appended to the tractor could not be found again. Defensive
    /// invariant check; should be unreachable with correct sequencing.
    #[error("track not found: {0}")]
    TrackNotFound(String),

    /// Invalid layout parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by the XML parser.
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    /// Filesystem errors while reading or writing a project.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridcutError {
    /// Build a [`GridcutError::MalformedProject`] value.
    pub fn malformed_project(msg: impl Into<String>) -> Self {
        Self::MalformedProject(msg.into())
    }

    /// Build a [`GridcutError::TrackNotFound`] value.
    pub fn track_not_found(msg: impl Into<String>) -> Self {
        Self::TrackNotFound(msg.into())
    }

    /// Build a [`GridcutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
