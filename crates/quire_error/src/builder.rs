//! Page set construction errors.

/// Specific construction error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// No pages were supplied.
    #[display("Paginator requires at least one page")]
    EmptyPages,

    /// Fields per page must be positive.
    #[display("Invalid fields per page: {}", _0)]
    InvalidFieldsPerPage(usize),

    /// Split size must be positive.
    #[display("Invalid split size: {}", _0)]
    InvalidSplit(usize),

    /// Only flat text pages can be regrouped.
    #[display("Pages can only be split when they are flat text")]
    SplitRequiresFlatPages,
}

/// Builder error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Create a new builder error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}
