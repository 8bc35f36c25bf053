//! Errors raised by chat transport collaborators.

/// Transport failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum TransportErrorKind {
    /// The target message or channel no longer exists.
    #[display("Target not found")]
    NotFound,

    /// The bot lacks permission for the call.
    #[display("Forbidden: {}", _0)]
    Forbidden(String),

    /// The platform asked us to back off.
    #[display("Rate limited: retry after {}ms", retry_after_ms)]
    RateLimited {
        /// Suggested delay before retrying, in milliseconds
        retry_after_ms: u64,
    },

    /// Any other request failure.
    #[display("Request failed: {}", _0)]
    Request(String),

    /// The transport has shut down.
    #[display("Transport closed")]
    Closed,
}

impl TransportErrorKind {
    /// Whether the session bound to the target can never be updated again.
    pub fn is_unrecoverable(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Transport error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The error kind
    pub kind: TransportErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl TransportError {
    /// Create a new TransportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the session bound to the target can never be updated again.
    pub fn is_unrecoverable(&self) -> bool {
        self.kind.is_unrecoverable()
    }
}
