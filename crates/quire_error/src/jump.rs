//! Jump prompt outcomes that carry no page number.

/// Why a jump prompt produced no page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum JumpErrorKind {
    /// No integer reply arrived before the deadline.
    #[display("Timed out waiting for a page number")]
    TimedOut,

    /// The prompt was dropped before a reply arrived.
    #[display("Jump prompt cancelled")]
    Cancelled,
}

/// Jump prompt error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Jump Error: {} at line {} in {}", kind, line, file)]
pub struct JumpError {
    kind: JumpErrorKind,
    line: u32,
    file: &'static str,
}

impl JumpError {
    /// Create a new jump error with caller location tracking.
    #[track_caller]
    pub fn new(kind: JumpErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> JumpErrorKind {
        self.kind
    }
}
