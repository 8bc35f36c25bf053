//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, JumpError, SessionError, TransportError};

/// Every error the Quire crates can surface to a caller.
///
/// # Examples
///
/// ```
/// use quire_error::{QuireError, TransportError, TransportErrorKind};
///
/// let err: QuireError = TransportError::new(TransportErrorKind::NotFound).into();
/// assert!(format!("{}", err).contains("Transport Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum QuireErrorKind {
    /// Page set construction error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Chat transport error
    #[from(TransportError)]
    Transport(TransportError),
    /// Jump prompt error
    #[from(JumpError)]
    Jump(JumpError),
    /// Session lifecycle error
    #[from(SessionError)]
    Session(SessionError),
}

/// Quire error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Quire Error: {}", _0)]
pub struct QuireError(Box<QuireErrorKind>);

impl QuireError {
    /// Create a new error from a kind.
    pub fn new(kind: QuireErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &QuireErrorKind {
        &self.0
    }
}

impl<T> From<T> for QuireError
where
    T: Into<QuireErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Quire operations.
pub type QuireResult<T> = std::result::Result<T, QuireError>;
