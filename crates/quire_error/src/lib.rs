//! Error types for the Quire library.
//!
//! This crate provides the foundation error types used throughout the Quire workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use quire_error::{BuilderError, BuilderErrorKind, QuireResult};
//!
//! fn build_pages() -> QuireResult<()> {
//!     Err(BuilderError::new(BuilderErrorKind::EmptyPages))?
//! }
//!
//! assert!(build_pages().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod jump;
mod session;
mod transport;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{QuireError, QuireErrorKind, QuireResult};
pub use jump::{JumpError, JumpErrorKind};
pub use session::{SessionError, SessionErrorKind};
pub use transport::{TransportError, TransportErrorKind};
