//! Collaborator traits for Quire.
//!
//! Pagination sessions never talk to a chat platform directly. They go through:
//!
//! - [`Transport`] - send, edit and delete messages, manage reaction affordances
//! - [`PermissionOracle`] - answer the single "may manage messages" question
//!
//! Inbound events flow the other way: a platform adapter pushes reactions and
//! replies into the session dispatcher.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod permission;
mod transport;

pub use permission::{AllowAll, DenyAll, PermissionOracle};
pub use transport::{Transport, TransportResult};
