//! Quire - reaction-driven pagination for chat bots
//!
//! Quire turns a list of strings, embed fields or whole embeds into a single
//! message that users page through by reacting with navigation emoji. The
//! library tracks each live message as a session, applies reactions to it one
//! at a time, and supports a jump-to-page prompt answered in chat.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use quire::{
//!     AllowAll, ChannelId, ActorId, ConsoleTransport, PaginatorBuilder, QuireConfig,
//!     Session, SessionContext, SessionDispatcher,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = QuireConfig::load()?;
//!     let paginator = PaginatorBuilder::new()
//!         .with_pages(vec!["one", "two", "three"])
//!         .with_title("Numbers")
//!         .with_options(config.paginator.display_options())
//!         .build()?;
//!
//!     let dispatcher = SessionDispatcher::new(Arc::new(ConsoleTransport::new()), Arc::new(AllowAll));
//!     let context = SessionContext::new(ChannelId(1), ActorId(1));
//!     let handle = dispatcher.display(Session::new(paginator, context)).await?;
//!     println!("Showing {}", handle);
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `discord` - serenity transport, permission oracle and event handler
//!
//! # Architecture
//!
//! - `quire_error` - Error types
//! - `quire_core` - Identifiers, payloads and input events
//! - `quire_interface` - `Transport` and `PermissionOracle` traits
//! - `quire_pages` - Page sets, display options and rendering
//! - `quire_session` - Navigation state machine, jump prompts and dispatch
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use quire_core::*;
pub use quire_error::*;
pub use quire_interface::*;
pub use quire_pages::*;
pub use quire_session::*;

mod config;
mod console;
pub mod observability;

pub use config::{LoggingSettings, PaginatorSettings, QuireConfig};
pub use console::{ConsoleTransport, format_payload};
pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};

#[cfg(feature = "discord")]
pub mod discord;
