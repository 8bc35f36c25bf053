//! Reaction-driven navigation sessions.
//!
//! This crate turns a [`Paginator`](quire_pages::Paginator) into a live message
//! that users page through with reactions.
//!
//! # Architecture
//!
//! - [`SessionDispatcher`] - owns every live session, keyed by message handle,
//!   and routes reactions and chat replies to them
//! - [`NavigationController`] - per-session state machine; the dispatcher only
//!   touches it under that session's lock
//! - [`JumpPrompt`] - detached, time-bounded wait for a page number reply that
//!   runs outside the session lock
//!
//! # Example
//!
//! ```rust,ignore
//! let dispatcher = SessionDispatcher::new(transport, Arc::new(AllowAll));
//! let paginator = PaginatorBuilder::new().with_pages(lines).split_pages(10).build()?;
//! let handle = dispatcher
//!     .display(Session::new(paginator, SessionContext::new(channel, author)))
//!     .await?;
//!
//! // From the platform event loop:
//! dispatcher.dispatch(&InputEvent::new(handle, "▶", author)).await;
//! dispatcher.dispatch_reply(&ReplyEvent::new(reply_handle, author, "3"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod controller;
mod dispatcher;
mod jump;
mod session;

pub use controller::{NavigationController, SessionState, Transition};
pub use dispatcher::SessionDispatcher;
pub use jump::{JumpPrompt, JumpReply, ReplyRouter};
pub use session::{Session, SessionContext};
