//! Core data types for Quire.
//!
//! This crate holds the plain values that flow between the page renderer,
//! the session machinery and the chat transport:
//!
//! - **Identities**: [`ChannelId`], [`MessageId`], [`ActorId`], [`MessageHandle`]
//! - **Inputs**: [`Symbol`], [`Intent`], [`InputEvent`], [`ReplyEvent`]
//! - **Output**: [`Payload`], [`Embed`], [`EmbedField`], [`Color`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod event;
mod ids;
mod intent;
mod payload;

pub use event::{InputEvent, ReplyEvent};
pub use ids::{ActorId, ChannelId, MessageHandle, MessageId};
pub use intent::{Intent, Symbol};
pub use payload::{Color, Embed, EmbedField, Payload};
