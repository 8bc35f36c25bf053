//! Inbound events delivered by the chat platform.

use crate::{ActorId, ChannelId, MessageHandle, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A reaction added to a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct InputEvent {
    /// Message the reaction was added to.
    handle: MessageHandle,
    /// Reaction symbol.
    symbol: Symbol,
    /// User who reacted.
    actor: ActorId,
}

impl InputEvent {
    /// Create an input event.
    pub fn new(handle: MessageHandle, symbol: impl Into<Symbol>, actor: ActorId) -> Self {
        Self {
            handle,
            symbol: symbol.into(),
            actor,
        }
    }
}

/// A chat message posted in a channel, used to answer jump prompts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ReplyEvent {
    /// The reply message.
    message: MessageHandle,
    /// User who posted it.
    author: ActorId,
    /// Raw message text.
    content: String,
}

impl ReplyEvent {
    /// Create a reply event.
    pub fn new(message: MessageHandle, author: ActorId, content: impl Into<String>) -> Self {
        Self {
            message,
            author,
            content: content.into(),
        }
    }

    /// Channel the reply was posted in.
    pub fn channel(&self) -> ChannelId {
        self.message.channel
    }

    /// Page number carried by the reply, if its trimmed content is an integer.
    pub fn page_number(&self) -> Option<i64> {
        self.content.trim().parse().ok()
    }
}
