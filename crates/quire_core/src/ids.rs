//! Platform identities.

use serde::{Deserialize, Serialize};

/// Channel a message lives in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
pub struct ChannelId(pub u64);

/// Message identity within a channel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
pub struct MessageId(pub u64);

/// A user who reacts to or replies in a channel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
pub struct ActorId(pub u64);

/// Opaque identity of a rendered message.
///
/// Transports need both the channel and the message to edit or react, so the
/// handle carries both.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}/{}", channel, message)]
pub struct MessageHandle {
    /// Channel holding the message
    pub channel: ChannelId,
    /// The message itself
    pub message: MessageId,
}

impl MessageHandle {
    /// Create a handle from raw ids.
    pub fn new(channel: impl Into<ChannelId>, message: impl Into<MessageId>) -> Self {
        Self {
            channel: channel.into(),
            message: message.into(),
        }
    }
}
