//! Chat transport trait.

use async_trait::async_trait;
use quire_core::{ActorId, ChannelId, MessageHandle, Payload, Symbol};
use quire_error::TransportError;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Remote operations against the chat platform.
///
/// Every call is fallible. The session layer logs and swallows failures,
/// except for the first send of a session and
/// [`NotFound`](quire_error::TransportErrorKind::NotFound), which ends the
/// session.
///
/// # Example Implementation
///
/// ```rust,ignore
/// #[async_trait]
/// impl Transport for ConsoleTransport {
///     async fn send(&self, channel: ChannelId, payload: Payload) -> TransportResult<MessageHandle> {
///         println!("{}", payload.content());
///         Ok(self.next_handle(channel))
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Post a new message and return its handle.
    async fn send(&self, channel: ChannelId, payload: Payload) -> TransportResult<MessageHandle>;

    /// Replace the content of an existing message.
    async fn edit(&self, handle: MessageHandle, payload: Payload) -> TransportResult<()>;

    /// Attach a reaction affordance to a message.
    async fn add_affordance(&self, handle: MessageHandle, symbol: &Symbol) -> TransportResult<()>;

    /// Remove one actor's reaction from a message.
    async fn remove_affordance(
        &self,
        handle: MessageHandle,
        symbol: &Symbol,
        actor: ActorId,
    ) -> TransportResult<()>;

    /// Remove every reaction from a message.
    async fn remove_all_affordances(&self, handle: MessageHandle) -> TransportResult<()>;

    /// Delete a message.
    ///
    /// Returns `false` when the message was already gone.
    async fn delete(&self, handle: MessageHandle) -> TransportResult<bool>;
}
