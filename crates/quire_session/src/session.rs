//! What a caller hands over to start a session.

use derive_getters::Getters;
use quire_core::{ActorId, ChannelId, MessageHandle};
use quire_pages::Paginator;

/// Where a session lives and who started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct SessionContext {
    /// Channel the message is posted in.
    channel: ChannelId,
    /// User who started the session.
    owner: ActorId,
    /// Command message that started the session, if known.
    invocation: Option<MessageHandle>,
}

impl SessionContext {
    /// Context for a session posted in `channel` on behalf of `owner`.
    pub fn new(channel: ChannelId, owner: ActorId) -> Self {
        Self {
            channel,
            owner,
            invocation: None,
        }
    }

    /// Record the command message that started the session.
    ///
    /// It is deleted along with the paginated message under
    /// [`StopBehavior::DeleteMessage`](quire_pages::StopBehavior::DeleteMessage).
    pub fn with_invocation(mut self, invocation: MessageHandle) -> Self {
        self.invocation = Some(invocation);
        self
    }
}

/// A paginator ready to be displayed.
#[derive(Debug, Clone, Getters)]
pub struct Session {
    /// What to show.
    paginator: Paginator,
    /// Where and for whom.
    context: SessionContext,
}

impl Session {
    /// Pair a paginator with its context.
    pub fn new(paginator: Paginator, context: SessionContext) -> Self {
        Self { paginator, context }
    }

    /// Split into parts.
    pub fn into_parts(self) -> (Paginator, SessionContext) {
        (self.paginator, self.context)
    }
}
