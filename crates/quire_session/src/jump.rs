//! The jump-to-page sub-flow.
//!
//! A jump prompt waits for the session owner to type a page number in the
//! channel the session lives in. The wait happens in a detached task that never
//! holds the session lock; replies reach it through a [`ReplyRouter`].

use derive_getters::Getters;
use parking_lot::Mutex;
use quire_core::{ActorId, ChannelId, MessageHandle, ReplyEvent};
use quire_error::{JumpError, JumpErrorKind};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, trace};

/// An integer reply accepted by a jump prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct JumpReply {
    /// Parsed page number, not yet range-checked.
    value: i64,
    /// The reply message itself.
    message: MessageHandle,
}

impl JumpReply {
    /// Create a reply.
    pub fn new(value: i64, message: MessageHandle) -> Self {
        Self { value, message }
    }
}

struct Waiter {
    session: MessageHandle,
    channel: ChannelId,
    author: ActorId,
    reply: oneshot::Sender<JumpReply>,
}

/// Hands chat replies to whichever jump prompt is waiting for them.
///
/// A reply matches a waiting prompt when it comes from the prompt's author in
/// the prompt's channel and parses as an integer. Anything else is left alone.
#[derive(Clone, Default)]
pub struct ReplyRouter {
    waiters: Arc<Mutex<Vec<Waiter>>>,
}

impl ReplyRouter {
    /// Create an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a reply to the oldest matching prompt.
    ///
    /// Returns `true` if a prompt took it.
    pub fn route(&self, reply: &ReplyEvent) -> bool {
        let Some(value) = reply.page_number() else {
            trace!(message = %reply.message(), "Reply is not a page number");
            return false;
        };
        let waiter = {
            let mut waiters = self.waiters.lock();
            let position = waiters.iter().position(|waiter| {
                waiter.channel == reply.channel() && waiter.author == *reply.author()
            });
            position.map(|position| waiters.remove(position))
        };
        match waiter {
            Some(waiter) => {
                debug!(session = %waiter.session, value, "Routing reply to jump prompt");
                waiter
                    .reply
                    .send(JumpReply::new(value, *reply.message()))
                    .is_ok()
            }
            None => false,
        }
    }

    /// Drop the prompt waiting on behalf of `session`, if any.
    ///
    /// The prompt resolves as cancelled.
    pub fn cancel(&self, session: MessageHandle) -> bool {
        let mut waiters = self.waiters.lock();
        let before = waiters.len();
        waiters.retain(|waiter| waiter.session != session);
        before != waiters.len()
    }

    /// Number of prompts currently waiting.
    pub fn pending(&self) -> usize {
        self.waiters.lock().len()
    }

    fn register(
        &self,
        session: MessageHandle,
        channel: ChannelId,
        author: ActorId,
    ) -> oneshot::Receiver<JumpReply> {
        let (reply, receiver) = oneshot::channel();
        self.waiters.lock().push(Waiter {
            session,
            channel,
            author,
            reply,
        });
        receiver
    }
}

/// Bounded wait for a page number from one user.
pub struct JumpPrompt {
    router: ReplyRouter,
    session: MessageHandle,
}

impl JumpPrompt {
    /// Prompt for the session bound to `session`, listening in its channel.
    pub fn new(router: ReplyRouter, session: MessageHandle) -> Self {
        Self { router, session }
    }

    /// Start listening for an integer reply from `owner`.
    ///
    /// Listening begins as soon as this is called, so replies that arrive
    /// before the returned future is first polled are not lost. The future
    /// resolves with the reply, with [`JumpErrorKind::TimedOut`] after
    /// `timeout`, or with [`JumpErrorKind::Cancelled`] if the prompt is
    /// cancelled through the router.
    pub fn request(
        &self,
        owner: ActorId,
        timeout: Duration,
    ) -> impl Future<Output = Result<JumpReply, JumpError>> + Send + 'static {
        let receiver = self
            .router
            .register(self.session, self.session.channel, owner);
        let router = self.router.clone();
        let session = self.session;
        async move {
            match tokio::time::timeout(timeout, receiver).await {
                Ok(Ok(reply)) => Ok(reply),
                Ok(Err(_)) => Err(JumpError::new(JumpErrorKind::Cancelled)),
                Err(_) => {
                    router.cancel(session);
                    Err(JumpError::new(JumpErrorKind::TimedOut))
                }
            }
        }
    }
}
