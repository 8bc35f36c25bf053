//! Per-session navigation state machine.

use crate::{JumpReply, SessionContext};
use quire_core::{ActorId, Intent, MessageHandle, Payload};
use quire_error::{JumpError, JumpErrorKind, TransportError};
use quire_interface::Transport;
use quire_pages::{Paginator, StopBehavior};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SessionState {
    /// Accepting input.
    #[display("active")]
    Active,
    /// Accepting input while a jump prompt is out.
    #[display("awaiting jump reply")]
    AwaitingJumpReply,
    /// Finished; every further input is ignored.
    #[display("disposed")]
    Disposed,
}

/// What handling one input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The current page changed and the message was re-rendered.
    Moved {
        /// Page before the input
        from: usize,
        /// Page after the input
        to: usize,
    },
    /// Nothing changed and nothing was rendered.
    Unchanged,
    /// A jump prompt should be started.
    JumpRequested,
    /// The info text was posted.
    InfoShown,
    /// The session ended.
    Disposed,
    /// The input did not apply to this session.
    Ignored,
}

/// Owns the current page of one paginated message.
///
/// All methods expect exclusive access; the dispatcher keeps each controller
/// behind its own lock.
pub struct NavigationController {
    paginator: Paginator,
    context: SessionContext,
    handle: MessageHandle,
    current: usize,
    state: SessionState,
    jump_visible: bool,
    transport: Arc<dyn Transport>,
}

impl NavigationController {
    /// Controller for a message already showing page 1.
    pub fn new(
        paginator: Paginator,
        context: SessionContext,
        handle: MessageHandle,
        jump_visible: bool,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            paginator,
            context,
            handle,
            current: 1,
            state: SessionState::Active,
            jump_visible,
            transport,
        }
    }

    /// Current 1-based page.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.paginator.page_count()
    }

    /// Lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session has ended.
    pub fn is_disposed(&self) -> bool {
        self.state == SessionState::Disposed
    }

    /// Handle of the paginated message.
    pub fn handle(&self) -> MessageHandle {
        self.handle
    }

    /// Channel and owner of the session.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// The paginator being shown.
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Whether the jump affordance is offered on this message.
    pub fn jump_visible(&self) -> bool {
        self.jump_visible
    }

    /// Apply one input from `actor`.
    ///
    /// The reaction that carried the input is removed afterwards, except for
    /// Stop, which clears every affordance.
    #[instrument(skip(self), fields(handle = %self.handle, current = self.current))]
    pub async fn handle_input(&mut self, intent: Intent, actor: ActorId) -> Transition {
        if self.is_disposed() {
            return Transition::Ignored;
        }
        let count = self.page_count();
        let transition = match intent {
            Intent::First => self.move_to(1).await,
            Intent::Last => self.move_to(count).await,
            Intent::Next if self.current < count => self.move_to(self.current + 1).await,
            Intent::Back if self.current > 1 => self.move_to(self.current - 1).await,
            Intent::Next | Intent::Back => Transition::Unchanged,
            Intent::Jump => self.request_jump(actor),
            Intent::Info => {
                let text = self.paginator.options().info_text().clone();
                let ttl = *self.paginator.options().info_timeout();
                self.send_transient(text, ttl).await;
                Transition::InfoShown
            }
            Intent::Stop => {
                self.dispose().await;
                return Transition::Disposed;
            }
        };
        debug!(?transition, "Handled input");
        if !self.is_disposed() {
            self.clear_affordance(intent, actor).await;
        }
        transition
    }

    /// Apply the outcome of a jump prompt started by [`Transition::JumpRequested`].
    ///
    /// Late outcomes for a disposed session are ignored.
    #[instrument(skip(self, outcome), fields(handle = %self.handle))]
    pub async fn complete_jump(&mut self, outcome: Result<JumpReply, JumpError>) -> Transition {
        if self.is_disposed() {
            debug!("Discarding jump outcome for disposed session");
            return Transition::Ignored;
        }
        self.state = SessionState::Active;
        let transient_timeout = *self.paginator.options().transient_timeout();

        let reply = match outcome {
            Ok(reply) => reply,
            Err(error) => {
                if error.kind() == JumpErrorKind::TimedOut {
                    let hint = self
                        .paginator
                        .options()
                        .symbols()
                        .stop()
                        .as_str()
                        .to_string();
                    self.send_transient(hint, transient_timeout).await;
                }
                debug!(%error, "Jump prompt ended without a page");
                return Transition::Unchanged;
            }
        };

        self.delete_quietly(*reply.message()).await;
        let count = self.page_count();
        let value = *reply.value();
        match usize::try_from(value) {
            Ok(index) if (1..=count).contains(&index) => self.commit(index).await,
            _ => {
                debug!(value, count, "Jump target out of range");
                let text = format!("Page {} does not exist; pick 1 to {}.", value, count);
                self.send_transient(text, transient_timeout).await;
                Transition::Unchanged
            }
        }
    }

    /// End the session.
    ///
    /// Returns `false` if it had already ended. Remote failures are logged and
    /// do not stop disposal.
    #[instrument(skip(self), fields(handle = %self.handle))]
    pub async fn dispose(&mut self) -> bool {
        if self.is_disposed() {
            return false;
        }
        self.state = SessionState::Disposed;

        if let Err(error) = self.transport.remove_all_affordances(self.handle).await {
            warn!(%error, "Failed to clear affordances");
        }
        if *self.paginator.options().stop_behavior() == StopBehavior::DeleteMessage {
            self.delete_quietly(self.handle).await;
            if let Some(invocation) = *self.context.invocation() {
                self.delete_quietly(invocation).await;
            }
        }
        info!("Session disposed");
        true
    }

    /// End the session without touching the remote message.
    ///
    /// Used when the message is known to be gone.
    pub fn abandon(&mut self) -> bool {
        if self.is_disposed() {
            return false;
        }
        self.state = SessionState::Disposed;
        info!(handle = %self.handle, "Session abandoned");
        true
    }

    fn request_jump(&mut self, actor: ActorId) -> Transition {
        if !self.jump_visible || actor != *self.context.owner() {
            debug!(%actor, "Jump not available to this actor");
            return Transition::Ignored;
        }
        if self.state == SessionState::AwaitingJumpReply {
            debug!("Jump prompt already pending");
            return Transition::Ignored;
        }
        self.state = SessionState::AwaitingJumpReply;
        Transition::JumpRequested
    }

    async fn move_to(&mut self, index: usize) -> Transition {
        if index == self.current {
            return Transition::Unchanged;
        }
        self.commit(index).await
    }

    async fn commit(&mut self, index: usize) -> Transition {
        let from = self.current;
        self.current = index;
        let payload = self.paginator.render(index);
        self.edit(payload).await;
        Transition::Moved { from, to: index }
    }

    async fn edit(&mut self, payload: Payload) {
        if let Err(error) = self.transport.edit(self.handle, payload).await {
            self.note_failure("edit", &error);
        }
    }

    async fn clear_affordance(&mut self, intent: Intent, actor: ActorId) {
        let symbol = self.paginator.options().symbols().symbol_for(intent).clone();
        if let Err(error) = self
            .transport
            .remove_affordance(self.handle, &symbol, actor)
            .await
        {
            self.note_failure("remove affordance", &error);
        }
    }

    async fn send_transient(&mut self, text: String, ttl: Duration) {
        match self
            .transport
            .send(self.handle.channel, Payload::plain(text))
            .await
        {
            Ok(message) => {
                let transport = Arc::clone(&self.transport);
                tokio::spawn(async move {
                    tokio::time::sleep(ttl).await;
                    if let Err(error) = transport.delete(message).await {
                        debug!(%message, %error, "Failed to expire transient message");
                    }
                });
            }
            Err(error) => warn!(%error, "Failed to send transient message"),
        }
    }

    async fn delete_quietly(&self, message: MessageHandle) {
        match self.transport.delete(message).await {
            Ok(true) => {}
            Ok(false) => debug!(%message, "Message already deleted"),
            Err(error) => warn!(%message, %error, "Failed to delete message"),
        }
    }

    fn note_failure(&mut self, operation: &str, error: &TransportError) {
        warn!(operation, %error, "Transport call failed");
        if error.is_unrecoverable() {
            self.abandon();
        }
    }
}

impl std::fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("handle", &self.handle)
            .field("current", &self.current)
            .field("page_count", &self.page_count())
            .field("state", &self.state)
            .finish()
    }
}
