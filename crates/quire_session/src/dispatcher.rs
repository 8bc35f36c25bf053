//! Process-wide routing of platform events to sessions.

use crate::{JumpPrompt, JumpReply, NavigationController, ReplyRouter, Session, Transition};
use parking_lot::RwLock;
use quire_core::{ActorId, InputEvent, Intent, MessageHandle, ReplyEvent, Symbol};
use quire_error::{JumpError, SessionError, SessionErrorKind};
use quire_interface::{PermissionOracle, Transport};
use quire_pages::{DisplayOptions, JumpVisibility};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

type SessionSlot = Arc<Mutex<NavigationController>>;

struct DispatcherInner {
    sessions: RwLock<HashMap<MessageHandle, SessionSlot>>,
    replies: ReplyRouter,
    transport: Arc<dyn Transport>,
    permissions: Arc<dyn PermissionOracle>,
}

/// Registry of live sessions keyed by the handle of their message.
///
/// Events for one handle are applied one at a time; events for different
/// handles run concurrently when the caller dispatches them from separate
/// tasks. Cloning is cheap and every clone shares the same registry.
///
/// # Example
///
/// ```rust,ignore
/// let dispatcher = SessionDispatcher::new(transport, permissions);
/// let handle = dispatcher.display(session).await?;
///
/// // In the platform event handler:
/// dispatcher.dispatch(&InputEvent::new(handle, reaction, user)).await;
/// ```
#[derive(Clone)]
pub struct SessionDispatcher {
    inner: Arc<DispatcherInner>,
}

impl SessionDispatcher {
    /// Create a dispatcher that talks to the platform through `transport`.
    pub fn new(transport: Arc<dyn Transport>, permissions: Arc<dyn PermissionOracle>) -> Self {
        debug!("Creating new SessionDispatcher");
        Self {
            inner: Arc::new(DispatcherInner {
                sessions: RwLock::new(HashMap::new()),
                replies: ReplyRouter::new(),
                transport,
                permissions,
            }),
        }
    }

    /// Send page 1 of `session` and start listening for navigation.
    ///
    /// Single-page sessions are sent and forgotten. Affordances are attached
    /// in the background, so this returns before they appear.
    ///
    /// # Errors
    ///
    /// Returns an error if the first message cannot be sent or a session is
    /// already registered for the returned handle.
    #[instrument(skip(self, session), fields(channel = %session.context().channel(), owner = %session.context().owner()))]
    pub async fn display(&self, session: Session) -> Result<MessageHandle, SessionError> {
        let (paginator, context) = session.into_parts();
        let handle = self
            .inner
            .transport
            .send(*context.channel(), paginator.render(1))
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send first page");
                SessionError::new(SessionErrorKind::InitialRenderFailed(e.to_string()))
            })?;

        if paginator.page_count() <= 1 {
            debug!(%handle, "Single page, no session needed");
            return Ok(handle);
        }

        let jump_visible = match paginator.options().jump_visibility() {
            JumpVisibility::Always => true,
            JumpVisibility::Never => false,
            JumpVisibility::WithElevatedPermission => {
                self.inner
                    .permissions
                    .has_elevated_permission(*context.owner(), *context.channel())
                    .await
            }
        };
        let symbols = affordance_symbols(paginator.options(), jump_visible);
        let page_count = paginator.page_count();

        let controller = NavigationController::new(
            paginator,
            context,
            handle,
            jump_visible,
            Arc::clone(&self.inner.transport),
        );
        self.register(handle, controller)?;
        self.spawn_affordances(handle, symbols);

        info!(%handle, page_count, jump_visible, "Session displayed");
        Ok(handle)
    }

    /// Add a controller for `handle`.
    ///
    /// # Errors
    ///
    /// Returns an error if `handle` already has a session.
    pub fn register(
        &self,
        handle: MessageHandle,
        controller: NavigationController,
    ) -> Result<(), SessionError> {
        let mut sessions = self.inner.sessions.write();
        if sessions.contains_key(&handle) {
            return Err(SessionError::new(SessionErrorKind::AlreadyRegistered(
                handle.to_string(),
            )));
        }
        sessions.insert(handle, Arc::new(Mutex::new(controller)));
        debug!(%handle, sessions = sessions.len(), "Registered session");
        Ok(())
    }

    /// Forget the session for `handle` and cancel its jump prompt.
    ///
    /// The controller itself is not disposed.
    pub fn unregister(&self, handle: MessageHandle) -> bool {
        let removed = self.inner.sessions.write().remove(&handle).is_some();
        if removed {
            self.inner.replies.cancel(handle);
            debug!(%handle, "Unregistered session");
        }
        removed
    }

    /// Whether `handle` has a live session.
    pub fn is_registered(&self, handle: MessageHandle) -> bool {
        self.inner.sessions.read().contains_key(&handle)
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.inner.sessions.read().len()
    }

    /// Current page of the session for `handle`.
    pub async fn current_index(&self, handle: MessageHandle) -> Option<usize> {
        let slot = self.slot(handle)?;
        let controller = slot.lock().await;
        Some(controller.current_index())
    }

    /// Apply a reaction to the session it targets.
    ///
    /// Reactions on unknown messages and symbols that are not navigation
    /// symbols are ignored.
    #[instrument(skip(self, event), fields(handle = %event.handle(), symbol = %event.symbol(), actor = %event.actor()))]
    pub async fn dispatch(&self, event: &InputEvent) -> Transition {
        let handle = *event.handle();
        let Some(slot) = self.slot(handle) else {
            return Transition::Ignored;
        };
        let mut controller = slot.lock().await;
        let Some(intent) = intent_of(controller.paginator().options(), event.symbol()) else {
            debug!("Symbol is not a navigation symbol");
            return Transition::Ignored;
        };

        let transition = controller.handle_input(intent, *event.actor()).await;
        if transition == Transition::JumpRequested {
            let owner = *controller.context().owner();
            let timeout = *controller.paginator().options().jump_timeout();
            self.spawn_jump(handle, owner, timeout);
        }
        if controller.is_disposed() {
            drop(controller);
            self.unregister(handle);
        }
        transition
    }

    /// Offer a chat message to any jump prompt waiting for it.
    ///
    /// Returns `true` if a prompt took it.
    pub fn dispatch_reply(&self, reply: &ReplyEvent) -> bool {
        self.inner.replies.route(reply)
    }

    /// Dispose every live session.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) {
        let slots: Vec<(MessageHandle, SessionSlot)> =
            self.inner.sessions.write().drain().collect();
        info!(sessions = slots.len(), "Shutting down session dispatcher");
        for (handle, slot) in slots {
            self.inner.replies.cancel(handle);
            slot.lock().await.dispose().await;
        }
    }

    fn slot(&self, handle: MessageHandle) -> Option<SessionSlot> {
        self.inner.sessions.read().get(&handle).cloned()
    }

    fn spawn_jump(&self, handle: MessageHandle, owner: ActorId, timeout: Duration) {
        let request = JumpPrompt::new(self.inner.replies.clone(), handle).request(owner, timeout);
        let dispatcher = self.clone();
        tokio::spawn(async move {
            let outcome = request.await;
            dispatcher.complete_jump(handle, outcome).await;
        });
    }

    async fn complete_jump(
        &self,
        handle: MessageHandle,
        outcome: Result<JumpReply, JumpError>,
    ) {
        let Some(slot) = self.slot(handle) else {
            debug!(%handle, "Jump finished after session ended");
            return;
        };
        let mut controller = slot.lock().await;
        controller.complete_jump(outcome).await;
        if controller.is_disposed() {
            drop(controller);
            self.unregister(handle);
        }
    }

    fn spawn_affordances(&self, handle: MessageHandle, symbols: Vec<Symbol>) {
        let dispatcher = self.clone();
        tokio::spawn(async move {
            for symbol in symbols {
                let Some(slot) = dispatcher.slot(handle) else {
                    debug!(%handle, "Session ended while attaching affordances");
                    break;
                };
                // Held across the add so teardown cannot run in between.
                let controller = slot.lock().await;
                if controller.is_disposed() {
                    debug!(%handle, "Session ended while attaching affordances");
                    break;
                }
                let result = dispatcher
                    .inner
                    .transport
                    .add_affordance(handle, &symbol)
                    .await;
                drop(controller);
                if let Err(error) = result {
                    warn!(%handle, %symbol, %error, "Failed to attach affordance");
                    if error.is_unrecoverable() {
                        dispatcher.abandon(handle).await;
                        break;
                    }
                }
            }
        });
    }

    async fn abandon(&self, handle: MessageHandle) {
        let slot = self.inner.sessions.write().remove(&handle);
        self.inner.replies.cancel(handle);
        if let Some(slot) = slot {
            slot.lock().await.abandon();
        }
    }
}

fn intent_of(options: &DisplayOptions, symbol: &Symbol) -> Option<Intent> {
    options.symbols().intent_for(symbol)
}

/// Affordances in the order they are attached.
fn affordance_symbols(options: &DisplayOptions, jump_visible: bool) -> Vec<Symbol> {
    let mut intents = vec![Intent::First, Intent::Back, Intent::Next, Intent::Last];
    if jump_visible {
        intents.push(Intent::Jump);
    }
    intents.push(Intent::Stop);
    if *options.display_info_icon() {
        intents.push(Intent::Info);
    }
    intents
        .into_iter()
        .map(|intent| options.symbols().symbol_for(intent).clone())
        .collect()
}
