//! A [`Transport`] that prints to a terminal.
//!
//! Every message lives in memory and is printed in full whenever it is sent
//! or edited. Useful for demos and for exercising the dispatcher without a
//! chat platform.

use async_trait::async_trait;
use parking_lot::Mutex;
use quire_core::{ActorId, ChannelId, MessageHandle, MessageId, Payload, Symbol};
use quire_error::{TransportError, TransportErrorKind};
use quire_interface::{Transport, TransportResult};
use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, instrument};

#[derive(Debug, Clone, Default)]
struct ConsoleMessage {
    payload: Payload,
    affordances: Vec<Symbol>,
}

/// Terminal-backed transport.
pub struct ConsoleTransport {
    out: Mutex<Box<dyn Write + Send>>,
    messages: Mutex<HashMap<MessageHandle, ConsoleMessage>>,
    next_id: AtomicU64,
}

impl ConsoleTransport {
    /// Transport printing to standard output.
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }

    /// Transport printing to `out`.
    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            messages: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Record a message typed by a user so it can be deleted later.
    pub fn receive(&self, channel: ChannelId, text: impl Into<String>) -> MessageHandle {
        let handle = self.allocate(channel);
        self.messages.lock().insert(
            handle,
            ConsoleMessage {
                payload: Payload::plain(text),
                affordances: Vec::new(),
            },
        );
        handle
    }

    /// Current payload of `handle`, if it still exists.
    pub fn payload(&self, handle: MessageHandle) -> Option<Payload> {
        self.messages
            .lock()
            .get(&handle)
            .map(|message| message.payload.clone())
    }

    /// Affordances currently attached to `handle`.
    pub fn affordances(&self, handle: MessageHandle) -> Vec<Symbol> {
        self.messages
            .lock()
            .get(&handle)
            .map(|message| message.affordances.clone())
            .unwrap_or_default()
    }

    fn allocate(&self, channel: ChannelId) -> MessageHandle {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        MessageHandle::new(channel, MessageId(id))
    }

    fn print(&self, handle: MessageHandle, verb: &str, payload: &Payload) -> TransportResult<()> {
        let text = format_payload(payload);
        let mut out = self.out.lock();
        writeln!(out, "[{} {}]\n{}", verb, handle, text)
            .and_then(|_| out.flush())
            .map_err(|e| TransportError::new(TransportErrorKind::Request(e.to_string())))
    }

    fn with_message<T>(
        &self,
        handle: MessageHandle,
        f: impl FnOnce(&mut ConsoleMessage) -> T,
    ) -> TransportResult<T> {
        self.messages
            .lock()
            .get_mut(&handle)
            .map(f)
            .ok_or_else(|| TransportError::new(TransportErrorKind::NotFound))
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ConsoleTransport {
    #[instrument(skip(self, payload))]
    async fn send(&self, channel: ChannelId, payload: Payload) -> TransportResult<MessageHandle> {
        let handle = self.allocate(channel);
        self.print(handle, "sent", &payload)?;
        self.messages.lock().insert(
            handle,
            ConsoleMessage {
                payload,
                affordances: Vec::new(),
            },
        );
        Ok(handle)
    }

    #[instrument(skip(self, payload))]
    async fn edit(&self, handle: MessageHandle, payload: Payload) -> TransportResult<()> {
        self.with_message(handle, |message| message.payload = payload.clone())?;
        self.print(handle, "edited", &payload)
    }

    async fn add_affordance(&self, handle: MessageHandle, symbol: &Symbol) -> TransportResult<()> {
        self.with_message(handle, |message| {
            if !message.affordances.contains(symbol) {
                message.affordances.push(symbol.clone());
            }
        })?;
        debug!(%handle, %symbol, "Affordance attached");
        Ok(())
    }

    async fn remove_affordance(
        &self,
        handle: MessageHandle,
        symbol: &Symbol,
        actor: ActorId,
    ) -> TransportResult<()> {
        // Only the bot's own affordances are tracked, so a user's reaction
        // has nothing to remove.
        self.with_message(handle, |_| ())?;
        debug!(%handle, %symbol, %actor, "Reaction cleared");
        Ok(())
    }

    async fn remove_all_affordances(&self, handle: MessageHandle) -> TransportResult<()> {
        self.with_message(handle, |message| message.affordances.clear())?;
        let mut out = self.out.lock();
        writeln!(out, "[closed {}]", handle)
            .map_err(|e| TransportError::new(TransportErrorKind::Request(e.to_string())))
    }

    async fn delete(&self, handle: MessageHandle) -> TransportResult<bool> {
        let removed = self.messages.lock().remove(&handle).is_some();
        if removed {
            debug!(%handle, "Message deleted");
        }
        Ok(removed)
    }
}

/// Plain-text rendering of a payload.
pub fn format_payload(payload: &Payload) -> String {
    let mut lines = Vec::new();
    if !payload.content().is_empty() {
        lines.push(payload.content().clone());
    }
    if let Some(embed) = payload.embed() {
        if let Some(title) = embed.title() {
            lines.push(format!("== {} ==", title));
        }
        if let Some(description) = embed.description() {
            lines.push(description.clone());
        }
        for field in embed.fields() {
            lines.push(format!("{}: {}", field.name(), field.value()));
        }
        if let Some(footer) = embed.footer() {
            lines.push(format!("-- {} --", footer));
        }
    }
    lines.join("\n")
}
