//! Shared fixtures for session tests.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use quire_core::{ActorId, ChannelId, MessageHandle, MessageId, Payload, Symbol};
use quire_error::{TransportError, TransportErrorKind};
use quire_interface::{Transport, TransportResult};
use quire_pages::{DisplayOptions, Paginator, PaginatorBuilder};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub const CHANNEL: ChannelId = ChannelId(100);
pub const OWNER: ActorId = ActorId(7);
pub const STRANGER: ActorId = ActorId(8);

/// Transport operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Send,
    Edit,
    AddAffordance,
    RemoveAffordance,
    RemoveAll,
    Delete,
}

/// One recorded transport call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Send {
        handle: MessageHandle,
        payload: Payload,
    },
    Edit {
        handle: MessageHandle,
        payload: Payload,
    },
    AddAffordance {
        handle: MessageHandle,
        symbol: Symbol,
    },
    RemoveAffordance {
        handle: MessageHandle,
        symbol: Symbol,
        actor: ActorId,
    },
    RemoveAll {
        handle: MessageHandle,
    },
    Delete {
        handle: MessageHandle,
    },
}

/// In-memory transport recording every call.
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    failures: Mutex<HashMap<Op, TransportErrorKind>>,
    deleted: Mutex<HashSet<MessageHandle>>,
    affordance_delay: Mutex<Option<Duration>>,
    next_id: AtomicU64,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            ..Self::default()
        }
    }

    /// Make every future call of `op` fail with `kind`.
    pub fn fail(&self, op: Op, kind: TransportErrorKind) {
        self.failures.lock().insert(op, kind);
    }

    /// Make every future `add_affordance` take `delay` before it lands.
    pub fn delay_affordances(&self, delay: Duration) {
        *self.affordance_delay.lock() = Some(delay);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn sends(&self) -> Vec<Payload> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Send { payload, .. } => Some(payload),
                _ => None,
            })
            .collect()
    }

    pub fn edits(&self) -> Vec<Payload> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Edit { payload, .. } => Some(payload),
                _ => None,
            })
            .collect()
    }

    pub fn added_symbols(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::AddAffordance { symbol, .. } => Some(symbol.as_str().to_string()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls()
            .iter()
            .filter(|call| {
                matches!(
                    (op, call),
                    (Op::Send, Call::Send { .. })
                        | (Op::Edit, Call::Edit { .. })
                        | (Op::AddAffordance, Call::AddAffordance { .. })
                        | (Op::RemoveAffordance, Call::RemoveAffordance { .. })
                        | (Op::RemoveAll, Call::RemoveAll { .. })
                        | (Op::Delete, Call::Delete { .. })
                )
            })
            .count()
    }

    pub fn deleted(&self, handle: MessageHandle) -> bool {
        self.deleted.lock().contains(&handle)
    }

    /// Handle the next `send` will return.
    pub fn peek_handle(&self) -> MessageHandle {
        MessageHandle::new(CHANNEL, MessageId(self.next_id.load(Ordering::SeqCst)))
    }

    fn check(&self, op: Op) -> TransportResult<()> {
        match self.failures.lock().get(&op) {
            Some(kind) => Err(TransportError::new(kind.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, channel: ChannelId, payload: Payload) -> TransportResult<MessageHandle> {
        self.check(Op::Send)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let handle = MessageHandle::new(channel, MessageId(id));
        self.calls.lock().push(Call::Send { handle, payload });
        Ok(handle)
    }

    async fn edit(&self, handle: MessageHandle, payload: Payload) -> TransportResult<()> {
        self.calls.lock().push(Call::Edit { handle, payload });
        self.check(Op::Edit)
    }

    async fn add_affordance(&self, handle: MessageHandle, symbol: &Symbol) -> TransportResult<()> {
        let delay = *self.affordance_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.check(Op::AddAffordance)?;
        self.calls.lock().push(Call::AddAffordance {
            handle,
            symbol: symbol.clone(),
        });
        Ok(())
    }

    async fn remove_affordance(
        &self,
        handle: MessageHandle,
        symbol: &Symbol,
        actor: ActorId,
    ) -> TransportResult<()> {
        self.calls.lock().push(Call::RemoveAffordance {
            handle,
            symbol: symbol.clone(),
            actor,
        });
        self.check(Op::RemoveAffordance)
    }

    async fn remove_all_affordances(&self, handle: MessageHandle) -> TransportResult<()> {
        self.calls.lock().push(Call::RemoveAll { handle });
        self.check(Op::RemoveAll)
    }

    async fn delete(&self, handle: MessageHandle) -> TransportResult<bool> {
        self.calls.lock().push(Call::Delete { handle });
        self.check(Op::Delete)?;
        Ok(self.deleted.lock().insert(handle))
    }
}

/// Paginator with `pages` flat pages.
pub fn flat_paginator(pages: usize, options: DisplayOptions) -> Paginator {
    PaginatorBuilder::new()
        .with_pages((1..=pages).map(|n| format!("page {}", n)).collect::<Vec<_>>())
        .with_title("Test")
        .with_options(options)
        .build()
        .expect("Valid paginator")
}

/// Let spawned tasks run until they block.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}
