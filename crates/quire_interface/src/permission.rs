//! Elevated permission checks.

use async_trait::async_trait;
use quire_core::{ActorId, ChannelId};

/// Decides whether an actor holds the elevated "manage messages" permission
/// in a channel.
///
/// Only consulted for jump affordance visibility.
#[async_trait]
pub trait PermissionOracle: Send + Sync {
    /// Whether `actor` may manage messages in `channel`.
    async fn has_elevated_permission(&self, actor: ActorId, channel: ChannelId) -> bool;
}

/// Oracle granting everyone elevated permission.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

#[async_trait]
impl PermissionOracle for AllowAll {
    async fn has_elevated_permission(&self, _actor: ActorId, _channel: ChannelId) -> bool {
        true
    }
}

/// Oracle denying elevated permission to everyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

#[async_trait]
impl PermissionOracle for DenyAll {
    async fn has_elevated_permission(&self, _actor: ActorId, _channel: ChannelId) -> bool {
        false
    }
}
