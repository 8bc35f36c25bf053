//! Discord adapter over serenity.
//!
//! [`SerenityTransport`] and [`SerenityPermissions`] plug a
//! [`SessionDispatcher`] into Discord's HTTP API, and [`PaginatorHandler`]
//! feeds gateway events back into it.
//!
//! # Example
//!
//! ```rust,ignore
//! use quire::discord::{PaginatorHandler, SerenityPermissions, SerenityTransport};
//! use quire::SessionDispatcher;
//! use serenity::Client;
//! use serenity::http::Http;
//! use std::sync::Arc;
//!
//! let http = Arc::new(Http::new(&token));
//! let dispatcher = SessionDispatcher::new(
//!     Arc::new(SerenityTransport::new(http.clone())),
//!     Arc::new(SerenityPermissions::new(http)),
//! );
//! let mut client = Client::builder(&token, PaginatorHandler::intents())
//!     .event_handler(PaginatorHandler::new(dispatcher.clone()))
//!     .await?;
//! client.start().await?;
//! ```

use async_trait::async_trait;
use quire_core::{
    ActorId, ChannelId, Embed, InputEvent, MessageHandle, Payload, ReplyEvent, Symbol,
};
use quire_error::{TransportError, TransportErrorKind};
use quire_interface::{PermissionOracle, Transport, TransportResult};
use quire_session::SessionDispatcher;
use serenity::all::{
    Channel, ChannelId as DiscordChannelId, Context, CreateEmbed, CreateEmbedFooter,
    CreateMessage, EditMessage, EventHandler, GatewayIntents, Message, MessageId as DiscordMessageId,
    Permissions, Reaction, ReactionType, Ready, UserId,
};
use serenity::http::Http;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, instrument, warn};

/// Map a serenity error onto the transport error kinds.
fn transport_error(error: serenity::Error) -> TransportError {
    let kind = match &error {
        serenity::Error::Http(http) => match http.status_code().map(|status| status.as_u16()) {
            Some(404) => TransportErrorKind::NotFound,
            Some(403) => TransportErrorKind::Forbidden(error.to_string()),
            Some(429) => TransportErrorKind::RateLimited { retry_after_ms: 0 },
            _ => TransportErrorKind::Request(error.to_string()),
        },
        _ => TransportErrorKind::Request(error.to_string()),
    };
    TransportError::new(kind)
}

fn channel_id(channel: ChannelId) -> DiscordChannelId {
    DiscordChannelId::new(channel.0)
}

fn message_id(handle: MessageHandle) -> DiscordMessageId {
    DiscordMessageId::new(handle.message.0)
}

fn reaction(symbol: &Symbol) -> ReactionType {
    ReactionType::Unicode(symbol.as_str().to_string())
}

fn create_embed(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new();
    if let Some(title) = embed.title() {
        builder = builder.title(title);
    }
    if let Some(description) = embed.description() {
        builder = builder.description(description);
    }
    if let Some(color) = embed.color() {
        builder = builder.colour(color.0);
    }
    for field in embed.fields() {
        builder = builder.field(field.name(), field.value(), *field.inline());
    }
    if let Some(footer) = embed.footer() {
        builder = builder.footer(CreateEmbedFooter::new(footer));
    }
    builder
}

/// [`Transport`] over serenity's HTTP client.
#[derive(Clone)]
pub struct SerenityTransport {
    http: Arc<Http>,
}

impl SerenityTransport {
    /// Transport using `http` for every call.
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for SerenityTransport {
    #[instrument(skip(self, payload), fields(channel = %channel))]
    async fn send(&self, channel: ChannelId, payload: Payload) -> TransportResult<MessageHandle> {
        let mut message = CreateMessage::new().content(payload.content());
        if let Some(embed) = payload.embed() {
            message = message.embed(create_embed(embed));
        }
        let sent = channel_id(channel)
            .send_message(self.http.as_ref(), message)
            .await
            .map_err(transport_error)?;
        Ok(MessageHandle::new(channel, sent.id.get()))
    }

    #[instrument(skip(self, payload), fields(handle = %handle))]
    async fn edit(&self, handle: MessageHandle, payload: Payload) -> TransportResult<()> {
        let mut edit = EditMessage::new().content(payload.content());
        if let Some(embed) = payload.embed() {
            edit = edit.embed(create_embed(embed));
        }
        channel_id(handle.channel)
            .edit_message(self.http.as_ref(), message_id(handle), edit)
            .await
            .map_err(transport_error)?;
        Ok(())
    }

    async fn add_affordance(&self, handle: MessageHandle, symbol: &Symbol) -> TransportResult<()> {
        self.http
            .create_reaction(channel_id(handle.channel), message_id(handle), &reaction(symbol))
            .await
            .map_err(transport_error)
    }

    async fn remove_affordance(
        &self,
        handle: MessageHandle,
        symbol: &Symbol,
        actor: ActorId,
    ) -> TransportResult<()> {
        self.http
            .delete_reaction(
                channel_id(handle.channel),
                message_id(handle),
                UserId::new(actor.0),
                &reaction(symbol),
            )
            .await
            .map_err(transport_error)
    }

    async fn remove_all_affordances(&self, handle: MessageHandle) -> TransportResult<()> {
        self.http
            .delete_message_reactions(channel_id(handle.channel), message_id(handle))
            .await
            .map_err(transport_error)
    }

    async fn delete(&self, handle: MessageHandle) -> TransportResult<bool> {
        match self
            .http
            .delete_message(channel_id(handle.channel), message_id(handle), None)
            .await
            .map_err(transport_error)
        {
            Ok(()) => Ok(true),
            Err(error) if error.is_unrecoverable() => Ok(false),
            Err(error) => Err(error),
        }
    }
}

/// Grants elevated permission to members who may manage messages.
///
/// Direct messages never grant it. Lookup failures count as a refusal.
#[derive(Clone)]
pub struct SerenityPermissions {
    http: Arc<Http>,
}

impl SerenityPermissions {
    /// Oracle using `http` for lookups.
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    async fn permissions(
        &self,
        actor: ActorId,
        channel: ChannelId,
    ) -> Result<Option<Permissions>, serenity::Error> {
        let Channel::Guild(channel) = self.http.get_channel(channel_id(channel)).await? else {
            return Ok(None);
        };
        let guild = self.http.get_guild(channel.guild_id).await?;
        let member = self
            .http
            .get_member(channel.guild_id, UserId::new(actor.0))
            .await?;
        Ok(Some(guild.user_permissions_in(&channel, &member)))
    }
}

#[async_trait]
impl PermissionOracle for SerenityPermissions {
    #[instrument(skip(self))]
    async fn has_elevated_permission(&self, actor: ActorId, channel: ChannelId) -> bool {
        match self.permissions(actor, channel).await {
            Ok(Some(permissions)) => permissions.contains(Permissions::MANAGE_MESSAGES),
            Ok(None) => false,
            Err(error) => {
                warn!(%error, "Failed to look up permissions");
                false
            }
        }
    }
}

/// Serenity event handler forwarding reactions and messages to a dispatcher.
///
/// Events caused by bots, including this one, are ignored.
pub struct PaginatorHandler {
    dispatcher: SessionDispatcher,
    me: OnceLock<UserId>,
}

impl PaginatorHandler {
    /// Handler feeding `dispatcher`.
    pub fn new(dispatcher: SessionDispatcher) -> Self {
        Self {
            dispatcher,
            me: OnceLock::new(),
        }
    }

    /// Gateway intents the handler needs.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::GUILD_MESSAGE_REACTIONS
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::DIRECT_MESSAGE_REACTIONS
            | GatewayIntents::MESSAGE_CONTENT
    }

    fn is_me(&self, user: UserId) -> bool {
        self.me.get() == Some(&user)
    }
}

#[serenity::async_trait]
impl EventHandler for PaginatorHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "Paginator handler connected");
        // Reconnects deliver the same user.
        let _ = self.me.set(ready.user.id);
    }

    async fn reaction_add(&self, _ctx: Context, add_reaction: Reaction) {
        let Some(user) = add_reaction.user_id else {
            return;
        };
        if self.is_me(user) || add_reaction.member.as_ref().is_some_and(|m| m.user.bot) {
            return;
        }
        let symbol = match &add_reaction.emoji {
            ReactionType::Unicode(text) => Symbol::new(text.clone()),
            other => {
                debug!(emoji = %other, "Ignoring custom emoji");
                return;
            }
        };
        let event = InputEvent::new(
            MessageHandle::new(add_reaction.channel_id.get(), add_reaction.message_id.get()),
            symbol,
            ActorId(user.get()),
        );
        self.dispatcher.dispatch(&event).await;
    }

    async fn message(&self, _ctx: Context, new_message: Message) {
        if new_message.author.bot {
            return;
        }
        let reply = ReplyEvent::new(
            MessageHandle::new(new_message.channel_id.get(), new_message.id.get()),
            ActorId(new_message.author.id.get()),
            new_message.content.clone(),
        );
        self.dispatcher.dispatch_reply(&reply);
    }
}
