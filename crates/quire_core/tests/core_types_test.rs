//! Tests for core identity, intent and payload types.

use quire_core::{
    ActorId, ChannelId, Color, Embed, EmbedField, InputEvent, Intent, MessageHandle, Payload,
    ReplyEvent,
};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn test_message_handle_display() {
    let handle = MessageHandle::new(10u64, 20u64);
    assert_eq!(handle.to_string(), "10/20");
    assert_eq!(handle.channel, ChannelId(10));
}

#[test]
fn test_intent_round_trips_through_names() {
    for intent in Intent::iter() {
        let parsed = Intent::from_str(&intent.to_string()).expect("Known intent name");
        assert_eq!(parsed, intent);
    }
    assert_eq!(Intent::iter().count(), 7);
    assert!(Intent::from_str("rewind").is_err());
}

#[test]
fn test_reply_page_number_parsing() {
    let handle = MessageHandle::new(1u64, 2u64);
    let reply = |text: &str| ReplyEvent::new(handle, ActorId(3), text);

    assert_eq!(reply(" 12 ").page_number(), Some(12));
    assert_eq!(reply("-4").page_number(), Some(-4));
    assert_eq!(reply("twelve").page_number(), None);
    assert_eq!(reply("").page_number(), None);
    assert_eq!(reply("3").channel(), ChannelId(1));
}

#[test]
fn test_embed_setters_and_colour_display() {
    let embed = Embed::default()
        .with_title("Roles")
        .with_description("All roles")
        .with_color(Color(0x00FF00))
        .with_fields(vec![EmbedField::new("Admin", "3 members").with_inline(true)]);

    assert_eq!(embed.title().as_deref(), Some("Roles"));
    assert_eq!(embed.fields().len(), 1);
    assert!(*embed.fields()[0].inline());
    assert_eq!(embed.color().map(|c| c.to_string()), Some("#00FF00".to_string()));
    assert_eq!(Color::default(), Color::SUCCESS);
}

#[test]
fn test_payload_serializes_for_logging() {
    let payload = Payload::rich("header", Embed::default().with_footer("Page 1/2"));
    let json = serde_json::to_value(&payload).expect("Serializable payload");
    assert_eq!(json["content"], "header");
    assert_eq!(json["embed"]["footer"], "Page 1/2");

    let event = InputEvent::new(MessageHandle::new(1u64, 2u64), "▶", ActorId(9));
    assert_eq!(event.symbol().as_str(), "▶");
    assert!(Payload::plain("hi").embed().is_none());
}
