//! Renderable message payloads.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Embed accent colour as a 24-bit RGB value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[display("#{:06X}", _0)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Colour used when nothing more specific is chosen.
    pub const SUCCESS: Color = Color(0x7000FB);
}

impl Default for Color {
    fn default() -> Self {
        Self::SUCCESS
    }
}

/// One name/value pair inside an embed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct EmbedField {
    /// Field heading.
    name: String,
    /// Field body.
    value: String,
    /// Whether the field may share a row with its neighbours.
    inline: bool,
}

impl EmbedField {
    /// Create a block field.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

/// Rich embed body of a message.
///
/// # Example
///
/// ```
/// use quire_core::{Color, Embed, EmbedField};
///
/// let embed = Embed::default()
///     .with_title("Warnings")
///     .with_color(Color::SUCCESS)
///     .with_fields(vec![EmbedField::new("#1", "spam")]);
/// assert_eq!(embed.title().as_deref(), Some("Warnings"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct Embed {
    /// Heading shown above the body.
    title: Option<String>,
    /// Main text.
    description: Option<String>,
    /// Name/value pairs below the description.
    fields: Vec<EmbedField>,
    /// Accent colour.
    color: Option<Color>,
    /// Small text at the bottom, used for the page indicator.
    footer: Option<String>,
}

/// Everything needed to send or edit a paginated message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[setters(prefix = "with_", into)]
pub struct Payload {
    /// Plain text above the embed.
    content: String,
    /// Rich body, if any.
    embed: Option<Embed>,
}

impl Payload {
    /// Plain text message without an embed.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            embed: None,
        }
    }

    /// Message carrying an embed under optional text content.
    pub fn rich(content: impl Into<String>, embed: Embed) -> Self {
        Self {
            content: content.into(),
            embed: Some(embed),
        }
    }
}
