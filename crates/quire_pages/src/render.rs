//! Pure page rendering.

use crate::{DisplayOptions, PageSet, PageUnits};
use quire_core::{Color, Embed, Payload};

/// Per-message presentation that is not tied to one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageHeader {
    /// Embed title, skipped when blank.
    pub title: Option<String>,
    /// Text shown above the embed.
    pub content: String,
    /// Embed colour.
    pub color: Color,
}

impl PageHeader {
    /// Create a header.
    pub fn new(title: Option<String>, content: impl Into<String>, color: Color) -> Self {
        Self {
            title,
            content: content.into(),
            color,
        }
    }

    fn visible_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.trim().is_empty())
    }
}

/// Render 1-based page `index` of `pages`.
///
/// `index` is clamped into `[1, page_count]`. The footer only appears when
/// there is more than one page.
pub fn render(
    pages: &PageSet,
    index: usize,
    options: &DisplayOptions,
    header: &PageHeader,
) -> Payload {
    let count = pages.page_count();
    let index = index.clamp(1, count);
    let footer = (count > 1).then(|| options.footer(index, count));

    let mut embed = match pages.units() {
        PageUnits::Embedded(embeds) => embeds[index - 1].clone(),
        PageUnits::Flat(items) => base_embed(header).with_description(items[index - 1].clone()),
        PageUnits::Fielded(_) => {
            base_embed(header).with_fields(pages.page_fields(index).to_vec())
        }
    };
    if let Some(title) = header.visible_title() {
        embed = embed.with_title(title);
    }
    if let Some(footer) = footer {
        embed = embed.with_footer(footer);
    }
    Payload::rich(header.content.clone(), embed)
}

fn base_embed(header: &PageHeader) -> Embed {
    Embed::default().with_color(header.color)
}
