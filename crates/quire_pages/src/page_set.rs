//! Ordered page content.

use quire_core::{Embed, EmbedField};
use quire_error::{BuilderError, BuilderErrorKind};

/// Content items of a page set.
///
/// The variant fixes the grouping mode, so flat text and fields can never be
/// mixed in one set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageUnits {
    /// One text item per page.
    Flat(Vec<String>),
    /// Fields grouped `fields_per_page` at a time.
    Fielded(Vec<EmbedField>),
    /// One pre-built embed per page.
    Embedded(Vec<Embed>),
}

impl PageUnits {
    /// Flat pages from anything displayable.
    pub fn flat<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Self::Flat(items.into_iter().map(|item| item.to_string()).collect())
    }

    /// Number of content items.
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(items) => items.len(),
            Self::Fielded(fields) => fields.len(),
            Self::Embedded(embeds) => embeds.len(),
        }
    }

    /// Whether there are no content items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grouping mode of these units.
    pub fn mode(&self) -> PageMode {
        match self {
            Self::Flat(_) => PageMode::Flat,
            Self::Fielded(_) => PageMode::Fielded,
            Self::Embedded(_) => PageMode::Embedded,
        }
    }
}

impl From<Vec<String>> for PageUnits {
    fn from(items: Vec<String>) -> Self {
        Self::Flat(items)
    }
}

impl From<Vec<&str>> for PageUnits {
    fn from(items: Vec<&str>) -> Self {
        Self::flat(items)
    }
}

impl From<Vec<EmbedField>> for PageUnits {
    fn from(fields: Vec<EmbedField>) -> Self {
        Self::Fielded(fields)
    }
}

impl From<Vec<Embed>> for PageUnits {
    fn from(embeds: Vec<Embed>) -> Self {
        Self::Embedded(embeds)
    }
}

/// How content items map onto pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PageMode {
    /// One text item per page.
    #[display("flat")]
    Flat,
    /// Several fields per page.
    #[display("fielded")]
    Fielded,
    /// One embed per page.
    #[display("embedded")]
    Embedded,
}

/// Non-empty, immutable page content with its page count fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSet {
    units: PageUnits,
    fields_per_page: usize,
    page_count: usize,
}

impl PageSet {
    /// Validate `units` and fix the page count.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no units or `fields_per_page` is zero.
    #[track_caller]
    pub fn new(units: PageUnits, fields_per_page: usize) -> Result<Self, BuilderError> {
        if units.is_empty() {
            return Err(BuilderError::new(BuilderErrorKind::EmptyPages));
        }
        if fields_per_page == 0 {
            return Err(BuilderError::new(BuilderErrorKind::InvalidFieldsPerPage(
                fields_per_page,
            )));
        }
        let page_count = page_count(&units, fields_per_page);
        Ok(Self {
            units,
            fields_per_page,
            page_count,
        })
    }

    /// Content items.
    pub fn units(&self) -> &PageUnits {
        &self.units
    }

    /// Grouping mode.
    pub fn mode(&self) -> PageMode {
        self.units.mode()
    }

    /// Number of pages, always at least one.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Fields per page used for fielded grouping.
    pub fn fields_per_page(&self) -> usize {
        self.fields_per_page
    }

    /// Fields shown on 1-based page `index`; empty outside fielded mode.
    pub fn page_fields(&self, index: usize) -> &[EmbedField] {
        match &self.units {
            PageUnits::Fielded(fields) => {
                let start = (index.saturating_sub(1) * self.fields_per_page).min(fields.len());
                let end = (start + self.fields_per_page).min(fields.len());
                &fields[start..end]
            }
            _ => &[],
        }
    }
}

fn page_count(units: &PageUnits, fields_per_page: usize) -> usize {
    match units {
        PageUnits::Fielded(fields) => fields.len().div_ceil(fields_per_page),
        other => other.len(),
    }
}
