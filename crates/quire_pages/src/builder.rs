//! Paginator construction.

use crate::{DisplayOptions, PageHeader, PageSet, PageUnits, render};
use derive_getters::Getters;
use quire_core::{Color, Payload};
use quire_error::{BuilderError, BuilderErrorKind};
use tracing::{debug, instrument};

/// Immutable content and presentation of one paginated message.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Paginator {
    /// Page content.
    pages: PageSet,
    /// Appearance and timing.
    options: DisplayOptions,
    /// Title, content and colour shared by every page.
    header: PageHeader,
}

impl Paginator {
    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.page_count()
    }

    /// Render 1-based page `index`.
    pub fn render(&self, index: usize) -> Payload {
        render(&self.pages, index, &self.options, &self.header)
    }
}

/// Chained builder for [`Paginator`].
///
/// Misuse such as splitting fielded pages is remembered and reported by
/// [`PaginatorBuilder::build`], so calls can be chained freely.
///
/// # Example
///
/// ```
/// use quire_core::{Color, EmbedField};
/// use quire_pages::{DisplayOptions, PageMode, PaginatorBuilder};
///
/// let fields: Vec<EmbedField> = (1..=8)
///     .map(|n| EmbedField::new(format!("Warning #{}", n), "spam"))
///     .collect();
///
/// let paginator = PaginatorBuilder::new()
///     .with_pages(fields)
///     .with_color(Color(0x3498DB))
///     .with_options(DisplayOptions::default().with_fields_per_page(5))
///     .build()
///     .expect("valid paginator");
///
/// assert_eq!(paginator.pages().mode(), PageMode::Fielded);
/// assert_eq!(paginator.page_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaginatorBuilder {
    pages: Option<PageUnits>,
    title: Option<String>,
    content: String,
    color: Color,
    options: DisplayOptions,
    error: Option<BuilderError>,
}

impl PaginatorBuilder {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page content, replacing any earlier content.
    pub fn with_pages(mut self, pages: impl Into<PageUnits>) -> Self {
        self.pages = Some(pages.into());
        self
    }

    /// Set the embed title shown on every page.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the text shown above the embed.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the embed colour.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the display options.
    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    /// Regroup flat pages into pages of at most `per_page` items joined by newlines.
    ///
    /// Splitting again regroups the already joined pages.
    #[track_caller]
    pub fn split_pages(mut self, per_page: usize) -> Self {
        if self.error.is_some() {
            return self;
        }
        if per_page == 0 {
            self.error = Some(BuilderError::new(BuilderErrorKind::InvalidSplit(per_page)));
            return self;
        }
        match self.pages.take() {
            Some(PageUnits::Flat(items)) => {
                self.pages = Some(PageUnits::Flat(join_chunks(&items, per_page)));
            }
            None => {}
            Some(other) => {
                self.pages = Some(other);
                self.error = Some(BuilderError::new(BuilderErrorKind::SplitRequiresFlatPages));
            }
        }
        self
    }

    /// Validate and assemble the paginator.
    ///
    /// # Errors
    ///
    /// Returns an error if no pages were given, the pages are empty,
    /// `fields_per_page` is zero, or an earlier `split_pages` call was invalid.
    #[instrument(skip(self), fields(title = ?self.title))]
    pub fn build(self) -> Result<Paginator, BuilderError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let units = self
            .pages
            .ok_or_else(|| BuilderError::new(BuilderErrorKind::EmptyPages))?;
        let pages = PageSet::new(units, *self.options.fields_per_page())?;
        debug!(
            mode = %pages.mode(),
            page_count = pages.page_count(),
            "Built paginator"
        );
        Ok(Paginator {
            pages,
            options: self.options,
            header: PageHeader::new(self.title, self.content, self.color),
        })
    }
}

fn join_chunks(items: &[String], per_page: usize) -> Vec<String> {
    items.chunks(per_page).map(|chunk| chunk.join("\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_chunks_keeps_order_and_remainder() {
        let items: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        assert_eq!(join_chunks(&items, 2), vec!["a\nb", "c\nd", "e"]);
        assert_eq!(join_chunks(&items, 5), vec!["a\nb\nc\nd\ne"]);
        assert_eq!(join_chunks(&items, 9), vec!["a\nb\nc\nd\ne"]);
        assert!(join_chunks(&[], 3).is_empty());
    }
}
