//! Page sets, display options and the page renderer.
//!
//! A [`Paginator`] is assembled once through [`PaginatorBuilder`] and never
//! changes afterwards. Sessions hold one and ask it to [`render`] whichever
//! page is current.
//!
//! # Example
//!
//! ```
//! use quire_pages::PaginatorBuilder;
//!
//! let paginator = PaginatorBuilder::new()
//!     .with_pages(vec!["alpha", "beta", "gamma", "delta", "epsilon"])
//!     .split_pages(2)
//!     .with_title("Greek")
//!     .build()
//!     .expect("valid paginator");
//!
//! assert_eq!(paginator.page_count(), 3);
//! let payload = paginator.render(2);
//! let embed = payload.embed().as_ref().expect("embed body");
//! assert_eq!(embed.description().as_deref(), Some("gamma\ndelta"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod options;
mod page_set;
mod render;

pub use builder::{Paginator, PaginatorBuilder};
pub use options::{DisplayOptions, JumpVisibility, NavigationSymbols, StopBehavior};
pub use page_set::{PageMode, PageSet, PageUnits};
pub use render::{PageHeader, render};
