//! Content pipeline for a markdown blog: article discovery, slugs,
//! summaries and a static build of the article pages.

pub mod article;
pub mod config;
pub mod error;
pub mod lister;
pub mod markdown;
pub mod page;
pub mod slug;
pub mod ssg;
pub mod summary;

pub use article::{Article, Attributes};
pub use config::Config;
pub use error::{SiteError, SiteResult};
pub use lister::{list_slugs, ContentDir};
pub use slug::slug_from_path;
pub use ssg::{BuildReport, Ssg};
pub use summary::{trim_summary, trim_summary_with};
