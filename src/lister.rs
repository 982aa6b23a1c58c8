//! Article discovery.

use crate::article::{parse_front_matter, Article};
use crate::error::{SiteError, SiteResult};
use crate::markdown::MarkdownRenderer;
use crate::slug::{article_route, slug_from_path};
use std::fs::read_dir;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Slugs for `paths` newest first, keeping at most `limit` of them.
///
/// Newest means last in enumeration order. A `limit` of `None` or zero
/// keeps everything.
pub fn list_slugs<S: AsRef<str>>(paths: &[S], limit: Option<usize>) -> Vec<String> {
    let take = match limit {
        Some(n) if n > 0 => n,
        _ => paths.len(),
    };
    paths
        .iter()
        .rev()
        .take(take)
        .map(|path| slug_from_path(path.as_ref()))
        .collect()
}

/// A directory of markdown articles.
///
/// Only `*.md` files directly inside the directory count as articles.
#[derive(Debug)]
pub struct ContentDir {
    root: PathBuf,
    renderer: MarkdownRenderer,
}

impl ContentDir {
    pub fn new(root: PathBuf) -> ContentDir {
        ContentDir {
            root,
            renderer: MarkdownRenderer::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths of every article, in file name order.
    pub fn article_paths(&self) -> SiteResult<Vec<String>> {
        let mut paths = vec![];
        for entry in read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let fname = entry.file_name();
            let Some(fname) = fname.to_str() else {
                warn!("skipping non UTF-8 file name {:?}", fname);
                continue;
            };
            if fname.ends_with(".md") {
                paths.push(format!("{}/{}", self.root.display(), fname));
            }
        }
        paths.sort();
        debug!("found {} articles in {}", paths.len(), self.root.display());
        Ok(paths)
    }

    /// Slugs newest first, see [`list_slugs`].
    pub fn slugs(&self, limit: Option<usize>) -> SiteResult<Vec<String>> {
        Ok(list_slugs(&self.article_paths()?, limit))
    }

    /// One route per article for the prerender step, in enumeration order.
    pub fn prerender_routes(&self) -> SiteResult<Vec<String>> {
        Ok(self
            .article_paths()?
            .iter()
            .map(|path| article_route(&slug_from_path(path)))
            .collect())
    }

    /// Markdown source file of `slug`.
    pub fn source_path(&self, slug: &str) -> SiteResult<PathBuf> {
        if slug.is_empty() || slug.contains(['/', '\\']) || slug.contains("..") {
            return Err(SiteError::MalformedSlug(slug.to_string()));
        }
        let path = self.root.join(format!("{}.md", slug));
        if !path.is_file() {
            return Err(SiteError::NotFound(slug.to_string()));
        }
        Ok(path)
    }

    /// Read, parse and render the article named `slug`.
    pub fn load(&self, slug: &str) -> SiteResult<Article> {
        let path = self.source_path(slug)?;
        let markdown = std::fs::read_to_string(&path)?;
        let (attributes, body) = parse_front_matter(slug, &markdown)?;
        let html = self.renderer.render(body);

        Ok(Article {
            slug: slug.to_string(),
            attributes,
            html,
        })
    }
}
