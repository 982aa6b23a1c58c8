//! Slugs and the links built from them.

/// Derive an article slug from its file path: the last path segment with
/// a trailing `.md` extension removed.
///
/// Input is not validated, so anything that does not look like a markdown
/// path comes back as its last segment unchanged.
///
/// ```
/// use folio::slug::slug_from_path;
///
/// assert_eq!(slug_from_path("../assets/articles/2023-05-hello.md"), "2023-05-hello");
/// assert_eq!(slug_from_path("notes"), "notes");
/// ```
pub fn slug_from_path(path: &str) -> String {
    let segment = path.rsplit('/').next().unwrap_or(path);
    segment.strip_suffix(".md").unwrap_or(segment).to_string()
}

/// Link used by listing pages, with trailing slash.
pub fn article_link(slug: &str) -> String {
    format!("/articles/{}/", slug)
}

/// Route handed to the prerender step.
pub fn article_route(slug: &str) -> String {
    format!("/articles/{}", slug)
}
