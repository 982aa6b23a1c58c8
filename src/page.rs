//! Data and document shell for rendered pages.

use crate::article::{Article, Attributes};
use crate::config::SiteConfig;
use serde::Serialize;
use std::fmt::Write;

/// What an article page is rendered from.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePageData {
    pub article_slug: String,
    pub attributes: Attributes,
    pub summary: String,
}

impl ArticlePageData {
    pub fn new(article: &Article, summary_length: usize) -> ArticlePageData {
        ArticlePageData {
            article_slug: article.slug.clone(),
            attributes: article.attributes.clone(),
            summary: article.summary(summary_length),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_type: String,
    pub og_image: Option<String>,
}

impl PageMeta {
    /// Meta for pages that are not articles.
    pub fn for_site(site: &SiteConfig) -> PageMeta {
        PageMeta {
            title: site.title.clone(),
            description: site.description.clone(),
            keywords: site.keywords.clone(),
            og_title: site.og_title.clone(),
            og_description: site.description.clone(),
            og_type: "article".to_string(),
            og_image: site.og_image.clone(),
        }
    }

    /// Meta taken from an article's front matter, falling back to the site
    /// values for anything the article leaves empty.
    pub fn for_article(site: &SiteConfig, attributes: &Attributes) -> PageMeta {
        let mut meta = PageMeta::for_site(site);
        if !attributes.title.is_empty() {
            meta.title = attributes.title.clone();
            meta.og_title = attributes.title.clone();
        }
        if !attributes.description.is_empty() {
            meta.description = attributes.description.clone();
            meta.og_description = attributes.description.clone();
        }
        if !attributes.tags.is_empty() {
            meta.keywords = attributes.keywords();
        }
        meta
    }
}

/// Wrap a rendered page body in the HTML document shell.
///
/// `body` is inserted as is; every meta value is escaped.
pub fn render_document(meta: &PageMeta, body: &str) -> String {
    let mut head = String::new();
    // writing into a String cannot fail
    let _ = writeln!(head, r#"    <meta charset="UTF-8" />"#);
    let _ = writeln!(head, r#"    <link rel="icon" href="/favicon.ico" />"#);
    let _ = writeln!(
        head,
        r#"    <meta name="viewport" content="width=device-width, initial-scale=1.0" />"#
    );
    meta_tag(&mut head, "name", "description", &meta.description);
    meta_tag(&mut head, "name", "keywords", &meta.keywords);
    meta_tag(&mut head, "name", "og:description", &meta.og_description);
    meta_tag(&mut head, "property", "og:type", &meta.og_type);
    meta_tag(&mut head, "property", "og:title", &meta.og_title);
    if let Some(image) = &meta.og_image {
        meta_tag(&mut head, "property", "og:image", image);
        if let Some(kind) = image_type(image) {
            meta_tag(&mut head, "property", "og:image:type", kind);
        }
    }
    let _ = writeln!(head, "    <title>{}</title>", escape_html(&meta.title));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n{}  </head>\n  <body>\n    <div id=\"app\">{}</div>\n  </body>\n</html>\n",
        head, body
    )
}

fn meta_tag(head: &mut String, attr: &str, key: &str, content: &str) {
    let _ = writeln!(
        head,
        r#"    <meta {}="{}" content="{}" />"#,
        attr,
        key,
        escape_html(content)
    );
}

fn image_type(url: &str) -> Option<&'static str> {
    let ext = url.rsplit('.').next()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig {
            title: "Jane Doe || Frontend Dev".into(),
            og_title: "Jane Doe || Senior Frontend Web Developer".into(),
            description: "Senior Frontend Web Developer".into(),
            keywords: "vuejs,reactjs".into(),
            og_image: Some("https://example.com/cover.jpg".into()),
        }
    }

    #[test]
    fn site_meta_uses_defaults() {
        let meta = PageMeta::for_site(&site());
        assert_eq!(meta.og_type, "article");
        assert_eq!(meta.og_description, "Senior Frontend Web Developer");
    }

    #[test]
    fn article_meta_overrides_site() {
        let attributes = Attributes {
            title: "SSR with Vike".into(),
            description: "Prerendering a blog".into(),
            tags: vec!["vike".into(), "ssr".into()],
        };
        let meta = PageMeta::for_article(&site(), &attributes);
        assert_eq!(meta.title, "SSR with Vike");
        assert_eq!(meta.og_title, "SSR with Vike");
        assert_eq!(meta.description, "Prerendering a blog");
        assert_eq!(meta.keywords, "vike,ssr");
    }

    #[test]
    fn article_without_front_matter_keeps_site_meta() {
        let meta = PageMeta::for_article(&site(), &Attributes::default());
        assert_eq!(meta, PageMeta::for_site(&site()));
    }

    #[test]
    fn document_escapes_meta_but_not_body() {
        let mut meta = PageMeta::for_site(&site());
        meta.title = "Tom & \"Jerry\" <3".into();
        let html = render_document(&meta, "<p>raw</p>");
        assert!(html.contains("<title>Tom &amp; &quot;Jerry&quot; &lt;3</title>"));
        assert!(html.contains(r#"<div id="app"><p>raw</p></div>"#));
        assert!(html.contains(r#"<meta property="og:image:type" content="image/jpg" />"#));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn page_data_serializes_camel_case() {
        let article = Article {
            slug: "hello".into(),
            attributes: Attributes::default(),
            html: "<p>hi there</p>".into(),
        };
        let json = serde_json::to_value(ArticlePageData::new(&article, 515)).unwrap();
        assert_eq!(json["articleSlug"], "hello");
        assert_eq!(json["summary"], "<p>hi there</p>...");
        assert_eq!(json["attributes"]["tags"], serde_json::json!([]));
    }
}
