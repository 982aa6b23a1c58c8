use crate::config::Config;
use crate::error::SiteResult;
use crate::lister::ContentDir;
use crate::page::{escape_html, render_document, ArticlePageData, PageMeta};
use crate::slug::article_link;
use crate::summary::ELLIPSIS;
use chrono::offset::Utc;
use chrono::DateTime;
use regex::Regex;
use serde::Serialize;
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::info;

/// One row of the article listing.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct ListingEntry {
    pub slug: String,
    pub link: String,
    pub title: String,
    pub description: String,
    pub summary: String,
    pub modified_at: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub articles: usize,
    pub routes: Vec<String>,
}

#[derive(Debug)]
pub struct Ssg {
    config: Config,
    content: ContentDir,
    dest: PathBuf,
}

impl Ssg {
    pub fn new(config: Config) -> Ssg {
        let content = ContentDir::new(config.articles_dir());
        let dest = config.output_dir();
        Ssg {
            config,
            content,
            dest,
        }
    }

    pub fn content(&self) -> &ContentDir {
        &self.content
    }

    fn process_article(&self, slug: &str) -> SiteResult<ListingEntry> {
        let article = self.content.load(slug)?;

        let dest_dir = self.dest.join("articles").join(slug);
        std::fs::create_dir_all(&dest_dir)?;
        info!("Processing {} -> {}", slug, dest_dir.display());

        let data = ArticlePageData::new(&article, self.config.summary_length);
        std::fs::write(dest_dir.join("index.json"), serde_json::to_string(&data)?)?;

        let meta = PageMeta::for_article(&self.config.site, &article.attributes);
        let body = format!("<article>\n{}</article>", article.html);
        std::fs::write(dest_dir.join("index.html"), render_document(&meta, &body))?;

        let metadata = std::fs::metadata(self.content.source_path(slug)?)?;
        let modified_at: DateTime<Utc> = metadata.modified()?.into();

        Ok(ListingEntry {
            slug: slug.to_string(),
            link: article_link(slug),
            title: article.attributes.title,
            description: article.attributes.description,
            summary: data.summary,
            modified_at: modified_at.format("%Y/%m/%d %H:%M").to_string(),
        })
    }

    /// Render every article, the listing and the home page into the output
    /// directory.
    pub fn build(&self) -> SiteResult<BuildReport> {
        std::fs::create_dir_all(self.dest.join("articles"))?;

        let mut entries = vec![];
        for slug in self.content.slugs(None)? {
            entries.push(self.process_article(&slug)?);
        }

        std::fs::write(
            self.dest.join("articles").join("index.json"),
            serde_json::to_string(&json! {
                {
                    "articles": entries,
                }
            })?,
        )?;

        let take = match self.config.home_articles {
            0 => entries.len(),
            n => n,
        };
        let home = render_document(
            &PageMeta::for_site(&self.config.site),
            &home_body(entries.iter().take(take)),
        );
        std::fs::write(self.dest.join("index.html"), home)?;

        let mut routes = vec!["/".to_string()];
        routes.extend(self.content.prerender_routes()?);
        info!(
            "Built {} articles into {}",
            entries.len(),
            self.dest.display()
        );

        Ok(BuildReport {
            articles: entries.len(),
            routes,
        })
    }
}

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

/// `html` with every tag removed, including one cut off at the end.
/// Entities are kept, so the result is still valid HTML text.
fn plain_text(html: &str) -> String {
    let re = TAG_REGEX
        .get_or_init(|| Regex::new(r"<[^>]*(?:>|\z)").expect("tag pattern is valid"));
    re.replace_all(html, "").into_owned()
}

fn home_body<'a>(entries: impl Iterator<Item = &'a ListingEntry>) -> String {
    let mut body = String::from("<ul class=\"articles\">\n");
    for entry in entries {
        let title = if entry.title.is_empty() {
            &entry.slug
        } else {
            &entry.title
        };
        let summary = entry
            .summary
            .strip_suffix(ELLIPSIS)
            .unwrap_or(&entry.summary);
        let _ = writeln!(
            body,
            "  <li><a href=\"{}\">{}</a><div class=\"summary\">{}{}</div></li>",
            escape_html(&entry.link),
            escape_html(title),
            plain_text(summary),
            ELLIPSIS
        );
    }
    body.push_str("</ul>");
    body
}
