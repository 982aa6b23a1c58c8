use crate::error::{SiteError, SiteResult};
use crate::summary::trim_summary_with;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::OnceLock;

/// Front matter of an article.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Attributes {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "tag_list")]
    pub tags: Vec<String>,
}

impl Attributes {
    /// Tags joined for a keywords meta tag.
    pub fn keywords(&self) -> String {
        self.tags.join(",")
    }
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Article {
    pub slug: String,
    pub attributes: Attributes,
    pub html: String,
}

impl Article {
    pub fn summary(&self, budget: usize) -> String {
        trim_summary_with(&self.html, budget)
    }
}

/// Tags may be written as a YAML list or as one comma separated string.
fn tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        List(Vec<String>),
        Joined(String),
        Missing(()),
    }

    Ok(match Tags::deserialize(deserializer)? {
        Tags::List(tags) => tags,
        Tags::Joined(tags) => tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        Tags::Missing(()) => vec![],
    })
}

static FRONT_MATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn front_matter_regex() -> &'static Regex {
    FRONT_MATTER_REGEX.get_or_init(|| {
        Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)")
            .expect("front matter pattern is valid")
    })
}

/// Split `source` into its front matter and markdown body.
///
/// A document without front matter gets empty attributes and is returned
/// whole as the body.
pub fn parse_front_matter<'a>(slug: &str, source: &'a str) -> SiteResult<(Attributes, &'a str)> {
    let Some(captures) = front_matter_regex().captures(source) else {
        return Ok((Attributes::default(), source));
    };
    let (Some(whole), Some(yaml)) = (captures.get(0), captures.get(1)) else {
        return Ok((Attributes::default(), source));
    };

    let attributes = if yaml.as_str().trim().is_empty() {
        Attributes::default()
    } else {
        serde_yaml::from_str(yaml.as_str()).map_err(|source| SiteError::FrontMatter {
            slug: slug.to_string(),
            source,
        })?
    };

    Ok((attributes, &source[whole.end()..]))
}
