//! Site configuration read from `folio.yml`.

use crate::error::{SiteError, SiteResult};
use crate::summary::SUMMARY_LENGTH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "folio.yml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    /// Preview budget in characters.
    #[serde(default = "default_summary_length")]
    pub summary_length: usize,

    /// Number of articles listed on the home page. Zero lists all.
    #[serde(default = "default_home_articles")]
    pub home_articles: usize,

    #[serde(skip)]
    config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site: SiteConfig::default(),
            paths: PathsConfig::default(),
            summary_length: default_summary_length(),
            home_articles: default_home_articles(),
            config_path: None,
        }
    }
}

fn default_summary_length() -> usize {
    SUMMARY_LENGTH
}

fn default_home_articles() -> usize {
    3
}

/// Meta tag values for pages that are not articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub og_title: String,
    pub description: String,
    pub keywords: String,
    pub og_image: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            title: "Portfolio".to_string(),
            og_title: "Portfolio".to_string(),
            description: String::new(),
            keywords: String::new(),
            og_image: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub articles: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            articles: PathBuf::from("src/assets/articles"),
            output: PathBuf::from("dist"),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> SiteResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config =
            serde_yaml::from_str(&contents).map_err(|source| SiteError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Like [`Config::from_file`], but a missing file yields the defaults
    /// with paths resolved next to where the file would be.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> SiteResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }
        tracing::debug!("no config at {}, using defaults", path.display());
        Ok(Config {
            config_path: Some(path.to_path_buf()),
            ..Config::default()
        })
    }

    pub fn articles_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.articles)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.output)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.config_path.as_deref().and_then(Path::parent) {
            Some(parent) => parent.join(path),
            None => path.to_path_buf(),
        }
    }
}
