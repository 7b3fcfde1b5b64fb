//! Site configuration (folio.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub blog_path: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Writing
    /// Candidate extensions for `index.<ext>`, tried in order
    pub extensions: Vec<String>,
    pub words_per_minute: usize,

    // Output
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub sitemap: SitemapConfig,
    pub generate_json: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: "Writing, notes, and case studies.".to_string(),
            author: String::new(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            blog_path: "blog".to_string(),

            content_dir: "content/blog".to_string(),
            public_dir: "public".to_string(),

            extensions: vec!["mdx".to_string(), "md".to_string()],
            words_per_minute: crate::content::DEFAULT_WORDS_PER_MINUTE,

            feed: FeedConfig::default(),
            sitemap: SitemapConfig::default(),
            generate_json: true,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// RSS feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub enable: bool,
    pub path: String,
    /// Maximum number of items, 0 for all posts
    pub limit: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "rss.xml".to_string(),
            limit: 0,
        }
    }
}

/// Sitemap configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    pub enable: bool,
    pub path: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".to_string(),
        }
    }
}
