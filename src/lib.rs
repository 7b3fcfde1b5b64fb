//! folio: a frontmatter-driven blog content engine
//!
//! Posts live in `content/blog/<slug>/index.mdx`. This crate validates their
//! front-matter, keeps a sorted index of them, and produces the RSS feed,
//! sitemap and JSON listing a site needs.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ListOptions, Post, PostIndex, PostLoader, PostSummary};
use error::ContentError;

/// Configuration file looked up in the base directory
pub const CONFIG_FILE: &str = "folio.yml";

/// The main application: configuration plus the post index it owns
#[derive(Debug)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content store (one directory per post)
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    index: PostIndex,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let index = PostIndex::new(PostLoader::from_config(&base_dir, &config));

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            index,
        }
    }

    /// The post index owned by this instance
    pub fn index(&self) -> &PostIndex {
        &self.index
    }

    /// Slugs of all post directories
    pub fn post_slugs(&self) -> Result<Vec<String>, ContentError> {
        self.index.slugs()
    }

    /// Load one post; `None` when it does not exist
    pub fn load_post(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        self.index.load(slug)
    }

    /// All posts newest first, from the cached index
    pub fn all_posts(&self, options: ListOptions) -> Result<Vec<&PostSummary>, ContentError> {
        self.index.all(options)
    }

    /// Generate the feed, sitemap and JSON listing
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
