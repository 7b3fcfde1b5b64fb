//! Generator module - writes the feed, sitemap and post listing

mod feed;
mod sitemap;

pub use feed::render_feed;
pub use sitemap::{render_sitemap, sitemap_entries, SitemapEntry};

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::ListOptions;
use crate::Folio;

/// File name of the JSON post listing
pub const POSTS_JSON: &str = "posts.json";

/// Writes generated files into the public directory
pub struct Generator<'a> {
    folio: &'a Folio,
}

impl<'a> Generator<'a> {
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Generate every enabled output. Returns the written paths.
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.folio.public_dir)?;

        let mut written = Vec::new();
        let config = &self.folio.config;

        if config.feed.enable {
            written.push(self.write(&config.feed.path, &self.feed()?)?);
        }
        if config.sitemap.enable {
            written.push(self.write(&config.sitemap.path, &self.sitemap()?)?);
        }
        if config.generate_json {
            written.push(self.write(POSTS_JSON, &self.posts_json()?)?);
        }

        Ok(written)
    }

    /// RSS feed of published posts
    pub fn feed(&self) -> Result<String> {
        let posts = self.folio.all_posts(ListOptions::default())?;
        Ok(render_feed(&self.folio.config, &posts))
    }

    /// Sitemap of the site root, blog index and published posts
    pub fn sitemap(&self) -> Result<String> {
        let posts = self.folio.all_posts(ListOptions::default())?;
        let entries = sitemap_entries(&self.folio.config, &posts, chrono::Utc::now());
        Ok(render_sitemap(&entries))
    }

    /// Published post summaries as JSON
    pub fn posts_json(&self) -> Result<String> {
        let posts = self.folio.all_posts(ListOptions::default())?;
        Ok(serde_json::to_string_pretty(&posts)?)
    }

    fn write(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        let path = self.folio.public_dir.join(Path::new(relative.trim_start_matches('/')));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        tracing::info!("Generated {}", relative);
        Ok(path)
    }
}
