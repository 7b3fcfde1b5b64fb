//! Post models

use serde::{Deserialize, Serialize};

use super::{Frontmatter, ReadingTime};
use crate::config::SiteConfig;
use crate::helpers::post_url;

/// A post as listed in the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    /// Directory name under the content store
    pub slug: String,
    pub frontmatter: Frontmatter,
    pub reading_time: ReadingTime,
}

impl PostSummary {
    /// Public URL of the post
    pub fn url(&self, config: &SiteConfig) -> String {
        post_url(config, &self.slug)
    }

    /// `canonicalUrl` from front-matter, else the computed post URL
    pub fn canonical_url(&self, config: &SiteConfig) -> String {
        self.frontmatter
            .canonical_url
            .clone()
            .unwrap_or_else(|| self.url(config))
    }
}

/// A full post: its summary plus the unrendered body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(flatten)]
    pub summary: PostSummary,
    /// Raw markup after the front-matter block
    pub content: String,
}

impl Post {
    pub fn slug(&self) -> &str {
        &self.summary.slug
    }

    pub fn frontmatter(&self) -> &Frontmatter {
        &self.summary.frontmatter
    }

    pub fn reading_time(&self) -> &ReadingTime {
        &self.summary.reading_time
    }

    /// See [`PostSummary::canonical_url`]
    pub fn canonical_url(&self, config: &SiteConfig) -> String {
        self.summary.canonical_url(config)
    }

    /// Drop the body, keeping what the index stores
    pub fn into_summary(self) -> PostSummary {
        self.summary
    }
}
