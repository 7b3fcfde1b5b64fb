//! Content loader - reads single posts from the content store

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{frontmatter, Frontmatter, Post, PostSummary, ReadingTime};
use crate::config::SiteConfig;
use crate::error::ContentError;

/// Loads posts from `<content_dir>/<slug>/index.<ext>`
#[derive(Debug, Clone)]
pub struct PostLoader {
    content_dir: PathBuf,
    extensions: Vec<String>,
    words_per_minute: usize,
}

impl PostLoader {
    /// Create a loader rooted at `content_dir`
    pub fn new<P: AsRef<Path>>(content_dir: P) -> Self {
        let defaults = SiteConfig::default();
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            extensions: defaults.extensions,
            words_per_minute: defaults.words_per_minute,
        }
    }

    /// Create a loader from site configuration
    pub fn from_config(base_dir: &Path, config: &SiteConfig) -> Self {
        Self {
            content_dir: base_dir.join(&config.content_dir),
            extensions: config.extensions.clone(),
            words_per_minute: config.words_per_minute,
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Names of all post directories. A missing content store is empty.
    pub fn list_slugs(&self) -> Result<Vec<String>, ContentError> {
        if !self.content_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut slugs = Vec::new();
        for entry in WalkDir::new(&self.content_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if is_broken_link(&e) => {
                    tracing::warn!("Skipping unreadable entry {:?}: {}", e.path(), e);
                    continue;
                }
                Err(e) => {
                    return Err(ContentError::Io {
                        path: e
                            .path()
                            .map(Path::to_path_buf)
                            .unwrap_or_else(|| self.content_dir.clone()),
                        source: e.into(),
                    })
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) => slugs.push(name.to_string()),
                None => tracing::warn!("Skipping non UTF-8 directory {:?}", entry.path()),
            }
        }

        Ok(slugs)
    }

    /// Path of the post file for `slug`, if one exists
    pub fn post_path(&self, slug: &str) -> Option<PathBuf> {
        if !is_valid_slug(slug) {
            return None;
        }
        let dir = self.content_dir.join(slug);
        self.extensions
            .iter()
            .map(|ext| dir.join(format!("index.{}", ext)))
            .find(|path| path.is_file())
    }

    /// Load one post. `Ok(None)` when no post file exists for `slug`.
    pub fn load(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        let Some(path) = self.post_path(slug) else {
            tracing::debug!("No post for slug {:?}", slug);
            return Ok(None);
        };

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            // Removed between the existence check and the read
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ContentError::Io { path, source: e }),
        };
        let source = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = source {
            tracing::warn!("{:?} is not valid UTF-8, invalid bytes replaced", path);
        }

        let (raw, body) = frontmatter::extract(&source).map_err(|message| {
            ContentError::Syntax {
                path: path.clone(),
                message,
            }
        })?;
        let frontmatter = Frontmatter::validate(&raw).map_err(|e| ContentError::Validation {
            path: path.clone(),
            source: e,
        })?;
        let reading_time = ReadingTime::estimate(body, self.words_per_minute);

        tracing::debug!("Loaded post {:?} ({} words)", slug, reading_time.words);

        Ok(Some(Post {
            summary: PostSummary {
                slug: slug.to_string(),
                frontmatter,
                reading_time,
            },
            content: body.to_string(),
        }))
    }
}

/// Dangling symlinks and link loops inside the content store
fn is_broken_link(e: &walkdir::Error) -> bool {
    e.depth() > 0
        && (e.loop_ancestor().is_some()
            || e.io_error().map_or(false, |io| io.kind() == ErrorKind::NotFound))
}

/// A slug names exactly one directory inside the content store
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\'])
        && !slug.contains('\0')
}
