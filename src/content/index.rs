//! Post index - every post summary, sorted newest first
//!
//! The index is built once, on first use, and then kept for the lifetime of
//! its owner. Later calls only filter the cached list; nothing is re-read
//! from disk.

use std::sync::OnceLock;

use super::{Post, PostLoader, PostSummary};
use crate::error::ContentError;

/// Options for listing posts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Include posts marked `draft: true` (preview mode)
    pub include_drafts: bool,
}

impl ListOptions {
    pub fn with_drafts() -> Self {
        Self {
            include_drafts: true,
        }
    }

    fn admits(&self, post: &PostSummary) -> bool {
        self.include_drafts || !post.frontmatter.draft
    }
}

/// Posts adjacent to a given post in index order
#[derive(Debug, Clone, Copy)]
pub struct Adjacent<'a> {
    pub newer: Option<&'a PostSummary>,
    pub older: Option<&'a PostSummary>,
}

/// Lazily built, immutable index of post summaries
#[derive(Debug)]
pub struct PostIndex {
    loader: PostLoader,
    cache: OnceLock<Vec<PostSummary>>,
}

impl PostIndex {
    pub fn new(loader: PostLoader) -> Self {
        Self {
            loader,
            cache: OnceLock::new(),
        }
    }

    /// Slugs of every post directory, drafts included
    pub fn slugs(&self) -> Result<Vec<String>, ContentError> {
        self.loader.list_slugs()
    }

    /// Load a single post, bypassing the index cache
    pub fn load(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        self.loader.load(slug)
    }

    /// Whether the index has been built
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    /// All posts, newest first. Drafts are left out unless requested.
    pub fn all(&self, options: ListOptions) -> Result<Vec<&PostSummary>, ContentError> {
        Ok(self
            .cached()?
            .iter()
            .filter(|post| options.admits(post))
            .collect())
    }

    /// Tags with their post counts, in first-seen order
    pub fn tags(&self, options: ListOptions) -> Result<Vec<(&str, usize)>, ContentError> {
        let mut tags: Vec<(&str, usize)> = Vec::new();
        for post in self.all(options)? {
            for tag in &post.frontmatter.tags {
                match tags.iter_mut().find(|(name, _)| *name == tag.as_str()) {
                    Some((_, count)) => *count += 1,
                    None => tags.push((tag.as_str(), 1)),
                }
            }
        }
        Ok(tags)
    }

    /// The newer and older neighbours of `slug`, or `None` if it is not listed
    pub fn adjacent(
        &self,
        slug: &str,
        options: ListOptions,
    ) -> Result<Option<Adjacent<'_>>, ContentError> {
        let posts = self.all(options)?;
        let Some(pos) = posts.iter().position(|p| p.slug == slug) else {
            return Ok(None);
        };

        Ok(Some(Adjacent {
            newer: pos.checked_sub(1).map(|i| posts[i]),
            older: posts.get(pos + 1).copied(),
        }))
    }

    fn cached(&self) -> Result<&[PostSummary], ContentError> {
        if let Some(posts) = self.cache.get() {
            return Ok(posts);
        }

        let posts = self.build()?;
        // A concurrent builder may have won; either list is equivalent
        Ok(self.cache.get_or_init(|| posts))
    }

    fn build(&self) -> Result<Vec<PostSummary>, ContentError> {
        let mut posts = Vec::new();
        for slug in self.loader.list_slugs()? {
            match self.loader.load(&slug)? {
                Some(post) => posts.push(post.into_summary()),
                None => tracing::debug!("Skipping {:?}: no post file", slug),
            }
        }

        // Stable: equal dates keep directory order
        posts.sort_by(|a, b| b.frontmatter.date.cmp(&a.frontmatter.date));

        tracing::info!(
            "Indexed {} posts from {:?}",
            posts.len(),
            self.loader.content_dir()
        );
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_post(root: &Path, slug: &str, date: &str, extra: &str) {
        let dir = root.join(slug);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("index.mdx"),
            format!("---\ntitle: {slug}\ndate: \"{date}\"\n{extra}---\nSome body text.\n"),
        )
        .unwrap();
    }

    fn slugs(posts: &[&PostSummary]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    fn fixture() -> (TempDir, PostIndex) {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "january", "2024-01-01", "tags: [rust, web]\n");
        write_post(tmp.path(), "june", "2024-06-01", "tags: [rust]\n");
        write_post(tmp.path(), "secret", "2024-03-01", "draft: true\ntags: [wip]\n");
        let index = PostIndex::new(PostLoader::new(tmp.path()));
        (tmp, index)
    }

    #[test]
    fn test_sorted_newest_first() {
        let (_tmp, index) = fixture();
        let posts = index.all(ListOptions::default()).unwrap();
        assert_eq!(slugs(&posts), vec!["june", "january"]);
    }

    #[test]
    fn test_draft_filtering() {
        let (_tmp, index) = fixture();
        let public = index.all(ListOptions::default()).unwrap();
        assert!(public.iter().all(|p| !p.frontmatter.draft));

        let preview = index.all(ListOptions::with_drafts()).unwrap();
        assert_eq!(slugs(&preview), vec!["june", "secret", "january"]);
        assert!(public.iter().all(|p| preview.contains(p)));
    }

    #[test]
    fn test_every_listed_slug_loads() {
        let (_tmp, index) = fixture();
        for slug in index.slugs().unwrap() {
            assert!(index.load(&slug).unwrap().is_some(), "{slug} should load");
        }
    }

    #[test]
    fn test_cache_is_not_refreshed() {
        let (tmp, index) = fixture();
        assert!(!index.is_loaded());
        assert_eq!(index.all(ListOptions::default()).unwrap().len(), 2);
        assert!(index.is_loaded());

        write_post(tmp.path(), "december", "2024-12-01", "");
        fs::remove_dir_all(tmp.path().join("june")).unwrap();

        let posts = index.all(ListOptions::default()).unwrap();
        assert_eq!(slugs(&posts), vec!["june", "january"]);
        // Single loads still see the disk
        assert!(index.load("december").unwrap().is_some());
        assert!(index.load("june").unwrap().is_none());
    }

    #[test]
    fn test_equal_dates_keep_directory_order() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a", "2024-05-05", "");
        write_post(tmp.path(), "b", "2024-05-05", "");
        write_post(tmp.path(), "c", "2024-05-06", "");

        let index = PostIndex::new(PostLoader::new(tmp.path()));
        let posts = index.all(ListOptions::default()).unwrap();
        assert_eq!(slugs(&posts), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_empty_store() {
        let tmp = TempDir::new().unwrap();
        let index = PostIndex::new(PostLoader::new(tmp.path().join("missing")));
        assert!(index.all(ListOptions::with_drafts()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_post_fails_index() {
        let (tmp, index) = fixture();
        let dir = tmp.path().join("broken");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.mdx"), "---\ndate: 2024-01-01\n---\n").unwrap();

        assert!(matches!(
            index.all(ListOptions::default()),
            Err(ContentError::Validation { .. })
        ));
        assert!(!index.is_loaded());
    }

    #[test]
    fn test_tags() {
        let (_tmp, index) = fixture();
        assert_eq!(
            index.tags(ListOptions::default()).unwrap(),
            vec![("rust", 2), ("web", 1)]
        );
        assert!(index
            .tags(ListOptions::with_drafts())
            .unwrap()
            .contains(&("wip", 1)));
    }

    #[test]
    fn test_adjacent() {
        let (_tmp, index) = fixture();
        let adj = index
            .adjacent("january", ListOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(adj.newer.map(|p| p.slug.as_str()), Some("june"));
        assert!(adj.older.is_none());

        assert!(index
            .adjacent("secret", ListOptions::default())
            .unwrap()
            .is_none());
    }
}
