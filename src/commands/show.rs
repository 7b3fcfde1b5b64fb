//! Show a single post

use anyhow::Result;

use crate::content::{ListOptions, Post};
use crate::helpers::display_date;
use crate::Folio;

/// Print one post's metadata. Missing posts, and drafts unless requested,
/// are reported as not found.
pub fn run(folio: &Folio, slug: &str, options: ListOptions) -> Result<()> {
    let post = match folio.load_post(slug)? {
        Some(post) if options.include_drafts || !post.frontmatter().draft => post,
        _ => anyhow::bail!("Post not found: {}", slug),
    };

    print!("{}", describe(folio, &post));

    if let Some(adjacent) = folio.index().adjacent(slug, options)? {
        if let Some(newer) = adjacent.newer {
            println!("Newer:       {} [{}]", newer.frontmatter.title, newer.slug);
        }
        if let Some(older) = adjacent.older {
            println!("Older:       {} [{}]", older.frontmatter.title, older.slug);
        }
    }

    Ok(())
}

/// Human-readable summary of a post
pub fn describe(folio: &Folio, post: &Post) -> String {
    let fm = post.frontmatter();
    let mut out = String::new();

    out.push_str(&format!("Title:       {}\n", fm.title));
    if !fm.description.is_empty() {
        out.push_str(&format!("Description: {}\n", fm.description));
    }
    out.push_str(&format!("Date:        {}\n", display_date(&fm.date)));
    if let Some(updated) = &fm.updated {
        out.push_str(&format!("Updated:     {}\n", display_date(updated)));
    }
    if !fm.tags.is_empty() {
        out.push_str(&format!("Tags:        {}\n", fm.tags.join(", ")));
    }
    if let Some(cover) = &fm.cover_image {
        out.push_str(&format!("Cover:       {}\n", cover));
    }
    if fm.draft {
        out.push_str("Draft:       yes\n");
    }
    out.push_str(&format!("URL:         {}\n", post.canonical_url(&folio.config)));
    out.push_str(&format!(
        "Reading:     {} ({} words)\n",
        post.reading_time().text,
        post.reading_time().words
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> (TempDir, Folio) {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("content/blog/draft-post");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("index.mdx"),
            "---\ntitle: Draft\ndate: 2024-05-01\ntags: [a, b]\ndraft: true\ncanonicalUrl: https://elsewhere.dev/p\n---\nJust two\n",
        )
        .unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        (tmp, folio)
    }

    #[test]
    fn test_describe() {
        let (_tmp, folio) = site();
        let post = folio.load_post("draft-post").unwrap().unwrap();
        let text = describe(&folio, &post);

        assert!(text.contains("Title:       Draft\n"));
        assert!(text.contains("Date:        May 1, 2024\n"));
        assert!(text.contains("Tags:        a, b\n"));
        assert!(text.contains("Draft:       yes\n"));
        assert!(text.contains("URL:         https://elsewhere.dev/p\n"));
        assert!(text.contains("Reading:     1 min read (2 words)\n"));
    }

    #[test]
    fn test_drafts_hidden_unless_requested() {
        let (_tmp, folio) = site();
        assert!(run(&folio, "draft-post", ListOptions::default()).is_err());
        assert!(run(&folio, "draft-post", ListOptions::with_drafts()).is_ok());
        assert!(run(&folio, "missing", ListOptions::with_drafts()).is_err());
    }
}
