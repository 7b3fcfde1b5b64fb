//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Folio;

/// Scaffold `<content_dir>/<slug>/index.<ext>` for a new post
pub fn create_post(folio: &Folio, title: &str, slug: Option<&str>, draft: bool) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => s.to_string(),
        None => slug::slugify(title),
    };
    if slug.is_empty() || slug.contains(['/', '\\']) || slug == "." || slug == ".." {
        anyhow::bail!("Invalid slug: {:?}", slug);
    }

    let ext = folio
        .config
        .extensions
        .first()
        .map(String::as_str)
        .unwrap_or("mdx");
    let post_dir = folio.content_dir.join(&slug);
    let file_path = post_dir.join(format!("index.{}", ext));

    if post_dir.exists() {
        anyhow::bail!("Post already exists: {:?}", post_dir);
    }
    fs::create_dir_all(&post_dir)?;

    let now = chrono::Local::now();
    let mut content = String::from("---\n");
    content.push_str(&format!("title: {}\n", yaml_string(title)));
    content.push_str("description: \"\"\n");
    content.push_str(&format!("date: \"{}\"\n", now.format("%Y-%m-%d")));
    content.push_str("tags: []\n");
    if draft {
        content.push_str("draft: true\n");
    }
    content.push_str("---\n\n");

    fs::write(&file_path, content)?;
    tracing::info!("Created {:?}", file_path);

    Ok(file_path)
}

/// Quote a scalar so titles like `Rust: a tour` stay strings
fn yaml_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("{:?}", s))
}
