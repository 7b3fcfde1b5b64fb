//! List site content

use anyhow::Result;

use crate::content::{ListOptions, PostSummary};
use crate::helpers::display_date;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str, options: ListOptions) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = folio.all_posts(options)?;
            print!("{}", format_posts(&posts));
        }
        "tag" | "tags" => {
            let tags = folio.index().tags(options)?;
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}

/// One line per post: date, title, reading time, slug
pub fn format_posts(posts: &[&PostSummary]) -> String {
    let mut out = format!("Posts ({}):\n", posts.len());
    for post in posts {
        let fm = &post.frontmatter;
        out.push_str(&format!(
            "  {} - {} ({}) [{}]{}\n",
            display_date(&fm.date),
            fm.title,
            post.reading_time.text,
            post.slug,
            if fm.draft { " (draft)" } else { "" }
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Frontmatter, ReadingTime};

    #[test]
    fn test_format_posts() {
        let post = PostSummary {
            slug: "hello".to_string(),
            frontmatter: Frontmatter {
                title: "Hello".to_string(),
                date: "2024-06-01".to_string(),
                draft: true,
                ..Default::default()
            },
            reading_time: ReadingTime::estimate("a few words here", 200),
        };

        assert_eq!(
            format_posts(&[&post]),
            "Posts (1):\n  Jun 1, 2024 - Hello (1 min read) [hello] (draft)\n"
        );
    }
}
