//! Sitemap generation

use chrono::{DateTime, Utc};

use crate::config::SiteConfig;
use crate::content::PostSummary;
use crate::helpers::{blog_url, date_xml, escape_xml, full_url_for, parse_date};

/// One `<url>` of the sitemap
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Site root, blog index, then one entry per post
pub fn sitemap_entries(
    config: &SiteConfig,
    posts: &[&PostSummary],
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let mut entries = vec![
        SitemapEntry {
            url: full_url_for(config, "/"),
            last_modified: Some(now),
        },
        SitemapEntry {
            url: blog_url(config),
            last_modified: Some(now),
        },
    ];

    for post in posts {
        let modified = post.frontmatter.last_modified();
        let last_modified = parse_date(modified);
        if last_modified.is_none() {
            tracing::warn!(
                "Post {:?} has unparsable date {:?}, omitting lastmod",
                post.slug,
                modified
            );
        }
        entries.push(SitemapEntry {
            url: post.url(config),
            last_modified,
        });
    }

    entries
}

/// Render entries as a sitemaps.org `urlset`
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.url)));
        if let Some(modified) = &entry.last_modified {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", date_xml(modified)));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
