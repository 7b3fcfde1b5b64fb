//! RSS 2.0 feed

use crate::config::SiteConfig;
use crate::content::PostSummary;
use crate::helpers::{blog_url, escape_xml, parse_date, rfc822};

/// Render the RSS document for `posts` (already filtered and sorted)
pub fn render_feed(config: &SiteConfig, posts: &[&PostSummary]) -> String {
    let limit = match config.feed.limit {
        0 => posts.len(),
        n => n,
    };

    let mut feed = String::new();
    feed.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    feed.push('\n');
    feed.push_str(r#"<rss version="2.0">"#);
    feed.push('\n');
    feed.push_str("  <channel>\n");
    feed.push_str(&format!("    <title>{}</title>\n", escape_xml(&config.title)));
    feed.push_str(&format!("    <link>{}</link>\n", escape_xml(&blog_url(config))));
    feed.push_str(&format!(
        "    <description>{}</description>\n",
        escape_xml(&config.description)
    ));
    if !config.language.is_empty() {
        feed.push_str(&format!(
            "    <language>{}</language>\n",
            escape_xml(&config.language)
        ));
    }

    for post in posts.iter().take(limit) {
        push_item(&mut feed, config, post);
    }

    feed.push_str("  </channel>\n");
    feed.push_str("</rss>\n");
    feed
}

fn push_item(feed: &mut String, config: &SiteConfig, post: &PostSummary) {
    let fm = &post.frontmatter;
    let link = escape_xml(&post.url(config));

    feed.push_str("    <item>\n");
    feed.push_str(&format!("      <title>{}</title>\n", escape_xml(&fm.title)));
    feed.push_str(&format!("      <link>{}</link>\n", link));
    feed.push_str(&format!("      <guid>{}</guid>\n", link));
    match parse_date(&fm.date) {
        Some(date) => feed.push_str(&format!("      <pubDate>{}</pubDate>\n", rfc822(&date))),
        None => tracing::warn!(
            "Post {:?} has unparsable date {:?}, omitting pubDate",
            post.slug,
            fm.date
        ),
    }
    if !fm.description.is_empty() {
        feed.push_str(&format!(
            "      <description>{}</description>\n",
            escape_xml(&fm.description)
        ));
    }
    feed.push_str("    </item>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Frontmatter, ReadingTime};

    fn post(slug: &str, date: &str, description: &str) -> PostSummary {
        PostSummary {
            slug: slug.to_string(),
            frontmatter: Frontmatter {
                title: format!("{} & more", slug),
                description: description.to_string(),
                date: date.to_string(),
                ..Default::default()
            },
            reading_time: ReadingTime::estimate("", 200),
        }
    }

    fn config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com".to_string();
        config.title = "Notes".to_string();
        config
    }

    #[test]
    fn test_render_feed() {
        let june = post("june", "2024-06-01", "Summer <notes>");
        let january = post("january", "2024-01-01", "");
        let xml = render_feed(&config(), &[&june, &january]);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<title>Notes</title>"));
        assert!(xml.contains("<link>https://example.com/blog</link>"));
        assert!(xml.contains("<title>june &amp; more</title>"));
        assert!(xml.contains("<link>https://example.com/blog/june</link>"));
        assert!(xml.contains("<guid>https://example.com/blog/june</guid>"));
        assert!(xml.contains("<pubDate>Sat, 01 Jun 2024 00:00:00 +0000</pubDate>"));
        assert!(xml.contains("<description>Summer &lt;notes&gt;</description>"));
        assert_eq!(xml.matches("<item>").count(), 2);
        // Only the channel and june carry a description
        assert_eq!(xml.matches("<description>").count(), 2);
        assert!(xml.find("/blog/june<").unwrap() < xml.find("/blog/january<").unwrap());
    }

    #[test]
    fn test_feed_limit_and_bad_date() {
        let mut config = config();
        config.feed.limit = 1;
        let odd = post("odd", "whenever", "");
        let other = post("other", "2024-01-01", "");
        let xml = render_feed(&config, &[&odd, &other]);

        assert_eq!(xml.matches("<item>").count(), 1);
        assert!(!xml.contains("<pubDate>"));
    }
}
