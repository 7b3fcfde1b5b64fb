//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/blog") // -> "https://example.com/blog"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

/// URL of the blog index page
pub fn blog_url(config: &SiteConfig) -> String {
    full_url_for(config, config.blog_path.trim_matches('/'))
}

/// URL of a single post: `<url>/<blog_path>/<slug>`
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    let blog = config.blog_path.trim_matches('/');
    let slug = encode_segment(slug);
    if blog.is_empty() {
        full_url_for(config, &slug)
    } else {
        full_url_for(config, &format!("{}/{}", blog, slug))
    }
}

/// Percent-encode one path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}
