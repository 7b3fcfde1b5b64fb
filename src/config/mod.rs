//! Configuration module

mod site;

pub use site::FeedConfig;
pub use site::SiteConfig;
pub use site::SitemapConfig;
