//! Content module - front-matter, posts and the post index

pub mod frontmatter;
mod index;
mod loader;
mod post;
mod reading_time;

pub use frontmatter::Frontmatter;
pub use index::{Adjacent, ListOptions, PostIndex};
pub use loader::PostLoader;
pub use post::{Post, PostSummary};
pub use reading_time::{count_words, ReadingTime, DEFAULT_WORDS_PER_MINUTE};
