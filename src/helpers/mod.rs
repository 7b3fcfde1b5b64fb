//! Helper functions shared by the generator, server and commands

mod date;
mod url;
mod xml;

pub use date::*;
pub use url::*;
pub use xml::*;
