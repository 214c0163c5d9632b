//! Decomposes URLs into typed, individually toggleable components and
//! rebuilds URLs from whichever components remain enabled.

pub mod api;
pub mod cli;
pub mod session;
pub mod url_parser;
pub mod utils;

pub use session::Session;
pub use url_parser::{parse_url, reconstruct_url, ParseError, ParseResult, UrlComponent, UrlPartType};
