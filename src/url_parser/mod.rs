//! Decomposition of URLs into toggleable components and reconstruction back
//! into a string.
//!
//! The two halves never call each other. They only share the
//! [`UrlComponent`] list, which the caller owns and edits in between.

pub mod component;
pub mod identifier;
pub mod parser;
pub mod url_reconstructor;
pub mod url_validator;


pub use component::{UrlComponent, UrlPartType};
pub use parser::{decompose, parse_url, ParseError, ParseResult};
pub use url_reconstructor::reconstruct_url;
