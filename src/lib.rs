mod error;
mod extractor;
mod helpers;
mod parser;
mod prefilter;
mod rules;
mod types;

pub use error::{Error, Result};
pub use extractor::{is_valid_browser_ua, parse_browser, parse_os, UaExtractor};
pub use types::*;
