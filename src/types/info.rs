use serde::Serialize;

/// Sentinel value signalling absence of information, not an error.
pub const UNKNOWN: &str = "unknown";

/// Platform name and version extracted from an identification string.
///
/// Matched fields borrow from the input; the sentinel borrows the static
/// `"unknown"`. Both fields are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OsInfo<'a> {
    pub os: ::std::borrow::Cow<'a, str>,
    pub os_version: ::std::borrow::Cow<'a, str>,
}

impl<'a> OsInfo<'a> {
    pub fn unknown() -> Self {
        Self {
            os: ::std::borrow::Cow::Borrowed(UNKNOWN),
            os_version: ::std::borrow::Cow::Borrowed(UNKNOWN),
        }
    }

    pub fn is_known(&self) -> bool {
        self.os != UNKNOWN
    }
}

/// Browser name and version extracted from an identification string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserInfo<'a> {
    pub browser_name: ::std::borrow::Cow<'a, str>,
    pub browser_version: ::std::borrow::Cow<'a, str>,
}

impl<'a> BrowserInfo<'a> {
    pub fn unknown() -> Self {
        Self {
            browser_name: ::std::borrow::Cow::Borrowed(UNKNOWN),
            browser_version: ::std::borrow::Cow::Borrowed(UNKNOWN),
        }
    }

    pub fn is_known(&self) -> bool {
        self.browser_name != UNKNOWN
    }
}
