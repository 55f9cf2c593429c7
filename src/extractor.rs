use once_cell::sync::Lazy;
use tracing::{debug, trace};

use super::error::Result;
use super::helpers::*;
use super::parser::RuleList;
use super::rules::{browser_rules, os_rules, BrowserRuleData, CaptureOrder, OsRuleData};
use super::types::*;

/// Conventional prefix carried by browser user agents for legacy
/// compatibility reasons; a cheap, high-precision "looks like a browser,
/// not a bot or raw library client" filter.
const BROWSER_UA_PREFIX: &str = "Mozilla/";

/// Compiled extraction engine: the built-in rule registry, constructed once
/// and read-only afterwards. Safe to share across threads.
pub struct UaExtractor {
    os_rules: RuleList<OsRuleData>,
    browser_rules: RuleList<BrowserRuleData>,
}

impl UaExtractor {
    /// Compile the built-in rule table.
    pub fn new() -> Result<Self> {
        Ok(Self {
            os_rules: RuleList::build(os_rules())?,
            browser_rules: RuleList::build(browser_rules())?,
        })
    }

    /// `true` iff `ua` is present and follows the conventional
    /// identification-string format. Prefix check only, case-sensitive,
    /// no trimming.
    pub fn is_valid_browser_ua(&self, ua: Option<&str>) -> bool {
        ua.map_or(false, |s| s.starts_with(BROWSER_UA_PREFIX))
    }

    /// Extract platform name and version.
    ///
    /// Absent input, over-long input that cannot be clipped, and input
    /// matching no rule all degrade to the `"unknown"` sentinel pair.
    pub fn parse_os<'a>(&'a self, ua: Option<&'a str>) -> OsInfo<'a> {
        let ua = match ua.and_then(clip_ua) {
            Some(ua) => ua,
            None => return OsInfo::unknown(),
        };

        match self.os_rules.match_first(ua) {
            Some(m) => {
                trace!(rule = m.data.label, "platform rule matched");
                OsInfo {
                    os: capture_or_unknown(&m.captures, 1),
                    os_version: capture_or_unknown(&m.captures, 2),
                }
            }
            None => {
                debug!("no platform rule matched");
                OsInfo::unknown()
            }
        }
    }

    /// Extract browser name and version by trying the rule chain in
    /// priority order; same sentinel discipline as [`parse_os`].
    ///
    /// [`parse_os`]: UaExtractor::parse_os
    pub fn parse_browser<'a>(&'a self, ua: Option<&'a str>) -> BrowserInfo<'a> {
        let ua = match ua.and_then(clip_ua) {
            Some(ua) => ua,
            None => return BrowserInfo::unknown(),
        };

        match self.browser_rules.match_first(ua) {
            Some(m) => {
                trace!(rule = m.data.family.as_str(), "browser rule matched");
                let (name_group, version_group) = match m.data.capture_order {
                    CaptureOrder::VersionThenName => (2, 1),
                    CaptureOrder::NameThenVersion => (1, 2),
                };
                BrowserInfo {
                    browser_name: capture_or_unknown(&m.captures, name_group),
                    browser_version: capture_or_unknown(&m.captures, version_group),
                }
            }
            None => {
                debug!("no browser rule matched");
                BrowserInfo::unknown()
            }
        }
    }
}

static DEFAULT_EXTRACTOR: Lazy<UaExtractor> =
    Lazy::new(|| UaExtractor::new().expect("built-in rules compile"));

/// Check an identification string against the conventional browser format
/// using the process-wide extractor.
pub fn is_valid_browser_ua(ua: Option<&str>) -> bool {
    DEFAULT_EXTRACTOR.is_valid_browser_ua(ua)
}

/// Extract platform name and version using the process-wide extractor.
pub fn parse_os(ua: Option<&str>) -> OsInfo<'_> {
    DEFAULT_EXTRACTOR.parse_os(ua)
}

/// Extract browser name and version using the process-wide extractor.
pub fn parse_browser(ua: Option<&str>) -> BrowserInfo<'_> {
    DEFAULT_EXTRACTOR.parse_browser(ua)
}
