use std::borrow::Cow;

use tracing::debug;

use crate::parser::Captures;
use crate::types::UNKNOWN;

/// Maximum length of an identification string we take into consideration.
/// Real-world user agents stay well below this; anything longer is clipped
/// before matching so the scan over attacker-controlled text stays bounded.
pub(crate) const MAX_UA_LENGTH: usize = 2048;

/// Clip `ua` to `MAX_UA_LENGTH` bytes. Returns `None` when the cut does not
/// land on a char boundary; callers degrade to the sentinel in that case.
pub(crate) fn clip_ua(ua: &str) -> Option<&str> {
    if ua.len() <= MAX_UA_LENGTH {
        return Some(ua);
    }
    debug!(len = ua.len(), "clipping over-long identification string");
    ua.get(..MAX_UA_LENGTH)
}

pub(crate) fn capture_or_unknown<'a>(captures: &Captures<'a>, group: usize) -> Cow<'a, str> {
    captures
        .get_str(group)
        .map(Cow::Borrowed)
        .unwrap_or(Cow::Borrowed(UNKNOWN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_untouched() {
        let ua = "Mozilla/5.0 (Windows NT 10.0)";
        assert_eq!(clip_ua(ua), Some(ua));
    }

    #[test]
    fn long_input_is_clipped() {
        let ua = "(".repeat(100_000);
        let clipped = clip_ua(&ua).unwrap();
        assert_eq!(clipped.len(), MAX_UA_LENGTH);
    }

    #[test]
    fn clip_inside_multibyte_char_degrades() {
        let mut ua = "a".repeat(MAX_UA_LENGTH - 1);
        ua.push_str("€€");
        assert_eq!(clip_ua(&ua), None);
    }

    #[test]
    fn missing_group_degrades_to_sentinel() {
        let re = regex::Regex::new(r"(Firefox)(?:/(\d+))?").unwrap();
        let caps = Captures::Standard(re.captures("Firefox").unwrap());
        assert_eq!(capture_or_unknown(&caps, 1), "Firefox");
        assert_eq!(capture_or_unknown(&caps, 2), UNKNOWN);
    }
}
