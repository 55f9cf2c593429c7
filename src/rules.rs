use crate::types::RuleFamily;

/// Declarative rule entry before compilation.
pub(crate) struct RuleDef<T> {
    pub pattern: &'static str,
    pub case_insensitive: bool,
    pub data: T,
}

/// Which result field each capture group of a browser rule feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CaptureOrder {
    /// Group 1 is the version, group 2 the name — for rules where the
    /// version token precedes the engine token in the source text.
    VersionThenName,
    /// Group 1 is the name, group 2 the version.
    NameThenVersion,
}

pub(crate) struct OsRuleData {
    pub label: &'static str,
}

pub(crate) struct BrowserRuleData {
    pub family: RuleFamily,
    pub capture_order: CaptureOrder,
}

/// Platform rule, anchored at the start of the string: leading product
/// token, separator, dotted product version, opening parenthesis, then up
/// to two semicolon-delimited prefix segments. Capture 1 is the platform
/// name (runs up to the next `;` or `)`), capture 2 the platform version
/// (digits joined by `_` or `.`, word-boundary terminated).
///
/// The prefix segments are what land "Windows NT" (not "Trident") and
/// "Android" (not a build token) in capture 1 for multi-segment strings.
const OS_PATTERN: &str = r"^[A-Z]\w+\W+\d+\.\d+(?:\.\d+)?\s+\((?:\w+;\s+(?:\w+;\s+)?)?(\w[^;)]+)\s+(\d+(?:[_.]\d[_.\d]*)?)\b";

/// Safari-family rule: an Apple context token, then a `Version/x.y[.z]`
/// token, then the trailing engine token (bare `Safari` or vendor-prefixed
/// `Mobile/… Safari`). The context token is what keeps Chrome-on-Android
/// webviews — which do carry `Version/4.0` and a `Safari/537.36` suffix —
/// out of this rule.
const SAFARI_PATTERN: &str =
    r"(?:Mac|iPhone|iPad).*?Version/(\d+\.\d+(?:\.\d+)?)\s+(?:Mobile/\w+\s+)?(Safari)\b";

/// Gecko-family rule: `Gecko`, optionally a numeric build date, then an
/// `F…/version` product token (Firefox, FxiOS). Other Gecko-based browsers
/// are out of scope.
const GECKO_PATTERN: &str = r"Gecko(?:/\d+)?.*?\b(F\w+)/(\d+\.\d+(?:\.\d+)?)";

pub(crate) fn os_rules() -> Vec<RuleDef<OsRuleData>> {
    vec![RuleDef {
        pattern: OS_PATTERN,
        case_insensitive: false,
        data: OsRuleData { label: "platform" },
    }]
}

/// Browser rules in priority order: the Safari-family rule runs first, the
/// Gecko-family rule second. A string that satisfies the Gecko rule's
/// sub-pattern but not the Safari rule's context (FxiOS) must fall through
/// to the Gecko rule.
pub(crate) fn browser_rules() -> Vec<RuleDef<BrowserRuleData>> {
    vec![
        RuleDef {
            pattern: SAFARI_PATTERN,
            case_insensitive: true,
            data: BrowserRuleData {
                family: RuleFamily::Safari,
                capture_order: CaptureOrder::VersionThenName,
            },
        },
        RuleDef {
            pattern: GECKO_PATTERN,
            case_insensitive: true,
            data: BrowserRuleData {
                family: RuleFamily::Gecko,
                capture_order: CaptureOrder::NameThenVersion,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::full_pattern;

    #[test]
    fn built_in_patterns_compile_on_the_linear_engine() {
        let os = os_rules();
        let browsers = browser_rules();
        let patterns = os
            .iter()
            .map(|r| full_pattern(r.pattern, r.case_insensitive))
            .chain(
                browsers
                    .iter()
                    .map(|r| full_pattern(r.pattern, r.case_insensitive)),
            );

        for p in patterns {
            assert!(regex::Regex::new(&p).is_ok(), "pattern not linear: {}", p);
        }
    }
}
