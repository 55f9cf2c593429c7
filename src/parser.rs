use crate::error::Result;
use crate::prefilter::LiteralPrefilter;
use crate::rules::RuleDef;

/// Build the full pattern string, wrapping the rule pattern and applying the
/// case-insensitive flag when the rule asks for it.
pub(crate) fn full_pattern(pattern: &str, case_insensitive: bool) -> String {
    if case_insensitive {
        format!("(?i)(?:{})", pattern)
    } else {
        format!("(?:{})", pattern)
    }
}

// ---------------------------------------------------------------------------
// Captures — unified enum over regex::Captures and fancy_regex::Captures
// ---------------------------------------------------------------------------

/// Lightweight wrapper so callers (field extraction) don't need to know
/// which regex engine produced the match.
pub(crate) enum Captures<'a> {
    Standard(regex::Captures<'a>),
    Fancy(fancy_regex::Captures<'a>),
}

impl<'a> Captures<'a> {
    /// Get the matched text for capture group `i`, or `None` if the group
    /// didn't participate in the match.
    pub fn get_str(&self, i: usize) -> Option<&'a str> {
        match self {
            Captures::Standard(c) => c.get(i).map(|m| m.as_str()),
            Captures::Fancy(c) => c.get(i).map(|m| m.as_str()),
        }
    }
}

// ---------------------------------------------------------------------------
// RulePattern — one compiled pattern, standard engine with fancy fallback
// ---------------------------------------------------------------------------

/// A single compiled pattern. Patterns the `regex` crate can handle get
/// linear-time Thompson-NFA matching; the rest fall back to fancy_regex.
pub(crate) enum RulePattern {
    Standard(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl RulePattern {
    pub fn compile(pattern: &str) -> Result<Self> {
        match regex::Regex::new(pattern) {
            Ok(re) => Ok(RulePattern::Standard(re)),
            Err(_) => Ok(RulePattern::Fancy(fancy_regex::Regex::new(pattern)?)),
        }
    }

    pub fn captures<'a>(&self, text: &'a str) -> Option<Captures<'a>> {
        match self {
            RulePattern::Standard(re) => re.captures(text).map(Captures::Standard),
            RulePattern::Fancy(re) => match re.captures(text) {
                Ok(Some(caps)) => Some(Captures::Fancy(caps)),
                _ => None,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// RuleList — ordered first-match-wins rule chain
// ---------------------------------------------------------------------------

/// A compiled entry: pattern + literal prefilter + associated rule data.
struct CompiledRule<T> {
    pattern: RulePattern,
    prefilter: LiteralPrefilter,
    data: T,
}

/// Result of a successful match.
pub(crate) struct MatchResult<'a, T> {
    pub data: &'a T,
    pub captures: Captures<'a>,
}

/// Ordered rule list evaluated in declaration order; the first entry whose
/// regex produces captures wins.
pub(crate) struct RuleList<T> {
    rules: Vec<CompiledRule<T>>,
}

impl<T> RuleList<T> {
    /// Compile a rule list from declarative rule definitions.
    ///
    /// Each rule also gets a literal prefilter derived from its own pattern,
    /// so non-candidate inputs skip the regex entirely.
    pub fn build(items: impl IntoIterator<Item = RuleDef<T>>) -> Result<Self> {
        let mut rules = Vec::new();
        for def in items {
            let full = full_pattern(def.pattern, def.case_insensitive);
            rules.push(CompiledRule {
                pattern: RulePattern::compile(&full)?,
                prefilter: LiteralPrefilter::from_pattern(def.pattern)?,
                data: def.data,
            });
        }
        Ok(Self { rules })
    }

    /// Find the first matching entry (preserving declaration order).
    pub fn match_first<'a>(&'a self, ua: &'a str) -> Option<MatchResult<'a, T>> {
        self.rules.iter().find_map(|rule| {
            if !rule.prefilter.is_candidate(ua) {
                return None;
            }
            rule.pattern.captures(ua).map(|captures| MatchResult {
                data: &rule.data,
                captures,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(pattern: &'static str, tag: &'static str) -> RuleDef<&'static str> {
        RuleDef {
            pattern,
            case_insensitive: false,
            data: tag,
        }
    }

    #[test]
    fn first_match_wins() {
        let list = RuleList::build([
            rule(r"Firefox/(\d+)", "specific"),
            rule(r"F\w+/(\d+)", "broad"),
        ])
        .unwrap();

        let m = list.match_first("Gecko/20100101 Firefox/115").unwrap();
        assert_eq!(*m.data, "specific");
        assert_eq!(m.captures.get_str(1), Some("115"));
    }

    #[test]
    fn later_rule_matches_when_earlier_fails() {
        let list = RuleList::build([
            rule(r"Firefox/(\d+)", "specific"),
            rule(r"F\w+/(\d+)", "broad"),
        ])
        .unwrap();

        let m = list.match_first("Gecko FxiOS/30").unwrap();
        assert_eq!(*m.data, "broad");
        assert_eq!(m.captures.get_str(1), Some("30"));
    }

    #[test]
    fn no_rule_matches() {
        let list = RuleList::build([rule(r"Firefox/(\d+)", "specific")]).unwrap();
        assert!(list.match_first("curl/8.5.0").is_none());
    }

    #[test]
    fn standard_engine_preferred() {
        let p = RulePattern::compile(r"Safari/(\d+)").unwrap();
        assert!(matches!(p, RulePattern::Standard(_)));
    }

    #[test]
    fn lookahead_pattern_falls_back_to_fancy() {
        let p = RulePattern::compile(r"Chrome/(?=9)(\d+)").unwrap();
        assert!(matches!(p, RulePattern::Fancy(_)));

        let caps = p.captures("Chrome/99.0").unwrap();
        assert_eq!(caps.get_str(1), Some("99"));
    }

    #[test]
    fn fancy_rules_participate_in_the_chain() {
        let list = RuleList::build([
            rule(r"Safari/(?=6)(\d+)", "fancy"),
            rule(r"Safari/(\d+)", "standard"),
        ])
        .unwrap();

        assert_eq!(*list.match_first("Safari/605").unwrap().data, "fancy");
        assert_eq!(*list.match_first("Safari/537").unwrap().data, "standard");
    }

    #[test]
    fn case_flag_applies_per_rule() {
        let list = RuleList::build([RuleDef {
            pattern: r"gecko",
            case_insensitive: true,
            data: (),
        }])
        .unwrap();
        assert!(list.match_first("like Gecko").is_some());
    }
}
