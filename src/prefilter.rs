use aho_corasick::AhoCorasick;
use regex_syntax::{hir::literal::Extractor, parse};

use crate::error::Result;

/// Minimum literal length worth prefiltering on; shorter needles fire on
/// nearly every input.
const MIN_LITERAL_LEN: usize = 3;

/// Literal prefilter applied before running a rule's regex.
///
/// Candidate literals come from the pattern's own HIR, so a rule skipped by
/// the prefilter could not have matched.
pub(crate) enum LiteralPrefilter {
    /// No usable literals — the regex is always run.
    None,
    /// The regex runs only when one of the marker literals occurs in the input.
    Markers(AhoCorasick),
}

impl LiteralPrefilter {
    /// Extract prefix literals from `pattern` and build a case-insensitive
    /// marker automaton. Patterns yielding no literal of at least
    /// `MIN_LITERAL_LEN` bytes (anchored character-class heads, exotic
    /// PCRE-isms unsupported by regex_syntax) get no prefilter.
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let literals = extract_literals(pattern, MIN_LITERAL_LEN);
        if literals.is_empty() {
            return Ok(LiteralPrefilter::None);
        }
        let markers = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&literals)?;
        Ok(LiteralPrefilter::Markers(markers))
    }

    pub fn is_candidate(&self, ua: &str) -> bool {
        match self {
            Self::None => true,
            Self::Markers(markers) => markers.is_match(ua),
        }
    }
}

/// Extract literal substrings from a regex pattern for use as marker
/// candidates. Returns lowercased literals of at least `min_len` bytes,
/// or an empty vec if none are found (meaning the rule must always be tried).
fn extract_literals(pattern: &str, min_len: usize) -> Vec<String> {
    let hir = match parse(pattern) {
        Ok(h) => h,
        Err(_) => return Vec::new(),
    };

    let mut extractor = Extractor::new();
    extractor.kind(regex_syntax::hir::literal::ExtractKind::Prefix);

    let seq = extractor.extract(&hir);
    let mut literals: Vec<String> = seq
        .literals()
        .into_iter()
        .flatten()
        .filter_map(|lit| {
            let s = std::str::from_utf8(lit.as_bytes()).ok()?;
            if s.len() >= min_len {
                Some(s.to_lowercase())
            } else {
                None
            }
        })
        .collect();
    literals.sort();
    literals.dedup();

    literals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_literal() {
        let lits = extract_literals("Gecko", 3);
        assert_eq!(lits, vec!["gecko"]);
    }

    #[test]
    fn alternation() {
        let lits = extract_literals(r"(?:Mac|iPhone|iPad).*Version", 3);
        assert!(lits.contains(&"mac".to_string()));
        assert!(lits.contains(&"iphone".to_string()));
        assert!(lits.contains(&"ipad".to_string()));
    }

    #[test]
    fn too_short_returns_empty() {
        let lits = extract_literals(r"\d+\.\d+", 3);
        assert!(lits.is_empty());
    }

    #[test]
    fn candidates_are_case_insensitive() {
        let pf = LiteralPrefilter::from_pattern(r"(?:Mac|iPhone|iPad)").unwrap();
        assert!(pf.is_candidate("MACINTOSH"));
        assert!(pf.is_candidate("cpu iphone os"));
        assert!(!pf.is_candidate("Windows NT 10.0"));
    }

    #[test]
    fn unextractable_pattern_is_always_candidate() {
        let pf = LiteralPrefilter::from_pattern(r"^[A-Z]\w+").unwrap();
        assert!(pf.is_candidate("anything at all"));
    }
}
