use component_protocol::{fold_key, ComponentRef};
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32String};
use serde::{Deserialize, Serialize};

/// Shortest component name allowed to match by being contained in a longer phrase
const MIN_CONTAINED_NAME_LEN: usize = 3;

/// Strategy resolving a free-text phrase to one of the known components.
///
/// Implementations must be deterministic: for the same phrase and candidate
/// list they return the same component.
pub trait PhraseMatcher: Send + Sync {
    fn best_match<'c>(&self, phrase: &str, candidates: &'c [ComponentRef])
        -> Option<&'c ComponentRef>;

    fn name(&self) -> &'static str;
}

/// Fold case and treat `-`/`_` like spaces so "off canvas" equals "off-canvas"
fn normalize(value: &str) -> String {
    fold_key(value)
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn candidate_keys(candidate: &ComponentRef) -> [String; 2] {
    [normalize(&candidate.name), normalize(&candidate.display_name)]
}

/// Case-insensitive equality against name or display name
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl PhraseMatcher for ExactMatcher {
    fn best_match<'c>(
        &self,
        phrase: &str,
        candidates: &'c [ComponentRef],
    ) -> Option<&'c ComponentRef> {
        let phrase = normalize(phrase);
        if phrase.is_empty() {
            return None;
        }
        candidates
            .iter()
            .find(|candidate| candidate_keys(candidate).contains(&phrase))
    }

    fn name(&self) -> &'static str {
        "exact"
    }
}

/// First candidate whose name contains the phrase, then first whose name is
/// contained in the phrase
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl PhraseMatcher for SubstringMatcher {
    fn best_match<'c>(
        &self,
        phrase: &str,
        candidates: &'c [ComponentRef],
    ) -> Option<&'c ComponentRef> {
        let phrase = normalize(phrase);
        if phrase.is_empty() {
            return None;
        }

        candidates
            .iter()
            .find(|candidate| {
                candidate_keys(candidate)
                    .iter()
                    .any(|key| key.contains(&phrase))
            })
            .or_else(|| {
                candidates.iter().find(|candidate| {
                    candidate_keys(candidate).iter().any(|key| {
                        key.chars().count() >= MIN_CONTAINED_NAME_LEN && phrase.contains(key.as_str())
                    })
                })
            })
    }

    fn name(&self) -> &'static str {
        "substring"
    }
}

/// Exact match first, substring match as fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredMatcher;

impl PhraseMatcher for TieredMatcher {
    fn best_match<'c>(
        &self,
        phrase: &str,
        candidates: &'c [ComponentRef],
    ) -> Option<&'c ComponentRef> {
        ExactMatcher
            .best_match(phrase, candidates)
            .or_else(|| SubstringMatcher.best_match(phrase, candidates))
    }

    fn name(&self) -> &'static str {
        "tiered"
    }
}

/// Exact match first, then the best nucleo fuzzy score (ties keep store order)
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatcher;

impl PhraseMatcher for FuzzyMatcher {
    fn best_match<'c>(
        &self,
        phrase: &str,
        candidates: &'c [ComponentRef],
    ) -> Option<&'c ComponentRef> {
        if let Some(exact) = ExactMatcher.best_match(phrase, candidates) {
            return Some(exact);
        }

        let phrase = normalize(phrase);
        if phrase.is_empty() {
            return None;
        }

        let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);
        let pattern = Pattern::parse(&phrase, CaseMatching::Ignore, Normalization::Smart);

        let mut best: Option<(&ComponentRef, u32)> = None;
        for candidate in candidates {
            let score = candidate_keys(candidate)
                .iter()
                .filter_map(|key| {
                    let haystack = Utf32String::from(key.as_str());
                    pattern.score(haystack.slice(..), &mut matcher)
                })
                .max();

            if let Some(score) = score {
                if best.map_or(true, |(_, top)| score > top) {
                    best = Some((candidate, score));
                }
            }
        }

        best.map(|(candidate, _)| candidate)
    }

    fn name(&self) -> &'static str {
        "fuzzy"
    }
}

/// Configurable choice of [`PhraseMatcher`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    Exact,
    Substring,
    #[default]
    Tiered,
    Fuzzy,
}

impl MatchStrategy {
    #[must_use]
    pub fn into_matcher(self) -> Box<dyn PhraseMatcher> {
        match self {
            Self::Exact => Box::new(ExactMatcher),
            Self::Substring => Box::new(SubstringMatcher),
            Self::Tiered => Box::new(TieredMatcher),
            Self::Fuzzy => Box::new(FuzzyMatcher),
        }
    }
}
