use crate::phrase::{capture_phrase, push_unique, truncate_chars};
use component_protocol::{GuidanceNote, RelationKind, RelationMention};
use once_cell::sync::Lazy;
use regex::Regex;

/// What a cue family records when it matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    /// The noun phrase right after the cue
    Phrase,
    /// The (truncated) note text itself
    NoteText,
}

struct CueRule {
    kind: RelationKind,
    cues: &'static [&'static str],
    capture: Capture,
}

/// Cue-phrase table, evaluated top to bottom for every note.
const CUE_TABLE: &[CueRule] = &[
    CueRule {
        kind: RelationKind::Required,
        cues: &["requires", "must use", "needs"],
        capture: Capture::Phrase,
    },
    CueRule {
        kind: RelationKind::Suggested,
        cues: &["recommended", "suggested", "works well with"],
        capture: Capture::Phrase,
    },
    CueRule {
        kind: RelationKind::Enhancement,
        cues: &["can be enhanced", "optionally", "optional"],
        capture: Capture::Phrase,
    },
    CueRule {
        kind: RelationKind::Conflict,
        cues: &[
            "don't use with",
            "do not use with",
            "incompatible",
            "conflicts with",
        ],
        capture: Capture::Phrase,
    },
    CueRule {
        kind: RelationKind::Warning,
        cues: &["warning", "caution", "avoid"],
        capture: Capture::NoteText,
    },
];

static CUE_PATTERNS: Lazy<Vec<(&'static CueRule, Regex)>> = Lazy::new(|| {
    CUE_TABLE
        .iter()
        .map(|rule| (rule, build_cue_regex(rule.cues)))
        .collect()
});

fn build_cue_regex(cues: &[&str]) -> Regex {
    let mut sorted: Vec<&str> = cues.to_vec();
    sorted.sort_by_key(|cue| std::cmp::Reverse(cue.len()));
    let alternation = sorted
        .iter()
        .map(|cue| regex::escape(cue))
        .collect::<Vec<_>>()
        .join("|");
    // longest alternative first, so "optionally" is one hit rather than "optional" + rest
    Regex::new(&format!("(?:{alternation})")).expect("cue patterns are escaped literals")
}

fn fold_text(text: &str) -> String {
    text.to_lowercase().replace('\u{2019}', "'")
}

/// Limits applied while extracting relations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Maximum number of warning strings kept per component
    pub max_warnings: usize,
    /// Maximum characters kept from a warning note
    pub warning_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_warnings: 5,
            warning_chars: 100,
        }
    }
}

/// Relations extracted from all guidance notes of one component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedRelations {
    pub required: Vec<String>,
    pub suggested: Vec<String>,
    pub enhancements: Vec<String>,
    pub conflicts: Vec<String>,
    pub warnings: Vec<String>,
}

impl ExtractedRelations {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
            && self.suggested.is_empty()
            && self.enhancements.is_empty()
            && self.conflicts.is_empty()
            && self.warnings.is_empty()
    }

    fn absorb(&mut self, mention: RelationMention, max_warnings: usize) {
        let list = match mention.kind {
            RelationKind::Required => &mut self.required,
            RelationKind::Suggested => &mut self.suggested,
            RelationKind::Enhancement => &mut self.enhancements,
            RelationKind::Conflict => &mut self.conflicts,
            RelationKind::Warning => {
                if self.warnings.len() >= max_warnings {
                    return;
                }
                &mut self.warnings
            }
        };
        push_unique(list, mention.target_phrase);
    }
}

/// Heuristic classifier turning guidance text into typed relation mentions
#[derive(Debug, Clone, Default)]
pub struct RelationExtractor {
    config: ExtractorConfig,
}

impl RelationExtractor {
    #[must_use]
    pub const fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> ExtractorConfig {
        self.config
    }

    /// Classify a single note. Every cue family is evaluated independently,
    /// so one note may yield mentions of several kinds.
    #[must_use]
    pub fn mentions(&self, note: &GuidanceNote) -> Vec<RelationMention> {
        let folded = fold_text(&note.text);
        let mut mentions = Vec::new();

        for (rule, pattern) in CUE_PATTERNS.iter() {
            match rule.capture {
                Capture::Phrase => {
                    for hit in pattern.find_iter(&folded) {
                        if let Some(phrase) = capture_phrase(&folded[hit.end()..]) {
                            mentions.push(RelationMention {
                                kind: rule.kind,
                                target_phrase: phrase,
                            });
                        }
                    }
                }
                Capture::NoteText => {
                    if pattern.is_match(&folded) {
                        mentions.push(RelationMention {
                            kind: rule.kind,
                            target_phrase: truncate_chars(&note.text, self.config.warning_chars),
                        });
                    }
                }
            }
        }

        log::debug!(
            "Classified {} note into {} mention(s)",
            note.kind.as_str(),
            mentions.len()
        );
        mentions
    }

    /// Extract relations from a component's notes, highest priority first.
    #[must_use]
    pub fn extract(&self, notes: &[GuidanceNote]) -> ExtractedRelations {
        let mut ordered: Vec<&GuidanceNote> = notes.iter().collect();
        ordered.sort_by(|a, b| b.priority.cmp(&a.priority));

        let mut relations = ExtractedRelations::default();
        for note in ordered {
            for mention in self.mentions(note) {
                relations.absorb(mention, self.config.max_warnings);
            }
        }
        relations
    }
}
