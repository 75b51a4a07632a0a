use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Relationship kind carried by a [`RelationMention`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Required,
    Suggested,
    Enhancement,
    Conflict,
    Warning,
}

impl RelationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Suggested => "suggested",
            Self::Enhancement => "enhancement",
            Self::Conflict => "conflict",
            Self::Warning => "warning",
        }
    }
}

/// Directed edge extracted from one guidance note.
///
/// `target_phrase` is unresolved free text. For [`RelationKind::Warning`] it holds the
/// truncated note text instead of a noun phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RelationMention {
    pub kind: RelationKind,
    pub target_phrase: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RequiredDependencies {
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
    pub components: Vec<String>,
    pub needs_scripting: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SuggestedDependencies {
    pub components: Vec<String>,
    pub enhancements: Vec<String>,
}

impl SuggestedDependencies {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.enhancements.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConflictDependencies {
    pub components: Vec<String>,
    pub warnings: Vec<String>,
}

impl ConflictDependencies {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.warnings.is_empty()
    }
}

/// Aggregated dependencies of a single component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DependencyRecord {
    pub required: RequiredDependencies,
    pub suggested: SuggestedDependencies,
    pub conflicts: ConflictDependencies,
}

impl DependencyRecord {
    /// Project the record onto the sections a caller asked for.
    #[must_use]
    pub fn into_report(self, include_suggestions: bool, include_conflicts: bool) -> DependencyReport {
        DependencyReport {
            required: self.required,
            suggested: include_suggestions.then_some(self.suggested),
            conflicts: include_conflicts.then_some(self.conflicts),
        }
    }
}

/// [`DependencyRecord`] with the optional sections omitted when not requested
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DependencyReport {
    pub required: RequiredDependencies,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested: Option<SuggestedDependencies>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicts: Option<ConflictDependencies>,
}

/// One component reached while expanding required relations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChainEntry {
    pub component: String,
    pub requires: Vec<String>,
    /// 1 for direct dependencies of the start component
    pub depth: usize,
    /// Required phrase that resolved to this component
    pub matched_phrase: String,
}

/// Pre-order sequence of resolved dependencies; no component appears twice
pub type DependencyChain = Vec<ChainEntry>;
