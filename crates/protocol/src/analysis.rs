use crate::component::ComponentSummary;
use crate::dependency::{DependencyChain, DependencyReport};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Options accepted by `analyze_dependencies`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalyzeOptions {
    pub include_suggestions: bool,
    pub include_conflicts: bool,
    pub recursive: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            include_suggestions: true,
            include_conflicts: true,
            recursive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub component: ComponentSummary,
    pub dependencies: DependencyReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_chain: Option<DependencyChain>,
    pub installation_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisFailure {
    pub error: String,
}

/// Outcome of a dependency analysis; serialises without a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AnalysisResult {
    Success(AnalysisReport),
    Failure(AnalysisFailure),
}

impl AnalysisResult {
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(AnalysisFailure {
            error: error.into(),
        })
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Success(report) => Some(report),
            Self::Failure(_) => None,
        }
    }
}
