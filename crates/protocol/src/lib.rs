//! # Component Protocol
//!
//! Data model shared by the extractor, the resolver and the CLI.
//!
//! ```text
//! ComponentMeta + GuidanceNote[] + MarkupSample[]
//!     │
//!     ├──> RelationMention[]      (text classification)
//!     ├──> DependencyRecord       (per component)
//!     ├──> DependencyChain        (recursive expansion)
//!     └──> AnalysisResult         (caller-facing)
//! ```

mod analysis;
mod component;
mod dependency;

pub use analysis::{AnalysisFailure, AnalysisReport, AnalysisResult, AnalyzeOptions};
pub use component::{
    ComponentMeta, ComponentRef, ComponentSummary, Complexity, GuidanceKind, GuidanceNote,
    MarkupSample,
};
pub use dependency::{
    ChainEntry, ConflictDependencies, DependencyChain, DependencyRecord, DependencyReport,
    RelationKind, RelationMention, RequiredDependencies, SuggestedDependencies,
};

/// Case-fold a component name or phrase for identity comparisons.
#[must_use]
pub fn fold_key(value: &str) -> String {
    value.trim().to_lowercase()
}
