//! # Component Graph
//!
//! Dependency resolution across documented UI components.
//!
//! ## Architecture
//!
//! ```text
//! ComponentStore (read-only)
//!     │
//!     ├──> Dependency Resolver
//!     │      ├─ Relation Extractor (guidance text)
//!     │      ├─ Reference Scanner (markup samples)
//!     │      └─ Merge with metadata flags -> DependencyRecord
//!     │
//!     ├──> Chain expansion (work-list DFS)
//!     │      ├─ PhraseMatcher: phrase -> component
//!     │      ├─ Visited set: each component once
//!     │      └─ ChainGraph (petgraph arena, DOT export)
//!     │
//!     └──> Dependency Analyzer
//!            ├─ Installation notes
//!            └─ AnalysisResult (success or failure, never an error)
//! ```

mod analyzer;
mod chain;
mod error;
mod install_notes;
mod matcher;
mod resolver;
mod store;

pub use analyzer::{analyze_dependencies, DependencyAnalyzer};
pub use chain::{ChainGraph, ChainNode};
pub use error::{GraphError, Result};
pub use install_notes::{synthesize, InstallSettings};
pub use matcher::{
    ExactMatcher, FuzzyMatcher, MatchStrategy, PhraseMatcher, SubstringMatcher, TieredMatcher,
};
pub use resolver::{DependencyResolver, Resolution};
pub use store::{Catalog, CatalogComponent, ComponentStore, InMemoryStore};
