//! # Component Extract
//!
//! Heuristic extraction of component relationships from guidance text, plus a
//! scanner for literal asset references embedded in markup samples.
//!
//! ## Pipeline
//!
//! ```text
//! GuidanceNote[]
//!     │
//!     └──> Relation Extractor (cue-phrase table)
//!            ├─ required / suggested / enhancement / conflict phrases
//!            └─ warnings (truncated note text)
//!
//! MarkupSample[]
//!     │
//!     └──> Reference Scanner (markup only)
//!            ├─ <link rel="stylesheet" href=…>
//!            └─ <script src=…>
//! ```
//!
//! Extraction never fails: the worst case is an empty category.

mod language;
mod phrase;
mod relation;
mod scanner;

pub use language::SampleLanguage;
pub use phrase::{capture_phrase, push_unique, truncate_chars};
pub use relation::{ExtractedRelations, ExtractorConfig, RelationExtractor};
pub use scanner::{ReferenceScanner, ScannedReferences};
