use crate::chain::{ChainGraph, ChainNode};
use crate::error::{GraphError, Result};
use crate::store::ComponentStore;
use component_extract::{ReferenceScanner, RelationExtractor};
use component_protocol::{
    fold_key, ComponentMeta, ConflictDependencies, DependencyRecord, RequiredDependencies,
    SuggestedDependencies,
};
use petgraph::graph::NodeIndex;
use std::collections::HashSet;

/// A component together with its merged dependency record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub component: ComponentMeta,
    pub record: DependencyRecord,
}

/// Required phrase waiting to be resolved during chain expansion
struct Pending {
    parent: NodeIndex,
    phrase: String,
    depth: usize,
}

fn push_required(stack: &mut Vec<Pending>, parent: NodeIndex, phrases: &[String], depth: usize) {
    // reversed so the first phrase is expanded first
    stack.extend(phrases.iter().rev().map(|phrase| Pending {
        parent,
        phrase: phrase.clone(),
        depth,
    }));
}

/// Builds dependency records and expands required relations across components
pub struct DependencyResolver<S> {
    store: S,
    extractor: RelationExtractor,
    scanner: ReferenceScanner,
}

impl<S: ComponentStore> DependencyResolver<S> {
    pub fn new(store: S) -> Self {
        Self::with_extractor(store, RelationExtractor::default())
    }

    pub const fn with_extractor(store: S, extractor: RelationExtractor) -> Self {
        Self {
            store,
            extractor,
            scanner: ReferenceScanner::new(),
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Look up a component by name and build its dependency record
    pub fn resolve(&self, name: &str) -> Result<Resolution> {
        let component = self
            .store
            .find_component(name)?
            .ok_or_else(|| GraphError::ComponentNotFound(name.to_string()))?;
        let record = self.record_for(&component)?;
        Ok(Resolution { component, record })
    }

    /// Merge extracted relations, scanned references and metadata flags
    pub fn record_for(&self, component: &ComponentMeta) -> Result<DependencyRecord> {
        let notes = self.store.guidance_notes(component.id)?;
        let samples = self.store.markup_samples(component.id)?;

        let relations = self.extractor.extract(&notes);
        let refs = self.scanner.scan(&samples);
        let needs_scripting = component.requires_scripting
            || !refs.scripts.is_empty()
            || self.scanner.has_script_samples(&samples);

        Ok(DependencyRecord {
            required: RequiredDependencies {
                stylesheets: refs.stylesheets,
                scripts: refs.scripts,
                components: relations.required,
                needs_scripting,
            },
            suggested: SuggestedDependencies {
                components: relations.suggested,
                enhancements: relations.enhancements,
            },
            conflicts: ConflictDependencies {
                components: relations.conflicts,
                warnings: relations.warnings,
            },
        })
    }

    /// Expand required components transitively.
    ///
    /// Depth-first, pre-order walk over an explicit stack. The visited set is
    /// keyed by folded component name and seeded with the start component, so
    /// every component appears at most once and cycles terminate. Phrases that
    /// match no component are skipped.
    pub fn expand_chain(&self, start: &Resolution) -> Result<ChainGraph> {
        let mut chain = ChainGraph::new(&start.component, start.record.required.components.clone());
        let mut visited: HashSet<String> = HashSet::from([fold_key(&start.component.name)]);
        let mut stack = Vec::new();
        push_required(&mut stack, chain.root(), &start.record.required.components, 1);

        while let Some(pending) = stack.pop() {
            let Some(found) = self.store.find_component_like(&pending.phrase)? else {
                log::debug!("No component matches required phrase '{}'", pending.phrase);
                continue;
            };
            if !visited.insert(fold_key(&found.name)) {
                continue;
            }
            let Some(meta) = self.store.find_component(&found.name)? else {
                log::debug!("Matched component '{}' vanished from store", found.name);
                continue;
            };

            let record = self.record_for(&meta)?;
            let requires = record.required.components;
            let node = chain.add_dependency(
                pending.parent,
                &pending.phrase,
                ChainNode {
                    name: meta.name,
                    display_name: meta.display_name,
                    requires: requires.clone(),
                    depth: pending.depth,
                },
            );
            push_required(&mut stack, node, &requires, pending.depth + 1);
        }

        log::info!(
            "Resolved dependency chain for {}: {} component(s)",
            start.component.name,
            chain.len()
        );
        Ok(chain)
    }
}
