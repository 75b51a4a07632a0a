use crate::error::{GraphError, Result};
use crate::matcher::{MatchStrategy, PhraseMatcher};
use component_protocol::{
    fold_key, ComponentMeta, ComponentRef, Complexity, GuidanceKind, GuidanceNote, MarkupSample,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Read-only access to component metadata, guidance and samples.
///
/// The resolver never writes through this trait; every call is a lookup.
pub trait ComponentStore {
    /// Case-insensitive lookup by component name
    fn find_component(&self, name: &str) -> Result<Option<ComponentMeta>>;

    fn guidance_notes(&self, id: u64) -> Result<Vec<GuidanceNote>>;

    fn markup_samples(&self, id: u64) -> Result<Vec<MarkupSample>>;

    /// Best-effort lookup of a component loosely matching a free-text phrase
    fn find_component_like(&self, phrase: &str) -> Result<Option<ComponentRef>>;
}

/// Serialised component catalog, the input format of [`InMemoryStore`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub components: Vec<CatalogComponent>,
}

impl Catalog {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    #[must_use]
    pub fn component(mut self, component: CatalogComponent) -> Self {
        self.components.push(component);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogComponent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub complexity: Complexity,
    #[serde(default)]
    pub requires_scripting: bool,
    #[serde(default)]
    pub framework_specific: bool,
    #[serde(default)]
    pub guidance: Vec<GuidanceNote>,
    #[serde(default)]
    pub samples: Vec<MarkupSample>,
}

impl CatalogComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub const fn complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }

    #[must_use]
    pub const fn requires_scripting(mut self, requires_scripting: bool) -> Self {
        self.requires_scripting = requires_scripting;
        self
    }

    #[must_use]
    pub fn note(mut self, kind: GuidanceKind, text: impl Into<String>, priority: i32) -> Self {
        self.guidance.push(GuidanceNote::new(kind, text, priority));
        self
    }

    #[must_use]
    pub fn sample(mut self, language: impl Into<String>, code: impl Into<String>) -> Self {
        self.samples.push(MarkupSample::new(language, code));
        self
    }
}

struct StoredComponent {
    meta: ComponentMeta,
    guidance: Vec<GuidanceNote>,
    samples: Vec<MarkupSample>,
}

/// [`ComponentStore`] backed by an in-memory [`Catalog`]
pub struct InMemoryStore {
    components: Vec<StoredComponent>,
    by_name: HashMap<String, usize>,
    refs: Vec<ComponentRef>,
    matcher: Box<dyn PhraseMatcher>,
}

impl InMemoryStore {
    /// Build a store using the default (tiered) matcher
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        Self::with_matcher(catalog, MatchStrategy::default().into_matcher())
    }

    /// Build a store with an explicit phrase-matching strategy.
    ///
    /// Fails when two components share a name under case folding. Ids are
    /// assigned from catalog order starting at 1.
    pub fn with_matcher(catalog: Catalog, matcher: Box<dyn PhraseMatcher>) -> Result<Self> {
        let mut components = Vec::with_capacity(catalog.components.len());
        let mut by_name = HashMap::with_capacity(catalog.components.len());

        for (idx, entry) in catalog.components.into_iter().enumerate() {
            let key = fold_key(&entry.name);
            if key.is_empty() {
                return Err(GraphError::Store(format!(
                    "component #{} has an empty name",
                    idx + 1
                )));
            }
            if by_name.insert(key, idx).is_some() {
                return Err(GraphError::Store(format!(
                    "duplicate component name '{}'",
                    entry.name
                )));
            }

            let display_name = entry.display_name.unwrap_or_else(|| entry.name.clone());
            components.push(StoredComponent {
                meta: ComponentMeta {
                    id: idx as u64 + 1,
                    name: entry.name,
                    display_name,
                    complexity: entry.complexity,
                    requires_scripting: entry.requires_scripting,
                    framework_specific: entry.framework_specific,
                },
                guidance: entry.guidance,
                samples: entry.samples,
            });
        }

        let refs = components.iter().map(|c| c.meta.to_ref()).collect();
        log::debug!(
            "Loaded {} component(s) with {} matcher",
            components.len(),
            matcher.name()
        );

        Ok(Self {
            components,
            by_name,
            refs,
            matcher,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| c.meta.name.as_str())
    }

    fn by_id(&self, id: u64) -> Result<&StoredComponent> {
        usize::try_from(id)
            .ok()
            .and_then(|id| id.checked_sub(1))
            .and_then(|idx| self.components.get(idx))
            .ok_or_else(|| GraphError::Store(format!("unknown component id {id}")))
    }
}

impl ComponentStore for InMemoryStore {
    fn find_component(&self, name: &str) -> Result<Option<ComponentMeta>> {
        Ok(self
            .by_name
            .get(&fold_key(name))
            .map(|&idx| self.components[idx].meta.clone()))
    }

    fn guidance_notes(&self, id: u64) -> Result<Vec<GuidanceNote>> {
        Ok(self.by_id(id)?.guidance.clone())
    }

    fn markup_samples(&self, id: u64) -> Result<Vec<MarkupSample>> {
        Ok(self.by_id(id)?.samples.clone())
    }

    fn find_component_like(&self, phrase: &str) -> Result<Option<ComponentRef>> {
        Ok(self.matcher.best_match(phrase, &self.refs).cloned())
    }
}

impl<S: ComponentStore + ?Sized> ComponentStore for &S {
    fn find_component(&self, name: &str) -> Result<Option<ComponentMeta>> {
        (**self).find_component(name)
    }

    fn guidance_notes(&self, id: u64) -> Result<Vec<GuidanceNote>> {
        (**self).guidance_notes(id)
    }

    fn markup_samples(&self, id: u64) -> Result<Vec<MarkupSample>> {
        (**self).markup_samples(id)
    }

    fn find_component_like(&self, phrase: &str) -> Result<Option<ComponentRef>> {
        (**self).find_component_like(phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let store = InMemoryStore::from_catalog(
            Catalog::default().component(CatalogComponent::new("Modal").display_name("Modal")),
        )
        .unwrap();

        let meta = store.find_component("MODAL").unwrap().unwrap();
        assert_eq!(meta.id, 1);
        assert_eq!(meta.name, "Modal");
        assert!(store.find_component("tooltip").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let catalog = Catalog::default()
            .component(CatalogComponent::new("alert"))
            .component(CatalogComponent::new("Alert"));

        let err = InMemoryStore::from_catalog(catalog).err().unwrap();
        assert!(err.to_string().contains("duplicate component name"));
    }

    #[test]
    fn test_display_name_defaults_to_name() {
        let store =
            InMemoryStore::from_catalog(Catalog::default().component(CatalogComponent::new("card")))
                .unwrap();
        let meta = store.find_component("card").unwrap().unwrap();
        assert_eq!(meta.display_name, "card");
    }

    #[test]
    fn test_unknown_id_is_a_store_error() {
        let store = InMemoryStore::from_catalog(Catalog::default()).unwrap();
        assert!(matches!(store.guidance_notes(0), Err(GraphError::Store(_))));
        assert!(matches!(store.markup_samples(7), Err(GraphError::Store(_))));
    }

    #[test]
    fn test_catalog_json_defaults() {
        let catalog = Catalog::from_json_str(
            r#"{"components":[{"name":"badge","guidance":[{"text":"Requires nothing."}]}]}"#,
        )
        .unwrap();

        let badge = &catalog.components[0];
        assert_eq!(badge.complexity, Complexity::Simple);
        assert!(!badge.requires_scripting);
        assert_eq!(badge.guidance[0].kind, GuidanceKind::Note);
        assert_eq!(badge.guidance[0].priority, 0);
    }
}
