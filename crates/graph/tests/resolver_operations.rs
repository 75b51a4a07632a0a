//! Tests for dependency records and chain expansion

use component_graph::{
    Catalog, CatalogComponent, ComponentStore, DependencyResolver, GraphError, InMemoryStore,
    MatchStrategy,
};
use component_protocol::{Complexity, GuidanceKind};
use pretty_assertions::assert_eq;

fn store(components: Vec<CatalogComponent>) -> InMemoryStore {
    let catalog = components
        .into_iter()
        .fold(Catalog::default(), Catalog::component);
    InMemoryStore::from_catalog(catalog).unwrap()
}

fn requires(name: &str, text: &str) -> CatalogComponent {
    CatalogComponent::new(name).note(GuidanceKind::BestPractice, text, 1)
}

fn chain_names(resolver: &DependencyResolver<&InMemoryStore>, start: &str) -> Vec<String> {
    let resolution = resolver.resolve(start).unwrap();
    resolver
        .expand_chain(&resolution)
        .unwrap()
        .entries()
        .into_iter()
        .map(|entry| entry.component)
        .collect()
}

#[test]
fn test_empty_component_has_empty_record() {
    let store = store(vec![CatalogComponent::new("badge")]);
    let resolver = DependencyResolver::new(&store);

    let resolution = resolver.resolve("badge").unwrap();
    let record = resolution.record;

    assert!(record.required.stylesheets.is_empty());
    assert!(record.required.scripts.is_empty());
    assert!(record.required.components.is_empty());
    assert!(!record.required.needs_scripting);
    assert!(record.suggested.is_empty());
    assert!(record.conflicts.is_empty());
}

#[test]
fn test_metadata_flag_sets_needs_scripting() {
    let store = store(vec![CatalogComponent::new("carousel")
        .complexity(Complexity::Complex)
        .requires_scripting(true)]);
    let resolver = DependencyResolver::new(&store);

    let record = resolver.resolve("carousel").unwrap().record;
    assert!(record.required.needs_scripting);
    assert!(record.required.components.is_empty());
}

#[test]
fn test_scanned_script_sets_needs_scripting() {
    let store = store(vec![CatalogComponent::new("tooltip").sample(
        "html",
        r#"<link rel="stylesheet" href="x.css"><script src="y.js"></script>"#,
    )]);
    let resolver = DependencyResolver::new(&store);

    let record = resolver.resolve("tooltip").unwrap().record;
    assert_eq!(record.required.stylesheets, vec!["x.css"]);
    assert_eq!(record.required.scripts, vec!["y.js"]);
    assert!(record.required.needs_scripting);
}

#[test]
fn test_script_sample_sets_needs_scripting_without_references() {
    let store = store(vec![CatalogComponent::new("toast")
        .sample("js", "new Toast(element).show();")
        .sample("html", "<div class=\"toast\"></div>")]);
    let resolver = DependencyResolver::new(&store);

    let record = resolver.resolve("toast").unwrap().record;
    assert!(record.required.scripts.is_empty());
    assert!(record.required.needs_scripting);
}

#[test]
fn test_unknown_component_is_not_found() {
    let store = store(vec![CatalogComponent::new("badge")]);
    let resolver = DependencyResolver::new(&store);

    let err = resolver.resolve("ghost-component-xyz").unwrap_err();
    assert!(matches!(err, GraphError::ComponentNotFound(ref name) if name == "ghost-component-xyz"));
    assert_eq!(err.to_string(), "ghost-component-xyz not found");
}

#[test]
fn test_cycle_terminates_and_lists_each_component_once() {
    let store = store(vec![
        requires("alpha", "Alpha requires beta."),
        requires("beta", "Beta requires alpha."),
    ]);
    let resolver = DependencyResolver::new(&store);

    assert_eq!(chain_names(&resolver, "alpha"), vec!["beta"]);
    assert_eq!(chain_names(&resolver, "beta"), vec!["alpha"]);
}

#[test]
fn test_self_reference_is_ignored() {
    let store = store(vec![requires("modal", "The modal requires modal backdrops.")]);
    let resolver = DependencyResolver::new(&store);

    assert!(chain_names(&resolver, "modal").is_empty());
}

#[test]
fn test_chain_is_pre_order() {
    // navbar -> collapse -> transition, navbar -> dropdown -> popper
    let store = store(vec![
        requires("navbar", "Requires collapse. Also needs dropdown."),
        requires("collapse", "Requires transition."),
        CatalogComponent::new("transition"),
        requires("dropdown", "Requires popper."),
        CatalogComponent::new("popper"),
    ]);
    let resolver = DependencyResolver::new(&store);

    let resolution = resolver.resolve("navbar").unwrap();
    let entries = resolver.expand_chain(&resolution).unwrap().entries();

    let names: Vec<&str> = entries.iter().map(|e| e.component.as_str()).collect();
    assert_eq!(names, vec!["collapse", "transition", "dropdown", "popper"]);

    let depths: Vec<usize> = entries.iter().map(|e| e.depth).collect();
    assert_eq!(depths, vec![1, 2, 1, 2]);

    assert_eq!(entries[0].requires, vec!["transition"]);
    assert_eq!(entries[2].matched_phrase, "dropdown");
}

#[test]
fn test_diamond_is_suppressed() {
    // app -> left -> shared, app -> right -> shared
    let store = store(vec![
        requires("app", "Requires left. Requires right."),
        requires("left", "Requires shared."),
        requires("right", "Requires shared."),
        CatalogComponent::new("shared"),
    ]);
    let resolver = DependencyResolver::new(&store);

    assert_eq!(chain_names(&resolver, "app"), vec!["left", "shared", "right"]);
}

#[test]
fn test_unmatched_phrases_stay_in_record_but_not_in_chain() {
    let store = store(vec![
        requires("form", "Requires validation library. Requires input."),
        CatalogComponent::new("input group").display_name("Input Group"),
    ]);
    let resolver = DependencyResolver::new(&store);

    let resolution = resolver.resolve("form").unwrap();
    assert_eq!(
        resolution.record.required.components,
        vec!["validation library", "input"]
    );

    let chain = resolver.expand_chain(&resolution).unwrap();
    let entries = chain.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].component, "input group");
    assert_eq!(entries[0].matched_phrase, "input");
}

#[test]
fn test_exact_strategy_drops_loose_matches() {
    let catalog = Catalog::default()
        .component(requires("form", "Requires input."))
        .component(CatalogComponent::new("input group"));
    let store = InMemoryStore::with_matcher(catalog, MatchStrategy::Exact.into_matcher()).unwrap();
    let resolver = DependencyResolver::new(&store);

    let resolution = resolver.resolve("form").unwrap();
    assert!(resolver.expand_chain(&resolution).unwrap().is_empty());
    assert!(store.find_component_like("input").unwrap().is_none());
}

#[test]
fn test_chain_graph_renders_dot() {
    let store = store(vec![
        requires("alpha", "Alpha requires beta."),
        requires("beta", "Beta requires alpha."),
    ]);
    let resolver = DependencyResolver::new(&store);

    let resolution = resolver.resolve("alpha").unwrap();
    let chain = resolver.expand_chain(&resolution).unwrap();
    let dot = chain.to_dot();

    assert!(dot.contains("n0 -> n1 [label=\"beta\"];"));
    assert!(!dot.contains("n1 -> n0"));
}
