use component_protocol::{ComponentSummary, DependencyReport};

/// Base library the installation notes refer to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSettings {
    pub library: String,
    pub stylesheet_url: Option<String>,
}

impl Default for InstallSettings {
    fn default() -> Self {
        Self {
            library: "the component library".to_string(),
            stylesheet_url: None,
        }
    }
}

impl InstallSettings {
    fn base_line(&self) -> String {
        match &self.stylesheet_url {
            Some(url) => format!(
                "Install {} and include its base stylesheet ({url})",
                self.library
            ),
            None => format!("Install {} and include its base stylesheet", self.library),
        }
    }
}

/// Turn a dependency report into ordered setup instructions.
///
/// The base install line always comes first; the remaining lines appear only
/// for non-empty categories, in a fixed order: stylesheets, scripts,
/// initialization hint, required components, suggestions, enhancements,
/// conflicts.
#[must_use]
pub fn synthesize(
    report: &DependencyReport,
    component: &ComponentSummary,
    settings: &InstallSettings,
) -> Vec<String> {
    let mut notes = vec![settings.base_line()];
    let required = &report.required;

    if !required.stylesheets.is_empty() {
        notes.push(format!(
            "Add stylesheets: {}",
            required.stylesheets.join(", ")
        ));
    }
    if !required.scripts.is_empty() {
        notes.push(format!("Add scripts: {}", required.scripts.join(", ")));
    }
    if required.needs_scripting {
        notes.push(format!(
            "Initialize {} with JavaScript once the page has loaded",
            component.display_name
        ));
    }
    if !required.components.is_empty() {
        notes.push(format!(
            "Required components: {}",
            required.components.join(", ")
        ));
    }

    if let Some(suggested) = &report.suggested {
        if !suggested.components.is_empty() {
            notes.push(format!(
                "Commonly paired with: {}",
                suggested.components.join(", ")
            ));
        }
        if !suggested.enhancements.is_empty() {
            notes.push(format!(
                "Optional enhancements: {}",
                suggested.enhancements.join(", ")
            ));
        }
    }

    if let Some(conflicts) = report.conflicts.as_ref().filter(|c| !c.is_empty()) {
        if conflicts.components.is_empty() {
            notes.push(format!(
                "WARNING: review usage cautions for {}: {}",
                component.display_name,
                conflicts.warnings.join(" ")
            ));
        } else {
            notes.push(format!(
                "WARNING: do not combine with {}",
                conflicts.components.join(", ")
            ));
        }
    }

    notes
}
