use component_protocol::{AnalysisReport, AnalysisResult};
use std::fmt::Write as _;

fn list_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Human-readable rendering of an analysis result
pub fn render_text(result: &AnalysisResult) -> String {
    match result {
        AnalysisResult::Success(report) => render_report(report),
        AnalysisResult::Failure(failure) => format!("error: {}\n", failure.error),
    }
}

fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let component = &report.component;
    let deps = &report.dependencies;

    let _ = writeln!(
        out,
        "{} ({}) [{}]",
        component.display_name,
        component.name,
        component.complexity.as_str()
    );

    out.push_str("Required:\n");
    let _ = writeln!(out, "  components: {}", list_or_dash(&deps.required.components));
    let _ = writeln!(out, "  stylesheets: {}", list_or_dash(&deps.required.stylesheets));
    let _ = writeln!(out, "  scripts: {}", list_or_dash(&deps.required.scripts));
    let _ = writeln!(
        out,
        "  needs scripting: {}",
        if deps.required.needs_scripting { "yes" } else { "no" }
    );

    if let Some(suggested) = &deps.suggested {
        out.push_str("Suggested:\n");
        let _ = writeln!(out, "  components: {}", list_or_dash(&suggested.components));
        let _ = writeln!(out, "  enhancements: {}", list_or_dash(&suggested.enhancements));
    }

    if let Some(conflicts) = &deps.conflicts {
        out.push_str("Conflicts:\n");
        let _ = writeln!(out, "  components: {}", list_or_dash(&conflicts.components));
        for warning in &conflicts.warnings {
            let _ = writeln!(out, "  ! {warning}");
        }
    }

    if let Some(chain) = &report.dependency_chain {
        out.push_str("Dependency chain:\n");
        if chain.is_empty() {
            out.push_str("  (none)\n");
        }
        for entry in chain {
            let indent = "  ".repeat(entry.depth);
            let _ = writeln!(
                out,
                "{indent}- {} (via \"{}\") requires: {}",
                entry.component,
                entry.matched_phrase,
                list_or_dash(&entry.requires)
            );
        }
    }

    out.push_str("Installation notes:\n");
    for (idx, note) in report.installation_notes.iter().enumerate() {
        let _ = writeln!(out, "  {}. {note}", idx + 1);
    }

    out
}
