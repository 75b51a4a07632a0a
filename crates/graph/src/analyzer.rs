use crate::error::Result;
use crate::install_notes::{synthesize, InstallSettings};
use crate::resolver::DependencyResolver;
use crate::store::ComponentStore;
use component_extract::RelationExtractor;
use component_protocol::{AnalysisReport, AnalysisResult, AnalyzeOptions, ComponentSummary};

/// Caller-facing entry point: resolve, optionally expand, and describe setup.
pub struct DependencyAnalyzer<S> {
    resolver: DependencyResolver<S>,
    install: InstallSettings,
}

impl<S: ComponentStore> DependencyAnalyzer<S> {
    pub fn new(store: S) -> Self {
        Self {
            resolver: DependencyResolver::new(store),
            install: InstallSettings::default(),
        }
    }

    #[must_use]
    pub fn with_extractor(self, extractor: RelationExtractor) -> Self {
        Self {
            resolver: DependencyResolver::with_extractor(self.resolver.into_store(), extractor),
            install: self.install,
        }
    }

    #[must_use]
    pub fn with_install_settings(mut self, install: InstallSettings) -> Self {
        self.install = install;
        self
    }

    pub const fn resolver(&self) -> &DependencyResolver<S> {
        &self.resolver
    }

    /// Analyze one component. Failures are reported in the result, never raised.
    pub fn analyze(&self, name: &str, options: AnalyzeOptions) -> AnalysisResult {
        match self.try_analyze(name, options) {
            Ok(report) => AnalysisResult::Success(report),
            Err(err) => {
                log::warn!("Dependency analysis failed for '{name}': {err}");
                AnalysisResult::failure(err.to_string())
            }
        }
    }

    fn try_analyze(&self, name: &str, options: AnalyzeOptions) -> Result<AnalysisReport> {
        let resolution = self.resolver.resolve(name)?;

        let dependency_chain = if options.recursive {
            Some(self.resolver.expand_chain(&resolution)?.entries())
        } else {
            None
        };

        let component = ComponentSummary::from(&resolution.component);
        let dependencies = resolution
            .record
            .into_report(options.include_suggestions, options.include_conflicts);
        let installation_notes = synthesize(&dependencies, &component, &self.install);

        Ok(AnalysisReport {
            component,
            dependencies,
            dependency_chain,
            installation_notes,
        })
    }
}

/// Analyze with default extraction limits and install settings.
pub fn analyze_dependencies<S: ComponentStore>(
    store: S,
    name: &str,
    options: AnalyzeOptions,
) -> AnalysisResult {
    DependencyAnalyzer::new(store).analyze(name, options)
}
