use crate::language::SampleLanguage;
use component_protocol::MarkupSample;
use once_cell::sync::Lazy;
use regex::Regex;

static LINK_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<link\b[^>]*>").expect("valid link tag pattern"));

static SCRIPT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>").expect("valid script tag pattern"));

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
        .expect("valid attribute pattern")
});

/// External asset references found in markup samples, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedReferences {
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

impl ScannedReferences {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stylesheets.is_empty() && self.scripts.is_empty()
    }
}

/// Look up an attribute value inside a single opening tag
fn attribute<'t>(tag: &'t str, name: &str) -> Option<&'t str> {
    ATTRIBUTE.captures_iter(tag).find_map(|caps| {
        let key = caps.get(1)?;
        if !key.as_str().eq_ignore_ascii_case(name) {
            return None;
        }
        caps.get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|value| value.as_str().trim())
    })
}

fn is_stylesheet_link(tag: &str) -> bool {
    attribute(tag, "rel").is_some_and(|rel| {
        rel.split_whitespace()
            .any(|token| token.eq_ignore_ascii_case("stylesheet"))
    })
}

/// Scanner for literal stylesheet/script references in markup
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceScanner;

impl ReferenceScanner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Scan markup samples; samples in other languages are skipped.
    #[must_use]
    pub fn scan(&self, samples: &[MarkupSample]) -> ScannedReferences {
        let mut refs = ScannedReferences::default();

        for sample in samples {
            let language = SampleLanguage::from_tag(&sample.language);
            if !language.is_scannable() {
                log::debug!(
                    "Skipping {} sample for reference scan",
                    language.as_str()
                );
                continue;
            }
            Self::scan_markup(&sample.code, &mut refs);
        }

        refs
    }

    fn push_url(list: &mut Vec<String>, url: &str) {
        // URL paths are case-sensitive
        if !list.iter().any(|existing| existing == url) {
            list.push(url.to_string());
        }
    }

    fn scan_markup(code: &str, refs: &mut ScannedReferences) {
        for tag in LINK_TAG.find_iter(code) {
            let tag = tag.as_str();
            if !is_stylesheet_link(tag) {
                continue;
            }
            if let Some(href) = attribute(tag, "href").filter(|href| !href.is_empty()) {
                Self::push_url(&mut refs.stylesheets, href);
            }
        }

        for tag in SCRIPT_TAG.find_iter(code) {
            if let Some(src) = attribute(tag.as_str(), "src").filter(|src| !src.is_empty()) {
                Self::push_url(&mut refs.scripts, src);
            }
        }
    }

    /// True when any sample is written in a script language
    #[must_use]
    pub fn has_script_samples(&self, samples: &[MarkupSample]) -> bool {
        samples
            .iter()
            .any(|sample| SampleLanguage::from_tag(&sample.language).implies_scripting())
    }
}
