use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Classification tag of a guidance note
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum GuidanceKind {
    WhenToUse,
    BestPractice,
    Caveat,
    Limitation,
    #[default]
    Note,
}

impl GuidanceKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WhenToUse => "when-to-use",
            Self::BestPractice => "best-practice",
            Self::Caveat => "caveat",
            Self::Limitation => "limitation",
            Self::Note => "note",
        }
    }
}

/// Free-text advisory attached to a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GuidanceNote {
    #[serde(default)]
    pub kind: GuidanceKind,
    pub text: String,
    #[serde(default)]
    pub priority: i32,
}

impl GuidanceNote {
    pub fn new(kind: GuidanceKind, text: impl Into<String>, priority: i32) -> Self {
        Self {
            kind,
            text: text.into(),
            priority,
        }
    }
}

/// Embedded code sample; `language` is a free-form tag such as `html` or `js`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MarkupSample {
    pub language: String,
    pub code: String,
}

impl MarkupSample {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    #[default]
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }
}

/// Metadata row as returned by the component store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMeta {
    pub id: u64,
    pub name: String,
    pub display_name: String,
    pub complexity: Complexity,
    pub requires_scripting: bool,
    pub framework_specific: bool,
}

impl ComponentMeta {
    #[must_use]
    pub fn to_ref(&self) -> ComponentRef {
        ComponentRef {
            id: self.id,
            name: self.name.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// Lightweight handle returned by fuzzy lookups
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentRef {
    pub id: u64,
    pub name: String,
    pub display_name: String,
}

/// Caller-facing projection of [`ComponentMeta`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComponentSummary {
    pub name: String,
    pub display_name: String,
    pub complexity: Complexity,
    pub requires_scripting: bool,
    pub framework_specific: bool,
}

impl From<&ComponentMeta> for ComponentSummary {
    fn from(meta: &ComponentMeta) -> Self {
        Self {
            name: meta.name.clone(),
            display_name: meta.display_name.clone(),
            complexity: meta.complexity,
            requires_scripting: meta.requires_scripting,
            framework_specific: meta.framework_specific,
        }
    }
}
