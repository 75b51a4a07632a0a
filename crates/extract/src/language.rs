/// Language family of a markup sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleLanguage {
    Markup,
    Script,
    Stylesheet,
    Unknown,
}

impl SampleLanguage {
    /// Detect language family from a sample's language tag
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "html" | "htm" | "xhtml" | "markup" | "svg" | "vue" => Self::Markup,
            "js" | "javascript" | "mjs" | "cjs" | "ts" | "typescript" | "jsx" | "tsx" => {
                Self::Script
            }
            "css" | "scss" | "sass" | "less" => Self::Stylesheet,
            _ => Self::Unknown,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markup => "markup",
            Self::Script => "script",
            Self::Stylesheet => "stylesheet",
            Self::Unknown => "unknown",
        }
    }

    /// Only markup samples are scanned for asset references
    pub const fn is_scannable(self) -> bool {
        matches!(self, Self::Markup)
    }

    /// Script samples imply the component needs scripting
    pub const fn implies_scripting(self) -> bool {
        matches!(self, Self::Script)
    }
}
