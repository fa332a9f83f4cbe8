use std::fmt;

/// Sentinel shown in place of a code for fields that have none.
pub const SYNTHETIC_CODE: &str = "undefined";

/// Identity of a field within a schema.
///
/// Label fields and other layout-derived entries carry no code on the wire.
/// They get a [`FieldCode::Synthetic`] identity, which displays as a fixed
/// sentinel and is deliberately distinct from a real code so that consumers
/// cannot key off it as if it were stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldCode {
    /// A real field code from the schema source.
    Code(String),

    /// Synthesized identity for a code-less field.
    Synthetic,
}

impl FieldCode {
    /// Builds a code from a wire string; blank input synthesizes.
    pub fn new(src: impl Into<String>) -> Self {
        let src = src.into();
        if src.trim().is_empty() {
            Self::Synthetic
        } else {
            Self::Code(src)
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::Synthetic)
    }

    /// The real code, if any.
    pub fn as_real(&self) -> Option<&str> {
        match self {
            Self::Code(code) => Some(code),
            Self::Synthetic => None,
        }
    }

    /// Display form: the code itself, or the sentinel.
    pub fn display(&self) -> &str {
        match self {
            Self::Code(code) => code,
            Self::Synthetic => SYNTHETIC_CODE,
        }
    }
}

impl fmt::Display for FieldCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

impl From<&str> for FieldCode {
    fn from(src: &str) -> Self {
        Self::new(src)
    }
}
