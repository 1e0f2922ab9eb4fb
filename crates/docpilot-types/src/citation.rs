use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a cited snippet lives
///
/// Bullets carry a page number; metrics only point at the summary's
/// overall source reference, which is free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageRef {
    Page(u32),
    Reference(String),
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{}", page),
            Self::Reference(reference) => f.write_str(reference),
        }
    }
}

/// The citation currently open in the source viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SourceContext {
    pub title: String,
    pub snippet: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub page: PageRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ref_serializes_bare() {
        assert_eq!(serde_json::to_string(&PageRef::Page(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&PageRef::Reference("Section 2".into())).unwrap(),
            "\"Section 2\""
        );
        let parsed: PageRef = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, PageRef::Page(7));
    }

    #[test]
    fn test_display() {
        assert_eq!(PageRef::Page(12).to_string(), "12");
        assert_eq!(PageRef::Reference("Unknown".into()).to_string(), "Unknown");
    }
}
