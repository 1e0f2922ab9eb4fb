use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Formats the upload control accepts (`.txt`, `.md`, `.pdf`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    PlainText,
    Markdown,
    Pdf,
}

impl DocumentKind {
    /// Detect the format from the file name, with the content type as a
    /// tie-breaker for PDFs uploaded under an odd name
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Result<Self> {
        if content_type.is_some_and(|ct| ct.eq_ignore_ascii_case("application/pdf")) {
            return Ok(Self::Pdf);
        }

        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("txt") => Ok(Self::PlainText),
            Some("md") => Ok(Self::Markdown),
            _ => Err(IngestError::UnsupportedFormat(file_name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(DocumentKind::detect("q2.PDF", None).unwrap(), DocumentKind::Pdf);
        assert_eq!(DocumentKind::detect("notes.txt", None).unwrap(), DocumentKind::PlainText);
        assert_eq!(DocumentKind::detect("memo.md", Some("text/markdown")).unwrap(), DocumentKind::Markdown);
    }

    #[test]
    fn test_detect_pdf_by_content_type() {
        assert_eq!(
            DocumentKind::detect("upload", Some("application/pdf")).unwrap(),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!(matches!(
            DocumentKind::detect("deck.pptx", None),
            Err(IngestError::UnsupportedFormat(name)) if name == "deck.pptx"
        ));
        assert!(DocumentKind::detect("README", None).is_err());
    }
}
