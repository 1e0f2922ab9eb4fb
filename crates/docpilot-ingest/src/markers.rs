use std::sync::LazyLock;

use regex::Regex;

static PAGE_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[PAGE (\d+)\]").expect("Invalid regex pattern for page markers")
});

/// Literal marker placed in front of page `page` (1-based)
pub fn page_marker(page: usize) -> String {
    format!("[PAGE {}]", page)
}

/// Flatten per-page text into one blob, each page preceded by its marker
pub fn mark_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::new();
    for (idx, page_text) in pages.iter().enumerate() {
        text.push_str(&page_marker(idx + 1));
        text.push('\n');
        text.push_str(page_text.as_ref());
        text.push('\n');
    }
    text
}

/// Page numbers of every marker in `text`, in order of appearance
pub fn page_markers(text: &str) -> Vec<u32> {
    PAGE_MARKER_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_pages_layout() {
        let text = mark_pages(&["Revenue grew 10%", "Risk increased"]);
        assert_eq!(text, "[PAGE 1]\nRevenue grew 10%\n[PAGE 2]\nRisk increased\n");
    }

    #[test]
    fn test_mark_no_pages() {
        assert_eq!(mark_pages::<&str>(&[]), "");
    }

    #[test]
    fn test_page_markers() {
        let text = " [PAGE 1]\nRevenue grew 10%\n[PAGE 2]\nRisk increased\n";
        assert_eq!(page_markers(text), vec![1, 2]);
        assert!(page_markers("no markers [PAGE] here").is_empty());
    }
}
