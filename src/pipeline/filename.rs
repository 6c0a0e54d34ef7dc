/// Fallback stem when a title sanitizes to nothing.
const UNTITLED: &str = "document";

/// Derives the download filename from a document title.
///
/// Characters outside `[A-Za-z0-9 -]` become `_`, whitespace runs become a
/// single `_`, repeated `_` collapse, and `.pdf` is appended.
pub fn sanitize_filename(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    for ch in title.chars() {
        let mapped = if ch.is_ascii_alphanumeric() || ch == '-' {
            ch
        } else {
            '_'
        };
        if mapped == '_' && stem.ends_with('_') {
            continue;
        }
        stem.push(mapped);
    }
    if stem.is_empty() {
        stem.push_str(UNTITLED);
    }
    format!("{stem}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_and_spaces() {
        assert_eq!(
            sanitize_filename("Test Document: 2025/Report"),
            "Test_Document_2025_Report.pdf"
        );
    }

    #[test]
    fn test_hyphens_survive_and_runs_collapse() {
        assert_eq!(sanitize_filename("Q3 -  Results\t\n(draft)"), "Q3_-_Results_draft_.pdf");
        assert_eq!(sanitize_filename("a___b"), "a_b.pdf");
    }

    #[test]
    fn test_non_ascii_is_replaced() {
        assert_eq!(sanitize_filename("Årsrapport 2024"), "_rsrapport_2024.pdf");
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(sanitize_filename(""), "document.pdf");
        assert_eq!(sanitize_filename("   "), "_.pdf");
    }
}
