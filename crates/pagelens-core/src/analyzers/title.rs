use crate::parser::ParsedDocument;

/// Trimmed text of the first `<title>` with non-empty content.
///
/// Empty `<title>` elements are skipped; returns `""` if none qualifies.
pub fn extract_title(doc: &ParsedDocument) -> String {
    doc.elements()
        .filter(|element| element.value().name() == "title")
        .find_map(|element| {
            let text = element.text().collect::<String>();
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_default()
}
