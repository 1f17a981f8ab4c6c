use crate::parser::ParsedDocument;
use crate::types::HeadingCounts;

/// Count every `<h1>`..`<h6>` element in the document.
pub fn count_headings(doc: &ParsedDocument) -> HeadingCounts {
    let mut counts = HeadingCounts::default();

    for element in doc.elements() {
        if let Some(level) = heading_level(element.value().name()) {
            counts.increment(level);
        }
    }

    counts
}

/// Level of a tag named exactly `h` followed by one digit 1-6.
fn heading_level(name: &str) -> Option<u8> {
    match name.as_bytes() {
        [b'h', digit @ b'1'..=b'6'] => Some(digit - b'0'),
        _ => None,
    }
}
