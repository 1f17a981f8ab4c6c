//! Anchor classification
//!
//! Every `<a>` element lands in exactly one bucket, decided by its `href`:
//!
//! 1. missing, empty or fragment-only → inaccessible
//! 2. absolute `http(s)://` → internal when its host, as written, equals the
//!    page host (scheme is ignored), external otherwise
//! 3. relative (`/`, `./`, or no `://` at all) → internal
//! 4. anything else → external

use log::debug;

use super::attr;
use crate::parser::ParsedDocument;
use crate::types::LinkCounts;
use crate::url_utils::extract_host;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Internal,
    External,
    Inaccessible,
}

/// Classify every anchor in the document relative to `page_url`.
pub fn classify_links(doc: &ParsedDocument, page_url: &str) -> LinkCounts {
    let page_host = extract_host(page_url);
    let mut counts = LinkCounts::default();

    for anchor in doc.elements().filter(|element| element.value().name() == "a") {
        let href = attr(&anchor, "href");
        match classify_href(href, &page_host) {
            LinkKind::Internal => counts.internal += 1,
            LinkKind::External => counts.external += 1,
            LinkKind::Inaccessible => counts.inaccessible += 1,
        }
    }

    debug!(
        "Links on {page_url}: {} internal, {} external, {} inaccessible",
        counts.internal, counts.external, counts.inaccessible
    );

    counts
}

/// Classify a single `href` value against the page host.
pub fn classify_href(href: &str, page_host: &str) -> LinkKind {
    if href.is_empty() || href.starts_with('#') {
        return LinkKind::Inaccessible;
    }

    if href.starts_with("http://") || href.starts_with("https://") {
        return if extract_host(href) == page_host {
            LinkKind::Internal
        } else {
            LinkKind::External
        };
    }

    if href.starts_with('/') || href.starts_with("./") || !href.contains("://") {
        LinkKind::Internal
    } else {
        LinkKind::External
    }
}
