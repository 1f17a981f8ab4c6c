//! HTML decoding and tree construction

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use log::debug;
use scraper::{ElementRef, Html};

use crate::error::AnalysisError;

/// A parsed page together with the decoded text it was built from.
///
/// The tree is read-only once built; analyzers only borrow it.
pub struct ParsedDocument {
    source: String,
    html: Html,
}

impl ParsedDocument {
    /// Decoded document text, as fed to the parser
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Every element in depth-first pre-order.
    ///
    /// Walks the arena iteratively, so nesting depth is not bounded by the stack.
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.tree.root().descendants().filter_map(ElementRef::wrap)
    }
}

/// Decode `raw` as UTF-8 (lossily) and build a best-effort tree.
///
/// The parser accepts any input; only a crash inside it is reported, as
/// [`AnalysisError::Parse`].
pub fn parse(raw: &[u8]) -> Result<ParsedDocument, AnalysisError> {
    let source = String::from_utf8_lossy(raw).into_owned();
    parse_text(source)
}

fn parse_text(source: String) -> Result<ParsedDocument, AnalysisError> {
    let html = panic::catch_unwind(AssertUnwindSafe(|| Html::parse_document(&source)))
        .map_err(|payload| AnalysisError::Parse(panic_message(payload.as_ref())))?;

    if !html.errors.is_empty() {
        debug!("Parser recovered from {} markup errors", html.errors.len());
    }

    Ok(ParsedDocument { source, html })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "parser panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_source_text_for_version_detection() {
        let doc = parse(b"<!DOCTYPE html><html><head><title>x</title></head></html>").unwrap();
        assert!(doc.source().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn tolerates_malformed_markup() {
        let doc = parse(b"<html><body><div><p>unclosed<span>tags").unwrap();
        let names: Vec<&str> = doc.elements().map(|e| e.value().name()).collect();
        assert!(names.contains(&"span"));
        assert!(names.contains(&"p"));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let doc = parse(b"<title>caf\xe9</title>").unwrap();
        assert!(doc.source().contains('\u{FFFD}'));
    }

    #[test]
    fn elements_are_visited_in_document_order() {
        let doc = parse(b"<html><body><h1>a</h1><div><h2>b</h2></div><h3>c</h3></body></html>").unwrap();
        let headings: Vec<&str> = doc
            .elements()
            .map(|e| e.value().name())
            .filter(|name| name.starts_with('h') && name.len() == 2)
            .collect();
        assert_eq!(headings, vec!["h1", "h2", "h3"]);
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let depth = 5_000;
        let markup = format!("{}<h4>deep</h4>{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let doc = parse(markup.as_bytes()).unwrap();
        assert_eq!(doc.elements().filter(|e| e.value().name() == "h4").count(), 1);
    }

    #[test]
    fn panic_payloads_become_messages() {
        let payload: Box<dyn Any + Send> = Box::new("tree builder failure");
        assert_eq!(panic_message(payload.as_ref()), "tree builder failure");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(payload.as_ref()), "owned message");

        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(payload.as_ref()), "parser panicked");
    }
}
