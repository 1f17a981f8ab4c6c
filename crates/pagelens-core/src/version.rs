//! DOCTYPE-based HTML version sniffing

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Markup variant declared by a document's DOCTYPE.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum HtmlVersion {
    #[serde(rename = "HTML5")]
    Html5,
    #[serde(rename = "HTML 4.01")]
    Html401,
    #[serde(rename = "HTML 4.0")]
    Html40,
    #[serde(rename = "XHTML")]
    Xhtml,
    #[default]
    Unknown,
}

impl HtmlVersion {
    pub fn label(&self) -> &'static str {
        match self {
            HtmlVersion::Html5 => "HTML5",
            HtmlVersion::Html401 => "HTML 4.01",
            HtmlVersion::Html40 => "HTML 4.0",
            HtmlVersion::Xhtml => "XHTML",
            HtmlVersion::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for HtmlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Signatures in priority order. `html 4.0` also matches 4.01 documents,
/// so 4.01 has to be tried first.
static SIGNATURES: Lazy<Vec<(Regex, HtmlVersion)>> = Lazy::new(|| {
    [
        ("<!doctype html>", HtmlVersion::Html5),
        (r#"public "-//w3c//dtd html 4.01"#, HtmlVersion::Html401),
        (r#"public "-//w3c//dtd html 4.0"#, HtmlVersion::Html40),
        (r#"public "-//w3c//dtd xhtml"#, HtmlVersion::Xhtml),
    ]
    .into_iter()
    .map(|(literal, version)| {
        let pattern = format!("(?i){}", regex::escape(literal));
        (Regex::new(&pattern).expect("invalid doctype signature"), version)
    })
    .collect()
});

/// Detect the declared HTML version anywhere in `source`, case-insensitively.
///
/// First matching signature wins; nothing beyond the fixed list is inferred.
pub fn detect_html_version(source: &str) -> HtmlVersion {
    SIGNATURES
        .iter()
        .find(|(signature, _)| signature.is_match(source))
        .map(|(_, version)| *version)
        .unwrap_or_default()
}
