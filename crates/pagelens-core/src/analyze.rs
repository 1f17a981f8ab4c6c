//! Analysis orchestration: fetch, parse, analyze, assemble.

use log::{debug, info, warn};

use crate::analyzers::{classify_links, count_headings, extract_title, has_login_form};
use crate::config::FetchConfig;
use crate::error::AnalysisError;
use crate::fetch::Fetcher;
use crate::parser;
use crate::types::AnalysisReport;
use crate::url_utils::normalize_url;
use crate::version::detect_html_version;

/// Runs complete page analyses with one shared HTTP client.
///
/// Requests share no mutable state, so one analyzer can serve concurrent
/// calls.
#[derive(Debug, Clone)]
pub struct Analyzer {
    fetcher: Fetcher,
}

impl Analyzer {
    pub fn new(config: &FetchConfig) -> reqwest::Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
        })
    }

    /// Analyze the page at `url`.
    ///
    /// Never fails: problems are reported through the report's `error` and
    /// `status_code` fields.
    pub async fn analyze(&self, url: &str) -> AnalysisReport {
        let url = normalize_url(url);
        info!("Analyzing {url}");

        let page = match self.fetcher.fetch(&url).await {
            Ok(page) => page,
            Err(err) => {
                warn!("Fetching {url} failed: {err}");
                let status = err.status_code().unwrap_or_default();
                return AnalysisReport::failed(url, status, &err);
            }
        };

        debug!("Fetched {} bytes from {url}", page.body.len());

        match analyze_document(&url, &page.body) {
            Ok(mut report) => {
                report.status_code = page.status;
                report
            }
            Err(err) => {
                warn!("Analyzing {url} failed: {err}");
                AnalysisReport::failed(url, page.status, &err)
            }
        }
    }
}

/// Analyze `url` with the default limits.
pub async fn analyze_url(url: &str) -> AnalysisReport {
    match Analyzer::new(&FetchConfig::default()) {
        Ok(analyzer) => analyzer.analyze(url).await,
        Err(err) => {
            let err = AnalysisError::Transport(format!("failed to create HTTP client: {err}"));
            AnalysisReport::failed(normalize_url(url), 0, &err)
        }
    }
}

/// Parse `body` and derive every facet of the report for `page_url`.
///
/// `page_url` should already be normalized; it becomes the report URL and the
/// reference host for link classification. The returned report has a zero
/// status code, which the caller fills in.
pub fn analyze_document(page_url: &str, body: &[u8]) -> Result<AnalysisReport, AnalysisError> {
    let doc = parser::parse(body)?;

    let html_version = detect_html_version(doc.source());
    let title = extract_title(&doc);
    let headings = count_headings(&doc);
    let links = classify_links(&doc, page_url);
    let has_login_form = has_login_form(&doc);

    debug!("{page_url}: version {html_version}, title {title:?}, login form {has_login_form}");

    Ok(AnalysisReport {
        url: page_url.to_string(),
        title,
        html_version,
        headings,
        internal_links: links.internal,
        external_links: links.external,
        inaccessible_links: links.inaccessible,
        has_login_form,
        status_code: 0,
        error: String::new(),
        failure: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::HtmlVersion;

    const MOCK_PAGE: &str = r##"<!DOCTYPE html><html><head><title>Test Page</title></head><body><h1>Main Title</h1><h2>Section 1</h2><h2>Section 2</h2><a href="/">Home</a><a href="https://external.com">External</a><a href="#">Anchor</a><form><input type="text" id="username"><input type="password" id="password"></form><a href="/about">About</a></body></html>"##;

    #[test]
    fn analyzes_complete_document() {
        let report = analyze_document("http://127.0.0.1:8080", MOCK_PAGE.as_bytes()).unwrap();

        assert!(report.is_success());
        assert_eq!(report.url, "http://127.0.0.1:8080");
        assert_eq!(report.title, "Test Page");
        assert_eq!(report.html_version, HtmlVersion::Html5);
        let levels: Vec<(u8, usize)> = report.headings.iter().collect();
        assert_eq!(levels, vec![(1, 1), (2, 2), (3, 0), (4, 0), (5, 0), (6, 0)]);
        assert_eq!(report.internal_links, 2);
        assert_eq!(report.external_links, 1);
        assert_eq!(report.inaccessible_links, 1);
        assert!(report.has_login_form);
        assert_eq!(report.failure, None);
    }

    #[test]
    fn empty_body_yields_empty_facets() {
        let report = analyze_document("https://example.com", b"").unwrap();

        assert!(report.is_success());
        assert_eq!(report.title, "");
        assert_eq!(report.html_version, HtmlVersion::Unknown);
        assert_eq!(report.headings.total(), 0);
        assert!(!report.has_login_form);
    }

    #[test]
    fn document_analysis_is_repeatable() {
        let first = analyze_document("https://example.com", MOCK_PAGE.as_bytes()).unwrap();
        let second = analyze_document("https://example.com", MOCK_PAGE.as_bytes()).unwrap();
        assert_eq!(first, second);
    }
}
