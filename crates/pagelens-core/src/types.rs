//! Report types produced by an analysis

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{AnalysisError, FailureKind};
use crate::version::HtmlVersion;

/// Number of `<h1>`..`<h6>` elements, one slot per level.
///
/// All six levels always exist; absent levels read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "BTreeMap<u8, usize>")]
pub struct HeadingCounts([usize; 6]);

impl HeadingCounts {
    /// Count for `level` (1..=6); any other level reads as zero.
    pub fn get(&self, level: u8) -> usize {
        match level {
            1..=6 => self.0[usize::from(level - 1)],
            _ => 0,
        }
    }

    pub fn increment(&mut self, level: u8) {
        if let 1..=6 = level {
            self.0[usize::from(level - 1)] += 1;
        }
    }

    /// `(level, count)` pairs for levels 1 through 6.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        (1u8..=6).zip(self.0.iter().copied())
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

impl From<HeadingCounts> for BTreeMap<u8, usize> {
    fn from(counts: HeadingCounts) -> Self {
        counts.iter().collect()
    }
}

/// Anchor classification totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
    pub inaccessible: usize,
}

/// Summary of one analyzed page.
///
/// When `error` is non-empty every analytic field keeps its default; only
/// `url`, `status_code`, `error` and `failure` carry information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// URL after normalization
    pub url: String,

    pub title: String,

    pub html_version: HtmlVersion,

    pub headings: HeadingCounts,

    pub internal_links: usize,

    pub external_links: usize,

    pub inaccessible_links: usize,

    pub has_login_form: bool,

    /// HTTP status of the final response; 0 when no response arrived
    pub status_code: u16,

    /// Empty on success
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}

impl AnalysisReport {
    /// Report for a failed analysis; analytic fields stay at their defaults.
    pub fn failed(url: String, status_code: u16, error: &AnalysisError) -> Self {
        Self {
            url,
            status_code,
            error: error.to_string(),
            failure: Some(error.kind()),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_counts_start_at_zero_for_all_levels() {
        let counts = HeadingCounts::default();
        let levels: Vec<(u8, usize)> = counts.iter().collect();
        assert_eq!(levels, vec![(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0)]);
    }

    #[test]
    fn out_of_range_levels_are_ignored() {
        let mut counts = HeadingCounts::default();
        counts.increment(0);
        counts.increment(7);
        counts.increment(3);
        assert_eq!(counts.total(), 1);
        assert_eq!(counts.get(3), 1);
        assert_eq!(counts.get(9), 0);
    }

    #[test]
    fn heading_counts_serialize_as_level_map() {
        let mut counts = HeadingCounts::default();
        counts.increment(2);
        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"1": 0, "2": 1, "3": 0, "4": 0, "5": 0, "6": 0})
        );
    }

    #[test]
    fn failed_report_keeps_only_url_status_and_error() {
        let err = AnalysisError::Http {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        let report = AnalysisReport::failed("https://example.com".to_string(), 500, &err);

        assert!(!report.is_success());
        assert_eq!(report.status_code, 500);
        assert_eq!(report.error, "HTTP 500: Internal Server Error");
        assert_eq!(report.failure, Some(FailureKind::Http));
        assert_eq!(report.title, "");
        assert_eq!(report.html_version, HtmlVersion::Unknown);
        assert_eq!(report.headings.total(), 0);
        assert_eq!(report.internal_links, 0);
        assert_eq!(report.external_links, 0);
        assert_eq!(report.inaccessible_links, 0);
        assert!(!report.has_login_form);
    }
}
