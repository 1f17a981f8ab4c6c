//! Tree analyzers.
//!
//! Each analyzer walks the parsed document once and derives a single facet
//! of the report. They only borrow the tree, so they are independent of each
//! other and of call order.

pub mod headings;
pub mod links;
pub mod login_form;
pub mod title;

pub use headings::count_headings;
pub use links::classify_links;
pub use login_form::has_login_form;
pub use title::extract_title;

use scraper::ElementRef;

/// Value of attribute `name`, or `""` when absent.
pub(crate) fn attr<'a>(element: &ElementRef<'a>, name: &str) -> &'a str {
    element.value().attr(name).unwrap_or("")
}
