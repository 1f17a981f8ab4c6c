use scraper::ElementRef;

use super::attr;
use crate::parser::ParsedDocument;

/// Substrings of `name`/`id` that mark a username-like field.
const USERNAME_HINTS: &[&str] = &["user", "login", "email"];

/// Whether any `<form>` on the page looks like a login form.
///
/// A form qualifies when its subtree holds both a password input and a
/// username-like input; inputs may be nested at any depth.
pub fn has_login_form(doc: &ParsedDocument) -> bool {
    doc.elements()
        .filter(|element| element.value().name() == "form")
        .any(|form| is_login_form(&form))
}

fn is_login_form(form: &ElementRef<'_>) -> bool {
    let mut has_password = false;
    let mut has_username = false;

    let inputs = form
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "input");

    for input in inputs {
        let input_type = attr(&input, "type").to_lowercase();

        if input_type == "password" {
            has_password = true;
        }
        if input_type == "text" || input_type == "email" {
            has_username = true;
        }
        if looks_like_username(attr(&input, "name")) || looks_like_username(attr(&input, "id")) {
            has_username = true;
        }
    }

    has_password && has_username
}

fn looks_like_username(value: &str) -> bool {
    let value = value.to_lowercase();
    USERNAME_HINTS.iter().any(|hint| value.contains(hint))
}
