use url::Url;

/// Prepend `https://` unless the input already starts with `http://` or `https://`.
///
/// Nothing else is validated here; a malformed URL surfaces later as a
/// transport failure.
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

/// Host of an absolute URL exactly as written, including any port.
///
/// The URL must parse, but the host is taken from the input text rather than
/// the parsed form, so case and explicit default ports are preserved and
/// `user:pass@` is dropped. Returns an empty string if the input cannot be
/// parsed or has no authority; two unparsable inputs therefore yield equal
/// hosts.
pub fn extract_host(input: &str) -> String {
    if Url::parse(input).is_err() {
        return String::new();
    }

    let Some((_, rest)) = input.split_once("://") else {
        return String::new();
    };
    let authority = rest
        .split(|c| matches!(c, '/' | '?' | '#'))
        .next()
        .unwrap_or_default();

    match authority.rsplit_once('@') {
        Some((_, host)) => host.to_string(),
        None => authority.to_string(),
    }
}
