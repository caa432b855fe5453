//! Small text and URL helpers shared by the config and API layers.

/// Longest error body kept on [`crate::ApiError::Status`].
const ERROR_BODY_LIMIT: usize = 180;

/// Trimmed contents of `value`, or `None` when it is missing or blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

pub fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// Trimmed error body cut to [`ERROR_BODY_LIMIT`] characters.
pub fn compact_body(body: &str) -> String {
    body.trim().chars().take(ERROR_BODY_LIMIT).collect()
}

/// Trim a base URL, drop trailing slashes and require an http(s) scheme.
pub fn normalize_base_url(raw: &str) -> Result<String, String> {
    let base = raw.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err("API base URL must not be empty".to_string());
    }
    if !has_http_scheme(base) {
        return Err("API base URL must include http:// or https://".to_string());
    }
    Ok(base.to_string())
}
