use std::borrow::Cow;

/// Escape provider text for HTML element content or a quoted attribute.
///
/// Covers `&`, `<`, `>`, `"` and `'`, so the same call is safe in both
/// contexts.
pub fn escape(value: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(value)
}
