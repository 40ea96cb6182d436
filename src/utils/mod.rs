//! Small shared helpers: HTML escaping and short-id formatting.
//!
//! Display names resolved from content are HTML-escaped before they enter a
//! chrome record, because the editing client injects them into markup
//! verbatim. Identifiers embedded in edit-button action strings use the
//! "short id" form (the 32-hex uppercase rendering of a UUID) on *both*
//! sides of every comparison the crate performs, so containment checks never
//! fail on case or hyphenation differences.

use uuid::Uuid;

/// Escape the five HTML-significant characters of `raw`.
///
/// Borrows when nothing needs escaping; allocates otherwise.
///
/// # Examples
///
/// ```
/// use page_chrome::utils::html_escape;
///
/// assert_eq!(html_escape("Main & <Left>"), "Main &amp; &lt;Left&gt;");
/// assert_eq!(html_escape("plain"), "plain");
/// ```
pub fn html_escape(raw: &str) -> String {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return raw.to_string();
    }
    let mut escaped = String::with_capacity(raw.len() + 8);
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// The uppercase 32-hex "short id" form of a UUID, as embedded in edit-button
/// action strings and allowed-rendering lists.
///
/// # Examples
///
/// ```
/// use page_chrome::utils::short_id;
/// use uuid::Uuid;
///
/// let id = Uuid::parse_str("b66eb850-4a26-49f9-82de-e7d65c23f2ae").unwrap();
/// assert_eq!(short_id(&id), "B66EB8504A2649F982DEE7D65C23F2AE");
/// ```
pub fn short_id(id: &Uuid) -> String {
    format!("{:X}", id.simple())
}
