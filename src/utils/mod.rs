/// Generate a fresh, unique page identifier
pub fn generate_page_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Derive a URL slug from a title: lowercase, whitespace runs become `-`
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Split a comma separated keyword field, dropping blank entries
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

/// Case-insensitive substring test; `needle` must already be lowercase.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
