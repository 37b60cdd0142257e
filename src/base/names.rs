//! Qualified names and the file naming rule.
//!
//! Names arrive from the metadata with a leading `\` (`\App\Model\User`).
//! Everything inside the crate stores them without it (`App\Model\User`).

/// Separator between namespace segments in a qualified name.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Filesystem-safe replacement for [`NAMESPACE_SEPARATOR`] in output names.
pub const FILE_SEPARATOR: char = '-';

/// Extension of every generated document.
pub const DOCUMENT_EXTENSION: &str = ".md";

/// Strip surrounding whitespace and the leading namespace separator(s).
pub fn normalize_name(name: &str) -> &str {
    name.trim().trim_start_matches(NAMESPACE_SEPARATOR)
}

/// Split a qualified name into its non-empty segments.
pub fn segments(name: &str) -> impl Iterator<Item = &str> {
    name.split(NAMESPACE_SEPARATOR).filter(|s| !s.is_empty())
}

/// Join a namespace and a short name. An empty namespace yields the short name.
pub fn qualify(namespace: &str, short_name: &str) -> String {
    let namespace = normalize_name(namespace);
    if namespace.is_empty() {
        short_name.to_string()
    } else {
        format!("{namespace}{NAMESPACE_SEPARATOR}{short_name}")
    }
}

/// Replace namespace separators with the file separator.
pub fn flatten(name: &str) -> String {
    name.replace(NAMESPACE_SEPARATOR, &FILE_SEPARATOR.to_string())
}

/// Output document name for a qualified name: `App\Model\User` -> `App-Model-User.md`.
pub fn file_name_for(name: &str) -> String {
    format!("{}{DOCUMENT_EXTENSION}", flatten(normalize_name(name)))
}
