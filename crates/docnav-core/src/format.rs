//! Label and path formatting helpers.

use std::sync::LazyLock;

use regex::Regex;

/// Label shown for nodes whose title is empty.
pub const UNTITLED: &str = "Untitled";

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_\s]+").expect("separator pattern is valid"));

/// Turn a file or folder name into a display label.
///
/// `getting-started` becomes `Getting started`, `api_reference` becomes
/// `Api reference`. Empty or separator-only input yields [`UNTITLED`].
pub fn humanize(title: &str) -> String {
    let spaced = SEPARATORS.replace_all(title.trim(), " ");
    let spaced = spaced.trim();

    let mut chars = spaced.chars();
    match chars.next() {
        None => UNTITLED.to_string(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Split a path into its non-empty segments, dropping `.` segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}

/// Normalize a slash-separated path: no leading, trailing or repeated slashes.
pub fn normalize_path(path: &str) -> String {
    segments(path).collect::<Vec<_>>().join("/")
}

/// Join a root prefix (e.g. `/resources`) with a relative path.
///
/// The result always starts with `/` and never ends with one, except for
/// the bare root `/`.
pub fn join_path(root: &str, relative: &str) -> String {
    let joined: Vec<&str> = segments(root).chain(segments(relative)).collect();
    format!("/{}", joined.join("/"))
}

/// Strip the extension from the last segment (`guides/intro.md` -> `guides/intro`).
pub fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    match path[name_start..].rfind('.') {
        Some(dot) if dot > 0 => &path[..name_start + dot],
        _ => path,
    }
}
