//! Index path helpers.
//!
//! Index paths are absolute, `/`-separated, and never end with `/` except the
//! root itself.

/// Normalize a path: leading `/`, no empty segments, no trailing `/`.
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Parent directory of a path. The root is its own parent.
pub fn parent_path(path: &str) -> String {
    let normalized = normalize_path(path);
    match normalized.rsplit_once('/') {
        Some(("", _)) | None => "/".to_string(),
        Some((parent, _)) => parent.to_string(),
    }
}

/// Join a directory path and a child name.
pub fn join_path(dir: &str, name: &str) -> String {
    normalize_path(&format!("{}/{}", dir, name))
}

/// Last segment of a path, empty for the root.
pub fn file_name(path: &str) -> String {
    normalize_path(path)
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Whether any segment of `path` is a dot-name, so the entry or one of its
/// ancestors is hidden.
pub fn is_hidden_path(path: &str) -> bool {
    path.split('/').any(|s| s.starts_with('.'))
}

/// All prefix paths from the root down to `path`, as `(label, path)` pairs.
///
/// `/a/b` yields `("/", "/")`, `("a", "/a")`, `("b", "/a/b")`.
pub fn breadcrumbs(path: &str) -> Vec<(String, String)> {
    let normalized = normalize_path(path);
    let mut crumbs = vec![("/".to_string(), "/".to_string())];
    let mut current = String::new();
    for segment in normalized.split('/').filter(|s| !s.is_empty()) {
        current.push('/');
        current.push_str(segment);
        crumbs.push((segment.to_string(), current.clone()));
    }
    crumbs
}
