//! Hash-based routing.
//!
//! URL format: `#/d_<drive>/path/to/dir?search=<key>`. The drive prefix is
//! omitted for drive 0.

use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use panview_core::path::{normalize_path, parent_path};

const DRIVE_PREFIX: &str = "d_";

/// Application route derived from the URL hash.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppRoute {
    /// Index into the configured drives
    pub drive: usize,
    /// Normalized index path
    pub path: String,
    /// Search key; when set the page shows search results
    pub search: Option<String>,
}

impl AppRoute {
    /// Route to a directory or file of a drive.
    pub fn browse(drive: usize, path: &str) -> Self {
        Self {
            drive,
            path: normalize_path(path),
            search: None,
        }
    }

    /// Route to search results within a drive.
    pub fn search(drive: usize, key: &str) -> Self {
        let key = key.trim();
        Self {
            drive,
            path: "/".to_string(),
            search: (!key.is_empty()).then(|| key.to_string()),
        }
    }

    /// Parse URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let raw = hash.trim_start_matches('#');
        let (path_part, query) = match raw.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (raw, None),
        };

        let path = percent_decode_str(path_part).decode_utf8_lossy();
        let mut segments = path.split('/').filter(|s| !s.is_empty()).peekable();

        let drive = segments
            .peek()
            .and_then(|s| s.strip_prefix(DRIVE_PREFIX))
            .and_then(|n| n.parse::<usize>().ok());
        if drive.is_some() {
            segments.next();
        }
        let rest: Vec<&str> = segments.collect();

        let search = query.and_then(|q| {
            q.split('&').find_map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (k == "search").then(|| percent_decode_str(v).decode_utf8_lossy().into_owned())
            })
        });

        Self {
            drive: drive.unwrap_or(0),
            path: normalize_path(&rest.join("/")),
            search: search.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Convert route to URL hash.
    pub fn to_hash(&self) -> String {
        let mut hash = String::from("#");
        if self.drive > 0 {
            hash.push('/');
            hash.push_str(DRIVE_PREFIX);
            hash.push_str(&self.drive.to_string());
        }
        if self.path == "/" {
            hash.push('/');
        } else {
            for segment in self.path.split('/').filter(|s| !s.is_empty()) {
                hash.push('/');
                hash.extend(utf8_percent_encode(segment, PATH_SEGMENT));
            }
        }
        if let Some(key) = &self.search {
            hash.push_str("?search=");
            hash.extend(utf8_percent_encode(key, NON_ALPHANUMERIC));
        }
        hash
    }

    pub fn is_search(&self) -> bool {
        self.search.is_some()
    }

    /// Route one level up (drops any search).
    pub fn parent(&self) -> Self {
        Self::browse(self.drive, &parent_path(&self.path))
    }

    /// Current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Navigate to this route. Fires `hashchange`, which updates the router.
    pub fn push(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&self.to_hash());
        }
    }

    /// Replace the current history entry. Does not fire `hashchange`.
    pub fn replace(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let _ =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&self.to_hash()));
        }
    }
}

/// Characters escaped inside a path segment of the hash.
const PATH_SEGMENT: &percent_encoding::AsciiSet = &percent_encoding::CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::browse(0, "/"));
        assert_eq!(AppRoute::from_hash("#"), AppRoute::browse(0, "/"));
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::browse(0, "/"));
        assert_eq!(
            AppRoute::from_hash("#/docs/reports/"),
            AppRoute::browse(0, "/docs/reports")
        );
        assert_eq!(
            AppRoute::from_hash("#/d_2/music"),
            AppRoute::browse(2, "/music")
        );
        // Non-numeric drive prefix is an ordinary directory name.
        assert_eq!(
            AppRoute::from_hash("#/d_x/music"),
            AppRoute::browse(0, "/d_x/music")
        );
    }

    #[test]
    fn test_search_parsing() {
        let route = AppRoute::from_hash("#/d_1/?search=annual%20report");
        assert_eq!(route.drive, 1);
        assert_eq!(route.search.as_deref(), Some("annual report"));
        assert!(route.is_search());

        assert_eq!(AppRoute::from_hash("#/?search=").search, None);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::browse(0, "/").to_hash(), "#/");
        assert_eq!(AppRoute::browse(0, "/docs/a b").to_hash(), "#/docs/a%20b");
        assert_eq!(AppRoute::browse(3, "/").to_hash(), "#/d_3/");
        assert_eq!(AppRoute::search(1, "q&a").to_hash(), "#/d_1/?search=q%26a");
    }

    #[test]
    fn test_hash_round_trip() {
        for route in [
            AppRoute::browse(0, "/photos/2023 summer"),
            AppRoute::browse(4, "/文档/报告"),
            AppRoute::search(2, "sheet 50%"),
        ] {
            assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_parent() {
        let route = AppRoute::browse(1, "/docs/a");
        assert_eq!(route.parent(), AppRoute::browse(1, "/docs"));
        assert_eq!(AppRoute::search(0, "x").parent(), AppRoute::browse(0, "/"));
    }
}
