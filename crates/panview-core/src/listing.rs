use std::cmp::Ordering;
use std::collections::HashMap;

use crate::node::{FileNode, Manifest};
use crate::path::{file_name, is_hidden_path, normalize_path, parent_path};

/// Name of the file rendered under a directory listing.
pub const README_NAME: &str = "README.md";

/// Directory index built from a drive manifest.
///
/// Entries are grouped by normalized parent path. Folders that only appear as
/// ancestors of other entries are synthesized so every path is reachable.
///
/// # Path Convention
///
/// - Root: `"/"`
/// - Nested: `"/docs/a.txt"`
/// - No trailing slash
#[derive(Clone, Debug, Default)]
pub struct Listing {
    children: HashMap<String, Vec<FileNode>>,
    by_path: HashMap<String, FileNode>,
}

impl Listing {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the index from a manifest.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut listing = Self::empty();
        for node in &manifest.files {
            let mut node = node.clone();
            node.path = normalize_path(&node.path);
            if node.path == "/" {
                continue;
            }
            listing.ensure_ancestors(&node.path);
            listing.insert(node);
        }
        listing
    }

    fn insert(&mut self, node: FileNode) {
        let parent = node.parent_path();
        let path = node.path.clone();
        let siblings = self.children.entry(parent).or_default();
        // Later manifest entries replace earlier ones (and synthesized folders).
        siblings.retain(|n| n.path != path);
        siblings.push(node.clone());
        self.by_path.insert(path, node);
    }

    fn ensure_ancestors(&mut self, path: &str) {
        let mut dir = parent_path(path);
        let mut missing = Vec::new();
        while dir != "/" && !self.by_path.contains_key(&dir) {
            missing.push(dir.clone());
            dir = parent_path(&dir);
        }
        for dir in missing.into_iter().rev() {
            self.insert(FileNode {
                file_name: file_name(&dir),
                is_folder: true,
                path: dir,
                ..Default::default()
            });
        }
    }

    /// Look up a single visible entry. The root is not an entry.
    pub fn find(&self, path: &str) -> Option<&FileNode> {
        self.by_path
            .get(&normalize_path(path))
            .filter(|n| !n.is_hidden())
    }

    pub fn is_dir(&self, path: &str) -> bool {
        let path = normalize_path(path);
        path == "/" || self.find(&path).is_some_and(|n| n.is_folder)
    }

    /// Visible children of a directory, folders first then newest first.
    ///
    /// Returns `None` when `path` is not a directory.
    pub fn list_dir(&self, path: &str) -> Option<Vec<FileNode>> {
        if !self.is_dir(path) {
            return None;
        }
        let mut entries: Vec<FileNode> = self
            .children
            .get(&normalize_path(path))
            .map(|nodes| nodes.iter().filter(|n| !n.is_hidden()).cloned().collect())
            .unwrap_or_default();
        entries.sort_by(listing_order);
        Some(entries)
    }

    /// The README of a directory, if present.
    pub fn readme(&self, dir: &str) -> Option<&FileNode> {
        if is_hidden_path(dir) {
            return None;
        }
        self.children
            .get(&normalize_path(dir))?
            .iter()
            .find(|n| !n.is_folder && n.file_name == README_NAME)
    }

    /// Files whose name contains `key` (case-insensitive), in listing order.
    pub fn search(&self, key: &str) -> Vec<FileNode> {
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<FileNode> = self
            .by_path
            .values()
            .filter(|n| !n.is_folder && !n.is_hidden())
            .filter(|n| n.file_name.to_lowercase().contains(&key))
            .cloned()
            .collect();
        hits.sort_by(listing_order);
        hits
    }

    /// Number of entries, synthesized folders included.
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}

fn listing_order(a: &FileNode, b: &FileNode) -> Ordering {
    b.is_folder
        .cmp(&a.is_folder)
        .then_with(|| b.last_op_time.cmp(&a.last_op_time))
        .then_with(|| a.file_name.cmp(&b.file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, time: &str) -> FileNode {
        FileNode {
            file_name: file_name(path),
            path: path.to_string(),
            last_op_time: time.to_string(),
            ..Default::default()
        }
    }

    fn folder(path: &str, time: &str) -> FileNode {
        FileNode {
            is_folder: true,
            ..file(path, time)
        }
    }

    fn sample() -> Listing {
        Listing::from_manifest(&Manifest {
            title: None,
            files: vec![
                file("/old.txt", "2021-01-01 00:00:00"),
                file("/new.txt", "2023-05-01 12:00:00"),
                folder("/docs", "2020-01-01 00:00:00"),
                file("/.secret", "2024-01-01 00:00:00"),
                file("/docs/README.md", "2022-01-01 00:00:00"),
                file("/docs/Report.PDF", "2022-02-01 00:00:00"),
                file("/media/photos/cat.png", "2022-03-01 00:00:00"),
            ],
        })
    }

    #[test]
    fn test_empty_listing() {
        let listing = Listing::empty();
        assert!(listing.is_empty());
        assert_eq!(listing.list_dir("/"), Some(vec![]));
        assert_eq!(listing.list_dir("/missing"), None);
    }

    #[test]
    fn test_list_dir_order_and_hidden() {
        let listing = sample();
        let names: Vec<String> = listing
            .list_dir("/")
            .unwrap()
            .into_iter()
            .map(|n| n.file_name)
            .collect();
        // "media" is synthesized with an empty time, so it sorts after "docs".
        assert_eq!(names, vec!["docs", "media", "new.txt", "old.txt"]);
    }

    #[test]
    fn test_synthesized_ancestors() {
        let listing = sample();
        assert!(listing.is_dir("/media"));
        assert!(listing.is_dir("/media/photos"));
        let photos = listing.list_dir("/media/photos").unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].file_name, "cat.png");
    }

    #[test]
    fn test_list_dir_on_file() {
        assert_eq!(sample().list_dir("/new.txt"), None);
    }

    #[test]
    fn test_readme() {
        let listing = sample();
        assert_eq!(
            listing.readme("/docs").map(|n| n.path.as_str()),
            Some("/docs/README.md")
        );
        assert!(listing.readme("/").is_none());
    }

    #[test]
    fn test_search() {
        let listing = sample();
        let hits: Vec<String> = listing
            .search("REPORT")
            .into_iter()
            .map(|n| n.path)
            .collect();
        assert_eq!(hits, vec!["/docs/Report.PDF"]);
        assert!(listing.search("secret").is_empty());
        assert!(listing.search("  ").is_empty());
    }

    #[test]
    fn test_hidden_folder_hides_contents() {
        let listing = Listing::from_manifest(&Manifest {
            title: None,
            files: vec![
                folder("/.private", "2022-01-01 00:00:00"),
                file("/.private/secret.pdf", "2022-01-02 00:00:00"),
                file("/.private/README.md", "2022-01-02 00:00:00"),
                file("/public.pdf", "2022-01-03 00:00:00"),
            ],
        });

        let root: Vec<String> = listing
            .list_dir("/")
            .unwrap()
            .into_iter()
            .map(|n| n.path)
            .collect();
        assert_eq!(root, vec!["/public.pdf"]);
        assert!(listing.search("secret").is_empty());
        assert_eq!(listing.search("pdf").len(), 1);
        assert!(!listing.is_dir("/.private"));
        assert_eq!(listing.list_dir("/.private"), None);
        assert!(listing.find("/.private/secret.pdf").is_none());
        assert!(listing.readme("/.private").is_none());
    }

    #[test]
    fn test_find_normalizes() {
        let listing = sample();
        assert!(listing.find("docs/Report.PDF/").is_some());
        assert!(listing.find("/").is_none());
    }

    #[test]
    fn test_explicit_folder_replaces_synthesized() {
        let listing = Listing::from_manifest(&Manifest {
            title: None,
            files: vec![
                file("/a/b.txt", "2022-01-01 00:00:00"),
                folder("/a", "2023-01-01 00:00:00"),
            ],
        });
        let root = listing.list_dir("/").unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(root[0].last_op_time, "2023-01-01 00:00:00");
    }
}
