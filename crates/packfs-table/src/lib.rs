//! packfs-table: Zero-dependency embedded asset tables
//!
//! Lookup layer shared by everything that serves packed assets: an
//! [`AssetTable`] mapping canonical paths to immutable byte content, and an
//! [`IndexTable`] mapping directories to their designated `index.*` asset.
//! Both are built exactly once by [`TableBuilder`] and never mutated again,
//! so they are safe to share across threads without locking.
//!
//! ## Canonical paths
//! - Always absolute: leading `/`
//! - Forward slashes only
//! - Matched by exact string equality (no `..` collapsing, no decoding)
//!
//! ## Construction policy
//! - Duplicate paths: first inserted wins, later inserts are discarded and
//!   reported via [`TableBuilder::duplicates`]
//! - Index files: an asset whose filename starts with `index.` claims its
//!   containing directory unless an earlier asset already claimed it
//! - Zero external dependencies
//!
//! ## Example
//! ```
//! use packfs_table::TableBuilder;
//!
//! let mut builder = TableBuilder::new();
//! builder.insert("/index.html", b"<h1>Hi</h1>".to_vec());
//! builder.insert("/app.js", b"console.log(1)".to_vec());
//!
//! let (assets, index) = builder.build();
//! assert_eq!(assets.get("/app.js").unwrap().data(), b"console.log(1)");
//! assert_eq!(index.get("/"), Some("/index.html"));
//! ```

use std::collections::HashMap;

/// One embedded file: a canonical path and its immutable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    path: Box<str>,
    data: Box<[u8]>,
}

impl Asset {
    /// Canonical path of this asset (leading `/`, forward slashes).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Borrowed view of the asset's bytes. Never copies.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Exact byte length of the content.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Immutable mapping from canonical path to [`Asset`].
///
/// Lookup is a hash map keyed by the full path for O(1) amortized access;
/// insertion order is preserved for deterministic iteration.
#[derive(Debug, Default)]
pub struct AssetTable {
    assets: Vec<Asset>,
    by_path: HashMap<Box<str>, usize>,
}

impl AssetTable {
    /// Look up an asset by exact canonical path.
    ///
    /// Absence is a normal outcome, not an error: the caller decides what
    /// an unmatched path means.
    pub fn get(&self, path: &str) -> Option<&Asset> {
        self.by_path.get(path).map(|&i| &self.assets[i])
    }

    /// Whether the table holds an asset at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Number of assets in the table.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterate assets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }
}

/// Immutable mapping from a directory path (trailing `/`) to the canonical
/// path of that directory's index asset.
#[derive(Debug, Default)]
pub struct IndexTable {
    dirs: HashMap<Box<str>, Box<str>>,
}

impl IndexTable {
    /// Look up the index asset for a directory.
    ///
    /// `dir_path` must end in `/`; anything else can never match because
    /// only directory keys are registered.
    pub fn get(&self, dir_path: &str) -> Option<&str> {
        self.dirs.get(dir_path).map(|p| p.as_ref())
    }

    /// Number of directories with a registered index asset.
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

/// A discarded duplicate insertion, reported for the embedding layer to
/// log or reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePath {
    /// The path that was inserted more than once.
    pub path: String,
    /// Byte length of the discarded content.
    pub discarded_len: usize,
}

/// Builds an [`AssetTable`] and its [`IndexTable`] in one ordered pass.
///
/// Insertion order is the tie-break for every policy decision: the first
/// asset at a path wins, and the first `index.*` file in a directory wins.
#[derive(Debug, Default)]
pub struct TableBuilder {
    assets: Vec<Asset>,
    by_path: HashMap<Box<str>, usize>,
    dirs: HashMap<Box<str>, Box<str>>,
    duplicates: Vec<DuplicatePath>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one (path, content) pair.
    ///
    /// The path is canonicalized the same way the packing step would:
    /// backslashes become forward slashes and a leading `/` is ensured.
    /// Returns `true` if the asset was kept, `false` if it lost to an
    /// earlier asset at the same path.
    pub fn insert(&mut self, path: &str, data: Vec<u8>) -> bool {
        let path = canonicalize(path);

        if self.by_path.contains_key(path.as_str()) {
            self.duplicates.push(DuplicatePath {
                path,
                discarded_len: data.len(),
            });
            return false;
        }

        if let Some(dir) = index_dir(&path) {
            self.dirs
                .entry(dir.into())
                .or_insert_with(|| path.clone().into_boxed_str());
        }

        let key: Box<str> = path.into_boxed_str();
        self.by_path.insert(key.clone(), self.assets.len());
        self.assets.push(Asset {
            path: key,
            data: data.into_boxed_slice(),
        });
        true
    }

    /// Duplicates discarded so far, in insertion order.
    pub fn duplicates(&self) -> &[DuplicatePath] {
        &self.duplicates
    }

    /// Finalize both tables. Duplicate reports are dropped here; read them
    /// with [`TableBuilder::duplicates`] before building if they matter.
    pub fn build(self) -> (AssetTable, IndexTable) {
        (
            AssetTable {
                assets: self.assets,
                by_path: self.by_path,
            },
            IndexTable { dirs: self.dirs },
        )
    }
}

/// Normalize a raw embedded path into canonical form.
fn canonicalize(path: &str) -> String {
    let slashed = path.replace('\\', "/");
    if slashed.starts_with('/') {
        slashed
    } else {
        format!("/{slashed}")
    }
}

/// If the filename component of `path` starts with `index.`, return the
/// containing directory key (trailing `/`). The root directory is `/`.
fn index_dir(path: &str) -> Option<&str> {
    let split = path.rfind('/')?;
    let filename = &path[split + 1..];
    if filename.starts_with("index.") {
        Some(&path[..split + 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(entries: &[(&str, &[u8])]) -> (AssetTable, IndexTable) {
        let mut builder = TableBuilder::new();
        for (path, data) in entries {
            builder.insert(path, data.to_vec());
        }
        builder.build()
    }

    #[test]
    fn test_exact_lookup() {
        let (assets, _) = built(&[
            ("/index.html", b"<h1>Hi</h1>"),
            ("/css/style.css", b"body{}"),
        ]);

        let hit = assets.get("/css/style.css").unwrap();
        assert_eq!(hit.path(), "/css/style.css");
        assert_eq!(hit.data(), b"body{}");
        assert_eq!(hit.len(), 6);

        // Exact string equality only: no fuzzy or prefix matching
        assert!(assets.get("/css/style.css/").is_none());
        assert!(assets.get("css/style.css").is_none());
        assert!(assets.get("/missing.css").is_none());
    }

    #[test]
    fn test_canonicalization_on_insert() {
        let (assets, _) = built(&[("sub\\page.html", b"x")]);
        assert!(assets.contains("/sub/page.html"));
    }

    #[test]
    fn test_first_wins_on_duplicate_path() {
        let mut builder = TableBuilder::new();
        assert!(builder.insert("/a.txt", b"first".to_vec()));
        assert!(!builder.insert("/a.txt", b"second".to_vec()));

        assert_eq!(builder.duplicates().len(), 1);
        assert_eq!(builder.duplicates()[0].path, "/a.txt");
        assert_eq!(builder.duplicates()[0].discarded_len, 6);

        let (assets, _) = builder.build();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets.get("/a.txt").unwrap().data(), b"first");
    }

    #[test]
    fn test_index_registration_root_and_nested() {
        let (_, index) = built(&[
            ("/index.html", b""),
            ("/docs/index.html", b""),
            ("/docs/guide.html", b""),
        ]);

        assert_eq!(index.get("/"), Some("/index.html"));
        assert_eq!(index.get("/docs/"), Some("/docs/index.html"));
        assert_eq!(index.get("/missing/"), None);
        // Keys carry a trailing slash; a bare directory path never matches
        assert_eq!(index.get("/docs"), None);
    }

    #[test]
    fn test_index_prefix_must_be_literal() {
        let (_, index) = built(&[
            ("/a/indexing.html", b""),
            ("/b/index", b""),
            ("/c/index.js", b""),
        ]);

        assert_eq!(index.get("/a/"), None);
        assert_eq!(index.get("/b/"), None);
        assert_eq!(index.get("/c/"), Some("/c/index.js"));
    }

    #[test]
    fn test_first_index_file_wins_per_directory() {
        let (_, index) = built(&[
            ("/app/index.js", b""),
            ("/app/index.html", b""),
        ]);

        assert_eq!(index.get("/app/"), Some("/app/index.js"));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let (assets, _) = built(&[("/b", b"1"), ("/a", b"2"), ("/c", b"3")]);
        let order: Vec<&str> = assets.iter().map(|a| a.path()).collect();
        assert_eq!(order, vec!["/b", "/a", "/c"]);
    }
}
