//! Compile-time asset embedding via `include_dir`
//!
//! Pairs a `static DIR: Dir = include_dir!(...)` with [`Vfs::from_dir`] so
//! a binary carries its whole asset tree and builds the lookup tables once
//! at startup, never touching the filesystem afterwards.

use include_dir::Dir;
use packfs_table::TableBuilder;

use crate::Vfs;

// Re-exported so embedding callers need no direct include_dir dependency.
pub use include_dir::include_dir;

impl Vfs {
    /// Build a virtual file system from an embedded directory tree.
    ///
    /// Paths inside the `Dir` are relative; they come out canonical
    /// (leading `/`, forward slashes). The `Dir`'s own deterministic entry
    /// order is the insertion order, which fixes every first-wins
    /// tie-break at compile time.
    ///
    /// # Example
    /// ```ignore
    /// use packfs_core::embed::include_dir;
    /// use packfs_core::Vfs;
    ///
    /// static ASSETS: include_dir::Dir = include_dir!("$CARGO_MANIFEST_DIR/dist");
    ///
    /// let vfs = Vfs::from_dir(&ASSETS);
    /// ```
    pub fn from_dir(dir: &Dir<'_>) -> Self {
        let mut builder = TableBuilder::new();
        collect(dir, &mut builder);
        Self::from_builder(builder)
    }
}

fn collect(dir: &Dir<'_>, builder: &mut TableBuilder) {
    for file in dir.files() {
        builder.insert(&file.path().to_string_lossy(), file.contents().to_vec());
    }
    for sub in dir.dirs() {
        collect(sub, builder);
    }
}
