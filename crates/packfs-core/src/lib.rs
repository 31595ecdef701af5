//! packfs-core: Embedded virtual file system with HTTP response synthesis
//!
//! Serves a directory tree packed into the binary at build time. Lookup
//! state lives in `packfs-table`; this crate adds MIME classification,
//! response construction, and HTTP/1.1 wire framing.
//!
//! ## Features
//! - `embed` - Build a [`Vfs`] from an `include_dir!` tree
//!
//! ## Example
//! ```
//! use packfs_core::Vfs;
//!
//! let vfs = Vfs::from_entries([("/index.html", &b"<h1>Hi</h1>"[..])]);
//!
//! // Exact hit: one contiguous buffer, header block then body
//! let payload = vfs.serve("/index.html").unwrap().unwrap();
//! assert!(payload.starts_with(b"HTTP/1.1 200 OK\r\n"));
//!
//! // Directory request: 302 to the registered index asset
//! let payload = vfs.serve("/").unwrap().unwrap();
//! assert!(payload.starts_with(b"HTTP/1.1 302 Found\r\n"));
//!
//! // Unmatched path: a normal outcome, not an error
//! assert!(vfs.serve("/missing.css").unwrap().is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod mime;
pub mod response;
pub mod vfs;

#[cfg(feature = "embed")]
pub mod embed;

// Re-exports
pub use error::{Error, Result};
pub use response::{Response, ResponseBuilder, StatusCode};
pub use vfs::Vfs;

// Table layer re-exports
pub use packfs_table::{Asset, AssetTable, DuplicatePath, IndexTable, TableBuilder};
