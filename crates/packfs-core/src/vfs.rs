//! Embedded virtual file system
//!
//! [`Vfs`] owns the asset and index tables built once at startup and turns
//! request paths into HTTP-shaped responses:
//! - exact path hit: `200 OK`, header block + asset bytes in one buffer
//! - directory with a registered `index.*` asset: `302 Found` redirect
//! - anything else: no response (the caller owns the 404 policy)

use std::borrow::Cow;

use bytes::Bytes;
use packfs_table::{Asset, AssetTable, IndexTable, TableBuilder};
use tracing::{debug, trace, warn};

use crate::{mime, response, Response, Result};

/// Immutable lookup state plus response synthesis.
///
/// Built once before any concurrent access; every lookup after that is
/// read-only, so a `Vfs` can be shared freely across threads.
#[derive(Debug)]
pub struct Vfs {
    assets: AssetTable,
    index: IndexTable,
}

impl Vfs {
    /// Build from an ordered sequence of (path, content) pairs.
    ///
    /// Paths are canonicalized on insert; duplicate paths keep the first
    /// occurrence and the discarded ones are logged.
    pub fn from_entries<I, P, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, D)>,
        P: AsRef<str>,
        D: Into<Vec<u8>>,
    {
        let mut builder = TableBuilder::new();
        for (path, data) in entries {
            builder.insert(path.as_ref(), data.into());
        }
        Self::from_builder(builder)
    }

    /// Finalize a prepared [`TableBuilder`] into a servable file system.
    pub fn from_builder(builder: TableBuilder) -> Self {
        for dup in builder.duplicates() {
            warn!(
                path = %dup.path,
                discarded_len = dup.discarded_len,
                "duplicate embedded path discarded, keeping first occurrence"
            );
        }

        let (assets, index) = builder.build();
        debug!(
            assets = assets.len(),
            index_dirs = index.len(),
            "virtual file system ready"
        );
        Self { assets, index }
    }

    /// Direct table access for callers that want raw bytes without the
    /// HTTP framing.
    pub fn asset(&self, path: &str) -> Option<&Asset> {
        self.assets.get(path)
    }

    /// Number of embedded assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Resolve a request path into a response, or `None` when neither an
    /// asset nor an index redirect matches.
    ///
    /// The returned [`Response`] owns a fresh copy of the body bytes; use
    /// [`Vfs::serve`] to go straight to a wire buffer without the
    /// intermediate copy.
    pub fn respond(&self, request_path: &str) -> Option<Response> {
        match self.resolve(request_path) {
            Resolved::Asset(asset) => {
                let body = Bytes::copy_from_slice(asset.data());
                Some(Response::content(mime::classify(request_path), body))
            }
            Resolved::Index(location) => Some(Response::redirect(location)),
            Resolved::Miss => None,
        }
    }

    /// Resolve a request path straight to wire bytes.
    ///
    /// - `Ok(Some(buf))`: full payload, header block immediately followed
    ///   by body in one contiguous buffer; its length is `buf.len()`
    /// - `Ok(None)`: nothing matched, nothing allocated
    /// - `Err(_)`: the output buffer could not be allocated
    ///
    /// Asset bytes are copied exactly once, into the reserved output
    /// buffer, so allocation failure always surfaces as an error.
    pub fn serve(&self, request_path: &str) -> Result<Option<Bytes>> {
        match self.resolve(request_path) {
            Resolved::Asset(asset) => {
                let head = Response::content_head(mime::classify(request_path), asset.len());
                response::encode(&head, asset.data()).map(Some)
            }
            Resolved::Index(location) => Response::redirect(location).to_http1_bytes().map(Some),
            Resolved::Miss => Ok(None),
        }
    }

    /// Table lookups shared by [`Vfs::respond`] and [`Vfs::serve`].
    ///
    /// The request path is matched verbatim against the asset table. On a
    /// miss, the ONLY normalization applied before the index probe is an
    /// appended trailing slash: no `..` collapsing, no percent-decoding.
    fn resolve(&self, request_path: &str) -> Resolved<'_> {
        if let Some(asset) = self.assets.get(request_path) {
            trace!(path = request_path, len = asset.len(), "asset hit");
            return Resolved::Asset(asset);
        }

        let redirect_path = with_trailing_slash(request_path);
        if let Some(location) = self.index.get(&redirect_path) {
            trace!(path = request_path, location, "index redirect");
            return Resolved::Index(location);
        }

        trace!(path = request_path, "no asset, no index");
        Resolved::Miss
    }
}

enum Resolved<'a> {
    Asset(&'a Asset),
    Index(&'a str),
    Miss,
}

fn with_trailing_slash(path: &str) -> Cow<'_, str> {
    if path.ends_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("{path}/"))
    }
}
