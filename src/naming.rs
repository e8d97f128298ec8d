//! Where a thumbnail goes, given its source and the destination option.
//!
//! Two conventions, picked by the destination:
//! - `.` (the default) keeps the thumbnail next to its source with a `t_`
//!   prefix: `photos/cat.jpg` → `photos/t_cat.jpg`.
//! - any other directory receives the thumbnail under the source's own file
//!   name: `photos/cat.jpg` with `thumbs/` → `thumbs/cat.jpg`.
//!
//! File names are handled as OS strings, so names that are not valid UTF-8
//! keep their exact bytes.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Filename prefix used when thumbnails sit beside their sources.
pub const THUMBNAIL_PREFIX: &str = "t_";

/// True when `dest` means "beside the source".
pub fn is_beside_source(dest: &Path) -> bool {
    dest.components().all(|c| c == Component::CurDir)
}

/// Derive the thumbnail path for `source`.
///
/// Returns `None` when `source` has no file name (e.g. `..` or `/`).
pub fn thumbnail_destination(source: &Path, dest: &Path) -> Option<PathBuf> {
    let file_name = source.file_name()?;
    if is_beside_source(dest) {
        let mut prefixed = OsString::from(THUMBNAIL_PREFIX);
        prefixed.push(file_name);
        Some(source.with_file_name(prefixed))
    } else {
        Some(dest.join(file_name))
    }
}
