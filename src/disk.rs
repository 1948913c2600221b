use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{DiskError, DiskResult};
use crate::util::format_size;

/// Cumulative byte size of all regular files under `path`.
///
/// Traversal is best-effort: unreadable directories and entries that
/// vanish mid-walk are skipped with a warning and the partial sum is
/// still returned. An empty or nonexistent root yields 0. Symbolic
/// links are never followed, so link cycles cannot loop the walk and
/// a link contributes nothing to the total.
pub fn dir_size<P: AsRef<Path>>(path: P) -> u64 {
    let path = path.as_ref();
    let mut total: u64 = 0;

    for entry in WalkDir::new(path).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry under {}: {}", path.display(), err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(meta) => total = total.saturating_add(meta.len()),
            Err(err) => {
                warn!("skipping {}: {}", entry.path().display(), err);
            }
        }
    }

    debug!("dir_size({}) = {}", path.display(), format_size(total));
    total
}

/// Exact byte size of the filesystem object at `path`.
///
/// Reads the path's own metadata without dereferencing, so a symlink
/// reports the link itself rather than its target. Unlike [`dir_size`],
/// failures are surfaced to the caller.
pub fn file_size<P: AsRef<Path>>(path: P) -> DiskResult<u64> {
    let path = path.as_ref();
    let meta = fs::symlink_metadata(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => DiskError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => DiskError::AccessDenied(path.to_path_buf()),
        _ => DiskError::Io(err),
    })?;
    Ok(meta.len())
}
