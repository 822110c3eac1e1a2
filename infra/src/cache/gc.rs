//! Expired cache file sweeping

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

/// Delete regular files under `root` last modified more than `lifetime` ago
///
/// Walks the tree without following symbolic links. Failures on individual
/// entries are skipped; a missing root sweeps nothing. Returns how many files
/// were removed.
pub fn sweep_expired_files(root: &Path, lifetime: Duration) -> usize {
    let Some(cutoff) = SystemTime::now().checked_sub(lifetime) else {
        return 0;
    };
    sweep_dir(root, cutoff)
}

fn sweep_dir(dir: &Path, cutoff: SystemTime) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(metadata) = fs::symlink_metadata(&path) else {
            continue;
        };

        let file_type = metadata.file_type();
        if file_type.is_dir() {
            removed += sweep_dir(&path, cutoff);
        } else if file_type.is_file() {
            let stale = metadata
                .modified()
                .map(|modified| modified < cutoff)
                .unwrap_or(false);
            if stale && fs::remove_file(&path).is_ok() {
                removed += 1;
            }
        }
    }
    removed
}
