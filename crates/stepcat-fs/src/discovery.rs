//! Recursive discovery of definition files by suffix
//!
//! Mirrors a recursive `<root>/**/*.<suffix>` shell glob: the root itself and
//! every subdirectory are searched, hidden entries are skipped, and an
//! unreadable or missing root simply yields no matches.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::{NormalizedPath, absolutize};

/// Find every regular file under `root` whose extension equals `suffix`.
///
/// `suffix` may be given with or without its leading dot. Results are
/// returned in depth-first, file-name order, joined onto `root` as given.
pub fn find_by_suffix(root: impl AsRef<Path>, suffix: &str) -> Vec<PathBuf> {
    let root = root.as_ref();
    let wanted = suffix.trim_start_matches('.');

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    let mut found = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(root = %root.display(), error = %err, "Skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == wanted)
        {
            found.push(entry.into_path());
        }
    }

    tracing::debug!(root = %root.display(), suffix = wanted, count = found.len(), "Discovery finished");
    found
}

/// The absolute glob pattern equivalent to a `find_by_suffix` search.
///
/// Used in diagnostics so the user can see exactly where the search ran.
pub fn search_pattern(root: impl AsRef<Path>, suffix: &str) -> String {
    let root = root.as_ref();
    let base = absolutize(root).unwrap_or_else(|_| root.to_path_buf());
    NormalizedPath::new(base)
        .join(&format!("**/*.{}", suffix.trim_start_matches('.')))
        .to_string()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
