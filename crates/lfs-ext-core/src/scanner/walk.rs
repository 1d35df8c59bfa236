/// Serial directory walker built on `jwalk`.
///
/// Yields every regular file under the root together with its size.
/// The `.git` directory directly beneath the root is pruned before it is
/// read, so its (often huge) object store is never visited.
///
/// Directory read failures are surfaced as [`ScanError::Walk`] items and
/// file metadata failures as [`ScanError::Stat`]; neither ends the walk.
use crate::analysis::extensions::VCS_DIR;
use crate::error::ScanError;
use std::path::{Path, PathBuf};

/// A regular file found by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute (or root-joined) path of the file.
    pub path: PathBuf,
    /// Size in bytes, following symlinks.
    pub size: u64,
}

/// Lazily walk `root`, yielding files in an implementation-defined order.
pub fn walk_files(root: &Path) -> impl Iterator<Item = Result<FileEntry, ScanError>> {
    // Serial: the whole run is one thread of control.
    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial)
        .process_read_dir(|_depth, _dir_path, _state, children| {
            children.retain(|child| match child {
                Ok(entry) => !(entry.depth == 1 && entry.file_name() == VCS_DIR),
                Err(_) => true,
            });
        });

    walker.into_iter().filter_map(|entry_result| {
        let mut entry = match entry_result {
            Ok(e) => e,
            Err(err) => return Some(Err(ScanError::from(err))),
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            // jwalk parks a failed read of the directory's children on the
            // directory entry itself rather than yielding an `Err` item.
            return entry.read_children_error.take().map(|err| {
                Err(ScanError::Walk {
                    path: entry.path(),
                    message: err.to_string(),
                })
            });
        }

        let path = entry.path();

        // Stat through symlinks so a link is sized by its target; a
        // dangling link fails here and is reported rather than counted.
        let meta = match std::fs::metadata(&path) {
            Ok(meta) => meta,
            Err(source) => return Some(Err(ScanError::Stat { path, source })),
        };

        // Links to directories are neither descended nor counted.
        if !meta.is_file() {
            return None;
        }

        Some(Ok(FileEntry {
            path,
            size: meta.len(),
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn collect_ok(root: &Path) -> Vec<FileEntry> {
        let mut files: Vec<FileEntry> = walk_files(root).filter_map(Result::ok).collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }

    #[test]
    fn walk_yields_nested_files_with_sizes() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/b")).unwrap();
        fs::write(tmp.path().join("top.txt"), b"12345").unwrap();
        fs::write(tmp.path().join("a/b/deep.bin"), vec![0u8; 2048]).unwrap();

        let files = collect_ok(tmp.path());

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, tmp.path().join("a/b/deep.bin"));
        assert_eq!(files[0].size, 2048);
        assert_eq!(files[1].path, tmp.path().join("top.txt"));
        assert_eq!(files[1].size, 5);
    }

    #[test]
    fn walk_prunes_root_git_directory_only() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(".git/objects")).unwrap();
        fs::create_dir_all(tmp.path().join("vendor/.git")).unwrap();
        fs::write(tmp.path().join(".git/objects/blob"), b"x").unwrap();
        fs::write(tmp.path().join("vendor/.git/HEAD"), b"ref").unwrap();
        fs::write(tmp.path().join(".gitignore"), b"target").unwrap();

        let files = collect_ok(tmp.path());
        let names: Vec<PathBuf> = files
            .iter()
            .map(|f| f.path.strip_prefix(tmp.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![PathBuf::from(".gitignore"), PathBuf::from("vendor/.git/HEAD")]
        );
    }

    #[test]
    fn walk_of_empty_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(walk_files(tmp.path()).count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_reported_as_stat_error() {
        let tmp = TempDir::new().unwrap();
        std::os::unix::fs::symlink(tmp.path().join("missing"), tmp.path().join("dangling.lnk"))
            .unwrap();

        let results: Vec<_> = walk_files(tmp.path()).collect();

        assert_eq!(results.len(), 1);
        match &results[0] {
            Err(ScanError::Stat { path, .. }) => {
                assert_eq!(path, &tmp.path().join("dangling.lnk"))
            }
            other => panic!("expected a stat error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_is_reported_as_walk_error() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.bin"), b"abc").unwrap();
        fs::write(tmp.path().join("ok.bin"), b"abc").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can read the directory anyway; nothing to check.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let results: Vec<_> = walk_files(tmp.path()).collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let walk_errors: Vec<&Path> = results
            .iter()
            .filter_map(|r| match r {
                Err(ScanError::Walk { path, .. }) => Some(path.as_path()),
                _ => None,
            })
            .collect();
        assert_eq!(walk_errors, vec![locked.as_path()]);

        let files: Vec<&FileEntry> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, tmp.path().join("ok.bin"));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_counted() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("real")).unwrap();
        fs::write(tmp.path().join("real/data.bin"), b"abc").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("alias")).unwrap();

        let files = collect_ok(tmp.path());

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, tmp.path().join("real/data.bin"));
    }
}
