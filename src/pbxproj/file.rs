//! Whole-file read and atomic overwrite

use super::error::{PatchError, PatchResult};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub(crate) fn read_project(path: &Path) -> PatchResult<String> {
    fs::read_to_string(path).map_err(|e| PatchError::io(path, e))
}

/// Replace the file contents through a sibling temp file and a rename, so
/// readers see either the old text or the new text.
///
/// Symlinks are followed: the file they point at is replaced, the link stays.
/// A target the caller cannot write to is rejected before anything changes.
pub(crate) fn write_project(path: &Path, text: &str) -> PatchResult<()> {
    write_atomic(path, text).map_err(|e| PatchError::io(path, e))
}

fn write_atomic(path: &Path, text: &str) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    // Opening for write without truncating only probes access.
    OpenOptions::new().write(true).open(&target)?;

    let parent = target.parent().unwrap_or_else(|| Path::new("/"));
    let file_name = target
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("project.pbxproj");
    let permissions = fs::metadata(&target)?.permissions();
    let pid = std::process::id();

    for attempt in 0..16u8 {
        let tmp = parent.join(format!(".{}.tmp-{}-{}", file_name, pid, attempt));
        let file = match OpenOptions::new().write(true).create_new(true).open(&tmp) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        };
        if let Err(e) = fill_and_swap(file, &tmp, &target, text, permissions) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        return sync_directory(parent);
    }
    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        "failed to allocate temporary file name",
    ))
}

fn fill_and_swap(
    file: File,
    tmp: &Path,
    target: &Path,
    text: &str,
    permissions: fs::Permissions,
) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    fs::set_permissions(tmp, permissions)?;
    fs::rename(tmp, target)
}

#[cfg(unix)]
fn sync_directory(path: &Path) -> io::Result<()> {
    File::open(path)?.sync_all()
}

#[cfg(not(unix))]
fn sync_directory(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_replaces_contents_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.pbxproj");
        fs::write(&path, "old").unwrap();

        write_project(&path, "new contents").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new contents");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn read_of_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.pbxproj");

        let err = read_project(&path).unwrap_err();
        match err {
            PatchError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_through_symlink_patches_the_link_target() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("project.pbxproj");
        let link = dir.path().join("link.pbxproj");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_project(&link, "new contents").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new contents");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn read_only_target_is_rejected_and_left_alone() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.pbxproj");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

        // Privileged users (root) can write regardless of mode bits.
        if OpenOptions::new().write(true).open(&path).is_ok() {
            return;
        }

        let err = write_project(&path, "new contents").unwrap_err();

        match err {
            PatchError::Io { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied)
            }
            other => panic!("expected Io error, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn write_to_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.pbxproj");

        assert!(matches!(
            write_project(&path, "text"),
            Err(PatchError::Io { .. })
        ));
        assert!(!path.exists());
    }
}
