//! Project writer.
//!
//! ## `write_file` protocol
//!
//! 1. Normalise line endings to LF.
//! 2. If the destination already holds exactly this content, leave it alone.
//! 3. In dry-run mode, stop and report what would happen.
//! 4. Ensure the parent directory exists.
//! 5. Write to `<path>.float.tmp`, then rename over the final path.
//!
//! Each file is replaced atomically; the project as a whole is not. A failure
//! midway leaves the files written so far in place.

use std::path::{Path, PathBuf};

use float_renderer::RenderedFile;

use crate::error::{io_err, ScaffoldError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write. Paths are absolute (root-joined).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created.
    Created { path: PathBuf },
    /// File existed with different content and was replaced.
    Overwritten { path: PathBuf },
    /// File already held the rendered content; untouched.
    Identical { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Created { path }
            | WriteResult::Overwritten { path }
            | WriteResult::Identical { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// write_file
// ---------------------------------------------------------------------------

pub(crate) fn write_file(
    path: &Path,
    content: &str,
    dry_run: bool,
) -> Result<WriteResult, ScaffoldError> {
    let tmp = PathBuf::from(format!("{}.float.tmp", path.display()));
    write_file_with_tmp(path, content, dry_run, &tmp)
}

fn write_file_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, ScaffoldError> {
    let normalized = content.replace("\r\n", "\n");
    let content = normalized.as_str();

    let existed = path.exists();
    if existed {
        if let Ok(current) = std::fs::read_to_string(path) {
            if current == content {
                tracing::debug!("identical: {}", path.display());
                return Ok(WriteResult::Identical {
                    path: path.to_path_buf(),
                });
            }
        }
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent() {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    let path = path.to_path_buf();
    Ok(if existed {
        WriteResult::Overwritten { path }
    } else {
        WriteResult::Created { path }
    })
}

// ---------------------------------------------------------------------------
// write_plan
// ---------------------------------------------------------------------------

/// Create `directories` under `root`, then write every file in order.
///
/// Stops at the first failure. In dry-run mode nothing is created.
pub fn write_plan(
    root: &Path,
    directories: &[PathBuf],
    files: &[RenderedFile],
    dry_run: bool,
) -> Result<Vec<WriteResult>, ScaffoldError> {
    if !dry_run {
        std::fs::create_dir_all(root).map_err(|e| io_err(root, e))?;
        for dir in directories {
            let dir = root.join(dir);
            std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;
            tracing::debug!("mkdir: {}", dir.display());
        }
    }

    let mut writes = Vec::with_capacity(files.len());
    for file in files {
        let path = root.join(&file.path);
        writes.push(write_file(&path, &file.content, dry_run)?);
    }
    Ok(writes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn rendered(path: &str, content: &str) -> RenderedFile {
        RenderedFile {
            path: PathBuf::from(path),
            content: content.to_string(),
        }
    }

    #[test]
    fn first_write_returns_created() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gulpfile.js");
        let result = write_file(&path, "hello", false).unwrap();
        assert!(matches!(result, WriteResult::Created { .. }));
        assert!(path.exists());
    }

    #[test]
    fn same_content_returns_identical() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");
        write_file(&path, "same content", false).unwrap();
        let result = write_file(&path, "same content", false).unwrap();
        assert!(matches!(result, WriteResult::Identical { .. }));
    }

    #[test]
    fn changed_content_returns_overwritten() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.txt");
        write_file(&path, "v1", false).unwrap();
        let result = write_file(&path, "v2", false).unwrap();
        assert!(matches!(result, WriteResult::Overwritten { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
    }

    #[test]
    fn dry_run_does_not_write_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.txt");
        let result = write_file(&path, "content", true).unwrap();
        assert!(matches!(result, WriteResult::WouldWrite { .. }));
        assert!(!path.exists(), "dry-run must not create files");
    }

    #[test]
    fn tmp_file_removed_after_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clean.txt");
        write_file(&path, "data", false).unwrap();
        let tmp_path = PathBuf::from(format!("{}.float.tmp", path.display()));
        assert!(!tmp_path.exists(), ".float.tmp must be cleaned up");
    }

    #[test]
    fn crlf_is_normalised() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("normalize.txt");
        write_file(&path, "line1\r\nline2\r\n", false).unwrap();
        let second = write_file(&path, "line1\nline2\n", false).unwrap();
        assert!(matches!(second, WriteResult::Identical { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "line1\nline2\n");
    }

    #[test]
    fn write_plan_creates_directories_even_when_empty() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("site");
        let dirs = vec![PathBuf::from("app"), PathBuf::from("app/images")];
        let files = vec![rendered("app/scripts/app.js", "x")];
        let writes = write_plan(&root, &dirs, &files, false).unwrap();
        assert_eq!(writes.len(), 1);
        assert!(root.join("app/images").is_dir());
        assert!(root.join("app/scripts/app.js").is_file());
        assert_eq!(writes[0].path(), root.join("app/scripts/app.js"));
    }

    #[test]
    fn write_plan_dry_run_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("site");
        let dirs = vec![PathBuf::from("app")];
        let files = vec![rendered(".gitignore", "node_modules\n")];
        let writes = write_plan(&root, &dirs, &files, true).unwrap();
        assert!(matches!(writes[0], WriteResult::WouldWrite { .. }));
        assert!(!root.exists());
    }

    #[test]
    fn rename_failure_leaves_original_and_cleans_tmp() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("app");
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("keep.txt"), "original").unwrap();

        let tmp_dir = TempDir::new().unwrap();
        let tmp_path = tmp_dir.path().join("app.float.tmp");

        let err = write_file_with_tmp(&path, "new content", false, &tmp_path).unwrap_err();

        assert!(matches!(err, ScaffoldError::Io { .. }), "got: {err}");
        assert!(path.is_dir());
        assert_eq!(fs::read_to_string(path.join("keep.txt")).unwrap(), "original");
        assert!(!tmp_path.exists(), ".float.tmp should be cleaned up");
    }
}
