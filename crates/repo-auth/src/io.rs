//! Atomic, owner-only I/O for the credential file

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Mode of the credential file on Unix: it holds API tokens.
#[cfg(unix)]
const PRIVATE_MODE: u32 = 0o600;

/// Replace the file at `path` with `content`.
///
/// The content goes to a sibling temp file that only the owner can read,
/// is synced while an advisory exclusive lock is held, and is then renamed
/// over `path`. Readers see either the old store or the new one.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    ensure_parent(path)?;

    let temp_path = sibling_temp_path(path);
    let mut file = create_private(&temp_path)?;

    let locked = |_| Error::LockFailed {
        path: path.to_path_buf(),
    };
    file.lock_exclusive().map_err(locked)?;
    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::io(&temp_path, e))?;
    file.unlock().map_err(locked)?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))
        }
        _ => Ok(()),
    }
}

fn sibling_temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.{}.tmp", std::process::id()))
}

fn create_private(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(PRIVATE_MODE);
    }
    let file = options.open(path).map_err(|e| Error::io(path, e))?;

    // A stale temp file keeps its old mode, so set it explicitly
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(PRIVATE_MODE))
            .map_err(|e| Error::io(path, e))?;
    }
    Ok(file)
}

/// Read a text file, treating a missing file as `None`.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}
