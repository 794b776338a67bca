//! Small async filesystem helpers shared by the loader, resolver and store.

use scorpion_error::{ScorpionResult, StorageError, StorageErrorKind};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Read a text file that may legitimately be absent.
///
/// A missing file is `None`. Any other fault is logged and also yields `None`
/// so the caller can fall back to its default.
pub(crate) async fn read_optional(path: &Path) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Some(text),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            let error = StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )));
            tracing::warn!(%error, "Unreadable file, using default");
            None
        }
    }
}

/// Read a text file before rewriting it.
///
/// Unlike [`read_optional`], faults other than absence are errors: a file that
/// exists but cannot be read must not be clobbered.
pub(crate) async fn read_for_update(path: &Path) -> ScorpionResult<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
        .into()),
    }
}

pub(crate) async fn is_dir(path: &Path) -> ScorpionResult<bool> {
    Ok(metadata(path).await?.is_some_and(|m| m.is_dir()))
}

pub(crate) async fn is_file(path: &Path) -> ScorpionResult<bool> {
    Ok(metadata(path).await?.is_some_and(|m| m.is_file()))
}

/// Metadata following symlinks; `None` when nothing exists at `path`.
pub(crate) async fn metadata(path: &Path) -> ScorpionResult<Option<std::fs::Metadata>> {
    match tokio::fs::metadata(path).await {
        Ok(m) => Ok(Some(m)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
        .into()),
    }
}

/// Names of the entries in `dir` accepted by `keep`, sorted.
///
/// A missing directory has no entries.
pub(crate) async fn list_names<F>(dir: &Path, keep: F) -> ScorpionResult<Vec<String>>
where
    F: Fn(&std::fs::Metadata) -> bool,
{
    let dir_error = |e: std::io::Error| {
        StorageError::new(StorageErrorKind::DirectoryRead(format!(
            "{}: {}",
            dir.display(),
            e
        )))
    };

    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(dir_error(e).into()),
    };

    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(dir_error)? {
        let Ok(name) = entry.file_name().into_string() else {
            tracing::debug!(path = %entry.path().display(), "Skipping non UTF-8 entry");
            continue;
        };
        if let Some(meta) = metadata(&entry.path()).await? {
            if keep(&meta) {
                names.push(name);
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Replace `path` with `content` via a temporary file and rename.
///
/// Each call writes its own uniquely named temporary file in the target's
/// directory, so overlapping writers never share bytes and the last rename wins.
pub(crate) async fn write_atomic(path: &Path, content: &str) -> ScorpionResult<()> {
    let target = path.to_path_buf();
    let content = content.to_owned();

    tokio::task::spawn_blocking(move || persist(&target, content.as_bytes()))
        .await
        .map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: write task failed: {}",
                path.display(),
                e
            )))
        })?
}

fn persist(path: &Path, content: &[u8]) -> ScorpionResult<()> {
    let write_error = |target: &Path, e: std::io::Error| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            target.display(),
            e
        )))
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let prefix = format!(
        ".{}.",
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    );

    let mut temp = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| write_error(dir, e))?;
    temp.write_all(content)
        .map_err(|e| write_error(temp.path(), e))?;

    // A failed persist drops the temporary file, which removes it.
    temp.persist(path).map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            e.file.path().display(),
            path.display(),
            e.error
        )))
    })?;
    Ok(())
}
