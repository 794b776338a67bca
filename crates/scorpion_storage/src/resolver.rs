//! Logical path → physical location.

use crate::fs::metadata;
use crate::{IMAGES_SUBDIR, MediaType, StorageRoots, block_id_from_dir_name};
use scorpion_error::{NotFoundError, ScorpionResult, ValidationError};
use std::fmt;
use std::path::PathBuf;

/// A client-supplied path, relative to the storage roots.
///
/// Parsing rejects anything that could step outside a root.
///
/// # Examples
///
/// ```
/// use scorpion_storage::LogicalPath;
///
/// let path = LogicalPath::parse("/Hour 1 - Sanitation/block_001/slide_a.png").unwrap();
/// assert_eq!(path.file_name(), "slide_a.png");
/// assert_eq!(path.block_name(), Some("block_001"));
/// assert_eq!(path.to_string(), "Hour 1 - Sanitation/block_001/slide_a.png");
///
/// assert!(LogicalPath::parse("Hour 1/../../etc/passwd").is_err());
/// assert!(LogicalPath::parse("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicalPath {
    components: Vec<String>,
}

impl LogicalPath {
    /// Split and validate a `/`-separated path.
    ///
    /// Empty and `.` segments are dropped.
    pub fn parse(raw: &str) -> ScorpionResult<Self> {
        let mut components = Vec::new();
        for segment in raw.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(
                        ValidationError::new(format!("Path may not contain '..': {}", raw)).into(),
                    );
                }
                s if s.contains(['\\', ':']) || s.chars().any(char::is_control) => {
                    return Err(ValidationError::new(format!(
                        "Invalid path segment {:?} in {}",
                        s, raw
                    ))
                    .into());
                }
                s => components.push(s.to_string()),
            }
        }

        if components.is_empty() {
            return Err(ValidationError::new("Empty asset path").into());
        }
        Ok(Self { components })
    }

    /// Final segment.
    pub fn file_name(&self) -> &str {
        // parse() guarantees at least one component
        self.components.last().map(String::as_str).unwrap_or_default()
    }

    /// Segment before the final one, the block directory for asset paths.
    pub fn block_name(&self) -> Option<&str> {
        self.parent(1)
    }

    fn parent(&self, depth: usize) -> Option<&str> {
        let len = self.components.len();
        (len > depth).then(|| self.components[len - 1 - depth].as_str())
    }

    /// Join onto a root directory.
    pub fn under(&self, root: &std::path::Path) -> PathBuf {
        self.components.iter().fold(root.to_path_buf(), |acc, c| acc.join(c))
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("/"))
    }
}

/// Where a logical path landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// A block directory in the primary root, to be assembled into a manifest
    BlockDirectory {
        /// Absolute directory path
        path: PathBuf,
        /// Name of the containing hour directory, empty at the root
        hour: String,
    },
    /// A file to stream
    File {
        /// Absolute file path
        path: PathBuf,
        /// Media classification, `None` for non-media files in the primary root
        media_type: Option<MediaType>,
    },
}

/// Locates logical paths across the storage roots.
///
/// Precedence: the primary root first; then, for media files only, the
/// secondary root under `{block}/{file}` and `{block}/images/{file}`. Curated
/// primary content is never shadowed by generator output.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    roots: StorageRoots,
}

impl AssetResolver {
    /// Create a resolver over `roots`.
    pub fn new(roots: StorageRoots) -> Self {
        Self { roots }
    }

    /// Resolve `logical` to a block directory or file.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no root holds the path, or it names a non-block directory
    /// - `Storage` when the filesystem cannot be inspected
    #[tracing::instrument(skip(self, logical), fields(path = %logical))]
    pub async fn resolve(&self, logical: &LogicalPath) -> ScorpionResult<Resolved> {
        let primary = logical.under(self.roots.primary_root());

        if let Some(meta) = metadata(&primary).await? {
            if meta.is_dir() {
                if block_id_from_dir_name(logical.file_name()).is_none() {
                    tracing::debug!("Directory is not a block");
                    return Err(NotFoundError::new(logical.to_string()).into());
                }
                let hour = logical.parent(1).unwrap_or_default().to_string();
                tracing::debug!(dir = %primary.display(), "Resolved block directory");
                return Ok(Resolved::BlockDirectory {
                    path: primary,
                    hour,
                });
            }
            if meta.is_file() {
                tracing::debug!(file = %primary.display(), "Resolved in primary root");
                return Ok(Resolved::File {
                    media_type: MediaType::from_path(&primary),
                    path: primary,
                });
            }
        }

        if let Some(path) = self.resolve_secondary(logical).await? {
            tracing::debug!(file = %path.display(), "Resolved in secondary root");
            return Ok(Resolved::File {
                media_type: MediaType::from_path(&path),
                path,
            });
        }

        tracing::debug!("Not found in any root");
        Err(NotFoundError::new(logical.to_string()).into())
    }

    async fn resolve_secondary(&self, logical: &LogicalPath) -> ScorpionResult<Option<PathBuf>> {
        if MediaType::from_path(logical.file_name()).is_none() {
            return Ok(None);
        }
        let Some(block_name) = logical.block_name() else {
            return Ok(None);
        };
        let Some(block_dir) = self.roots.secondary_block_dir(block_name) else {
            return Ok(None);
        };

        for candidate in [
            block_dir.join(logical.file_name()),
            block_dir.join(IMAGES_SUBDIR).join(logical.file_name()),
        ] {
            if metadata(&candidate).await?.is_some_and(|m| m.is_file()) {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }
}
