//! Source Path Value Object
//!
//! The absolute, lexically cleaned path of the workspace being published.
//! No filesystem access happens here: a missing directory is the server's
//! concern.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Error when a source path cannot be made absolute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcePathError {
    /// Path contains a NUL byte
    ContainsNul,
    /// Path is not valid UTF-8 and cannot go on the wire
    NotUnicode,
    /// Base directory is not absolute
    RelativeBase(PathBuf),
}

impl fmt::Display for SourcePathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourcePathError::ContainsNul => write!(f, "path contains a NUL byte"),
            SourcePathError::NotUnicode => write!(f, "path is not valid UTF-8"),
            SourcePathError::RelativeBase(base) => {
                write!(f, "base directory '{}' is not absolute", base.display())
            }
        }
    }
}

impl std::error::Error for SourcePathError {}

/// An absolute, cleaned, UTF-8 source path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourcePath(String);

impl SourcePath {
    /// Resolve `path` against `base`
    ///
    /// `base` must be absolute (normally the current directory). `.` segments
    /// are dropped and `..` pops a segment, never climbing above the root.
    /// An empty `path` resolves to `base`.
    pub fn resolve<P: AsRef<Path>, B: AsRef<Path>>(
        path: P,
        base: B,
    ) -> Result<Self, SourcePathError> {
        let path = path.as_ref();
        let base = base.as_ref();

        let raw = path.to_str().ok_or(SourcePathError::NotUnicode)?;
        if raw.contains('\0') {
            return Err(SourcePathError::ContainsNul);
        }

        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            if !base.is_absolute() {
                return Err(SourcePathError::RelativeBase(base.to_path_buf()));
            }
            base.join(path)
        };

        let cleaned = clean(&joined);
        let cleaned = cleaned
            .into_os_string()
            .into_string()
            .map_err(|_| SourcePathError::NotUnicode)?;

        Ok(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// Lexical cleanup of an absolute path
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(p) => out.push(p.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` on the root is a no-op, which keeps `/..` at `/`
                out.pop();
            }
            Component::Normal(segment) => out.push(segment),
        }
    }
    out
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SourcePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
