//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal problem found while loading the config file.
///
/// Unknown keys are reported instead of rejected so that a config written for
/// a newer client still loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key (`server.adress`)
    pub key_path: String,
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if found
    pub line: Option<usize>,
    /// Closest known key, when one is within edit distance 2
    pub suggestion: Option<String>,
}

impl ConfigWarning {
    /// Last segment of the dotted key path
    pub fn key(&self) -> &str {
        self.key_path
            .rsplit('.')
            .next()
            .unwrap_or(self.key_path.as_str())
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key_path, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
