//! Push Options
//!
//! Inputs to the push use case: the two positional arguments plus the
//! connection settings inherited from the global configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{PushError, PushResult};

/// Options for the push use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOptions {
    /// Workspace directory to publish, as given on the command line
    pub source: PathBuf,
    /// Destination reference (`registry.example/repo:tag`)
    pub destination: String,
    /// Collection manager address
    pub server_address: String,
    /// Upper bound on the publish call; `None` waits for the server
    pub timeout: Option<Duration>,
}

impl PushOptions {
    pub fn new(server_address: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            source: PathBuf::new(),
            destination: String::new(),
            server_address: server_address.into(),
            timeout,
        }
    }

    /// Store `SRC` and `DST` from the positional arguments
    ///
    /// The argument parser already enforces arity; this re-checks so the
    /// use case can be driven without it. On error nothing is modified.
    pub fn complete<S: AsRef<str>>(&mut self, args: &[S]) -> PushResult<()> {
        if args.len() < 2 {
            return Err(PushError::InvalidArguments { got: args.len() });
        }
        self.source = PathBuf::from(args[0].as_ref());
        self.destination = args[1].as_ref().to_string();
        Ok(())
    }
}
