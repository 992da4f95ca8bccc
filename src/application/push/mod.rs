//! Push Module
//!
//! Publishes a workspace as a collection to the collection manager.
//!
//! ## Structure
//!
//! - `options` - `PushOptions` and argument completion
//! - `use_case` - `PushUseCase`, the publish flow
//!
//! ## Usage
//!
//! ```ignore
//! use sample_client::application::push::{PushOptions, PushUseCase};
//!
//! let mut options = PushOptions::new(server_address, timeout);
//! options.complete(&args)?;
//! let use_case = PushUseCase::new(dialer, credentials);
//! let response = use_case.run(&options, &cancel, &sink).await?;
//! ```

mod options;
mod use_case;

pub use options::PushOptions;
pub use use_case::PushUseCase;
