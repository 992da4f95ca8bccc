//! Presentation Layer
//!
//! Wires use cases to their infrastructure and picks the output format.
//!
//! ## Usage
//!
//! ```ignore
//! use sample_client::presentation::factory;
//!
//! let use_case = factory::create_push_use_case(&config);
//! let sink = factory::create_event_sink(json);
//! let response = use_case.run(&options, &cancel, sink.as_ref()).await?;
//! ```

pub mod factory;

pub use factory::{create_event_sink, create_push_use_case};
