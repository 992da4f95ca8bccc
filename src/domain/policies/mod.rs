//! Domain Policies
//!
//! Business rules that decide what goes into a publish request.

mod attribute_rules;

pub use attribute_rules::{AttributeRule, AttributeRules};
