//! Attribute Rules Policy
//!
//! Which attributes get attached to which file patterns. The rule table is
//! an ordered sequence so the collection and the printed notices come out
//! the same on every run.

use crate::domain::value_objects::Attributes;

/// One pattern with the attributes applied to files matching it
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRule {
    pub pattern: String,
    pub attributes: Attributes,
}

impl AttributeRule {
    pub fn new(pattern: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            pattern: pattern.into(),
            attributes,
        }
    }
}

/// Ordered rule table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeRules {
    rules: Vec<AttributeRule>,
}

impl AttributeRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rule set this client ships with: images and metadata files
    pub fn sample() -> Self {
        Self::new()
            .with_rule("*.jpg", Attributes::new().with("image", true))
            .with_rule("*.json", Attributes::new().with("metadata", true))
    }

    /// Append a rule; repeating a pattern adds a second entry for it
    pub fn with_rule(mut self, pattern: impl Into<String>, attributes: Attributes) -> Self {
        self.rules.push(AttributeRule::new(pattern, attributes));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
