//! Topic handling module
//!
//! This module provides components for working with MQTT topic patterns:
//! segment classification, matching and parameter extraction, topic filling,
//! and validation.

// Submodules
pub mod error;
pub mod matcher;
pub mod pattern_segment;
/// Parsed, reusable topic patterns
pub mod topic_pattern;
pub mod validation;

#[cfg(test)]
mod topic_pattern_tests;

// Re-export commonly used types for convenience
pub use error::{PatternResult, TopicError, TopicResult};
pub use matcher::{Params, clean, exec, extract, fill, matches};
pub use pattern_segment::PatternSegment;
pub use topic_pattern::TopicPattern;
pub use validation::{
	Limits, TopicNameError, TopicPatternError, has_wildcards, limits,
	validate_pattern, validate_pattern_with, validate_topic,
	validate_topic_with,
};
