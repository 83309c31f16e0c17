//! Error types for the topic module
//!
//! Individual error types live next to the code that raises them; this
//! module composes them into the single error returned by the public API.

use thiserror::Error;

pub use super::validation::{TopicNameError, TopicPatternError};

/// Comprehensive error type for all topic-related operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicError {
	/// A required argument was not supplied
	#[error("Missing required argument '{argument}'")]
	MissingArgument {
		/// Name of the absent argument
		argument: &'static str,
	},

	/// Topic pattern parsing or validation error
	#[error("Topic pattern error: {0}")]
	Pattern(#[from] TopicPatternError),

	/// Topic name validation error
	#[error("Topic name error: {0}")]
	Topic(#[from] TopicNameError),
}

impl TopicError {
	/// Creates a new MissingArgument error
	pub fn missing_argument(argument: &'static str) -> Self {
		Self::MissingArgument { argument }
	}
}

/// Convenient Result type for topic operations
pub type TopicResult<T> = Result<T, TopicError>;

/// Convenient Result type for pattern operations
pub type PatternResult<T> = Result<T, TopicPatternError>;
