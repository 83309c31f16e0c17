//! Structural checks for topic patterns and topic names
//!
//! The matching functions accept any string; these checks are opt-in and are
//! what [`TopicPattern`](super::TopicPattern) runs on construction.

use std::collections::HashSet;

use thiserror::Error;

use super::pattern_segment::{MULTI, PatternSegment, SEPARATOR, SINGLE};

/// Topic processing limits and constants
pub mod limits {
	/// Maximum topic nesting depth allowed
	pub const MAX_TOPIC_DEPTH: usize = 32;

	/// Maximum length of a single topic segment
	pub const MAX_SEGMENT_LENGTH: usize = 256;

	/// Maximum total topic length in bytes (MQTT-4.7.3-3)
	pub const MAX_TOPIC_LENGTH: usize = 65_535;
}

/// Error types for topic pattern validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicPatternError {
	/// Empty pattern is not valid
	#[error("Topic pattern cannot be empty")]
	EmptyPattern,

	/// Pattern exceeds the configured byte length
	#[error("Topic pattern too long: {length} > {max}")]
	TooLong {
		/// Pattern length in bytes
		length: usize,
		/// Configured maximum
		max: usize,
	},

	/// Pattern has more segments than allowed
	#[error("Topic pattern too deep: {depth} segments > {max}")]
	TooDeep {
		/// Number of segments
		depth: usize,
		/// Configured maximum
		max: usize,
	},

	/// Hash wildcard (#) used not at the end of the pattern
	#[error(
		"Invalid topic pattern '{pattern}': # wildcard can only be the last \
		 segment"
	)]
	HashPosition {
		/// The invalid pattern
		pattern: String,
	},

	/// Wildcard characters (+ or #) used inside a segment
	#[error("Invalid wildcard usage in segment '{segment}' at position {position}")]
	WildcardUsage {
		/// Offending segment
		segment: String,
		/// Segment index
		position: usize,
	},

	/// The same parameter name is bound twice
	#[error("Duplicate parameter name '{name}'")]
	DuplicateParameter {
		/// Repeated parameter name
		name: String,
	},
}

impl TopicPatternError {
	/// Creates a new HashPosition error
	pub fn hash_position(pattern: impl Into<String>) -> Self {
		Self::HashPosition {
			pattern: pattern.into(),
		}
	}

	/// Creates a new WildcardUsage error
	pub fn wildcard_usage(segment: impl Into<String>, position: usize) -> Self {
		Self::WildcardUsage {
			segment: segment.into(),
			position,
		}
	}
}

/// Error types for topic name validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicNameError {
	/// Topic name is empty
	#[error("Topic cannot be empty")]
	EmptyTopic,

	/// Topic exceeds the configured byte length
	#[error("Topic too long: {length} > {max}")]
	TooLong {
		/// Topic length in bytes
		length: usize,
		/// Configured maximum
		max: usize,
	},

	/// Topic has more levels than allowed
	#[error("Topic too deep: {depth} segments > {max}")]
	TooDeep {
		/// Number of segments
		depth: usize,
		/// Configured maximum
		max: usize,
	},

	/// A single level exceeds the configured length
	#[error("Topic segment at position {position} too long: {length} > {max}")]
	SegmentTooLong {
		/// Segment index
		position: usize,
		/// Segment length in bytes
		length: usize,
		/// Configured maximum
		max: usize,
	},

	/// Topic contains U+0000
	#[error("Null character in topic segment at position {position}")]
	NullCharacter {
		/// Segment index
		position: usize,
	},

	/// Topic names carry no wildcards
	#[error("Wildcard character in topic segment at position {position}")]
	Wildcard {
		/// Segment index
		position: usize,
	},
}

/// Bounds applied by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(default)
)]
pub struct Limits {
	/// Maximum number of segments
	pub max_depth: usize,
	/// Maximum length of one segment, in bytes (topics only)
	pub max_segment_length: usize,
	/// Maximum length of the whole string, in bytes
	pub max_topic_length: usize,
}

impl Default for Limits {
	fn default() -> Self {
		Self {
			max_depth: limits::MAX_TOPIC_DEPTH,
			max_segment_length: limits::MAX_SEGMENT_LENGTH,
			max_topic_length: limits::MAX_TOPIC_LENGTH,
		}
	}
}

impl Limits {
	/// Limits that only reject structurally invalid input.
	pub fn unbounded() -> Self {
		Self {
			max_depth: usize::MAX,
			max_segment_length: usize::MAX,
			max_topic_length: usize::MAX,
		}
	}

	/// Sets the maximum number of segments.
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// Sets the maximum segment length.
	pub fn with_max_segment_length(mut self, max_segment_length: usize) -> Self {
		self.max_segment_length = max_segment_length;
		self
	}

	/// Sets the maximum total length.
	pub fn with_max_topic_length(mut self, max_topic_length: usize) -> Self {
		self.max_topic_length = max_topic_length;
		self
	}
}

/// Checks if a topic or pattern contains wildcard characters
pub fn has_wildcards(s: impl AsRef<str>) -> bool {
	s.as_ref().contains([SINGLE, MULTI])
}

/// Validates a pattern with the default [`Limits`].
pub fn validate_pattern(pattern: &str) -> Result<(), TopicPatternError> {
	validate_pattern_with(pattern, &Limits::default())
}

/// Validates topic pattern for subscription constraints
///
/// Rejects `#` anywhere but the last segment, wildcard characters after the
/// first character of a segment, NUL characters and repeated parameter
/// names.
pub fn validate_pattern_with(
	pattern: &str,
	limits: &Limits,
) -> Result<(), TopicPatternError> {
	if pattern.is_empty() {
		return Err(TopicPatternError::EmptyPattern);
	}

	if pattern.len() > limits.max_topic_length {
		return Err(TopicPatternError::TooLong {
			length: pattern.len(),
			max: limits.max_topic_length,
		});
	}

	let depth = pattern.split(SEPARATOR).count();
	if depth > limits.max_depth {
		return Err(TopicPatternError::TooDeep {
			depth,
			max: limits.max_depth,
		});
	}

	let mut seen_names = HashSet::new();
	for (position, raw) in pattern.split(SEPARATOR).enumerate() {
		let segment = PatternSegment::parse(raw);
		let body = match segment {
			| PatternSegment::Literal(s) => s,
			| _ => segment.param_name().unwrap_or_default(),
		};
		if has_wildcards(body) || body.contains('\0') {
			return Err(TopicPatternError::wildcard_usage(raw, position));
		}

		if segment.is_multi() && position != depth - 1 {
			return Err(TopicPatternError::hash_position(pattern));
		}

		if let Some(name) = segment.param_name() {
			if !seen_names.insert(name) {
				return Err(TopicPatternError::DuplicateParameter {
					name: name.to_owned(),
				});
			}
		}
	}

	Ok(())
}

/// Validates a topic name with the default [`Limits`].
pub fn validate_topic(topic: &str) -> Result<(), TopicNameError> {
	validate_topic_with(topic, &Limits::default())
}

/// Validates topic name for publishing constraints
pub fn validate_topic_with(
	topic: &str,
	limits: &Limits,
) -> Result<(), TopicNameError> {
	if topic.is_empty() {
		return Err(TopicNameError::EmptyTopic);
	}

	if topic.len() > limits.max_topic_length {
		return Err(TopicNameError::TooLong {
			length: topic.len(),
			max: limits.max_topic_length,
		});
	}

	let depth = topic.split(SEPARATOR).count();
	if depth > limits.max_depth {
		return Err(TopicNameError::TooDeep {
			depth,
			max: limits.max_depth,
		});
	}

	for (position, segment) in topic.split(SEPARATOR).enumerate() {
		if segment.len() > limits.max_segment_length {
			return Err(TopicNameError::SegmentTooLong {
				position,
				length: segment.len(),
				max: limits.max_segment_length,
			});
		}

		if segment.contains('\0') {
			return Err(TopicNameError::NullCharacter { position });
		}

		if has_wildcards(segment) {
			return Err(TopicNameError::Wildcard { position });
		}
	}

	Ok(())
}
