//! # MQTT Pattern
//!
//! MQTT topic pattern matching with named wildcard parameters.
//!
//! ## Features
//!
//! - **Matching**: `+` matches one topic level, `#` matches the trailing
//!   levels (a bare `#` also matches none)
//! - **Named Parameters**: `+name` and `#name` bind topic levels to names that
//!   [`extract`] and [`exec`] return
//! - **Topic Building**: [`fill`] reverses extraction, [`clean`] strips
//!   parameter names to produce a plain MQTT subscription filter
//! - **Parsed Patterns**: [`TopicPattern`] validates a pattern once and reuses
//!   it for every topic
//! - **Validation**: opt-in checks for patterns and topic names, bounded by
//!   configurable [`Limits`]
//!
//! ## Quick Start
//!
//! ```rust
//! use mqtt_pattern::{Params, clean, exec, fill, matches};
//!
//! let pattern = "home/+room/sensors/#path";
//! let topic = "home/kitchen/sensors/temp/celsius";
//!
//! assert!(matches(pattern, topic));
//!
//! let params = exec(pattern, topic);
//! assert_eq!(params["room"], ["kitchen"]);
//! assert_eq!(params["path"], ["temp", "celsius"]);
//!
//! assert_eq!(fill(pattern, &params), topic);
//! assert_eq!(clean(pattern), "home/+/sensors/#");
//! ```
//!
//! ## Pattern Syntax
//!
//! A wildcard is recognised by the first character of a segment:
//!
//! - `+` / `+name` matches exactly one level
//! - `#` / `#name` matches every remaining level and must be the last segment;
//!   a pattern with `#` elsewhere never matches
//! - anything else is a literal compared verbatim
//!
//! The free functions never fail on malformed input. Use [`TopicPattern`] or
//! the [`topic::validation`] functions to reject malformed patterns up front,
//! and the [`checked`] functions when an argument may be absent.

#![warn(missing_docs)]

pub mod checked;
pub mod topic;

// === Core Public API ===
pub use topic::matcher::{Params, clean, exec, extract, fill, matches};
pub use topic::{PatternSegment, TopicPattern};
// === Errors ===
pub use topic::{TopicError, TopicNameError, TopicPatternError};
// === Validation ===
pub use topic::Limits;

/// Result type alias for operations that may fail with TopicError
pub type Result<T> = std::result::Result<T, TopicError>;

/// Prelude module for convenient imports
///
/// ```rust
/// use mqtt_pattern::prelude::*;
/// ```
pub mod prelude {

	pub use crate::{
		Limits, Params, Result, TopicError, TopicPattern, clean, exec,
		extract, fill, matches,
	};
}
