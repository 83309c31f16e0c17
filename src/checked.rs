//! Entry points for callers whose inputs may be absent
//!
//! Each function mirrors its counterpart in [`crate::topic::matcher`] but
//! takes `Option` arguments and fails with
//! [`TopicError::MissingArgument`] naming the first one that is `None`.
//!
//! ```
//! use mqtt_pattern::{TopicError, checked};
//!
//! assert_eq!(checked::matches(Some("a/+"), Some("a/b")), Ok(true));
//! assert_eq!(
//! 	checked::matches(Some("a/+"), None),
//! 	Err(TopicError::missing_argument("topic"))
//! );
//! ```

use crate::topic::matcher::{self, Params};
use crate::topic::{TopicError, TopicResult};

fn require<T>(value: Option<T>, argument: &'static str) -> TopicResult<T> {
	value.ok_or_else(|| TopicError::missing_argument(argument))
}

/// See [`matcher::matches`].
pub fn matches(
	pattern: Option<&str>,
	topic: Option<&str>,
) -> TopicResult<bool> {
	let pattern = require(pattern, "pattern")?;
	let topic = require(topic, "topic")?;
	Ok(matcher::matches(pattern, topic))
}

/// See [`matcher::extract`].
pub fn extract(
	pattern: Option<&str>,
	topic: Option<&str>,
) -> TopicResult<Params> {
	let pattern = require(pattern, "pattern")?;
	let topic = require(topic, "topic")?;
	Ok(matcher::extract(pattern, topic))
}

/// See [`matcher::exec`].
pub fn exec(
	pattern: Option<&str>,
	topic: Option<&str>,
) -> TopicResult<Params> {
	let pattern = require(pattern, "pattern")?;
	let topic = require(topic, "topic")?;
	Ok(matcher::exec(pattern, topic))
}

/// See [`matcher::fill`].
pub fn fill(
	pattern: Option<&str>,
	params: Option<&Params>,
) -> TopicResult<String> {
	let pattern = require(pattern, "pattern")?;
	let params = require(params, "params")?;
	Ok(matcher::fill(pattern, params))
}

/// See [`matcher::clean`].
pub fn clean(pattern: Option<&str>) -> TopicResult<String> {
	let pattern = require(pattern, "pattern")?;
	Ok(matcher::clean(pattern))
}
