use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use arcstr::{ArcStr, Substr};
use smallvec::SmallVec;
use tracing::debug;

use super::error::PatternResult;
use super::matcher::{
	Params, PatternSegments, clean_segments, extract_segments, fill_segments,
	match_segments, split_topic,
};
use super::pattern_segment::{PatternSegment, SEPARATOR};
use super::validation::{Limits, TopicPatternError, validate_pattern_with};

/// Parsed and validated MQTT topic pattern.
///
/// Holds the pattern as written (`sensors/+id/#rest`) and its plain MQTT
/// form (`sensors/+/#`). Cloning is cheap: segments borrow from a shared
/// [`ArcStr`].
///
/// ```
/// use mqtt_pattern::TopicPattern;
///
/// let pattern = TopicPattern::new("sensors/+id/#rest")?;
/// assert_eq!(pattern.mqtt_pattern(), "sensors/+/#");
///
/// let params = pattern.exec("sensors/42/temp/celsius");
/// assert_eq!(params["id"], ["42"]);
/// assert_eq!(params["rest"], ["temp", "celsius"]);
/// # Ok::<(), mqtt_pattern::TopicPatternError>(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(try_from = "String", into = "String")
)]
pub struct TopicPattern {
	pattern: ArcStr, // as written, with parameter names
	mqtt_pattern: ArcStr, // parameter names stripped
	segments: SmallVec<[Substr; 8]>,
}

impl TopicPattern {
	/// Parses and validates a pattern using the default [`Limits`].
	pub fn new(pattern: impl Into<ArcStr>) -> PatternResult<Self> {
		Self::with_limits(pattern, &Limits::default())
	}

	/// Parses and validates a pattern against explicit limits.
	pub fn with_limits(
		pattern: impl Into<ArcStr>,
		limits: &Limits,
	) -> PatternResult<Self> {
		let pattern = pattern.into();
		if let Err(e) = validate_pattern_with(&pattern, limits) {
			debug!(pattern = %pattern, error = %e, "Rejected topic pattern");
			return Err(e);
		}

		let segments: SmallVec<[Substr; 8]> = pattern
			.split(SEPARATOR)
			.map(|s| pattern.substr_from(s))
			.collect();
		let mqtt_pattern = {
			let parsed: PatternSegments<'_> =
				segments.iter().map(|s| PatternSegment::parse(s)).collect();
			ArcStr::from(clean_segments(&parsed))
		};

		Ok(Self {
			pattern,
			mqtt_pattern,
			segments,
		})
	}

	fn parsed(&self) -> PatternSegments<'_> {
		self.iter().collect()
	}

	/// Returns the pattern as written, parameter names included.
	pub fn pattern(&self) -> ArcStr {
		self.pattern.clone()
	}

	/// Returns MQTT pattern with wildcards for broker subscription.
	pub fn mqtt_pattern(&self) -> ArcStr {
		self.mqtt_pattern.clone()
	}

	/// Same as [`mqtt_pattern`](Self::mqtt_pattern); mirrors [`crate::clean`].
	pub fn clean(&self) -> ArcStr {
		self.mqtt_pattern()
	}

	/// Returns iterator over classified pattern segments.
	pub fn iter(&self) -> impl Iterator<Item = PatternSegment<'_>> {
		self.segments.iter().map(|s| PatternSegment::parse(s))
	}

	/// Returns names of all named wildcards, in pattern order.
	pub fn param_names(&self) -> impl Iterator<Item = &str> {
		self.iter().filter_map(|s| s.param_name())
	}

	/// Returns true if pattern ends with a multi-level wildcard (#).
	pub fn contains_hash(&self) -> bool {
		self.segments
			.last()
			.is_some_and(|s| PatternSegment::parse(s).is_multi())
	}

	/// Returns number of segments in pattern.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Returns true if pattern has no segments.
	///
	/// Always false: a validated pattern has at least one segment.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Validates whether `topic` fits this pattern.
	pub fn matches(&self, topic: &str) -> bool {
		match_segments(&self.parsed(), &split_topic(topic))
	}

	/// Collects named wildcard values without checking the match.
	pub fn extract(&self, topic: &str) -> Params {
		extract_segments(&self.parsed(), &split_topic(topic))
	}

	/// Extracts parameters if `topic` matches, otherwise returns an empty map.
	pub fn exec(&self, topic: &str) -> Params {
		let parsed = self.parsed();
		let topic_segments = split_topic(topic);
		if match_segments(&parsed, &topic_segments) {
			extract_segments(&parsed, &topic_segments)
		} else {
			Params::new()
		}
	}

	/// Builds a topic by substituting named wildcards from `params`.
	pub fn fill(&self, params: &Params) -> String {
		fill_segments(&self.parsed(), params)
	}
}

impl PartialEq for TopicPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for TopicPattern {}

impl Hash for TopicPattern {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.pattern.hash(state);
	}
}

impl fmt::Display for TopicPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

impl AsRef<str> for TopicPattern {
	fn as_ref(&self) -> &str {
		&self.pattern
	}
}

impl FromStr for TopicPattern {
	type Err = TopicPatternError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

impl TryFrom<String> for TopicPattern {
	type Error = TopicPatternError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl TryFrom<&str> for TopicPattern {
	type Error = TopicPatternError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl TryFrom<ArcStr> for TopicPattern {
	type Error = TopicPatternError;

	fn try_from(value: ArcStr) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl From<TopicPattern> for String {
	fn from(pattern: TopicPattern) -> Self {
		pattern.pattern.to_string()
	}
}

