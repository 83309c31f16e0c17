//! Pattern matching, parameter extraction and topic filling
//!
//! Every operation splits its inputs on `/` and makes a single pass over the
//! pattern segments. A multi-level wildcard ends the pass: it only has
//! meaning as the last segment of a pattern.

use std::collections::HashMap;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::pattern_segment::{self, PatternSegment, SEPARATOR, UNDEFINED};

/// Parameters bound to named wildcards, keyed by parameter name.
///
/// A `+name` entry holds exactly one value, a `#name` entry holds every
/// trailing topic segment it matched, in order.
pub type Params = HashMap<String, Vec<String>>;

pub(crate) type PatternSegments<'a> = SmallVec<[PatternSegment<'a>; 8]>;
pub(crate) type TopicSegments<'a> = SmallVec<[&'a str; 8]>;

pub(crate) fn split_pattern(pattern: &str) -> PatternSegments<'_> {
	pattern_segment::segments(pattern).collect()
}

pub(crate) fn split_topic(topic: &str) -> TopicSegments<'_> {
	topic.split(SEPARATOR).collect()
}

/// Validates whether `topic` fits `pattern`, ignoring parameter names.
///
/// A `#` wildcard matches the trailing levels but only as the last pattern
/// segment; anywhere else the pattern never matches. A bare `#` also matches
/// zero levels, a named `#name` needs at least one.
///
/// ```
/// use mqtt_pattern::matches;
///
/// assert!(matches("sensors/+id/#rest", "sensors/42/temp/celsius"));
/// assert!(matches("sensors/#", "sensors"));
/// assert!(!matches("sensors/#rest", "sensors"));
/// assert!(!matches("#/temp", "sensors/temp"));
/// ```
pub fn matches(pattern: &str, topic: &str) -> bool {
	match_segments(&split_pattern(pattern), &split_topic(topic))
}

/// Collects the values of every named wildcard in `pattern` from `topic`.
///
/// No matching is performed, so a topic that does not fit the pattern still
/// yields whatever lines up positionally. Use [`exec`] when the topic is not
/// known to match.
pub fn extract(pattern: &str, topic: &str) -> Params {
	extract_segments(&split_pattern(pattern), &split_topic(topic))
}

/// Extracts parameters when `topic` matches `pattern`, otherwise returns an
/// empty map.
///
/// ```
/// use mqtt_pattern::exec;
///
/// let params = exec("devices/+device/#path", "devices/lamp/state/on");
/// assert_eq!(params["device"], ["lamp"]);
/// assert_eq!(params["path"], ["state", "on"]);
///
/// assert!(exec("devices/+device", "lights/lamp").is_empty());
/// ```
pub fn exec(pattern: &str, topic: &str) -> Params {
	let pattern_segments = split_pattern(pattern);
	let topic_segments = split_topic(topic);
	if match_segments(&pattern_segments, &topic_segments) {
		extract_segments(&pattern_segments, &topic_segments)
	} else {
		trace!(pattern, topic, "Topic does not match pattern");
		Params::new()
	}
}

/// Builds a topic from `pattern` by substituting named wildcards.
///
/// Missing `+` parameters become `undefined`, a missing `#` parameter is
/// dropped. Nothing after a `#` segment is emitted.
///
/// ```
/// use mqtt_pattern::{Params, fill};
///
/// let mut params = Params::new();
/// params.insert("room".into(), vec!["kitchen".into()]);
/// assert_eq!(fill("home/+room/light", &params), "home/kitchen/light");
/// assert_eq!(fill("home/+floor/#rest", &params), "home/undefined");
/// ```
pub fn fill(pattern: &str, params: &Params) -> String {
	fill_segments(&split_pattern(pattern), params)
}

/// Strips parameter names, producing a plain MQTT subscription filter.
///
/// ```
/// assert_eq!(mqtt_pattern::clean("a/+id/b/#rest"), "a/+/b/#");
/// ```
pub fn clean(pattern: &str) -> String {
	clean_segments(&split_pattern(pattern))
}

pub(crate) fn match_segments(
	pattern: &[PatternSegment<'_>],
	topic: &[&str],
) -> bool {
	let last_index = pattern.len().saturating_sub(1);

	for (i, segment) in pattern.iter().enumerate() {
		match (segment, topic.get(i)) {
			| (PatternSegment::Multi(Some(_)), None) => return false,
			| (PatternSegment::Multi(_), _) => return i == last_index,
			| (_, None) => return false,
			| (PatternSegment::Single(_), Some(_)) => {}
			| (PatternSegment::Literal(expected), Some(found)) => {
				if expected != found {
					return false;
				}
			}
		}
	}

	pattern.len() == topic.len()
}

pub(crate) fn extract_segments(
	pattern: &[PatternSegment<'_>],
	topic: &[&str],
) -> Params {
	let mut extracted = Params::new();

	for (i, segment) in pattern.iter().enumerate() {
		match segment {
			| PatternSegment::Multi(Some(name)) => {
				let rest = topic.get(i ..).unwrap_or_default();
				extracted.insert(
					(*name).to_owned(),
					rest.iter().map(|s| (*s).to_owned()).collect(),
				);
				break;
			}
			| PatternSegment::Single(Some(name)) => {
				if let Some(value) = topic.get(i) {
					extracted.insert((*name).to_owned(), vec![
						(*value).to_owned(),
					]);
				}
			}
			| _ => {}
		}
	}

	extracted
}

pub(crate) fn fill_segments(
	pattern: &[PatternSegment<'_>],
	params: &Params,
) -> String {
	let mut parts: SmallVec<[&str; 8]> = SmallVec::new();

	for segment in pattern {
		let key = segment.lookup_key();
		match segment {
			| PatternSegment::Multi(_) => {
				if let Some(values) = params.get(key) {
					parts.extend(values.iter().map(String::as_str));
				}
				break;
			}
			| PatternSegment::Single(_) => {
				match params.get(key).and_then(|values| values.first()) {
					| Some(value) => parts.push(value.as_str()),
					| None => {
						debug!(
							parameter = key,
							"Parameter missing while filling topic, using \
							 '{UNDEFINED}'"
						);
						parts.push(UNDEFINED);
					}
				}
			}
			| PatternSegment::Literal(s) => parts.push(*s),
		}
	}

	parts.join("/")
}

pub(crate) fn clean_segments(pattern: &[PatternSegment<'_>]) -> String {
	let mut cleaned = String::with_capacity(
		pattern.iter().map(|s| s.as_str().len() + 1).sum(),
	);
	for (i, segment) in pattern.iter().enumerate() {
		if i > 0 {
			cleaned.push(SEPARATOR);
		}
		cleaned.push_str(segment.as_str());
	}
	cleaned
}
