//! Classification of a single pattern segment

use std::borrow::Cow;
use std::fmt;

/// Topic level separator
pub const SEPARATOR: char = '/';
/// Single-level wildcard prefix
pub const SINGLE: char = '+';
/// Multi-level wildcard prefix
pub const MULTI: char = '#';
/// Value written by `fill` for a single-level wildcard with no parameter
pub const UNDEFINED: &str = "undefined";

/// MQTT pattern segment: literal string or wildcard.
///
/// Wildcards are recognised by their first character only, so `+id` is a
/// single-level wildcard named `id` and `#rest` a multi-level wildcard named
/// `rest`. A bare `+` or `#` is anonymous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternSegment<'a> {
	/// Literal segment, compared verbatim
	Literal(&'a str),
	/// Single-level wildcard `+` or named `+name`
	Single(Option<&'a str>),
	/// Multi-level wildcard `#` or named `#name`
	Multi(Option<&'a str>),
}

impl<'a> PatternSegment<'a> {
	/// Classifies a raw segment by its first character.
	pub fn parse(raw: &'a str) -> Self {
		if let Some(name) = raw.strip_prefix(MULTI) {
			PatternSegment::Multi(non_empty(name))
		} else if let Some(name) = raw.strip_prefix(SINGLE) {
			PatternSegment::Single(non_empty(name))
		} else {
			PatternSegment::Literal(raw)
		}
	}

	/// Returns the segment with any parameter name stripped.
	pub fn as_str(&self) -> &'a str {
		match *self {
			| PatternSegment::Literal(s) => s,
			| PatternSegment::Single(_) => "+",
			| PatternSegment::Multi(_) => "#",
		}
	}

	/// Returns the segment as written, parameter name included.
	pub fn as_source(&self) -> Cow<'a, str> {
		match *self {
			| PatternSegment::Literal(s) => Cow::Borrowed(s),
			| PatternSegment::Single(None) => Cow::Borrowed("+"),
			| PatternSegment::Multi(None) => Cow::Borrowed("#"),
			| PatternSegment::Single(Some(name)) => {
				Cow::Owned(format!("{SINGLE}{name}"))
			}
			| PatternSegment::Multi(Some(name)) => {
				Cow::Owned(format!("{MULTI}{name}"))
			}
		}
	}

	/// Returns parameter name for named wildcards.
	pub fn param_name(&self) -> Option<&'a str> {
		match *self {
			| PatternSegment::Single(name) | PatternSegment::Multi(name) => {
				name
			}
			| PatternSegment::Literal(_) => None,
		}
	}

	/// Key used when looking the segment up in a parameter map.
	///
	/// Anonymous wildcards use the empty key.
	pub(crate) fn lookup_key(&self) -> &'a str {
		self.param_name().unwrap_or_default()
	}

	/// Returns true if this segment is a wildcard (+ or #).
	pub fn is_wildcard(&self) -> bool {
		!matches!(self, PatternSegment::Literal(_))
	}

	/// Returns true if this segment is a multi-level wildcard.
	pub fn is_multi(&self) -> bool {
		matches!(self, PatternSegment::Multi(_))
	}
}

fn non_empty(name: &str) -> Option<&str> {
	(!name.is_empty()).then_some(name)
}

impl fmt::Display for PatternSegment<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_source())
	}
}

impl<'a> From<&'a str> for PatternSegment<'a> {
	fn from(raw: &'a str) -> Self {
		Self::parse(raw)
	}
}

/// Splits a pattern into classified segments.
pub fn segments(pattern: &str) -> impl Iterator<Item = PatternSegment<'_>> {
	pattern.split(SEPARATOR).map(PatternSegment::parse)
}
