//! Tests for TopicPattern functionality

use std::collections::HashSet;

use arcstr::ArcStr;

use super::matcher::{self, Params};
use super::{Limits, PatternSegment, TopicPattern, TopicPatternError};

fn create_pattern(pattern: &str) -> TopicPattern {
	TopicPattern::new(pattern).expect("Pattern should be valid")
}

mod construction_tests {
	use super::*;

	#[test]
	fn test_accessors() {
		let pattern = create_pattern("sensors/+id/data/#rest");

		assert_eq!(pattern.pattern(), "sensors/+id/data/#rest");
		assert_eq!(pattern.mqtt_pattern(), "sensors/+/data/#");
		assert_eq!(pattern.clean(), pattern.mqtt_pattern());
		assert_eq!(pattern.len(), 4);
		assert!(!pattern.is_empty());
		assert!(pattern.contains_hash());
		assert_eq!(pattern.param_names().collect::<Vec<_>>(), ["id", "rest"]);
		assert_eq!(pattern.to_string(), "sensors/+id/data/#rest");
	}

	#[test]
	fn test_segments_iteration() {
		let pattern = create_pattern("a/+/#tail");
		let segments: Vec<_> = pattern.iter().collect();

		assert_eq!(segments, vec![
			PatternSegment::Literal("a"),
			PatternSegment::Single(None),
			PatternSegment::Multi(Some("tail")),
		]);
		assert!(!create_pattern("a/+").contains_hash());
	}

	#[test]
	fn test_invalid_patterns_rejected() {
		assert_eq!(
			TopicPattern::new(""),
			Err(TopicPatternError::EmptyPattern)
		);
		assert_eq!(
			TopicPattern::new("#/a"),
			Err(TopicPatternError::hash_position("#/a"))
		);
		assert!(TopicPattern::new("+a/+a").is_err());
		assert!("a/b+".parse::<TopicPattern>().is_err());
	}

	#[test]
	fn test_custom_limits() {
		let limits = Limits::default().with_max_depth(1);
		assert_eq!(
			TopicPattern::with_limits("a/b", &limits),
			Err(TopicPatternError::TooDeep { depth: 2, max: 1 })
		);
		assert!(TopicPattern::with_limits("a", &limits).is_ok());
	}

	#[test]
	fn test_conversions() {
		let from_str = TopicPattern::try_from("a/+b").unwrap();
		let from_string = TopicPattern::try_from(String::from("a/+b")).unwrap();
		let from_arcstr = TopicPattern::try_from(ArcStr::from("a/+b")).unwrap();
		let parsed: TopicPattern = "a/+b".parse().unwrap();

		assert_eq!(from_str, from_string);
		assert_eq!(from_string, from_arcstr);
		assert_eq!(from_arcstr, parsed);
		assert_eq!(String::from(parsed), "a/+b");
		assert_eq!(AsRef::<str>::as_ref(&from_str), "a/+b");
	}

	#[test]
	fn test_equality_and_hash_follow_source_text() {
		let mut set = HashSet::new();
		set.insert(create_pattern("a/+id"));
		set.insert(create_pattern("a/+id"));
		set.insert(create_pattern("a/+other"));

		assert_eq!(set.len(), 2);
	}

	#[test]
	fn test_is_send_and_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<TopicPattern>();
	}
}

mod operation_tests {
	use super::*;

	#[test]
	fn test_matches() {
		let pattern = create_pattern("foo/+name/#rest");

		assert!(pattern.matches("foo/bar/baz"));
		assert!(pattern.matches("foo/bar/baz/qux"));
		assert!(!pattern.matches("foo/bar"));
		assert!(!pattern.matches("foo"));
		assert!(create_pattern("foo/+name/#").matches("foo/bar"));
		assert!(!pattern.matches("bar/baz"));
	}

	#[test]
	fn test_exec_and_extract() {
		let pattern = create_pattern("+hello/+world/#wow");
		let params = pattern.exec("foo/bar/baz/fizz");

		assert_eq!(params["hello"], ["foo"]);
		assert_eq!(params["world"], ["bar"]);
		assert_eq!(params["wow"], ["baz", "fizz"]);
		assert_eq!(pattern.extract("foo/bar/baz/fizz"), params);

		let strict = create_pattern("hello/+world");
		assert!(strict.exec("foo/bar").is_empty());
		assert_eq!(strict.extract("foo/bar")["world"], ["bar"]);
	}

	#[test]
	fn test_fill() {
		let pattern = create_pattern("foo/+hello/#world");
		let mut params = Params::new();
		params.insert("hello".to_string(), vec!["Hello".to_string()]);

		assert_eq!(pattern.fill(&params), "foo/Hello");

		params.insert("world".to_string(), vec![
			"the".to_string(),
			"world".to_string(),
		]);
		assert_eq!(pattern.fill(&params), "foo/Hello/the/world");
	}

	#[test]
	fn test_agrees_with_free_functions() {
		let cases = [
			("#", ["", "a/b"]),
			("a/+id", ["a/b", "a/b/c"]),
			("/+x/#y", ["/1/2/3", "1/2"]),
			("a//+x", ["a//b", "a/b"]),
		];

		for (source, topics) in cases {
			let pattern = create_pattern(source);
			assert_eq!(pattern.clean().as_str(), matcher::clean(source));
			for topic in topics {
				assert_eq!(
					pattern.matches(topic),
					matcher::matches(source, topic),
					"{source} vs {topic}"
				);
				assert_eq!(pattern.exec(topic), matcher::exec(source, topic));
				assert_eq!(
					pattern.extract(topic),
					matcher::extract(source, topic)
				);
				let params = pattern.extract(topic);
				assert_eq!(pattern.fill(&params), matcher::fill(source, &params));
			}
		}
	}
}
