//! Integration tests for the public matching API
//!
//! Set `RUST_LOG=mqtt_pattern=trace` to see the library's diagnostics.

use std::sync::Once;
use std::thread;

use mqtt_pattern::prelude::*;
use mqtt_pattern::{PatternSegment, TopicPatternError, checked};

static TRACING: Once = Once::new();

fn init_tracing() {
	TRACING.call_once(|| {
		let filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| "off".into());
		let _ = tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_test_writer()
			.compact()
			.try_init();
	});
}

fn params(entries: &[(&str, &[&str])]) -> Params {
	entries
		.iter()
		.map(|(name, values)| {
			(
				(*name).to_owned(),
				values.iter().map(|v| (*v).to_owned()).collect(),
			)
		})
		.collect()
}

#[test]
fn test_subscription_workflow() {
	init_tracing();

	let pattern = "building/+building/floor/+floor/#sensor";
	let topic = "building/A/floor/2/temperature/celsius";

	assert!(matches(pattern, topic));
	assert_eq!(
		exec(pattern, topic),
		params(&[
			("building", &["A"]),
			("floor", &["2"]),
			("sensor", &["temperature", "celsius"]),
		])
	);
	assert_eq!(clean(pattern), "building/+/floor/+/#");
}

#[test]
fn test_publish_topic_from_params() {
	init_tracing();

	let values = params(&[("device", &["lamp-1"]), ("state", &["on"])]);
	assert_eq!(
		fill("devices/+device/set/+state", &values),
		"devices/lamp-1/set/on"
	);
	assert_eq!(
		fill("devices/+device/set/+mode", &values),
		"devices/lamp-1/set/undefined"
	);
}

#[test]
fn test_non_matching_topic() {
	init_tracing();

	assert!(exec("hello/world", "foo/bar/baz").is_empty());
	assert!(!matches("#/bar", "foo/bar"));
}

#[test]
fn test_compiled_pattern_matches_free_functions() -> Result<()> {
	init_tracing();

	let pattern = TopicPattern::new("home/+room/#rest")?;
	for topic in ["home/kitchen", "home/kitchen/light/1", "office/desk"] {
		assert_eq!(pattern.matches(topic), matches("home/+room/#rest", topic));
		assert_eq!(pattern.exec(topic), exec("home/+room/#rest", topic));
	}
	assert_eq!(
		pattern.iter().last(),
		Some(PatternSegment::Multi(Some("rest")))
	);
	Ok(())
}

#[test]
fn test_invalid_pattern_converts_into_topic_error() {
	init_tracing();

	let result: Result<TopicPattern> =
		TopicPattern::new("a/#/b").map_err(TopicError::from);
	assert_eq!(
		result,
		Err(TopicError::Pattern(TopicPatternError::hash_position("a/#/b")))
	);
}

#[test]
fn test_checked_api_reports_missing_arguments() {
	init_tracing();

	assert_eq!(
		checked::exec(None, Some("a")),
		Err(TopicError::missing_argument("pattern"))
	);
	assert_eq!(
		checked::fill(Some("a/+b"), None),
		Err(TopicError::missing_argument("params"))
	);
	assert_eq!(checked::clean(Some("a/+b")), Ok("a/+".to_string()));
}

#[test]
fn test_shared_pattern_across_threads() -> Result<()> {
	init_tracing();

	let pattern = TopicPattern::new("jobs/+worker/#task")?;
	let handles: Vec<_> = (0 .. 4)
		.map(|i| {
			let pattern = pattern.clone();
			thread::spawn(move || {
				let topic = format!("jobs/w{i}/build/{i}");
				pattern.exec(&topic)
			})
		})
		.collect();

	for (i, handle) in handles.into_iter().enumerate() {
		let extracted = handle.join().expect("worker thread panicked");
		assert_eq!(extracted["worker"], [format!("w{i}")]);
		assert_eq!(extracted["task"], ["build".to_string(), i.to_string()]);
	}
	Ok(())
}
