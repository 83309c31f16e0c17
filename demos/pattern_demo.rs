//! Routes a handful of topics through named patterns.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example pattern_demo
//! ```

use mqtt_pattern::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Setup tracing from `RUST_LOG`, defaulting to `info`.
fn setup_tracing() {
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| "info".into());

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(true)
				.with_thread_ids(false)
				.with_file(false)
				.with_line_number(false)
				.compact(),
		)
		.init();
}

fn main() -> Result<()> {
	setup_tracing();

	let routes = [
		TopicPattern::new("sensors/+sensor_id/temperature")?,
		TopicPattern::new("devices/+device/#command")?,
		TopicPattern::new("alerts/#")?,
	];

	for route in &routes {
		info!(pattern = %route, subscription = %route.mqtt_pattern(), "Route registered");
	}

	let incoming = [
		"sensors/kitchen/temperature",
		"devices/lamp/set/brightness",
		"alerts/fire/floor/2",
		"unknown/topic",
	];

	for topic in incoming {
		match routes.iter().find(|route| route.matches(topic)) {
			| Some(route) => {
				let params = route.exec(topic);
				info!(topic, pattern = %route, ?params, "Routed");
			}
			| None => warn!(topic, "No route for topic"),
		}
	}

	let mut reply = Params::new();
	reply.insert("device".to_string(), vec!["lamp".to_string()]);
	reply.insert("command".to_string(), vec![
		"state".to_string(),
		"ack".to_string(),
	]);
	info!(topic = %routes[1].fill(&reply), "Reply topic");

	Ok(())
}
