//! Components wired into a registry generated by this crate's build script.

use compreg_macros::Component;
// Only the integration tests install a subscriber.
#[cfg(test)]
use tracing_subscriber as _;

pub mod clock;

/// Prefixes every line it formats.
#[Component]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestLoggerComponent {
	prefix: String,
}

impl TestLoggerComponent {
	pub fn new(prefix: impl Into<String>) -> Self {
		Self { prefix: prefix.into() }
	}

	pub fn format(&self, message: &str) -> String {
		format!("[{}] {message}", self.prefix)
	}
}

include!(concat!(env!("OUT_DIR"), "/component_registry.rs"));
