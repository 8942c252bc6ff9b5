//! Generation session: one cache, one snapshot, one pass at a time.
//!
//! # Role
//!
//! A [`Generator`] owns every piece of mutable state for a build session. Passes take
//! `&mut self`, so two passes can never touch the same cache concurrently. The cache is not
//! persisted; dropping the generator ends the session.
//!
//! # Pass outcome
//!
//! | Accepted set | Output |
//! |--------------|--------|
//! | equal to last committed | [`Output::Unchanged`] |
//! | changed, empty | [`Output::Suppressed`] |
//! | changed, non-empty | [`Output::Emitted`] or a [`GenerateError`] |
//!
//! A failed pass is not committed, so repeating it fails again instead of being reported
//! as unchanged.

use std::collections::BTreeMap;

use crate::aggregate::{AcceptedSet, Aggregate, Aggregator};
use crate::cache::IncrementalCache;
use crate::config::{EvictionPolicy, GeneratorConfig};
use crate::emit::{Artifact, emit};
use crate::error::{GenerateError, SinkError};
use crate::node::{DeclarationNode, Fingerprint, NodeChange, NodeKey};
use crate::sink::OutputSink;

/// Result of a successful pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
	/// The accepted set changed; here is the new registry module.
	Emitted(Artifact),
	/// Same accepted set as the last pass; the previous artifact stays valid.
	Unchanged,
	/// No marked declarations; nothing is generated.
	Suppressed,
}

impl Output {
	pub fn artifact(&self) -> Option<&Artifact> {
		match self {
			Self::Emitted(artifact) => Some(artifact),
			Self::Unchanged | Self::Suppressed => None,
		}
	}

	/// Hands an emitted artifact to `sink`. Returns whether anything was published.
	pub fn publish<S: OutputSink + ?Sized>(&self, sink: &mut S) -> Result<bool, SinkError> {
		match self.artifact() {
			Some(artifact) => {
				sink.publish(artifact)?;
				Ok(true)
			}
			None => Ok(false),
		}
	}
}

/// Incremental discovery-and-generation pipeline for one build session.
#[derive(Debug, Default)]
pub struct Generator {
	config: GeneratorConfig,
	snapshot: BTreeMap<NodeKey, Fingerprint>,
	cache: IncrementalCache,
	aggregator: Aggregator,
	passes: u64,
}

impl Generator {
	pub fn new(config: GeneratorConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	pub fn cache(&self) -> &IncrementalCache {
		&self.cache
	}

	/// Accepted set of the last successful pass.
	pub fn accepted(&self) -> Option<&AcceptedSet> {
		self.aggregator.committed()
	}

	/// Number of passes run so far, failed ones included.
	pub fn passes(&self) -> u64 {
		self.passes
	}

	/// Runs a pass over a complete snapshot of the corpus.
	///
	/// Nodes absent from `nodes` leave the snapshot. If a key appears twice the later node
	/// replaces the earlier one.
	pub fn run<I>(&mut self, nodes: I) -> Result<Output, GenerateError>
	where
		I: IntoIterator<Item = DeclarationNode>,
	{
		let mut snapshot = BTreeMap::new();
		for node in nodes {
			let fingerprint = self.observe(&node);
			snapshot.insert(node.key().clone(), fingerprint);
		}
		self.snapshot = snapshot;
		self.finish_pass()
	}

	/// Runs a pass after applying change notifications to the current snapshot.
	pub fn apply<I>(&mut self, changes: I) -> Result<Output, GenerateError>
	where
		I: IntoIterator<Item = NodeChange>,
	{
		for change in changes {
			match change {
				NodeChange::Added(node) | NodeChange::Changed(node) => {
					let fingerprint = self.observe(&node);
					self.snapshot.insert(node.key().clone(), fingerprint);
				}
				NodeChange::Removed(key) => {
					if self.snapshot.remove(&key).is_none() {
						tracing::debug!(node = %key, "removal of unknown node ignored");
					}
				}
			}
		}
		self.finish_pass()
	}

	fn observe(&mut self, node: &DeclarationNode) -> Fingerprint {
		let fingerprint = node.fingerprint();
		self.cache.resolve_fingerprint(fingerprint.clone(), node);
		fingerprint
	}

	fn finish_pass(&mut self) -> Result<Output, GenerateError> {
		self.passes += 1;
		let pass = self.passes;

		if self.config.eviction == EvictionPolicy::EvictStale {
			let snapshot = &self.snapshot;
			let evicted = self
				.cache
				.retain(|fingerprint| snapshot.get(fingerprint.key()) == Some(fingerprint));
			if evicted > 0 {
				tracing::debug!(pass, evicted, "evicted stale cache entries");
			}
		}

		let descriptors = self
			.snapshot
			.values()
			.filter_map(|fingerprint| self.cache.lookup(fingerprint));
		let set = match self.aggregator.aggregate(descriptors) {
			Aggregate::Unchanged(_) => {
				tracing::debug!(pass, "accepted set unchanged, emission skipped");
				return Ok(Output::Unchanged);
			}
			Aggregate::Changed(set) => set,
		};

		let Some(artifact) = emit(&set, &self.config)? else {
			tracing::info!(pass, "no components discovered, registry generation suppressed");
			self.aggregator.commit(set);
			return Ok(Output::Suppressed);
		};

		tracing::info!(
			pass,
			components = set.len(),
			file = artifact.file_name(),
			"component registry emitted"
		);
		self.aggregator.commit(set);
		Ok(Output::Emitted(artifact))
	}
}
