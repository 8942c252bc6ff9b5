//! Per-node memoization of predicate and extractor results.
//!
//! # Invariants
//!
//! - A fingerprint is classified at most once while its entry is cached.
//! - Absent results ("not marked") are cached as well as present ones.
//! - Eviction is a memory option only; an evicted node is simply recomputed on its next
//!   observation.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::marker::{self, Descriptor};
use crate::node::{DeclarationNode, Fingerprint};

/// Counters for the work done (and avoided) by an [`IncrementalCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
	pub predicate_calls: u64,
	pub extract_calls: u64,
	pub hits: u64,
	pub misses: u64,
	pub evicted: u64,
}

/// `Fingerprint -> Option<Descriptor>` store scoped to one build session.
#[derive(Debug, Default)]
pub struct IncrementalCache {
	entries: FxHashMap<Fingerprint, Option<Arc<Descriptor>>>,
	stats: CacheStats,
}

impl IncrementalCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the descriptor for `node`, classifying it only if its fingerprint is new.
	pub fn resolve(&mut self, node: &DeclarationNode) -> Option<Arc<Descriptor>> {
		self.resolve_fingerprint(node.fingerprint(), node)
	}

	pub(crate) fn resolve_fingerprint(
		&mut self,
		fingerprint: Fingerprint,
		node: &DeclarationNode,
	) -> Option<Arc<Descriptor>> {
		if let Some(cached) = self.entries.get(&fingerprint) {
			self.stats.hits += 1;
			tracing::trace!(node = %fingerprint.key(), "cache hit");
			return cached.clone();
		}

		self.stats.misses += 1;
		self.stats.predicate_calls += 1;
		let descriptor = if marker::is_marked(node) {
			self.stats.extract_calls += 1;
			marker::extract(node).map(Arc::new)
		} else {
			None
		};
		tracing::trace!(
			node = %fingerprint.key(),
			marked = descriptor.is_some(),
			"cache miss"
		);
		self.entries.insert(fingerprint, descriptor.clone());
		descriptor
	}

	/// Returns the cached descriptor for `fingerprint` without classifying anything.
	///
	/// `None` covers both "cached as unmarked" and "not cached".
	pub fn lookup(&self, fingerprint: &Fingerprint) -> Option<Arc<Descriptor>> {
		self.entries.get(fingerprint).cloned().flatten()
	}

	/// Returns true if `fingerprint` has been classified and is still cached.
	pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
		self.entries.contains_key(fingerprint)
	}

	/// Drops every entry for which `keep` returns false. Returns the number evicted.
	pub fn retain(&mut self, mut keep: impl FnMut(&Fingerprint) -> bool) -> usize {
		let before = self.entries.len();
		self.entries.retain(|fingerprint, _| keep(fingerprint));
		let evicted = before - self.entries.len();
		self.stats.evicted += evicted as u64;
		evicted
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn stats(&self) -> CacheStats {
		self.stats
	}
}
