//! Collection of accepted descriptors and change detection between passes.
//!
//! # Precedence Contract
//!
//! Descriptors are deduplicated by name. The later one in source order wins, matching the
//! last-write-wins behavior of the generated registry. Survivors keep their own source
//! position, so `[A, B, A']` aggregates to `[B, A']`.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::marker::Descriptor;

/// Ordered, name-unique descriptors currently matching the marker.
///
/// Equality is structural (same descriptors in the same order). Cloning shares storage, and
/// [`AcceptedSet::ptr_eq`] tells whether two sets are the very same allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptedSet(Arc<[Arc<Descriptor>]>);

impl AcceptedSet {
	/// Builds a set from descriptors in source order, applying the precedence contract.
	pub fn collect<I>(descriptors: I) -> Self
	where
		I: IntoIterator<Item = Arc<Descriptor>>,
	{
		let descriptors: Vec<Arc<Descriptor>> = descriptors.into_iter().collect();

		let mut last_seen: FxHashMap<&str, usize> =
			FxHashMap::with_capacity_and_hasher(descriptors.len(), Default::default());
		for (position, descriptor) in descriptors.iter().enumerate() {
			if let Some(replaced) = last_seen.insert(descriptor.name(), position) {
				tracing::debug!(
					name = descriptor.name(),
					replaced_position = replaced,
					position,
					"later declaration replaces earlier one with the same name"
				);
			}
		}

		let survivors: Vec<Arc<Descriptor>> = descriptors
			.iter()
			.enumerate()
			.filter(|(position, descriptor)| last_seen.get(descriptor.name()) == Some(position))
			.map(|(_, descriptor)| Arc::clone(descriptor))
			.collect();
		Self(survivors.into())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
		self.0.iter().map(|descriptor| descriptor.as_ref())
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.iter().map(Descriptor::name)
	}

	/// Returns true if both sets share the same storage.
	pub fn ptr_eq(a: &Self, b: &Self) -> bool {
		Arc::ptr_eq(&a.0, &b.0)
	}
}

/// Result of one aggregation.
#[derive(Debug, Clone)]
pub enum Aggregate {
	/// Differs from the last committed set.
	Changed(AcceptedSet),
	/// Structurally equal to the last committed set; carries that set's storage.
	Unchanged(AcceptedSet),
}

impl Aggregate {
	pub fn is_changed(&self) -> bool {
		matches!(self, Self::Changed(_))
	}

	pub fn set(&self) -> &AcceptedSet {
		match self {
			Self::Changed(set) | Self::Unchanged(set) => set,
		}
	}

	pub fn into_set(self) -> AcceptedSet {
		match self {
			Self::Changed(set) | Self::Unchanged(set) => set,
		}
	}
}

/// Builds [`AcceptedSet`]s and remembers the last one that was successfully published.
#[derive(Debug, Default)]
pub struct Aggregator {
	committed: Option<AcceptedSet>,
}

impl Aggregator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Aggregates descriptors given in source order.
	pub fn aggregate<I>(&self, descriptors: I) -> Aggregate
	where
		I: IntoIterator<Item = Arc<Descriptor>>,
	{
		let set = AcceptedSet::collect(descriptors);
		match &self.committed {
			Some(previous) if *previous == set => Aggregate::Unchanged(previous.clone()),
			_ => Aggregate::Changed(set),
		}
	}

	/// Records `set` as the baseline for the next [`aggregate`](Self::aggregate).
	pub fn commit(&mut self, set: AcceptedSet) {
		self.committed = Some(set);
	}

	pub fn committed(&self) -> Option<&AcceptedSet> {
		self.committed.as_ref()
	}
}

#[cfg(test)]
mod tests;
