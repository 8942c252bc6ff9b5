use std::sync::Arc;

use super::{AcceptedSet, Aggregate, Aggregator};
use crate::marker::Descriptor;
use crate::test_fixtures::{descriptor, descriptor_in};

/// `[A, B, A']` keeps one `A`, the later one, positioned after `B`.
#[test]
fn test_later_duplicate_wins() {
	let first_a = descriptor_in("A", &["old"]);
	let later_a = descriptor_in("A", &["new"]);
	let set = AcceptedSet::collect([first_a, descriptor("B"), Arc::clone(&later_a)]);

	assert_eq!(set.names().collect::<Vec<_>>(), ["B", "A"]);
	let survivor = set.iter().find(|d| d.name() == "A").expect("A survives");
	assert_eq!(survivor, later_a.as_ref());
	assert_eq!(survivor.module_path(), ["new"]);
}

#[test]
fn test_distinct_names_keep_source_order() {
	let set = AcceptedSet::collect(["C", "A", "B"].map(descriptor));
	assert_eq!(set.names().collect::<Vec<_>>(), ["C", "A", "B"]);
}

#[test]
fn test_empty_input_is_empty_set() {
	let set = AcceptedSet::collect(Vec::<Arc<Descriptor>>::new());
	assert!(set.is_empty());
	assert_eq!(set.len(), 0);
}

/// Re-aggregating the committed content reports unchanged and hands back the same storage.
#[test]
fn test_unchanged_set_is_reference_stable() {
	let mut aggregator = Aggregator::new();
	let first = aggregator.aggregate(["A", "B"].map(descriptor));
	assert!(first.is_changed());
	let committed = first.into_set();
	aggregator.commit(committed.clone());

	let second = aggregator.aggregate(["A", "B"].map(descriptor));
	let Aggregate::Unchanged(set) = second else {
		panic!("equal content must be reported unchanged");
	};
	assert!(AcceptedSet::ptr_eq(&set, &committed));
}

#[test]
fn test_reordering_is_a_change() {
	let mut aggregator = Aggregator::new();
	aggregator.commit(AcceptedSet::collect(["A", "B"].map(descriptor)));

	assert!(aggregator.aggregate(["B", "A"].map(descriptor)).is_changed());
}

/// Moving a component to another module changes its emitted type path.
#[test]
fn test_module_move_is_a_change() {
	let mut aggregator = Aggregator::new();
	aggregator.commit(AcceptedSet::collect([descriptor_in("A", &["x"])]));

	assert!(aggregator.aggregate([descriptor_in("A", &["y"])]).is_changed());
}

/// Without a commit the aggregator keeps reporting the set as changed.
#[test]
fn test_uncommitted_set_stays_changed() {
	let aggregator = Aggregator::new();
	assert!(aggregator.aggregate(["A"].map(descriptor)).is_changed());
	assert!(aggregator.aggregate(["A"].map(descriptor)).is_changed());
	assert!(aggregator.committed().is_none());
}
