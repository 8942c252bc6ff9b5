use std::fmt;

use indexmap::IndexMap;

/// Closed set of component types a [`Registry`] can hold.
pub trait ComponentSet {
	/// Simple name of the concrete component type stored in this value.
	fn type_name(&self) -> &'static str;
}

/// A component type that is one member of the set `C`.
pub trait Member<C>: Sized {
	/// Borrows `Self` out of `component` if it holds this type.
	fn project(component: &C) -> Option<&Self>;

	/// Mutable counterpart of [`Member::project`].
	fn project_mut(component: &mut C) -> Option<&mut Self>;
}

/// One registered name and the type stored under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing<'a> {
	pub name: &'a str,
	pub type_name: &'static str,
}

impl fmt::Display for Listing<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.name, self.type_name)
	}
}

/// Name-keyed component store.
///
/// Keys are unique and the last [`register`](Self::register) for a name wins. Enumeration
/// follows first insertion: overwriting a name keeps its original slot.
#[derive(Debug, Clone)]
pub struct Registry<C> {
	entries: IndexMap<String, C>,
}

impl<C> Default for Registry<C> {
	fn default() -> Self {
		Self {
			entries: IndexMap::new(),
		}
	}
}

impl<C: ComponentSet> Registry<C> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `component` under `name`, returning the component it replaced.
	pub fn register(&mut self, name: impl Into<String>, component: C) -> Option<C> {
		let name = name.into();
		tracing::info!(
			name = %name,
			type_name = component.type_name(),
			replaced = self.entries.contains_key(&name),
			"component registered"
		);
		self.entries.insert(name, component)
	}

	/// Returns the component registered under `name` if it is a `T`.
	pub fn get<T: Member<C>>(&self, name: &str) -> Option<&T> {
		self.entries.get(name).and_then(T::project)
	}

	/// Mutable counterpart of [`get`](Self::get).
	pub fn get_mut<T: Member<C>>(&mut self, name: &str) -> Option<&mut T> {
		self.entries.get_mut(name).and_then(T::project_mut)
	}

	/// Returns true if anything is registered under `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Number of registered names.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if nothing has been registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Lists every registration in insertion order.
	pub fn list_all(&self) -> Vec<Listing<'_>> {
		tracing::debug!(count = self.entries.len(), "listing registered components");
		self.entries
			.iter()
			.map(|(name, component)| Listing {
				name,
				type_name: component.type_name(),
			})
			.inspect(|listing| tracing::debug!("{listing}"))
			.collect()
	}
}
