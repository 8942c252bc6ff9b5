//! Marker predicate and declaration extractor.
//!
//! Both functions are pure and total. Content that does not parse as a single item is
//! simply unmarked.

use std::sync::Arc;

use syn::ext::IdentExt;
use syn::{AttrStyle, Attribute, Generics, Ident, Item};

use crate::node::DeclarationNode;

/// Attribute that designates a declaration for the generated registry.
pub const MARKER: &str = "Component";

/// Data extracted from one marked declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Descriptor {
	name: String,
	module_path: Arc<[String]>,
	generic: bool,
}

impl Descriptor {
	pub fn new(name: impl Into<String>, module_path: impl Into<Arc<[String]>>) -> Self {
		Self {
			name: name.into(),
			module_path: module_path.into(),
			generic: false,
		}
	}

	/// Sets whether the declaration has generic parameters.
	pub fn generic(mut self, on: bool) -> Self {
		self.generic = on;
		self
	}

	/// Simple identifier as written, without raw prefix or generic parameters.
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn module_path(&self) -> &[String] {
		&self.module_path
	}

	pub fn is_generic(&self) -> bool {
		self.generic
	}
}

/// Returns true if `node` is a struct, enum or union carrying `#[Component]`.
pub fn is_marked(node: &DeclarationNode) -> bool {
	marked_item(node.content()).is_some()
}

/// Extracts the descriptor of a marked node.
///
/// Returns `None` only when `node` is not marked.
pub fn extract(node: &DeclarationNode) -> Option<Descriptor> {
	let (ident, generics) = marked_item(node.content())?;
	Some(Descriptor {
		name: ident.unraw().to_string(),
		module_path: node.shared_module_path(),
		generic: !generics.params.is_empty(),
	})
}

fn marked_item(content: &str) -> Option<(Ident, Generics)> {
	let (attrs, ident, generics) = match syn::parse_str::<Item>(content).ok()? {
		Item::Struct(item) => (item.attrs, item.ident, item.generics),
		Item::Enum(item) => (item.attrs, item.ident, item.generics),
		Item::Union(item) => (item.attrs, item.ident, item.generics),
		_ => return None,
	};
	attrs.iter().any(carries_marker).then_some((ident, generics))
}

fn carries_marker(attr: &Attribute) -> bool {
	matches!(attr.style, AttrStyle::Outer) && attr.path().is_ident(MARKER)
}
