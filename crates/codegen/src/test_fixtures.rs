use std::sync::Arc;

use crate::marker::Descriptor;
use crate::node::{DeclarationNode, NodeKey};

/// Node at the crate root of `lib.rs`.
pub(crate) fn node(ordinal: u32, content: &str) -> DeclarationNode {
	DeclarationNode::new(NodeKey::new("lib.rs", ordinal), Vec::<String>::new(), content)
}

/// Node carrying `#[Component]` on a unit struct named `name`.
pub(crate) fn marked(ordinal: u32, name: &str) -> DeclarationNode {
	node(ordinal, &format!("#[Component] pub struct {name};"))
}

pub(crate) fn descriptor(name: &str) -> Arc<Descriptor> {
	Arc::new(Descriptor::new(name, Vec::<String>::new()))
}

pub(crate) fn descriptor_in(name: &str, module_path: &[&str]) -> Arc<Descriptor> {
	let module_path: Vec<String> = module_path.iter().map(|s| (*s).to_owned()).collect();
	Arc::new(Descriptor::new(name, module_path))
}
