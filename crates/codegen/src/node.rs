//! Declaration nodes, their identities and fingerprints.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHasher;

/// Stable identity of a declaration: the file it lives in and its pre-order position there.
///
/// The derived ordering (file, then ordinal) is the source order used when deduplicating.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKey {
	file: Arc<str>,
	ordinal: u32,
}

impl NodeKey {
	pub fn new(file: impl Into<Arc<str>>, ordinal: u32) -> Self {
		Self {
			file: file.into(),
			ordinal,
		}
	}

	/// Path of the source file relative to the scanned root, `/`-separated.
	pub fn file(&self) -> &str {
		&self.file
	}

	pub fn ordinal(&self) -> u32 {
		self.ordinal
	}
}

impl fmt::Display for NodeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}#{}", self.file, self.ordinal)
	}
}

/// One item handed over by a declaration source.
///
/// `content` is the item's token text. `module_path` is the Rust module path of the item
/// relative to the crate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationNode {
	key: NodeKey,
	module_path: Arc<[String]>,
	content: Arc<str>,
}

impl DeclarationNode {
	pub fn new(key: NodeKey, module_path: impl Into<Arc<[String]>>, content: impl Into<Arc<str>>) -> Self {
		Self {
			key,
			module_path: module_path.into(),
			content: content.into(),
		}
	}

	pub fn key(&self) -> &NodeKey {
		&self.key
	}

	pub fn module_path(&self) -> &[String] {
		&self.module_path
	}

	pub(crate) fn shared_module_path(&self) -> Arc<[String]> {
		Arc::clone(&self.module_path)
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	/// Derives the cache key for this node from its identity and content.
	pub fn fingerprint(&self) -> Fingerprint {
		let mut hasher = FxHasher::default();
		self.module_path.hash(&mut hasher);
		self.content.hash(&mut hasher);
		Fingerprint {
			key: self.key.clone(),
			digest: hasher.finish(),
		}
	}
}

/// Change-detection key of a [`DeclarationNode`].
///
/// Two nodes with equal fingerprints are treated as the same declaration, including across
/// separate passes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
	key: NodeKey,
	digest: u64,
}

impl Fingerprint {
	pub fn key(&self) -> &NodeKey {
		&self.key
	}

	pub fn digest(&self) -> u64 {
		self.digest
	}
}

/// Incremental notification from a declaration source.
#[derive(Debug, Clone)]
pub enum NodeChange {
	Added(DeclarationNode),
	Changed(DeclarationNode),
	Removed(NodeKey),
}
