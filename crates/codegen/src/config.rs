//! Generator configuration.

/// What to do when two component names map to the same typed-getter identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
	/// Reject the whole pass with [`GenerateError::AccessorCollision`](crate::GenerateError::AccessorCollision).
	#[default]
	Reject,
	/// The later descriptor keeps the accessor; the earlier one is reachable via `get::<T>` only.
	Shadow,
}

/// Cache entries whose fingerprint left the current snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EvictionPolicy {
	/// Keep them; a node that comes back unchanged is a cache hit.
	Retain,
	/// Drop them at the end of every pass.
	#[default]
	EvictStale,
}

/// Settings for one [`Generator`](crate::Generator) session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
	pub(crate) accessor_prefix: String,
	pub(crate) artifact_file: String,
	pub(crate) runtime_path: String,
	pub(crate) type_root: String,
	pub(crate) collision_policy: CollisionPolicy,
	pub(crate) eviction: EvictionPolicy,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			accessor_prefix: "get_".to_owned(),
			artifact_file: "component_registry.rs".to_owned(),
			runtime_path: "::compreg_runtime".to_owned(),
			type_root: "crate".to_owned(),
			collision_policy: CollisionPolicy::default(),
			eviction: EvictionPolicy::default(),
		}
	}
}

impl GeneratorConfig {
	/// Prefix prepended to the snake-cased component name to form its typed getter.
	pub fn accessor_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.accessor_prefix = prefix.into();
		self
	}

	/// File name of the emitted artifact.
	pub fn artifact_file(mut self, file: impl Into<String>) -> Self {
		self.artifact_file = file.into();
		self
	}

	/// Path under which the generated code finds `compreg-runtime`.
	pub fn runtime_path(mut self, path: impl Into<String>) -> Self {
		self.runtime_path = path.into();
		self
	}

	/// Path prefix for component types, joined with each descriptor's module path.
	pub fn type_root(mut self, path: impl Into<String>) -> Self {
		self.type_root = path.into();
		self
	}

	pub fn collision_policy(mut self, policy: CollisionPolicy) -> Self {
		self.collision_policy = policy;
		self
	}

	pub fn eviction(mut self, policy: EvictionPolicy) -> Self {
		self.eviction = policy;
		self
	}

	/// Name of the file the artifact is written to.
	pub fn artifact_file_name(&self) -> &str {
		&self.artifact_file
	}
}
