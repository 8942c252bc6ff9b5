//! Registry emission.
//!
//! # Role
//!
//! Turns an [`AcceptedSet`] into the text of the generated registry module. Emission is two
//! pure stages: [`RegistryModel::build`] validates the set against the configuration and
//! lowers it into identifiers and type paths, then `render` produces tokens with `quote!`.
//! Nothing here iterates an unordered collection, so equal inputs render byte-identical
//! output.

mod model;
pub(crate) mod render;

pub use model::{EntryModel, RegistryModel};

use crate::aggregate::AcceptedSet;
use crate::config::GeneratorConfig;
use crate::error::GenerateError;

/// Generated registry module, ready for an [`OutputSink`](crate::OutputSink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
	file_name: String,
	contents: String,
}

impl Artifact {
	pub fn file_name(&self) -> &str {
		&self.file_name
	}

	pub fn contents(&self) -> &str {
		&self.contents
	}
}

/// Emits the registry module for `set`.
///
/// Returns `Ok(None)` for an empty set: no components means no artifact at all.
pub fn emit(set: &AcceptedSet, config: &GeneratorConfig) -> Result<Option<Artifact>, GenerateError> {
	if set.is_empty() {
		return Ok(None);
	}
	let model = RegistryModel::build(set, config)?;
	Ok(Some(Artifact {
		file_name: config.artifact_file.clone(),
		contents: render::render_module(&model),
	}))
}

#[cfg(test)]
mod tests;
