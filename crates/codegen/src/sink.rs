//! Destinations for emitted artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use crate::emit::Artifact;
use crate::error::SinkError;

/// Receives emitted artifacts. The core never reads a published artifact back.
pub trait OutputSink {
	fn publish(&mut self, artifact: &Artifact) -> Result<(), SinkError>;
}

/// Collects artifacts in memory.
impl OutputSink for Vec<Artifact> {
	fn publish(&mut self, artifact: &Artifact) -> Result<(), SinkError> {
		self.push(artifact.clone());
		Ok(())
	}
}

/// Writes artifacts as files into a directory, typically Cargo's `OUT_DIR`.
#[derive(Debug, Clone)]
pub struct OutDirSink {
	dir: PathBuf,
}

impl OutDirSink {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	/// Location an artifact named `file_name` is written to.
	pub fn path_for(&self, file_name: &str) -> PathBuf {
		self.dir.join(file_name)
	}
}

impl OutputSink for OutDirSink {
	fn publish(&mut self, artifact: &Artifact) -> Result<(), SinkError> {
		let path = self.path_for(artifact.file_name());
		// Leave identical files untouched so their mtime does not trigger rebuilds.
		if fs::read_to_string(&path).is_ok_and(|existing| existing == artifact.contents()) {
			tracing::debug!(path = %path.display(), "artifact already up to date");
			return Ok(());
		}
		fs::create_dir_all(&self.dir).map_err(SinkError::io(&self.dir))?;
		fs::write(&path, artifact.contents()).map_err(SinkError::io(&path))?;
		tracing::info!(path = %path.display(), bytes = artifact.contents().len(), "artifact written");
		Ok(())
	}
}
