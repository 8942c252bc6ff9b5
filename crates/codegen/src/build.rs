//! Build-script entry point.
//!
//! ```ignore
//! // build.rs
//! fn main() -> Result<(), compreg_codegen::BuildError> {
//!     let ctx = compreg_codegen::BuildCtx::from_env()?;
//!     ctx.generate(compreg_codegen::GeneratorConfig::default())?;
//!     Ok(())
//! }
//!
//! // lib.rs
//! include!(concat!(env!("OUT_DIR"), "/component_registry.rs"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::GeneratorConfig;
use crate::corpus;
use crate::error::{BuildError, CorpusError, SinkError};
use crate::session::{Generator, Output};
use crate::sink::OutDirSink;

/// Locations Cargo hands to a build script.
#[derive(Debug, Clone)]
pub struct BuildCtx {
	pub manifest_dir: PathBuf,
	pub out_dir: PathBuf,
}

impl BuildCtx {
	pub fn new(manifest_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
		Self {
			manifest_dir: manifest_dir.into(),
			out_dir: out_dir.into(),
		}
	}

	/// Reads `CARGO_MANIFEST_DIR` and `OUT_DIR`.
	pub fn from_env() -> Result<Self, BuildError> {
		let manifest_dir =
			std::env::var_os("CARGO_MANIFEST_DIR").ok_or(BuildError::MissingEnv("CARGO_MANIFEST_DIR"))?;
		let out_dir = std::env::var_os("OUT_DIR").ok_or(BuildError::MissingEnv("OUT_DIR"))?;
		Ok(Self::new(manifest_dir, out_dir))
	}

	/// The crate's `src/` directory, the corpus that gets scanned.
	pub fn source_root(&self) -> PathBuf {
		self.manifest_dir.join("src")
	}

	pub fn rerun_if_changed(&self, path: &Path) {
		println!("cargo:rerun-if-changed={}", path.display());
	}

	/// Registers `root` and every file below it, so adding a module file also reruns.
	pub fn rerun_tree(&self, root: &Path) -> Result<(), CorpusError> {
		self.rerun_if_changed(root);
		for entry in WalkDir::new(root).sort_by_file_name() {
			let entry = entry?;
			if entry.file_type().is_file() {
				self.rerun_if_changed(entry.path());
			}
		}
		Ok(())
	}

	/// Reads the crate from `src/`, runs one generation pass and writes the artifact into `OUT_DIR`.
	///
	/// When the pass is suppressed a previously written artifact is removed, so a crate that
	/// lost its last component fails at its `include!` instead of compiling stale code.
	pub fn generate(&self, config: GeneratorConfig) -> Result<Output, BuildError> {
		let root = self.source_root();
		let corpus = corpus::scan(&root)?;
		self.rerun_tree(&root)?;
		// `#[path]` may reach outside `src/`.
		for file in corpus.files() {
			self.rerun_if_changed(file);
		}

		let mut generator = Generator::new(config);
		let output = generator.run(corpus.into_nodes())?;

		let mut sink = OutDirSink::new(&self.out_dir);
		output.publish(&mut sink)?;
		if output == Output::Suppressed {
			let stale = sink.path_for(generator.config().artifact_file_name());
			if stale.exists() {
				fs::remove_file(&stale).map_err(SinkError::io(&stale))?;
				tracing::info!(path = %stale.display(), "removed stale registry artifact");
			}
		}
		Ok(output)
	}
}
