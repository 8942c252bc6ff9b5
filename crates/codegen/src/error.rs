use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that reject a whole generation pass.
///
/// Malformed declarations are never errors; they are unmarked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
	/// Two distinct component names map to the same typed-getter identifier.
	#[error("accessor `{accessor}` would be generated for both `{first}` and `{second}`")]
	AccessorCollision {
		accessor: String,
		first: String,
		second: String,
	},
	/// A typed getter would shadow a built-in registry method.
	#[error("accessor `{accessor}` for `{name}` shadows a built-in registry method")]
	ReservedAccessor { accessor: String, name: String },
	/// The configured prefix and the component name do not form an identifier.
	#[error("accessor `{accessor}` for `{name}` is not a valid identifier")]
	InvalidAccessor { accessor: String, name: String },
	/// Generic declarations cannot be stored in a closed component set.
	#[error("component `{name}` has generic parameters")]
	GenericComponent { name: String },
	#[error("invalid {what} path `{value}`")]
	InvalidPath { what: &'static str, value: String },
}

/// Failure to hand an artifact to its destination.
#[derive(Debug, Error)]
pub enum SinkError {
	#[error("failed to write {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl SinkError {
	pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
		let path = path.into();
		move |source| Self::Io { path, source }
	}
}

/// Failure to read the source corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
	#[error("no lib.rs or main.rs in {}", .0.display())]
	NoCrateRoot(PathBuf),
	#[error("failed to walk source tree: {0}")]
	Walk(#[from] walkdir::Error),
	#[error("failed to read {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Errors surfaced to a build script.
#[derive(Debug, Error)]
pub enum BuildError {
	#[error("environment variable {0} is not set")]
	MissingEnv(&'static str),
	#[error(transparent)]
	Corpus(#[from] CorpusError),
	#[error(transparent)]
	Generate(#[from] GenerateError),
	#[error(transparent)]
	Sink(#[from] SinkError),
}
