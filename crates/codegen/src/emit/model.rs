//! Structured intermediate form of the generated registry.

use std::fmt;

use heck::ToSnakeCase;
use quote::ToTokens;
use rustc_hash::FxHashMap;
use syn::{Ident, Path, PathSegment};

use crate::aggregate::AcceptedSet;
use crate::config::{CollisionPolicy, GeneratorConfig};
use crate::error::GenerateError;
use crate::marker::Descriptor;

/// Methods of the generated `ComponentRegistry` that typed getters must not shadow.
pub(crate) const RESERVED_METHODS: &[&str] = &[
	"new", "register", "get", "get_mut", "len", "is_empty", "list_all",
];

/// One component of the registry, lowered for rendering.
#[derive(Clone)]
pub struct EntryModel {
	pub(crate) name: String,
	pub(crate) variant: Ident,
	pub(crate) ty: Path,
	/// `None` when a later entry shadowed this entry's typed getter.
	pub(crate) accessor: Option<Ident>,
}

impl EntryModel {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn accessor(&self) -> Option<&Ident> {
		self.accessor.as_ref()
	}
}

/// Validated, render-ready view of an [`AcceptedSet`].
#[derive(Clone)]
pub struct RegistryModel {
	pub(crate) runtime: Path,
	pub(crate) entries: Vec<EntryModel>,
}

impl fmt::Debug for EntryModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EntryModel")
			.field("name", &self.name)
			.field("variant", &self.variant)
			.field("ty", &tokens(&self.ty))
			.field("accessor", &self.accessor)
			.finish()
	}
}

impl fmt::Debug for RegistryModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RegistryModel")
			.field("runtime", &tokens(&self.runtime))
			.field("entries", &self.entries)
			.finish()
	}
}

impl RegistryModel {
	/// Lowers `set` into identifiers and type paths.
	///
	/// Fails on generic components, reserved or invalid accessors, unparsable configured paths
	/// and, under [`CollisionPolicy::Reject`], accessor collisions.
	pub fn build(set: &AcceptedSet, config: &GeneratorConfig) -> Result<Self, GenerateError> {
		let runtime = parse_path("runtime", &config.runtime_path)?;
		let root = parse_path("type root", &config.type_root)?;

		let mut entries: Vec<EntryModel> = Vec::with_capacity(set.len());
		let mut accessor_owner: FxHashMap<String, usize> = FxHashMap::default();

		for descriptor in set.iter() {
			let name = descriptor.name();
			if descriptor.is_generic() {
				return Err(GenerateError::GenericComponent { name: name.to_owned() });
			}

			let accessor = accessor_name(&config.accessor_prefix, name);
			if RESERVED_METHODS.contains(&accessor.as_str()) {
				return Err(GenerateError::ReservedAccessor {
					accessor,
					name: name.to_owned(),
				});
			}
			let accessor_ident =
				syn::parse_str::<Ident>(&accessor).map_err(|_| GenerateError::InvalidAccessor {
					accessor: accessor.clone(),
					name: name.to_owned(),
				})?;

			if let Some(&owner) = accessor_owner.get(&accessor) {
				let shadowed = &mut entries[owner];
				match config.collision_policy {
					CollisionPolicy::Reject => {
						return Err(GenerateError::AccessorCollision {
							accessor,
							first: shadowed.name.clone(),
							second: name.to_owned(),
						});
					}
					CollisionPolicy::Shadow => {
						tracing::warn!(
							accessor = %accessor,
							shadowed = %shadowed.name,
							by = name,
							"typed getter shadowed by a later component"
						);
						shadowed.accessor = None;
					}
				}
			}

			accessor_owner.insert(accessor, entries.len());
			entries.push(EntryModel {
				name: name.to_owned(),
				variant: ident("component", name)?,
				ty: type_path(&root, descriptor)?,
				accessor: Some(accessor_ident),
			});
		}

		Ok(Self { runtime, entries })
	}

	pub fn entries(&self) -> &[EntryModel] {
		&self.entries
	}
}

/// Typed-getter identifier for a component name, e.g. `get_test_logger_component`.
pub(crate) fn accessor_name(prefix: &str, name: &str) -> String {
	format!("{prefix}{}", name.to_snake_case())
}

/// `syn` types only implement `Debug` with its `extra-traits` feature.
fn tokens(path: &Path) -> String {
	path.to_token_stream().to_string()
}

fn parse_path(what: &'static str, value: &str) -> Result<Path, GenerateError> {
	syn::parse_str::<Path>(value).map_err(|_| GenerateError::InvalidPath {
		what,
		value: value.to_owned(),
	})
}

fn type_path(root: &Path, descriptor: &Descriptor) -> Result<Path, GenerateError> {
	let mut path = root.clone();
	for segment in descriptor.module_path() {
		path.segments.push(PathSegment::from(ident("module", segment)?));
	}
	path.segments.push(PathSegment::from(ident("component", descriptor.name())?));
	Ok(path)
}

/// Identifier for a name stored without its raw prefix; keywords come back raw (`r#match`).
fn ident(what: &'static str, name: &str) -> Result<Ident, GenerateError> {
	syn::parse_str::<Ident>(name)
		.or_else(|_| syn::parse_str::<Ident>(&format!("r#{name}")))
		.map_err(|_| GenerateError::InvalidPath {
			what,
			value: name.to_owned(),
		})
}
