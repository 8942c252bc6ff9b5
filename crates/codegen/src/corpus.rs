//! File-system declaration source.
//!
//! Follows the crate's module tree from its root file (`lib.rs`, else `main.rs`) and splits
//! every reached file into one [`DeclarationNode`] per item. Files that no `mod` declaration
//! reaches are not part of the crate and are never read.
//!
//! Out-of-line modules resolve the way rustc resolves them:
//!
//! | Declared in | `mod x;` | `#[path = "p"] mod x;` |
//! |-------------|----------|------------------------|
//! | `lib.rs`, `main.rs`, `mod.rs`, `#[path]` files | `dir/x.rs`, `dir/x/mod.rs` | `dir/p` |
//! | any other `a.rs` | `dir/a/x.rs`, `dir/a/x/mod.rs` | `dir/p` |
//!
//! Inside inline `mod m { .. }` blocks both forms gain an `m/` component, and `#[path]` is then
//! relative to the nested directory. Modules carrying `#[cfg(test)]` are skipped, inline or
//! not, because their types do not exist in regular builds.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use quote::ToTokens;
use rustc_hash::FxHashSet;
use syn::ext::IdentExt;
use syn::{Attribute, Expr, ExprLit, Ident, Item, Lit, Meta};

use crate::error::CorpusError;
use crate::node::{DeclarationNode, NodeKey};

/// Crate root candidates, in priority order.
const CRATE_ROOTS: [&str; 2] = ["lib.rs", "main.rs"];

/// Declarations read from a crate's module tree, with the files they came from.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
	files: Vec<PathBuf>,
	nodes: Vec<DeclarationNode>,
}

impl Corpus {
	/// Source files read, in module-tree order starting with the crate root.
	pub fn files(&self) -> &[PathBuf] {
		&self.files
	}

	pub fn nodes(&self) -> &[DeclarationNode] {
		&self.nodes
	}

	pub fn into_nodes(self) -> Vec<DeclarationNode> {
		self.nodes
	}
}

/// Items of one source file plus the out-of-line modules it declares.
#[derive(Debug, Clone, Default)]
pub struct ParsedSource {
	pub nodes: Vec<DeclarationNode>,
	pub modules: Vec<ModuleDecl>,
}

/// An out-of-line `mod name;` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDecl {
	/// Module name, raw prefix removed.
	pub name: String,
	/// Inline modules enclosing the declaration within its file, outermost first.
	pub inline: Vec<String>,
	/// Value of a `#[path = ".."]` attribute.
	pub path: Option<String>,
}

/// A file reached through the module tree.
struct ModuleFile {
	/// Relative to the scanned root.
	path: PathBuf,
	module_path: Vec<String>,
	/// Whether child modules live next to this file rather than in a directory named after it.
	owns_dir: bool,
}

/// Reads the crate whose sources live in `root`, starting at its crate root file.
pub fn scan(root: &Path) -> Result<Corpus, CorpusError> {
	let crate_root = CRATE_ROOTS
		.iter()
		.map(PathBuf::from)
		.find(|file| root.join(file).is_file())
		.ok_or_else(|| CorpusError::NoCrateRoot(root.to_path_buf()))?;

	let mut corpus = Corpus::default();
	let mut seen = FxHashSet::default();
	let mut pending = vec![ModuleFile {
		path: crate_root,
		module_path: Vec::new(),
		owns_dir: true,
	}];

	while let Some(module) = pending.pop() {
		if !seen.insert(module.path.clone()) {
			continue;
		}
		let full = root.join(&module.path);
		let text = fs::read_to_string(&full).map_err(|source| CorpusError::Read {
			path: full.clone(),
			source,
		})?;
		let file = key_path(&module.path);

		let parsed = parse_source(&file, &module.module_path, &text);
		tracing::trace!(file = %file, nodes = parsed.nodes.len(), "scanned source file");

		// Reversed so the stack pops children in declaration order.
		for decl in parsed.modules.iter().rev() {
			match resolve(root, &module, decl) {
				Some(child) => pending.push(child),
				None => tracing::debug!(file = %file, module = %decl.name, "module file not found, skipped"),
			}
		}
		corpus.nodes.extend(parsed.nodes);
		corpus.files.push(full);
	}

	tracing::debug!(
		root = %root.display(),
		files = corpus.files.len(),
		nodes = corpus.nodes.len(),
		"corpus scanned"
	);
	Ok(corpus)
}

/// Splits one source file into declaration nodes.
///
/// `file` is the node identity's file part and `module_path` the module the file defines. A
/// file that does not parse becomes a single opaque node, which the marker predicate rejects.
pub fn parse_source(file: &str, module_path: &[String], text: &str) -> ParsedSource {
	let file: Arc<str> = Arc::from(file);

	let parsed = match syn::parse_file(text) {
		Ok(parsed) => parsed,
		Err(err) => {
			tracing::debug!(file = %file, error = %err, "unparsable source kept as an opaque node");
			return ParsedSource {
				nodes: vec![DeclarationNode::new(NodeKey::new(file, 0), module_path.to_vec(), text)],
				modules: Vec::new(),
			};
		}
	};

	let mut out = ParsedSource::default();
	let mut walk = ItemWalk {
		file: &file,
		ordinal: 0,
		out: &mut out,
	};
	walk.items(module_path, &[], &parsed.items);
	out
}

struct ItemWalk<'a> {
	file: &'a Arc<str>,
	ordinal: u32,
	out: &'a mut ParsedSource,
}

impl ItemWalk<'_> {
	fn items(&mut self, module_path: &[String], inline: &[String], items: &[Item]) {
		let shared: Arc<[String]> = Arc::from(module_path);
		for item in items {
			if let Item::Mod(module) = item {
				if module.attrs.iter().any(is_cfg_test) {
					continue;
				}
				let name = module.ident.unraw().to_string();
				match &module.content {
					Some((_, children)) => {
						let mut nested_path = module_path.to_vec();
						nested_path.push(name.clone());
						let mut nested_inline = inline.to_vec();
						nested_inline.push(name);
						self.items(&nested_path, &nested_inline, children);
					}
					None => self.out.modules.push(ModuleDecl {
						name,
						inline: inline.to_vec(),
						path: path_attr(&module.attrs),
					}),
				}
				continue;
			}

			self.out.nodes.push(DeclarationNode::new(
				NodeKey::new(Arc::clone(self.file), self.ordinal),
				Arc::clone(&shared),
				item.to_token_stream().to_string(),
			));
			self.ordinal += 1;
		}
	}
}

/// Locates the file of `decl`, declared in `parent`.
fn resolve(root: &Path, parent: &ModuleFile, decl: &ModuleDecl) -> Option<ModuleFile> {
	let file_dir = parent.path.parent().map(Path::to_path_buf).unwrap_or_default();
	let mut dir = if parent.owns_dir {
		file_dir.clone()
	} else {
		file_dir.join(parent.path.file_stem()?)
	};
	dir.extend(&decl.inline);

	let mut module_path = parent.module_path.clone();
	module_path.extend(decl.inline.iter().cloned());
	module_path.push(decl.name.clone());

	if let Some(path) = &decl.path {
		let base = if decl.inline.is_empty() { file_dir } else { dir };
		let path = base.join(path);
		return root.join(&path).is_file().then_some(ModuleFile {
			path,
			module_path,
			owns_dir: true,
		});
	}

	let flat = dir.join(format!("{}.rs", decl.name));
	if root.join(&flat).is_file() {
		return Some(ModuleFile {
			path: flat,
			module_path,
			owns_dir: false,
		});
	}
	let nested = dir.join(&decl.name).join("mod.rs");
	root.join(&nested).is_file().then_some(ModuleFile {
		path: nested,
		module_path,
		owns_dir: true,
	})
}

/// `/`-separated form of a relative path, used as the node's file identity.
fn key_path(path: &Path) -> String {
	path.components()
		.filter_map(|component| match component {
			Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
			Component::ParentDir => Some("..".to_owned()),
			_ => None,
		})
		.collect::<Vec<_>>()
		.join("/")
}

fn is_cfg_test(attr: &Attribute) -> bool {
	attr.path().is_ident("cfg") && attr.parse_args::<Ident>().is_ok_and(|arg| arg == "test")
}

fn path_attr(attrs: &[Attribute]) -> Option<String> {
	attrs.iter().find_map(|attr| match &attr.meta {
		Meta::NameValue(meta) if meta.path.is_ident("path") => match &meta.value {
			Expr::Lit(ExprLit { lit: Lit::Str(value), .. }) => Some(value.value()),
			_ => None,
		},
		_ => None,
	})
}
