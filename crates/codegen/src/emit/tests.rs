use std::sync::Arc;

use quote::ToTokens;
use syn::{ImplItem, Item};

use super::{Artifact, RegistryModel, emit};
use crate::aggregate::AcceptedSet;
use crate::config::{CollisionPolicy, GeneratorConfig};
use crate::error::GenerateError;
use crate::marker::Descriptor;
use crate::test_fixtures::{descriptor, descriptor_in};

fn set_of(names: &[&str]) -> AcceptedSet {
	AcceptedSet::collect(names.iter().map(|name| descriptor(name)))
}

fn emit_default(set: &AcceptedSet) -> Artifact {
	emit(set, &GeneratorConfig::default())
		.expect("emission succeeds")
		.expect("non-empty set yields an artifact")
}

fn parse(artifact: &Artifact) -> syn::File {
	syn::parse_file(artifact.contents()).expect("artifact must be valid Rust")
}

/// Names of the inherent methods on `ComponentRegistry`.
fn registry_methods(file: &syn::File) -> Vec<String> {
	file.items
		.iter()
		.filter_map(|item| match item {
			Item::Impl(block) if block.trait_.is_none() => Some(block),
			_ => None,
		})
		.flat_map(|block| block.items.iter())
		.filter_map(|item| match item {
			ImplItem::Fn(method) => Some(method.sig.ident.to_string()),
			_ => None,
		})
		.collect()
}

fn variants(file: &syn::File) -> Vec<String> {
	file.items
		.iter()
		.find_map(|item| match item {
			Item::Enum(set) if set.ident == "AnyComponent" => Some(set),
			_ => None,
		})
		.expect("AnyComponent enum")
		.variants
		.iter()
		.map(|variant| variant.ident.to_string())
		.collect()
}

fn getter_return_type(file: &syn::File, getter: &str) -> String {
	file.items
		.iter()
		.filter_map(|item| match item {
			Item::Impl(block) if block.trait_.is_none() => Some(block),
			_ => None,
		})
		.flat_map(|block| block.items.iter())
		.find_map(|item| match item {
			ImplItem::Fn(method) if method.sig.ident == getter => Some(method.sig.output.to_token_stream().to_string()),
			_ => None,
		})
		.unwrap_or_else(|| panic!("getter {getter} not generated"))
}

/// One marked `TestLoggerComponent` yields the full registry contract.
#[test]
fn test_single_component_contract() {
	let artifact = emit_default(&set_of(&["TestLoggerComponent"]));
	assert_eq!(artifact.file_name(), "component_registry.rs");

	let file = parse(&artifact);
	assert_eq!(
		registry_methods(&file),
		[
			"new",
			"register",
			"get",
			"get_mut",
			"len",
			"is_empty",
			"list_all",
			"get_test_logger_component"
		]
	);
	assert_eq!(variants(&file), ["TestLoggerComponent"]);
	let output = getter_return_type(&file, "get_test_logger_component");
	assert!(output.contains("crate :: TestLoggerComponent"), "{output}");
}

#[test]
fn test_header_lists_components() {
	let artifact = emit_default(&set_of(&["Logger", "Clock"]));
	let mut lines = artifact.contents().lines();
	assert_eq!(lines.next(), Some("// @generated by compreg-codegen. Do not edit."));
	assert_eq!(lines.next(), Some("// Components: Logger, Clock"));
}

/// An empty set produces no artifact, not an empty module.
#[test]
fn test_empty_set_emits_nothing() {
	let empty = AcceptedSet::collect(Vec::<Arc<Descriptor>>::new());
	assert_eq!(emit(&empty, &GeneratorConfig::default()), Ok(None));
}

/// Separately built but equal sets render byte-identical artifacts.
#[test]
fn test_emit_is_deterministic() {
	let names = ["Zeta", "Alpha", "Mid", "HttpClient"];
	let first = emit_default(&set_of(&names));
	let second = emit_default(&set_of(&names));
	assert_eq!(first.contents().as_bytes(), second.contents().as_bytes());
}

#[test]
fn test_order_follows_accepted_set() {
	let file = parse(&emit_default(&set_of(&["Zeta", "Alpha"])));
	assert_eq!(variants(&file), ["Zeta", "Alpha"]);
}

#[test]
fn test_module_path_in_type() {
	let set = AcceptedSet::collect([descriptor_in("FileSink", &["sinks", "file"])]);
	let file = parse(&emit_default(&set));
	let output = getter_return_type(&file, "get_file_sink");
	assert!(output.contains("crate :: sinks :: file :: FileSink"), "{output}");
}

#[test]
fn test_accessor_collision_rejected_by_default() {
	let result = emit(&set_of(&["HttpServer", "HTTPServer"]), &GeneratorConfig::default());
	assert_eq!(
		result,
		Err(GenerateError::AccessorCollision {
			accessor: "get_http_server".to_owned(),
			first: "HttpServer".to_owned(),
			second: "HTTPServer".to_owned(),
		})
	);
}

/// Under the shadow policy the later component keeps the accessor.
#[test]
fn test_accessor_collision_shadow_policy() {
	let config = GeneratorConfig::default().collision_policy(CollisionPolicy::Shadow);
	let set = set_of(&["HttpServer", "HTTPServer"]);

	let model = RegistryModel::build(&set, &config).expect("shadowing is allowed");
	let accessors: Vec<_> = model
		.entries()
		.iter()
		.map(|entry| (entry.name(), entry.accessor().map(ToString::to_string)))
		.collect();
	assert_eq!(
		accessors,
		[
			("HttpServer", None),
			("HTTPServer", Some("get_http_server".to_owned()))
		]
	);

	let file = parse(&emit(&set, &config).unwrap().unwrap());
	assert_eq!(variants(&file), ["HttpServer", "HTTPServer"]);
	let getters = registry_methods(&file)
		.into_iter()
		.filter(|method| method == "get_http_server")
		.count();
	assert_eq!(getters, 1);
	let output = getter_return_type(&file, "get_http_server");
	assert!(output.contains("HTTPServer"), "{output}");
}

#[test]
fn test_reserved_accessor_rejected() {
	let config = GeneratorConfig::default().accessor_prefix("");
	assert_eq!(
		emit(&set_of(&["Len"]), &config),
		Err(GenerateError::ReservedAccessor {
			accessor: "len".to_owned(),
			name: "Len".to_owned(),
		})
	);
}

#[test]
fn test_invalid_accessor_rejected() {
	let config = GeneratorConfig::default().accessor_prefix("");
	assert!(matches!(
		emit(&set_of(&["Type"]), &config),
		Err(GenerateError::InvalidAccessor { .. })
	));

	let config = GeneratorConfig::default().accessor_prefix("9");
	assert!(matches!(
		emit(&set_of(&["Logger"]), &config),
		Err(GenerateError::InvalidAccessor { .. })
	));
}

#[test]
fn test_generic_component_rejected() {
	let generic = Arc::new(Descriptor::new("Pool", Vec::<String>::new()).generic(true));
	assert_eq!(
		emit(&AcceptedSet::collect([generic]), &GeneratorConfig::default()),
		Err(GenerateError::GenericComponent {
			name: "Pool".to_owned()
		})
	);
}

#[test]
fn test_invalid_configured_path_rejected() {
	let config = GeneratorConfig::default().runtime_path("not a path!");
	assert!(matches!(
		emit(&set_of(&["Logger"]), &config),
		Err(GenerateError::InvalidPath { what: "runtime", .. })
	));
}

#[test]
fn test_custom_runtime_and_prefix() {
	let config = GeneratorConfig::default()
		.runtime_path("::my_app::registry")
		.accessor_prefix("component_")
		.artifact_file("components.rs");
	let artifact = emit(&set_of(&["Logger"]), &config).unwrap().unwrap();

	assert_eq!(artifact.file_name(), "components.rs");
	assert!(artifact.contents().contains(":: my_app :: registry :: Registry"));
	assert!(registry_methods(&parse(&artifact)).contains(&"component_logger".to_owned()));
}

/// Keyword names declared with a raw prefix come back raw in variants and type paths.
#[test]
fn test_keyword_names_render_raw() {
	let artifact = emit_default(&AcceptedSet::collect([descriptor_in("match", &["type"])]));
	let file = parse(&artifact);

	assert_eq!(variants(&file), ["r#match"]);
	assert!(getter_return_type(&file, "get_match").contains("crate :: r#type :: r#match"));
}

#[test]
fn test_model_debug_shows_paths() {
	let model = RegistryModel::build(&set_of(&["TestLoggerComponent"]), &GeneratorConfig::default())
		.expect("valid set");
	let debug = format!("{model:?}");

	assert!(debug.contains(":: compreg_runtime"), "{debug}");
	assert!(debug.contains("crate :: TestLoggerComponent"), "{debug}");
}
