use quote::quote;

use super::mark_component;

#[test]
fn test_struct_passes_through_unchanged() {
	let item = quote! { pub struct TestLoggerComponent { prefix: String } };
	let out = mark_component(quote! {}, item.clone());
	assert_eq!(out.to_string(), item.to_string());
}

#[test]
fn test_enum_and_union_accepted() {
	for item in [quote! { enum Mode { A, B } }, quote! { union Bits { a: u32, b: f32 } }] {
		let out = mark_component(quote! {}, item.clone());
		assert_eq!(out.to_string(), item.to_string());
	}
}

#[test]
fn test_arguments_rejected() {
	let out = mark_component(quote! { name = "x" }, quote! { struct A; });
	let text = out.to_string();
	assert!(text.contains("compile_error"), "{text}");
	assert!(text.contains("takes no arguments"), "{text}");
	assert!(text.starts_with("struct A ;"), "item must be kept: {text}");
}

#[test]
fn test_non_type_items_rejected() {
	for item in [quote! { fn build() {} }, quote! { trait Service {} }, quote! { static X: u8 = 0; }] {
		let text = mark_component(quote! {}, item).to_string();
		assert!(text.contains("can only be applied to structs"), "{text}");
	}
}
