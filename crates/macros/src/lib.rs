//! Procedural macros for compreg.
//!
//! Provides the marker attribute read by `compreg-codegen`:
//! * `#[Component]` - designates a type for the generated component registry

use proc_macro::TokenStream;

/// Marker attribute implementation.
mod component;

/// Marks a struct, enum or union for inclusion in the generated component registry.
///
/// The attribute takes no arguments and leaves the item untouched; discovery happens at
/// build time by scanning sources for it.
///
/// ```ignore
/// use compreg_macros::Component;
///
/// #[Component]
/// pub struct TestLoggerComponent;
/// ```
#[allow(non_snake_case)]
#[proc_macro_attribute]
pub fn Component(attr: TokenStream, item: TokenStream) -> TokenStream {
	component::mark_component(attr.into(), item.into()).into()
}
