//! Token rendering of a [`RegistryModel`].

use proc_macro2::TokenStream;
use quote::quote;

use super::model::RegistryModel;

const HEADER: &str = "// @generated by compreg-codegen. Do not edit.";

/// Renders the full module text: a fixed header followed by the registry tokens.
pub(crate) fn render_module(model: &RegistryModel) -> String {
	let names: Vec<&str> = model.entries.iter().map(|entry| entry.name.as_str()).collect();
	format!(
		"{HEADER}\n// Components: {}\n{}\n",
		names.join(", "),
		render(model)
	)
}

pub(crate) fn render(model: &RegistryModel) -> TokenStream {
	let runtime = &model.runtime;

	let variants = model.entries.iter().map(|entry| {
		let variant = &entry.variant;
		let ty = &entry.ty;
		quote! { #variant(#ty) }
	});

	let type_names = model.entries.iter().map(|entry| {
		let variant = &entry.variant;
		let name = &entry.name;
		quote! { Self::#variant(_) => #name }
	});

	let memberships = model.entries.iter().map(|entry| {
		let variant = &entry.variant;
		let ty = &entry.ty;
		quote! {
			impl ::core::convert::From<#ty> for AnyComponent {
				fn from(component: #ty) -> Self {
					Self::#variant(component)
				}
			}

			impl #runtime::Member<AnyComponent> for #ty {
				fn project(component: &AnyComponent) -> ::core::option::Option<&Self> {
					match component {
						AnyComponent::#variant(inner) => ::core::option::Option::Some(inner),
						#[allow(unreachable_patterns)]
						_ => ::core::option::Option::None,
					}
				}

				fn project_mut(component: &mut AnyComponent) -> ::core::option::Option<&mut Self> {
					match component {
						AnyComponent::#variant(inner) => ::core::option::Option::Some(inner),
						#[allow(unreachable_patterns)]
						_ => ::core::option::Option::None,
					}
				}
			}
		}
	});

	let getters = model.entries.iter().filter_map(|entry| {
		let accessor = entry.accessor.as_ref()?;
		let ty = &entry.ty;
		let doc = format!(" Returns the `{}` registered under `name`.", entry.name);
		Some(quote! {
			#[doc = #doc]
			pub fn #accessor(&self, name: &str) -> ::core::option::Option<&#ty> {
				self.get::<#ty>(name)
			}
		})
	});

	quote! {
		/// Closed set of component types discovered at build time.
		pub enum AnyComponent {
			#(#variants,)*
		}

		impl #runtime::ComponentSet for AnyComponent {
			fn type_name(&self) -> &'static str {
				match self {
					#(#type_names,)*
				}
			}
		}

		#(#memberships)*

		/// Name-keyed registry over the discovered component types.
		pub struct ComponentRegistry {
			inner: #runtime::Registry<AnyComponent>,
		}

		impl ComponentRegistry {
			/// Creates an empty registry.
			pub fn new() -> Self {
				Self {
					inner: #runtime::Registry::new(),
				}
			}

			/// Stores `component` under `name`; the last registration for a name wins.
			pub fn register(
				&mut self,
				name: impl ::core::convert::Into<::std::string::String>,
				component: impl ::core::convert::Into<AnyComponent>,
			) -> ::core::option::Option<AnyComponent> {
				self.inner.register(name, component.into())
			}

			/// Returns the component registered under `name` if it is a `T`.
			pub fn get<T: #runtime::Member<AnyComponent>>(&self, name: &str) -> ::core::option::Option<&T> {
				self.inner.get::<T>(name)
			}

			/// Mutable counterpart of `get`.
			pub fn get_mut<T: #runtime::Member<AnyComponent>>(&mut self, name: &str) -> ::core::option::Option<&mut T> {
				self.inner.get_mut::<T>(name)
			}

			pub fn len(&self) -> usize {
				self.inner.len()
			}

			pub fn is_empty(&self) -> bool {
				self.inner.is_empty()
			}

			/// Lists every registration in insertion order with its component type.
			pub fn list_all(&self) -> ::std::vec::Vec<#runtime::Listing<'_>> {
				self.inner.list_all()
			}

			#(#getters)*
		}

		impl ::core::default::Default for ComponentRegistry {
			fn default() -> Self {
				Self::new()
			}
		}
	}
}
