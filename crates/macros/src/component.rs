//! `#[Component]` marker validation.

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::Item;

/// Returns `item` unchanged, followed by a compile error if the marker is misused.
pub(crate) fn mark_component(attr: TokenStream, item: TokenStream) -> TokenStream {
	match check(attr, item.clone()) {
		Ok(()) => item,
		Err(err) => {
			let mut out = item;
			out.extend(err.to_compile_error());
			out
		}
	}
}

fn check(attr: TokenStream, item: TokenStream) -> syn::Result<()> {
	if !attr.is_empty() {
		return Err(syn::Error::new_spanned(attr, "`#[Component]` takes no arguments"));
	}
	match syn::parse2::<Item>(item)? {
		Item::Struct(_) | Item::Enum(_) | Item::Union(_) => Ok(()),
		other => Err(syn::Error::new_spanned(
			other.into_token_stream(),
			"`#[Component]` can only be applied to structs, enums and unions",
		)),
	}
}

#[cfg(test)]
mod tests;
