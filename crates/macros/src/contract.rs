use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, parse_quote};

pub fn derive_contract(mut input: DeriveInput, contract: &str) -> syn::Result<TokenStream> {
	if let Data::Union(data) = &input.data {
		return Err(syn::Error::new(
			data.union_token.span,
			format!("{contract} cannot be derived for unions"),
		));
	}

	if let Some(lifetime) = input.generics.lifetimes().next() {
		return Err(syn::Error::new_spanned(
			lifetime,
			"message types must be 'static and cannot borrow",
		));
	}

	let params: Vec<_> = input
		.generics
		.type_params()
		.map(|param| param.ident.clone())
		.collect();
	let where_clause = input.generics.make_where_clause();
	for param in params {
		where_clause.predicates.push(parse_quote! {
			#param: ::core::marker::Send + ::core::marker::Sync + ::core::fmt::Debug + 'static
		});
	}

	let name = &input.ident;
	let contract = format_ident!("{}", contract);
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	Ok(quote! {
		impl #impl_generics ::courier_registry::#contract for #name #ty_generics #where_clause {}
	})
}
