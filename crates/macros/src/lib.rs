//! Procedural macros for courier message contracts.
//!
//! Provides derive macros:
//! * `#[derive(Message)]` - implements the common message contract
//! * `#[derive(Command)]`, `#[derive(Event)]`, `#[derive(Timeout)]` - implement a category
//!
//! A message type derives `Message` plus exactly one category:
//!
//! ```ignore
//! #[derive(Debug, Default, Message, Event)]
//! pub struct OrderPlaced {
//!     pub order_id: String,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Marker-trait derive implementation.
mod contract;

fn expand(input: TokenStream, contract: &str) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	contract::derive_contract(input, contract)
		.unwrap_or_else(syn::Error::into_compile_error)
		.into()
}

/// Implements `courier_registry::Message`.
#[proc_macro_derive(Message)]
pub fn derive_message(input: TokenStream) -> TokenStream {
	expand(input, "Message")
}

/// Implements `courier_registry::Command`.
#[proc_macro_derive(Command)]
pub fn derive_command(input: TokenStream) -> TokenStream {
	expand(input, "Command")
}

/// Implements `courier_registry::Event`.
#[proc_macro_derive(Event)]
pub fn derive_event(input: TokenStream) -> TokenStream {
	expand(input, "Event")
}

/// Implements `courier_registry::Timeout`.
#[proc_macro_derive(Timeout)]
pub fn derive_timeout(input: TokenStream) -> TokenStream {
	expand(input, "Timeout")
}
