//! Message type declarations via `inventory`.
//!
//! Each [`command!`](crate::command), [`event!`](crate::event) or [`timeout!`](crate::timeout)
//! invocation creates a `MessageDecl` and submits it via `inventory::submit!`. At startup,
//! [`register_declared`] collects every submitted declaration and registers it, so declared
//! types follow exactly the same rules as explicit registration.

use std::sync::Arc;

use crate::descriptor::MessageType;
use crate::index::{RegisterError, Registry};
use crate::message::MessageKind;

/// Static registration entry collected via `inventory`.
pub struct MessageDecl {
	/// Identifier as written at the declaration site.
	pub identifier: &'static str,
	pub kind: MessageKind,
	/// Crate that declared the type.
	pub crate_name: &'static str,
	/// Registers the declared type with the given identifier.
	pub register: fn(&Registry, &str) -> Result<Arc<MessageType>, RegisterError>,
}

/// Wrapper for `inventory::collect!`.
pub struct MessageDeclReg(pub &'static MessageDecl);

inventory::collect!(MessageDeclReg);

/// Registers every declared message type with `registry`.
///
/// Declarations are applied in identifier order. Stops at the first failure.
pub fn register_declared(registry: &Registry) -> Result<usize, RegisterError> {
	let mut decls: Vec<&'static MessageDecl> = inventory::iter::<MessageDeclReg>
		.into_iter()
		.map(|reg| reg.0)
		.collect();
	decls.sort_by(|a, b| a.identifier.cmp(b.identifier));

	for decl in &decls {
		tracing::trace!(
			registry = registry.label(),
			identifier = decl.identifier,
			kind = %decl.kind,
			crate_name = decl.crate_name,
			"registering declared message type"
		);
		(decl.register)(registry, decl.identifier)?;
	}

	tracing::debug!(
		registry = registry.label(),
		count = decls.len(),
		"declared message types registered"
	);
	Ok(decls.len())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __declare_message {
	($register:ident, $kind:ident, $ty:ty, $id:expr) => {
		const _: () = {
			static DECL: $crate::declare::MessageDecl = $crate::declare::MessageDecl {
				identifier: $id,
				kind: $crate::MessageKind::$kind,
				crate_name: env!("CARGO_PKG_NAME"),
				register: |registry, identifier| registry.$register::<$ty>(identifier),
			};
			$crate::inventory::submit!($crate::declare::MessageDeclReg(&DECL));
		};
	};
}

/// Declares a command type for [`register_declared`].
///
/// ```ignore
/// courier_registry::command!(PlaceOrder, "4e1b2a0c-9f51-4d3e-b0b7-6b9c1f0e2a11");
/// ```
#[macro_export]
macro_rules! command {
	($ty:ty, $id:expr $(,)?) => {
		$crate::__declare_message!(register_command, Command, $ty, $id);
	};
}

/// Declares an event type for [`register_declared`].
#[macro_export]
macro_rules! event {
	($ty:ty, $id:expr $(,)?) => {
		$crate::__declare_message!(register_event, Event, $ty, $id);
	};
}

/// Declares a timeout type for [`register_declared`].
#[macro_export]
macro_rules! timeout {
	($ty:ty, $id:expr $(,)?) => {
		$crate::__declare_message!(register_timeout, Timeout, $ty, $id);
	};
}
