//! Process-wide message type registry.
//!
//! Associates application-defined message types with stable, externally-visible identifiers so
//! engines can translate between identifiers persisted in logs and streams and native types.
//!
//! # Modules
//!
//! - [`identifier`] - Identifier validation and normalization
//! - [`message`] - Message contracts and type tokens
//! - [`index`] - Snapshot storage, registration and lookup
//! - [`route`] - Handler routes built from registered types
//! - [`declare`] - Declarative registration via `inventory`
//!
//! # Usage
//!
//! ```ignore
//! #[derive(Debug, Default, Message, Event)]
//! struct OrderPlaced;
//!
//! courier_registry::register_event::<OrderPlaced>("65f9620a-65c1-434e-8292-60cd7938c4de")?;
//!
//! let entry = courier_registry::find_by_identifier("65F9620A-65C1-434E-8292-60CD7938C4DE")?;
//! assert!(entry.is_some_and(|e| e.is::<OrderPlaced>()));
//! ```
//!
//! Registration is append-only and conventionally done once at startup. Every registration
//! error is a programming mistake; callers should abort rather than recover.

extern crate self as courier_registry;

#[cfg(feature = "declare")]
pub mod declare;
pub mod descriptor;
pub mod identifier;
pub mod index;
pub mod message;
pub mod route;

use std::sync::Arc;

/// Contract derives accept generic message types and reject types that cannot be messages.
///
/// A generic type gets the contract whenever its parameters are `Send + Sync + Debug + 'static`:
///
/// ```rust
/// use courier_registry::{Event, Message, Registry};
///
/// #[derive(Debug, Default, Message, Event)]
/// struct Envelope<T> {
///     inner: T,
/// }
///
/// let registry = Registry::new("doc");
/// let entry = registry
///     .register_event::<Envelope<u32>>("9c2e4a6b-8d0f-4123-a456-789abcdef012")
///     .unwrap();
/// assert_eq!(entry.new_instance_of::<Envelope<u32>>().unwrap().inner, 0);
/// ```
///
/// Unions are rejected:
///
/// ```compile_fail
/// use courier_registry::Message;
///
/// #[derive(Message)]
/// union Raw {
///     word: u32,
/// }
/// ```
///
/// Borrowing types are rejected:
///
/// ```compile_fail
/// use courier_registry::Message;
///
/// #[derive(Debug, Message)]
/// struct Borrowed<'a> {
///     name: &'a str,
/// }
/// ```
#[cfg(all(doctest, feature = "derive"))]
mod derive_rejections {}

#[cfg(feature = "derive")]
pub use courier_macros::{Command, Event, Message, Timeout};
#[cfg(feature = "declare")]
pub use declare::register_declared;
pub use descriptor::{Constructor, MessageType};
pub use identifier::{Defect, Identifier, IdentifierError};
#[cfg(feature = "declare")]
#[doc(hidden)]
pub use inventory;
pub use index::{LookupError, RegisterError, Registry, Snapshot, SnapshotGuard};
pub use message::{Command, Event, Message, MessageKind, Timeout, TypeToken};
pub use route::{Route, RouteKind};

/// Registers `T` as a command type in the global registry.
pub fn register_command<T: Command + Default>(
	identifier: &str,
) -> Result<Arc<MessageType>, RegisterError> {
	Registry::global().register_command::<T>(identifier)
}

/// Registers `T` as an event type in the global registry.
pub fn register_event<T: Event + Default>(
	identifier: &str,
) -> Result<Arc<MessageType>, RegisterError> {
	Registry::global().register_event::<T>(identifier)
}

/// Registers `T` as a timeout type in the global registry.
pub fn register_timeout<T: Timeout + Default>(
	identifier: &str,
) -> Result<Arc<MessageType>, RegisterError> {
	Registry::global().register_timeout::<T>(identifier)
}

/// Looks up `T` in the global registry.
pub fn find_by_type<T: Message>() -> Option<Arc<MessageType>> {
	Registry::global().by_type::<T>()
}

/// Looks up an identifier, in any letter case, in the global registry.
pub fn find_by_identifier(identifier: &str) -> Result<Option<Arc<MessageType>>, IdentifierError> {
	Registry::global().by_identifier(identifier)
}

/// Returns a guard over every message type currently in the global registry.
pub fn all() -> SnapshotGuard {
	Registry::global().snapshot_guard()
}
