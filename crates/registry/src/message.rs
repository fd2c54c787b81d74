//! Message contracts and type tokens.
//!
//! Applications describe their messages by implementing [`Message`] plus one of the category
//! contracts ([`Command`], [`Event`], [`Timeout`]). The registry only ever stores a
//! [`TypeToken`]; categories matter to the registration entry points and to routes, never to
//! the index itself.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Common contract for every message type.
pub trait Message: Any + Send + Sync + fmt::Debug {
	/// The by-value type this type refers to, when it is a by-reference representation.
	///
	/// Plain message types return `None`. `Box<T>` and `Arc<T>` return `T`.
	#[doc(hidden)]
	fn referent() -> Option<TypeToken>
	where
		Self: Sized,
	{
		None
	}
}

/// A message that requests an action.
pub trait Command: Message {}

/// A message that records something that has happened.
pub trait Event: Message {}

/// A message that a handler schedules for its own future delivery.
pub trait Timeout: Message {}

macro_rules! by_reference {
	($($ptr:ident),*) => {
		$(
			impl<T: Message> Message for $ptr<T> {
				fn referent() -> Option<TypeToken> {
					Some(TypeToken::of::<T>())
				}
			}
			impl<T: Command> Command for $ptr<T> {}
			impl<T: Event> Event for $ptr<T> {}
			impl<T: Timeout> Timeout for $ptr<T> {}
		)*
	};
}

by_reference!(Box, Arc);

/// Message category, used to name the registration function a type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
	Command,
	Event,
	Timeout,
}

impl MessageKind {
	/// Name of the registration function for this category.
	pub fn register_fn(self) -> &'static str {
		match self {
			MessageKind::Command => "register_command",
			MessageKind::Event => "register_event",
			MessageKind::Timeout => "register_timeout",
		}
	}
}

impl fmt::Display for MessageKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			MessageKind::Command => "command",
			MessageKind::Event => "event",
			MessageKind::Timeout => "timeout",
		})
	}
}

/// Language-level identity of a message type.
///
/// Equality and hashing use only the [`TypeId`]; the name is carried for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeToken {
	id: TypeId,
	name: &'static str,
}

impl TypeToken {
	/// Returns the token for `T`.
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: std::any::type_name::<T>(),
		}
	}

	pub fn type_id(&self) -> TypeId {
		self.id
	}

	/// Fully qualified type name.
	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl PartialEq for TypeToken {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for TypeToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

impl fmt::Display for TypeToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}
