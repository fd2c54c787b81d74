//! Registered message type descriptors.

use std::any::Any;
use std::fmt;

use crate::identifier::Identifier;
use crate::message::{Message, TypeToken};

/// Produces a fresh zero-valued message.
pub type Constructor = fn() -> Box<dyn Message>;

/// Immutable binding of a native message type to its identifier.
pub struct MessageType {
	identifier: Identifier,
	token: TypeToken,
	constructor: Constructor,
}

impl MessageType {
	/// Builds the descriptor for `T` using its [`Default`] value as the zero value.
	pub(crate) fn new<T: Message + Default>(identifier: Identifier) -> Self {
		Self {
			identifier,
			token: TypeToken::of::<T>(),
			constructor: zero::<T>,
		}
	}

	/// The normalized identifier.
	pub fn identifier(&self) -> &Identifier {
		&self.identifier
	}

	/// The native type this descriptor is bound to.
	pub fn token(&self) -> TypeToken {
		self.token
	}

	/// Fully qualified name of the native type.
	pub fn name(&self) -> &'static str {
		self.token.name()
	}

	/// Returns true if this descriptor is bound to `T`.
	pub fn is<T: Message>(&self) -> bool {
		self.token == TypeToken::of::<T>()
	}

	/// Constructs a fresh zero-valued instance of the bound type.
	pub fn new_instance(&self) -> Box<dyn Message> {
		(self.constructor)()
	}

	/// Constructs a fresh zero-valued instance, typed as `T`.
	///
	/// Returns `None` if this descriptor is bound to a different type.
	pub fn new_instance_of<T: Message>(&self) -> Option<T> {
		if !self.is::<T>() {
			return None;
		}
		let any: Box<dyn Any> = self.new_instance();
		any.downcast::<T>().ok().map(|boxed| *boxed)
	}
}

fn zero<T: Message + Default>() -> Box<dyn Message> {
	Box::new(T::default())
}

impl fmt::Debug for MessageType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MessageType")
			.field("identifier", &self.identifier)
			.field("type", &self.token)
			.finish()
	}
}

impl fmt::Display for MessageType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.token, self.identifier)
	}
}
