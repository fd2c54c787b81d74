//! Message routes.
//!
//! A route tells an engine how a handler relates to one message type. Routes are built from
//! registered types only: constructing one for a type that was never registered fails with
//! [`LookupError::NotRegistered`], naming the registration function that was missed.

use std::fmt;
use std::sync::Arc;

use crate::descriptor::MessageType;
use crate::index::{LookupError, Registry};
use crate::message::{Command, Event, Message, MessageKind, Timeout};

/// How a handler relates to a message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
	/// The handler accepts commands of this type.
	HandlesCommand,
	/// The handler may issue commands of this type.
	ExecutesCommand,
	/// The handler consumes events of this type.
	HandlesEvent,
	/// The handler may record events of this type.
	RecordsEvent,
	/// The handler may schedule timeouts of this type.
	SchedulesTimeout,
}

impl RouteKind {
	/// Category of message this route carries.
	pub fn message_kind(self) -> MessageKind {
		match self {
			RouteKind::HandlesCommand | RouteKind::ExecutesCommand => MessageKind::Command,
			RouteKind::HandlesEvent | RouteKind::RecordsEvent => MessageKind::Event,
			RouteKind::SchedulesTimeout => MessageKind::Timeout,
		}
	}
}

/// A route bound to a registered message type.
#[derive(Debug, Clone)]
pub struct Route {
	kind: RouteKind,
	message_type: Arc<MessageType>,
}

impl Route {
	fn new<T: Message>(registry: &Registry, kind: RouteKind) -> Result<Self, LookupError> {
		let message_type = registry.require::<T>(kind.message_kind())?;
		Ok(Self { kind, message_type })
	}

	pub fn handles_command<T: Command>(registry: &Registry) -> Result<Self, LookupError> {
		Self::new::<T>(registry, RouteKind::HandlesCommand)
	}

	pub fn executes_command<T: Command>(registry: &Registry) -> Result<Self, LookupError> {
		Self::new::<T>(registry, RouteKind::ExecutesCommand)
	}

	pub fn handles_event<T: Event>(registry: &Registry) -> Result<Self, LookupError> {
		Self::new::<T>(registry, RouteKind::HandlesEvent)
	}

	pub fn records_event<T: Event>(registry: &Registry) -> Result<Self, LookupError> {
		Self::new::<T>(registry, RouteKind::RecordsEvent)
	}

	pub fn schedules_timeout<T: Timeout>(registry: &Registry) -> Result<Self, LookupError> {
		Self::new::<T>(registry, RouteKind::SchedulesTimeout)
	}

	pub fn kind(&self) -> RouteKind {
		self.kind
	}

	pub fn message_kind(&self) -> MessageKind {
		self.kind.message_kind()
	}

	/// The registered descriptor this route carries.
	pub fn message_type(&self) -> &Arc<MessageType> {
		&self.message_type
	}
}

impl fmt::Display for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}({})", self.kind, self.message_type)
	}
}
