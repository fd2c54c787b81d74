use crate::identifier::{Identifier, IdentifierError};
use crate::message::MessageKind;

/// Registration failure.
///
/// Every variant is a configuration mistake in the registering program. Applications register
/// during startup and are expected to abort on any of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
	#[error("cannot register {message_type}: {source}")]
	Identifier {
		message_type: &'static str,
		#[source]
		source: IdentifierError,
	},
	#[error(
		"cannot register {message_type}: it refers to {referent}, which is already a message type by value; register {referent} instead"
	)]
	ReceiverMismatch {
		message_type: &'static str,
		referent: &'static str,
	},
	#[error("{message_type} is already registered with identifier {identifier}")]
	AlreadyRegistered {
		message_type: &'static str,
		identifier: Identifier,
	},
	#[error(
		"cannot register {message_type} with identifier {identifier}: it is already registered with identifier {existing}"
	)]
	TypeConflict {
		message_type: &'static str,
		identifier: Identifier,
		existing: Identifier,
	},
	#[error(
		"cannot register {message_type} with identifier {identifier}: the identifier is already bound to {existing}"
	)]
	IdentifierConflict {
		message_type: &'static str,
		identifier: Identifier,
		existing: &'static str,
	},
}

/// Lookup-or-fail failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
	#[error("{message_type} is not a registered {kind} type, did you forget to call {}()?", .kind.register_fn())]
	NotRegistered {
		message_type: &'static str,
		kind: MessageKind,
	},
}
