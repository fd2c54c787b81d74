//! Registry container with atomic publication.
//!
//! # Role
//!
//! This module provides the thread-safe entrypoint for reading and extending the registry.
//! It owns the CAS-based merge loop.
//!
//! # Invariants
//!
//! - Concurrent registrations must be linearizable (see `invariants::test_no_lost_updates`).
//! - Conflicts are checked against the snapshot being replaced, never a stale one (see
//!   `invariants::test_conflicting_race_admits_one`).

use std::any::TypeId;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use super::error::{LookupError, RegisterError};
use super::snapshot::{Snapshot, SnapshotGuard};
use crate::descriptor::MessageType;
use crate::identifier::{Identifier, IdentifierError};
use crate::message::{Command, Event, Message, MessageKind, Timeout, TypeToken};

static GLOBAL: LazyLock<Registry> = LazyLock::new(|| Registry::new("global"));

/// Append-only message type registry.
///
/// Readers load the current [`Snapshot`] without locking. Writers validate against the
/// snapshot they loaded, build a replacement and publish it with compare-and-swap, retrying
/// from the newer snapshot when another writer got there first.
pub struct Registry {
	label: &'static str,
	snap: ArcSwap<Snapshot>,
}

impl Registry {
	/// Creates an empty registry. `label` identifies it in logs.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			snap: ArcSwap::from_pointee(Snapshot::default()),
		}
	}

	/// Returns the process-wide registry.
	///
	/// Created empty on first use and never torn down.
	pub fn global() -> &'static Registry {
		&GLOBAL
	}

	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Registers `T` as a command type.
	///
	/// `T` must be concrete. Trait objects are refused at compile time:
	///
	/// ```compile_fail
	/// use courier_registry::{Command, Registry};
	///
	/// Registry::new("doc")
	///     .register_command::<dyn Command>("4e1b2a0c-9f51-4d3e-b0b7-6b9c1f0e2a11")
	///     .unwrap();
	/// ```
	///
	/// A concrete type with a zero value registers normally:
	///
	/// ```rust
	/// use courier_registry::{Command, Message, Registry};
	///
	/// #[derive(Debug, Default)]
	/// struct PlaceOrder;
	/// impl Message for PlaceOrder {}
	/// impl Command for PlaceOrder {}
	///
	/// Registry::new("doc")
	///     .register_command::<PlaceOrder>("4e1b2a0c-9f51-4d3e-b0b7-6b9c1f0e2a11")
	///     .unwrap();
	/// ```
	pub fn register_command<T: Command + Default>(
		&self,
		identifier: &str,
	) -> Result<Arc<MessageType>, RegisterError> {
		self.register::<T>(identifier, MessageKind::Command)
	}

	/// Registers `T` as an event type.
	pub fn register_event<T: Event + Default>(
		&self,
		identifier: &str,
	) -> Result<Arc<MessageType>, RegisterError> {
		self.register::<T>(identifier, MessageKind::Event)
	}

	/// Registers `T` as a timeout type.
	pub fn register_timeout<T: Timeout + Default>(
		&self,
		identifier: &str,
	) -> Result<Arc<MessageType>, RegisterError> {
		self.register::<T>(identifier, MessageKind::Timeout)
	}

	fn register<T: Message + Default>(
		&self,
		identifier: &str,
		kind: MessageKind,
	) -> Result<Arc<MessageType>, RegisterError> {
		let token = TypeToken::of::<T>();

		let identifier =
			Identifier::parse(identifier).map_err(|source| RegisterError::Identifier {
				message_type: token.name(),
				source,
			})?;

		if let Some(referent) = T::referent() {
			return Err(RegisterError::ReceiverMismatch {
				message_type: token.name(),
				referent: referent.name(),
			});
		}

		let entry = Arc::new(MessageType::new::<T>(identifier));
		let result = self.merge(entry);
		if let Err(err) = &result {
			tracing::warn!(registry = self.label, %kind, error = %err, "message type rejected");
		}
		result
	}

	/// Publishes `entry`, or reports how it conflicts with what is already registered.
	pub(crate) fn merge(&self, entry: Arc<MessageType>) -> Result<Arc<MessageType>, RegisterError> {
		let mut attempt = 0u32;

		loop {
			let old = self.snap.load_full();
			check_conflicts(&old, &entry)?;

			let new_arc = Arc::new(old.with(entry.clone()));
			let prev = self.snap.compare_and_swap(&old, new_arc.clone());

			if Arc::ptr_eq(&prev, &old) {
				tracing::debug!(
					registry = self.label,
					identifier = %entry.identifier(),
					message_type = entry.name(),
					len = new_arc.len(),
					retries = attempt,
					"message type registered"
				);
				return Ok(entry);
			}

			attempt += 1;
			tracing::trace!(
				registry = self.label,
				identifier = %entry.identifier(),
				attempt,
				"snapshot changed during registration, retrying"
			);
		}
	}

	/// Looks up the descriptor registered for `T`.
	pub fn by_type<T: Message>(&self) -> Option<Arc<MessageType>> {
		self.by_type_id(TypeId::of::<T>())
	}

	/// Looks up a descriptor by native type id.
	pub fn by_type_id(&self, type_id: TypeId) -> Option<Arc<MessageType>> {
		self.snap.load().get_by_type(type_id).cloned()
	}

	/// Looks up a descriptor by identifier, in any letter case.
	///
	/// Fails only when `identifier` is malformed; an unregistered identifier yields `Ok(None)`.
	pub fn by_identifier(
		&self,
		identifier: &str,
	) -> Result<Option<Arc<MessageType>>, IdentifierError> {
		let identifier = Identifier::parse(identifier)?;
		Ok(self.snap.load().get_by_identifier(identifier.as_str()).cloned())
	}

	/// Looks up the descriptor for `T`, failing with a hint naming the registration function
	/// for `kind` when `T` was never registered.
	pub fn require<T: Message>(&self, kind: MessageKind) -> Result<Arc<MessageType>, LookupError> {
		self.by_type::<T>().ok_or(LookupError::NotRegistered {
			message_type: std::any::type_name::<T>(),
			kind,
		})
	}

	/// Returns a guard over the current snapshot for enumeration.
	pub fn snapshot_guard(&self) -> SnapshotGuard {
		SnapshotGuard {
			snap: self.snap.load_full(),
		}
	}

	/// Returns the current snapshot.
	pub fn snapshot(&self) -> Arc<Snapshot> {
		self.snap.load_full()
	}

	/// Returns the number of registered message types.
	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	/// Returns true if nothing has been registered.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new("default")
	}
}

impl std::fmt::Debug for Registry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("label", &self.label)
			.field("len", &self.len())
			.finish()
	}
}

fn check_conflicts(snap: &Snapshot, entry: &MessageType) -> Result<(), RegisterError> {
	if let Some(existing) = snap.get_by_type(entry.token().type_id()) {
		if existing.identifier() == entry.identifier() {
			return Err(RegisterError::AlreadyRegistered {
				message_type: entry.name(),
				identifier: entry.identifier().clone(),
			});
		}
		return Err(RegisterError::TypeConflict {
			message_type: entry.name(),
			identifier: entry.identifier().clone(),
			existing: existing.identifier().clone(),
		});
	}

	if let Some(existing) = snap.get_by_identifier(entry.identifier().as_str()) {
		return Err(RegisterError::IdentifierConflict {
			message_type: entry.name(),
			identifier: entry.identifier().clone(),
			existing: existing.name(),
		});
	}

	Ok(())
}
