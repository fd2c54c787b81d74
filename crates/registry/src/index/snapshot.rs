//! Immutable registry views.
//!
//! # Role
//!
//! A [`Snapshot`] is what the registry publishes. It contains no mutation logic: writers build a
//! replacement with [`Snapshot::with`] and swap it in, readers load one and search it.
//!
//! # Invariants
//!
//! - The three indexes always hold exactly the same descriptors (see
//!   `invariants::test_indexes_agree`).
//! - A published snapshot never changes; [`SnapshotGuard`] keeps one alive for enumeration.

use std::any::TypeId;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::descriptor::MessageType;
use crate::identifier::Identifier;

/// Immutable set of descriptors indexed by identifier, by type and by insertion order.
#[derive(Clone, Default)]
pub struct Snapshot {
	pub(crate) table: Arc<[Arc<MessageType>]>,
	pub(crate) by_identifier: Arc<FxHashMap<Identifier, Arc<MessageType>>>,
	pub(crate) by_type: Arc<FxHashMap<TypeId, Arc<MessageType>>>,
}

impl Snapshot {
	/// Returns a copy of this snapshot with `entry` appended to every index.
	///
	/// Callers must have checked `entry` against this snapshot first.
	pub(crate) fn with(&self, entry: Arc<MessageType>) -> Self {
		let mut table = Vec::with_capacity(self.table.len() + 1);
		table.extend(self.table.iter().cloned());
		table.push(entry.clone());

		let mut by_identifier = (*self.by_identifier).clone();
		by_identifier.insert(entry.identifier().clone(), entry.clone());

		let mut by_type = (*self.by_type).clone();
		by_type.insert(entry.token().type_id(), entry);

		Self {
			table: Arc::from(table),
			by_identifier: Arc::new(by_identifier),
			by_type: Arc::new(by_type),
		}
	}

	/// Looks up a descriptor by its normalized identifier.
	pub fn get_by_identifier(&self, identifier: &str) -> Option<&Arc<MessageType>> {
		self.by_identifier.get(identifier)
	}

	/// Looks up a descriptor by native type.
	pub fn get_by_type(&self, type_id: TypeId) -> Option<&Arc<MessageType>> {
		self.by_type.get(&type_id)
	}

	/// Descriptors in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &Arc<MessageType>> + '_ {
		self.table.iter()
	}

	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}
}

/// Snapshot-pinning guard for enumeration.
///
/// Iterating a guard walks the snapshot that was current when the guard was taken. Later
/// registrations are invisible to it, and it can be iterated any number of times.
pub struct SnapshotGuard {
	pub(crate) snap: Arc<Snapshot>,
}

impl SnapshotGuard {
	/// Returns an iterator over all descriptors in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &MessageType> + '_ {
		self.snap.table.iter().map(entry_ref)
	}

	/// Returns an iterator over shared descriptor handles.
	pub fn iter_refs(&self) -> impl Iterator<Item = Arc<MessageType>> + '_ {
		self.snap.table.iter().cloned()
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.snap.len()
	}

	/// Returns true if empty.
	pub fn is_empty(&self) -> bool {
		self.snap.is_empty()
	}
}

impl<'a> IntoIterator for &'a SnapshotGuard {
	type Item = &'a MessageType;
	type IntoIter = std::iter::Map<
		std::slice::Iter<'a, Arc<MessageType>>,
		fn(&'a Arc<MessageType>) -> &'a MessageType,
	>;

	fn into_iter(self) -> Self::IntoIter {
		self.snap.table.iter().map(entry_ref as fn(&'a Arc<MessageType>) -> &'a MessageType)
	}
}

fn entry_ref(entry: &Arc<MessageType>) -> &MessageType {
	entry
}
