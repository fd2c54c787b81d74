#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Registry index infrastructure.
//!
//! # Purpose
//!
//! The `index` subsystem stores registered [`MessageType`](crate::MessageType) descriptors and
//! keeps them consistent under concurrent registration.
//!
//! # Mental Model
//!
//! 1. **Publication:** A [`Registry`] holds an atomic pointer to an immutable [`Snapshot`].
//! 2. **Consumption:** Readers load the current [`Snapshot`] and perform O(1) lookups by
//!    identifier or by type. Enumeration pins one snapshot through a [`SnapshotGuard`].
//! 3. **Extension:** [`Registry::register_command`] and friends validate the candidate, check
//!    it against the loaded snapshot, build an extended snapshot and atomically swap it in.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Registry`] | Atomic container for descriptors. |
//! | [`Snapshot`] | Immutable state: insertion-ordered table plus identifier and type maps. |
//! | [`SnapshotGuard`] | Pins a snapshot for restartable enumeration. |
//! | [`RegisterError`] | Why a registration was refused. |
//!
//! # Concurrency
//!
//! - **Reads:** Wait-free (atomic load of current snapshot).
//! - **Writes:** Lock-free with linearizability (CAS retry loop on registration).
//!
//! # Invariants
//!
//! - Must hold at most one descriptor per native type.
//!   - Enforced in: `runtime::check_conflicts`.
//!   - Tested by: `invariants::test_unique_type`
//!   - Failure symptom: A type resolves to two identifiers.
//!
//! - Must hold at most one descriptor per identifier.
//!   - Enforced in: `runtime::check_conflicts`.
//!   - Tested by: `invariants::test_unique_identifier`
//!   - Failure symptom: An identifier read from a stream resolves to the wrong type.
//!
//! - Must provide linearizable writes without lost updates.
//!   - Enforced in: [`Registry::merge`] (CAS loop).
//!   - Tested by: `invariants::test_no_lost_updates`
//!   - Failure symptom: Concurrent registrations silently dropped.
//!
//! - Must isolate enumeration from later registrations.
//!   - Enforced in: [`SnapshotGuard`] (holds `Arc<Snapshot>`).
//!   - Tested by: `invariants::test_enumeration_isolated`
//!   - Failure symptom: Iteration skips or repeats entries while startup registers.

mod error;
pub(crate) mod runtime;
pub(crate) mod snapshot;

pub use error::{LookupError, RegisterError};
pub use runtime::Registry;
pub use snapshot::{Snapshot, SnapshotGuard};

#[cfg(test)]
pub(crate) mod test_fixtures;

#[cfg(test)]
mod invariants;
