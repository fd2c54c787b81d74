use std::collections::HashSet;
use std::sync::Barrier;
use std::thread;

use super::test_fixtures::*;
use crate::{RegisterError, Registry};

/// Invariant: a native type is bound to at most one identifier.
#[test]
fn test_unique_type() {
	let registry = Registry::new("test");
	registry.register_command::<PlaceOrder>(PLACE_ORDER_ID).unwrap();

	let err = registry
		.register_command::<PlaceOrder>(CANCEL_ORDER_ID)
		.unwrap_err();
	assert!(matches!(err, RegisterError::TypeConflict { .. }));
	assert_eq!(registry.len(), 1);
	assert!(registry.by_identifier(CANCEL_ORDER_ID).unwrap().is_none());
}

/// Invariant: an identifier is bound to at most one native type.
#[test]
fn test_unique_identifier() {
	let registry = Registry::new("test");
	registry.register_event::<OrderPlaced>(ORDER_PLACED_ID).unwrap();

	let err = registry
		.register_command::<PlaceOrder>(&ORDER_PLACED_ID.to_ascii_uppercase())
		.unwrap_err();
	assert!(matches!(err, RegisterError::IdentifierConflict { .. }));
	assert_eq!(registry.len(), 1);
	assert!(registry.by_type::<PlaceOrder>().is_none());
}

/// Invariant: concurrent registrations are linearizable with no lost updates.
///
/// Every thread registers a distinct, non-conflicting type; afterwards each one must be
/// reachable through both maps and enumeration must see each exactly once.
#[test]
fn test_no_lost_updates() {
	for _ in 0..8 {
		let registry = Registry::new("test");
		let barrier = Barrier::new(NUMBERED.len());

		thread::scope(|s| {
			for register in NUMBERED {
				let registry = &registry;
				let barrier = &barrier;
				s.spawn(move || {
					barrier.wait();
					register(registry).unwrap();
				});
			}
		});

		assert_eq!(registry.len(), NUMBERED.len());
		let guard = registry.snapshot_guard();
		let seen: HashSet<_> = guard.iter().map(|entry| entry.identifier().clone()).collect();
		assert_eq!(seen.len(), NUMBERED.len());
		assert_eq!(guard.iter().count(), NUMBERED.len());

		for n in 0..NUMBERED.len() {
			let entry = registry.by_identifier(&numbered_id(n)).unwrap().unwrap();
			let by_type = registry.by_type_id(entry.token().type_id()).unwrap();
			assert_eq!(by_type.identifier(), entry.identifier());
		}
	}
}

/// Invariant: racing registrations of the same identifier admit exactly one winner.
#[test]
fn test_conflicting_race_admits_one() {
	for _ in 0..8 {
		let registry = Registry::new("test");
		let barrier = Barrier::new(2);

		let (a, b) = thread::scope(|s| {
			let a = s.spawn(|| {
				barrier.wait();
				registry.register_command::<PlaceOrder>(PLACE_ORDER_ID)
			});
			let b = s.spawn(|| {
				barrier.wait();
				registry.register_command::<CancelOrder>(PLACE_ORDER_ID)
			});
			(a.join().unwrap(), b.join().unwrap())
		});

		assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
		let loser = a.err().or(b.err()).unwrap();
		assert!(matches!(loser, RegisterError::IdentifierConflict { .. }));
		assert_eq!(registry.len(), 1);
	}
}

/// Invariant: an enumeration in progress is not affected by later registrations.
#[test]
fn test_enumeration_isolated() {
	let registry = Registry::new("test");
	registry.register_command::<PlaceOrder>(PLACE_ORDER_ID).unwrap();
	registry.register_event::<OrderPlaced>(ORDER_PLACED_ID).unwrap();

	let guard = registry.snapshot_guard();
	let mut iter = guard.iter();
	let first = iter.next().unwrap();
	assert!(first.is::<PlaceOrder>());

	registry.register_timeout::<PaymentOverdue>(PAYMENT_OVERDUE_ID).unwrap();

	let rest: Vec<_> = iter.map(|entry| entry.name()).collect();
	assert_eq!(rest, vec![std::any::type_name::<OrderPlaced>()]);
	assert_eq!(guard.len(), 2);
	assert_eq!(guard.iter().count(), 2);
	assert_eq!(registry.snapshot_guard().len(), 3);
}
