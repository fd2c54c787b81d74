//! Message types shared by the index tests.

use std::sync::Arc;

use crate::message::{Command, Event, Message, Timeout};
use crate::{MessageType, RegisterError, Registry};

macro_rules! fixture {
	($($name:ident: $category:ident),* $(,)?) => {
		$(
			#[derive(Debug, Default, Clone, PartialEq)]
			pub(crate) struct $name {
				pub(crate) value: String,
			}
			impl Message for $name {}
			impl $category for $name {}
		)*
	};
}

fixture! {
	PlaceOrder: Command,
	CancelOrder: Command,
	OrderPlaced: Event,
	OrderCancelled: Event,
	PaymentOverdue: Timeout,
}

pub(crate) const PLACE_ORDER_ID: &str = "4e1b2a0c-9f51-4d3e-b0b7-6b9c1f0e2a11";
pub(crate) const CANCEL_ORDER_ID: &str = "0b5c3a8e-1d74-4f62-9a1e-3c8d2e6f4b22";
pub(crate) const ORDER_PLACED_ID: &str = "65f9620a-65c1-434e-8292-60cd7938c4de";
pub(crate) const ORDER_CANCELLED_ID: &str = "a7d0e3f2-5b86-4c19-8e2d-9f1a6b3c5d33";
pub(crate) const PAYMENT_OVERDUE_ID: &str = "d2f8c6b4-3e1a-4a57-9c0d-7e5b2f8a1c44";

/// Distinct command type per `N`.
#[derive(Debug, Default)]
pub(crate) struct Numbered<const N: usize>;

impl<const N: usize> Message for Numbered<N> {}
impl<const N: usize> Command for Numbered<N> {}

/// Identifier assigned to `Numbered<N>`.
pub(crate) fn numbered_id(n: usize) -> String {
	format!("00000000-0000-4000-8000-{:012x}", n + 1)
}

pub(crate) type RegisterFn = fn(&Registry) -> Result<Arc<MessageType>, RegisterError>;

fn register_numbered<const N: usize>(registry: &Registry) -> Result<Arc<MessageType>, RegisterError> {
	registry.register_command::<Numbered<N>>(&numbered_id(N))
}

/// One registration per `Numbered<0..16>`, none conflicting.
pub(crate) const NUMBERED: [RegisterFn; 16] = [
	register_numbered::<0>,
	register_numbered::<1>,
	register_numbered::<2>,
	register_numbered::<3>,
	register_numbered::<4>,
	register_numbered::<5>,
	register_numbered::<6>,
	register_numbered::<7>,
	register_numbered::<8>,
	register_numbered::<9>,
	register_numbered::<10>,
	register_numbered::<11>,
	register_numbered::<12>,
	register_numbered::<13>,
	register_numbered::<14>,
	register_numbered::<15>,
];
