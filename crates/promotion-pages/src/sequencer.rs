//! Latest-action-wins request sequencing.
//!
//! Every user action takes a [`Ticket`]. When its response arrives, the
//! response is applied only if no newer ticket has been issued since. An
//! older request that completes late is dropped instead of overwriting what
//! the newer action displayed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Position of an action in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
	/// Sequence number of this ticket.
	pub fn get(&self) -> u64 {
		self.0
	}
}

/// Issues tickets and tells whether a ticket is still the latest.
#[derive(Debug, Default)]
pub struct RequestSequencer {
	latest: AtomicU64,
}

impl RequestSequencer {
	/// Creates a sequencer. The first ticket issued is `1`.
	pub fn new() -> Self {
		Self::default()
	}

	/// Issues a new ticket, superseding every earlier one.
	pub fn issue(&self) -> Ticket {
		Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
	}

	/// Returns `true` if no ticket has been issued after `ticket`.
	pub fn is_current(&self, ticket: Ticket) -> bool {
		self.latest.load(Ordering::Acquire) == ticket.0
	}
}
