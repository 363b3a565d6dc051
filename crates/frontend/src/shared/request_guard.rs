//! Ordering for list fetches.
//!
//! Every fetch takes a [`RequestTicket`]; only the newest ticket may write its
//! result. The counter lives in the owning component's arena, so once the view
//! is disposed no ticket is current any more and late responses are dropped.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Copy)]
pub struct RequestGuard {
    generation: StoredValue<u64>,
}

impl RequestGuard {
    /// Must be called inside a component.
    pub fn new() -> Self {
        Self {
            generation: StoredValue::new(0),
        }
    }

    /// Start a request, superseding any earlier one.
    pub fn begin(&self) -> RequestTicket {
        let generation = self
            .generation
            .try_update_value(|g| {
                *g += 1;
                *g
            })
            .unwrap_or(0);
        RequestTicket(generation)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 != 0 && self.generation.try_get_value() == Some(ticket.0)
    }
}

impl Default for RequestGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_supersedes_older() {
        let owner = Owner::new();
        owner.with(|| {
            let guard = RequestGuard::new();
            let first = guard.begin();
            assert!(guard.is_current(first));

            let second = guard.begin();
            assert!(!guard.is_current(first));
            assert!(guard.is_current(second));
        });
    }

    #[test]
    fn test_no_ticket_is_current_after_dispose() {
        let owner = Owner::new();
        let (guard, ticket) = owner.with(|| {
            let guard = RequestGuard::new();
            let ticket = guard.begin();
            (guard, ticket)
        });
        owner.cleanup();

        assert!(!guard.is_current(ticket));
        assert!(!guard.is_current(guard.begin()));
    }
}
