use std::cell::Cell;
use std::fmt::Display;
use std::rc::Rc;

pub mod use_fetch;

pub use use_fetch::{FetchDriver, FetchOptions, use_fetch};

/// Outcome of the most recent retrieval started by a fetch hook.
///
/// Exactly one variant holds at a time, so data and error can never be set
/// together. A failed request does not keep data from an earlier success.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FetchState<T> {
    /// No request has been started yet.
    #[default]
    Idle,
    Loading,
    Success(T),
    /// The user-facing error message.
    Failure(String),
}

impl<T> FetchState<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(e) => Self::Failure(e.to_string()),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Sequence number identifying one request issued by a hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Hands out increasing tickets so that only the latest request may commit
/// its result. Clones share the same counter.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    latest: Rc<Cell<u64>>,
}

impl RequestTracker {
    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::{FetchState, RequestTracker};

    #[test]
    fn test_accessors() {
        let idle = FetchState::<u32>::default();
        assert_eq!(idle, FetchState::Idle);
        assert!(!idle.is_loading());
        assert_eq!(idle.data(), None);
        assert_eq!(idle.error(), None);

        let loading = FetchState::<u32>::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.data(), None);
        assert_eq!(loading.error(), None);

        let success = FetchState::from_result(Ok::<_, String>(7));
        assert!(!success.is_loading());
        assert_eq!(success.data(), Some(&7));
        assert_eq!(success.error(), None);

        let failure = FetchState::<u32>::from_result(Err("boom"));
        assert!(!failure.is_loading());
        assert_eq!(failure.data(), None);
        assert_eq!(failure.error(), Some("boom"));
    }

    #[test]
    fn test_failure_replaces_earlier_data() {
        let mut state = FetchState::from_result(Ok::<_, String>("old"));
        assert_eq!(state.data(), Some(&"old"));
        state = FetchState::Loading;
        assert_eq!(state.data(), None);
        state = FetchState::from_result(Err("offline"));
        assert_eq!(state.data(), None);
        assert_eq!(state.error(), Some("offline"));
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let tracker = RequestTracker::default();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let shared = tracker.clone();
        let second = shared.begin();
        assert_ne!(first, second);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }
}
