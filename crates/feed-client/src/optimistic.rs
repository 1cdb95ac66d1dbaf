//! Two-phase state for values changed ahead of the service's answer.

/// A value the UI may change before the service confirms it.
///
/// ```text
/// Confirmed --propose--> Tentative --confirm--> Confirmed
///                            |
///                            +------revert----> Reverted
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Optimistic<T> {
    /// Agrees with the last service response.
    Confirmed(T),
    /// Showing `proposed` while the call is in flight.
    Tentative { confirmed: T, proposed: T },
    /// The call failed and the last confirmed value was restored.
    Reverted(T),
}

impl<T: Clone> Optimistic<T> {
    pub fn new(value: T) -> Self {
        Self::Confirmed(value)
    }

    /// The value to display.
    pub fn current(&self) -> &T {
        match self {
            Self::Confirmed(value) | Self::Reverted(value) => value,
            Self::Tentative { proposed, .. } => proposed,
        }
    }

    /// The last value the service agreed with.
    pub fn confirmed(&self) -> &T {
        match self {
            Self::Confirmed(value) | Self::Reverted(value) => value,
            Self::Tentative { confirmed, .. } => confirmed,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Tentative { .. })
    }

    /// Show `next` until the service answers.
    ///
    /// Proposing again while pending keeps the original confirmed value.
    pub fn propose(&mut self, next: T) {
        let confirmed = self.confirmed().clone();
        *self = Self::Tentative {
            confirmed,
            proposed: next,
        };
    }

    /// Adopt the service's value.
    pub fn confirm(&mut self, value: T) {
        *self = Self::Confirmed(value);
    }

    /// Roll back to the confirmed value. Returns `false` if nothing was pending.
    pub fn revert(&mut self) -> bool {
        let Self::Tentative { confirmed, .. } = self else {
            return false;
        };
        let confirmed = confirmed.clone();
        *self = Self::Reverted(confirmed);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_propose_then_confirm() {
        let mut state = Optimistic::new(1);
        state.propose(2);
        assert!(state.is_pending());
        assert_eq!(*state.current(), 2);
        assert_eq!(*state.confirmed(), 1);

        state.confirm(3);
        assert_eq!(state, Optimistic::Confirmed(3));
    }

    #[test]
    fn test_propose_then_revert() {
        let mut state = Optimistic::new("a");
        state.propose("b");
        assert!(state.revert());
        assert_eq!(state, Optimistic::Reverted("a"));
        assert!(!state.revert());
    }

    #[test]
    fn test_repeated_propose_keeps_original_base() {
        let mut state = Optimistic::new(0);
        state.propose(1);
        state.propose(2);
        state.revert();
        assert_eq!(*state.current(), 0);
    }
}
