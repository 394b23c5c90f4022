//! Rules every [`Session`](crate::games::imposter::Session) obeys.
//!
//! Each rule is a zero-sized type, so sets of rules are plain tuples.
//! A dealt session is checked in debug builds; a decoded one always.

/// One rule over a round value `S`.
pub trait Invariant<S> {
    /// True when `state` obeys the rule.
    fn holds(state: &S) -> bool;

    /// Rule text reported when a decoded round breaks it.
    fn description() -> &'static str;
}

/// A broken rule, as reported by [`InvariantSet::check_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Text of the broken rule.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a rule's text.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Rules checked together; every broken rule is reported, not just the first.
pub trait InvariantSet<S> {
    /// Runs each rule against `state`.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod clue_policy;
pub mod duration;
pub mod roster;

pub use clue_policy::{ClueRequiresPolicy, CustomWordFromTopics};
pub use duration::PositiveDuration;
pub use roster::{ImposterOnRoster, RosterUnique};

/// All session invariants as a composable set.
pub type SessionInvariants = (
    RosterUnique,
    ImposterOnRoster,
    ClueRequiresPolicy,
    CustomWordFromTopics,
    PositiveDuration,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::imposter::Session;

    #[test]
    fn test_invariant_set_holds_for_valid_session() {
        let session = Session::fixture(&["A", "B", "C"], "A", "Owl", Some("Night"));
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let session = Session::fixture(&["A", "A"], "Z", "Owl", None);
        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = Session::fixture(&["A", "B", "C"], "C", "Owl", None);
        type RosterChecks = (RosterUnique, ImposterOnRoster);
        assert!(RosterChecks::check_all(&session).is_ok());
    }
}
