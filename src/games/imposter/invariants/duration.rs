//! Discussion length invariant.

use super::Invariant;
use crate::games::imposter::Session;

/// Invariant: the discussion lasts at least one millisecond, so a started
/// countdown always has time to run out.
pub struct PositiveDuration;

impl Invariant<Session> for PositiveDuration {
    fn holds(session: &Session) -> bool {
        *session.discussion_duration_ms() > 0
    }

    fn description() -> &'static str {
        "Discussion duration is positive"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::games::imposter::Category;

    #[test]
    fn test_zero_duration_violates() {
        let session = Session::new(
            vec!["A".into(), "B".into(), "C".into()],
            BTreeSet::from([Category::Animals]),
            None,
            "Owl".into(),
            None,
            "A".into(),
            0,
            false,
        );
        assert!(!PositiveDuration::holds(&session));
        assert!(PositiveDuration::holds(&Session::fixture(&["A", "B", "C"], "A", "Owl", None)));
    }
}
