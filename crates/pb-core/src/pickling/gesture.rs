use super::error::PicklingError;
use crate::ports::UserActivationPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDenial {
    NoUserGesture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Deny(GateDenial),
}

impl GateDecision {
    pub fn into_result(self) -> Result<(), PicklingError> {
        match self {
            GateDecision::Allow => Ok(()),
            GateDecision::Deny(GateDenial::NoUserGesture) => Err(PicklingError::NoUserGesture),
        }
    }
}

/// Requires transient activation for any call that touches pickled formats.
///
/// Calls that do not request pickling always pass, so the sanitized-only path
/// keeps its existing behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureGate;

impl GestureGate {
    pub fn check(has_transient_activation: bool, requests_pickling: bool) -> GateDecision {
        if requests_pickling && !has_transient_activation {
            GateDecision::Deny(GateDenial::NoUserGesture)
        } else {
            GateDecision::Allow
        }
    }

    /// Like [`GestureGate::check`], but only asks `activation` when the call
    /// actually requests pickling.
    pub fn evaluate(activation: &dyn UserActivationPort, requests_pickling: bool) -> GateDecision {
        if !requests_pickling {
            return GateDecision::Allow;
        }
        Self::check(activation.has_transient_activation(), requests_pickling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockUserActivation;

    #[test]
    fn test_truth_table() {
        assert_eq!(GestureGate::check(true, true), GateDecision::Allow);
        assert_eq!(
            GestureGate::check(false, true),
            GateDecision::Deny(GateDenial::NoUserGesture)
        );
        assert_eq!(GestureGate::check(true, false), GateDecision::Allow);
        assert_eq!(GestureGate::check(false, false), GateDecision::Allow);
    }

    #[test]
    fn test_evaluate_skips_activation_query_without_pickling() {
        let mut activation = MockUserActivation::new();
        activation.expect_has_transient_activation().times(0);

        assert_eq!(GestureGate::evaluate(&activation, false), GateDecision::Allow);
    }

    #[test]
    fn test_evaluate_queries_activation_when_pickling() {
        let mut activation = MockUserActivation::new();
        activation
            .expect_has_transient_activation()
            .times(1)
            .return_const(false);

        assert_eq!(
            GestureGate::evaluate(&activation, true),
            GateDecision::Deny(GateDenial::NoUserGesture)
        );
    }

    #[test]
    fn test_denial_maps_to_no_user_gesture() {
        let err = GestureGate::check(false, true).into_result().unwrap_err();
        assert!(matches!(err, PicklingError::NoUserGesture));
    }
}
