use std::sync::Mutex;
use std::time::{Duration, Instant};

use pb_core::ports::UserActivationPort;

/// Activation state that never changes, for runs with no input layer.
#[derive(Debug, Clone, Copy)]
pub struct FixedUserActivation {
    active: bool,
}

impl FixedUserActivation {
    pub fn new(active: bool) -> Self {
        Self { active }
    }
}

impl UserActivationPort for FixedUserActivation {
    fn has_transient_activation(&self) -> bool {
        self.active
    }
}

/// Transient activation that expires `window` after the last recorded gesture.
pub struct TimedUserActivation {
    window: Duration,
    last_gesture: Mutex<Option<Instant>>,
}

impl TimedUserActivation {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_gesture: Mutex::new(None),
        }
    }

    /// Called by the input layer when the user clicks or presses a key.
    pub fn record_gesture(&self) {
        self.record_gesture_at(Instant::now());
    }

    pub fn record_gesture_at(&self, at: Instant) {
        match self.last_gesture.lock() {
            Ok(mut last) => *last = Some(at),
            Err(e) => tracing::warn!(error = %e, "activation state poisoned; gesture dropped"),
        }
    }

    /// Forget any recorded gesture.
    pub fn consume(&self) {
        match self.last_gesture.lock() {
            Ok(mut last) => *last = None,
            Err(e) => tracing::warn!(error = %e, "activation state poisoned; gesture kept"),
        }
    }
}

impl UserActivationPort for TimedUserActivation {
    fn has_transient_activation(&self) -> bool {
        match self.last_gesture.lock() {
            Ok(last) => (*last).is_some_and(|at| at.elapsed() < self.window),
            Err(e) => {
                tracing::warn!(error = %e, "activation state poisoned; treating as inactive");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_activation() {
        assert!(FixedUserActivation::new(true).has_transient_activation());
        assert!(!FixedUserActivation::new(false).has_transient_activation());
    }

    #[test]
    fn test_no_gesture_means_no_activation() {
        let activation = TimedUserActivation::new(Duration::from_secs(5));
        assert!(!activation.has_transient_activation());
    }

    #[test]
    fn test_recent_gesture_is_active() {
        let activation = TimedUserActivation::new(Duration::from_secs(5));
        activation.record_gesture();
        assert!(activation.has_transient_activation());
    }

    #[test]
    fn test_gesture_expires_after_window() {
        let activation = TimedUserActivation::new(Duration::from_millis(100));
        let Some(long_ago) = Instant::now().checked_sub(Duration::from_secs(1)) else {
            // Monotonic clock started less than a second ago; nothing to test.
            return;
        };
        activation.record_gesture_at(long_ago);
        assert!(!activation.has_transient_activation());
    }

    #[test]
    fn test_consume_clears_gesture() {
        let activation = TimedUserActivation::new(Duration::from_secs(5));
        activation.record_gesture();
        activation.consume();
        assert!(!activation.has_transient_activation());
    }

    #[test]
    fn test_poisoned_state_is_inactive_and_consume_does_not_panic() {
        let activation = TimedUserActivation::new(Duration::from_secs(5));
        activation.record_gesture();
        std::thread::scope(|s| {
            let _ = s
                .spawn(|| {
                    let _guard = activation.last_gesture.lock().unwrap();
                    panic!("poison the activation state");
                })
                .join();
        });

        activation.consume();
        activation.record_gesture();

        assert!(!activation.has_transient_activation());
    }
}
