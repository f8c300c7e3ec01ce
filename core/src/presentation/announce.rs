use serde::{Deserialize, Serialize};

use super::signal::SignalState;

pub const DEFAULT_ANNOUNCE_COOLDOWN_MS: u64 = 3_000;

/// The last state handed to the speech layer and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub state: SignalState,
    pub at_ms: u64,
}

/// Whether `state` should be spoken at `now_ms` given the previous
/// announcement. The caller owns the returned state; nothing here is global.
pub fn should_announce(
    state: SignalState,
    previous: Option<&Announcement>,
    now_ms: u64,
    cooldown_ms: u64,
) -> bool {
    if state == SignalState::Unknown {
        return false;
    }
    match previous {
        None => true,
        Some(last) if last.state != state => true,
        Some(last) => now_ms.saturating_sub(last.at_ms) >= cooldown_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_are_suppressed_inside_cooldown() {
        let last = Announcement {
            state: SignalState::Red,
            at_ms: 1_000,
        };
        assert!(!should_announce(SignalState::Red, Some(&last), 2_500, 3_000));
        assert!(should_announce(SignalState::Red, Some(&last), 4_000, 3_000));
    }

    #[test]
    fn state_change_is_announced_immediately() {
        let last = Announcement {
            state: SignalState::Red,
            at_ms: 1_000,
        };
        assert!(should_announce(SignalState::Green, Some(&last), 1_001, 3_000));
        assert!(should_announce(SignalState::Yellow, None, 0, 3_000));
    }

    #[test]
    fn unknown_is_never_announced() {
        assert!(!should_announce(SignalState::Unknown, None, 10_000, 0));
    }
}
