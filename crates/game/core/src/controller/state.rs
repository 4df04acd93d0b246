//! States, sub-states and transition records of the behavior controller.

use crate::math::Vec2;

/// Top-level behavior of an enemy.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BehaviorState {
    /// Walk the patrol route, pausing at each waypoint.
    #[default]
    Patrol,
    /// Rush to a heard sound, linger, then give up.
    Investigate,
    /// Pursue the exposed target.
    Chase,
}

/// Progress of an investigation episode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvestigationPhase {
    EnRoute,
    /// Waiting at the sound position; `remaining` seconds until giving up.
    Arrived { remaining: f32 },
}

/// Where the enemy is investigating and how far along it is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvestigationTarget {
    pub position: Vec2,
    pub phase: InvestigationPhase,
}

impl InvestigationTarget {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            phase: InvestigationPhase::EnRoute,
        }
    }

    #[inline]
    pub fn has_arrived(&self) -> bool {
        matches!(self.phase, InvestigationPhase::Arrived { .. })
    }

    /// Seconds left before giving up, once arrived.
    pub fn remaining(&self) -> Option<f32> {
        match self.phase {
            InvestigationPhase::EnRoute => None,
            InvestigationPhase::Arrived { remaining } => Some(remaining),
        }
    }
}

/// Why the controller changed state.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum TransitionCause {
    /// Exposed target inside chase range.
    TargetSpotted,
    /// A sound was accepted for investigation.
    HeardSound,
    /// Lingered at the investigated position for the full timeout.
    InvestigationTimedOut,
    /// The target hid.
    TargetConcealed,
    /// The target escaped beyond twice the chase range.
    TargetOutOfRange,
    /// The target reference disappeared mid-chase.
    TargetMissing,
}

/// A state change, as reported by `tick` and logged at `debug`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: BehaviorState,
    pub to: BehaviorState,
    pub cause: TransitionCause,
}

impl core::fmt::Display for Transition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn state_names_round_trip_through_strum() {
        assert_eq!(BehaviorState::Investigate.to_string(), "investigate");
        assert_eq!(
            BehaviorState::from_str("CHASE").ok(),
            Some(BehaviorState::Chase)
        );
        assert_eq!(BehaviorState::default(), BehaviorState::Patrol);
    }

    #[test]
    fn transition_display() {
        let t = Transition {
            from: BehaviorState::Patrol,
            to: BehaviorState::Chase,
            cause: TransitionCause::TargetSpotted,
        };
        assert_eq!(t.to_string(), "patrol -> chase (target_spotted)");
    }
}
