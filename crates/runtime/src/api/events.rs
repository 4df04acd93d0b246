//! What happened during a frame.

use hollows_core::{BehaviorState, SoundEvent, Transition, Vec2};

use crate::session::Outcome;

/// Notable occurrence during [`crate::Stage::step`], in the order it
/// happened.
#[derive(Clone, Debug, PartialEq)]
pub enum StageEvent {
    SoundRaised(SoundEvent),
    EnemyTransition {
        enemy: usize,
        transition: Transition,
    },
    TargetCaught {
        enemy: usize,
        position: Vec2,
    },
    HidingChanged {
        hidden: bool,
    },
    FlashlightSwitched {
        on: bool,
    },
    FlashlightDepleted,
    ItemPickedUp {
        item: String,
        quantity: u32,
    },
    ItemEquipped {
        item: String,
    },
    ItemUsed {
        item: String,
    },
    ItemCrafted {
        item: String,
    },
    /// A player action could not be carried out; the frame went on.
    ActionRejected {
        reason: String,
    },
    OutcomeChanged(Outcome),
}

/// Enemy status after a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyStatus {
    pub state: BehaviorState,
    /// `None` once the enemy's agent has been detached.
    pub position: Option<Vec2>,
    pub caught: bool,
}

/// Result of one [`crate::Stage::step`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Index of the simulated frame, starting at 0.
    pub frame: u64,
    pub outcome: Outcome,
    /// `false` when the session had already ended and nothing moved.
    pub advanced: bool,
    pub events: Vec<StageEvent>,
    pub enemies: Vec<EnemyStatus>,
}

impl FrameReport {
    pub fn sounds(&self) -> impl Iterator<Item = &SoundEvent> {
        self.events.iter().filter_map(|event| match event {
            StageEvent::SoundRaised(sound) => Some(sound),
            _ => None,
        })
    }

    pub fn transitions(&self) -> impl Iterator<Item = (usize, &Transition)> {
        self.events.iter().filter_map(|event| match event {
            StageEvent::EnemyTransition { enemy, transition } => Some((*enemy, transition)),
            _ => None,
        })
    }

    pub fn rejections(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            StageEvent::ActionRejected { reason } => Some(reason.as_str()),
            _ => None,
        })
    }

    pub fn caught(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, StageEvent::TargetCaught { .. }))
    }
}
