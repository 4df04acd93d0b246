//! Per-frame player input.

use hollows_core::Vec2;
use serde::{Deserialize, Serialize};

/// Everything the player does during one frame.
///
/// `direction` and `sprint` are held inputs. The remaining fields are
/// presses, acted on once in the frame they appear.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameInput {
    /// Movement direction; longer than one is clamped to unit length.
    pub direction: Vec2,
    pub sprint: bool,
    pub toggle_flashlight: bool,
    /// Hide in, or step out of, a nearby hiding spot.
    pub toggle_hide: bool,
    /// Pick up the nearest item in reach.
    pub interact: bool,
    pub equip: Option<String>,
    /// Use the equipped item.
    pub use_item: bool,
    /// Items placed on the crafting bench, in placement order.
    pub craft: Option<Vec<String>>,
    /// Extra noise at a position, for scripted scenarios.
    pub noise: Option<Vec2>,
}

impl FrameInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(direction: Vec2) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sprint(mut self) -> Self {
        self.sprint = true;
        self
    }

    /// Held inputs only, with every press cleared.
    pub fn held(&self) -> Self {
        Self {
            direction: self.direction,
            sprint: self.sprint,
            ..Self::default()
        }
    }
}
