//! Noise the target makes and enemies can hear.

use crate::math::Vec2;

/// Why a sound was raised. Only used for logging and host bookkeeping; the
/// controller reacts to every cause the same way.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SoundCause {
    /// The player started sprinting.
    Sprint,
    /// The player stepped on a broken floor tile.
    BrokenTile,
    /// The player switched the flashlight off.
    FlashlightToggle,
    /// Raised by a script or test harness.
    Scripted,
}

/// A noise at a world position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundEvent {
    pub position: Vec2,
    pub cause: SoundCause,
}

impl SoundEvent {
    pub const fn new(position: Vec2, cause: SoundCause) -> Self {
        Self { position, cause }
    }
}
