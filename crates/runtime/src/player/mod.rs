//! The player: movement, sprint stamina, hiding and the flashlight.
mod flashlight;

pub use flashlight::{Flashlight, Toggle};

use hollows_content::PlayerTuning;
use hollows_core::{SoundCause, SoundEvent, Vec2};

/// Player avatar state.
///
/// Sprinting needs the sprint key, a non-zero direction and energy left.
/// Energy drains while sprinting and regenerates otherwise; at zero the
/// player is exhausted and crawls at `exhausted_multiplier` speed. A hidden
/// player does not move.
#[derive(Clone, Debug)]
pub struct Player {
    tuning: PlayerTuning,
    position: Vec2,
    velocity: Vec2,
    energy: f32,
    sprinting: bool,
    hidden: bool,
    flashlight: Flashlight,
}

impl Player {
    pub fn new(position: Vec2, tuning: PlayerTuning) -> Self {
        let flashlight = Flashlight::new(&tuning.flashlight);
        Self {
            energy: tuning.max_energy,
            tuning,
            position,
            velocity: Vec2::ZERO,
            sprinting: false,
            hidden: false,
            flashlight,
        }
    }

    /// Applies one frame of movement input.
    ///
    /// Returns a [`SoundCause::Sprint`] event on the frame sprinting starts,
    /// positioned where the player stood when breaking into a run.
    pub fn update(&mut self, direction: Vec2, sprint: bool, delta_time: f32) -> Option<SoundEvent> {
        let direction = if self.hidden {
            Vec2::ZERO
        } else if direction.length_squared() > 1.0 {
            direction.normalized()
        } else {
            direction
        };

        let was_sprinting = self.sprinting;
        self.sprinting = sprint && self.energy > 0.0 && direction.length_squared() > 0.0;

        if self.sprinting {
            self.energy = (self.energy - self.tuning.energy_drain_rate * delta_time).max(0.0);
        } else {
            self.energy = (self.energy + self.tuning.energy_regen_rate * delta_time)
                .min(self.tuning.max_energy);
        }

        let sound = (self.sprinting && !was_sprinting)
            .then(|| SoundEvent::new(self.position, SoundCause::Sprint));

        let multiplier = if self.sprinting {
            self.tuning.sprint_multiplier
        } else if self.energy <= 0.0 {
            self.tuning.exhausted_multiplier
        } else {
            1.0
        };
        self.velocity = direction * (self.tuning.movement_speed * multiplier);
        self.position += self.velocity * delta_time;

        sound
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn energy(&self) -> f32 {
        self.energy
    }

    #[inline]
    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        if hidden {
            self.sprinting = false;
            self.velocity = Vec2::ZERO;
        }
        self.hidden = hidden;
    }

    pub fn interact_radius(&self) -> f32 {
        self.tuning.interact_radius
    }

    pub fn flashlight(&self) -> &Flashlight {
        &self.flashlight
    }

    pub fn flashlight_mut(&mut self) -> &mut Flashlight {
        &mut self.flashlight
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }
}
