//! Player-side tuning: movement, sprint stamina and flashlight battery.

/// Movement and stamina tunables.
///
/// Sprinting multiplies `movement_speed` by `sprint_multiplier` and drains
/// energy at `energy_drain_rate` per second. Once energy hits zero the player
/// is exhausted and moves at `exhausted_multiplier` until energy regenerates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerTuning {
    pub movement_speed: f32,
    pub sprint_multiplier: f32,
    pub exhausted_multiplier: f32,
    pub max_energy: f32,
    pub energy_drain_rate: f32,
    pub energy_regen_rate: f32,
    /// Reach for pickups, hiding spots and the exit.
    pub interact_radius: f32,
    pub flashlight: FlashlightTuning,
}

impl PlayerTuning {
    pub const DEFAULT_MOVEMENT_SPEED: f32 = 2.0;
    pub const DEFAULT_SPRINT_MULTIPLIER: f32 = 1.5;
    pub const DEFAULT_EXHAUSTED_MULTIPLIER: f32 = 0.5;
    pub const DEFAULT_MAX_ENERGY: f32 = 5.0;
    pub const DEFAULT_ENERGY_DRAIN_RATE: f32 = 1.0;
    pub const DEFAULT_ENERGY_REGEN_RATE: f32 = 0.5;
    pub const DEFAULT_INTERACT_RADIUS: f32 = 1.0;

    pub fn new() -> Self {
        Self {
            movement_speed: Self::DEFAULT_MOVEMENT_SPEED,
            sprint_multiplier: Self::DEFAULT_SPRINT_MULTIPLIER,
            exhausted_multiplier: Self::DEFAULT_EXHAUSTED_MULTIPLIER,
            max_energy: Self::DEFAULT_MAX_ENERGY,
            energy_drain_rate: Self::DEFAULT_ENERGY_DRAIN_RATE,
            energy_regen_rate: Self::DEFAULT_ENERGY_REGEN_RATE,
            interact_radius: Self::DEFAULT_INTERACT_RADIUS,
            flashlight: FlashlightTuning::default(),
        }
    }

    #[must_use]
    pub fn with_flashlight(mut self, flashlight: FlashlightTuning) -> Self {
        self.flashlight = flashlight;
        self
    }

    #[must_use]
    pub fn with_energy(mut self, max_energy: f32, drain_rate: f32, regen_rate: f32) -> Self {
        self.max_energy = max_energy;
        self.energy_drain_rate = drain_rate;
        self.energy_regen_rate = regen_rate;
        self
    }
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self::new()
    }
}

/// Battery-limited flashlight.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlashlightTuning {
    pub max_charge: f32,
    /// Charge lost per second while switched on.
    pub drain_rate: f32,
    pub starts_on: bool,
}

impl FlashlightTuning {
    pub const DEFAULT_MAX_CHARGE: f32 = 100.0;
    pub const DEFAULT_DRAIN_RATE: f32 = 2.0;

    pub fn new() -> Self {
        Self {
            max_charge: Self::DEFAULT_MAX_CHARGE,
            drain_rate: Self::DEFAULT_DRAIN_RATE,
            starts_on: true,
        }
    }
}

impl Default for FlashlightTuning {
    fn default() -> Self {
        Self::new()
    }
}
