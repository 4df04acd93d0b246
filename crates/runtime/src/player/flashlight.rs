use hollows_content::FlashlightTuning;

/// Result of pressing the flashlight switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    SwitchedOn,
    SwitchedOff,
    /// The battery is flat; the light stays off.
    Empty,
}

/// Battery-limited flashlight.
///
/// Drains while on and switches itself off when the charge reaches zero.
/// Only a manual switch-off clicks loudly enough to be heard.
#[derive(Clone, Debug, PartialEq)]
pub struct Flashlight {
    on: bool,
    charge: f32,
    max_charge: f32,
    drain_rate: f32,
}

impl Flashlight {
    pub fn new(tuning: &FlashlightTuning) -> Self {
        Self {
            on: tuning.starts_on && tuning.max_charge > 0.0,
            charge: tuning.max_charge,
            max_charge: tuning.max_charge,
            drain_rate: tuning.drain_rate,
        }
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.on
    }

    #[inline]
    pub fn charge(&self) -> f32 {
        self.charge
    }

    /// Charge as a fraction of the maximum, in `[0, 1]`.
    pub fn level(&self) -> f32 {
        if self.max_charge <= 0.0 {
            0.0
        } else {
            self.charge / self.max_charge
        }
    }

    pub fn toggle(&mut self) -> Toggle {
        if self.on {
            self.on = false;
            Toggle::SwitchedOff
        } else if self.charge > 0.0 {
            self.on = true;
            Toggle::SwitchedOn
        } else {
            Toggle::Empty
        }
    }

    /// Drains the battery. Returns `true` on the frame the light dies.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if !self.on {
            return false;
        }
        self.charge = (self.charge - self.drain_rate * delta_time).max(0.0);
        if self.charge <= 0.0 {
            self.on = false;
            tracing::debug!("Flashlight: battery depleted");
            return true;
        }
        false
    }

    /// Adds charge, capped at the maximum. Returns the new charge.
    pub fn recharge(&mut self, amount: f32) -> f32 {
        self.charge = (self.charge + amount.max(0.0)).min(self.max_charge);
        self.charge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> FlashlightTuning {
        FlashlightTuning {
            max_charge: 10.0,
            drain_rate: 4.0,
            starts_on: true,
        }
    }

    #[test]
    fn drains_and_dies() {
        let mut light = Flashlight::new(&tuning());
        assert!(!light.update(2.0));
        assert_eq!(light.charge(), 2.0);

        assert!(light.update(1.0));
        assert!(!light.is_on());
        assert_eq!(light.charge(), 0.0);
        assert_eq!(light.toggle(), Toggle::Empty);
    }

    #[test]
    fn off_light_keeps_charge() {
        let mut light = Flashlight::new(&tuning());
        assert_eq!(light.toggle(), Toggle::SwitchedOff);
        light.update(100.0);
        assert_eq!(light.charge(), 10.0);
    }

    #[test]
    fn recharge_caps_at_max() {
        let mut light = Flashlight::new(&tuning());
        light.update(2.0);
        assert_eq!(light.recharge(50.0), 10.0);
        assert_eq!(light.level(), 1.0);
    }
}
