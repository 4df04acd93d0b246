use crate::error::ConfigError;

/// Static tunables for one enemy's behavior controller.
///
/// Distances are in world units, speeds in units per second and times in
/// seconds. Every field must be finite and strictly positive; see
/// [`AlertConfig::validate`]. `chase_speed > patrol_speed` is the intended
/// relationship but is not enforced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlertConfig {
    /// Radius inside which an exposed target is noticed and chased.
    /// A chase is abandoned beyond twice this radius.
    pub chase_range: f32,
    /// Distance at which a chased, exposed target counts as caught.
    pub catch_distance: f32,
    pub patrol_speed: f32,
    /// Used both for chasing and for rushing to an investigated sound.
    pub chase_speed: f32,
    /// How long the enemy lingers at an investigated position.
    pub investigate_timeout: f32,
    /// Pause at each patrol waypoint.
    pub patrol_wait_time: f32,
    /// Remaining path distance below which the agent counts as arrived.
    pub stopping_threshold: f32,
}

impl AlertConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CHASE_RANGE: f32 = 5.0;
    pub const DEFAULT_CATCH_DISTANCE: f32 = 0.5;
    pub const DEFAULT_PATROL_SPEED: f32 = 2.0;
    pub const DEFAULT_CHASE_SPEED: f32 = 5.0;
    pub const DEFAULT_INVESTIGATE_TIMEOUT: f32 = 3.0;
    pub const DEFAULT_PATROL_WAIT_TIME: f32 = 2.0;
    pub const DEFAULT_STOPPING_THRESHOLD: f32 = 0.5;

    pub fn new() -> Self {
        Self {
            chase_range: Self::DEFAULT_CHASE_RANGE,
            catch_distance: Self::DEFAULT_CATCH_DISTANCE,
            patrol_speed: Self::DEFAULT_PATROL_SPEED,
            chase_speed: Self::DEFAULT_CHASE_SPEED,
            investigate_timeout: Self::DEFAULT_INVESTIGATE_TIMEOUT,
            patrol_wait_time: Self::DEFAULT_PATROL_WAIT_TIME,
            stopping_threshold: Self::DEFAULT_STOPPING_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_chase_range(mut self, chase_range: f32) -> Self {
        self.chase_range = chase_range;
        self
    }

    #[must_use]
    pub fn with_catch_distance(mut self, catch_distance: f32) -> Self {
        self.catch_distance = catch_distance;
        self
    }

    #[must_use]
    pub fn with_speeds(mut self, patrol_speed: f32, chase_speed: f32) -> Self {
        self.patrol_speed = patrol_speed;
        self.chase_speed = chase_speed;
        self
    }

    #[must_use]
    pub fn with_investigate_timeout(mut self, investigate_timeout: f32) -> Self {
        self.investigate_timeout = investigate_timeout;
        self
    }

    #[must_use]
    pub fn with_patrol_wait_time(mut self, patrol_wait_time: f32) -> Self {
        self.patrol_wait_time = patrol_wait_time;
        self
    }

    #[must_use]
    pub fn with_stopping_threshold(mut self, stopping_threshold: f32) -> Self {
        self.stopping_threshold = stopping_threshold;
        self
    }

    /// Distance beyond which an ongoing chase is abandoned.
    #[inline]
    pub fn lose_range(&self) -> f32 {
        self.chase_range * 2.0
    }

    /// Checks that every tunable is finite and strictly positive.
    ///
    /// Returns the first offending field in declaration order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("chase_range", self.chase_range),
            ("catch_distance", self.catch_distance),
            ("patrol_speed", self.patrol_speed),
            ("chase_speed", self.chase_speed),
            ("investigate_timeout", self.investigate_timeout),
            ("patrol_wait_time", self.patrol_wait_time),
            ("stopping_threshold", self.stopping_threshold),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.chase_speed <= self.patrol_speed {
            tracing::debug!(
                "AlertConfig: chase_speed {} does not exceed patrol_speed {}",
                self.chase_speed,
                self.patrol_speed
            );
        }

        Ok(())
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AlertConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_first_bad_field() {
        let config = AlertConfig::new()
            .with_catch_distance(0.0)
            .with_patrol_wait_time(-2.0);

        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "catch_distance",
                value: 0.0
            })
        );
    }

    #[test]
    fn validate_rejects_nan() {
        let config = AlertConfig::new().with_stopping_threshold(f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "stopping_threshold",
                ..
            })
        ));
    }

    #[test]
    fn slow_chase_is_allowed() {
        let config = AlertConfig::new().with_speeds(4.0, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn lose_range_doubles_chase_range() {
        let config = AlertConfig::new().with_chase_range(3.5);
        assert_eq!(config.lose_range(), 7.0);
    }
}
