//! Distance-to-actuation mapping
//!
//! Maps an accepted distance onto a response profile: whether the vibration
//! motor runs, and how fast the LED and buzzer blink. Closer objects get a
//! shorter blink period. The thresholds and their comparison directions are
//! part of the device's observable behavior and must not be nudged.

/// Distance above which all outputs are released (cm)
pub const ALL_CLEAR_CM: f32 = 46.90;

/// Near-contact distance below which only the motor is stopped (cm)
pub const CONTACT_CM: f32 = 2.0;

/// Blink behavior for the LED and buzzer timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkCommand {
    /// Install a new toggle period in milliseconds
    Period(u32),
    /// Stop blinking and force the outputs low
    Off,
    /// Leave the timers exactly as they are
    Hold,
}

/// One cycle's actuator response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuationProfile {
    pub motor_on: bool,
    pub blink: BlinkCommand,
}

impl ActuationProfile {
    /// Select the profile for an accepted distance
    ///
    /// Bands are evaluated far-to-near, first match wins. Below
    /// `CONTACT_CM` the blink timers are deliberately left running; only
    /// the motor is released.
    pub fn select(distance_cm: f32) -> Self {
        if distance_cm > ALL_CLEAR_CM {
            Self {
                motor_on: false,
                blink: BlinkCommand::Off,
            }
        } else if distance_cm > 35.0 {
            Self {
                motor_on: true,
                blink: BlinkCommand::Period(300),
            }
        } else if distance_cm > 27.0 {
            Self {
                motor_on: true,
                blink: BlinkCommand::Period(200),
            }
        } else if distance_cm > 20.0 {
            Self {
                motor_on: true,
                blink: BlinkCommand::Period(100),
            }
        } else if distance_cm > 13.0 {
            Self {
                motor_on: true,
                blink: BlinkCommand::Period(50),
            }
        } else if distance_cm >= CONTACT_CM {
            Self {
                motor_on: true,
                blink: BlinkCommand::Period(25),
            }
        } else {
            Self {
                motor_on: false,
                blink: BlinkCommand::Hold,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn period(profile: ActuationProfile) -> Option<u32> {
        match profile.blink {
            BlinkCommand::Period(ms) => Some(ms),
            _ => None,
        }
    }

    #[test]
    fn test_all_clear_band() {
        let profile = ActuationProfile::select(46.91);
        assert!(!profile.motor_on);
        assert_eq!(profile.blink, BlinkCommand::Off);
    }

    #[test]
    fn test_band_boundaries() {
        // Upper bounds are inclusive: 46.90 already belongs to the 300 ms band
        assert_eq!(period(ActuationProfile::select(46.90)), Some(300));
        assert_eq!(period(ActuationProfile::select(35.0)), Some(200));
        assert_eq!(period(ActuationProfile::select(27.0)), Some(100));
        assert_eq!(period(ActuationProfile::select(20.0)), Some(50));
        assert_eq!(period(ActuationProfile::select(13.0)), Some(25));
        assert_eq!(period(ActuationProfile::select(2.0)), Some(25));
    }

    #[test]
    fn test_band_interiors() {
        assert_eq!(period(ActuationProfile::select(40.0)), Some(300));
        assert_eq!(period(ActuationProfile::select(30.0)), Some(200));
        assert_eq!(period(ActuationProfile::select(25.0)), Some(100));
        assert_eq!(period(ActuationProfile::select(15.0)), Some(50));
        assert_eq!(period(ActuationProfile::select(5.0)), Some(25));
    }

    #[test]
    fn test_motor_runs_in_every_blink_band() {
        for distance in [46.90, 35.0, 27.0, 20.0, 13.0, 2.0] {
            assert!(ActuationProfile::select(distance).motor_on);
        }
    }

    #[test]
    fn test_near_contact_releases_motor_only() {
        let profile = ActuationProfile::select(1.99);
        assert!(!profile.motor_on);
        assert_eq!(profile.blink, BlinkCommand::Hold);
    }

    #[test]
    fn test_scenario_close_object() {
        // 3.468 cm - what a 204 us echo works out to
        let profile = ActuationProfile::select(3.468);
        assert!(profile.motor_on);
        assert_eq!(profile.blink, BlinkCommand::Period(25));
    }

    proptest! {
        #[test]
        fn prop_select_is_pure(distance in 0.0f32..600.0) {
            prop_assert_eq!(
                ActuationProfile::select(distance),
                ActuationProfile::select(distance)
            );
        }

        #[test]
        fn prop_blink_bands_always_run_motor(distance in 2.0f32..=46.90) {
            prop_assert!(ActuationProfile::select(distance).motor_on);
        }
    }
}
