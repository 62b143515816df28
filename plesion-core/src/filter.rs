//! Distance filtering
//!
//! Converts a completed echo capture into a validated distance reading.
//! Three rejection rules run in a fixed order: out-of-range gate,
//! sudden-drop glitch suppression, infrared cross-validation. The order
//! matters: the drop counter keeps advancing on cycles that are later
//! rejected as ghosts, so a sustained real drop is still accepted after
//! three cycles even while the infrared sensor disagrees.

use crate::capture::EchoCapture;

/// Speed of sound, as centimeters per microsecond of round trip
pub const SOUND_CM_PER_US: f32 = 0.034;

/// Readings beyond this are echo errors (cm)
pub const MAX_RANGE_CM: f32 = 500.0;

/// A reading below `DROP_TO_CM` arriving while the previous accepted
/// reading was above `DROP_FROM_CM` counts as a sudden drop (cm)
pub const DROP_FROM_CM: f32 = 100.0;
pub const DROP_TO_CM: f32 = 80.0;

/// Sudden drops are held off until this many consecutive cycles agree
pub const DROP_CONFIRM_COUNT: u8 = 3;

/// Ultrasonic readings beyond this need infrared corroboration (cm)
pub const GHOST_RANGE_CM: f32 = 80.0;

/// Convert a pulse width in microsecond ticks to centimeters
///
/// The echo line is high for the full round trip, so the one-way distance
/// is half the tick count times the speed of sound.
pub fn distance_from_ticks(ticks: u32) -> f32 {
    (ticks as f32 * SOUND_CM_PER_US) / 2.0
}

/// Outcome of one ranging cycle
///
/// These are classified sensing results, not errors; every variant maps to
/// a console line and an actuator policy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reading {
    /// Capture never completed; target out of detectable range
    NoEcho,
    /// Distance above `MAX_RANGE_CM` or an exact-zero echo error
    OutOfRange,
    /// Infrared disagrees with a long-range ultrasonic reading
    Ghost {
        /// The sudden-drop rule fired earlier in this same cycle
        glitch_suppressed: bool,
    },
    /// Accepted distance, ready for actuation
    Valid {
        distance_cm: f32,
        /// The raw reading was a suspected glitch; `distance_cm` is the
        /// previous accepted value held in its place
        glitch_suppressed: bool,
    },
}

/// Cross-cycle filter state
///
/// One instance lives for the whole run; the sensing loop feeds it one
/// capture per cycle.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DistanceFilter {
    previous_distance_cm: f32,
    consecutive_drops: u8,
}

impl DistanceFilter {
    pub const fn new() -> Self {
        Self {
            previous_distance_cm: 0.0,
            consecutive_drops: 0,
        }
    }

    /// Last accepted distance (0.0 until the first accept)
    pub fn previous_distance_cm(&self) -> f32 {
        self.previous_distance_cm
    }

    /// Current run of consecutive suspected drops
    pub fn consecutive_drops(&self) -> u8 {
        self.consecutive_drops
    }

    /// Classify one capture
    ///
    /// The range gate runs before any state is touched; the infrared check
    /// runs after the drop counter has been updated and sees the
    /// post-suppression distance. See the module docs.
    pub fn evaluate(&mut self, capture: &EchoCapture, infrared_detected: bool) -> Reading {
        let width = match capture.pulse_width_ticks() {
            Some(width) => width,
            None => return Reading::NoEcho,
        };

        let mut distance_cm = distance_from_ticks(width);

        if distance_cm > MAX_RANGE_CM || distance_cm == 0.0 {
            return Reading::OutOfRange;
        }

        // Sudden-drop suppression: hold the previous value until the drop
        // has repeated DROP_CONFIRM_COUNT cycles in a row.
        let mut glitch_suppressed = false;
        if self.previous_distance_cm > DROP_FROM_CM && distance_cm < DROP_TO_CM {
            self.consecutive_drops += 1;
            if self.consecutive_drops < DROP_CONFIRM_COUNT {
                distance_cm = self.previous_distance_cm;
                glitch_suppressed = true;
            } else {
                self.consecutive_drops = 0;
            }
        } else {
            self.consecutive_drops = 0;
        }

        if !infrared_detected && distance_cm > GHOST_RANGE_CM {
            return Reading::Ghost { glitch_suppressed };
        }

        self.previous_distance_cm = distance_cm;
        Reading::Valid {
            distance_cm,
            glitch_suppressed,
        }
    }
}

impl Default for DistanceFilter {
    fn default() -> Self {
        Self::new()
    }
}
