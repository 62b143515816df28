//! Serial console messages
//!
//! The exact message text is part of the device's observable behavior:
//! host-side tooling greps these lines, so they are defined (and tested)
//! here rather than inline in the firmware tasks.

use core::fmt::Write;

use heapless::String;

/// One rendered console line, without the trailing newline
pub type ConsoleLine = String<64>;

pub const STARTUP_BANNER: &str = "Ultrasonic Sensor & IR Initialized";
pub const SYSTEM_READY: &str = "System ready.";
pub const IR_NEARBY: &str = "IR Sensor: Object detected nearby!";
pub const NO_ECHO: &str = "No echo detected.";
pub const OUT_OF_RANGE: &str = "Distance too far or echo error. Ignored.";
pub const GLITCH_IGNORED: &str = "Glitch: Sudden drop detected. Ignored.";
pub const GHOST_IGNORED: &str = "Ghost? IR not triggered. Ignoring ultrasonic (>80cm).";

/// Render the accepted-distance line, e.g. `Distance: 3.47 cm`
pub fn distance_line(distance_cm: f32) -> ConsoleLine {
    let mut line = ConsoleLine::new();
    // 64 bytes always fits the formatted value; the Err arm is unreachable
    let _ = write!(line, "Distance: {:.2} cm", distance_cm);
    line
}

/// Copy a fixed message into an owned console line
pub fn static_line(text: &str) -> ConsoleLine {
    let mut line = ConsoleLine::new();
    let _ = line.push_str(text);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_line_rounds_to_two_places() {
        assert_eq!(distance_line(3.468).as_str(), "Distance: 3.47 cm");
        assert_eq!(distance_line(150.0).as_str(), "Distance: 150.00 cm");
        assert_eq!(distance_line(0.034).as_str(), "Distance: 0.03 cm");
    }

    #[test]
    fn test_distance_line_from_capture_ticks() {
        // 204 us of round trip, the worked example: (204 * 0.034) / 2 = 3.468
        let distance_cm = crate::filter::distance_from_ticks(204);
        assert_eq!(distance_line(distance_cm).as_str(), "Distance: 3.47 cm");
    }

    #[test]
    fn test_static_line_copies_text() {
        assert_eq!(static_line(NO_ECHO).as_str(), "No echo detected.");
    }
}
