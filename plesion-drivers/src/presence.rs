//! Infrared presence detector
//!
//! Wraps a digital obstacle-detector output (a VMA330-style reflective IR
//! module). These boards pull their output LOW when something is in front
//! of them, so the wrapper maps pin level to a logical "detected" flag.

use embedded_hal::digital::InputPin;

/// Digital presence input with configurable polarity
pub struct PresenceSensor<PIN> {
    pin: PIN,
    /// If true, detection pulls the pin LOW
    active_low: bool,
}

impl<PIN: InputPin> PresenceSensor<PIN> {
    pub fn new(pin: PIN, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Detector that pulls its output low on detection (the common case)
    pub fn new_active_low(pin: PIN) -> Self {
        Self::new(pin, true)
    }

    /// Sample the detector once
    ///
    /// A pin read error degrades to "not detected" so a flaky line never
    /// fabricates presence.
    pub fn is_detected(&mut self) -> bool {
        if self.active_low {
            self.pin.is_low().unwrap_or(false)
        } else {
            self.pin.is_high().unwrap_or(false)
        }
    }
}
