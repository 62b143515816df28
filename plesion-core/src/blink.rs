//! Asynchronous blink scheduling
//!
//! Each blink-capable output owns a toggle timer advanced by the 1 kHz
//! tick, independent of the sensing loop, so blink timing stays stable no
//! matter how long a sensing cycle takes. A period of zero means the
//! output is forced low and stays there.

use crate::profile::BlinkCommand;

/// Toggle timer for one output
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkTimer {
    period_ms: u32,
    last_toggle_ms: u32,
    output_on: bool,
}

impl BlinkTimer {
    pub const fn new() -> Self {
        Self {
            period_ms: 0,
            last_toggle_ms: 0,
            output_on: false,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn output_on(&self) -> bool {
        self.output_on
    }

    /// Install a new period, returning a level to apply immediately
    ///
    /// Installing zero forces the output low right away rather than on the
    /// next tick. A nonzero period leaves the toggle phase untouched, so a
    /// band change does not restart the blink mid-cycle.
    pub fn install(&mut self, period_ms: u32) -> Option<bool> {
        self.period_ms = period_ms;
        if period_ms == 0 {
            self.output_on = false;
            Some(false)
        } else {
            None
        }
    }

    /// Advance the timer; returns the new output level on a toggle
    ///
    /// `now_ms` comes from a free-running millisecond counter; the elapsed
    /// comparison wraps.
    pub fn tick(&mut self, now_ms: u32) -> Option<bool> {
        if self.period_ms != 0 && now_ms.wrapping_sub(self.last_toggle_ms) >= self.period_ms {
            self.output_on = !self.output_on;
            self.last_toggle_ms = now_ms;
            Some(self.output_on)
        } else {
            None
        }
    }
}

impl Default for BlinkTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Output levels produced by one scheduler step
///
/// `None` means the output keeps its current level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkUpdate {
    pub led: Option<bool>,
    pub buzzer: Option<bool>,
}

/// Blink timers for the LED and buzzer
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkScheduler {
    led: BlinkTimer,
    buzzer: BlinkTimer,
}

impl BlinkScheduler {
    pub const fn new() -> Self {
        Self {
            led: BlinkTimer::new(),
            buzzer: BlinkTimer::new(),
        }
    }

    pub fn led(&self) -> &BlinkTimer {
        &self.led
    }

    pub fn buzzer(&self) -> &BlinkTimer {
        &self.buzzer
    }

    /// Apply a profile's blink command to both timers
    pub fn apply(&mut self, command: BlinkCommand) -> BlinkUpdate {
        match command {
            BlinkCommand::Period(period_ms) => BlinkUpdate {
                led: self.led.install(period_ms),
                buzzer: self.buzzer.install(period_ms),
            },
            BlinkCommand::Off => BlinkUpdate {
                led: self.led.install(0),
                buzzer: self.buzzer.install(0),
            },
            BlinkCommand::Hold => BlinkUpdate::default(),
        }
    }

    /// Advance both timers from the periodic tick
    pub fn tick(&mut self, now_ms: u32) -> BlinkUpdate {
        BlinkUpdate {
            led: self.led.tick(now_ms),
            buzzer: self.buzzer.tick(now_ms),
        }
    }
}

impl Default for BlinkScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_on_period_boundaries() {
        let mut timer = BlinkTimer::new();
        assert_eq!(timer.install(25), None);

        let mut toggles = heapless::Vec::<u32, 8>::new();
        for now_ms in 1..=100 {
            if timer.tick(now_ms).is_some() {
                toggles.push(now_ms).unwrap();
            }
        }
        assert_eq!(&toggles[..], &[25, 50, 75, 100]);
    }

    #[test]
    fn test_alternates_levels() {
        let mut timer = BlinkTimer::new();
        timer.install(10);

        assert_eq!(timer.tick(10), Some(true));
        assert_eq!(timer.tick(20), Some(false));
        assert_eq!(timer.tick(30), Some(true));
    }

    #[test]
    fn test_zero_period_is_idle() {
        let mut timer = BlinkTimer::new();
        for now_ms in 0..1000 {
            assert_eq!(timer.tick(now_ms), None);
        }
    }

    #[test]
    fn test_install_zero_forces_off_immediately() {
        let mut timer = BlinkTimer::new();
        timer.install(25);
        timer.tick(25);
        assert!(timer.output_on());

        assert_eq!(timer.install(0), Some(false));
        assert!(!timer.output_on());
        assert_eq!(timer.tick(50), None);
    }

    #[test]
    fn test_period_change_keeps_phase() {
        let mut timer = BlinkTimer::new();
        timer.install(100);
        timer.tick(100);

        // Switching bands mid-cycle must not restart the toggle phase
        assert_eq!(timer.install(50), None);
        assert_eq!(timer.tick(120), None);
        assert_eq!(timer.tick(150), Some(false));
    }

    #[test]
    fn test_wrapping_tick_counter() {
        let mut timer = BlinkTimer::new();
        timer.install(25);

        // Bring the timer close to the counter wrap, then step past it
        timer.tick(u32::MAX - 10);
        assert_eq!(timer.tick(u32::MAX - 5), None);
        assert_eq!(timer.tick(14), Some(false));
    }

    #[test]
    fn test_scheduler_drives_both_outputs() {
        let mut scheduler = BlinkScheduler::new();
        scheduler.apply(crate::profile::BlinkCommand::Period(25));

        let update = scheduler.tick(25);
        assert_eq!(update.led, Some(true));
        assert_eq!(update.buzzer, Some(true));
    }

    #[test]
    fn test_scheduler_off_forces_both_low() {
        let mut scheduler = BlinkScheduler::new();
        scheduler.apply(crate::profile::BlinkCommand::Period(25));
        scheduler.tick(25);

        let update = scheduler.apply(crate::profile::BlinkCommand::Off);
        assert_eq!(update.led, Some(false));
        assert_eq!(update.buzzer, Some(false));
        assert!(!scheduler.led().output_on());
    }

    #[test]
    fn test_scheduler_hold_changes_nothing() {
        let mut scheduler = BlinkScheduler::new();
        scheduler.apply(crate::profile::BlinkCommand::Period(25));
        scheduler.tick(25);

        let update = scheduler.apply(crate::profile::BlinkCommand::Hold);
        assert_eq!(update, BlinkUpdate::default());
        assert_eq!(scheduler.led().period_ms(), 25);
        assert!(scheduler.led().output_on());
    }
}
