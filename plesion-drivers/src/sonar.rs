//! HC-SR04 ultrasonic ranging front end
//!
//! Owns the trigger output and echo input and runs one ranging cycle: a
//! 10 us trigger pulse, then a fixed observation window during which both
//! echo edges are timestamped into the caller's capture. The cycle always
//! consumes the full window, so the sensing loop paces evenly whether or
//! not an echo arrives.

use embassy_time::{with_deadline, Duration, Instant, Timer};
use embedded_hal::digital::OutputPin;
use embedded_hal_async::digital::Wait;

use plesion_core::capture::{EchoCapture, Edge};

/// Trigger pulse width
const TRIGGER_PULSE: Duration = Duration::from_micros(10);

/// How long to wait for both echo edges
///
/// 50 ms of round trip covers well beyond the 500 cm range gate; anything
/// still missing after that is reported as no echo.
const OBSERVATION_WINDOW: Duration = Duration::from_millis(50);

/// HC-SR04 driver
///
/// Generic over the trigger output and the echo input; on the target the
/// echo pin is an EXTI input whose `Wait` impl resolves on line edges.
pub struct HcSr04<TRIG, ECHO> {
    trigger: TRIG,
    echo: ECHO,
}

impl<TRIG: OutputPin, ECHO: Wait> HcSr04<TRIG, ECHO> {
    pub fn new(mut trigger: TRIG, echo: ECHO) -> Self {
        let _ = trigger.set_low();
        Self { trigger, echo }
    }

    /// Run one ranging cycle, arming and filling the caller's capture
    ///
    /// Never fails: a lost echo simply leaves the capture incomplete, which
    /// the filter classifies as the no-echo outcome.
    pub async fn range(&mut self, capture: &mut EchoCapture) {
        capture.arm();

        let _ = self.trigger.set_high();
        Timer::after(TRIGGER_PULSE).await;
        let _ = self.trigger.set_low();

        let deadline = Instant::now() + OBSERVATION_WINDOW;
        let _ = with_deadline(deadline, capture_edges(&mut self.echo, capture)).await;

        // Consume the rest of the window so cycle pacing stays fixed
        Timer::at(deadline).await;
    }
}

/// Timestamp the two echo edges into the capture
async fn capture_edges<ECHO: Wait>(echo: &mut ECHO, capture: &mut EchoCapture) {
    if echo.wait_for_rising_edge().await.is_err() {
        return;
    }
    capture.on_edge(elapsed_ticks(), Edge::Rising);

    if echo.wait_for_falling_edge().await.is_err() {
        return;
    }
    capture.on_edge(elapsed_ticks(), Edge::Falling);
}

/// Free-running microsecond timestamp
///
/// Wraps every ~71 minutes, far beyond any single pulse; the capture's
/// wrapping subtraction absorbs the rollover.
fn elapsed_ticks() -> u32 {
    Instant::now().as_micros() as u32
}
