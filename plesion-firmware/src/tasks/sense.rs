//! Sensing cycle task
//!
//! Runs the measure -> filter -> respond loop: trigger the sonar, classify
//! the capture, pick an actuation profile, and hand the blink command to
//! the blink task. The motor pin is driven directly from here; the LED and
//! buzzer belong to the blink task.

use defmt::{debug, info};
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Input, Level, Output};
use embassy_time::{Duration, Timer};

use plesion_core::capture::EchoCapture;
use plesion_core::filter::{DistanceFilter, Reading};
use plesion_core::profile::{ActuationProfile, BlinkCommand};
use plesion_core::report;
use plesion_drivers::presence::PresenceSensor;
use plesion_drivers::sonar::HcSr04;

use crate::channels::{console, BLINK_CMD, STARTUP_COMPLETE};

/// Pause between ranging cycles
const CYCLE_PAUSE: Duration = Duration::from_millis(20);

/// Sensing task - one ranging cycle per iteration
#[embassy_executor::task]
pub async fn sense_task(
    trigger: Output<'static>,
    echo: ExtiInput<'static>,
    ir_pin: Input<'static>,
    mut motor: Output<'static>,
) {
    info!("Sense task started");

    // Hold the first cycle until the startup indication has played
    STARTUP_COMPLETE.wait().await;

    let mut sonar = HcSr04::new(trigger, echo);
    let mut ir = PresenceSensor::new_active_low(ir_pin);
    let mut capture = EchoCapture::new();
    let mut filter = DistanceFilter::new();

    loop {
        let infrared_detected = ir.is_detected();
        if infrared_detected {
            console(report::static_line(report::IR_NEARBY)).await;
        }

        sonar.range(&mut capture).await;

        match filter.evaluate(&capture, infrared_detected) {
            Reading::NoEcho => {
                console(report::static_line(report::NO_ECHO)).await;
                // Lost echo releases everything: motor off, blink stopped
                motor.set_low();
                BLINK_CMD.signal(BlinkCommand::Off);
            }
            Reading::OutOfRange => {
                // Skipped cycle; outputs keep the last accepted profile
                console(report::static_line(report::OUT_OF_RANGE)).await;
            }
            Reading::Ghost { glitch_suppressed } => {
                if glitch_suppressed {
                    console(report::static_line(report::GLITCH_IGNORED)).await;
                }
                console(report::static_line(report::GHOST_IGNORED)).await;
            }
            Reading::Valid {
                distance_cm,
                glitch_suppressed,
            } => {
                if glitch_suppressed {
                    console(report::static_line(report::GLITCH_IGNORED)).await;
                }
                console(report::distance_line(distance_cm)).await;

                let profile = ActuationProfile::select(distance_cm);
                debug!(
                    "Distance {} cm -> motor {}, blink {:?}",
                    distance_cm, profile.motor_on, profile.blink
                );
                motor.set_level(Level::from(profile.motor_on));
                BLINK_CMD.signal(profile.blink);
            }
        }

        Timer::after(CYCLE_PAUSE).await;
    }
}
