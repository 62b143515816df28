//! Blink output task
//!
//! Plays the power-on indication, then advances the LED and buzzer blink
//! timers at 1 kHz. Runs independently of the sensing cycle so blink
//! timing stays stable no matter how long a cycle takes.

use defmt::info;
use embassy_futures::select::{select, Either};
use embassy_stm32::gpio::{Level, Output};
use embassy_time::{Duration, Instant, Ticker, Timer};

use plesion_core::blink::{BlinkScheduler, BlinkUpdate};

use crate::channels::{BLINK_CMD, STARTUP_COMPLETE};

/// Scheduler tick interval
const TICK_INTERVAL: Duration = Duration::from_millis(1);

/// On/off time of one startup flash
const STARTUP_FLASH: Duration = Duration::from_millis(45);

/// Silence between the two startup flash groups
const STARTUP_PAUSE: Duration = Duration::from_millis(135);

/// Length of the final steady startup tone
const STARTUP_HOLD: Duration = Duration::from_millis(180);

/// Blink task - startup indication, then the 1 kHz timer loop
#[embassy_executor::task]
pub async fn blink_task(mut led: Output<'static>, mut buzzer: Output<'static>) {
    info!("Blink task started");

    play_startup_pattern(&mut led, &mut buzzer).await;
    STARTUP_COMPLETE.signal(());

    let mut scheduler = BlinkScheduler::new();
    let mut ticker = Ticker::every(TICK_INTERVAL);
    let start = Instant::now();

    loop {
        match select(ticker.next(), BLINK_CMD.wait()).await {
            Either::First(()) => {
                let now_ms = start.elapsed().as_millis() as u32;
                apply(&mut led, &mut buzzer, scheduler.tick(now_ms));
            }
            Either::Second(command) => {
                apply(&mut led, &mut buzzer, scheduler.apply(command));
            }
        }
    }
}

/// Push scheduler level changes out to the pins
fn apply(led: &mut Output<'static>, buzzer: &mut Output<'static>, update: BlinkUpdate) {
    if let Some(on) = update.led {
        led.set_level(Level::from(on));
    }
    if let Some(on) = update.buzzer {
        buzzer.set_level(Level::from(on));
    }
}

/// Three short flashes, a pause, two more, then a long steady tone
///
/// LED and buzzer fire together so a missing speaker or LED is obvious at
/// power-on.
async fn play_startup_pattern(led: &mut Output<'static>, buzzer: &mut Output<'static>) {
    for _ in 0..3 {
        flash(led, buzzer, STARTUP_FLASH).await;
    }

    Timer::after(STARTUP_PAUSE).await;

    for _ in 0..2 {
        flash(led, buzzer, STARTUP_FLASH).await;
    }

    led.set_high();
    buzzer.set_high();
    Timer::after(STARTUP_HOLD).await;
    led.set_low();
    buzzer.set_low();
}

/// One on/off flash of both indicators
async fn flash(led: &mut Output<'static>, buzzer: &mut Output<'static>, width: Duration) {
    led.set_high();
    buzzer.set_high();
    Timer::after(width).await;
    led.set_low();
    buzzer.set_low();
    Timer::after(width).await;
}
