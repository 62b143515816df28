//! Inter-task communication channels
//!
//! Static embassy-sync channels and signals tying the sensing, blink, and
//! console tasks together. Ownership of mutable state never crosses a
//! task boundary; only commands and rendered lines do.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use plesion_core::profile::BlinkCommand;
use plesion_core::report::ConsoleLine;

/// Console lines waiting for the UART writer
const CONSOLE_CHANNEL_SIZE: usize = 8;

/// Rendered console lines, drained by the UART writer task
pub static CONSOLE_CHANNEL: Channel<CriticalSectionRawMutex, ConsoleLine, CONSOLE_CHANNEL_SIZE> =
    Channel::new();

/// Blink command from the latest accepted sensing cycle
pub static BLINK_CMD: Signal<CriticalSectionRawMutex, BlinkCommand> = Signal::new();

/// Raised once the startup indication has finished playing
pub static STARTUP_COMPLETE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Queue a console line for transmission
pub async fn console(line: ConsoleLine) {
    CONSOLE_CHANNEL.send(line).await;
}
