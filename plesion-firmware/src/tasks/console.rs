//! Serial console writer task
//!
//! Drains queued lines and writes them to the UART one at a time, CRLF
//! terminated to match common serial terminals.

use defmt::{info, warn};
use embassy_stm32::mode::Async;
use embassy_stm32::usart::UartTx;

use crate::channels::CONSOLE_CHANNEL;

/// Console TX task - writes queued lines to USART1
#[embassy_executor::task]
pub async fn console_task(mut tx: UartTx<'static, Async>) {
    info!("Console task started");

    loop {
        let line = CONSOLE_CHANNEL.receive().await;

        if tx.write(line.as_bytes()).await.is_err() || tx.write(b"\r\n").await.is_err() {
            warn!("Console write failed");
        }
    }
}
