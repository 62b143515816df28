//! Plesion - Ultrasonic Proximity Alert Firmware
//!
//! Main firmware binary for STM32F103 (Blue Pill) boards: an HC-SR04
//! ultrasonic ranger cross-checked by an infrared detector, driving a
//! vibration motor, LED, and buzzer that escalate as an object closes in.
//!
//! Named after the Greek "plesion" (πλησίον) meaning "near".

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::usart::{Config as UartConfig, UartTx};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use plesion_core::report;

use crate::channels::console;

mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Plesion firmware starting...");

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    // HC-SR04: PA0 trigger, PA1 echo (EXTI line 1)
    let trigger = Output::new(p.PA0, Level::Low, Speed::Low);
    let echo = ExtiInput::new(p.PA1, p.EXTI1, Pull::None);

    // Infrared detector on PA5: open-collector output, pulled up, low on detect
    let ir_pin = Input::new(p.PA5, Pull::Up);

    // Actuators all start released
    let motor = Output::new(p.PA4, Level::Low, Speed::Low);
    let led = Output::new(p.PA6, Level::Low, Speed::Low);
    let buzzer = Output::new(p.PA7, Level::Low, Speed::Low);

    // Console on USART1 TX (PA9), 9600 8N1
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = 9600;
    let tx = UartTx::new(p.USART1, p.PA9, p.DMA1_CH4, uart_config).unwrap();

    info!("UART console initialized");

    spawner.spawn(tasks::console_task(tx)).unwrap();
    spawner.spawn(tasks::blink_task(led, buzzer)).unwrap();
    spawner
        .spawn(tasks::sense_task(trigger, echo, ir_pin, motor))
        .unwrap();

    console(report::static_line(report::STARTUP_BANNER)).await;
    console(report::static_line(report::SYSTEM_READY)).await;

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
