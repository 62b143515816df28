//! Board-agnostic core logic for the proximity alert firmware
//!
//! Everything with real decision state lives here, independent of the
//! hardware it runs on:
//!
//! - Echo pulse capture state machine
//! - Distance filtering (glitch suppression, infrared cross-check)
//! - Distance-to-actuation profile mapping
//! - Blink timers for the LED and buzzer
//! - Serial console message catalog

#![no_std]
#![deny(unsafe_code)]

pub mod blink;
pub mod capture;
pub mod filter;
pub mod profile;
pub mod report;
