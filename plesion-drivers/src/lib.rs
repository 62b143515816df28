//! Hardware front ends for the proximity alert firmware
//!
//! Concrete sensor drivers, generic over `embedded-hal` pin traits, that
//! feed the core pipeline:
//!
//! - HC-SR04 ultrasonic ranging front end
//! - Infrared presence detector input

#![no_std]
#![deny(unsafe_code)]

pub mod presence;
pub mod sonar;
