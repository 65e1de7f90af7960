//! razer-battery-core: Razer HID report protocol, device discovery, and
//! battery monitoring.
//!
//! This crate talks to Razer wireless peripherals through 90-byte USB HID
//! feature reports to read battery level and charging state.

pub mod battery;
pub mod device;
pub mod error;
pub mod hid;
#[cfg(test)]
mod integration_tests;
pub mod monitor;
pub mod registry;
pub mod report;
pub mod settings;
pub mod transport;

pub use registry::RAZER_VID;
