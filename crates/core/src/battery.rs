//! Battery level and charging status queries (command class 0x07).
//!
//! Each query retries once after [`QUERY_RETRY_DELAY`] on top of the
//! per-interface retries inside [`exchange`]. A wireless receiver often
//! answers the first request after a reconnect with garbage.

use crate::device::DeviceDescriptor;
use crate::report::RazerRequest;
use crate::transport::{exchange, HidBackend};
use std::time::Duration;
use tracing::{debug, error, warn};

/// Power command class.
pub const POWER_CLASS: u8 = 0x07;
/// Get battery level: arguments[1] = level scaled to 0..=255.
pub const GET_BATTERY_LEVEL: u8 = 0x80;
/// Get charging status: arguments[1] = nonzero while charging.
pub const GET_CHARGING_STATUS: u8 = 0x84;

/// Transaction ID used when the descriptor carries none.
pub const DEFAULT_TRANSACTION_ID: u8 = 0x1F;
/// Delay before the second query attempt.
pub const QUERY_RETRY_DELAY: Duration = Duration::from_millis(500);
/// Query attempts per call.
pub const QUERY_ATTEMPTS: usize = 2;

/// Sentinel returned by [`battery_level`] when the device did not answer.
pub const BATTERY_UNAVAILABLE: i32 = -1;

/// Response index of arguments[1], behind the report ID prefix.
const VALUE_INDEX: usize = 10;

/// Convert the raw 0..=255 battery byte into a percentage.
pub fn scale_battery(raw: u8) -> u8 {
    let percent = (f64::from(raw) / 255.0 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

fn query_value(
    backend: &dyn HidBackend,
    device: &mut DeviceDescriptor,
    command_id: u8,
    label: &str,
) -> Option<u8> {
    let transaction_id = device.transaction_id.unwrap_or(DEFAULT_TRANSACTION_ID);
    let report = match RazerRequest::new(
        transaction_id,
        POWER_CLASS,
        command_id,
        0x02,
        vec![0x00, 0x00],
    )
    .encode()
    {
        Ok(report) => report,
        Err(e) => {
            error!(label, error = %e, "Could not build request");
            return None;
        }
    };

    for attempt in 1..=QUERY_ATTEMPTS {
        if let Some(response) = exchange(backend, device, &report, label) {
            if let Some(&value) = response.get(VALUE_INDEX) {
                return Some(value);
            }
            debug!(label, len = response.len(), "Response has no value byte");
        }
        if attempt < QUERY_ATTEMPTS {
            debug!(label, "First attempt failed, retrying in 500ms");
            backend.pause(QUERY_RETRY_DELAY);
        }
    }

    warn!(label, "All attempts failed");
    None
}

/// Battery percentage, or `None` if the device did not answer.
pub fn read_battery_level(backend: &dyn HidBackend, device: &mut DeviceDescriptor) -> Option<u8> {
    let raw = query_value(backend, device, GET_BATTERY_LEVEL, "get_battery_level")?;
    let level = scale_battery(raw);
    debug!(raw = format_args!("0x{:02X}", raw), level, "Battery level");
    Some(level)
}

/// Battery percentage 0..=100, or [`BATTERY_UNAVAILABLE`].
pub fn battery_level(backend: &dyn HidBackend, device: &mut DeviceDescriptor) -> i32 {
    read_battery_level(backend, device).map_or(BATTERY_UNAVAILABLE, i32::from)
}

/// Charging state, or `None` if the device did not answer.
pub fn read_charging_status(
    backend: &dyn HidBackend,
    device: &mut DeviceDescriptor,
) -> Option<bool> {
    let raw = query_value(backend, device, GET_CHARGING_STATUS, "get_charging_status")?;
    let charging = raw > 0;
    debug!(raw = format_args!("0x{:02X}", raw), charging, "Charging status");
    Some(charging)
}

/// Charging state; an unreachable device reads as not charging.
pub fn charging_status(backend: &dyn HidBackend, device: &mut DeviceDescriptor) -> bool {
    read_charging_status(backend, device).unwrap_or(false)
}
