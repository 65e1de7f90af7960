//! Razer feature-report encoding and response validation.
//!
//! Every request is a fixed 90-byte report:
//!
//! | byte   | meaning                          |
//! |--------|----------------------------------|
//! | 0      | status (0x00 on requests)        |
//! | 1      | transaction ID                   |
//! | 2..=4  | reserved                         |
//! | 5      | declared data size               |
//! | 6      | command class                    |
//! | 7      | command ID                       |
//! | 8..=87 | arguments (zero padded)          |
//! | 88     | checksum: XOR of bytes 2..=87    |
//! | 89     | reserved                         |
//!
//! Responses come back with the same layout behind a one-byte report ID,
//! so every response index is shifted by one.

use crate::error::{Error, Result};
use crate::registry::DeviceType;
use tracing::{debug, warn};

/// Length of a request report (without the report ID prefix).
pub const REPORT_LEN: usize = 90;
/// Maximum number of argument bytes a report can carry.
pub const MAX_ARGUMENTS: usize = 80;
/// Report ID prefixed to every feature report on the wire.
pub const REPORT_ID: u8 = 0x00;

const ARGS_OFFSET: usize = 8;
const CHECKSUM_START: usize = 2;
const CHECKSUM_END: usize = 88;
const CHECKSUM_INDEX: usize = 88;

/// Responses of this length or shorter cannot carry a status and payload.
const MIN_RESPONSE_LEN: usize = 10;

/// Effect command constants.
pub mod effects {
    /// Persist the effect in the device's variable store.
    pub const VARSTORE: u8 = 0x01;

    pub const STATIC: u8 = 0x01;
    pub const BREATHING: u8 = 0x02;
    pub const WAVE: u8 = 0x03;
    pub const REACTIVE: u8 = 0x04;

    /// Mouse scroll wheel LED.
    pub const MOUSE_SCROLL_WHEEL_LED: u8 = 0x01;
    /// Keyboard backlight LED.
    pub const KBD_BACKLIGHT_LED: u8 = 0x05;

    pub const CMD_CLASS: u8 = 0x0F;
    pub const CMD_ID: u8 = 0x02;
    pub const DATA_SIZE: u8 = 9;
}

/// Status byte reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    New,
    Busy,
    Success,
    Failure,
    Timeout,
    NotSupported,
}

impl Status {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0x00 => Some(Self::New),
            0x01 => Some(Self::Busy),
            0x02 => Some(Self::Success),
            0x03 => Some(Self::Failure),
            0x04 => Some(Self::Timeout),
            0x05 => Some(Self::NotSupported),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::New => "new/pending",
            Self::Busy => "busy",
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Timeout => "timeout",
            Self::NotSupported => "not supported",
        }
    }

    /// Whether the device explicitly rejected the request.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Busy | Self::Failure | Self::Timeout | Self::NotSupported
        )
    }
}

/// A Razer control request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RazerRequest {
    /// Per-product transaction ID.
    pub transaction_id: u8,
    pub command_class: u8,
    pub command_id: u8,
    /// Declared data size (byte 5), independent of `arguments.len()`.
    pub data_size: u8,
    pub arguments: Vec<u8>,
}

impl RazerRequest {
    pub fn new(
        transaction_id: u8,
        command_class: u8,
        command_id: u8,
        data_size: u8,
        arguments: Vec<u8>,
    ) -> Self {
        Self {
            transaction_id,
            command_class,
            command_id,
            data_size,
            arguments,
        }
    }

    /// Encode into the 90-byte report with its checksum filled in.
    pub fn encode(&self) -> Result<[u8; REPORT_LEN]> {
        if self.arguments.len() > MAX_ARGUMENTS {
            return Err(Error::TooManyArguments {
                len: self.arguments.len(),
                max: MAX_ARGUMENTS,
            });
        }

        let mut buf = [0u8; REPORT_LEN];
        buf[1] = self.transaction_id;
        buf[5] = self.data_size;
        buf[6] = self.command_class;
        buf[7] = self.command_id;
        buf[ARGS_OFFSET..ARGS_OFFSET + self.arguments.len()].copy_from_slice(&self.arguments);
        buf[CHECKSUM_INDEX] = calculate_checksum(&buf);
        Ok(buf)
    }
}

/// Build and encode a request in one step.
pub fn construct_report(
    transaction_id: u8,
    command_class: u8,
    command_id: u8,
    data_size: u8,
    arguments: &[u8],
) -> Result<[u8; REPORT_LEN]> {
    RazerRequest::new(
        transaction_id,
        command_class,
        command_id,
        data_size,
        arguments.to_vec(),
    )
    .encode()
}

/// Narrow wider integers to argument bytes, rejecting anything outside 0..=255.
pub fn arguments_from_values(values: &[i64]) -> Result<Vec<u8>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            u8::try_from(v).map_err(|_| {
                Error::InvalidArgument(format!("argument {i} = {v} is outside 0..=255"))
            })
        })
        .collect()
}

/// XOR of bytes 2..=87. Positions past the end of `buf` are skipped.
pub fn calculate_checksum(buf: &[u8]) -> u8 {
    buf.iter()
        .take(CHECKSUM_END)
        .skip(CHECKSUM_START)
        .fold(0, |acc, b| acc ^ b)
}

/// Effect argument block: `[VARSTORE, led, effect, 0, 0, 1]` followed by `extra`.
pub fn build_arguments(effect_code: u8, led_id: u8, extra: &[u8]) -> Vec<u8> {
    let mut args = vec![effects::VARSTORE, led_id, effect_code, 0x00, 0x00, 0x01];
    args.extend_from_slice(extra);
    args
}

/// Effect request for a device, addressing the LED its class exposes.
pub fn effect_request(
    transaction_id: u8,
    device_type: DeviceType,
    effect_code: u8,
    extra: &[u8],
) -> RazerRequest {
    let led = match device_type {
        DeviceType::Keyboard => effects::KBD_BACKLIGHT_LED,
        _ => effects::MOUSE_SCROLL_WHEEL_LED,
    };
    RazerRequest::new(
        transaction_id,
        effects::CMD_CLASS,
        effects::CMD_ID,
        effects::DATA_SIZE,
        build_arguments(effect_code, led, extra),
    )
}

/// Decide whether a response (with its report ID prefix) is usable.
///
/// Only explicit rejections and truncated responses are refused. A status of
/// "new" or an unrecognized code passes since some firmware never fills it in,
/// and a checksum mismatch is logged without rejecting the data.
pub fn validate_response(response: &[u8], label: &str) -> bool {
    if response.len() < MIN_RESPONSE_LEN {
        warn!(label, len = response.len(), "Response too short");
        return false;
    }

    let status_byte = response[1];
    match Status::from_byte(status_byte) {
        Some(Status::Success) => {}
        Some(status) if status.is_rejection() => {
            warn!(
                label,
                status = status.name(),
                code = format_args!("0x{:02X}", status_byte),
                "Device rejected request"
            );
            return false;
        }
        other => {
            debug!(
                label,
                status = other.map_or("unknown", |s| s.name()),
                code = format_args!("0x{:02X}", status_byte),
                "Response status not set, accepting"
            );
        }
    }

    if response.len() >= REPORT_LEN {
        let report = &response[1..];
        let computed = calculate_checksum(report);
        let expected = report[CHECKSUM_INDEX];
        if computed != expected {
            warn!(
                label,
                computed = format_args!("0x{:02X}", computed),
                expected = format_args!("0x{:02X}", expected),
                "Checksum mismatch (non-fatal)"
            );
        }
    }

    true
}
