//! Device model and discovery.
//!
//! HID enumeration reports one entry per (interface, usage page). Discovery
//! folds those entries into one [`DeviceDescriptor`] per physical device.

use crate::registry::{self, DeviceType, RAZER_VID};
use crate::transport::{HidBackend, HidDeviceEntry};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// One HID interface of a physical device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceHandle {
    /// Platform path passed to `open_path`.
    pub path: String,
    /// USB interface number, -1 when the platform does not report one.
    pub interface_number: i32,
}

/// Outcome of the most recent exchange with a device.
///
/// Replaced as a whole after every exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExchangeDiagnostics {
    pub ok: bool,
    /// Label of the command that produced this record.
    pub command: String,
    /// Interface that produced the accepted response.
    pub interface: Option<i32>,
    /// Interface numbers tried, in order.
    pub attempted_interfaces: Vec<i32>,
    /// Most recent I/O error messages, oldest first, at most five.
    pub io_errors: Vec<String>,
    /// Attempts that failed before the interface opened.
    pub open_failed_count: usize,
}

impl ExchangeDiagnostics {
    /// True when every attempted interface failed to open.
    ///
    /// This is the signature of a missing OS permission grant rather than a
    /// sleeping or disconnected device.
    pub fn is_full_open_failure(&self) -> bool {
        !self.ok
            && !self.attempted_interfaces.is_empty()
            && self.open_failed_count >= self.attempted_interfaces.len()
    }
}

/// A physical Razer device, aggregated from its HID interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceDescriptor {
    pub name: String,
    pub product_id: u16,
    pub device_type: DeviceType,
    /// `None` for descriptors built by hand rather than by discovery.
    pub transaction_id: Option<u8>,
    pub interfaces: Vec<InterfaceHandle>,
    /// Path of the interface that last produced a valid response.
    pub preferred_path: Option<String>,
    /// Set by the transport after each exchange.
    pub diagnostics: Option<ExchangeDiagnostics>,
}

impl DeviceDescriptor {
    /// Build a descriptor for a product ID using the registry.
    pub fn from_product_id(product_id: u16) -> Self {
        Self {
            name: registry::device_name(product_id),
            product_id,
            device_type: registry::device_type(product_id),
            transaction_id: Some(registry::transaction_id(product_id)),
            interfaces: Vec::new(),
            preferred_path: None,
            diagnostics: None,
        }
    }

    /// Add an interface unless its path is already present.
    pub fn add_interface(&mut self, path: String, interface_number: i32) -> bool {
        if self.interfaces.iter().any(|i| i.path == path) {
            return false;
        }
        self.interfaces.push(InterfaceHandle {
            path,
            interface_number,
        });
        true
    }

    pub fn last_ok(&self) -> bool {
        self.diagnostics.as_ref().is_some_and(|d| d.ok)
    }
}

type GroupKey = (Option<String>, Option<String>, u16);

/// Discover all connected Razer devices listed in the registry.
///
/// Never fails: an enumeration error is logged and yields an empty list, and
/// malformed entries are skipped individually.
pub fn scan(backend: &dyn HidBackend) -> Vec<DeviceDescriptor> {
    debug!("Starting HID device enumeration");
    let entries = match backend.enumerate(RAZER_VID) {
        Ok(entries) => entries,
        Err(e) => {
            error!(error = %e, "Error enumerating HID devices");
            return Vec::new();
        }
    };

    let devices = group_entries(entries);
    debug!(count = devices.len(), "Device enumeration complete");
    devices
}

/// Fold raw enumeration entries into descriptors, preserving first-seen order.
fn group_entries(entries: Vec<HidDeviceEntry>) -> Vec<DeviceDescriptor> {
    let mut devices: Vec<DeviceDescriptor> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();

    for entry in entries {
        let (Some(pid), Some(path)) = (entry.product_id, entry.path) else {
            warn!(
                pid = ?entry.product_id,
                interface = entry.interface_number,
                "Skipping malformed HID entry"
            );
            continue;
        };
        if !registry::is_known(pid) {
            continue;
        }

        let key = (entry.serial_number, entry.product_string, pid);
        let slot = *index.entry(key).or_insert_with(|| {
            let device = DeviceDescriptor::from_product_id(pid);
            info!(
                name = %device.name,
                pid = format_args!("0x{:04X}", pid),
                device_type = %device.device_type,
                "Found Razer device"
            );
            devices.push(device);
            devices.len() - 1
        });

        // One path shows up once per usage page.
        devices[slot].add_interface(path, entry.interface_number);
    }

    devices
}
