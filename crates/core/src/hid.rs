//! hidapi-backed implementation of the HID boundary.

use crate::error::{Error, Result};
use crate::transport::{HidBackend, HidDeviceEntry, HidHandle};
use hidapi::{HidApi, HidDevice};
use std::ffi::CString;
use std::sync::Mutex;
use tracing::{debug, trace};

/// HID backend over the system hidapi library.
pub struct HidApiBackend {
    api: Mutex<HidApi>,
}

impl HidApiBackend {
    /// Initialize hidapi without enumerating; enumeration happens per scan.
    pub fn new() -> Result<Self> {
        let api = HidApi::new_without_enumerate().map_err(|e| Error::Hid(e.to_string()))?;
        Ok(Self {
            api: Mutex::new(api),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HidApi>> {
        self.api
            .lock()
            .map_err(|_| Error::Hid("hidapi context poisoned".into()))
    }
}

impl HidBackend for HidApiBackend {
    fn enumerate(&self, vendor_id: u16) -> Result<Vec<HidDeviceEntry>> {
        let mut api = self.lock()?;
        api.reset_devices()
            .map_err(|e| Error::Enumeration(e.to_string()))?;
        api.add_devices(vendor_id, 0)
            .map_err(|e| Error::Enumeration(e.to_string()))?;

        let entries: Vec<HidDeviceEntry> = api
            .device_list()
            .filter(|info| info.vendor_id() == vendor_id)
            .map(|info| {
                trace!(
                    pid = format_args!("0x{:04X}", info.product_id()),
                    interface = info.interface_number(),
                    usage_page = format_args!("0x{:04X}", info.usage_page()),
                    path = %info.path().to_string_lossy(),
                    "HID entry"
                );
                HidDeviceEntry {
                    // A path that is not valid UTF-8 cannot be reopened from a String.
                    path: info.path().to_str().ok().map(str::to_owned),
                    product_id: Some(info.product_id()),
                    interface_number: info.interface_number(),
                    serial_number: info.serial_number().map(str::to_owned),
                    product_string: info.product_string().map(str::to_owned),
                }
            })
            .collect();

        debug!(
            vid = format_args!("0x{:04X}", vendor_id),
            count = entries.len(),
            "HID enumeration complete"
        );
        Ok(entries)
    }

    fn open_path(&self, path: &str) -> Result<Box<dyn HidHandle>> {
        let open_err = |reason: String| Error::Open {
            path: path.to_string(),
            reason,
        };
        let c_path = CString::new(path).map_err(|e| open_err(e.to_string()))?;
        let device = self
            .lock()?
            .open_path(&c_path)
            .map_err(|e| open_err(e.to_string()))?;
        Ok(Box::new(HidApiHandle {
            device: Some(device),
        }))
    }
}

/// An open hidapi device. Dropping the inner device closes it.
struct HidApiHandle {
    device: Option<HidDevice>,
}

impl HidApiHandle {
    fn device(&self) -> Result<&HidDevice> {
        self.device
            .as_ref()
            .ok_or_else(|| Error::Hid("device already closed".into()))
    }
}

impl HidHandle for HidApiHandle {
    fn send_feature_report(&mut self, data: &[u8]) -> Result<usize> {
        self.device()?
            .send_feature_report(data)
            .map_err(|e| Error::Hid(format!("send_feature_report: {e}")))?;
        Ok(data.len())
    }

    fn get_feature_report(&mut self, report_id: u8, length: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; length];
        if let Some(first) = buf.first_mut() {
            *first = report_id;
        }
        let n = self
            .device()?
            .get_feature_report(&mut buf)
            .map_err(|e| Error::Hid(format!("get_feature_report: {e}")))?;
        buf.truncate(n);
        Ok(buf)
    }

    fn close(&mut self) -> Result<()> {
        self.device.take();
        Ok(())
    }
}
